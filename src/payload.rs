//! Pre-cap the check output before it is rendered into the submission.
//!
//! iLert caps the whole event payload at 512 KB; the check output dominates
//! the payload, so it is limited to 256 KB up front to leave headroom for
//! the summary, details, and envelope.

pub const MAX_OUTPUT_BYTES: usize = 256_000;
pub const TRUNCATION_PREFIX: &str = "WARNING Truncated:\n";
pub const TRUNCATION_MARKER: &str = "...";

/// Return the check output unchanged if it fits, otherwise the first
/// [`MAX_OUTPUT_BYTES`] bytes wrapped in a warning prefix and ellipsis.
pub fn guard_check_output(output: String) -> String {
    if output.len() <= MAX_OUTPUT_BYTES {
        return output;
    }

    tracing::warn!(
        len = output.len(),
        max = MAX_OUTPUT_BYTES,
        "incident payload truncated"
    );

    // Back off to a char boundary so multi-byte output cannot split.
    let mut end = MAX_OUTPUT_BYTES;
    while !output.is_char_boundary(end) {
        end -= 1;
    }

    format!("{TRUNCATION_PREFIX}{}{TRUNCATION_MARKER}", &output[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_at_limit_is_untouched() {
        let output = "a".repeat(MAX_OUTPUT_BYTES);
        assert_eq!(guard_check_output(output.clone()), output);
    }

    #[test]
    fn short_output_is_identity() {
        assert_eq!(guard_check_output("all good".to_string()), "all good");
    }

    #[test]
    fn oversized_output_is_truncated_with_prefix_and_marker() {
        let output = "a".repeat(MAX_OUTPUT_BYTES + 1);
        let guarded = guard_check_output(output);

        assert!(guarded.starts_with(TRUNCATION_PREFIX));
        assert!(guarded.ends_with(TRUNCATION_MARKER));
        let body = &guarded[TRUNCATION_PREFIX.len()..guarded.len() - TRUNCATION_MARKER.len()];
        assert_eq!(body.len(), MAX_OUTPUT_BYTES);
        assert!(body.bytes().all(|b| b == b'a'));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'é' is two bytes; pad so the cut lands mid-char.
        let mut output = "a".repeat(MAX_OUTPUT_BYTES - 1);
        output.push_str("ééé");
        let guarded = guard_check_output(output);
        assert!(guarded.ends_with(TRUNCATION_MARKER));
    }
}
