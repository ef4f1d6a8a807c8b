//! Prompt builders for the two model passes.
//!
//! Each builder inserts its single argument verbatim into a fixed template. The templates are
//! plain `format!` raw strings; literal braces in the template prose are doubled.

mod investigate;
mod validate;

pub use investigate::question_format;
pub use validate::validation_format;

/// Sentinel both templates ask the model to emit when nothing exploitable was found.
pub const NO_VULNERABILITY_MARKER: &str = "#NoVulnerability found for this question.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_mention_the_marker() {
        assert!(question_format("").contains(NO_VULNERABILITY_MARKER));
        assert!(validation_format("").contains("#NoVulnerability found for this question."));
    }

    #[test]
    fn doubled_braces_render_as_single() {
        let q = question_format("");
        assert!(q.contains("contract Exploit_[Name] is Test {\n"));
        assert!(!q.contains("{{"));
        let v = validation_format("");
        assert!(v.contains("function _calculateReservedAssets() internal view returns (uint256 total) {\n"));
        assert!(!v.contains("}}"));
    }
}
