//! Section-aware cleanup and sorting of `.gitignore` text.
//!
//! This module provides [`organize`], a pure text transformation that
//! deduplicates and sorts ignore rules. It supports two modes:
//!
//! - **Smart** ([`SortMode::Smart`]): the text is split into [`Section`]s, each
//!   an optional block of comment lines followed by rule lines. Rules are
//!   deduplicated and sorted inside their own section, comments are kept
//!   verbatim and sections keep their input order.
//! - **Flat** ([`SortMode::Flat`]): comments and blank lines are dropped and the
//!   remaining rules are deduplicated and sorted as one list.
//!
//! # Section boundaries
//! A blank line always closes the current section. A comment line that
//! follows a rule starts a new section, while a rule that follows a comment
//! stays in the same one:
//!
//! ```text
//! a                 a
//! # New Section  =>
//! b                 # New Section
//!                   b
//! ```
//!
//! Sorting is plain byte order on the trimmed pattern (code-point order for
//! UTF-8), so `!` negations and `/` anchors sort as ordinary characters.
//!
//! Empty input, or input without any rule or comment, organizes to `"\n"` in
//! both modes. A leading byte order mark is dropped.

use crate::core::error::{GitignoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How [`organize`] treats comments and blank-line sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep comment headers and sort rules inside each section
    Smart,
    /// Drop comments and sort every rule as a single list
    Flat,
}

impl SortMode {
    pub const ALL: [SortMode; 2] = [SortMode::Smart, SortMode::Flat];

    /// Short label shown when asking the user to pick a mode
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Smart => "Keep sections and comments",
            SortMode::Flat => "Remove comments and flatten",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SortMode::Smart => "Sort and deduplicate rules inside each commented section",
            SortMode::Flat => "Drop all comments, then sort and deduplicate every rule",
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Smart => write!(f, "smart"),
            SortMode::Flat => write!(f, "flat"),
        }
    }
}

/// A block of comment lines followed by the rules they describe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Comment lines exactly as they appeared in the input
    pub comments: Vec<String>,
    /// Trimmed rule lines in input order, duplicates included
    pub rules: Vec<String>,
}

impl Section {
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.rules.is_empty()
    }

    /// True once at least one rule has been collected. A comment arriving in
    /// this state belongs to the next section.
    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Rules of this section, deduplicated and in ascending order
    pub fn sorted_rules(&self) -> Vec<&str> {
        self.rules
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Render the comments followed by the sorted unique rules, without
    /// leading or trailing blank lines
    pub fn render(&self) -> String {
        let mut text = self.comments.join("\n");
        text.push('\n');
        text.push_str(&self.sorted_rules().join("\n"));
        text.trim_matches('\n').to_string()
    }
}

/// Organize ignore file text according to `mode`
pub fn organize(text: &str, mode: SortMode) -> String {
    match mode {
        SortMode::Smart => organize_smart(text),
        SortMode::Flat => organize_flat(text),
    }
}

/// Same as [`organize`] for raw bytes; non-UTF-8 input is rejected
pub fn organize_bytes(bytes: &[u8], mode: SortMode) -> Result<String> {
    let text = std::str::from_utf8(bytes).map_err(GitignoreError::invalid_input)?;
    Ok(organize(text, mode))
}

/// True when organizing `text` would not change it
pub fn is_organized(text: &str, mode: SortMode) -> bool {
    organize(text, mode) == text
}

/// Split ignore file text into sections. Blank lines close the current
/// section, and a comment after a rule opens a new one.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::default();

    for line in split_lines(text) {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else if trimmed.starts_with('#') {
            if current.has_rules() {
                sections.push(std::mem::take(&mut current));
            }
            current.comments.push(line.to_string());
        } else {
            current.rules.push(trimmed.to_string());
        }
    }

    if !current.is_empty() {
        sections.push(current);
    }

    log::debug!("Parsed {} section(s)", sections.len());
    sections
}

/// Split on `\n`, dropping every trailing `\r` and a leading byte order mark
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    strip_bom(text).split('\n').map(|line| line.trim_end_matches('\r'))
}

/// `text` without a leading UTF-8 byte order mark
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

fn organize_smart(text: &str) -> String {
    let rendered: Vec<String> = parse_sections(text)
        .iter()
        .map(Section::render)
        .filter(|section| !section.is_empty())
        .collect();

    let mut output = rendered.join("\n\n");
    output.push('\n');
    output
}

fn organize_flat(text: &str) -> String {
    let rules: BTreeSet<&str> = split_lines(text)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let mut output = rules.into_iter().collect::<Vec<_>>().join("\n");
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_drops_comments_and_duplicates() {
        assert_eq!(organize("b\n# keep\na\na\n", SortMode::Flat), "a\nb\n");
    }

    #[test]
    fn test_smart_single_section() {
        assert_eq!(organize("b\na\n", SortMode::Smart), "a\nb\n");
    }

    #[test]
    fn test_smart_keeps_commented_sections() {
        let input = "# Logs\n*.log\ndebug.log\n\n# Deps\nnode_modules\nnode_modules\n";
        assert_eq!(
            organize(input, SortMode::Smart),
            "# Logs\n*.log\ndebug.log\n\n# Deps\nnode_modules\n"
        );
    }

    #[test]
    fn test_smart_comment_after_rules_starts_section() {
        assert_eq!(
            organize("a\n# New Section\nb\n", SortMode::Smart),
            "a\n\n# New Section\nb\n"
        );
    }

    #[test]
    fn test_empty_input_is_single_newline() {
        assert_eq!(organize("", SortMode::Smart), "\n");
        assert_eq!(organize("", SortMode::Flat), "\n");
    }

    #[test]
    fn test_blank_only_input_is_single_newline() {
        assert_eq!(organize("\n  \n\t\n", SortMode::Smart), "\n");
        assert_eq!(organize("\n  \n\t\n", SortMode::Flat), "\n");
    }

    #[test]
    fn test_comment_only_input() {
        assert_eq!(organize("# one\n# two\n", SortMode::Smart), "# one\n# two\n");
        assert_eq!(organize("# one\n# two\n", SortMode::Flat), "\n");
    }

    #[test]
    fn test_crlf_input_is_normalized() {
        assert_eq!(
            organize("# Build\r\ntarget\r\nbuild\r\n", SortMode::Smart),
            "# Build\nbuild\ntarget\n"
        );
        assert_eq!(organize("b\r\na\r\n", SortMode::Flat), "a\nb\n");
    }

    #[test]
    fn test_mixed_line_endings() {
        assert_eq!(organize("c\r\nb\na\r\n", SortMode::Flat), "a\nb\nc\n");
    }

    #[test]
    fn test_repeated_carriage_returns_are_line_boundary() {
        assert_eq!(organize("# x\r\r\na\n", SortMode::Smart), "# x\na\n");
        assert_eq!(parse_sections("# x\r\r\na\r\r\n")[0].comments, vec!["# x"]);
    }

    #[test]
    fn test_byte_order_mark_is_dropped() {
        let input = "\u{FEFF}# Logs\nb\na\n";
        assert_eq!(organize(input, SortMode::Smart), "# Logs\na\nb\n");
        assert_eq!(organize(input, SortMode::Flat), "a\nb\n");
        assert_eq!(strip_bom("\u{FEFF}x"), "x");
        assert_eq!(strip_bom("x\u{FEFF}"), "x\u{FEFF}");
    }

    #[test]
    fn test_rules_after_comments_stay_in_section() {
        let sections = parse_sections("# Header\n# More\nrule\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].comments, vec!["# Header", "# More"]);
        assert_eq!(sections[0].rules, vec!["rule"]);
    }

    #[test]
    fn test_comments_keep_original_text() {
        let sections = parse_sections("  # indented   \nfoo\n");
        assert_eq!(sections[0].comments, vec!["  # indented   "]);
        assert_eq!(organize("  # indented   \nfoo\n", SortMode::Smart), "  # indented   \nfoo\n");
    }

    #[test]
    fn test_rules_are_trimmed() {
        assert_eq!(organize("  b  \n\ta\n", SortMode::Smart), "a\nb\n");
    }

    #[test]
    fn test_multiple_blank_lines_collapse() {
        assert_eq!(organize("a\n\n\n\nb\n", SortMode::Smart), "a\n\nb\n");
    }

    #[test]
    fn test_sections_keep_input_order() {
        let input = "# Zeta\nz\n\n# Alpha\na\n";
        assert_eq!(organize(input, SortMode::Smart), input);
    }

    #[test]
    fn test_duplicates_across_sections_are_kept() {
        assert_eq!(
            organize("a\n\n# Other\na\n", SortMode::Smart),
            "a\n\n# Other\na\n"
        );
        assert_eq!(organize("a\n\n# Other\na\n", SortMode::Flat), "a\n");
    }

    #[test]
    fn test_sort_is_byte_order() {
        let input = "b\n/build\n!keep.txt\nB\n*.log\n";
        assert_eq!(
            organize(input, SortMode::Flat),
            "!keep.txt\n*.log\n/build\nB\nb\n"
        );
    }

    #[test]
    fn test_trailing_comment_section() {
        assert_eq!(
            organize("a\n# trailing note\n", SortMode::Smart),
            "a\n\n# trailing note\n"
        );
    }

    #[test]
    fn test_input_without_trailing_newline() {
        assert_eq!(organize("b\na", SortMode::Smart), "a\nb\n");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "",
            "b\n# keep\na\na\n",
            "a\n# New Section\nb\n",
            "# Logs\n*.log\ndebug.log\n\n# Deps\nnode_modules\nnode_modules\n",
            "\r\n# x\r\n\r\n\r\nz\r\ny\r\n# y\n#z\nq\n   \n",
            "# x\r\r\na\n",
            "a\r\r\n# y\r\r\r\nb\r\n",
            "\u{FEFF}# Logs\nb\na\n",
        ];
        for input in inputs {
            for mode in SortMode::ALL {
                let once = organize(input, mode);
                assert_eq!(organize(&once, mode), once, "mode {mode} input {input:?}");
                assert!(is_organized(&once, mode));
            }
        }
    }

    #[test]
    fn test_flat_output_has_no_comments() {
        let output = organize("# a\nx\n  # b\ny\n", SortMode::Flat);
        assert!(output.lines().all(|line| !line.starts_with('#')));
    }

    #[test]
    fn test_section_render_without_comments() {
        let section = Section {
            comments: vec![],
            rules: vec!["b".into(), "a".into(), "b".into()],
        };
        assert_eq!(section.render(), "a\nb");
    }

    #[test]
    fn test_section_render_without_rules() {
        let section = Section {
            comments: vec!["# only".into()],
            rules: vec![],
        };
        assert_eq!(section.render(), "# only");
    }

    #[test]
    fn test_organize_bytes_rejects_invalid_utf8() {
        let result = organize_bytes(&[b'a', b'\n', 0xff, 0xfe], SortMode::Smart);
        assert!(matches!(result, Err(GitignoreError::InvalidInput { .. })));
    }

    #[test]
    fn test_organize_bytes_accepts_utf8() -> Result<()> {
        let output = organize_bytes("ü\na\n".as_bytes(), SortMode::Flat)?;
        assert_eq!(output, "a\nü\n");
        Ok(())
    }

    #[test]
    fn test_sort_mode_serde_names() -> Result<()> {
        assert_eq!(serde_json::to_string(&SortMode::Smart)?, "\"smart\"");
        let mode: SortMode = serde_json::from_str("\"flat\"")?;
        assert_eq!(mode, SortMode::Flat);
        Ok(())
    }
}
