//! Locates a bracket-headed section in a line-oriented config file and splices
//! new entries into it.
//!
//! A section starts at the first line containing its header (for example
//! `[MESSAGES CONTROL]`) and ends right before the next line containing `[`,
//! or at the end of the file.

use crate::error::SpliceError;
use crate::extractor::ErrorCode;
use crate::lines::{find_first, find_first_after, read_lines};
use std::collections::BTreeSet;

/// The section pylint reads its `disable=` list from.
pub const MESSAGES_CONTROL_HEADER: &str = "[MESSAGES CONTROL]";

/// Indentation used for each appended entry.
const ENTRY_INDENT: &str = "    ";

/// Returns the index of the section header line.
pub fn locate_section_start<S: AsRef<str>>(lines: &[S], header: &str) -> Option<usize> {
    find_first(lines, header)
}

/// Returns the index of the header line that terminates the section.
///
/// `None` when the section is absent or runs to the end of the file.
pub fn locate_section_end<S: AsRef<str>>(lines: &[S], header: &str) -> Option<usize> {
    let start = locate_section_start(lines, header)?;
    find_first_after(lines, "[", start)
}

/// Returns the header, a blank separator line, and the non-blank body lines.
///
/// Blank lines inside the section are dropped. An absent section yields an
/// empty vector.
pub fn extract_section<S: AsRef<str>>(lines: &[S], header: &str) -> Vec<String> {
    let Some(start) = locate_section_start(lines, header) else {
        return Vec::new();
    };
    let end = locate_section_end(lines, header).unwrap_or(lines.len());

    let mut section = Vec::with_capacity(end - start + 1);
    section.push(lines[start].as_ref().to_string());
    section.push(String::new());
    section.extend(
        lines[start + 1..end]
            .iter()
            .map(|line| line.as_ref())
            .filter(|line| !line.is_empty())
            .map(str::to_string),
    );
    section
}

/// Returns every line before the section header, or the whole file if absent.
pub fn before_section<S: AsRef<str>>(lines: &[S], header: &str) -> Vec<String> {
    let end = locate_section_start(lines, header).unwrap_or(lines.len());
    to_owned_lines(&lines[..end])
}

/// Returns every line from the terminating header onwards.
///
/// Empty when the section is absent or runs to the end of the file.
pub fn after_section<S: AsRef<str>>(lines: &[S], header: &str) -> Vec<String> {
    match locate_section_end(lines, header) {
        Some(end) => to_owned_lines(&lines[end..]),
        None => Vec::new(),
    }
}

fn to_owned_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|line| line.as_ref().to_string()).collect()
}

/// Formats a code as a `disable=` list entry.
pub fn format_entry(code: &ErrorCode) -> String {
    format!("{ENTRY_INDENT}{code},")
}

/// A config file cut around one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSplit {
    pub before: Vec<String>,
    pub section: Vec<String>,
    pub after: Vec<String>,
}

impl SectionSplit {
    /// Splits `lines` around the section named by `header`.
    pub fn split<S: AsRef<str>>(lines: &[S], header: &str) -> Result<Self, SpliceError> {
        let start = locate_section_start(lines, header)
            .ok_or_else(|| SpliceError::SectionNotFound(header.to_string()))?;
        log::debug!(
            "Section '{}' starts at line {} and ends at {:?}",
            header,
            start + 1,
            locate_section_end(lines, header).map(|end| end + 1)
        );

        Ok(Self {
            before: before_section(lines, header),
            section: extract_section(lines, header),
            after: after_section(lines, header),
        })
    }

    /// Codes already listed in the section body, ignoring `#` and `;` comments.
    pub fn listed_codes(&self) -> BTreeSet<ErrorCode> {
        self.section
            .iter()
            .skip(1)
            .map(|line| line.split(['#', ';']).next().unwrap_or(""))
            .flat_map(|line| line.split(|c: char| c == ',' || c == '=' || c.is_whitespace()))
            .filter_map(ErrorCode::new)
            .collect()
    }

    /// Appends one entry per code not yet listed, at the end of the section,
    /// in set order. Returns the number of entries appended.
    pub fn append_errors(&mut self, errors: &BTreeSet<ErrorCode>) -> usize {
        let listed = self.listed_codes();
        let entries: Vec<String> = errors.difference(&listed).map(format_entry).collect();
        let appended = entries.len();
        self.section.extend(entries);
        appended
    }

    /// Joins the segments back into file content, one `\n` per line.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for line in self.before.iter().chain(&self.section).chain(&self.after) {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}

/// Merges `errors` into the section of `content` named by `header`.
///
/// Everything outside the section is reproduced verbatim. Inside it, blank
/// lines are normalized as described on [`extract_section`].
pub fn merge_errors(
    content: &str,
    header: &str,
    errors: &BTreeSet<ErrorCode>,
) -> Result<String, SpliceError> {
    let lines = read_lines(content);
    let mut split = SectionSplit::split(&lines, header)?;
    let appended = split.append_errors(errors);
    log::info!(
        "Appended {} entries to '{}', {} already listed",
        appended,
        header,
        errors.len() - appended
    );
    Ok(split.render())
}
