//! Line-level helpers shared by the output parser and the section editor.

/// Splits text into lines on `\n`, dropping the terminator.
///
/// Text after the last line feed is kept as a final line. A trailing line
/// feed does not produce an extra empty line. Carriage returns are content.
pub fn read_lines(source: &str) -> Vec<String> {
    source.split_terminator('\n').map(str::to_string).collect()
}

/// Returns the index of the first line containing `needle`.
pub fn find_first<S: AsRef<str>>(lines: &[S], needle: &str) -> Option<usize> {
    lines.iter().position(|line| line.as_ref().contains(needle))
}

/// Like [`find_first`], but the scan starts at `index + 1`.
pub fn find_first_after<S: AsRef<str>>(lines: &[S], needle: &str, index: usize) -> Option<usize> {
    let start = index.checked_add(1)?;
    let rest = lines.get(start..)?;
    find_first(rest, needle).map(|offset| start + offset)
}
