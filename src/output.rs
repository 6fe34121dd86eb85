//! Decides where the merged config file goes: back to disk, or to stdout for
//! previews.

use crate::error::SpliceError;
use similar::TextDiff;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder as TempFileBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Write,
    DryRun,
    Diff,
}

impl OutputMode {
    pub fn from_flags(dry_run: bool, diff: bool) -> Self {
        if dry_run {
            OutputMode::DryRun
        } else if diff {
            OutputMode::Diff
        } else {
            OutputMode::Write
        }
    }
}

/// Emits `rendered_content` according to `mode`.
///
/// In write mode the content goes to `output_path` when given, otherwise it
/// replaces `input_path` through a temporary file persisted over the original.
pub fn finalize_output<W: Write>(
    mode: OutputMode,
    output_path: Option<&Path>,
    input_path: &Path,
    original_content: &str,
    rendered_content: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::DryRun => {
            out.write_all(rendered_content.as_bytes())?;
            return Ok(());
        }
        OutputMode::Diff => {
            let diff_output = TextDiff::from_lines(original_content, rendered_content)
                .unified_diff()
                .header("original", "modified")
                .to_string();

            out.write_all(diff_output.as_bytes())?;
            return Ok(());
        }
        OutputMode::Write => {}
    }

    if let Some(path) = output_path {
        fs::write(path, rendered_content).map_err(|source| SpliceError::ConfigUnwritable {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote {}", path.display());
        return Ok(());
    }

    replace_in_place(input_path, rendered_content)?;
    log::info!("Updated {}", input_path.display());
    Ok(())
}

/// Replaces the file at `path` with `content`.
///
/// Symlinks are followed so the file they point to is updated and the link
/// survives. The replacement keeps the original file's permissions.
fn replace_in_place(path: &Path, content: &str) -> Result<(), SpliceError> {
    let unwritable = |source| SpliceError::ConfigUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let target = fs::canonicalize(path).map_err(unwritable)?;
    let permissions = fs::metadata(&target).map_err(unwritable)?.permissions();

    let parent_dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file = TempFileBuilder::new()
        .prefix(".pylintrc-splice-")
        .suffix(".tmp")
        .tempfile_in(parent_dir)
        .map_err(unwritable)?;

    temp_file.write_all(content.as_bytes()).map_err(unwritable)?;
    temp_file
        .as_file()
        .set_permissions(permissions)
        .map_err(unwritable)?;

    temp_file
        .persist(&target)
        .map_err(|err| unwritable(err.error))?;
    log::debug!("Persisted {}", target.display());
    Ok(())
}
