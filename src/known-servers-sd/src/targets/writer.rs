use super::render;
use crate::errors::{SdError, SdResult};
use crate::types::{ServerRecord, ServiceCategory};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

/// How target files replace their previous version.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Overwrite each file in place as soon as it is rendered. A failure part
    /// way through leaves the files written so far updated and the rest stale.
    #[default]
    Direct,
    /// Render every file into a temporary file next to its destination and
    /// rename them into place only once all categories succeeded.
    ///
    /// The rename replaces a destination symlink with a regular file, while
    /// [`WriteMode::Direct`] writes through the link to its target.
    Staged,
}

/// Writes one target file per category into `output_dir` and returns the
/// written paths in category order.
pub fn generate(
    output_dir: &Path,
    records: &[ServerRecord],
    categories: &[ServiceCategory],
    mode: WriteMode,
) -> SdResult<Vec<PathBuf>> {
    ensure_output_dir(output_dir)?;

    info!(path = %output_dir.display(), ?mode, "Writing target files");
    let written = match mode {
        WriteMode::Direct => write_direct(output_dir, records, categories)?,
        WriteMode::Staged => write_staged(output_dir, records, categories)?,
    };
    Ok(written)
}

/// Fails unless `output_dir` exists and is a directory.
pub fn ensure_output_dir(output_dir: &Path) -> SdResult<()> {
    let reason = match fs::metadata(output_dir) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => "not a directory".to_string(),
        Err(e) => e.to_string(),
    };
    Err(SdError::OutputDir {
        path: output_dir.to_path_buf(),
        reason,
    })
}

fn write_direct(
    output_dir: &Path,
    records: &[ServerRecord],
    categories: &[ServiceCategory],
) -> SdResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(categories.len());

    for &category in categories {
        let path = output_dir.join(category.file_name());
        let content = render(category, records)?;
        fs::write(&path, content).map_err(|e| SdError::write(&path, e))?;

        debug!(path = %path.display(), "wrote target file");
        written.push(path);
    }

    Ok(written)
}

fn write_staged(
    output_dir: &Path,
    records: &[ServerRecord],
    categories: &[ServiceCategory],
) -> SdResult<Vec<PathBuf>> {
    // dropping a NamedTempFile removes it, so an early return cleans up
    let mut staged: Vec<(NamedTempFile, PathBuf)> = Vec::with_capacity(categories.len());

    for &category in categories {
        let path = output_dir.join(category.file_name());
        if path.is_dir() {
            return Err(SdError::write(
                &path,
                io::Error::other("destination is a directory"),
            ));
        }

        let content = render(category, records)?;
        let file = stage_file(output_dir, &content).map_err(|e| SdError::write(&path, e))?;
        staged.push((file, path));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (file, path) in staged {
        file.persist(&path)
            .map_err(|e| SdError::write(&path, e.error))?;

        debug!(path = %path.display(), "committed target file");
        written.push(path);
    }

    Ok(written)
}

fn stage_file(output_dir: &Path, content: &[u8]) -> io::Result<NamedTempFile> {
    let mut file = Builder::new()
        .prefix(".targets_rsb_")
        .suffix(".tmp")
        .tempfile_in(output_dir)?;
    file.write_all(content)?;
    file.as_file().sync_all()?;

    // temp files are created 0600, the scraper has to be able to read them
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    Ok(file)
}
