use std::fs::{self, Permissions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::Builder;

use crate::spec::WriteFileError;

////////////////////////////////////////////////////////////////////////////////
// #region AtomicWrite

/// Write `v_bytes` to `path_file_dst`, committing only when every byte is staged.
///
/// Bytes go to a temporary sibling file which is then renamed over the
/// destination. On any failure the temporary file is removed and the
/// destination keeps its previous content.
///
/// A read-only destination is refused rather than replaced. The committed file
/// keeps the destination's permissions; new files get `0o644` on unix.
pub fn write_bytes_atomic(path_file_dst: &Path, v_bytes: &[u8]) -> Result<(), WriteFileError> {
    let path_dir_parent = match path_file_dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let perms_dst = match fs::metadata(path_file_dst) {
        Ok(meta) if meta.permissions().readonly() => {
            return Err(WriteFileError::PermissionDenied {
                path: path_file_dst.to_path_buf(),
                message: "destination is read-only".to_string(),
            });
        }
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => derive_new_file_permissions(),
        Err(e) => return Err(WriteFileError::from_io(path_file_dst, &e)),
    };

    let mut file_tmp = Builder::new()
        .prefix(".occurkit-")
        .tempfile_in(path_dir_parent)
        .map_err(|e| WriteFileError::from_io(path_file_dst, &e))?;
    file_tmp
        .write_all(v_bytes)
        .and_then(|_| file_tmp.as_file().sync_all())
        .map_err(|e| WriteFileError::from_io(path_file_dst, &e))?;
    if let Some(perms) = perms_dst {
        file_tmp
            .as_file()
            .set_permissions(perms)
            .map_err(|e| WriteFileError::from_io(path_file_dst, &e))?;
    }

    file_tmp
        .persist(path_file_dst)
        .map_err(|e| WriteFileError::from_io(path_file_dst, &e.error))?;

    tracing::debug!(
        path = %path_file_dst.display(),
        n_bytes = v_bytes.len(),
        "committed file"
    );
    Ok(())
}

#[cfg(unix)]
fn derive_new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn derive_new_file_permissions() -> Option<Permissions> {
    None
}

/// Create `path_dir` and its parents when missing.
pub fn ensure_dir(path_dir: &Path) -> Result<(), WriteFileError> {
    fs::create_dir_all(path_dir).map_err(|e| WriteFileError::from_io(path_dir, &e))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileNames

/// Reduce free text to a file-name stem.
///
/// Keeps alphanumerics, space, `_` and `-`; trims; turns spaces into `_`;
/// caps the length at `n_len_max` chars. Falls back to `fallback` when nothing
/// survives.
pub fn sanitize_file_stem(raw: &str, n_len_max: usize, fallback: &str) -> String {
    let c_kept: String = raw
        .chars()
        .filter(|chr| chr.is_alphanumeric() || matches!(chr, ' ' | '_' | '-'))
        .collect();
    let c_stem: String = c_kept
        .trim()
        .replace(' ', "_")
        .chars()
        .take(n_len_max)
        .collect();

    if c_stem.is_empty() {
        return fallback.to_string();
    }
    c_stem
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
