use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use eyre::{eyre, WrapErr};

/// Replaces the contents of `path` with `contents`.
///
/// The new contents are written to a temporary file next to `path`, which is
/// then renamed over it: readers see either the old file or the complete new
/// one, and a failed write leaves the old file untouched.
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> eyre::Result<()> {
    let tmp = tmp_path(path)?;

    let res = fs::write(&tmp, contents)
        .wrap_err_with(|| format!("while writing {}", tmp.display()))
        .and_then(|_| {
            fs::rename(&tmp, path).wrap_err_with(|| {
                format!("while renaming {} to {}", tmp.display(), path.display())
            })
        });

    if res.is_err() {
        // best effort, the original error is the interesting one
        let _ = fs::remove_file(&tmp);
    }
    res
}

fn tmp_path(path: &Path) -> eyre::Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("output path {} has no file name", path.display()))?;

    // one temp file per process, concurrent runs don't clobber each other
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use super::{tmp_path, write_atomically};

    #[test]
    fn test_tmp_path_is_a_sibling() {
        let pid = std::process::id();
        assert_eq!(
            tmp_path(Path::new("src/generated.rs")).unwrap(),
            Path::new(&format!("src/.generated.rs.{pid}.tmp"))
        );
        assert!(tmp_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_write_atomically_replaces_contents() {
        let dir = std::env::temp_dir().join(format!("hpack-static-gen-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("generated.rs");

        fs::write(&path, "stale").unwrap();
        write_atomically(&path, b"fresh").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
        assert!(!tmp_path(&path).unwrap().exists());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_atomically_missing_directory() {
        let path = std::env::temp_dir()
            .join(format!("hpack-static-gen-missing-{}", std::process::id()))
            .join("generated.rs");
        assert!(write_atomically(&path, b"fresh").is_err());
        assert!(!path.exists());
    }
}
