//! Export folder discovery.
//!
//! Search order:
//! 1. The platform Desktop folder (`dirs::desktop_dir`, else `~/Desktop`)
//! 2. `$OneDrive/Desktop` (Windows machines with a redirected Desktop)
//! 3. The current working directory

use std::path::PathBuf;

/// Find the folder exports are written to when none is configured.
pub fn find_export_dir() -> PathBuf {
    let desktop = dirs::desktop_dir().or_else(|| dirs::home_dir().map(|h| h.join("Desktop")));
    let onedrive = std::env::var_os("OneDrive").map(|od| PathBuf::from(od).join("Desktop"));
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let dir = first_existing([desktop, onedrive].into_iter().flatten(), cwd);
    log::debug!("export folder: {}", dir.display());
    dir
}

/// First candidate that exists as a directory, else the fallback.
fn first_existing(candidates: impl IntoIterator<Item = PathBuf>, fallback: PathBuf) -> PathBuf {
    candidates
        .into_iter()
        .find(|p| p.is_dir())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_first_existing_prefers_earlier_candidates() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let picked = first_existing(
            [a.path().to_path_buf(), b.path().to_path_buf()],
            PathBuf::from("."),
        );
        assert_eq!(picked, a.path());
    }

    #[test]
    fn test_first_existing_skips_missing() {
        let b = tempfile::tempdir().unwrap();
        let missing = b.path().join("does-not-exist");
        let picked = first_existing([missing, b.path().to_path_buf()], PathBuf::from("."));
        assert_eq!(picked, b.path());
    }

    #[test]
    fn test_first_existing_falls_back() {
        let picked = first_existing(Vec::new(), PathBuf::from("fallback"));
        assert_eq!(picked, PathBuf::from("fallback"));
    }

    #[test]
    fn test_find_export_dir_returns_a_directory() {
        let dir = find_export_dir();
        assert!(dir.is_dir() || dir == Path::new("."));
    }
}
