//! Recursive lookup of an artifact by exact file name.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Find the first file under `root` whose base name equals `file_name`.
///
/// The comparison is exact and case-sensitive. A symlink whose target is a
/// file matches; symlinked directories are not descended. Traversal order is
/// whatever the directory listing yields, so with duplicate names the winner
/// is unspecified. Unreadable entries are skipped.
#[must_use]
pub fn locate<P: AsRef<Path>>(root: P, file_name: &str) -> Option<PathBuf> {
    locate_excluding::<_, &Path>(root, file_name, &[])
}

/// [`locate`], without descending into any directory listed in `excluded`.
///
/// Directories are matched by path. An excluded path spelled differently
/// from the walk (relative, via `..`, through a symlink) is resolved once
/// against the canonical root and compared in the walk's spelling.
#[must_use]
pub fn locate_excluding<P, E>(root: P, file_name: &str, excluded: &[E]) -> Option<PathBuf>
where
    P: AsRef<Path>,
    E: AsRef<Path>,
{
    let root = root.as_ref();
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "lookup root is not a directory");
        return None;
    }

    let excluded = excluded_paths(root, excluded);
    let is_excluded = |entry: &DirEntry| {
        entry.file_type().is_dir() && excluded.iter().any(|dir| entry.path() == dir.as_path())
    };
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::debug!(error = %error, "skipping unreadable entry during lookup");
                continue;
            }
        };
        if entry.file_name() == file_name && is_file_like(&entry) {
            return Some(entry.into_path());
        }
    }

    None
}

fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Each excluded directory as given, plus its spelling under `root` when it
/// canonicalises to somewhere inside the canonical root.
fn excluded_paths<E: AsRef<Path>>(root: &Path, excluded: &[E]) -> Vec<PathBuf> {
    let canonical_root = root.canonicalize().ok();
    let mut paths = Vec::with_capacity(excluded.len() * 2);
    for dir in excluded {
        let dir = dir.as_ref();
        paths.push(dir.to_path_buf());
        let rebased = canonical_root.as_deref().and_then(|canonical_root| {
            let canonical = dir.canonicalize().ok()?;
            let relative = canonical.strip_prefix(canonical_root).ok()?;
            Some(root.join(relative))
        });
        if let Some(rebased) = rebased.filter(|rebased| rebased.as_path() != dir) {
            paths.push(rebased);
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root() {
        assert!(locate("/nonexistent/bundle/root", "NAB_Bundle_Admin.xml").is_none());
    }

    #[test]
    fn test_directory_with_same_name_is_ignored() {
        let dir = TempDir::new().expect("Create temp dir");
        std::fs::create_dir(dir.path().join("NAB_Bundle_Admin.xml")).expect("mkdir");
        assert!(locate(dir.path(), "NAB_Bundle_Admin.xml").is_none());
    }

    #[test]
    fn test_excluded_directory_is_skipped() {
        let dir = TempDir::new().expect("Create temp dir");
        let archive = dir.path().join("00_Disabled");
        std::fs::create_dir(&archive).expect("mkdir");
        std::fs::write(archive.join("NAB_Bundle_Admin.xml"), "<Bundle/>").expect("write");

        assert!(locate(dir.path(), "NAB_Bundle_Admin.xml").is_some());
        assert!(locate_excluding(dir.path(), "NAB_Bundle_Admin.xml", &[&archive]).is_none());
    }

    #[test]
    fn test_excluded_directory_spelled_through_parent() {
        let dir = TempDir::new().expect("Create temp dir");
        std::fs::create_dir(dir.path().join("roles")).expect("mkdir");
        let archive = dir.path().join("00_Disabled");
        std::fs::create_dir(&archive).expect("mkdir");
        std::fs::write(archive.join("NAB_Bundle_Admin.xml"), "<Bundle/>").expect("write");

        let spelled = dir.path().join("roles").join("..").join("00_Disabled");
        assert_ne!(spelled, archive);
        assert!(locate_excluding(dir.path(), "NAB_Bundle_Admin.xml", &[&spelled]).is_none());
    }

    #[test]
    fn test_excluded_outside_root_is_ignored() {
        let dir = TempDir::new().expect("Create temp dir");
        let elsewhere = TempDir::new().expect("Create temp dir");
        std::fs::write(dir.path().join("NAB_Bundle_Admin.xml"), "<Bundle/>").expect("write");

        let excluded = excluded_paths(dir.path(), &[elsewhere.path()]);
        assert_eq!(excluded, vec![elsewhere.path().to_path_buf()]);
        assert!(locate_excluding(dir.path(), "NAB_Bundle_Admin.xml", &[elsewhere.path()]).is_some());
    }
}
