//! Materializing source entries into a destination directory.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::TemplateResult;
use crate::source::{resolve_dest_path, EntryContent, SourceEntry};

/// Write a sequence of source entries under a destination root.
///
/// Ancestor directories are created on demand; already-existing directories
/// are not an error. Existing files are overwritten, which is how later
/// template layers win on path collisions.
pub fn materialize(dest_root: &Path, entries: &[SourceEntry]) -> TemplateResult<()> {
    let mut written = 0usize;

    for entry in entries {
        let target = resolve_dest_path(dest_root, &entry.relative_path)?;

        match &entry.content {
            EntryContent::Directory => {
                fs::create_dir_all(&target)?;
                debug!("Created directory: {}", target.display());
            }
            EntryContent::Bytes(data) => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&target, data)?;
                debug!("Wrote: {}", target.display());
                written += 1;
            }
            EntryContent::CopyFrom(source) => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(source, &target)?;
                debug!("Copied: {}", target.display());
                written += 1;
            }
        }
    }

    info!("Materialized {} files under {}", written, dest_root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;
    use tempfile::tempdir;

    #[test]
    fn test_materialize_creates_parents_idempotently() {
        let temp = tempdir().unwrap();
        let entries = vec![
            SourceEntry::bytes("x/y/1.txt", b"one".to_vec()),
            SourceEntry::bytes("x/y/2.txt", b"two".to_vec()),
        ];

        materialize(temp.path(), &entries).unwrap();

        assert_eq!(fs::read(temp.path().join("x/y/1.txt")).unwrap(), b"one");
        assert_eq!(fs::read(temp.path().join("x/y/2.txt")).unwrap(), b"two");
    }

    #[test]
    fn test_materialize_overwrites_existing_files() {
        let temp = tempdir().unwrap();
        materialize(
            temp.path(),
            &[SourceEntry::bytes("index.html", b"base".to_vec())],
        )
        .unwrap();
        materialize(
            temp.path(),
            &[SourceEntry::bytes("index.html", b"layered".to_vec())],
        )
        .unwrap();

        assert_eq!(fs::read(temp.path().join("index.html")).unwrap(), b"layered");
    }

    #[test]
    fn test_materialize_creates_empty_directory_markers() {
        let temp = tempdir().unwrap();
        materialize(temp.path(), &[SourceEntry::directory("a/empty/")]).unwrap();

        let marker = temp.path().join("a/empty");
        assert!(marker.is_dir());
        assert!(fs::read_dir(&marker).unwrap().next().is_none());
    }

    #[test]
    fn test_materialize_copies_source_files() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("origin.txt");
        fs::write(&source, b"copied").unwrap();

        let dest = tempdir().unwrap();
        materialize(dest.path(), &[SourceEntry::copy_from("site/origin.txt", &source)]).unwrap();

        assert_eq!(
            fs::read(dest.path().join("site/origin.txt")).unwrap(),
            b"copied"
        );
    }

    #[test]
    fn test_materialize_rejects_escaping_entries() {
        let temp = tempdir().unwrap();
        let result = materialize(
            temp.path(),
            &[SourceEntry::bytes("../evil.txt", b"nope".to_vec())],
        );

        assert!(matches!(result, Err(TemplateError::UnsafePath(_))));
        assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    }
}
