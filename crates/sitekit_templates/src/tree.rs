//! Filesystem-form template reading.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::TemplateResult;
use crate::source::SourceEntry;

/// Read a template directory into source entries.
///
/// Every regular file below `template_path` becomes a copy entry with a
/// forward-slash path relative to the template root. Directories are implied
/// by the file paths and are not emitted; the materializer creates parents
/// on demand.
pub fn read_directory(template_path: &Path) -> TemplateResult<Vec<SourceEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(template_path).min_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(template_path).unwrap();
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        debug!("Found template file: {}", relative_path);
        entries.push(SourceEntry::copy_from(relative_path, entry.path()));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EntryContent;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_directory_emits_files_with_forward_slash_paths() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("css")).unwrap();
        fs::write(temp.path().join("index.html"), "<html></html>").unwrap();
        fs::write(temp.path().join("css/site.css"), "body {}").unwrap();

        let mut entries = read_directory(temp.path()).unwrap();
        entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].relative_path, "css/site.css");
        assert_eq!(entries[1].relative_path, "index.html");
        assert!(matches!(entries[0].content, EntryContent::CopyFrom(_)));
    }

    #[test]
    fn test_read_directory_skips_directory_entries() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("empty")).unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();

        let entries = read_directory(temp.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relative_path, "a.txt");
    }
}
