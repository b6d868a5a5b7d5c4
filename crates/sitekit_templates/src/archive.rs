//! Archive-form template reading and packaged resource access.
//!
//! Packaged templates are zip archives embedded into the binary at build
//! time. The archives are produced offline from the loose trees under
//! `templates/`; nothing at runtime creates them.

use std::io::{Cursor, Read};

use rust_embed::RustEmbed;
use tracing::debug;
use zip::ZipArchive;

use crate::error::TemplateResult;
use crate::source::SourceEntry;

/// Packaged template archives embedded at build time.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct PackagedTemplates;

/// Access to packaged binary resources.
pub trait ResourceStore {
    /// Fetch a packaged resource by name, if it exists.
    fn get(&self, name: &str) -> Option<Vec<u8>>;
}

/// Resource store backed by the archives embedded in the binary.
#[derive(Debug, Default)]
pub struct PackagedStore;

impl ResourceStore for PackagedStore {
    fn get(&self, name: &str) -> Option<Vec<u8>> {
        PackagedTemplates::get(name).map(|file| file.data.into_owned())
    }
}

/// Read a zip archive into source entries, in archive-stored order.
///
/// An entry whose name ends with `/` is a directory marker and carries no
/// content. Markers are emitted as distinct entries so that template trees
/// with intentionally empty directories materialize correctly.
pub fn read_archive(data: &[u8]) -> TemplateResult<Vec<SourceEntry>> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        let name = file.name().to_string();

        if name.ends_with('/') {
            debug!("Archive directory marker: {}", name);
            entries.push(SourceEntry::directory(name));
        } else {
            let mut content = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut content)?;
            debug!("Archive file entry: {} ({} bytes)", name, content.len());
            entries.push(SourceEntry::bytes(name, content));
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EntryContent;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn sample_archive() -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        writer.start_file("a/b.txt", options).unwrap();
        writer.write_all(b"hi").unwrap();
        writer.add_directory("a/empty", options).unwrap();

        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_read_archive_preserves_stored_order() {
        let entries = read_archive(&sample_archive()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].relative_path, "a/b.txt");
        assert_eq!(entries[1].relative_path, "a/empty/");
    }

    #[test]
    fn test_read_archive_distinguishes_directory_markers() {
        let entries = read_archive(&sample_archive()).unwrap();
        assert_eq!(entries[0].content, EntryContent::Bytes(b"hi".to_vec()));
        assert_eq!(entries[1].content, EntryContent::Directory);
    }

    #[test]
    fn test_read_archive_rejects_garbage() {
        assert!(read_archive(b"not a zip").is_err());
    }
}
