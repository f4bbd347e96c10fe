//! Loading an [`ArchiveIndex`] from a tar file.
//!
//! Plain and gzip-compressed archives are accepted. Compression is detected
//! from magic bytes, not the file extension. bzip2 and xz archives are
//! recognized and rejected with [`ArchiveError::UnsupportedCompression`].

use std::io::{self, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tar::EntryType;

use super::{ArchiveEntry, ArchiveError, ArchiveIndex, EntryKind};
use crate::vfs::VfsPath;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const BZIP2_MAGIC: [u8; 3] = *b"BZh";
const XZ_MAGIC: [u8; 6] = [0xfd, b'7', b'z', b'X', b'Z', 0x00];
/// Offset of the `ustar` magic in a tar header block.
const USTAR_OFFSET: usize = 257;

/// Load and index the archive at `path`.
pub fn load(path: &Path) -> Result<ArchiveIndex, ArchiveError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ArchiveError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ArchiveError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let is_tar = bytes.get(USTAR_OFFSET..USTAR_OFFSET + 5) == Some(b"ustar".as_slice());
    let unsupported = if is_tar {
        None
    } else if bytes.starts_with(&BZIP2_MAGIC) {
        Some("bzip2")
    } else if bytes.starts_with(&XZ_MAGIC) {
        Some("xz")
    } else {
        None
    };
    if let Some(format) = unsupported {
        return Err(ArchiveError::UnsupportedCompression {
            path: path.to_path_buf(),
            format,
        });
    }

    let compressed = bytes.starts_with(&GZIP_MAGIC);
    let result = if compressed {
        read_entries(GzDecoder::new(bytes.as_slice()))
    } else {
        read_entries(bytes.as_slice())
    };

    let index = result.map_err(|source| ArchiveError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        entries = index.len(),
        compressed,
        "loaded archive"
    );
    Ok(index)
}

/// Read every entry of a tar stream into an index.
pub fn read_entries<R: Read>(reader: R) -> io::Result<ArchiveIndex> {
    let mut archive = tar::Archive::new(reader);
    let mut entries = Vec::new();

    for entry in archive.entries()? {
        let mut entry = entry?;
        let entry_type = entry.header().entry_type();
        if entry_type == EntryType::XGlobalHeader {
            continue;
        }

        let raw = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        let kind = match entry_type {
            EntryType::Directory => EntryKind::Directory,
            // Pre-POSIX archives mark directories with a trailing slash only
            EntryType::Regular | EntryType::Continuous if raw.ends_with('/') => {
                EntryKind::Directory
            }
            EntryType::Regular | EntryType::Continuous | EntryType::GNUSparse => EntryKind::File,
            _ => EntryKind::Other,
        };

        let mut data = Vec::new();
        if kind == EntryKind::File {
            entry.read_to_end(&mut data)?;
        }

        tracing::trace!(name = %raw, ?kind, size = data.len(), "archive entry");
        entries.push(ArchiveEntry::new(VfsPath::parse(&raw), kind, data));
    }

    Ok(ArchiveIndex::from_entries(entries))
}
