use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::{Result, WordCountError};

/// Random-access, read-only view of the bytes being counted.
///
/// Workers call `read_exact_at` concurrently, so implementations must not rely on
/// a shared cursor.
pub trait ByteSource: Sync {
    /// Total length in bytes, fixed for the lifetime of the source.
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fill `buf` with the bytes starting at `offset`.
    ///
    /// Returns `UnexpectedEof` if fewer than `buf.len()` bytes are available.
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()>;
}

/// A plain file on disk. Its size is taken from metadata when opened.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    len: u64,
}

impl FileSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |reason: String| {
            WordCountError::InvalidConfiguration(format!(
                "source '{}' {}",
                path.display(),
                reason
            ))
        };

        let metadata = fs::metadata(path).map_err(|e| invalid(format!("is not accessible: {e}")))?;
        if !metadata.is_file() {
            return Err(invalid("is not a regular file".to_string()));
        }
        // Surface permission problems now rather than from inside a worker.
        File::open(path).map_err(|e| invalid(format!("is not readable: {e}")))?;

        Ok(Self {
            path: path.to_path_buf(),
            len: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn len(&self) -> u64 {
        self.len
    }

    // Each call opens its own handle so workers never share a file cursor.
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::Start(offset))?;
        file.read_exact(buf)
    }
}

impl ByteSource for [u8] {
    fn len(&self) -> u64 {
        <[u8]>::len(self) as u64
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        let src = usize::try_from(offset)
            .ok()
            .and_then(|start| self.get(start..start.checked_add(buf.len())?))
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))?;
        buf.copy_from_slice(src);
        Ok(())
    }
}

impl ByteSource for Vec<u8> {
    fn len(&self) -> u64 {
        self.as_slice().len() as u64
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        self.as_slice().read_exact_at(offset, buf)
    }
}
