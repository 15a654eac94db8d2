use std::{io, path::Path};
use tracing::debug;

pub trait FileLoader {
    /// Check for the existence of a file.
    fn file_exists(&self, path: &Path) -> bool;

    fn read_file(&self, path: &Path) -> io::Result<String>;
}

pub trait FileEmitter {
    /// Replace the whole contents of `path`, creating the file if needed.
    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct DiskFiles;

impl DiskFiles {
    pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;
}

impl FileLoader for DiskFiles {
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        let metadata = fs_err::metadata(path)?;

        if metadata.len() > Self::MAX_FILE_SIZE {
            return Err(io::Error::other(format!(
                "{}: files over {} bytes are not supported",
                path.display(),
                Self::MAX_FILE_SIZE
            )));
        }

        debug!(path = %path.display(), bytes = metadata.len(), "reading file");
        fs_err::read_to_string(path)
    }
}

impl FileEmitter for DiskFiles {
    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        debug!(path = %path.display(), bytes = contents.len(), "writing file");
        fs_err::write(path, contents)
    }
}
