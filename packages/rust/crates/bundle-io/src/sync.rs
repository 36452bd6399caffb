//! Synchronous file read/write.
//!
//! All artifact I/O is blocking; a batch runs on one thread.

use std::fs as std_fs;
use std::io::Read;
use std::path::Path;

use crate::detect::decode_buffer;
use crate::error::IoError;

/// Read text from a file with size and binary checks.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Errors
/// `NotFound` when the path cannot be stat'ed, `TooLarge` past `max_bytes`,
/// `BinaryFile` for NULL-byte content, `Encoding` for invalid UTF-8,
/// `System` for read failures.
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = std_fs::metadata(path)
        .map_err(|_| IoError::NotFound(path.to_path_buf()))?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge {
            size: metadata.len(),
            limit: max_bytes,
        });
    }

    let mut file = std_fs::File::open(path)?;
    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut buffer)?;

    decode_buffer(buffer)
}

/// Write `content` to `path`, creating or truncating the file.
///
/// # Errors
/// `System` when the file cannot be created or written.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<(), IoError> {
    std_fs::write(path.as_ref(), content)?;
    Ok(())
}
