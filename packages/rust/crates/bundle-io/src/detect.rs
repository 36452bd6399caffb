//! Content checks applied to every artifact read.
//!
//! A role artifact must be text: no NUL byte in the leading window, and the
//! whole buffer well-formed UTF-8. Nothing is repaired on the way in, since
//! whatever is decoded here is later written back out.

use memchr::memchr;

use crate::error::IoError;

/// Leading bytes inspected by [`is_binary`].
const SNIFF_WINDOW: usize = 8 * 1024;

/// `true` when a NUL byte appears within the leading window.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let window = buffer.get(..SNIFF_WINDOW).unwrap_or(buffer);
    memchr(0, window).is_some()
}

/// Turn a raw artifact buffer into text, strictly.
///
/// # Errors
/// `BinaryFile` when [`is_binary`] holds, `Encoding` with the offset of the
/// first invalid byte when the buffer is not UTF-8.
pub fn decode_buffer(buffer: Vec<u8>) -> Result<String, IoError> {
    if is_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }

    String::from_utf8(buffer).map_err(|err| IoError::Encoding {
        offset: err.utf8_error().valid_up_to(),
    })
}
