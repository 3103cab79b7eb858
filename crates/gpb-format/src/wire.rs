//! Scalar and string wire primitives.
//!
//! The wire format is pinned to little-endian regardless of host
//! architecture, so files written on one platform decode on any other.

use std::io::{Read, Write};

use crate::error::DecodeResult;

/// Read a 4-byte little-endian unsigned integer.
pub fn read_u32<R: Read>(reader: &mut R) -> DecodeResult<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Write a 4-byte little-endian unsigned integer.
pub fn write_u32<W: Write>(writer: &mut W, value: u32) -> std::io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Read a length-prefixed string: a `u32` byte length followed by that many
/// raw bytes. No NUL terminator is stored on the wire.
///
/// The bytes must be valid UTF-8; anything else is a [`DecodeError`].
///
/// [`DecodeError`]: crate::DecodeError
pub fn read_string<R: Read>(reader: &mut R) -> DecodeResult<String> {
    let len = read_u32(reader)? as usize;
    // Cap the preallocation so a corrupt length cannot trigger a huge
    // allocation; a genuinely short stream still fails on read_exact.
    let mut bytes = Vec::with_capacity(len.min(64 * 1024));
    reader.by_ref().take(len as u64).read_to_end(&mut bytes)?;
    if bytes.len() != len {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("string of {len} bytes truncated at {}", bytes.len()),
        )
        .into());
    }
    Ok(String::from_utf8(bytes)?)
}

/// Write a length-prefixed string: a `u32` byte length followed by the raw
/// bytes, with no NUL terminator.
pub fn write_string<W: Write>(writer: &mut W, s: &str) -> std::io::Result<()> {
    let len = u32::try_from(s.len()).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "string length exceeds u32::MAX",
        )
    })?;
    write_u32(writer, len)?;
    writer.write_all(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::DecodeError;

    #[test]
    fn u32_is_little_endian_on_the_wire() {
        let mut buf = Vec::new();
        write_u32(&mut buf, 0x0403_0201).unwrap();
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(read_u32(&mut Cursor::new(&buf)).unwrap(), 0x0403_0201);
    }

    #[test]
    fn string_has_no_nul_terminator() {
        let mut buf = Vec::new();
        write_string(&mut buf, "boy").unwrap();
        assert_eq!(buf, [3, 0, 0, 0, b'b', b'o', b'y']);
        assert_eq!(read_string(&mut Cursor::new(&buf)).unwrap(), "boy");
    }

    #[test]
    fn empty_string_round_trips() {
        let mut buf = Vec::new();
        write_string(&mut buf, "").unwrap();
        assert_eq!(buf, [0, 0, 0, 0]);
        assert_eq!(read_string(&mut Cursor::new(&buf)).unwrap(), "");
    }

    #[test]
    fn truncated_string_is_a_decode_error() {
        // Claims 10 bytes, carries 3.
        let buf = [10, 0, 0, 0, b'a', b'b', b'c'];
        let err = read_string(&mut Cursor::new(&buf)).unwrap_err();
        assert!(matches!(err, DecodeError::Io(_)));
    }

    #[test]
    fn truncated_u32_is_a_decode_error() {
        let err = read_u32(&mut Cursor::new(&[0x01, 0x02])).unwrap_err();
        assert!(matches!(err, DecodeError::Io(_)));
    }

    #[test]
    fn non_utf8_string_is_a_decode_error() {
        let buf = [2, 0, 0, 0, 0xFF, 0xFE];
        let err = read_string(&mut Cursor::new(&buf)).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidString(_)));
    }

    #[test]
    fn oversized_length_prefix_does_not_allocate_blindly() {
        // u32::MAX length against a 4-byte stream must error, not abort.
        let buf = [0xFF, 0xFF, 0xFF, 0xFF];
        let err = read_string(&mut Cursor::new(&buf)).unwrap_err();
        assert!(matches!(err, DecodeError::Io(_)));
    }
}
