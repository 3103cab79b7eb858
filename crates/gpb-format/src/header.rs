//! Header writing and validation.

use std::io::{Read, Write};

use crate::MAGIC;
use crate::error::DecodeResult;

/// Write the 9-byte magic followed by the two version bytes.
pub fn write_header<W: Write>(writer: &mut W, version: [u8; 2]) -> std::io::Result<()> {
    writer.write_all(&MAGIC)?;
    writer.write_all(&version)
}

/// Check that the stream starts with the GPB magic.
///
/// Reads exactly the 9 magic bytes and compares byte-for-byte. On a
/// mismatch, returns `Ok(false)` without consuming anything further. On a
/// match, reads and discards the two version bytes and returns `Ok(true)`;
/// the version value is not interpreted.
///
/// A stream too short to hold the magic (or, once matched, the version) is
/// a decode error, not a mismatch.
pub fn validate_header<R: Read>(reader: &mut R) -> DecodeResult<bool> {
    let mut magic = [0u8; 9];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Ok(false);
    }
    let mut version = [0u8; 2];
    reader.read_exact(&mut version)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::*;
    use crate::VERSION;

    #[test]
    fn written_header_validates() {
        let mut buf = Vec::new();
        write_header(&mut buf, VERSION).unwrap();
        assert_eq!(buf.len(), 11);
        assert!(validate_header(&mut Cursor::new(&buf)).unwrap());
    }

    #[test]
    fn wrong_magic_is_rejected_without_error() {
        let buf = *b"not a gpb file at all";
        assert!(!validate_header(&mut Cursor::new(&buf)).unwrap());
    }

    #[test]
    fn rejection_consumes_at_most_the_magic_bytes() {
        let buf = *b"XXXXXXXXXremainder";
        let mut cursor = Cursor::new(&buf[..]);
        assert!(!validate_header(&mut cursor).unwrap());
        let mut rest = String::new();
        cursor.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "remainder");
    }

    #[test]
    fn acceptance_consumes_magic_and_version() {
        let mut buf = Vec::new();
        write_header(&mut buf, [3, 7]).unwrap();
        buf.extend_from_slice(b"payload");
        let mut cursor = Cursor::new(&buf);
        assert!(validate_header(&mut cursor).unwrap());
        let mut rest = String::new();
        cursor.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "payload");
    }

    #[test]
    fn future_versions_are_accepted() {
        let mut buf = Vec::new();
        write_header(&mut buf, [255, 255]).unwrap();
        assert!(validate_header(&mut Cursor::new(&buf)).unwrap());
    }

    #[test]
    fn truncated_magic_is_a_decode_error() {
        let buf = [0xAB, b'G', b'P'];
        assert!(validate_header(&mut Cursor::new(&buf)).is_err());
    }

    #[test]
    fn missing_version_after_magic_is_a_decode_error() {
        assert!(validate_header(&mut Cursor::new(&crate::MAGIC)).is_err());
    }
}
