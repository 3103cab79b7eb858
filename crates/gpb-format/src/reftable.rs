//! Reference table encode/decode.
//!
//! The reference table follows the header and maps asset identifiers to
//! absolute byte offsets within the file: a `u32` entry count, then that
//! many `{ string xref, u32 type_id, u32 offset }` records.

use std::io::{Read, Write};

use crate::error::DecodeResult;
use crate::wire::{read_string, read_u32, write_string, write_u32};

/// One entry in a GPB reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Identifier the object is looked up by.
    pub xref: String,
    /// Asset type tag; opaque at the framing layer.
    pub type_id: u32,
    /// Absolute byte offset of the object within the file. Not validated
    /// here; whoever dereferences it must bounds-check against the stream.
    pub offset: u32,
}

/// Read a reference table: a `u32` count followed by that many entries.
pub fn read_ref_table<R: Read>(reader: &mut R) -> DecodeResult<Vec<Reference>> {
    let count = read_u32(reader)?;
    // Capped preallocation: a corrupt count fails on the first short read
    // instead of reserving gigabytes up front.
    let mut refs = Vec::with_capacity(count.min(1024) as usize);
    for _ in 0..count {
        refs.push(Reference {
            xref: read_string(reader)?,
            type_id: read_u32(reader)?,
            offset: read_u32(reader)?,
        });
    }
    Ok(refs)
}

/// Write a reference table: a `u32` count followed by the entries in order.
pub fn write_ref_table<W: Write>(writer: &mut W, refs: &[Reference]) -> std::io::Result<()> {
    let count = u32::try_from(refs.len()).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "reference table exceeds u32::MAX entries",
        )
    })?;
    write_u32(writer, count)?;
    for r in refs {
        write_string(writer, &r.xref)?;
        write_u32(writer, r.type_id)?;
        write_u32(writer, r.offset)?;
    }
    Ok(())
}
