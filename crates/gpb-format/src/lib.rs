//! Encode and decode the GPB asset container framing.
//!
//! This crate provides the low-level wire primitives shared by every GPB
//! encoder and decoder: the fixed magic header, little-endian scalars,
//! length-prefixed strings, and the reference table that maps asset
//! identifiers to byte offsets. The per-asset-type payload schemas (fonts,
//! meshes, textures) live with their encoders, not here.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Stream-generic**: Everything works on `std::io::Read` / `std::io::Write`
//! - **No panics on malformed input**: Truncated or corrupt streams surface
//!   as [`DecodeError`], never as assertions
//!
//! # Key functions
//!
//! - [`write_header`] / [`validate_header`]: Magic and version bytes
//! - [`read_u32`] / [`write_u32`]: Fixed-width little-endian scalars
//! - [`read_string`] / [`write_string`]: Length-prefixed strings
//! - [`read_ref_table`] / [`write_ref_table`]: The asset reference table

mod error;

pub mod header;
pub mod reftable;
pub mod wire;

pub use error::{DecodeError, DecodeResult};
pub use header::{validate_header, write_header};
pub use reftable::{Reference, read_ref_table, write_ref_table};
pub use wire::{read_string, read_u32, write_string, write_u32};

/// The 9 bytes at the start of every GPB file: `\xAB GPB \xBB \r \n \x1A \n`.
///
/// Modeled on the PNG signature: the high-bit bytes catch 7-bit transports,
/// the CR/LF pair catches line-ending conversion, and `\x1A` stops `type`
/// on DOS.
pub const MAGIC: [u8; 9] = [0xAB, b'G', b'P', b'B', 0xBB, b'\r', b'\n', 0x1A, b'\n'];

/// Container version written by this tool: (major, minor).
///
/// Decoders do not currently interpret the version; it is carried for
/// forward compatibility.
pub const VERSION: [u8; 2] = [1, 5];
