//! Generate object-space normal maps from heightfields.
//!
//! This crate turns a grid of height samples into an RGB normal map of the
//! same pixel dimensions: face normals are computed for the two triangles
//! of every grid cell, summed at each shared vertex, normalized, and packed
//! into one byte per channel. Geometry is never resampled; one output pixel
//! corresponds to one input sample.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives; callers control
//!   parallelism across images
//! - **Pure**: [`generate`] never mutates its input and is deterministic
//!   byte-for-byte
//! - **No NaN in output**: Degenerate inputs are rejected or fall back to a
//!   defined value instead of propagating NaN/Inf into pixels
//!
//! # Key items
//!
//! - [`HeightField`]: Row-major height samples plus world-space extents
//! - [`generate`]: The heightfield-to-normal-map pipeline
//! - [`NormalMap`]: The packed RGB result

mod error;

pub mod generator;
pub mod heightfield;

pub use error::{NormalMapError, NormalMapResult};
pub use generator::{NormalMap, generate};
pub use heightfield::HeightField;
