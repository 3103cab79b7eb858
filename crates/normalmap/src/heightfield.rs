//! Heightfield storage, sampling, and loaders.

use glam::Vec3;
use image::DynamicImage;

use crate::error::{NormalMapError, NormalMapResult};

/// A row-major grid of world-space height samples plus the world-space
/// extents the grid spans.
///
/// `world_size.x` and `world_size.z` are the horizontal extents covered by
/// the grid's columns and rows; `world_size.y` is the vertical scale the
/// loaders apply to normalized pixel values. Immutable once built.
#[derive(Debug, Clone)]
pub struct HeightField {
    width: u32,
    height: u32,
    samples: Vec<f32>,
    world_size: Vec3,
}

impl HeightField {
    /// Build a heightfield from world-space samples.
    ///
    /// `samples` is row-major: `samples[y * width + x]`.
    pub fn new(
        width: u32,
        height: u32,
        samples: Vec<f32>,
        world_size: Vec3,
    ) -> NormalMapResult<Self> {
        if width == 0 || height == 0 {
            return Err(NormalMapError::Empty { width, height });
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(NormalMapError::SampleCount {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
            world_size,
        })
    }

    /// Decode a grayscale image into world-space heights.
    ///
    /// Pixel values are normalized to `[0, 1]` and scaled by
    /// `world_size.y`. 8-bit and 16-bit grayscale sources produce the same
    /// heights for the same relative pixel values.
    pub fn from_image(image: &DynamicImage, world_size: Vec3) -> NormalMapResult<Self> {
        let (width, height) = (image.width(), image.height());
        let luma = image.to_luma16();
        let samples = luma
            .pixels()
            .map(|p| f32::from(p.0[0]) / f32::from(u16::MAX) * world_size.y)
            .collect();
        Self::new(width, height, samples, world_size)
    }

    /// Decode raw heightmap bytes.
    ///
    /// Raw files carry no dimensions, so the caller must supply them. Bit
    /// depth is inferred from the byte length: `width * height` bytes is
    /// 8-bit, twice that is 16-bit little-endian. Any other length is a
    /// [`NormalMapError::RawSize`].
    pub fn from_raw_bytes(
        bytes: &[u8],
        width: u32,
        height: u32,
        world_size: Vec3,
    ) -> NormalMapResult<Self> {
        let pixel_count = width as usize * height as usize;
        let samples = if bytes.len() == pixel_count {
            bytes
                .iter()
                .map(|&b| f32::from(b) / f32::from(u8::MAX) * world_size.y)
                .collect()
        } else if bytes.len() == pixel_count * 2 {
            bytes
                .chunks_exact(2)
                .map(|c| {
                    f32::from(u16::from_le_bytes([c[0], c[1]])) / f32::from(u16::MAX)
                        * world_size.y
                })
                .collect()
        } else {
            return Err(NormalMapError::RawSize {
                len: bytes.len(),
                width,
                height,
            });
        };
        Self::new(width, height, samples, world_size)
    }

    /// Grid width in samples.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in samples.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// World-space extents: x and z horizontal, y vertical.
    #[must_use]
    pub fn world_size(&self) -> Vec3 {
        self.world_size
    }

    /// The raw row-major sample buffer.
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample with clamp-to-edge semantics.
    ///
    /// Out-of-range coordinates are clamped to the nearest valid column and
    /// row (not wrapped, not mirrored). This is the edge policy for every
    /// boundary normal computation.
    #[must_use]
    pub fn sample(&self, x: i64, y: i64) -> f32 {
        let x = x.clamp(0, i64::from(self.width) - 1) as usize;
        let y = y.clamp(0, i64::from(self.height) - 1) as usize;
        self.samples[y * self.width as usize + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_3x2() -> HeightField {
        HeightField::new(
            3,
            2,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            Vec3::new(1.0, 1.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn sample_is_row_major() {
        let field = field_3x2();
        assert_eq!(field.sample(0, 0), 1.0);
        assert_eq!(field.sample(2, 0), 3.0);
        assert_eq!(field.sample(0, 1), 4.0);
        assert_eq!(field.sample(2, 1), 6.0);
    }

    #[test]
    fn sample_clamps_to_edges() {
        let field = field_3x2();
        for y in 0..2_i64 {
            assert_eq!(field.sample(-1, y), field.sample(0, y));
            assert_eq!(field.sample(-100, y), field.sample(0, y));
            assert_eq!(field.sample(3, y), field.sample(2, y));
            assert_eq!(field.sample(100, y), field.sample(2, y));
        }
        for x in 0..3_i64 {
            assert_eq!(field.sample(x, -1), field.sample(x, 0));
            assert_eq!(field.sample(x, 2), field.sample(x, 1));
        }
        // Both axes out of range at once.
        assert_eq!(field.sample(-5, -5), field.sample(0, 0));
        assert_eq!(field.sample(50, 50), field.sample(2, 1));
    }

    #[test]
    fn sample_count_mismatch_is_rejected() {
        let err = HeightField::new(3, 2, vec![0.0; 5], Vec3::ONE).unwrap_err();
        assert!(matches!(
            err,
            NormalMapError::SampleCount {
                expected: 6,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            HeightField::new(0, 4, vec![], Vec3::ONE).unwrap_err(),
            NormalMapError::Empty { .. }
        ));
        assert!(matches!(
            HeightField::new(4, 0, vec![], Vec3::ONE).unwrap_err(),
            NormalMapError::Empty { .. }
        ));
    }

    #[test]
    fn raw_8bit_scales_by_world_height() {
        let bytes = [0u8, 255, 51, 102];
        let field =
            HeightField::from_raw_bytes(&bytes, 2, 2, Vec3::new(1.0, 10.0, 1.0)).unwrap();
        assert_eq!(field.sample(0, 0), 0.0);
        assert_eq!(field.sample(1, 0), 10.0);
        assert!((field.sample(0, 1) - 2.0).abs() < 1e-4);
        assert!((field.sample(1, 1) - 4.0).abs() < 1e-4);
    }

    #[test]
    fn raw_16bit_is_little_endian() {
        let mut bytes = Vec::new();
        for v in [0u16, u16::MAX, u16::MAX / 2, 0] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let field =
            HeightField::from_raw_bytes(&bytes, 2, 2, Vec3::new(1.0, 2.0, 1.0)).unwrap();
        assert_eq!(field.sample(0, 0), 0.0);
        assert_eq!(field.sample(1, 0), 2.0);
        assert!((field.sample(0, 1) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn raw_with_wrong_length_is_rejected() {
        let err = HeightField::from_raw_bytes(&[0u8; 7], 2, 2, Vec3::ONE).unwrap_err();
        assert!(matches!(err, NormalMapError::RawSize { len: 7, .. }));
    }

    #[test]
    fn image_loader_preserves_dimensions_and_scale() {
        let img = image::GrayImage::from_fn(4, 3, |x, _| image::Luma([if x == 0 { 0 } else { 255 }]));
        let field =
            HeightField::from_image(&DynamicImage::ImageLuma8(img), Vec3::new(4.0, 8.0, 3.0))
                .unwrap();
        assert_eq!(field.width(), 4);
        assert_eq!(field.height(), 3);
        assert_eq!(field.sample(0, 0), 0.0);
        assert_eq!(field.sample(1, 0), 8.0);
    }
}
