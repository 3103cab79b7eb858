//! The heightfield-to-normal-map pipeline.
//!
//! Two passes over the grid:
//!
//! 1. **Face pass**: every cell of the grid is split into two triangles
//!    along a fixed diagonal; each triangle's unnormalized face normal is
//!    computed from a cross product of its edges.
//! 2. **Vertex pass**: every grid vertex sums the face normals of the
//!    triangles that touch it, normalizes the sum, and packs the result
//!    into one RGB pixel. No area weighting is applied; all triangles on
//!    the grid have equal area, so the unweighted sum matches an
//!    area-weighted average up to a scalar.

use glam::Vec3;
use image::RgbImage;

use crate::error::{NormalMapError, NormalMapResult};
use crate::heightfield::HeightField;

/// A generated normal map: packed RGB8 pixels, row-major, with the same
/// dimensions as the source heightfield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalMap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl NormalMap {
    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The packed RGB buffer, three bytes per pixel, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Decode the pixel at `(x, y)` back into a vector with components in
    /// `[-1, 1]`.
    #[must_use]
    pub fn normal_at(&self, x: u32, y: u32) -> Vec3 {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        let decode = |b: u8| f32::from(b) / 255.0 * 2.0 - 1.0;
        Vec3::new(
            decode(self.pixels[i]),
            decode(self.pixels[i + 1]),
            decode(self.pixels[i + 2]),
        )
    }

    /// Convert into an [`RgbImage`] for saving.
    #[must_use]
    pub fn into_rgb_image(self) -> RgbImage {
        RgbImage::from_raw(self.width, self.height, self.pixels)
            .expect("pixel buffer length matches dimensions")
    }
}

/// Unnormalized face normals for the two triangles of each grid cell.
///
/// Cell `(x, z)` covers columns `x..=x+1` and rows `z..=z+1`. Triangle 1 is
/// (bottomLeft, topLeft, topRight); triangle 2 is (bottomLeft, topRight,
/// bottomRight). Built in one pass, consumed in one pass, then dropped.
struct FaceNormalGrid {
    cells_x: usize,
    normal1: Vec<Vec3>,
    normal2: Vec<Vec3>,
}

impl FaceNormalGrid {
    fn build(field: &HeightField, scale_x: f32, scale_z: f32) -> Self {
        let cells_x = (field.width() - 1) as usize;
        let cells_z = (field.height() - 1) as usize;
        let mut normal1 = Vec::with_capacity(cells_x * cells_z);
        let mut normal2 = Vec::with_capacity(cells_x * cells_z);

        for z in 0..cells_z {
            for x in 0..cells_x {
                let (xi, zi) = (x as i64, z as i64);
                let top_left = world_point(field, scale_x, scale_z, xi, zi);
                let bottom_left = world_point(field, scale_x, scale_z, xi, zi + 1);
                let bottom_right = world_point(field, scale_x, scale_z, xi + 1, zi + 1);
                let top_right = world_point(field, scale_x, scale_z, xi + 1, zi);

                normal1.push(face_normal(bottom_left, top_left, top_right));
                normal2.push(face_normal(bottom_left, top_right, bottom_right));
            }
        }

        Self {
            cells_x,
            normal1,
            normal2,
        }
    }

    fn normal1(&self, x: usize, z: usize) -> Vec3 {
        self.normal1[z * self.cells_x + x]
    }

    fn normal2(&self, x: usize, z: usize) -> Vec3 {
        self.normal2[z * self.cells_x + x]
    }
}

/// Lift a grid vertex into world space: columns map to +X, rows to +Z,
/// heights to +Y. Out-of-range coordinates clamp to the grid edge.
fn world_point(field: &HeightField, scale_x: f32, scale_z: f32, x: i64, z: i64) -> Vec3 {
    Vec3::new(x as f32 * scale_x, field.sample(x, z), z as f32 * scale_z)
}

/// Unnormalized normal of triangle `(e, f, g)`.
///
/// The operand order `cross(g - e, f - e)` is load-bearing: it yields
/// +Y-facing normals for the vertex winding used by [`FaceNormalGrid`].
fn face_normal(e: Vec3, f: Vec3, g: Vec3) -> Vec3 {
    (g - e).cross(f - e)
}

/// Sum the face normals of every triangle touching vertex `(x, z)`.
///
/// A vertex is shared by up to four cells; which of a cell's two triangles
/// actually touch it depends on which corner of that cell the vertex is:
/// the diagonal runs bottomLeft-to-topRight, so the top-left corner sits on
/// triangle 1 only and the bottom-right corner on triangle 2 only.
fn summed_vertex_normal(
    faces: &FaceNormalGrid,
    x: usize,
    z: usize,
    width: usize,
    height: usize,
) -> Vec3 {
    let mut sum = Vec3::ZERO;

    if x > 0 {
        // Bottom-right corner of the cell up-left: triangle 2 only.
        if z > 0 {
            sum += faces.normal2(x - 1, z - 1);
        }
        // Top-right corner of the cell to the left: both triangles.
        if z < height - 1 {
            sum += faces.normal1(x - 1, z);
            sum += faces.normal2(x - 1, z);
        }
    }
    if x < width - 1 {
        // Bottom-left corner of the cell above: both triangles.
        if z > 0 {
            sum += faces.normal1(x, z - 1);
            sum += faces.normal2(x, z - 1);
        }
        // Top-left corner of the cell at (x, z): triangle 1 only.
        if z < height - 1 {
            sum += faces.normal1(x, z);
        }
    }

    sum
}

/// Map a component in `[-1, 1]` to a byte.
fn pack_component(c: f32) -> u8 {
    ((c + 1.0) * 0.5 * 255.0).round() as u8
}

/// Generate a normal map from `field`.
///
/// The output has exactly the heightfield's dimensions, one pixel per
/// sample. Pixels follow the usual normal-map channel convention: red is
/// the tilt along grid columns, green the tilt along grid rows, and blue
/// the up component, so a flat field encodes as `(128, 128, 255)`
/// everywhere. The computation itself runs in a y-up world frame; the up
/// component lands in blue when packing.
///
/// # Errors
///
/// [`NormalMapError::Dimensions`] if the field is narrower or shorter than
/// 2 samples. A single row or column has no triangles, and the horizontal
/// scale `world_size / (dim - 1)` would divide by zero; rejecting the input
/// keeps NaN and Inf out of the output.
pub fn generate(field: &HeightField) -> NormalMapResult<NormalMap> {
    let (width, height) = (field.width(), field.height());
    if width < 2 || height < 2 {
        return Err(NormalMapError::Dimensions { width, height });
    }

    let world = field.world_size();
    let scale_x = world.x / (width - 1) as f32;
    let scale_z = world.z / (height - 1) as f32;

    let faces = FaceNormalGrid::build(field, scale_x, scale_z);

    let (w, h) = (width as usize, height as usize);
    let mut pixels = Vec::with_capacity(w * h * 3);
    for z in 0..h {
        for x in 0..w {
            let sum = summed_vertex_normal(&faces, x, z, w, h);
            // The sum cannot be zero on a 2x2-or-larger grid, but keep the
            // output defined rather than emitting NaN.
            let n = if sum == Vec3::ZERO {
                Vec3::Y
            } else {
                sum.normalize()
            };
            pixels.push(pack_component(n.x));
            pixels.push(pack_component(n.z));
            pixels.push(pack_component(n.y));
        }
    }

    Ok(NormalMap {
        width,
        height,
        pixels,
    })
}
