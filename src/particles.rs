//! Geometry for the background point field. Rendering lives in
//! `app::background`; everything here is plain math so it can be tested
//! off the browser.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const STAR_COUNT: usize = 2000;
pub const STAR_SEED: u64 = 0x5eed_cafe;
/// Half the edge of the cube the points are scattered in.
pub const FIELD_EXTENT: f32 = 5.0;
/// Camera sits on the z axis looking at the origin.
pub const CAMERA_Z: f32 = 1.0;

const FOV_Y_DEGREES: f32 = 75.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;
const SWAY_SPEED: f64 = 0.1;
const SWAY_AMPLITUDE: f64 = 0.1;

/// Flat `[x, y, z, x, y, z, ...]` positions, ready for a vertex buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    positions: Vec<f32>,
}

impl Starfield {
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let positions = (0..count * 3)
            .map(|_| rng.gen_range(-FIELD_EXTENT..FIELD_EXTENT))
            .collect();
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Points flattened onto the viewport for the CSS background:
    /// `(left %, top %, depth 0..1)`.
    pub fn screen_points(&self) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        let span = FIELD_EXTENT * 2.0;
        self.positions.chunks_exact(3).map(move |p| {
            (
                (p[0] + FIELD_EXTENT) / span * 100.0,
                (p[1] + FIELD_EXTENT) / span * 100.0,
                (p[2] + FIELD_EXTENT) / span,
            )
        })
    }
}

/// Gentle sway of the whole field: `(rotation x, rotation y)` in radians.
pub fn rotation_at(elapsed_secs: f64) -> (f32, f32) {
    let t = elapsed_secs * SWAY_SPEED;
    (
        (t.sin() * SWAY_AMPLITUDE) as f32,
        (t.cos() * SWAY_AMPLITUDE) as f32,
    )
}

/// Column-major 4x4 matrix, the layout `uniformMatrix4fv` expects.
pub type Mat4 = [f32; 16];

fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0; 16];
    for col in 0..4 {
        for row in 0..4 {
            out[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
        }
    }
    out
}

#[rustfmt::skip]
fn perspective(aspect: f32) -> Mat4 {
    let f = 1.0 / (FOV_Y_DEGREES.to_radians() / 2.0).tan();
    let range = NEAR - FAR;
    [
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (FAR + NEAR) / range, -1.0,
        0.0, 0.0, 2.0 * FAR * NEAR / range, 0.0,
    ]
}

#[rustfmt::skip]
fn rotation_x(a: f32) -> Mat4 {
    let (s, c) = a.sin_cos();
    [
        1.0, 0.0, 0.0, 0.0,
        0.0, c, s, 0.0,
        0.0, -s, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

#[rustfmt::skip]
fn rotation_y(a: f32) -> Mat4 {
    let (s, c) = a.sin_cos();
    [
        c, 0.0, -s, 0.0,
        0.0, 1.0, 0.0, 0.0,
        s, 0.0, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

#[rustfmt::skip]
fn translation_z(z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, z, 1.0,
    ]
}

/// Projection * view * model for the field at `elapsed_secs`.
pub fn view_projection(elapsed_secs: f64, aspect: f32) -> Mat4 {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    let (rx, ry) = rotation_at(elapsed_secs);
    let model = multiply(&rotation_y(ry), &rotation_x(rx));
    let view = translation_z(-CAMERA_Z);
    multiply(&perspective(aspect), &multiply(&view, &model))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(m: &Mat4, p: [f32; 3]) -> [f32; 4] {
        let v = [p[0], p[1], p[2], 1.0];
        let mut out = [0.0; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|k| m[k * 4 + row] * v[k]).sum();
        }
        out
    }

    #[test]
    fn test_generate_is_bounded_and_deterministic() {
        let a = Starfield::generate(STAR_COUNT, STAR_SEED);
        assert_eq!(a.len(), STAR_COUNT);
        assert_eq!(a.positions().len(), STAR_COUNT * 3);
        assert!(a
            .positions()
            .iter()
            .all(|c| (-FIELD_EXTENT..FIELD_EXTENT).contains(c)));
        assert_eq!(a, Starfield::generate(STAR_COUNT, STAR_SEED));
        assert_ne!(a, Starfield::generate(STAR_COUNT, STAR_SEED + 1));
        assert!(Starfield::generate(0, STAR_SEED).is_empty());
    }

    #[test]
    fn test_screen_points_in_viewport() {
        let field = Starfield::generate(100, 7);
        let points = field.screen_points().collect::<Vec<_>>();
        assert_eq!(points.len(), 100);
        for (left, top, depth) in points {
            assert!((0.0..=100.0).contains(&left));
            assert!((0.0..=100.0).contains(&top));
            assert!((0.0..=1.0).contains(&depth));
        }
    }

    #[test]
    fn test_rotation_stays_small() {
        for i in 0..200 {
            let (x, y) = rotation_at(i as f64 * 0.37);
            assert!(x.abs() <= 0.1 + f32::EPSILON);
            assert!(y.abs() <= 0.1 + f32::EPSILON);
        }
        let (x, y) = rotation_at(0.0);
        assert_eq!(x, 0.0);
        assert!((y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let m = view_projection(12.5, 16.0 / 9.0);
        let clip = transform(&m, [0.0, 0.0, 0.0]);
        assert!(clip[3] > 0.0);
        assert!((clip[0] / clip[3]).abs() < 1e-5);
        assert!((clip[1] / clip[3]).abs() < 1e-5);
        let depth = clip[2] / clip[3];
        assert!((-1.0..=1.0).contains(&depth));
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let m = view_projection(0.0, 1.0);
        // well behind the camera on the z axis
        let clip = transform(&m, [0.0, 0.0, 4.0]);
        assert!(clip[3] < 0.0);
    }

    #[test]
    fn test_bad_aspect_is_ignored() {
        assert_eq!(view_projection(1.0, 0.0), view_projection(1.0, 1.0));
        assert_eq!(view_projection(1.0, f32::NAN), view_projection(1.0, 1.0));
    }
}
