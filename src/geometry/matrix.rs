use crate::geometry::{Rect, Vec2, Vec3};
use log::warn;
use overload::overload;
use std::fmt::Formatter;
use std::ops;

/// A 3x3 matrix.
///
/// Mat3 represents an affine transformation in a 2D space, expressed in homogeneous coordinates.
///
/// Values are stored in row-major order: the entry at row `r` and column `c` is `m[3 * r + c]`.
///
/// The type intentionally does not implement `PartialEq`: entries may legitimately be NaN, so
/// comparisons are left to the caller.
#[derive(Clone, Copy, Debug)]
pub struct Mat3 {
    /// The nine values of the matrix, in row-major order.
    pub m: [f64; 9],
}

impl Mat3 {
    /// Constructs a matrix from an array of nine values, given in row-major order.
    /// # Examples
    /// ```
    /// use geom::geometry::Mat3;
    ///
    /// let vals = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    /// let m = Mat3::new(&vals);
    ///
    /// assert_eq!(m.get(0, 2), 3.0);
    /// assert_eq!(m.get(2, 0), 7.0);
    /// ```
    pub fn new(values: &[f64; 9]) -> Mat3 {
        Mat3 { m: *values }
    }

    /// Constructs a matrix filled with zeroes.
    pub fn zero() -> Mat3 {
        Mat3 { m: [0.0; 9] }
    }

    /// Constructs the identity matrix.
    /// # Examples
    /// ```
    /// use geom::geometry::{Mat3, Vec2};
    ///
    /// let m = Mat3::identity();
    /// let v = m.times_vec2(&Vec2::new(3.0, -1.5), 1.0);
    ///
    /// assert_eq!(v.x, 3.0);
    /// assert_eq!(v.y, -1.5);
    /// assert_eq!(v.z, 1.0);
    /// ```
    pub fn identity() -> Mat3 {
        Mat3 {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Constructs the transformation mapping the `camera` rectangle onto the `display` rectangle.
    ///
    /// The resulting matrix scales and translates each axis independently, so that `camera.min`
    /// lands on `display.min` and `camera.max` lands on `display.max`. Every other point is
    /// linearly interpolated on each axis. No axis is flipped.
    ///
    /// A camera with zero width or height results in infinite or NaN entries. If debug assertions
    /// are enabled, a warning is issued in this case.
    /// # Examples
    /// ```
    /// use geom::geometry::{Mat3, Rect, Vec2};
    ///
    /// let camera = Rect::new(Vec2::new(10.0, 16.0), Vec2::new(50.0, 32.0));
    /// let display = Rect::new(Vec2::new(-1.0, -2.0), Vec2::new(3.0, 4.0));
    /// let mat = Mat3::camera_2d(&camera, &display);
    /// let centre = mat.times_vec2(&Vec2::new(30.0, 24.0), 1.0).vec2();
    ///
    /// assert_eq!(centre.x, 1.0);
    /// assert_eq!(centre.y, 1.0);
    /// ```
    pub fn camera_2d(camera: &Rect, display: &Rect) -> Mat3 {
        #[cfg(debug_assertions)]
        {
            if camera.is_degenerate() {
                warn!("Building a camera transform from degenerate rectangle {}", camera);
            }
        }
        let scale_x = (display.max.x - display.min.x) / (camera.max.x - camera.min.x);
        let scale_y = (display.max.y - display.min.y) / (camera.max.y - camera.min.y);
        let translate_x = display.min.x - camera.min.x * scale_x;
        let translate_y = display.min.y - camera.min.y * scale_y;
        Mat3 {
            m: [
                scale_x,
                0.0,
                translate_x,
                0.0,
                scale_y,
                translate_y,
                0.0,
                0.0,
                1.0,
            ],
        }
    }

    /// Returns the entry at the given `row` and `col`.
    /// # Panics
    /// Panics if `3 * row + col` is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[3 * row + col]
    }

    /// Multiplies the matrix by the column vector `(v.x, v.y, bias)`.
    ///
    /// `bias` is the homogeneous component of the vector: `1.0` applies the translation part of the
    /// matrix, as for points, while `0.0` ignores it, as for directions.
    ///
    /// Infinite and NaN values propagate following the usual floating point rules.
    /// # Examples
    /// ```
    /// use geom::geometry::{Mat3, Vec2};
    ///
    /// let m = Mat3::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// let v = m.times_vec2(&Vec2::new(10.0, 11.0), 1.0);
    ///
    /// assert_eq!(v.x, 35.0);
    /// assert_eq!(v.y, 101.0);
    /// assert_eq!(v.z, 167.0);
    /// ```
    pub fn times_vec2(&self, v: &Vec2, bias: f64) -> Vec3 {
        let x = self.m[0] * v.x + self.m[1] * v.y + self.m[2] * bias;
        let y = self.m[3] * v.x + self.m[4] * v.y + self.m[5] * bias;
        let z = self.m[6] * v.x + self.m[7] * v.y + self.m[8] * bias;
        Vec3 { x, y, z }
    }

    /// Combines two matrices by multiplying each entry with the one in the same position.
    ///
    /// This is the elementwise (Hadamard) product and **not** the row-by-column matrix product.
    /// # Examples
    /// ```
    /// use geom::geometry::Mat3;
    ///
    /// let a = Mat3::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// let b = a.times(&a);
    ///
    /// assert_eq!(b.m, [1.0, 4.0, 9.0, 16.0, 25.0, 36.0, 49.0, 64.0, 81.0]);
    /// ```
    pub fn times(&self, other: &Mat3) -> Mat3 {
        let mut m = [0.0; 9];
        for (i, val) in m.iter_mut().enumerate() {
            *val = self.m[i] * other.m[i];
        }
        Mat3 { m }
    }
}

impl ops::Index<usize> for Mat3 {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.m[index]
    }
}

impl std::fmt::Display for Mat3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mat3[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
            self.m[0],
            self.m[1],
            self.m[2],
            self.m[3],
            self.m[4],
            self.m[5],
            self.m[6],
            self.m[7],
            self.m[8]
        )
    }
}

// transforms a point, with the translation applied
overload!((a: ?Mat3) * (b: ?Vec2) -> Vec3 {a.times_vec2(&b, 1.0)});
