use crate::geometry::Vec2;
use log::warn;
use std::fmt::Formatter;

/// An axis aligned rectangle.
///
/// The rectangle is defined by two corners: `min`, the corner with the smallest coordinates, and
/// `max`, the one with the largest coordinates.
///
/// Nothing prevents a Rect from being degenerate (zero width or height) or inverted (`min` greater
/// than `max`): such rectangles are simply carried through the arithmetic that uses them.
#[derive(Clone, Copy, Debug)]
pub struct Rect {
    /// The corner with the smallest coordinates.
    pub min: Vec2,
    /// The corner with the largest coordinates.
    pub max: Vec2,
}

impl Rect {
    /// Constructs a rectangle with the given corners.
    ///
    /// Corners are stored as given. If debug assertions are enabled, a warning is issued in case
    /// `min` is greater than `max` on any axis.
    /// # Examples
    /// ```
    /// use geom::geometry::{Rect, Vec2};
    ///
    /// let rect = Rect::new(Vec2::new(-1.0, -2.0), Vec2::new(3.0, 4.0));
    ///
    /// assert_eq!(rect.min.x, -1.0);
    /// assert_eq!(rect.max.y, 4.0);
    /// ```
    pub fn new(min: Vec2, max: Vec2) -> Rect {
        #[cfg(debug_assertions)]
        {
            if min.x > max.x || min.y > max.y {
                warn!("Creating inverted rectangle {} {}", min, max);
            }
        }
        Rect { min, max }
    }

    /// Returns the extent of the rectangle along the `x` axis.
    /// # Examples
    /// ```
    /// use geom::geometry::{Rect, Vec2};
    ///
    /// let rect = Rect::new(Vec2::new(10.0, 16.0), Vec2::new(50.0, 32.0));
    ///
    /// assert_eq!(rect.width(), 40.0);
    /// ```
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the extent of the rectangle along the `y` axis.
    /// # Examples
    /// ```
    /// use geom::geometry::{Rect, Vec2};
    ///
    /// let rect = Rect::new(Vec2::new(10.0, 16.0), Vec2::new(50.0, 32.0));
    ///
    /// assert_eq!(rect.height(), 16.0);
    /// ```
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns true if the rectangle has no area, either because its width or its height is zero.
    ///
    /// A rectangle with NaN coordinates is not considered degenerate by this function.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Returns the point halfway between `min` and `max`.
    /// # Examples
    /// ```
    /// use geom::geometry::{Rect, Vec2};
    ///
    /// let rect = Rect::new(Vec2::new(10.0, 16.0), Vec2::new(50.0, 32.0));
    /// let centre = rect.centre();
    ///
    /// assert_eq!(centre.x, 30.0);
    /// assert_eq!(centre.y, 24.0);
    /// ```
    pub fn centre(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect[{}, {}]", self.min, self.max)
    }
}
