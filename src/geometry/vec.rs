use overload::overload;
use std::fmt::Formatter;
use std::ops;

/// A vector of two components.
///
/// Vec2 class represents either a point or a free vector in a 2D space.
///
/// A Vec2 consist of two coordinates, usually called `x`, and `y`.
#[derive(Clone, Copy, Debug)]
pub struct Vec2 {
    /// A double precision floating point representing the `x` component of the vector.
    pub x: f64,
    /// A double precision floating point representing the `y` component of the vector.
    pub y: f64,
}

impl Vec2 {
    /// Constructs a 2D zero vector, a vector in the form `(0.0, 0.0)`.
    /// # Examples
    /// ```
    /// use geom::geometry::Vec2;
    ///
    /// let v = Vec2::zero();
    ///
    /// assert_eq!(v.x, 0.0);
    /// assert_eq!(v.y, 0.0);
    /// ```
    pub fn zero() -> Vec2 {
        Vec2 { x: 0., y: 0. }
    }

    /// Constructs a vector with the given `(x, y)` components.
    /// # Examples
    /// ```
    /// use geom::geometry::Vec2;
    ///
    /// let v = Vec2::new(3.5, -2.2);
    ///
    /// assert_eq!(v.x, 3.5);
    /// assert_eq!(v.y, -2.2);
    /// ```
    pub fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec2[{}, {}]", self.x, self.y)
    }
}

overload!((a: ?Vec2) + (b: ?Vec2) -> Vec2 {Vec2{x:a.x+b.x,y:a.y+b.y}});
overload!((a: ?Vec2) - (b: ?Vec2) -> Vec2 {Vec2{x:a.x-b.x,y:a.y-b.y}});
overload!((a: ?Vec2) + (b: f64) -> Vec2 {Vec2{x:a.x+b,y:a.y+b}});
overload!((a: ?Vec2) - (b: f64) -> Vec2 {Vec2{x:a.x-b,y:a.y-b}});
overload!((a: ?Vec2) * (b: f64) -> Vec2 {Vec2{x:a.x*b,y:a.y*b}});
overload!(- (a: ?Vec2) -> Vec2 {Vec2{x:-a.x,y:-a.y}});
overload!((a: &mut Vec2) += (b: ?Vec2){a.x+=b.x;a.y+=b.y;});
overload!((a: &mut Vec2) -= (b: ?Vec2){a.x-=b.x;a.y-=b.y;});
overload!((a: &mut Vec2) *= (b: f64){a.x*=b;a.y*=b;});

/// A vector of three components.
///
/// Vec3 is mostly used as a homogeneous 2D point: `x` and `y` are the coordinates, while `z` is
/// the weight given to the translation part of a [Mat3](crate::geometry::Mat3) transform.
#[derive(Clone, Copy, Debug)]
pub struct Vec3 {
    /// A double precision floating point representing the `x` component of the vector.
    pub x: f64,
    /// A double precision floating point representing the `y` component of the vector.
    pub y: f64,
    /// A double precision floating point representing the `z` component of the vector.
    pub z: f64,
}

impl Vec3 {
    /// Constructs a 3D zero vector, a vector in the form `(0.0, 0.0, 0.0)`.
    /// # Examples
    /// ```
    /// use geom::geometry::Vec3;
    ///
    /// let v = Vec3::zero();
    ///
    /// assert_eq!(v.x, 0.0);
    /// assert_eq!(v.y, 0.0);
    /// assert_eq!(v.z, 0.0);
    /// ```
    pub fn zero() -> Vec3 {
        Vec3 {
            x: 0.,
            y: 0.,
            z: 0.,
        }
    }

    /// Constructs a vector with the given `(x, y, z)` components.
    /// # Examples
    /// ```
    /// use geom::geometry::Vec3;
    ///
    /// let v = Vec3::new(3.5, -2.2, 1.0);
    ///
    /// assert_eq!(v.x, 3.5);
    /// assert_eq!(v.y, -2.2);
    /// assert_eq!(v.z, 1.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }

    /// Projects the vector back to 2D by dropping the `z` component.
    ///
    /// No perspective division is performed: `x` and `y` are returned as they are, regardless of
    /// the value of `z`.
    /// # Examples
    /// ```
    /// use geom::geometry::Vec3;
    ///
    /// let v = Vec3::new(4.0, -6.0, 2.0);
    /// let projected = v.vec2();
    ///
    /// assert_eq!(projected.x, 4.0);
    /// assert_eq!(projected.y, -6.0);
    /// ```
    pub fn vec2(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec3[{}, {}, {}]", self.x, self.y, self.z)
    }
}

overload!((a: ?Vec3) + (b: ?Vec3) -> Vec3 {Vec3{x:a.x+b.x,y:a.y+b.y,z:a.z+b.z}});
overload!((a: ?Vec3) - (b: ?Vec3) -> Vec3 {Vec3{x:a.x-b.x,y:a.y-b.y,z:a.z-b.z}});
overload!((a: ?Vec3) * (b: f64) -> Vec3 {Vec3{x:a.x*b,y:a.y*b,z:a.z*b}});
overload!(- (a: ?Vec3) -> Vec3 {Vec3{x:-a.x,y:-a.y,z:-a.z}});
