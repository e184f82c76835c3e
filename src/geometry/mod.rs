mod vec;
pub use self::vec::Vec2;
pub use self::vec::Vec3;
mod rect;
pub use self::rect::Rect;
mod matrix;
pub use self::matrix::Mat3;

#[cfg(test)]
mod tests;
