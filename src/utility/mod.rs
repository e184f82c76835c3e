mod inlines;
pub use self::inlines::lerp;
#[cfg(test)]
pub(crate) use self::inlines::{float_identical, mat3_identical, vec2_identical, vec3_identical};
