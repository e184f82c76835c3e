/// Module containing the 2D linear algebra: Vectors, Rectangles and Matrices.
pub mod geometry;
/// Module containing utility functions that do not properly fit anywhere else.
pub mod utility;
