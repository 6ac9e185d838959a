#![deny(missing_docs)]

//! A minimal 4x4 transform matrix for real-time rendering pipelines.
//!
//! [`TransformMatrix`] keeps sixteen `f32` values in the flattened
//! column-major layout that graphics APIs expect in a uniform or constant
//! buffer. It can rebuild itself as the identity or as a perspective or
//! orthographic projection, and applies incremental axis rotations and axis
//! translations in place. Anything heavier (full matrix products, inversion,
//! vector and quaternion types) belongs to a dedicated linear algebra crate
//! such as [`glam`], which [`TransformMatrix`] converts to and from.

pub use glam;
pub use mint;

pub use transform_matrix::TransformMatrix;
pub use util::deg_to_rad;

mod convert;
mod transform_matrix;
mod util;
