use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::util::deg_to_rad;

/// A 4x4 transform matrix as consumed by a rendering pipeline.
///
/// The sixteen values are stored flattened in column-major order: indices
/// 0–3 are column 0, 4–7 column 1, 8–11 column 2 and 12–15 column 3, with
/// the translation components at indices 12–14. This matches the buffer
/// convention of the common graphics APIs, so `values` can be handed to a
/// uniform buffer writer as-is.
///
/// A freshly constructed matrix is always the identity.
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, Serialize)]
#[repr(C)]
#[serde(transparent)]
pub struct TransformMatrix {
    /// The flattened matrix elements, column-major.
    pub values: [f32; 16],
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformMatrix {
    /// The identity matrix.
    pub const IDENTITY: TransformMatrix = TransformMatrix {
        values: [
            1., 0., 0., 0., //
            0., 1., 0., 0., //
            0., 0., 1., 0., //
            0., 0., 0., 1., //
        ],
    };

    /// Creates a new matrix, initialized to the identity.
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Resets the matrix to the identity.
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Overwrites the matrix with a right-handed perspective projection.
    ///
    /// `fov_y_degrees` is the vertical field of view in **degrees**; the
    /// rotation methods take radians. The caller must keep `z_min` and
    /// `z_max` distinct and the field of view away from multiples of 360° —
    /// degenerate inputs divide by zero and leave inf or NaN in `values`
    /// without any error being raised.
    pub fn set_perspective(&mut self, fov_y_degrees: f32, aspect: f32, z_min: f32, z_max: f32) {
        let tan = deg_to_rad(fov_y_degrees / 2.).tan();
        let a = -(z_max + z_min) / (z_max - z_min);
        let b = (-2. * z_max * z_min) / (z_max - z_min);

        self.values = [
            0.5 / tan, 0., 0., 0., //
            0., 0.5 * aspect / tan, 0., 0., //
            0., 0., a, -1., //
            0., 0., b, 0., //
        ];
    }

    /// Overwrites the matrix with an orthographic projection.
    ///
    /// The caller must keep `right != left`, `top != bottom` and
    /// `far != near`; as with [`Self::set_perspective`], degenerate inputs
    /// propagate silently as inf or NaN.
    pub fn set_ortho(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        self.values = [
            2. / (right - left), 0., 0., 0., //
            0., 2. / (top - bottom), 0., 0., //
            0., 0., -2. / (far - near), 0., //
            0., 0., 0., 1., //
        ];
    }

    /// Rotates the matrix contents about the X axis by `angle` radians.
    ///
    /// The rotation is applied in place to the three basis columns, touching
    /// only the six entries in the rotation plane. The translation column is
    /// left as-is.
    pub fn rotate_x(&mut self, angle: f32) {
        let cos = angle.cos();
        let sin = angle.sin();
        let v = &mut self.values;

        let v1 = v[1];
        let v5 = v[5];
        let v9 = v[9];

        v[1] = v[1] * cos - v[2] * sin;
        v[5] = v[5] * cos - v[6] * sin;
        v[9] = v[9] * cos - v[10] * sin;

        v[2] = v[2] * cos + v1 * sin;
        v[6] = v[6] * cos + v5 * sin;
        v[10] = v[10] * cos + v9 * sin;
    }

    /// Rotates the matrix contents about the Y axis by `angle` radians.
    pub fn rotate_y(&mut self, angle: f32) {
        let cos = angle.cos();
        let sin = angle.sin();
        let v = &mut self.values;

        let v0 = v[0];
        let v4 = v[4];
        let v8 = v[8];

        v[0] = cos * v[0] + sin * v[2];
        v[4] = cos * v[4] + sin * v[6];
        v[8] = cos * v[8] + sin * v[10];

        v[2] = cos * v[2] - sin * v0;
        v[6] = cos * v[6] - sin * v4;
        v[10] = cos * v[10] - sin * v8;
    }

    /// Rotates the matrix contents about the Z axis by `angle` radians.
    pub fn rotate_z(&mut self, angle: f32) {
        let cos = angle.cos();
        let sin = angle.sin();
        let v = &mut self.values;

        let v0 = v[0];
        let v4 = v[4];
        let v8 = v[8];

        v[0] = cos * v[0] - sin * v[1];
        v[4] = cos * v[4] - sin * v[5];
        v[8] = cos * v[8] - sin * v[9];

        v[1] = cos * v[1] + sin * v0;
        v[5] = cos * v[5] + sin * v4;
        v[9] = cos * v[9] + sin * v8;
    }

    /// Adds `amount` to the X translation component (index 12).
    pub fn translate_x(&mut self, amount: f32) {
        self.values[12] += amount;
    }

    /// Adds `amount` to the Y translation component (index 13).
    pub fn translate_y(&mut self, amount: f32) {
        self.values[13] += amount;
    }

    /// Adds `amount` to the Z translation component (index 14).
    pub fn translate_z(&mut self, amount: f32) {
        self.values[14] += amount;
    }

    /// Returns a copy of the flattened elements, column-major.
    pub fn to_cols_array(&self) -> [f32; 16] {
        self.values
    }
}

impl AbsDiffEq for TransformMatrix {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for TransformMatrix {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
