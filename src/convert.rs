use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::TransformMatrix;

// `TransformMatrix` is a repr(C) wrapper around sixteen f32s, so a byte view
// is safe and lets callers copy it straight into a uniform buffer.
unsafe impl Zeroable for TransformMatrix {}
unsafe impl Pod for TransformMatrix {}

impl From<[f32; 16]> for TransformMatrix {
    fn from(values: [f32; 16]) -> Self {
        Self { values }
    }
}

impl From<TransformMatrix> for [f32; 16] {
    fn from(matrix: TransformMatrix) -> Self {
        matrix.values
    }
}

impl From<Mat4> for TransformMatrix {
    fn from(matrix: Mat4) -> Self {
        Self {
            values: matrix.to_cols_array(),
        }
    }
}

impl From<TransformMatrix> for Mat4 {
    fn from(matrix: TransformMatrix) -> Self {
        Mat4::from_cols_array(&matrix.values)
    }
}

impl From<mint::ColumnMatrix4<f32>> for TransformMatrix {
    fn from(matrix: mint::ColumnMatrix4<f32>) -> Self {
        Self {
            values: matrix.into(),
        }
    }
}

impl From<TransformMatrix> for mint::ColumnMatrix4<f32> {
    fn from(matrix: TransformMatrix) -> Self {
        matrix.values.into()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

    use super::*;

    #[test]
    pub fn test_identity_converts_to_glam_identity() {
        assert_eq!(Mat4::from(TransformMatrix::default()), Mat4::IDENTITY);
        assert_eq!(TransformMatrix::from(Mat4::IDENTITY), TransformMatrix::IDENTITY);
    }

    #[test]
    pub fn test_incremental_rotations_match_glam() {
        let mut matrix = TransformMatrix::new();
        matrix.rotate_x(FRAC_PI_3);
        matrix.rotate_y(FRAC_PI_2);

        // Each incremental rotation pre-multiplies the current contents.
        let expected = Mat4::from_rotation_y(FRAC_PI_2) * Mat4::from_rotation_x(FRAC_PI_3);
        assert_relative_eq!(matrix, TransformMatrix::from(expected), epsilon = 1e-6);
    }

    #[test]
    pub fn test_translation_lands_in_mint_w_column() {
        let mut matrix = TransformMatrix::new();
        matrix.translate_x(5.);
        matrix.translate_y(-2.);

        let m: mint::ColumnMatrix4<f32> = matrix.into();
        assert_eq!(m.w.x, 5.);
        assert_eq!(m.w.y, -2.);
        assert_eq!(m.w.w, 1.);
    }

    #[test]
    pub fn test_pod_view_matches_column_major_layout() {
        let mut matrix = TransformMatrix::new();
        matrix.translate_z(3.);

        let bytes = bytemuck::bytes_of(&matrix);
        assert_eq!(bytes.len(), 64);

        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats[14], 3.);
        assert_eq!(floats[15], 1.);
    }

    #[test]
    pub fn test_serializes_as_flat_sequence() {
        let json = serde_json::to_string(&TransformMatrix::default()).unwrap();
        assert_eq!(
            json,
            "[1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0]"
        );
    }
}
