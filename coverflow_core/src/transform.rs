// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal column-major 4×4 transform.
//!
//! Just enough 3D affine math to express a slide pose (translate, rotate about
//! Y, uniform scale) as a single matrix a presentation layer can hand to CSS
//! `matrix3d()` or a GPU.

use core::ops::Mul;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A column-major 4×4 affine transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column* of the matrix, matching the argument order
/// of CSS `matrix3d()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 4] {
        self.cols[i]
    }

    /// Creates a pure translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Creates a uniform scale in X and Y (Z is left alone, as CSS `scale()`
    /// does).
    #[inline]
    #[must_use]
    pub const fn from_scale_xy(s: f64) -> Self {
        Self {
            cols: [
                [s, 0.0, 0.0, 0.0],
                [0.0, s, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a rotation around the Y axis (radians), matching CSS
    /// `rotateY()`.
    #[inline]
    #[must_use]
    pub fn from_rotation_y(radians: f64) -> Self {
        #[cfg(feature = "std")]
        let (s, c) = radians.sin_cos();
        #[cfg(not(feature = "std"))]
        let (s, c) = (radians.sin(), radians.cos());
        Self {
            cols: [
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Is every entry [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }

    /// Flattens the matrix into the 16 arguments of CSS `matrix3d()`.
    #[inline]
    #[must_use]
    pub const fn to_cols_flat(self) -> [f64; 16] {
        let c = self.cols;
        [
            c[0][0], c[0][1], c[0][2], c[0][3], c[1][0], c[1][1], c[1][2], c[1][3], c[2][0],
            c[2][1], c[2][2], c[2][3], c[3][0], c[3][1], c[3][2], c[3][3],
        ]
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        for (j, col) in out.iter_mut().enumerate() {
            for (i, v) in col.iter_mut().enumerate() {
                *v = a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
            }
        }
        Self { cols: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: [f64; 4], b: [f64; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform3d::default(), Transform3d::IDENTITY);
    }

    #[test]
    fn identity_multiply() {
        let t = Transform3d::from_translation(1.0, 2.0, 3.0);
        assert_eq!(Transform3d::IDENTITY * t, t);
        assert_eq!(t * Transform3d::IDENTITY, t);
    }

    #[test]
    fn scale_leaves_depth_alone() {
        let s = Transform3d::from_scale_xy(0.8);
        assert_eq!(s.col(0)[0], 0.8);
        assert_eq!(s.col(1)[1], 0.8);
        assert_eq!(s.col(2)[2], 1.0);
    }

    #[test]
    fn rotation_y_matches_css_rotate_y() {
        // rotateY(90deg) maps +X onto -Z.
        let r = Transform3d::from_rotation_y(core::f64::consts::FRAC_PI_2);
        assert!(close(r.col(0), [0.0, 0.0, -1.0, 0.0]), "{:?}", r.col(0));
        assert!(close(r.col(2), [1.0, 0.0, 0.0, 0.0]), "{:?}", r.col(2));
        assert!(close(r.col(1), [0.0, 1.0, 0.0, 0.0]), "{:?}", r.col(1));
    }

    #[test]
    fn translate_after_rotate_keeps_translation_column() {
        let t = Transform3d::from_translation(220.0, 0.0, -200.0);
        let r = Transform3d::from_rotation_y(-core::f64::consts::FRAC_PI_3);
        let m = t * r;
        assert_eq!(m.col(3), [220.0, 0.0, -200.0, 1.0]);
    }

    #[test]
    fn flat_columns_follow_matrix3d_order() {
        let flat = Transform3d::from_translation(5.0, 6.0, 7.0).to_cols_flat();
        assert_eq!(&flat[12..], &[5.0, 6.0, 7.0, 1.0]);
        assert_eq!(flat[0], 1.0);
    }

    #[test]
    fn non_finite_detected() {
        let mut t = Transform3d::IDENTITY;
        assert!(t.is_finite());
        t.cols[0][3] = f64::INFINITY;
        assert!(!t.is_finite());
    }
}
