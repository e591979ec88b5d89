// ── Value helpers ─────────────────────────────────────────────────────────────
//
// The inline constructors and matrix arithmetic of d2d1helper.h.  Pure value
// code: nothing here calls into Direct2D.

use std::ops::Mul;

use crate::dcommon::{
    D2D1_ALPHA_MODE, D2D1_PIXEL_FORMAT, D2D_COLOR_F, D2D_MATRIX_3X2_F, D2D_POINT_2F, D2D_POINT_2U,
    D2D_RECT_F, D2D_RECT_U, D2D_SIZE_F, D2D_SIZE_U,
};
use crate::foreign::DXGI_FORMAT;

use super::{
    ID2D1ColorContext, D2D1_ANTIALIAS_MODE_PER_PRIMITIVE, D2D1_BITMAP_OPTIONS,
    D2D1_BITMAP_PROPERTIES1, D2D1_BRUSH_PROPERTIES, D2D1_LAYER_OPTIONS_NONE, D2D1_LAYER_PARAMETERS,
};

/// Default DPI assumed by the `*::new` property constructors.
pub const DEFAULT_DPI: f32 = 96.0;

// ── Points, sizes, rects ──────────────────────────────────────────────────────

impl D2D_POINT_2F {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl D2D_POINT_2U {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl D2D_SIZE_F {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl D2D_SIZE_U {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl D2D_RECT_F {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// The largest representable rectangle; "no bounds" for layers.
    pub const fn infinite() -> Self {
        Self::new(-f32::MAX, -f32::MAX, f32::MAX, f32::MAX)
    }
}

impl D2D_RECT_U {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self { left, top, right, bottom }
    }
}

// ── Color ─────────────────────────────────────────────────────────────────────

impl D2D_COLOR_F {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from a packed `0xRRGGBB` value; the top byte is ignored.
    pub fn from_rgb(rgb: u32, alpha: f32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0), alpha)
    }
}

impl D2D1_PIXEL_FORMAT {
    pub const fn new(format: DXGI_FORMAT, alphaMode: D2D1_ALPHA_MODE) -> Self {
        Self { format, alphaMode }
    }
}

// ── Matrix ────────────────────────────────────────────────────────────────────
//
// Row-vector convention: a point transforms as `[x y 1] × M`, so `a * b`
// applies `a` first.

impl D2D_MATRIX_3X2_F {
    pub const fn identity() -> Self {
        Self { m11: 1.0, m12: 0.0, m21: 0.0, m22: 1.0, dx: 0.0, dy: 0.0 }
    }

    pub const fn translation(x: f32, y: f32) -> Self {
        Self { m11: 1.0, m12: 0.0, m21: 0.0, m22: 1.0, dx: x, dy: y }
    }

    /// Scale by `size` about `center`; `center` maps to itself.
    pub fn scale(size: D2D_SIZE_F, center: D2D_POINT_2F) -> Self {
        Self {
            m11: size.width,
            m12: 0.0,
            m21: 0.0,
            m22: size.height,
            dx: center.x - size.width * center.x,
            dy: center.y - size.height * center.y,
        }
    }

    /// `self` followed by `other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self {
            m11: a.m11 * b.m11 + a.m12 * b.m21,
            m12: a.m11 * b.m12 + a.m12 * b.m22,
            m21: a.m21 * b.m11 + a.m22 * b.m21,
            m22: a.m21 * b.m12 + a.m22 * b.m22,
            dx: a.dx * b.m11 + a.dy * b.m21 + b.dx,
            dy: a.dx * b.m12 + a.dy * b.m22 + b.dy,
        }
    }

    pub fn determinant(&self) -> f32 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn transform_point(&self, point: D2D_POINT_2F) -> D2D_POINT_2F {
        D2D_POINT_2F {
            x: point.x * self.m11 + point.y * self.m21 + self.dx,
            y: point.x * self.m12 + point.y * self.m22 + self.dy,
        }
    }
}

impl Mul for D2D_MATRIX_3X2_F {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

// ── Property blocks ───────────────────────────────────────────────────────────

impl D2D1_BRUSH_PROPERTIES {
    pub const fn new(opacity: f32, transform: D2D_MATRIX_3X2_F) -> Self {
        Self { opacity, transform }
    }
}

impl D2D1_BITMAP_PROPERTIES1 {
    /// Properties at [`DEFAULT_DPI`] with no color context.
    pub const fn new(bitmapOptions: D2D1_BITMAP_OPTIONS, pixelFormat: D2D1_PIXEL_FORMAT) -> Self {
        Self {
            pixelFormat,
            dpiX: DEFAULT_DPI,
            dpiY: DEFAULT_DPI,
            bitmapOptions,
            colorContext: std::ptr::null_mut::<ID2D1ColorContext>(),
        }
    }
}

impl Default for D2D1_LAYER_PARAMETERS {
    /// Unbounded, unmasked, fully opaque.
    fn default() -> Self {
        Self {
            contentBounds: D2D_RECT_F::infinite(),
            geometricMask: std::ptr::null_mut(),
            maskAntialiasMode: D2D1_ANTIALIAS_MODE_PER_PRIMITIVE,
            maskTransform: D2D_MATRIX_3X2_F::identity(),
            opacity: 1.0,
            opacityBrush: std::ptr::null_mut(),
            layerOptions: D2D1_LAYER_OPTIONS_NONE,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::d2d1::{D2D1_BITMAP_OPTIONS_TARGET, D2D1_MATRIX_3X2_F, D2D1_POINT_2F, D2D1_SIZE_F};
    use crate::dcommon::D2D1_ALPHA_MODE_IGNORE;
    use crate::foreign::DXGI_FORMAT_B8G8R8A8_UNORM;

    #[test]
    fn identity_leaves_points_alone() {
        let m = D2D1_MATRIX_3X2_F::identity();
        assert!(m.is_identity());
        assert_eq!(m.transform_point(D2D1_POINT_2F::new(3.5, -2.0)), D2D1_POINT_2F::new(3.5, -2.0));
        assert_eq!(m.determinant(), 1.0);
    }

    #[test]
    fn scale_fixes_its_center() {
        let center = D2D1_POINT_2F::new(10.0, 20.0);
        let m = D2D1_MATRIX_3X2_F::scale(D2D1_SIZE_F::new(2.0, 3.0), center);
        assert_eq!(m.transform_point(center), center);
        assert_eq!(m.transform_point(D2D1_POINT_2F::new(11.0, 21.0)), D2D1_POINT_2F::new(12.0, 23.0));
        assert_eq!(m.determinant(), 6.0);
    }

    #[test]
    fn product_applies_left_operand_first() {
        let scale = D2D1_MATRIX_3X2_F::scale(D2D1_SIZE_F::new(2.0, 2.0), D2D1_POINT_2F::default());
        let shift = D2D1_MATRIX_3X2_F::translation(5.0, 1.0);

        let p = D2D1_POINT_2F::new(1.0, 1.0);
        assert_eq!((scale * shift).transform_point(p), D2D1_POINT_2F::new(7.0, 3.0));
        assert_eq!((shift * scale).transform_point(p), D2D1_POINT_2F::new(12.0, 4.0));
        assert_eq!(scale.multiply(&D2D1_MATRIX_3X2_F::identity()), scale);
    }

    #[test]
    fn degenerate_matrix_is_not_invertible() {
        let flat = D2D1_MATRIX_3X2_F::scale(D2D1_SIZE_F::new(0.0, 4.0), D2D1_POINT_2F::default());
        assert!(!flat.is_invertible());
        assert!(D2D1_MATRIX_3X2_F::translation(3.0, 4.0).is_invertible());
        assert!(!D2D1_MATRIX_3X2_F::translation(3.0, 4.0).is_identity());
    }

    #[test]
    fn color_from_packed_rgb() {
        let c = D2D_COLOR_F::from_rgb(0xFF_8000, 0.5);
        assert_eq!(c, D2D_COLOR_F::new(1.0, 128.0 / 255.0, 0.0, 0.5));
        // The top byte is not alpha.
        assert_eq!(D2D_COLOR_F::from_rgb(0xAA00_0000, 1.0), D2D_COLOR_F::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn infinite_rect_spans_every_float() {
        let r = D2D_RECT_F::infinite();
        assert_eq!(r.left, -f32::MAX);
        assert_eq!(r.bottom, f32::MAX);
    }

    #[test]
    fn property_constructors() {
        let format = D2D1_PIXEL_FORMAT::new(DXGI_FORMAT_B8G8R8A8_UNORM, D2D1_ALPHA_MODE_IGNORE);
        let props = D2D1_BITMAP_PROPERTIES1::new(D2D1_BITMAP_OPTIONS_TARGET, format);
        assert_eq!(props.dpiX, DEFAULT_DPI);
        assert!(props.colorContext.is_null());
        assert_eq!(props.pixelFormat, format);

        let layer = D2D1_LAYER_PARAMETERS::default();
        assert_eq!(layer.contentBounds, D2D_RECT_F::infinite());
        assert!(layer.maskTransform.is_identity());
        assert!(layer.geometricMask.is_null() && layer.opacityBrush.is_null());
        assert_eq!(layer.opacity, 1.0);
    }
}
