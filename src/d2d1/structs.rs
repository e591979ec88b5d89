// ── Direct2D value structs ────────────────────────────────────────────────────
//
// Field names, order and widths follow d2d1.h / d2d1_1.h.  Pointer-bearing
// structs differ between 32- and 64-bit targets; the tests pin both.

use crate::dcommon::{
    D2D1_PIXEL_FORMAT, D2D_COLOR_F, D2D_MATRIX_3X2_F, D2D_MATRIX_4X4_F, D2D_POINT_2F,
    D2D_POINT_2U, D2D_RECT_F, D2D_RECT_U, D2D_SIZE_F, D2D_SIZE_U,
};

use super::{
    ID2D1ColorContext, ID2D1Effect, ID2D1Geometry, ID2D1Brush, D2D1_ANTIALIAS_MODE,
    D2D1_BITMAP_INTERPOLATION_MODE, D2D1_BITMAP_OPTIONS, D2D1_BUFFER_PRECISION,
    D2D1_COLOR_SPACE, D2D1_DEBUG_LEVEL, D2D1_DEVICE_CONTEXT_OPTIONS, D2D1_EXTEND_MODE,
    D2D1_FEATURE_LEVEL, D2D1_INTERPOLATION_MODE, D2D1_LAYER_OPTIONS, D2D1_LAYER_OPTIONS1,
    D2D1_PRINT_FONT_SUBSET_MODE, D2D1_RENDER_TARGET_TYPE, D2D1_RENDER_TARGET_USAGE,
    D2D1_THREADING_MODE,
};

// ── Aliases ───────────────────────────────────────────────────────────────────
//
// d2d1.h re-spells the dcommon.h types with a `D2D1_` prefix.

pub type D2D1_POINT_2U = D2D_POINT_2U;
pub type D2D1_POINT_2F = D2D_POINT_2F;
pub type D2D1_RECT_F = D2D_RECT_F;
pub type D2D1_RECT_U = D2D_RECT_U;
pub type D2D1_SIZE_F = D2D_SIZE_F;
pub type D2D1_SIZE_U = D2D_SIZE_U;
pub type D2D1_COLOR_F = D2D_COLOR_F;
pub type D2D1_MATRIX_3X2_F = D2D_MATRIX_3X2_F;
pub type D2D1_MATRIX_4X4_F = D2D_MATRIX_4X4_F;

/// Application-defined marker reported back by `Flush`/`EndDraw` on failure.
pub type D2D1_TAG = u64;

// ── d2d1.h ────────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_BITMAP_PROPERTIES {
    pub pixelFormat: D2D1_PIXEL_FORMAT,
    pub dpiX: f32,
    pub dpiY: f32,
}

/// One color stop of a gradient; `position` is in `0.0..=1.0`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_GRADIENT_STOP {
    pub position: f32,
    pub color: D2D1_COLOR_F,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_BRUSH_PROPERTIES {
    pub opacity: f32,
    pub transform: D2D1_MATRIX_3X2_F,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct D2D1_BITMAP_BRUSH_PROPERTIES {
    pub extendModeX: D2D1_EXTEND_MODE,
    pub extendModeY: D2D1_EXTEND_MODE,
    pub interpolationMode: D2D1_BITMAP_INTERPOLATION_MODE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_LINEAR_GRADIENT_BRUSH_PROPERTIES {
    pub startPoint: D2D1_POINT_2F,
    pub endPoint: D2D1_POINT_2F,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_RADIAL_GRADIENT_BRUSH_PROPERTIES {
    pub center: D2D1_POINT_2F,
    pub gradientOriginOffset: D2D1_POINT_2F,
    pub radiusX: f32,
    pub radiusY: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_ROUNDED_RECT {
    pub rect: D2D1_RECT_F,
    pub radiusX: f32,
    pub radiusY: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_ELLIPSE {
    pub point: D2D1_POINT_2F,
    pub radiusX: f32,
    pub radiusY: f32,
}

/// Creation parameters of a render target.  Zero dpi means "use the
/// system default".
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_RENDER_TARGET_PROPERTIES {
    pub r#type: D2D1_RENDER_TARGET_TYPE,
    pub pixelFormat: D2D1_PIXEL_FORMAT,
    pub dpiX: f32,
    pub dpiY: f32,
    pub usage: D2D1_RENDER_TARGET_USAGE,
    pub minLevel: D2D1_FEATURE_LEVEL,
}

/// Parameters of `ID2D1RenderTarget::PushLayer`.
///
/// `geometricMask` and `opacityBrush` may be null.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D2D1_LAYER_PARAMETERS {
    pub contentBounds: D2D1_RECT_F,
    pub geometricMask: *mut ID2D1Geometry,
    pub maskAntialiasMode: D2D1_ANTIALIAS_MODE,
    pub maskTransform: D2D1_MATRIX_3X2_F,
    pub opacity: f32,
    pub opacityBrush: *mut ID2D1Brush,
    pub layerOptions: D2D1_LAYER_OPTIONS,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct D2D1_FACTORY_OPTIONS {
    pub debugLevel: D2D1_DEBUG_LEVEL,
}

// ── d2d1_1.h ──────────────────────────────────────────────────────────────────

/// `colorContext` may be null, meaning sRGB.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D2D1_BITMAP_PROPERTIES1 {
    pub pixelFormat: D2D1_PIXEL_FORMAT,
    pub dpiX: f32,
    pub dpiY: f32,
    pub bitmapOptions: D2D1_BITMAP_OPTIONS,
    pub colorContext: *mut ID2D1ColorContext,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct D2D1_RENDERING_CONTROLS {
    pub bufferPrecision: D2D1_BUFFER_PRECISION,
    pub tileSize: D2D1_SIZE_U,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D2D1_EFFECT_INPUT_DESCRIPTION {
    pub effect: *mut ID2D1Effect,
    pub inputIndex: u32,
    pub inputRectangle: D2D1_RECT_F,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_IMAGE_BRUSH_PROPERTIES {
    pub sourceRectangle: D2D1_RECT_F,
    pub extendModeX: D2D1_EXTEND_MODE,
    pub extendModeY: D2D1_EXTEND_MODE,
    pub interpolationMode: D2D1_INTERPOLATION_MODE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct D2D1_BITMAP_BRUSH_PROPERTIES1 {
    pub extendModeX: D2D1_EXTEND_MODE,
    pub extendModeY: D2D1_EXTEND_MODE,
    pub interpolationMode: D2D1_INTERPOLATION_MODE,
}

/// Parameters of `ID2D1DeviceContext::PushLayer`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D2D1_LAYER_PARAMETERS1 {
    pub contentBounds: D2D1_RECT_F,
    pub geometricMask: *mut ID2D1Geometry,
    pub maskAntialiasMode: D2D1_ANTIALIAS_MODE,
    pub maskTransform: D2D1_MATRIX_3X2_F,
    pub opacity: f32,
    pub opacityBrush: *mut ID2D1Brush,
    pub layerOptions: D2D1_LAYER_OPTIONS1,
}

/// Passed to `D2D1CreateDevice` and `D2D1CreateDeviceContext`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct D2D1_CREATION_PROPERTIES {
    pub threadingMode: D2D1_THREADING_MODE,
    pub debugLevel: D2D1_DEBUG_LEVEL,
    pub options: D2D1_DEVICE_CONTEXT_OPTIONS,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_PRINT_CONTROL_PROPERTIES {
    pub fontSubset: D2D1_PRINT_FONT_SUBSET_MODE,
    /// DPI used when rasterizing content that cannot be printed as vectors.
    pub rasterDPI: f32,
    pub colorSpace: D2D1_COLOR_SPACE,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
