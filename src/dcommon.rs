// ── Types shared by Direct2D and DirectWrite ──────────────────────────────────
//
// Source of truth: dcommon.h.  DirectWrite reaches these through
// `DWRITE_MEASURING_MODE` and `IDWriteGeometrySink`, so this module is built
// regardless of which header features are enabled.

#![allow(non_snake_case, non_camel_case_types, non_upper_case_globals)]

use crate::com::{IUnknown, IUnknownVtbl, HRESULT};
use crate::foreign::DXGI_FORMAT;

// ── Enums ─────────────────────────────────────────────────────────────────────

native_enum! {
    /// How glyph metrics are measured.
    pub enum DWRITE_MEASURING_MODE: i32 {
        DWRITE_MEASURING_MODE_NATURAL = 0,
        DWRITE_MEASURING_MODE_GDI_CLASSIC = 1,
        DWRITE_MEASURING_MODE_GDI_NATURAL = 2,
    }
}

native_enum! {
    /// Interpretation of the alpha channel.
    pub enum D2D1_ALPHA_MODE: i32 {
        D2D1_ALPHA_MODE_UNKNOWN = 0,
        D2D1_ALPHA_MODE_PREMULTIPLIED = 1,
        D2D1_ALPHA_MODE_STRAIGHT = 2,
        D2D1_ALPHA_MODE_IGNORE = 3,
        D2D1_ALPHA_MODE_FORCE_DWORD = 0xffff_ffff_u32 as i32,
    }
}

native_enum! {
    pub enum D2D1_FIGURE_BEGIN: i32 {
        D2D1_FIGURE_BEGIN_FILLED = 0,
        D2D1_FIGURE_BEGIN_HOLLOW = 1,
        D2D1_FIGURE_BEGIN_FORCE_DWORD = 0xffff_ffff_u32 as i32,
    }
}

native_enum! {
    pub enum D2D1_FIGURE_END: i32 {
        D2D1_FIGURE_END_OPEN = 0,
        D2D1_FIGURE_END_CLOSED = 1,
        D2D1_FIGURE_END_FORCE_DWORD = 0xffff_ffff_u32 as i32,
    }
}

native_enum! {
    /// Per-segment overrides for stroking.
    pub flags D2D1_PATH_SEGMENT: i32 {
        D2D1_PATH_SEGMENT_NONE = 0x0000_0000,
        D2D1_PATH_SEGMENT_FORCE_UNSTROKED = 0x0000_0001,
        D2D1_PATH_SEGMENT_FORCE_ROUND_LINE_JOIN = 0x0000_0002,
        D2D1_PATH_SEGMENT_FORCE_DWORD = 0xffff_ffff_u32 as i32,
    }
}

native_enum! {
    pub enum D2D1_FILL_MODE: i32 {
        D2D1_FILL_MODE_ALTERNATE = 0,
        D2D1_FILL_MODE_WINDING = 1,
        D2D1_FILL_MODE_FORCE_DWORD = 0xffff_ffff_u32 as i32,
    }
}

// ── Plain structs ─────────────────────────────────────────────────────────────

/// Pixel format and alpha mode of a bitmap or render target.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct D2D1_PIXEL_FORMAT {
    pub format: DXGI_FORMAT,
    pub alphaMode: D2D1_ALPHA_MODE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct D2D_POINT_2U {
    pub x: u32,
    pub y: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D_POINT_2F {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D_RECT_F {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct D2D_RECT_U {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D_SIZE_F {
    pub width: f32,
    pub height: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct D2D_SIZE_U {
    pub width: u32,
    pub height: u32,
}

/// A 3×2 affine matrix in row-vector convention.
///
/// The native type is a union of `_11.._32`, `m11..dy` and `m[3][2]`; all
/// three name the same six floats in this order.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D_MATRIX_3X2_F {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub dx: f32,
    pub dy: f32,
}

/// A 4×4 matrix, used for perspective bitmap drawing.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D_MATRIX_4X4_F {
    pub m: [[f32; 4]; 4],
}

/// Straight RGBA color with components in `0.0..=1.0`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D_COLOR_F {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// A cubic Bézier segment; the start point is the end of the previous segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct D2D1_BEZIER_SEGMENT {
    pub point1: D2D_POINT_2F,
    pub point2: D2D_POINT_2F,
    pub point3: D2D_POINT_2F,
}

// ── ID2D1SimplifiedGeometrySink ───────────────────────────────────────────────

com_interface! {
    /// Receives geometry as lines and cubic Béziers.  DirectWrite calls this
    /// `IDWriteGeometrySink` and feeds glyph outlines into it.
    #[uuid(0x2cd9069e_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1SimplifiedGeometrySink(ID2D1SimplifiedGeometrySinkVtbl): IUnknown(IUnknownVtbl) {
        fn SetFillMode(fillMode: D2D1_FILL_MODE) -> (),
        fn SetSegmentFlags(vertexFlags: D2D1_PATH_SEGMENT) -> (),
        fn BeginFigure(startPoint: D2D_POINT_2F, figureBegin: D2D1_FIGURE_BEGIN) -> (),
        fn AddLines(points: *const D2D_POINT_2F, pointsCount: u32) -> (),
        fn AddBeziers(beziers: *const D2D1_BEZIER_SEGMENT, beziersCount: u32) -> (),
        fn EndFigure(figureEnd: D2D1_FIGURE_END) -> (),
        fn Close() -> HRESULT,
    }
}

/// DirectWrite's name for [`ID2D1SimplifiedGeometrySink`].
pub type IDWriteGeometrySink = ID2D1SimplifiedGeometrySink;

// ── Tests ─────────────────────────────────────────────────────────────────────
