// ── Direct2D interfaces ───────────────────────────────────────────────────────
//
// The device / device-context chain is bound slot by slot:
//
//   IUnknown ─ ID2D1Resource ─ ID2D1RenderTarget ─ ID2D1DeviceContext ─ ID2D1DeviceContext1
//   IUnknown ─ ID2D1Resource ─ ID2D1Device ─ ID2D1Device1
//
// Everything those methods merely hand around (brushes, bitmaps, geometries,
// effects, ...) is declared opaque.
//
// A derived interface that re-declares a base method name (`CreateBitmap`,
// `DrawBitmap`, `PushLayer`, `CreateDeviceContext`, ...) gets a new slot at
// the end of the table, exactly as in C++.  The derived wrapper shadows the
// base one; the base slot stays reachable through `Deref`.

use std::ffi::c_void;

use crate::com::{IUnknown, IUnknownVtbl, BOOL, GUID, HRESULT};
use crate::dcommon::{D2D1_PIXEL_FORMAT, DWRITE_MEASURING_MODE};
use crate::dwrite::{
    IDWriteRenderingParams, IDWriteTextFormat, IDWriteTextLayout, DWRITE_GLYPH_RUN,
    DWRITE_GLYPH_RUN_DESCRIPTION,
};
use crate::foreign::{IDXGISurface, IWICBitmapSource, IWICColorContext, IWICImagingFactory, DXGI_FORMAT};
use crate::print::IPrintDocumentPackageTarget;

use super::*;

// ── Referenced-only interfaces ────────────────────────────────────────────────

opaque_interface! {
    #[uuid(0x06152247_6f50_465a_9245_118bfd3b6007)]
    interface ID2D1Factory;
}

opaque_interface! {
    /// Direct2D 1.1 factory; the interface `D2D1CreateDevice` creates its
    /// devices from.
    #[uuid(0xbb12d362_daee_4b9a_aa1d_14ba401cfa1f)]
    interface ID2D1Factory1;
}

opaque_interface! {
    #[uuid(0x65019f75_8da2_497c_b32c_dfa34e48ede6)]
    interface ID2D1Image;
}

opaque_interface! {
    #[uuid(0xa2296057_ea42_4099_983b_539fb6505426)]
    interface ID2D1Bitmap;
}

opaque_interface! {
    #[uuid(0xa898a84c_3873_4588_b08b_ebbf978df041)]
    interface ID2D1Bitmap1;
}

opaque_interface! {
    #[uuid(0x1c4820bb_5771_4518_a581_2fe4dd0ec657)]
    interface ID2D1ColorContext;
}

opaque_interface! {
    #[uuid(0x2cd906a8_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1Brush;
}

opaque_interface! {
    #[uuid(0x2cd906a9_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1SolidColorBrush;
}

opaque_interface! {
    #[uuid(0x2cd906aa_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1BitmapBrush;
}

opaque_interface! {
    #[uuid(0x41343a53_e41a_49a2_91cd_21793bbb62e5)]
    interface ID2D1BitmapBrush1;
}

opaque_interface! {
    #[uuid(0x2cd906ab_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1LinearGradientBrush;
}

opaque_interface! {
    #[uuid(0x2cd906ac_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1RadialGradientBrush;
}

opaque_interface! {
    #[uuid(0xfe9e984d_3f95_407c_b5db_cb94d4e8f87c)]
    interface ID2D1ImageBrush;
}

opaque_interface! {
    #[uuid(0x2cd906a7_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1GradientStopCollection;
}

opaque_interface! {
    #[uuid(0xae1572f4_5dd0_4777_998b_9279472ae63b)]
    interface ID2D1GradientStopCollection1;
}

opaque_interface! {
    #[uuid(0x2cd9069d_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1StrokeStyle;
}

opaque_interface! {
    #[uuid(0x2cd906a1_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1Geometry;
}

opaque_interface! {
    #[uuid(0xa16907d7_bc02_4801_99e8_8cf7f485f774)]
    interface ID2D1GeometryRealization;
}

opaque_interface! {
    #[uuid(0x2cd9069b_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1Layer;
}

opaque_interface! {
    #[uuid(0x2cd906c2_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1Mesh;
}

opaque_interface! {
    #[uuid(0x2cd90695_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1BitmapRenderTarget;
}

opaque_interface! {
    #[uuid(0x28506e39_ebf6_46a1_bb47_fd85565ab957)]
    interface ID2D1DrawingStateBlock;
}

opaque_interface! {
    #[uuid(0x28211a43_7d89_476f_8181_2d6159b220ad)]
    interface ID2D1Effect;
}

opaque_interface! {
    #[uuid(0xb4f34a19_2383_4d76_94f6_ec343657c3dc)]
    interface ID2D1CommandList;
}

opaque_interface! {
    #[uuid(0x2f543dc3_cfc1_4211_864f_cfd91c6f3395)]
    interface ID2D1GdiMetafile;
}

opaque_interface! {
    #[uuid(0x2c1d867d_c290_41c8_ae7e_34a98702e9a5)]
    interface ID2D1PrintControl;
}

// ── ID2D1Resource ─────────────────────────────────────────────────────────────

com_interface! {
    /// Any object created by a factory.
    #[uuid(0x2cd90691_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1Resource(ID2D1ResourceVtbl): IUnknown(IUnknownVtbl) {
        fn GetFactory(factory: *mut *mut ID2D1Factory) -> (),
    }
}

// ── ID2D1RenderTarget ─────────────────────────────────────────────────────────

com_interface! {
    /// A surface that accepts drawing commands between `BeginDraw` and
    /// `EndDraw`.
    ///
    /// `GetPixelFormat`, `GetSize` and `GetPixelSize` return structs through
    /// a hidden pointer that follows `This`; see the `pixel_format`, `size`
    /// and `pixel_size` helpers for by-value access.
    #[uuid(0x2cd90694_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1RenderTarget(ID2D1RenderTargetVtbl): ID2D1Resource(ID2D1ResourceVtbl) {
        fn CreateBitmap(
            size: D2D1_SIZE_U,
            srcData: *const c_void,
            pitch: u32,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES,
            bitmap: *mut *mut ID2D1Bitmap,
        ) -> HRESULT,
        fn CreateBitmapFromWicBitmap(
            wicBitmapSource: *mut IWICBitmapSource,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES,
            bitmap: *mut *mut ID2D1Bitmap,
        ) -> HRESULT,
        fn CreateSharedBitmap(
            riid: *const GUID,
            data: *mut c_void,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES,
            bitmap: *mut *mut ID2D1Bitmap,
        ) -> HRESULT,
        fn CreateBitmapBrush(
            bitmap: *mut ID2D1Bitmap,
            bitmapBrushProperties: *const D2D1_BITMAP_BRUSH_PROPERTIES,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            bitmapBrush: *mut *mut ID2D1BitmapBrush,
        ) -> HRESULT,
        fn CreateSolidColorBrush(
            color: *const D2D1_COLOR_F,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            solidColorBrush: *mut *mut ID2D1SolidColorBrush,
        ) -> HRESULT,
        fn CreateGradientStopCollection(
            gradientStops: *const D2D1_GRADIENT_STOP,
            gradientStopsCount: u32,
            colorInterpolationGamma: D2D1_GAMMA,
            extendMode: D2D1_EXTEND_MODE,
            gradientStopCollection: *mut *mut ID2D1GradientStopCollection,
        ) -> HRESULT,
        fn CreateLinearGradientBrush(
            linearGradientBrushProperties: *const D2D1_LINEAR_GRADIENT_BRUSH_PROPERTIES,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            gradientStopCollection: *mut ID2D1GradientStopCollection,
            linearGradientBrush: *mut *mut ID2D1LinearGradientBrush,
        ) -> HRESULT,
        fn CreateRadialGradientBrush(
            radialGradientBrushProperties: *const D2D1_RADIAL_GRADIENT_BRUSH_PROPERTIES,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            gradientStopCollection: *mut ID2D1GradientStopCollection,
            radialGradientBrush: *mut *mut ID2D1RadialGradientBrush,
        ) -> HRESULT,
        fn CreateCompatibleRenderTarget(
            desiredSize: *const D2D1_SIZE_F,
            desiredPixelSize: *const D2D1_SIZE_U,
            desiredFormat: *const D2D1_PIXEL_FORMAT,
            options: D2D1_COMPATIBLE_RENDER_TARGET_OPTIONS,
            bitmapRenderTarget: *mut *mut ID2D1BitmapRenderTarget,
        ) -> HRESULT,
        fn CreateLayer(size: *const D2D1_SIZE_F, layer: *mut *mut ID2D1Layer) -> HRESULT,
        fn CreateMesh(mesh: *mut *mut ID2D1Mesh) -> HRESULT,
        /// `strokeStyle` may be null for a solid stroke.
        fn DrawLine(
            point0: D2D1_POINT_2F,
            point1: D2D1_POINT_2F,
            brush: *mut ID2D1Brush,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
        ) -> (),
        fn DrawRectangle(
            rect: *const D2D1_RECT_F,
            brush: *mut ID2D1Brush,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
        ) -> (),
        fn FillRectangle(rect: *const D2D1_RECT_F, brush: *mut ID2D1Brush) -> (),
        fn DrawRoundedRectangle(
            roundedRect: *const D2D1_ROUNDED_RECT,
            brush: *mut ID2D1Brush,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
        ) -> (),
        fn FillRoundedRectangle(roundedRect: *const D2D1_ROUNDED_RECT, brush: *mut ID2D1Brush) -> (),
        fn DrawEllipse(
            ellipse: *const D2D1_ELLIPSE,
            brush: *mut ID2D1Brush,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
        ) -> (),
        fn FillEllipse(ellipse: *const D2D1_ELLIPSE, brush: *mut ID2D1Brush) -> (),
        fn DrawGeometry(
            geometry: *mut ID2D1Geometry,
            brush: *mut ID2D1Brush,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
        ) -> (),
        fn FillGeometry(geometry: *mut ID2D1Geometry, brush: *mut ID2D1Brush, opacityBrush: *mut ID2D1Brush) -> (),
        fn FillMesh(mesh: *mut ID2D1Mesh, brush: *mut ID2D1Brush) -> (),
        fn FillOpacityMask(
            opacityMask: *mut ID2D1Bitmap,
            brush: *mut ID2D1Brush,
            content: D2D1_OPACITY_MASK_CONTENT,
            destinationRectangle: *const D2D1_RECT_F,
            sourceRectangle: *const D2D1_RECT_F,
        ) -> (),
        fn DrawBitmap(
            bitmap: *mut ID2D1Bitmap,
            destinationRectangle: *const D2D1_RECT_F,
            opacity: f32,
            interpolationMode: D2D1_BITMAP_INTERPOLATION_MODE,
            sourceRectangle: *const D2D1_RECT_F,
        ) -> (),
        fn DrawText(
            string: *const u16,
            stringLength: u32,
            textFormat: *mut IDWriteTextFormat,
            layoutRect: *const D2D1_RECT_F,
            defaultFillBrush: *mut ID2D1Brush,
            options: D2D1_DRAW_TEXT_OPTIONS,
            measuringMode: DWRITE_MEASURING_MODE,
        ) -> (),
        fn DrawTextLayout(
            origin: D2D1_POINT_2F,
            textLayout: *mut IDWriteTextLayout,
            defaultFillBrush: *mut ID2D1Brush,
            options: D2D1_DRAW_TEXT_OPTIONS,
        ) -> (),
        fn DrawGlyphRun(
            baselineOrigin: D2D1_POINT_2F,
            glyphRun: *const DWRITE_GLYPH_RUN,
            foregroundBrush: *mut ID2D1Brush,
            measuringMode: DWRITE_MEASURING_MODE,
        ) -> (),
        fn SetTransform(transform: *const D2D1_MATRIX_3X2_F) -> (),
        fn GetTransform(transform: *mut D2D1_MATRIX_3X2_F) -> (),
        fn SetAntialiasMode(antialiasMode: D2D1_ANTIALIAS_MODE) -> (),
        fn GetAntialiasMode() -> D2D1_ANTIALIAS_MODE,
        fn SetTextAntialiasMode(textAntialiasMode: D2D1_TEXT_ANTIALIAS_MODE) -> (),
        fn GetTextAntialiasMode() -> D2D1_TEXT_ANTIALIAS_MODE,
        fn SetTextRenderingParams(textRenderingParams: *mut IDWriteRenderingParams) -> (),
        fn GetTextRenderingParams(textRenderingParams: *mut *mut IDWriteRenderingParams) -> (),
        fn SetTags(tag1: D2D1_TAG, tag2: D2D1_TAG) -> (),
        fn GetTags(tag1: *mut D2D1_TAG, tag2: *mut D2D1_TAG) -> (),
        fn PushLayer(layerParameters: *const D2D1_LAYER_PARAMETERS, layer: *mut ID2D1Layer) -> (),
        fn PopLayer() -> (),
        /// Both tags may be null.
        fn Flush(tag1: *mut D2D1_TAG, tag2: *mut D2D1_TAG) -> HRESULT,
        fn SaveDrawingState(drawingStateBlock: *mut ID2D1DrawingStateBlock) -> (),
        fn RestoreDrawingState(drawingStateBlock: *mut ID2D1DrawingStateBlock) -> (),
        fn PushAxisAlignedClip(clipRect: *const D2D1_RECT_F, antialiasMode: D2D1_ANTIALIAS_MODE) -> (),
        fn PopAxisAlignedClip() -> (),
        fn Clear(clearColor: *const D2D1_COLOR_F) -> (),
        fn BeginDraw() -> (),
        /// Both tags may be null.  `D2DERR_RECREATE_TARGET` means every
        /// device-dependent resource must be rebuilt.
        fn EndDraw(tag1: *mut D2D1_TAG, tag2: *mut D2D1_TAG) -> HRESULT,
        fn GetPixelFormat(retval: *mut D2D1_PIXEL_FORMAT) -> *mut D2D1_PIXEL_FORMAT,
        fn SetDpi(dpiX: f32, dpiY: f32) -> (),
        fn GetDpi(dpiX: *mut f32, dpiY: *mut f32) -> (),
        fn GetSize(retval: *mut D2D1_SIZE_F) -> *mut D2D1_SIZE_F,
        fn GetPixelSize(retval: *mut D2D1_SIZE_U) -> *mut D2D1_SIZE_U,
        fn GetMaximumBitmapSize() -> u32,
        fn IsSupported(renderTargetProperties: *const D2D1_RENDER_TARGET_PROPERTIES) -> BOOL,
    }
}

impl ID2D1RenderTarget {
    /// `GetPixelFormat` by value.
    ///
    /// # Safety
    ///
    /// `self` must be a live render target.
    pub unsafe fn pixel_format(&self) -> D2D1_PIXEL_FORMAT {
        let mut out = D2D1_PIXEL_FORMAT::default();
        // SAFETY: `out` is a valid destination for the hidden return value.
        unsafe { self.GetPixelFormat(&mut out) };
        out
    }

    /// `GetSize` by value, in DIPs.
    ///
    /// # Safety
    ///
    /// `self` must be a live render target.
    pub unsafe fn size(&self) -> D2D1_SIZE_F {
        let mut out = D2D1_SIZE_F::default();
        // SAFETY: as above.
        unsafe { self.GetSize(&mut out) };
        out
    }

    /// `GetPixelSize` by value.
    ///
    /// # Safety
    ///
    /// `self` must be a live render target.
    pub unsafe fn pixel_size(&self) -> D2D1_SIZE_U {
        let mut out = D2D1_SIZE_U::default();
        // SAFETY: as above.
        unsafe { self.GetPixelSize(&mut out) };
        out
    }
}

// ── ID2D1DeviceContext ────────────────────────────────────────────────────────

com_interface! {
    /// Direct2D 1.1 render target bound to a device; draws into any
    /// `ID2D1Image` set with `SetTarget`.
    #[uuid(0xe8f7fe7a_191c_466d_ad95_975678bda998)]
    interface ID2D1DeviceContext(ID2D1DeviceContextVtbl): ID2D1RenderTarget(ID2D1RenderTargetVtbl) {
        fn CreateBitmap(
            size: D2D1_SIZE_U,
            sourceData: *const c_void,
            pitch: u32,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES1,
            bitmap: *mut *mut ID2D1Bitmap1,
        ) -> HRESULT,
        fn CreateBitmapFromWicBitmap(
            wicBitmapSource: *mut IWICBitmapSource,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES1,
            bitmap: *mut *mut ID2D1Bitmap1,
        ) -> HRESULT,
        fn CreateColorContext(
            space: D2D1_COLOR_SPACE,
            profile: *const u8,
            profileSize: u32,
            colorContext: *mut *mut ID2D1ColorContext,
        ) -> HRESULT,
        fn CreateColorContextFromFilename(filename: *const u16, colorContext: *mut *mut ID2D1ColorContext) -> HRESULT,
        fn CreateColorContextFromWicColorContext(
            wicColorContext: *mut IWICColorContext,
            colorContext: *mut *mut ID2D1ColorContext,
        ) -> HRESULT,
        fn CreateBitmapFromDxgiSurface(
            surface: *mut IDXGISurface,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES1,
            bitmap: *mut *mut ID2D1Bitmap1,
        ) -> HRESULT,
        fn CreateEffect(effectId: *const GUID, effect: *mut *mut ID2D1Effect) -> HRESULT,
        fn CreateGradientStopCollection(
            straightAlphaGradientStops: *const D2D1_GRADIENT_STOP,
            straightAlphaGradientStopsCount: u32,
            preInterpolationSpace: D2D1_COLOR_SPACE,
            postInterpolationSpace: D2D1_COLOR_SPACE,
            bufferPrecision: D2D1_BUFFER_PRECISION,
            extendMode: D2D1_EXTEND_MODE,
            colorInterpolationMode: D2D1_COLOR_INTERPOLATION_MODE,
            gradientStopCollection1: *mut *mut ID2D1GradientStopCollection1,
        ) -> HRESULT,
        fn CreateImageBrush(
            image: *mut ID2D1Image,
            imageBrushProperties: *const D2D1_IMAGE_BRUSH_PROPERTIES,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            imageBrush: *mut *mut ID2D1ImageBrush,
        ) -> HRESULT,
        fn CreateBitmapBrush(
            bitmap: *mut ID2D1Bitmap,
            bitmapBrushProperties: *const D2D1_BITMAP_BRUSH_PROPERTIES1,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            bitmapBrush: *mut *mut ID2D1BitmapBrush1,
        ) -> HRESULT,
        fn CreateCommandList(commandList: *mut *mut ID2D1CommandList) -> HRESULT,
        fn IsDxgiFormatSupported(format: DXGI_FORMAT) -> BOOL,
        fn IsBufferPrecisionSupported(bufferPrecision: D2D1_BUFFER_PRECISION) -> BOOL,
        fn GetImageLocalBounds(image: *mut ID2D1Image, localBounds: *mut D2D1_RECT_F) -> HRESULT,
        fn GetImageWorldBounds(image: *mut ID2D1Image, worldBounds: *mut D2D1_RECT_F) -> HRESULT,
        fn GetGlyphRunWorldBounds(
            baselineOrigin: D2D1_POINT_2F,
            glyphRun: *const DWRITE_GLYPH_RUN,
            measuringMode: DWRITE_MEASURING_MODE,
            bounds: *mut D2D1_RECT_F,
        ) -> HRESULT,
        fn GetDevice(device: *mut *mut ID2D1Device) -> (),
        /// `image` may be null to detach the current target.
        fn SetTarget(image: *mut ID2D1Image) -> (),
        fn GetTarget(image: *mut *mut ID2D1Image) -> (),
        fn SetRenderingControls(renderingControls: *const D2D1_RENDERING_CONTROLS) -> (),
        fn GetRenderingControls(renderingControls: *mut D2D1_RENDERING_CONTROLS) -> (),
        fn SetPrimitiveBlend(primitiveBlend: D2D1_PRIMITIVE_BLEND) -> (),
        fn GetPrimitiveBlend() -> D2D1_PRIMITIVE_BLEND,
        fn SetUnitMode(unitMode: D2D1_UNIT_MODE) -> (),
        fn GetUnitMode() -> D2D1_UNIT_MODE,
        fn DrawGlyphRun(
            baselineOrigin: D2D1_POINT_2F,
            glyphRun: *const DWRITE_GLYPH_RUN,
            glyphRunDescription: *const DWRITE_GLYPH_RUN_DESCRIPTION,
            foregroundBrush: *mut ID2D1Brush,
            measuringMode: DWRITE_MEASURING_MODE,
        ) -> (),
        fn DrawImage(
            image: *mut ID2D1Image,
            targetOffset: *const D2D1_POINT_2F,
            imageRectangle: *const D2D1_RECT_F,
            interpolationMode: D2D1_INTERPOLATION_MODE,
            compositeMode: D2D1_COMPOSITE_MODE,
        ) -> (),
        fn DrawGdiMetafile(gdiMetafile: *mut ID2D1GdiMetafile, targetOffset: *const D2D1_POINT_2F) -> (),
        fn DrawBitmap(
            bitmap: *mut ID2D1Bitmap,
            destinationRectangle: *const D2D1_RECT_F,
            opacity: f32,
            interpolationMode: D2D1_INTERPOLATION_MODE,
            sourceRectangle: *const D2D1_RECT_F,
            perspectiveTransform: *const D2D1_MATRIX_4X4_F,
        ) -> (),
        fn PushLayer(layerParameters: *const D2D1_LAYER_PARAMETERS1, layer: *mut ID2D1Layer) -> (),
        fn InvalidateEffectInputRectangle(
            effect: *mut ID2D1Effect,
            input: u32,
            inputRectangle: *const D2D1_RECT_F,
        ) -> HRESULT,
        fn GetEffectInvalidRectangleCount(effect: *mut ID2D1Effect, rectangleCount: *mut u32) -> HRESULT,
        fn GetEffectInvalidRectangles(
            effect: *mut ID2D1Effect,
            rectangles: *mut D2D1_RECT_F,
            rectanglesCount: u32,
        ) -> HRESULT,
        fn GetEffectRequiredInputRectangles(
            renderEffect: *mut ID2D1Effect,
            renderImageRectangle: *const D2D1_RECT_F,
            inputDescriptions: *const D2D1_EFFECT_INPUT_DESCRIPTION,
            requiredInputRects: *mut D2D1_RECT_F,
            inputCount: u32,
        ) -> HRESULT,
        fn FillOpacityMask(
            opacityMask: *mut ID2D1Bitmap,
            brush: *mut ID2D1Brush,
            destinationRectangle: *const D2D1_RECT_F,
            sourceRectangle: *const D2D1_RECT_F,
        ) -> (),
    }
}

// ── ID2D1DeviceContext1 ───────────────────────────────────────────────────────

com_interface! {
    /// Adds geometry realizations: pre-tessellated geometry that can be
    /// redrawn cheaply.
    #[uuid(0xd37f57e4_6908_459f_a199_e72f24f79987)]
    interface ID2D1DeviceContext1(ID2D1DeviceContext1Vtbl): ID2D1DeviceContext(ID2D1DeviceContextVtbl) {
        fn CreateFilledGeometryRealization(
            geometry: *mut ID2D1Geometry,
            flatteningTolerance: f32,
            geometryRealization: *mut *mut ID2D1GeometryRealization,
        ) -> HRESULT,
        fn CreateStrokedGeometryRealization(
            geometry: *mut ID2D1Geometry,
            flatteningTolerance: f32,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
            geometryRealization: *mut *mut ID2D1GeometryRealization,
        ) -> HRESULT,
        fn DrawGeometryRealization(geometryRealization: *mut ID2D1GeometryRealization, brush: *mut ID2D1Brush) -> (),
    }
}

// ── ID2D1Device ───────────────────────────────────────────────────────────────

com_interface! {
    /// A rendering device; owns GPU resources shared by its device contexts.
    #[uuid(0x47dd575d_ac05_4cdd_8049_9b02cd16f44c)]
    interface ID2D1Device(ID2D1DeviceVtbl): ID2D1Resource(ID2D1ResourceVtbl) {
        fn CreateDeviceContext(
            options: D2D1_DEVICE_CONTEXT_OPTIONS,
            deviceContext: *mut *mut ID2D1DeviceContext,
        ) -> HRESULT,
        /// `printControlProperties` may be null for the defaults.
        fn CreatePrintControl(
            wicFactory: *mut IWICImagingFactory,
            documentTarget: *mut IPrintDocumentPackageTarget,
            printControlProperties: *const D2D1_PRINT_CONTROL_PROPERTIES,
            printControl: *mut *mut ID2D1PrintControl,
        ) -> HRESULT,
        fn SetMaximumTextureMemory(maximumInBytes: u64) -> (),
        fn GetMaximumTextureMemory() -> u64,
        fn ClearResources(millisecondsSinceUse: u32) -> (),
    }
}

// ── ID2D1Device1 ──────────────────────────────────────────────────────────────

com_interface! {
    #[uuid(0xd21768e1_23a4_4823_a14b_7c3eba85d658)]
    interface ID2D1Device1(ID2D1Device1Vtbl): ID2D1Device(ID2D1DeviceVtbl) {
        fn GetRenderingPriority() -> D2D1_RENDERING_PRIORITY,
        fn SetRenderingPriority(renderingPriority: D2D1_RENDERING_PRIORITY) -> (),
        fn CreateDeviceContext(
            options: D2D1_DEVICE_CONTEXT_OPTIONS,
            deviceContext1: *mut *mut ID2D1DeviceContext1,
        ) -> HRESULT,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::com::{Interface, Vtable};
    use crate::dcommon::D2D1_ALPHA_MODE_PREMULTIPLIED;
    use crate::foreign::DXGI_FORMAT_B8G8R8A8_UNORM;
    use std::mem::{offset_of, size_of};
    use crate::com::{E_INVALIDARG, S_OK};

    const PTR: usize = size_of::<usize>();

    #[test]
    fn slot_counts_follow_the_inheritance_chain() {
        assert_eq!(ID2D1Resource::SLOT_COUNT, 4);
        assert_eq!(ID2D1RenderTarget::SLOT_COUNT, 57);
        assert_eq!(ID2D1DeviceContext::SLOT_COUNT, 92);
        assert_eq!(ID2D1DeviceContext1::SLOT_COUNT, 95);
        assert_eq!(ID2D1Device::SLOT_COUNT, 9);
        assert_eq!(ID2D1Device1::SLOT_COUNT, 12);
    }

    #[test]
    fn vtable_sizes_are_slot_count_pointers() {
        assert_eq!(size_of::<ID2D1ResourceVtbl>(), 4 * PTR);
        assert_eq!(size_of::<ID2D1RenderTargetVtbl>(), 57 * PTR);
        assert_eq!(size_of::<ID2D1DeviceContextVtbl>(), 92 * PTR);
        assert_eq!(size_of::<ID2D1DeviceContext1Vtbl>(), 95 * PTR);
        assert_eq!(size_of::<ID2D1DeviceVtbl>(), 9 * PTR);
        assert_eq!(size_of::<ID2D1Device1Vtbl>(), 12 * PTR);
    }

    #[test]
    fn selected_slot_offsets() {
        assert_eq!(offset_of!(ID2D1ResourceVtbl, GetFactory), 3 * PTR);
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, CreateBitmap), 4 * PTR);
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, BeginDraw), 48 * PTR);
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, EndDraw), 49 * PTR);
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, IsSupported), 56 * PTR);
        assert_eq!(offset_of!(ID2D1DeviceContextVtbl, CreateBitmap), 57 * PTR);
        assert_eq!(offset_of!(ID2D1DeviceContextVtbl, SetTarget), 74 * PTR);
        assert_eq!(offset_of!(ID2D1DeviceContextVtbl, FillOpacityMask), 91 * PTR);
        assert_eq!(offset_of!(ID2D1DeviceContext1Vtbl, DrawGeometryRealization), 94 * PTR);
        assert_eq!(offset_of!(ID2D1DeviceVtbl, CreateDeviceContext), 4 * PTR);
        assert_eq!(offset_of!(ID2D1Device1Vtbl, CreateDeviceContext), 11 * PTR);
    }

    #[test]
    fn redeclared_methods_get_new_slots() {
        let slots = ID2D1Device1::slots();
        let positions: Vec<_> = slots
            .iter()
            .enumerate()
            .filter(|(_, name)| **name == "CreateDeviceContext")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions, [4, 11]);

        let dc = ID2D1DeviceContext::slots();
        assert_eq!(dc.iter().filter(|name| **name == "DrawBitmap").count(), 2);
        assert_eq!(dc.len(), ID2D1DeviceContext::SLOT_COUNT);
    }

    #[test]
    fn published_iids() {
        assert_eq!(
            ID2D1Device1::IID,
            GUID::from_values(0xd21768e1, 0x23a4, 0x4823, [0xa1, 0x4b, 0x7c, 0x3e, 0xba, 0x85, 0xd6, 0x58])
        );
        assert_eq!(
            ID2D1DeviceContext1::IID,
            GUID::from_values(0xd37f57e4, 0x6908, 0x459f, [0xa1, 0x99, 0xe7, 0x2f, 0x24, 0xf7, 0x99, 0x87])
        );
        assert_eq!(
            ID2D1RenderTarget::IID,
            GUID::from_values(0x2cd90694, 0x12e2, 0x11dc, [0x9f, 0xed, 0x00, 0x11, 0x43, 0xa0, 0x55, 0xf9])
        );
        assert_eq!(ID2D1Factory::NAME, "ID2D1Factory");
    }

    // ── Hidden struct return ──────────────────────────────────────────────────
    //
    // A table whose unbound slots are all null would be UB to construct, so
    // the test lays out raw slot pointers and fills only the ones it calls.

    unsafe extern "system" fn get_pixel_format(
        _: *mut ID2D1RenderTarget,
        out: *mut D2D1_PIXEL_FORMAT,
    ) -> *mut D2D1_PIXEL_FORMAT {
        unsafe {
            *out = D2D1_PIXEL_FORMAT { format: DXGI_FORMAT_B8G8R8A8_UNORM, alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED };
        }
        out
    }

    unsafe extern "system" fn get_size(_: *mut ID2D1RenderTarget, out: *mut D2D1_SIZE_F) -> *mut D2D1_SIZE_F {
        unsafe { *out = D2D1_SIZE_F { width: 640.0, height: 480.0 } };
        out
    }

    unsafe extern "system" fn end_draw(_: *mut ID2D1RenderTarget, tag1: *mut D2D1_TAG, tag2: *mut D2D1_TAG) -> HRESULT {
        if !tag1.is_null() && !tag2.is_null() {
            unsafe {
                *tag1 = 7;
                *tag2 = 11;
            }
            return E_INVALIDARG;
        }
        S_OK
    }

    unsafe extern "system" fn priority(_: *mut ID2D1Device1) -> D2D1_RENDERING_PRIORITY {
        D2D1_RENDERING_PRIORITY_LOW
    }

    #[repr(C)]
    struct RawTable([*const c_void; 95]);

    fn table_with(entries: &[(usize, *const c_void)]) -> Box<RawTable> {
        let mut table = Box::new(RawTable([std::ptr::null(); 95]));
        for &(slot, f) in entries {
            table.0[slot] = f;
        }
        table
    }

    #[test]
    fn struct_returning_slots_write_through_the_hidden_pointer() {
        let table = table_with(&[
            (offset_of!(ID2D1RenderTargetVtbl, GetPixelFormat) / PTR, get_pixel_format as *const c_void),
            (offset_of!(ID2D1RenderTargetVtbl, GetSize) / PTR, get_size as *const c_void),
        ]);
        let target = ID2D1RenderTarget { lpVtbl: (&*table as *const RawTable).cast() };

        let format = unsafe { target.pixel_format() };
        assert_eq!(format.format, DXGI_FORMAT_B8G8R8A8_UNORM);
        assert_eq!(format.alphaMode, D2D1_ALPHA_MODE_PREMULTIPLIED);
        assert_eq!(unsafe { target.size() }, D2D1_SIZE_F { width: 640.0, height: 480.0 });
    }

    #[test]
    fn end_draw_returns_native_code_and_tags() {
        let table = table_with(&[(offset_of!(ID2D1RenderTargetVtbl, EndDraw) / PTR, end_draw as *const c_void)]);
        let target = ID2D1RenderTarget { lpVtbl: (&*table as *const RawTable).cast() };

        assert_eq!(unsafe { target.EndDraw(std::ptr::null_mut(), std::ptr::null_mut()) }, S_OK);

        let (mut t1, mut t2) = (0, 0);
        assert_eq!(unsafe { target.EndDraw(&mut t1, &mut t2) }, E_INVALIDARG);
        assert_eq!((t1, t2), (7, 11));
    }

    #[test]
    fn derived_handle_reaches_its_own_slots() {
        let table = table_with(&[(offset_of!(ID2D1Device1Vtbl, GetRenderingPriority) / PTR, priority as *const c_void)]);
        let device = ID2D1Device1 { lpVtbl: (&*table as *const RawTable).cast() };
        assert_eq!(unsafe { device.GetRenderingPriority() }, D2D1_RENDERING_PRIORITY_LOW);
    }
}
