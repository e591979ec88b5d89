// ── DirectWrite interfaces ────────────────────────────────────────────────────
//
// Source of truth: dwrite.h.  Slot order is the header's declaration order;
// every interface here derives directly from IUnknown.

use std::ffi::c_void;

use crate::com::{IUnknown, IUnknownVtbl, BOOL, HRESULT};
use crate::dcommon::{IDWriteGeometrySink, DWRITE_MEASURING_MODE};

use super::{
    DWRITE_FONT_FACE_TYPE, DWRITE_FONT_FILE_TYPE, DWRITE_FONT_METRICS, DWRITE_FONT_SIMULATIONS,
    DWRITE_GLYPH_METRICS, DWRITE_GLYPH_OFFSET, DWRITE_LINE_BREAKPOINT, DWRITE_MATRIX,
    DWRITE_PIXEL_GEOMETRY, DWRITE_READING_DIRECTION, DWRITE_RENDERING_MODE,
    DWRITE_SCRIPT_ANALYSIS, DWRITE_SHAPING_GLYPH_PROPERTIES, DWRITE_SHAPING_TEXT_PROPERTIES,
    DWRITE_TYPOGRAPHIC_FEATURES,
};

// ── Referenced-only interfaces ────────────────────────────────────────────────

opaque_interface! {
    /// Root DirectWrite factory, created by `DWriteCreateFactory`.
    #[uuid(0xb859ee5a_d838_4b5b_a2e8_1adc7d93db48)]
    interface IDWriteFactory;
}

opaque_interface! {
    #[uuid(0x727cad4e_d6af_4c9e_8a08_d695b11caa49)]
    interface IDWriteFontFileLoader;
}

opaque_interface! {
    #[uuid(0x14885cc9_bab0_4f90_b6ed_5c366a2cd03d)]
    interface IDWriteNumberSubstitution;
}

opaque_interface! {
    #[uuid(0x9c906818_31d7_4fd3_a151_7c5e225db55a)]
    interface IDWriteTextFormat;
}

opaque_interface! {
    #[uuid(0x53737037_6d14_410b_9bfe_0b182bb70961)]
    interface IDWriteTextLayout;
}

// ── IDWriteFontFile ───────────────────────────────────────────────────────────

com_interface! {
    /// A font file known to a loader.
    #[uuid(0x739d886a_cef5_47dc_8769_1a8b41bebbb0)]
    interface IDWriteFontFile(IDWriteFontFileVtbl): IUnknown(IUnknownVtbl) {
        fn GetReferenceKey(fontFileReferenceKey: *mut *const c_void, fontFileReferenceKeySize: *mut u32) -> HRESULT,
        fn GetLoader(fontFileLoader: *mut *mut IDWriteFontFileLoader) -> HRESULT,
        fn Analyze(
            isSupportedFontType: *mut BOOL,
            fontFileType: *mut DWRITE_FONT_FILE_TYPE,
            fontFaceType: *mut DWRITE_FONT_FACE_TYPE,
            numberOfFaces: *mut u32,
        ) -> HRESULT,
    }
}

// ── IDWriteRenderingParams ────────────────────────────────────────────────────

com_interface! {
    /// Gamma, contrast and ClearType settings for glyph rendering.
    #[uuid(0x2f0da53a_2add_47cd_82ee_d9ec34688e75)]
    interface IDWriteRenderingParams(IDWriteRenderingParamsVtbl): IUnknown(IUnknownVtbl) {
        fn GetGamma() -> f32,
        fn GetEnhancedContrast() -> f32,
        fn GetClearTypeLevel() -> f32,
        fn GetPixelGeometry() -> DWRITE_PIXEL_GEOMETRY,
        fn GetRenderingMode() -> DWRITE_RENDERING_MODE,
    }
}

// ── IDWriteFontFace ───────────────────────────────────────────────────────────

com_interface! {
    /// One face of a font file at a given simulation.
    #[uuid(0x5f49804d_7024_4d43_bfa9_d25984f53849)]
    interface IDWriteFontFace(IDWriteFontFaceVtbl): IUnknown(IUnknownVtbl) {
        fn GetType() -> DWRITE_FONT_FACE_TYPE,
        /// Call with `fontFiles` null to query the count first.
        fn GetFiles(numberOfFiles: *mut u32, fontFiles: *mut *mut IDWriteFontFile) -> HRESULT,
        fn GetIndex() -> u32,
        fn GetSimulations() -> DWRITE_FONT_SIMULATIONS,
        fn IsSymbolFont() -> BOOL,
        fn GetMetrics(fontFaceMetrics: *mut DWRITE_FONT_METRICS) -> (),
        fn GetGlyphCount() -> u16,
        fn GetDesignGlyphMetrics(
            glyphIndices: *const u16,
            glyphCount: u32,
            glyphMetrics: *mut DWRITE_GLYPH_METRICS,
            isSideways: BOOL,
        ) -> HRESULT,
        fn GetGlyphIndices(codePoints: *const u32, codePointCount: u32, glyphIndices: *mut u16) -> HRESULT,
        /// On success with `exists` TRUE, the table must be handed back
        /// through `ReleaseFontTable(tableContext)`.
        fn TryGetFontTable(
            openTypeTableTag: u32,
            tableData: *mut *const c_void,
            tableSize: *mut u32,
            tableContext: *mut *mut c_void,
            exists: *mut BOOL,
        ) -> HRESULT,
        fn ReleaseFontTable(tableContext: *mut c_void) -> (),
        fn GetGlyphRunOutline(
            emSize: f32,
            glyphIndices: *const u16,
            glyphAdvances: *const f32,
            glyphOffsets: *const DWRITE_GLYPH_OFFSET,
            glyphCount: u32,
            isSideways: BOOL,
            isRightToLeft: BOOL,
            geometrySink: *mut IDWriteGeometrySink,
        ) -> HRESULT,
        fn GetRecommendedRenderingMode(
            emSize: f32,
            pixelsPerDip: f32,
            measuringMode: DWRITE_MEASURING_MODE,
            renderingParams: *mut IDWriteRenderingParams,
            renderingMode: *mut DWRITE_RENDERING_MODE,
        ) -> HRESULT,
        fn GetGdiCompatibleMetrics(
            emSize: f32,
            pixelsPerDip: f32,
            transform: *const DWRITE_MATRIX,
            fontFaceMetrics: *mut DWRITE_FONT_METRICS,
        ) -> HRESULT,
        fn GetGdiCompatibleGlyphMetrics(
            emSize: f32,
            pixelsPerDip: f32,
            transform: *const DWRITE_MATRIX,
            useGdiNatural: BOOL,
            glyphIndices: *const u16,
            glyphCount: u32,
            glyphMetrics: *mut DWRITE_GLYPH_METRICS,
            isSideways: BOOL,
        ) -> HRESULT,
    }
}

// ── Text analysis callbacks ───────────────────────────────────────────────────

com_interface! {
    /// Implemented by the caller: supplies text and its properties to the
    /// analyzer.
    #[uuid(0x688e1a58_5094_47c8_adc8_fbcea60ae92b)]
    interface IDWriteTextAnalysisSource(IDWriteTextAnalysisSourceVtbl): IUnknown(IUnknownVtbl) {
        fn GetTextAtPosition(textPosition: u32, textString: *mut *const u16, textLength: *mut u32) -> HRESULT,
        fn GetTextBeforePosition(textPosition: u32, textString: *mut *const u16, textLength: *mut u32) -> HRESULT,
        fn GetParagraphReadingDirection() -> DWRITE_READING_DIRECTION,
        fn GetLocaleName(textPosition: u32, textLength: *mut u32, localeName: *mut *const u16) -> HRESULT,
        fn GetNumberSubstitution(
            textPosition: u32,
            textLength: *mut u32,
            numberSubstitution: *mut *mut IDWriteNumberSubstitution,
        ) -> HRESULT,
    }
}

com_interface! {
    /// Implemented by the caller: receives analysis results.
    #[uuid(0x5810cd44_0ca0_4701_b3fa_bec5182ae4f6)]
    interface IDWriteTextAnalysisSink(IDWriteTextAnalysisSinkVtbl): IUnknown(IUnknownVtbl) {
        fn SetScriptAnalysis(textPosition: u32, textLength: u32, scriptAnalysis: *const DWRITE_SCRIPT_ANALYSIS) -> HRESULT,
        fn SetLineBreakpoints(textPosition: u32, textLength: u32, lineBreakpoints: *const DWRITE_LINE_BREAKPOINT) -> HRESULT,
        fn SetBidiLevel(textPosition: u32, textLength: u32, explicitLevel: u8, resolvedLevel: u8) -> HRESULT,
        fn SetNumberSubstitution(
            textPosition: u32,
            textLength: u32,
            numberSubstitution: *mut IDWriteNumberSubstitution,
        ) -> HRESULT,
    }
}

// ── IDWriteTextAnalyzer ───────────────────────────────────────────────────────

com_interface! {
    /// Script itemization, bidi, line breaking and glyph shaping.
    #[uuid(0xb7e6163e_7f46_43b4_84b3_e4e6249c365d)]
    interface IDWriteTextAnalyzer(IDWriteTextAnalyzerVtbl): IUnknown(IUnknownVtbl) {
        fn AnalyzeScript(
            analysisSource: *mut IDWriteTextAnalysisSource,
            textPosition: u32,
            textLength: u32,
            analysisSink: *mut IDWriteTextAnalysisSink,
        ) -> HRESULT,
        fn AnalyzeBidi(
            analysisSource: *mut IDWriteTextAnalysisSource,
            textPosition: u32,
            textLength: u32,
            analysisSink: *mut IDWriteTextAnalysisSink,
        ) -> HRESULT,
        fn AnalyzeNumberSubstitution(
            analysisSource: *mut IDWriteTextAnalysisSource,
            textPosition: u32,
            textLength: u32,
            analysisSink: *mut IDWriteTextAnalysisSink,
        ) -> HRESULT,
        fn AnalyzeLineBreakpoints(
            analysisSource: *mut IDWriteTextAnalysisSource,
            textPosition: u32,
            textLength: u32,
            analysisSink: *mut IDWriteTextAnalysisSink,
        ) -> HRESULT,
        /// Returns `E_NOT_SUFFICIENT_BUFFER` when `maxGlyphCount` is too
        /// small; retry with a larger buffer.
        fn GetGlyphs(
            textString: *const u16,
            textLength: u32,
            fontFace: *mut IDWriteFontFace,
            isSideways: BOOL,
            isRightToLeft: BOOL,
            scriptAnalysis: *const DWRITE_SCRIPT_ANALYSIS,
            localeName: *const u16,
            numberSubstitution: *mut IDWriteNumberSubstitution,
            features: *const *const DWRITE_TYPOGRAPHIC_FEATURES,
            featureRangeLengths: *const u32,
            featureRanges: u32,
            maxGlyphCount: u32,
            clusterMap: *mut u16,
            textProps: *mut DWRITE_SHAPING_TEXT_PROPERTIES,
            glyphIndices: *mut u16,
            glyphProps: *mut DWRITE_SHAPING_GLYPH_PROPERTIES,
            actualGlyphCount: *mut u32,
        ) -> HRESULT,
        fn GetGlyphPlacements(
            textString: *const u16,
            clusterMap: *const u16,
            textProps: *mut DWRITE_SHAPING_TEXT_PROPERTIES,
            textLength: u32,
            glyphIndices: *const u16,
            glyphProps: *const DWRITE_SHAPING_GLYPH_PROPERTIES,
            glyphCount: u32,
            fontFace: *mut IDWriteFontFace,
            fontEmSize: f32,
            isSideways: BOOL,
            isRightToLeft: BOOL,
            scriptAnalysis: *const DWRITE_SCRIPT_ANALYSIS,
            localeName: *const u16,
            features: *const *const DWRITE_TYPOGRAPHIC_FEATURES,
            featureRangeLengths: *const u32,
            featureRanges: u32,
            glyphAdvances: *mut f32,
            glyphOffsets: *mut DWRITE_GLYPH_OFFSET,
        ) -> HRESULT,
        fn GetGdiCompatibleGlyphPlacements(
            textString: *const u16,
            clusterMap: *const u16,
            textProps: *mut DWRITE_SHAPING_TEXT_PROPERTIES,
            textLength: u32,
            glyphIndices: *const u16,
            glyphProps: *const DWRITE_SHAPING_GLYPH_PROPERTIES,
            glyphCount: u32,
            fontFace: *mut IDWriteFontFace,
            fontEmSize: f32,
            pixelsPerDip: f32,
            transform: *const DWRITE_MATRIX,
            useGdiNatural: BOOL,
            isSideways: BOOL,
            isRightToLeft: BOOL,
            scriptAnalysis: *const DWRITE_SCRIPT_ANALYSIS,
            localeName: *const u16,
            features: *const *const DWRITE_TYPOGRAPHIC_FEATURES,
            featureRangeLengths: *const u32,
            featureRanges: u32,
            glyphAdvances: *mut f32,
            glyphOffsets: *mut DWRITE_GLYPH_OFFSET,
        ) -> HRESULT,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::com::{Interface, Vtable, GUID};
    use crate::dwrite::{DWRITE_PIXEL_GEOMETRY_BGR, DWRITE_RENDERING_MODE_CLEARTYPE_NATURAL};
    use std::mem::{offset_of, size_of};

    #[test]
    fn font_face_slots() {
        let ptr = size_of::<usize>();
        assert_eq!(IDWriteFontFace::SLOT_COUNT, 18);
        assert_eq!(size_of::<IDWriteFontFaceVtbl>(), 18 * ptr);
        assert_eq!(offset_of!(IDWriteFontFaceVtbl, GetType), 3 * ptr);
        assert_eq!(offset_of!(IDWriteFontFaceVtbl, TryGetFontTable), 12 * ptr);
        assert_eq!(offset_of!(IDWriteFontFaceVtbl, GetGdiCompatibleGlyphMetrics), 17 * ptr);
        assert_eq!(IDWriteFontFace::slots()[9], "GetGlyphCount");
    }

    #[test]
    fn text_analyzer_slots() {
        let ptr = size_of::<usize>();
        assert_eq!(IDWriteTextAnalyzer::SLOT_COUNT, 10);
        assert_eq!(size_of::<IDWriteTextAnalyzerVtbl>(), 10 * ptr);
        assert_eq!(offset_of!(IDWriteTextAnalyzerVtbl, AnalyzeLineBreakpoints), 6 * ptr);
        assert_eq!(offset_of!(IDWriteTextAnalyzerVtbl, GetGdiCompatibleGlyphPlacements), 9 * ptr);
    }

    #[test]
    fn callback_and_support_slots() {
        assert_eq!(IDWriteTextAnalysisSource::SLOT_COUNT, 8);
        assert_eq!(IDWriteTextAnalysisSink::SLOT_COUNT, 7);
        assert_eq!(IDWriteFontFile::SLOT_COUNT, 6);
        assert_eq!(IDWriteRenderingParams::SLOT_COUNT, 8);
    }

    #[test]
    fn published_iids() {
        assert_eq!(
            IDWriteFontFace::IID,
            GUID::from_values(0x5f49804d, 0x7024, 0x4d43, [0xbf, 0xa9, 0xd2, 0x59, 0x84, 0xf5, 0x38, 0x49])
        );
        assert_eq!(
            IDWriteTextAnalyzer::IID,
            GUID::from_values(0xb7e6163e, 0x7f46, 0x43b4, [0x84, 0xb3, 0xe4, 0xe6, 0x24, 0x9c, 0x36, 0x5d])
        );
        assert_eq!(
            IDWriteFactory::IID,
            GUID::from_values(0xb859ee5a, 0xd838, 0x4b5b, [0xa2, 0xe8, 0x1a, 0xdc, 0x7d, 0x93, 0xdb, 0x48])
        );
    }

    // ── Forwarding through a hand-built vtable ────────────────────────────────

    unsafe extern "system" fn qi(_: *mut IUnknown, _: *const GUID, _: *mut *mut c_void) -> HRESULT {
        HRESULT(0)
    }

    unsafe extern "system" fn count(_: *mut IUnknown) -> u32 {
        1
    }

    unsafe extern "system" fn gamma(_: *mut IDWriteRenderingParams) -> f32 {
        1.8
    }

    unsafe extern "system" fn contrast(_: *mut IDWriteRenderingParams) -> f32 {
        0.5
    }

    unsafe extern "system" fn cleartype(_: *mut IDWriteRenderingParams) -> f32 {
        1.0
    }

    unsafe extern "system" fn geometry(_: *mut IDWriteRenderingParams) -> DWRITE_PIXEL_GEOMETRY {
        DWRITE_PIXEL_GEOMETRY_BGR
    }

    unsafe extern "system" fn mode(_: *mut IDWriteRenderingParams) -> DWRITE_RENDERING_MODE {
        DWRITE_RENDERING_MODE_CLEARTYPE_NATURAL
    }

    static PARAMS_VTBL: IDWriteRenderingParamsVtbl = IDWriteRenderingParamsVtbl {
        parent: IUnknownVtbl { QueryInterface: qi, AddRef: count, Release: count },
        GetGamma: gamma,
        GetEnhancedContrast: contrast,
        GetClearTypeLevel: cleartype,
        GetPixelGeometry: geometry,
        GetRenderingMode: mode,
    };

    #[test]
    fn each_wrapper_reads_its_own_slot() {
        let params = IDWriteRenderingParams { lpVtbl: &PARAMS_VTBL };
        unsafe {
            assert_eq!(params.GetGamma(), 1.8);
            assert_eq!(params.GetEnhancedContrast(), 0.5);
            assert_eq!(params.GetClearTypeLevel(), 1.0);
            assert_eq!(params.GetPixelGeometry(), DWRITE_PIXEL_GEOMETRY_BGR);
            assert_eq!(params.GetRenderingMode().0, 4);
        }
    }
}
