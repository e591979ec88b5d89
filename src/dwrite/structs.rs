// ── DirectWrite value structs ─────────────────────────────────────────────────
//
// Field names, order and widths follow dwrite.h.  The three bit-field structs
// keep one private backing integer and expose named accessors.

use crate::com::BOOL;

use super::{
    DWRITE_FONT_FEATURE_TAG, DWRITE_SCRIPT_SHAPES, IDWriteFontFace,
};

/// Design-unit metrics shared by every glyph of a face.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DWRITE_FONT_METRICS {
    pub designUnitsPerEm: u16,
    pub ascent: u16,
    pub descent: u16,
    pub lineGap: i16,
    pub capHeight: u16,
    pub xHeight: u16,
    pub underlinePosition: i16,
    pub underlineThickness: u16,
    pub strikethroughPosition: i16,
    pub strikethroughThickness: u16,
}

/// Design-unit metrics of one glyph.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DWRITE_GLYPH_METRICS {
    pub leftSideBearing: i32,
    pub advanceWidth: u32,
    pub rightSideBearing: i32,
    pub topSideBearing: i32,
    pub advanceHeight: u32,
    pub bottomSideBearing: i32,
    pub verticalOriginY: i32,
}

/// Offset of a glyph from its nominal position.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DWRITE_GLYPH_OFFSET {
    pub advanceOffset: f32,
    pub ascenderOffset: f32,
}

/// 2D affine transform applied to glyph rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DWRITE_MATRIX {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub dx: f32,
    pub dy: f32,
}

/// A run of glyphs sharing one face and size.  Every pointer refers to
/// `glyphCount` caller-owned elements (or null where the API allows it).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DWRITE_GLYPH_RUN {
    pub fontFace: *mut IDWriteFontFace,
    pub fontEmSize: f32,
    pub glyphCount: u32,
    pub glyphIndices: *const u16,
    pub glyphAdvances: *const f32,
    pub glyphOffsets: *const DWRITE_GLYPH_OFFSET,
    pub isSideways: BOOL,
    pub bidiLevel: u32,
}

/// Source text of a glyph run, for accessibility and selection.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DWRITE_GLYPH_RUN_DESCRIPTION {
    pub localeName: *const u16,
    pub string: *const u16,
    pub stringLength: u32,
    pub clusterMap: *const u16,
    pub textPosition: u32,
}

/// Script of a text range and how it must be shaped.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DWRITE_SCRIPT_ANALYSIS {
    pub script: u16,
    pub shapes: DWRITE_SCRIPT_SHAPES,
}

/// One OpenType feature with its parameter (1 enables, 0 disables, >1
/// selects an alternate).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DWRITE_FONT_FEATURE {
    pub nameTag: DWRITE_FONT_FEATURE_TAG,
    pub parameter: u32,
}

/// Features applied to one range of text.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DWRITE_TYPOGRAPHIC_FEATURES {
    pub features: *mut DWRITE_FONT_FEATURE,
    pub featureCount: u32,
}

// ── Bit-field structs ─────────────────────────────────────────────────────────

/// Break conditions around one character.
///
/// Native layout (`UINT8`):
/// `breakConditionBefore:2 | breakConditionAfter:2 | isWhitespace:1 |
/// isSoftHyphen:1 | padding:2`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DWRITE_LINE_BREAKPOINT {
    _bitfield: u8,
}

bitfield! {
    impl DWRITE_LINE_BREAKPOINT(_bitfield: u8) {
        /// A `DWRITE_BREAK_CONDITION` value.
        break_condition_before, set_break_condition_before: 0, 2;
        /// A `DWRITE_BREAK_CONDITION` value.
        break_condition_after, set_break_condition_after: 2, 2;
        is_whitespace, set_is_whitespace: 4, 1;
        is_soft_hyphen, set_is_soft_hyphen: 5, 1;
        padding, set_padding: 6, 2;
    }
}

/// Shaping output per character.
///
/// Native layout (`UINT16`):
/// `isShapedAlone:1 | reserved1:1 | canBreakShapingAfter:1 | reserved:13`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DWRITE_SHAPING_TEXT_PROPERTIES {
    _bitfield: u16,
}

bitfield! {
    impl DWRITE_SHAPING_TEXT_PROPERTIES(_bitfield: u16) {
        is_shaped_alone, set_is_shaped_alone: 0, 1;
        reserved1, set_reserved1: 1, 1;
        can_break_shaping_after, set_can_break_shaping_after: 2, 1;
        reserved, set_reserved: 3, 13;
    }
}

/// Shaping output per glyph.
///
/// Native layout (`UINT16`):
/// `justification:4 | isClusterStart:1 | isDiacritic:1 |
/// isZeroWidthSpace:1 | reserved:9`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DWRITE_SHAPING_GLYPH_PROPERTIES {
    _bitfield: u16,
}

bitfield! {
    impl DWRITE_SHAPING_GLYPH_PROPERTIES(_bitfield: u16) {
        /// A `SCRIPT_JUSTIFY` value.
        justification, set_justification: 0, 4;
        is_cluster_start, set_is_cluster_start: 4, 1;
        is_diacritic, set_is_diacritic: 5, 1;
        is_zero_width_space, set_is_zero_width_space: 6, 1;
        reserved, set_reserved: 7, 9;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dwrite::{DWRITE_BREAK_CONDITION_CAN_BREAK, DWRITE_BREAK_CONDITION_MUST_BREAK};
    use std::mem::{offset_of, size_of};

    #[test]
    fn fixed_sizes() {
        assert_eq!(size_of::<DWRITE_FONT_METRICS>(), 20);
        assert_eq!(size_of::<DWRITE_GLYPH_METRICS>(), 28);
        assert_eq!(size_of::<DWRITE_GLYPH_OFFSET>(), 8);
        assert_eq!(size_of::<DWRITE_MATRIX>(), 24);
        assert_eq!(size_of::<DWRITE_SCRIPT_ANALYSIS>(), 8);
        assert_eq!(size_of::<DWRITE_FONT_FEATURE>(), 8);
        assert_eq!(size_of::<DWRITE_LINE_BREAKPOINT>(), 1);
        assert_eq!(size_of::<DWRITE_SHAPING_TEXT_PROPERTIES>(), 2);
        assert_eq!(size_of::<DWRITE_SHAPING_GLYPH_PROPERTIES>(), 2);
        assert_eq!(offset_of!(DWRITE_SCRIPT_ANALYSIS, shapes), 4);
        assert_eq!(offset_of!(DWRITE_FONT_METRICS, strikethroughThickness), 18);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn pointer_sized_layouts_64() {
        assert_eq!(size_of::<DWRITE_GLYPH_RUN>(), 48);
        assert_eq!(offset_of!(DWRITE_GLYPH_RUN, glyphIndices), 16);
        assert_eq!(offset_of!(DWRITE_GLYPH_RUN, isSideways), 40);
        assert_eq!(size_of::<DWRITE_GLYPH_RUN_DESCRIPTION>(), 40);
        assert_eq!(offset_of!(DWRITE_GLYPH_RUN_DESCRIPTION, clusterMap), 24);
        assert_eq!(size_of::<DWRITE_TYPOGRAPHIC_FEATURES>(), 16);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn pointer_sized_layouts_32() {
        assert_eq!(size_of::<DWRITE_GLYPH_RUN>(), 32);
        assert_eq!(offset_of!(DWRITE_GLYPH_RUN, glyphIndices), 12);
        assert_eq!(offset_of!(DWRITE_GLYPH_RUN, isSideways), 24);
        assert_eq!(size_of::<DWRITE_GLYPH_RUN_DESCRIPTION>(), 20);
        assert_eq!(size_of::<DWRITE_TYPOGRAPHIC_FEATURES>(), 8);
    }

    #[test]
    fn line_breakpoint_fields_round_trip() {
        let mut bp = DWRITE_LINE_BREAKPOINT::default();
        bp.set_break_condition_before(DWRITE_BREAK_CONDITION_MUST_BREAK.0 as u8);
        bp.set_break_condition_after(DWRITE_BREAK_CONDITION_CAN_BREAK.0 as u8);
        bp.set_is_whitespace(1);
        assert_eq!(bp.break_condition_before(), 3);
        assert_eq!(bp.break_condition_after(), 1);
        assert_eq!(bp.is_whitespace(), 1);
        assert_eq!(bp.is_soft_hyphen(), 0);
        assert_eq!(bp.padding(), 0);
        assert_eq!(bp._bitfield, 0b0001_0111);
    }

    #[test]
    fn line_breakpoint_writes_do_not_leak() {
        let mut bp = DWRITE_LINE_BREAKPOINT { _bitfield: 0xFF };
        bp.set_break_condition_after(0);
        assert_eq!(bp._bitfield, 0b1111_0011);
        bp.set_is_soft_hyphen(0);
        assert_eq!(bp.break_condition_before(), 3);
        assert_eq!(bp.is_whitespace(), 1);
        assert_eq!(bp.padding(), 3);
    }

    #[test]
    fn shaping_text_properties_bits() {
        let mut props = DWRITE_SHAPING_TEXT_PROPERTIES::default();
        props.set_can_break_shaping_after(1);
        assert_eq!(props._bitfield, 0b100);
        props.set_reserved(0x1FFF);
        assert_eq!(props.can_break_shaping_after(), 1);
        assert_eq!(props.is_shaped_alone(), 0);
        assert_eq!(props.reserved(), 0x1FFF);
    }

    #[test]
    fn shaping_glyph_properties_bits() {
        let mut props = DWRITE_SHAPING_GLYPH_PROPERTIES::default();
        props.set_justification(0xA);
        props.set_is_cluster_start(1);
        props.set_is_zero_width_space(1);
        assert_eq!(props.justification(), 0xA);
        assert_eq!(props.is_cluster_start(), 1);
        assert_eq!(props.is_diacritic(), 0);
        assert_eq!(props.is_zero_width_space(), 1);
        assert_eq!(props._bitfield, 0b0101_1010);

        // Justification is four bits wide; the fifth bit of the value is dropped.
        props.set_justification(0x1F);
        assert_eq!(props.justification(), 0xF);
        assert_eq!(props.is_cluster_start(), 1);
    }
}
