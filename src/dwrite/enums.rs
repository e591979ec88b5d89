// ── DirectWrite enumerations ──────────────────────────────────────────────────
//
// Source of truth: dwrite.h.  Values are the header's; deprecated spellings
// are kept as aliases of their replacements.

native_enum! {
    /// Whether a factory's state is shared process-wide.
    pub enum DWRITE_FACTORY_TYPE: i32 {
        DWRITE_FACTORY_TYPE_SHARED = 0,
        DWRITE_FACTORY_TYPE_ISOLATED = 1,
    }
}

native_enum! {
    /// Container format of a font file.
    pub enum DWRITE_FONT_FILE_TYPE: i32 {
        DWRITE_FONT_FILE_TYPE_UNKNOWN = 0,
        DWRITE_FONT_FILE_TYPE_CFF = 1,
        DWRITE_FONT_FILE_TYPE_TRUETYPE = 2,
        DWRITE_FONT_FILE_TYPE_OPENTYPE_COLLECTION = 3,
        DWRITE_FONT_FILE_TYPE_TYPE1_PFM = 4,
        DWRITE_FONT_FILE_TYPE_TYPE1_PFB = 5,
        DWRITE_FONT_FILE_TYPE_VECTOR = 6,
        DWRITE_FONT_FILE_TYPE_BITMAP = 7,
        /// Deprecated spelling of `DWRITE_FONT_FILE_TYPE_OPENTYPE_COLLECTION`.
        DWRITE_FONT_FILE_TYPE_TRUETYPE_COLLECTION = DWRITE_FONT_FILE_TYPE_OPENTYPE_COLLECTION.0,
    }
}

native_enum! {
    /// Format of a single font face.
    pub enum DWRITE_FONT_FACE_TYPE: i32 {
        DWRITE_FONT_FACE_TYPE_CFF = 0,
        DWRITE_FONT_FACE_TYPE_TRUETYPE = 1,
        DWRITE_FONT_FACE_TYPE_OPENTYPE_COLLECTION = 2,
        DWRITE_FONT_FACE_TYPE_TYPE1 = 3,
        DWRITE_FONT_FACE_TYPE_VECTOR = 4,
        DWRITE_FONT_FACE_TYPE_BITMAP = 5,
        DWRITE_FONT_FACE_TYPE_UNKNOWN = 6,
        DWRITE_FONT_FACE_TYPE_RAW_CFF = 7,
        /// Deprecated spelling of `DWRITE_FONT_FACE_TYPE_OPENTYPE_COLLECTION`.
        DWRITE_FONT_FACE_TYPE_TRUETYPE_COLLECTION = DWRITE_FONT_FACE_TYPE_OPENTYPE_COLLECTION.0,
    }
}

native_enum! {
    /// Algorithmic styling applied to a face.
    pub flags DWRITE_FONT_SIMULATIONS: i32 {
        DWRITE_FONT_SIMULATIONS_NONE = 0x0000,
        DWRITE_FONT_SIMULATIONS_BOLD = 0x0001,
        DWRITE_FONT_SIMULATIONS_OBLIQUE = 0x0002,
    }
}

native_enum! {
    /// Font weight on the OpenType 1..999 scale.
    pub enum DWRITE_FONT_WEIGHT: i32 {
        DWRITE_FONT_WEIGHT_THIN = 100,
        DWRITE_FONT_WEIGHT_EXTRA_LIGHT = 200,
        DWRITE_FONT_WEIGHT_ULTRA_LIGHT = 200,
        DWRITE_FONT_WEIGHT_LIGHT = 300,
        DWRITE_FONT_WEIGHT_SEMI_LIGHT = 350,
        DWRITE_FONT_WEIGHT_NORMAL = 400,
        DWRITE_FONT_WEIGHT_REGULAR = 400,
        DWRITE_FONT_WEIGHT_MEDIUM = 500,
        DWRITE_FONT_WEIGHT_DEMI_BOLD = 600,
        DWRITE_FONT_WEIGHT_SEMI_BOLD = 600,
        DWRITE_FONT_WEIGHT_BOLD = 700,
        DWRITE_FONT_WEIGHT_EXTRA_BOLD = 800,
        DWRITE_FONT_WEIGHT_ULTRA_BOLD = 800,
        DWRITE_FONT_WEIGHT_BLACK = 900,
        DWRITE_FONT_WEIGHT_HEAVY = 900,
        DWRITE_FONT_WEIGHT_EXTRA_BLACK = 950,
        DWRITE_FONT_WEIGHT_ULTRA_BLACK = 950,
    }
}

native_enum! {
    pub enum DWRITE_FONT_STRETCH: i32 {
        DWRITE_FONT_STRETCH_UNDEFINED = 0,
        DWRITE_FONT_STRETCH_ULTRA_CONDENSED = 1,
        DWRITE_FONT_STRETCH_EXTRA_CONDENSED = 2,
        DWRITE_FONT_STRETCH_CONDENSED = 3,
        DWRITE_FONT_STRETCH_SEMI_CONDENSED = 4,
        DWRITE_FONT_STRETCH_NORMAL = 5,
        DWRITE_FONT_STRETCH_MEDIUM = 5,
        DWRITE_FONT_STRETCH_SEMI_EXPANDED = 6,
        DWRITE_FONT_STRETCH_EXPANDED = 7,
        DWRITE_FONT_STRETCH_EXTRA_EXPANDED = 8,
        DWRITE_FONT_STRETCH_ULTRA_EXPANDED = 9,
    }
}

native_enum! {
    pub enum DWRITE_FONT_STYLE: i32 {
        DWRITE_FONT_STYLE_NORMAL = 0,
        DWRITE_FONT_STYLE_OBLIQUE = 1,
        DWRITE_FONT_STYLE_ITALIC = 2,
    }
}

native_enum! {
    /// Line-break opportunity on one side of a character.
    pub enum DWRITE_BREAK_CONDITION: i32 {
        DWRITE_BREAK_CONDITION_NEUTRAL = 0,
        DWRITE_BREAK_CONDITION_CAN_BREAK = 1,
        DWRITE_BREAK_CONDITION_MAY_NOT_BREAK = 2,
        DWRITE_BREAK_CONDITION_MUST_BREAK = 3,
    }
}

native_enum! {
    /// Shaping requirements of a script run.
    pub flags DWRITE_SCRIPT_SHAPES: i32 {
        DWRITE_SCRIPT_SHAPES_DEFAULT = 0,
        DWRITE_SCRIPT_SHAPES_NO_VISUAL = 1,
    }
}

native_enum! {
    pub enum DWRITE_READING_DIRECTION: i32 {
        DWRITE_READING_DIRECTION_LEFT_TO_RIGHT = 0,
        DWRITE_READING_DIRECTION_RIGHT_TO_LEFT = 1,
        DWRITE_READING_DIRECTION_TOP_TO_BOTTOM = 2,
        DWRITE_READING_DIRECTION_BOTTOM_TO_TOP = 3,
    }
}

native_enum! {
    pub enum DWRITE_NUMBER_SUBSTITUTION_METHOD: i32 {
        DWRITE_NUMBER_SUBSTITUTION_METHOD_FROM_CULTURE = 0,
        DWRITE_NUMBER_SUBSTITUTION_METHOD_CONTEXTUAL = 1,
        DWRITE_NUMBER_SUBSTITUTION_METHOD_NONE = 2,
        DWRITE_NUMBER_SUBSTITUTION_METHOD_NATIONAL = 3,
        DWRITE_NUMBER_SUBSTITUTION_METHOD_TRADITIONAL = 4,
    }
}

native_enum! {
    /// Subpixel layout of the display.
    pub enum DWRITE_PIXEL_GEOMETRY: i32 {
        DWRITE_PIXEL_GEOMETRY_FLAT = 0,
        DWRITE_PIXEL_GEOMETRY_RGB = 1,
        DWRITE_PIXEL_GEOMETRY_BGR = 2,
    }
}

native_enum! {
    /// Glyph rasterization method.
    pub enum DWRITE_RENDERING_MODE: i32 {
        DWRITE_RENDERING_MODE_DEFAULT = 0,
        DWRITE_RENDERING_MODE_ALIASED = 1,
        DWRITE_RENDERING_MODE_GDI_CLASSIC = 2,
        DWRITE_RENDERING_MODE_GDI_NATURAL = 3,
        DWRITE_RENDERING_MODE_NATURAL = 4,
        DWRITE_RENDERING_MODE_NATURAL_SYMMETRIC = 5,
        DWRITE_RENDERING_MODE_OUTLINE = 6,
        /// Deprecated spelling of `DWRITE_RENDERING_MODE_GDI_CLASSIC`.
        DWRITE_RENDERING_MODE_CLEARTYPE_GDI_CLASSIC = DWRITE_RENDERING_MODE_GDI_CLASSIC.0,
        /// Deprecated spelling of `DWRITE_RENDERING_MODE_GDI_NATURAL`.
        DWRITE_RENDERING_MODE_CLEARTYPE_GDI_NATURAL = DWRITE_RENDERING_MODE_GDI_NATURAL.0,
        /// Deprecated spelling of `DWRITE_RENDERING_MODE_NATURAL`.
        DWRITE_RENDERING_MODE_CLEARTYPE_NATURAL = DWRITE_RENDERING_MODE_NATURAL.0,
        /// Deprecated spelling of `DWRITE_RENDERING_MODE_NATURAL_SYMMETRIC`.
        DWRITE_RENDERING_MODE_CLEARTYPE_NATURAL_SYMMETRIC = DWRITE_RENDERING_MODE_NATURAL_SYMMETRIC.0,
    }
}

native_enum! {
    pub enum DWRITE_TEXTURE_TYPE: i32 {
        DWRITE_TEXTURE_ALIASED_1x1 = 0,
        DWRITE_TEXTURE_CLEARTYPE_3x1 = 1,
    }
}

/// Pack four ASCII bytes into an OpenType tag, first byte lowest.
pub const fn DWRITE_MAKE_OPENTYPE_TAG(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (d as u32) << 24 | (c as u32) << 16 | (b as u32) << 8 | a as u32
}

native_enum! {
    /// OpenType feature tags.  Any tag built with `DWRITE_MAKE_OPENTYPE_TAG`
    /// is valid; the common ones are named here.
    pub enum DWRITE_FONT_FEATURE_TAG: u32 {
        DWRITE_FONT_FEATURE_TAG_ALTERNATIVE_FRACTIONS = DWRITE_MAKE_OPENTYPE_TAG(b'a', b'f', b'r', b'c'),
        DWRITE_FONT_FEATURE_TAG_CASE_SENSITIVE_FORMS = DWRITE_MAKE_OPENTYPE_TAG(b'c', b'a', b's', b'e'),
        DWRITE_FONT_FEATURE_TAG_CONTEXTUAL_ALTERNATES = DWRITE_MAKE_OPENTYPE_TAG(b'c', b'a', b'l', b't'),
        DWRITE_FONT_FEATURE_TAG_CONTEXTUAL_LIGATURES = DWRITE_MAKE_OPENTYPE_TAG(b'c', b'l', b'i', b'g'),
        DWRITE_FONT_FEATURE_TAG_DISCRETIONARY_LIGATURES = DWRITE_MAKE_OPENTYPE_TAG(b'd', b'l', b'i', b'g'),
        DWRITE_FONT_FEATURE_TAG_FRACTIONS = DWRITE_MAKE_OPENTYPE_TAG(b'f', b'r', b'a', b'c'),
        DWRITE_FONT_FEATURE_TAG_KERNING = DWRITE_MAKE_OPENTYPE_TAG(b'k', b'e', b'r', b'n'),
        DWRITE_FONT_FEATURE_TAG_LINING_FIGURES = DWRITE_MAKE_OPENTYPE_TAG(b'l', b'n', b'u', b'm'),
        DWRITE_FONT_FEATURE_TAG_OLD_STYLE_FIGURES = DWRITE_MAKE_OPENTYPE_TAG(b'o', b'n', b'u', b'm'),
        DWRITE_FONT_FEATURE_TAG_PROPORTIONAL_FIGURES = DWRITE_MAKE_OPENTYPE_TAG(b'p', b'n', b'u', b'm'),
        DWRITE_FONT_FEATURE_TAG_SLASHED_ZERO = DWRITE_MAKE_OPENTYPE_TAG(b'z', b'e', b'r', b'o'),
        DWRITE_FONT_FEATURE_TAG_SMALL_CAPITALS = DWRITE_MAKE_OPENTYPE_TAG(b's', b'm', b'c', b'p'),
        DWRITE_FONT_FEATURE_TAG_STANDARD_LIGATURES = DWRITE_MAKE_OPENTYPE_TAG(b'l', b'i', b'g', b'a'),
        DWRITE_FONT_FEATURE_TAG_STYLISTIC_SET_1 = DWRITE_MAKE_OPENTYPE_TAG(b's', b's', b'0', b'1'),
        DWRITE_FONT_FEATURE_TAG_SUBSCRIPT = DWRITE_MAKE_OPENTYPE_TAG(b's', b'u', b'b', b's'),
        DWRITE_FONT_FEATURE_TAG_SUPERSCRIPT = DWRITE_MAKE_OPENTYPE_TAG(b's', b'u', b'p', b's'),
        DWRITE_FONT_FEATURE_TAG_TABULAR_FIGURES = DWRITE_MAKE_OPENTYPE_TAG(b't', b'n', b'u', b'm'),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
