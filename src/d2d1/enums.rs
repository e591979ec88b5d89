// ── Direct2D enums ────────────────────────────────────────────────────────────
//
// Values are copied from d2d1.h, d2d1_1.h and d2d1_2.h.  Every native enum
// carries a `_FORCE_DWORD` member so the compiler sizes it as 32 bits; it is
// kept here for completeness.

const FORCE_DWORD: i32 = 0xffff_ffff_u32 as i32;

// ── d2d1.h ────────────────────────────────────────────────────────────────────

native_enum! {
    pub enum D2D1_GAMMA: i32 {
        D2D1_GAMMA_2_2 = 0,
        D2D1_GAMMA_1_0 = 1,
        D2D1_GAMMA_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    /// How the content of an opacity mask is interpreted.
    pub enum D2D1_OPACITY_MASK_CONTENT: i32 {
        D2D1_OPACITY_MASK_CONTENT_GRAPHICS = 0,
        D2D1_OPACITY_MASK_CONTENT_TEXT_NATURAL = 1,
        D2D1_OPACITY_MASK_CONTENT_TEXT_GDI_COMPATIBLE = 2,
        D2D1_OPACITY_MASK_CONTENT_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_EXTEND_MODE: i32 {
        D2D1_EXTEND_MODE_CLAMP = 0,
        D2D1_EXTEND_MODE_WRAP = 1,
        D2D1_EXTEND_MODE_MIRROR = 2,
        D2D1_EXTEND_MODE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_ANTIALIAS_MODE: i32 {
        D2D1_ANTIALIAS_MODE_PER_PRIMITIVE = 0,
        D2D1_ANTIALIAS_MODE_ALIASED = 1,
        D2D1_ANTIALIAS_MODE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_TEXT_ANTIALIAS_MODE: i32 {
        D2D1_TEXT_ANTIALIAS_MODE_DEFAULT = 0,
        D2D1_TEXT_ANTIALIAS_MODE_CLEARTYPE = 1,
        D2D1_TEXT_ANTIALIAS_MODE_GRAYSCALE = 2,
        D2D1_TEXT_ANTIALIAS_MODE_ALIASED = 3,
        D2D1_TEXT_ANTIALIAS_MODE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_BITMAP_INTERPOLATION_MODE: i32 {
        D2D1_BITMAP_INTERPOLATION_MODE_NEAREST_NEIGHBOR = 0,
        D2D1_BITMAP_INTERPOLATION_MODE_LINEAR = 1,
        D2D1_BITMAP_INTERPOLATION_MODE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub flags D2D1_DRAW_TEXT_OPTIONS: i32 {
        D2D1_DRAW_TEXT_OPTIONS_NONE = 0,
        /// Do not snap the baseline to whole pixels.
        D2D1_DRAW_TEXT_OPTIONS_NO_SNAP = 0x1,
        D2D1_DRAW_TEXT_OPTIONS_CLIP = 0x2,
        D2D1_DRAW_TEXT_OPTIONS_ENABLE_COLOR_FONT = 0x4,
        D2D1_DRAW_TEXT_OPTIONS_DISABLE_COLOR_BITMAP_SNAPPING = 0x8,
        D2D1_DRAW_TEXT_OPTIONS_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    /// Threading policy of a factory and everything it creates.
    pub enum D2D1_FACTORY_TYPE: i32 {
        D2D1_FACTORY_TYPE_SINGLE_THREADED = 0,
        D2D1_FACTORY_TYPE_MULTI_THREADED = 1,
        D2D1_FACTORY_TYPE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_DEBUG_LEVEL: i32 {
        D2D1_DEBUG_LEVEL_NONE = 0,
        D2D1_DEBUG_LEVEL_ERROR = 1,
        D2D1_DEBUG_LEVEL_WARNING = 2,
        D2D1_DEBUG_LEVEL_INFORMATION = 3,
        D2D1_DEBUG_LEVEL_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub flags D2D1_LAYER_OPTIONS: i32 {
        D2D1_LAYER_OPTIONS_NONE = 0,
        D2D1_LAYER_OPTIONS_INITIALIZE_FOR_CLEARTYPE = 0x1,
        D2D1_LAYER_OPTIONS_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_RENDER_TARGET_TYPE: i32 {
        D2D1_RENDER_TARGET_TYPE_DEFAULT = 0,
        D2D1_RENDER_TARGET_TYPE_SOFTWARE = 1,
        D2D1_RENDER_TARGET_TYPE_HARDWARE = 2,
        D2D1_RENDER_TARGET_TYPE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    /// Minimum Direct3D feature level; the values are `D3D_FEATURE_LEVEL`s.
    pub enum D2D1_FEATURE_LEVEL: i32 {
        D2D1_FEATURE_LEVEL_DEFAULT = 0,
        D2D1_FEATURE_LEVEL_9 = 0x9100,
        D2D1_FEATURE_LEVEL_10 = 0xa000,
        D2D1_FEATURE_LEVEL_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub flags D2D1_RENDER_TARGET_USAGE: i32 {
        D2D1_RENDER_TARGET_USAGE_NONE = 0,
        D2D1_RENDER_TARGET_USAGE_FORCE_BITMAP_REMOTING = 0x1,
        D2D1_RENDER_TARGET_USAGE_GDI_COMPATIBLE = 0x2,
        D2D1_RENDER_TARGET_USAGE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub flags D2D1_COMPATIBLE_RENDER_TARGET_OPTIONS: i32 {
        D2D1_COMPATIBLE_RENDER_TARGET_OPTIONS_NONE = 0,
        D2D1_COMPATIBLE_RENDER_TARGET_OPTIONS_GDI_COMPATIBLE = 0x1,
        D2D1_COMPATIBLE_RENDER_TARGET_OPTIONS_FORCE_DWORD = FORCE_DWORD,
    }
}

// ── d2d1_1.h ──────────────────────────────────────────────────────────────────

native_enum! {
    pub enum D2D1_INTERPOLATION_MODE: i32 {
        D2D1_INTERPOLATION_MODE_NEAREST_NEIGHBOR = 0,
        D2D1_INTERPOLATION_MODE_LINEAR = 1,
        D2D1_INTERPOLATION_MODE_CUBIC = 2,
        D2D1_INTERPOLATION_MODE_MULTI_SAMPLE_LINEAR = 3,
        D2D1_INTERPOLATION_MODE_ANISOTROPIC = 4,
        D2D1_INTERPOLATION_MODE_HIGH_QUALITY_CUBIC = 5,
        D2D1_INTERPOLATION_MODE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    /// Whether positions and sizes are in DIPs or pixels.
    pub enum D2D1_UNIT_MODE: i32 {
        D2D1_UNIT_MODE_DIPS = 0,
        D2D1_UNIT_MODE_PIXELS = 1,
        D2D1_UNIT_MODE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_COLOR_SPACE: i32 {
        D2D1_COLOR_SPACE_CUSTOM = 0,
        D2D1_COLOR_SPACE_SRGB = 1,
        D2D1_COLOR_SPACE_SCRGB = 2,
        D2D1_COLOR_SPACE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub flags D2D1_DEVICE_CONTEXT_OPTIONS: i32 {
        D2D1_DEVICE_CONTEXT_OPTIONS_NONE = 0,
        /// Spread rendering work across multiple threads.
        D2D1_DEVICE_CONTEXT_OPTIONS_ENABLE_MULTITHREADED_OPTIMIZATIONS = 1,
        D2D1_DEVICE_CONTEXT_OPTIONS_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub flags D2D1_BITMAP_OPTIONS: i32 {
        D2D1_BITMAP_OPTIONS_NONE = 0x0,
        /// Usable with `SetTarget`.
        D2D1_BITMAP_OPTIONS_TARGET = 0x1,
        D2D1_BITMAP_OPTIONS_CANNOT_DRAW = 0x2,
        D2D1_BITMAP_OPTIONS_CPU_READ = 0x4,
        D2D1_BITMAP_OPTIONS_GDI_COMPATIBLE = 0x8,
        D2D1_BITMAP_OPTIONS_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_BUFFER_PRECISION: i32 {
        D2D1_BUFFER_PRECISION_UNKNOWN = 0,
        D2D1_BUFFER_PRECISION_8BPC_UNORM = 1,
        D2D1_BUFFER_PRECISION_8BPC_UNORM_SRGB = 2,
        D2D1_BUFFER_PRECISION_16BPC_UNORM = 3,
        D2D1_BUFFER_PRECISION_16BPC_FLOAT = 4,
        D2D1_BUFFER_PRECISION_32BPC_FLOAT = 5,
        D2D1_BUFFER_PRECISION_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_COLOR_INTERPOLATION_MODE: i32 {
        D2D1_COLOR_INTERPOLATION_MODE_STRAIGHT = 0,
        D2D1_COLOR_INTERPOLATION_MODE_PREMULTIPLIED = 1,
        D2D1_COLOR_INTERPOLATION_MODE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_PRIMITIVE_BLEND: i32 {
        D2D1_PRIMITIVE_BLEND_SOURCE_OVER = 0,
        D2D1_PRIMITIVE_BLEND_COPY = 1,
        D2D1_PRIMITIVE_BLEND_MIN = 2,
        D2D1_PRIMITIVE_BLEND_ADD = 3,
        D2D1_PRIMITIVE_BLEND_MAX = 4,
        D2D1_PRIMITIVE_BLEND_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    /// Same values as `D2D1_FACTORY_TYPE`.
    pub enum D2D1_THREADING_MODE: i32 {
        D2D1_THREADING_MODE_SINGLE_THREADED = D2D1_FACTORY_TYPE_SINGLE_THREADED.0,
        D2D1_THREADING_MODE_MULTI_THREADED = D2D1_FACTORY_TYPE_MULTI_THREADED.0,
        D2D1_THREADING_MODE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub enum D2D1_COMPOSITE_MODE: i32 {
        D2D1_COMPOSITE_MODE_SOURCE_OVER = 0,
        D2D1_COMPOSITE_MODE_DESTINATION_OVER = 1,
        D2D1_COMPOSITE_MODE_SOURCE_IN = 2,
        D2D1_COMPOSITE_MODE_DESTINATION_IN = 3,
        D2D1_COMPOSITE_MODE_SOURCE_OUT = 4,
        D2D1_COMPOSITE_MODE_DESTINATION_OUT = 5,
        D2D1_COMPOSITE_MODE_SOURCE_ATOP = 6,
        D2D1_COMPOSITE_MODE_DESTINATION_ATOP = 7,
        D2D1_COMPOSITE_MODE_XOR = 8,
        D2D1_COMPOSITE_MODE_PLUS = 9,
        D2D1_COMPOSITE_MODE_SOURCE_COPY = 10,
        D2D1_COMPOSITE_MODE_BOUNDED_SOURCE_COPY = 11,
        D2D1_COMPOSITE_MODE_MASK_INVERT = 12,
        D2D1_COMPOSITE_MODE_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    pub flags D2D1_LAYER_OPTIONS1: i32 {
        D2D1_LAYER_OPTIONS1_NONE = 0,
        D2D1_LAYER_OPTIONS1_INITIALIZE_FROM_BACKGROUND = 1,
        D2D1_LAYER_OPTIONS1_IGNORE_ALPHA = 2,
        D2D1_LAYER_OPTIONS1_FORCE_DWORD = FORCE_DWORD,
    }
}

native_enum! {
    /// When fonts are subset during printing.
    pub enum D2D1_PRINT_FONT_SUBSET_MODE: i32 {
        D2D1_PRINT_FONT_SUBSET_MODE_DEFAULT = 0,
        D2D1_PRINT_FONT_SUBSET_MODE_EACHPAGE = 1,
        D2D1_PRINT_FONT_SUBSET_MODE_NONE = 2,
        D2D1_PRINT_FONT_SUBSET_MODE_FORCE_DWORD = FORCE_DWORD,
    }
}

// ── d2d1_2.h ──────────────────────────────────────────────────────────────────

native_enum! {
    /// Scheduling hint for a device's GPU work.
    pub enum D2D1_RENDERING_PRIORITY: i32 {
        D2D1_RENDERING_PRIORITY_NORMAL = 0,
        D2D1_RENDERING_PRIORITY_LOW = 1,
        D2D1_RENDERING_PRIORITY_FORCE_DWORD = FORCE_DWORD,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threading_mode_mirrors_factory_type() {
        assert_eq!(D2D1_THREADING_MODE_SINGLE_THREADED.0, D2D1_FACTORY_TYPE_SINGLE_THREADED.0);
        assert_eq!(D2D1_THREADING_MODE_MULTI_THREADED.0, D2D1_FACTORY_TYPE_MULTI_THREADED.0);
    }

    #[test]
    fn feature_levels_are_d3d_values() {
        assert_eq!(D2D1_FEATURE_LEVEL_9.0, 0x9100);
        assert_eq!(D2D1_FEATURE_LEVEL_10.0, 0xa000);
    }

    #[test]
    fn force_dword_is_all_ones() {
        assert_eq!(D2D1_RENDERING_PRIORITY_FORCE_DWORD.0 as u32, u32::MAX);
        assert_eq!(D2D1_COMPOSITE_MODE_FORCE_DWORD.0, -1);
    }

    #[test]
    fn bitmap_options_combine() {
        let opts = D2D1_BITMAP_OPTIONS_TARGET | D2D1_BITMAP_OPTIONS_CANNOT_DRAW;
        assert_eq!(opts.0, 3);
        assert!(opts.contains(D2D1_BITMAP_OPTIONS_TARGET));
        assert!(!opts.contains(D2D1_BITMAP_OPTIONS_CPU_READ));
        assert_eq!(opts & D2D1_BITMAP_OPTIONS_CANNOT_DRAW, D2D1_BITMAP_OPTIONS_CANNOT_DRAW);

        let mut text = D2D1_DRAW_TEXT_OPTIONS_NONE;
        text |= D2D1_DRAW_TEXT_OPTIONS_ENABLE_COLOR_FONT;
        assert_eq!(text.0, 4);
    }

    #[test]
    fn flag_sets_insert_and_remove() {
        let mut opts = D2D1_BITMAP_OPTIONS::empty();
        assert_eq!(opts, D2D1_BITMAP_OPTIONS_NONE);
        opts.insert(D2D1_BITMAP_OPTIONS_TARGET | D2D1_BITMAP_OPTIONS_GDI_COMPATIBLE);
        opts.remove(D2D1_BITMAP_OPTIONS_TARGET);
        assert_eq!(opts.bits(), 0x8);
        assert!(opts.intersects(D2D1_BITMAP_OPTIONS_GDI_COMPATIBLE));

        // Associated and module-level names are the same value.
        assert_eq!(D2D1_BITMAP_OPTIONS::D2D1_BITMAP_OPTIONS_CPU_READ, D2D1_BITMAP_OPTIONS_CPU_READ);
        assert_eq!(D2D1_LAYER_OPTIONS1::D2D1_LAYER_OPTIONS1_IGNORE_ALPHA.bits(), 2);
    }

    #[test]
    fn unknown_flag_bits_are_kept() {
        // A newer runtime may hand back bits this crate has no name for.
        let opts = D2D1_DEVICE_CONTEXT_OPTIONS::from_bits_retain(0x41);
        assert!(opts.contains(D2D1_DEVICE_CONTEXT_OPTIONS_ENABLE_MULTITHREADED_OPTIMIZATIONS));
        assert_eq!(opts.0, 0x41);
        assert_eq!(opts.name(), None);
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(D2D1_RENDERING_PRIORITY_LOW.name(), Some("D2D1_RENDERING_PRIORITY_LOW"));
        assert_eq!(D2D1_UNIT_MODE(7).name(), None);
        assert_eq!(D2D1_COMPOSITE_MODE::NAMED.len(), 14);
    }
}
