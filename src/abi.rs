// ── Layout catalogue ──────────────────────────────────────────────────────────
//
// A serializable description of every bound interface and value struct:
// names, IIDs, slot order and sizes as compiled for the current target.  The
// checked-in fixtures under `abi/` hold the native values for both pointer
// widths; the tests diff the compiled catalogue against them.

use std::io;
use std::mem::{align_of, size_of};

use serde::{Deserialize, Serialize};

use crate::com::{IUnknown, Interface, Vtable, GUID};
use crate::error::Result;

/// `GUID` in registry form without braces, lowercase.
pub fn iid_string(guid: &GUID) -> String {
    let d = &guid.data4;
    format!(
        "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        guid.data1, guid.data2, guid.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
    )
}

/// An interface whose vtable is fully bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceLayout {
    pub name: String,
    pub iid: String,
    pub base: Option<String>,
    /// Slot names in vtable order, inherited slots first.
    pub slots: Vec<String>,
    /// `size_of` the vtable struct; always `slots.len()` pointers.
    pub vtable_size: usize,
}

impl InterfaceLayout {
    pub fn of<T: Vtable>() -> Self {
        Self {
            name: T::NAME.to_owned(),
            iid: iid_string(&T::IID),
            base: T::BASE.map(str::to_owned),
            slots: T::slots().into_iter().map(str::to_owned).collect(),
            vtable_size: size_of::<T::Vtbl>(),
        }
    }
}

/// An interface that is only passed around by pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueLayout {
    pub name: String,
    pub iid: String,
}

impl OpaqueLayout {
    pub fn of<T: Interface>() -> Self {
        Self { name: T::NAME.to_owned(), iid: iid_string(&T::IID) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructLayout {
    pub name: String,
    pub size: usize,
    pub align: usize,
}

impl StructLayout {
    pub fn of<T>(name: &str) -> Self {
        Self { name: name.to_owned(), size: size_of::<T>(), align: align_of::<T>() }
    }
}

/// Everything the enabled features bind, for one pointer width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub pointer_width: u32,
    pub interfaces: Vec<InterfaceLayout>,
    pub opaque_interfaces: Vec<OpaqueLayout>,
    pub structs: Vec<StructLayout>,
}

impl Catalogue {
    pub fn interface(&self, name: &str) -> Option<&InterfaceLayout> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    /// Flat vtable index of `method` on `interface`.
    ///
    /// When a derived interface re-declares a base method name, the index of
    /// the most-derived slot is returned, which is the one the handle's own
    /// wrapper calls.
    pub fn slot_index(&self, interface: &str, method: &str) -> Option<usize> {
        self.interface(interface)?.slots.iter().rposition(|slot| slot == method)
    }
}

// ── Building the catalogue ────────────────────────────────────────────────────

macro_rules! interfaces {
    ($module:ident: $($ty:ident),* $(,)?) => {
        [$(InterfaceLayout::of::<crate::$module::$ty>()),*]
    };
}

macro_rules! opaque {
    ($module:ident: $($ty:ident),* $(,)?) => {
        [$(OpaqueLayout::of::<crate::$module::$ty>()),*]
    };
}

macro_rules! structs {
    ($module:ident: $($ty:ident),* $(,)?) => {
        [$(StructLayout::of::<crate::$module::$ty>(stringify!($ty))),*]
    };
}

/// Describe every interface and struct bound by the enabled features.
pub fn catalogue() -> Catalogue {
    let mut catalogue = Catalogue {
        pointer_width: usize::BITS,
        interfaces: vec![InterfaceLayout::of::<IUnknown>()],
        opaque_interfaces: Vec::new(),
        structs: Vec::new(),
    };

    catalogue.interfaces.extend(interfaces!(dcommon: ID2D1SimplifiedGeometrySink));
    catalogue.structs.extend(structs!(dcommon:
        D2D1_PIXEL_FORMAT, D2D_POINT_2U, D2D_POINT_2F, D2D_RECT_F, D2D_RECT_U, D2D_SIZE_F,
        D2D_SIZE_U, D2D_MATRIX_3X2_F, D2D_MATRIX_4X4_F, D2D_COLOR_F, D2D1_BEZIER_SEGMENT,
    ));
    catalogue.opaque_interfaces.extend(opaque!(foreign:
        IDXGIDevice, IDXGISurface, IWICBitmapSource, IWICColorContext, IWICImagingFactory,
    ));

    #[cfg(feature = "print")]
    catalogue.interfaces.extend(interfaces!(print: IPrintDocumentPackageTarget));

    #[cfg(feature = "dwrite")]
    {
        catalogue.interfaces.extend(interfaces!(dwrite:
            IDWriteFontFile, IDWriteRenderingParams, IDWriteFontFace, IDWriteTextAnalysisSource,
            IDWriteTextAnalysisSink, IDWriteTextAnalyzer,
        ));
        catalogue.opaque_interfaces.extend(opaque!(dwrite:
            IDWriteFactory, IDWriteFontFileLoader, IDWriteNumberSubstitution, IDWriteTextFormat,
            IDWriteTextLayout,
        ));
        catalogue.structs.extend(structs!(dwrite:
            DWRITE_FONT_METRICS, DWRITE_GLYPH_METRICS, DWRITE_GLYPH_OFFSET, DWRITE_MATRIX,
            DWRITE_GLYPH_RUN, DWRITE_GLYPH_RUN_DESCRIPTION, DWRITE_SCRIPT_ANALYSIS,
            DWRITE_FONT_FEATURE, DWRITE_TYPOGRAPHIC_FEATURES, DWRITE_LINE_BREAKPOINT,
            DWRITE_SHAPING_TEXT_PROPERTIES, DWRITE_SHAPING_GLYPH_PROPERTIES,
        ));
    }

    #[cfg(feature = "d2d1")]
    {
        catalogue.interfaces.extend(interfaces!(d2d1:
            ID2D1Resource, ID2D1RenderTarget, ID2D1DeviceContext, ID2D1DeviceContext1,
            ID2D1Device, ID2D1Device1,
        ));
        catalogue.opaque_interfaces.extend(opaque!(d2d1:
            ID2D1Factory, ID2D1Factory1, ID2D1Image, ID2D1Bitmap, ID2D1Bitmap1, ID2D1ColorContext,
            ID2D1Brush, ID2D1SolidColorBrush, ID2D1BitmapBrush, ID2D1BitmapBrush1,
            ID2D1LinearGradientBrush, ID2D1RadialGradientBrush, ID2D1ImageBrush,
            ID2D1GradientStopCollection, ID2D1GradientStopCollection1, ID2D1StrokeStyle,
            ID2D1Geometry, ID2D1GeometryRealization, ID2D1Layer, ID2D1Mesh,
            ID2D1BitmapRenderTarget, ID2D1DrawingStateBlock, ID2D1Effect, ID2D1CommandList,
            ID2D1GdiMetafile, ID2D1PrintControl,
        ));
        catalogue.structs.extend(structs!(d2d1:
            D2D1_BITMAP_PROPERTIES, D2D1_GRADIENT_STOP, D2D1_BRUSH_PROPERTIES,
            D2D1_BITMAP_BRUSH_PROPERTIES, D2D1_LINEAR_GRADIENT_BRUSH_PROPERTIES,
            D2D1_RADIAL_GRADIENT_BRUSH_PROPERTIES, D2D1_ROUNDED_RECT, D2D1_ELLIPSE,
            D2D1_RENDER_TARGET_PROPERTIES, D2D1_LAYER_PARAMETERS, D2D1_FACTORY_OPTIONS,
            D2D1_BITMAP_PROPERTIES1, D2D1_RENDERING_CONTROLS, D2D1_EFFECT_INPUT_DESCRIPTION,
            D2D1_IMAGE_BRUSH_PROPERTIES, D2D1_BITMAP_BRUSH_PROPERTIES1, D2D1_LAYER_PARAMETERS1,
            D2D1_CREATION_PROPERTIES, D2D1_PRINT_CONTROL_PROPERTIES,
        ));
    }

    catalogue
}

/// Write [`catalogue()`] as pretty-printed JSON.
pub fn write_catalogue<W: io::Write>(writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &catalogue())?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[cfg(target_pointer_width = "64")]
    const FIXTURE: &str = include_str!("../abi/layout-64.json");
    #[cfg(target_pointer_width = "32")]
    const FIXTURE: &str = include_str!("../abi/layout-32.json");

    fn fixture() -> Catalogue {
        serde_json::from_str(FIXTURE).unwrap()
    }

    #[test]
    fn every_compiled_entry_matches_the_fixture() {
        let expected = fixture();
        let actual = catalogue();
        assert_eq!(actual.pointer_width, expected.pointer_width);

        for layout in &actual.interfaces {
            let native = expected.interface(&layout.name).unwrap_or_else(|| panic!("{} missing", layout.name));
            assert_eq!(layout, native);
        }
        for layout in &actual.opaque_interfaces {
            let native = expected.opaque_interfaces.iter().find(|o| o.name == layout.name);
            assert_eq!(Some(layout), native);
        }
        for layout in &actual.structs {
            let native = expected.structs.iter().find(|s| s.name == layout.name);
            assert_eq!(Some(layout), native);
        }
    }

    #[cfg(feature = "d2d1")]
    #[test]
    fn full_build_covers_the_whole_fixture() {
        assert_eq!(catalogue(), fixture());
    }

    #[test]
    fn vtables_are_slot_count_pointers() {
        for layout in catalogue().interfaces {
            assert_eq!(layout.vtable_size, layout.slots.len() * size_of::<usize>(), "{}", layout.name);
            assert_eq!(&layout.slots[..3], ["QueryInterface", "AddRef", "Release"]);
        }
    }

    #[test]
    fn iid_strings_are_lowercase_registry_form() {
        assert_eq!(iid_string(&IUnknown::IID), "00000000-0000-0000-c000-000000000046");
        assert_eq!(
            iid_string(&GUID::from_u128(0x2CD9069E_12E2_11DC_9FED_001143A055F9)),
            "2cd9069e-12e2-11dc-9fed-001143a055f9"
        );
    }

    #[test]
    fn slot_lookup() {
        let cat = catalogue();
        assert_eq!(cat.slot_index("IUnknown", "Release"), Some(2));
        assert_eq!(cat.slot_index("IUnknown", "Nope"), None);
        assert_eq!(cat.slot_index("INope", "Release"), None);

        #[cfg(feature = "d2d1")]
        {
            assert_eq!(cat.slot_index("ID2D1RenderTarget", "EndDraw"), Some(49));
            assert_eq!(cat.slot_index("ID2D1DeviceContext1", "EndDraw"), Some(49));
            assert_eq!(cat.slot_index("ID2D1Device1", "CreateDeviceContext"), Some(11));
            assert_eq!(cat.slot_index("ID2D1Device", "CreateDeviceContext"), Some(4));
        }
    }

    #[test]
    fn json_output_round_trips() {
        let mut out = Vec::new();
        write_catalogue(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("{\n  \"pointer_width\""));

        let parsed: Catalogue = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, catalogue());
    }
}
