// ── Print document package target ─────────────────────────────────────────────
//
// Source of truth: documenttarget.h.  Direct2D's `CreatePrintControl` takes an
// `IPrintDocumentPackageTarget`; callers obtain the concrete package target
// (XPS or OpenXPS) through `GetPackageTarget` with one of the type GUIDs below.

#![allow(non_snake_case, non_upper_case_globals)]

use std::ffi::c_void;

use crate::com::{IUnknown, IUnknownVtbl, GUID, HRESULT};

/// Package target type: Microsoft XPS.
pub const ID_DOCUMENTPACKAGETARGET_MSXPS: GUID =
    GUID::from_u128(0x9cae40a8_ded1_41c9_a9fd_d735ef33aeda);
/// Package target type: OpenXPS.
pub const ID_DOCUMENTPACKAGETARGET_OPENXPS: GUID =
    GUID::from_u128(0x0056bb72_8c9c_4612_bd0f_93012a87099d);
/// Package target type: OpenXPS with 3D content.
pub const ID_DOCUMENTPACKAGETARGET_OPENXPS_WITH_3D: GUID =
    GUID::from_u128(0x63dbd720_8b14_4577_b074_7bb11b596d28);

com_interface! {
    /// A print job's document package sink.
    #[uuid(0x1b8efec4_3019_4c27_964e_367202156906)]
    interface IPrintDocumentPackageTarget(IPrintDocumentPackageTargetVtbl): IUnknown(IUnknownVtbl) {
        /// `targetTypes` is allocated with `CoTaskMemAlloc`; the caller frees it.
        fn GetPackageTargetTypes(targetCount: *mut u32, targetTypes: *mut *mut GUID) -> HRESULT,
        fn GetPackageTarget(guidTargetType: *const GUID, riid: *const GUID, ppvTarget: *mut *mut c_void) -> HRESULT,
        fn Cancel() -> HRESULT,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
