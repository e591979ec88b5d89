// ── DirectWrite ───────────────────────────────────────────────────────────────
//
// Bindings for the font-face and text-analysis half of dwrite.h.  Layout,
// formatting and font-collection interfaces are referenced by pointer only.

#![allow(non_snake_case, non_camel_case_types, non_upper_case_globals)]

mod enums;
mod interfaces;
mod structs;

pub use enums::*;
pub use interfaces::*;
pub use structs::*;

use crate::com::{IUnknown, GUID, HRESULT};

// ── Entry point ───────────────────────────────────────────────────────────────

windows_targets::link!("dwrite.dll" "system" fn DWriteCreateFactory(factorytype: DWRITE_FACTORY_TYPE, iid: *const GUID, factory: *mut *mut IUnknown) -> HRESULT);
