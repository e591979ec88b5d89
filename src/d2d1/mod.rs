// ── Direct2D ──────────────────────────────────────────────────────────────────
//
// d2d1.h, d2d1_1.h and d2d1_2.h as far as the device / device-context chain
// needs them, plus the value helpers from d2d1helper.h.

#![allow(non_snake_case, non_camel_case_types, non_upper_case_globals)]

mod enums;
mod helpers;
mod interfaces;
mod structs;

pub use enums::*;
pub use helpers::DEFAULT_DPI;
pub use interfaces::*;
pub use structs::*;

use std::ffi::c_void;

use crate::com::{BOOL, GUID, HRESULT};
use crate::foreign::{IDXGIDevice, IDXGISurface};

// ── Entry points (d2d1.dll) ───────────────────────────────────────────────────

// Creates a factory of interface `riid`; `pFactoryOptions` may be null.
windows_targets::link!("d2d1.dll" "system" fn D2D1CreateFactory(factorytype: D2D1_FACTORY_TYPE, riid: *const GUID, pfactoryoptions: *const D2D1_FACTORY_OPTIONS, ppifactory: *mut *mut c_void) -> HRESULT);
// `creationProperties` may be null for the defaults.
windows_targets::link!("d2d1.dll" "system" fn D2D1CreateDevice(dxgidevice: *mut IDXGIDevice, creationproperties: *const D2D1_CREATION_PROPERTIES, d2ddevice: *mut *mut ID2D1Device) -> HRESULT);
windows_targets::link!("d2d1.dll" "system" fn D2D1CreateDeviceContext(dxgisurface: *mut IDXGISurface, creationproperties: *const D2D1_CREATION_PROPERTIES, d2ddevicecontext: *mut *mut ID2D1DeviceContext) -> HRESULT);

// ── Math entry points ─────────────────────────────────────────────────────────

// `angle` is in degrees, clockwise.
windows_targets::link!("d2d1.dll" "system" fn D2D1MakeRotateMatrix(angle: f32, center: D2D1_POINT_2F, matrix: *mut D2D1_MATRIX_3X2_F));
windows_targets::link!("d2d1.dll" "system" fn D2D1MakeSkewMatrix(anglex: f32, angley: f32, center: D2D1_POINT_2F, matrix: *mut D2D1_MATRIX_3X2_F));
windows_targets::link!("d2d1.dll" "system" fn D2D1IsMatrixInvertible(matrix: *const D2D1_MATRIX_3X2_F) -> BOOL);
// Inverts in place; returns FALSE and leaves `matrix` untouched when singular.
windows_targets::link!("d2d1.dll" "system" fn D2D1InvertMatrix(matrix: *mut D2D1_MATRIX_3X2_F) -> BOOL);
windows_targets::link!("d2d1.dll" "system" fn D2D1ConvertColorSpace(sourcecolorspace: D2D1_COLOR_SPACE, destinationcolorspace: D2D1_COLOR_SPACE, color: *const D2D1_COLOR_F) -> D2D1_COLOR_F);
windows_targets::link!("d2d1.dll" "system" fn D2D1SinCos(angle: f32, s: *mut f32, c: *mut f32));
windows_targets::link!("d2d1.dll" "system" fn D2D1Tan(angle: f32) -> f32);
windows_targets::link!("d2d1.dll" "system" fn D2D1Vec3Length(x: f32, y: f32, z: f32) -> f32);
windows_targets::link!("d2d1.dll" "system" fn D2D1ComputeMaximumScaleFactor(matrix: *const D2D1_MATRIX_3X2_F) -> f32);
