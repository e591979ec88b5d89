// ── Factory entry points ──────────────────────────────────────────────────────
//
// The four creation functions of d2d1.dll / dwrite.dll, returning owned
// `ComPtr`s instead of raw out-parameters.  This is the only place outside
// `ComPtr` itself where a native status code becomes an `Error`.
//
// Only built for Windows targets: elsewhere the DLLs do not exist and the
// raw declarations have nothing to link against.

use std::ptr;

use crate::com::{ComPtr, Interface};
use crate::error::Result;

#[cfg(feature = "d2d1")]
use crate::{
    d2d1::{
        D2D1CreateDevice, D2D1CreateDeviceContext, D2D1CreateFactory, ID2D1Device,
        ID2D1DeviceContext, D2D1_CREATION_PROPERTIES, D2D1_FACTORY_OPTIONS, D2D1_FACTORY_TYPE,
    },
    foreign::{IDXGIDevice, IDXGISurface},
};

#[cfg(feature = "dwrite")]
use crate::dwrite::{DWriteCreateFactory, DWRITE_FACTORY_TYPE};

fn opt_ptr<T>(value: Option<&T>) -> *const T {
    value.map_or(ptr::null(), |v| v as *const T)
}

/// Create a Direct2D factory exposing interface `T` (`ID2D1Factory`,
/// `ID2D1Factory1`, ...).
///
/// Requesting an interface the installed runtime does not implement fails
/// with `E_NOINTERFACE`.
#[cfg(feature = "d2d1")]
pub fn d2d1_factory<T: Interface>(
    factory_type: D2D1_FACTORY_TYPE,
    options: Option<&D2D1_FACTORY_OPTIONS>,
) -> Result<ComPtr<T>> {
    log::debug!("D2D1CreateFactory({:?}, {})", factory_type.name(), T::NAME);
    // SAFETY: on success D2D1CreateFactory stores an owned reference to an
    // object implementing `T::IID`.
    unsafe {
        ComPtr::from_out("D2D1CreateFactory", |out: *mut *mut T| {
            D2D1CreateFactory(factory_type, &T::IID, opt_ptr(options), out.cast())
        })
    }
}

/// Create a Direct2D device on top of a DXGI device.
///
/// `properties` of `None` selects the defaults of the calling thread's
/// factory.
#[cfg(feature = "d2d1")]
pub fn d2d1_device(
    dxgi_device: &IDXGIDevice,
    properties: Option<&D2D1_CREATION_PROPERTIES>,
) -> Result<ComPtr<ID2D1Device>> {
    let raw = dxgi_device as *const IDXGIDevice as *mut IDXGIDevice;
    // SAFETY: `dxgi_device` is a live interface for the duration of the
    // call; the out-parameter receives an owned reference.
    unsafe {
        ComPtr::from_out("D2D1CreateDevice", |out| D2D1CreateDevice(raw, opt_ptr(properties), out))
    }
}

/// Create a device context that renders straight into a DXGI surface.
#[cfg(feature = "d2d1")]
pub fn d2d1_device_context(
    dxgi_surface: &IDXGISurface,
    properties: Option<&D2D1_CREATION_PROPERTIES>,
) -> Result<ComPtr<ID2D1DeviceContext>> {
    let raw = dxgi_surface as *const IDXGISurface as *mut IDXGISurface;
    // SAFETY: as for `d2d1_device`.
    unsafe {
        ComPtr::from_out("D2D1CreateDeviceContext", |out| {
            D2D1CreateDeviceContext(raw, opt_ptr(properties), out)
        })
    }
}

/// Create a DirectWrite factory exposing interface `T`.
///
/// Shared factories are process-wide singletons; isolated ones keep their
/// own font caches.
#[cfg(feature = "dwrite")]
pub fn dwrite_factory<T: Interface>(factory_type: DWRITE_FACTORY_TYPE) -> Result<ComPtr<T>> {
    log::debug!("DWriteCreateFactory({:?}, {})", factory_type.name(), T::NAME);
    // SAFETY: on success DWriteCreateFactory stores an owned reference to an
    // object implementing `T::IID`.
    unsafe {
        ComPtr::from_out("DWriteCreateFactory", |out: *mut *mut T| {
            DWriteCreateFactory(factory_type, &T::IID, out.cast())
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_options_become_null() {
        assert!(opt_ptr::<u32>(None).is_null());
        let value = 5u32;
        assert_eq!(opt_ptr(Some(&value)), &value as *const u32);
    }
}
