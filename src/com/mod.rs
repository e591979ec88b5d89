// ── COM foundation ────────────────────────────────────────────────────────────
//
// `IUnknown` is declared by hand because it is the root of every vtable; all
// other interfaces come from `com_interface!` / `opaque_interface!`.
//
// Handles are never constructed in Rust.  Native code hands out pointers to
// objects whose first field is the vtable pointer; a `&IFoo` is a view of
// such an object.

#![allow(non_snake_case)]

mod ptr;

pub use ptr::ComPtr;

pub use windows_core::{GUID, HRESULT};

use std::ffi::c_void;

// ── Foundation values ─────────────────────────────────────────────────────────

/// The 32-bit Win32 boolean: zero is false, anything else is true.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BOOL(pub i32);

impl BOOL {
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for BOOL {
    fn from(value: bool) -> Self {
        Self(value as i32)
    }
}

impl From<BOOL> for bool {
    fn from(value: BOOL) -> Self {
        value.as_bool()
    }
}

pub const TRUE: BOOL = BOOL(1);
pub const FALSE: BOOL = BOOL(0);

// winerror.h
pub const S_OK: HRESULT = HRESULT(0);
pub const S_FALSE: HRESULT = HRESULT(1);
pub const E_NOINTERFACE: HRESULT = HRESULT(0x8000_4002_u32 as i32);
pub const E_POINTER: HRESULT = HRESULT(0x8000_4003_u32 as i32);
pub const E_ABORT: HRESULT = HRESULT(0x8000_4004_u32 as i32);
pub const E_FAIL: HRESULT = HRESULT(0x8000_4005_u32 as i32);
pub const E_INVALIDARG: HRESULT = HRESULT(0x8007_0057_u32 as i32);

// ── Interface traits ──────────────────────────────────────────────────────────

/// A COM interface handle: one vtable pointer whose table starts with
/// `IUnknown`.
///
/// # Safety
///
/// Implementors must be `#[repr(C)]` structs consisting of exactly one
/// vtable pointer, and that vtable must begin with the three `IUnknown`
/// slots.  `ComPtr` relies on this to reference-count any interface.
pub unsafe trait Interface: Sized {
    /// The published interface identifier.
    const IID: GUID;
    /// The native interface name.
    const NAME: &'static str;

    /// View this handle as its `IUnknown` prefix.
    fn as_unknown(&self) -> &IUnknown {
        // SAFETY: guaranteed by the trait contract.
        unsafe { &*(self as *const Self as *const IUnknown) }
    }
}

/// An interface whose vtable is fully bound by this crate.
pub trait Vtable: Interface {
    /// The `#[repr(C)]` vtable struct.
    type Vtbl;
    /// Name of the base interface, `None` only for `IUnknown`.
    const BASE: Option<&'static str>;
    /// Number of slots including every inherited one.
    const SLOT_COUNT: usize;

    /// Slot names in vtable order, inherited slots first.
    fn slots() -> Vec<&'static str>;
}

// ── IUnknown ──────────────────────────────────────────────────────────────────

/// Vtable of [`IUnknown`].
#[repr(C)]
pub struct IUnknownVtbl {
    pub QueryInterface: unsafe extern "system" fn(
        This: *mut IUnknown,
        riid: *const GUID,
        ppvObject: *mut *mut c_void,
    ) -> HRESULT,
    pub AddRef: unsafe extern "system" fn(This: *mut IUnknown) -> u32,
    pub Release: unsafe extern "system" fn(This: *mut IUnknown) -> u32,
}

/// The root COM interface.
#[repr(C)]
pub struct IUnknown {
    pub lpVtbl: *const IUnknownVtbl,
}

impl IUnknown {
    #[inline]
    pub unsafe fn QueryInterface(&self, riid: *const GUID, ppvObject: *mut *mut c_void) -> HRESULT {
        // SAFETY: the caller guarantees `self` is a live interface pointer.
        unsafe { ((*self.lpVtbl).QueryInterface)(self as *const Self as *mut Self, riid, ppvObject) }
    }

    /// Increment the native reference count; returns the new count.
    #[inline]
    pub unsafe fn AddRef(&self) -> u32 {
        // SAFETY: the caller guarantees `self` is a live interface pointer.
        unsafe { ((*self.lpVtbl).AddRef)(self as *const Self as *mut Self) }
    }

    /// Decrement the native reference count; returns the new count.  The
    /// object may be destroyed when this reaches zero.
    #[inline]
    pub unsafe fn Release(&self) -> u32 {
        // SAFETY: the caller guarantees `self` is a live interface pointer.
        unsafe { ((*self.lpVtbl).Release)(self as *const Self as *mut Self) }
    }
}

// SAFETY: IUnknown is the base layout every interface shares.
unsafe impl Interface for IUnknown {
    const IID: GUID = GUID::from_u128(0x00000000_0000_0000_c000_000000000046);
    const NAME: &'static str = "IUnknown";
}

impl Vtable for IUnknown {
    type Vtbl = IUnknownVtbl;
    const BASE: Option<&'static str> = None;
    const SLOT_COUNT: usize = 3;

    fn slots() -> Vec<&'static str> {
        vec!["QueryInterface", "AddRef", "Release"]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
