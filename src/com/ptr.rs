// ── Reference-counted interface handle ────────────────────────────────────────
//
// `ComPtr<T>` owns exactly one native reference.  Clone = AddRef,
// Drop = Release.  The native count is the only lifetime state; nothing is
// cached on the Rust side.

use std::{fmt, marker::PhantomData, ops::Deref, ptr::NonNull};

use super::{IUnknown, Interface, HRESULT};
use crate::error::{check, Error, Result};

/// An owned reference to a native COM object.
///
/// Not `Send`/`Sync`: whether an object may cross threads is a property of
/// the native object, and callers that know it is free-threaded can move the
/// raw pointer themselves.
pub struct ComPtr<T: Interface> {
    ptr: NonNull<T>,
    _owns: PhantomData<T>,
}

impl<T: Interface> ComPtr<T> {
    /// Take ownership of one reference held by `ptr`.
    ///
    /// Returns `None` for a null pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a live `T` whose reference the caller owns and
    /// transfers to the returned value.
    pub unsafe fn from_raw(ptr: *mut T) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr, _owns: PhantomData })
    }

    /// Wrap a borrowed pointer, adding a reference of our own.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a live `T`.
    pub unsafe fn from_raw_borrowed(ptr: *mut T) -> Option<Self> {
        let owned = unsafe { Self::from_raw(ptr) }?;
        owned.add_ref();
        Some(owned)
    }

    /// Run a native call that produces an interface through an out-parameter.
    ///
    /// The HRESULT is checked first; a success code with a null result is
    /// reported as `Error::NullInterface`.
    ///
    /// # Safety
    ///
    /// On success `call` must have stored either null or an owned reference
    /// to a live `T` into the out-parameter.
    pub unsafe fn from_out<F>(function: &'static str, call: F) -> Result<Self>
    where
        F: FnOnce(*mut *mut T) -> HRESULT,
    {
        let mut raw: *mut T = std::ptr::null_mut();
        check(function, call(&mut raw))?;
        // SAFETY: forwarded from the caller's contract.
        unsafe { Self::from_raw(raw) }.ok_or(Error::NullInterface { function })
    }

    /// The raw interface pointer.  The reference stays owned by `self`.
    pub fn as_raw(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Give up ownership without releasing; the caller now owns the reference.
    pub fn into_raw(self) -> *mut T {
        let raw = self.ptr.as_ptr();
        std::mem::forget(self);
        raw
    }

    /// `QueryInterface` for `U`, returning a new owned reference.
    pub fn query<U: Interface>(&self) -> Result<ComPtr<U>> {
        // SAFETY: `self` holds a live reference; QueryInterface stores an
        // AddRef'd pointer on success.
        unsafe {
            ComPtr::from_out("QueryInterface", |out: *mut *mut U| {
                self.unknown().QueryInterface(&U::IID, out.cast())
            })
        }
    }

    fn unknown(&self) -> &IUnknown {
        // SAFETY: `ptr` is live for as long as `self` is.
        unsafe { self.ptr.as_ref() }.as_unknown()
    }

    fn add_ref(&self) -> u32 {
        // SAFETY: `self` holds a live reference.
        let count = unsafe { self.unknown().AddRef() };
        log::trace!("{}::AddRef -> {count}", T::NAME);
        count
    }
}

impl<T: Interface> Clone for ComPtr<T> {
    fn clone(&self) -> Self {
        self.add_ref();
        Self { ptr: self.ptr, _owns: PhantomData }
    }
}

impl<T: Interface> Drop for ComPtr<T> {
    fn drop(&mut self) {
        // SAFETY: we own exactly one reference and give it back here.  The
        // pointer is not touched again afterwards.
        let count = unsafe { self.unknown().Release() };
        log::trace!("{}::Release -> {count}", T::NAME);
    }
}

impl<T: Interface> Deref for ComPtr<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: `ptr` is live for as long as `self` is.
        unsafe { self.ptr.as_ref() }
    }
}

impl<T: Interface> fmt::Debug for ComPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComPtr<{}>({:p})", T::NAME, self.ptr)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::com::{IUnknownVtbl, GUID};
    use std::{
        ffi::c_void,
        sync::atomic::{AtomicU32, Ordering},
    };
    use crate::com::{E_FAIL, E_NOINTERFACE, S_OK};

    // A minimal IUnknown implementation whose count is observable.  The
    // object is leaked for the duration of a test and never freed by Release.
    #[repr(C)]
    struct FakeObject {
        vtbl: *const IUnknownVtbl,
        refs: AtomicU32,
    }

    static FAKE_VTBL: IUnknownVtbl = IUnknownVtbl {
        QueryInterface: fake_query_interface,
        AddRef: fake_add_ref,
        Release: fake_release,
    };

    unsafe extern "system" fn fake_query_interface(
        this: *mut IUnknown,
        riid: *const GUID,
        out: *mut *mut c_void,
    ) -> HRESULT {
        if unsafe { *riid } == IUnknown::IID {
            unsafe {
                fake_add_ref(this);
                *out = this.cast();
            }
            S_OK
        } else {
            unsafe { *out = std::ptr::null_mut() };
            E_NOINTERFACE
        }
    }

    unsafe extern "system" fn fake_add_ref(this: *mut IUnknown) -> u32 {
        let obj = unsafe { &*(this as *const FakeObject) };
        obj.refs.fetch_add(1, Ordering::SeqCst) + 1
    }

    unsafe extern "system" fn fake_release(this: *mut IUnknown) -> u32 {
        let obj = unsafe { &*(this as *const FakeObject) };
        obj.refs.fetch_sub(1, Ordering::SeqCst) - 1
    }

    fn fake() -> &'static FakeObject {
        Box::leak(Box::new(FakeObject { vtbl: &FAKE_VTBL, refs: AtomicU32::new(1) }))
    }

    fn raw(obj: &'static FakeObject) -> *mut IUnknown {
        obj as *const FakeObject as *mut IUnknown
    }

    #[test]
    fn null_is_none() {
        assert!(unsafe { ComPtr::<IUnknown>::from_raw(std::ptr::null_mut()) }.is_none());
    }

    #[test]
    fn clone_and_drop_balance() {
        let obj = fake();
        let first = unsafe { ComPtr::from_raw(raw(obj)) }.unwrap();
        let second = first.clone();
        assert_eq!(obj.refs.load(Ordering::SeqCst), 2);
        drop(first);
        assert_eq!(obj.refs.load(Ordering::SeqCst), 1);
        drop(second);
        assert_eq!(obj.refs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn borrowed_adds_a_reference() {
        let obj = fake();
        let ptr = unsafe { ComPtr::from_raw_borrowed(raw(obj)) }.unwrap();
        assert_eq!(obj.refs.load(Ordering::SeqCst), 2);
        drop(ptr);
        assert_eq!(obj.refs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn into_raw_keeps_the_reference() {
        let obj = fake();
        let ptr = unsafe { ComPtr::from_raw(raw(obj)) }.unwrap();
        let back = ptr.into_raw();
        assert_eq!(back, raw(obj));
        assert_eq!(obj.refs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn query_supported_interface() {
        let obj = fake();
        let ptr = unsafe { ComPtr::from_raw(raw(obj)) }.unwrap();
        let again: ComPtr<IUnknown> = ptr.query().unwrap();
        assert_eq!(again.as_raw(), ptr.as_raw());
        assert_eq!(obj.refs.load(Ordering::SeqCst), 2);
    }

    opaque_interface! {
        /// Implemented by nothing; the fake object must refuse it.
        #[uuid(0x5d0c_7a31_9e44_4f1b_8a62_3c1f_0b7e_d2a9)]
        interface IUnimplemented;
    }

    #[test]
    fn query_unsupported_interface_is_native_error() {
        let obj = fake();
        let ptr = unsafe { ComPtr::from_raw(raw(obj)) }.unwrap();
        let err = ptr.query::<IUnimplemented>().unwrap_err();
        assert_eq!(err.code(), Some(E_NOINTERFACE));
        assert!(matches!(err, Error::Native { function: "QueryInterface", .. }));
        assert_eq!(obj.refs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn from_out_propagates_failure() {
        let err = unsafe { ComPtr::<IUnknown>::from_out("Create", |_| E_FAIL) }.unwrap_err();
        assert_eq!(err.code(), Some(E_FAIL));
    }

    #[test]
    fn from_out_rejects_null_success() {
        let err = unsafe { ComPtr::<IUnknown>::from_out("Create", |_| S_OK) }.unwrap_err();
        assert!(matches!(err, Error::NullInterface { function: "Create" }));
    }
}
