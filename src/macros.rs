// ── Binding generators ────────────────────────────────────────────────────────
//
// Every interface, enum and bit-field struct in the crate is declared through
// one of the macros below, so the per-item boilerplate (vtable struct, handle,
// forwarding method, IID, slot list) is written exactly once.
//
// The generated forwarding methods are thin shims: read the slot, pass `self`
// as `This`, return whatever the native code returned.

/// Declare a COM interface: its vtable, its handle, one forwarding method per
/// slot, and its `Interface`/`Vtable` impls.
///
/// ```ignore
/// com_interface! {
///     #[uuid(0x1b8efec4_3019_4c27_964e_367202156906)]
///     interface IPrintDocumentPackageTarget(IPrintDocumentPackageTargetVtbl): IUnknown(IUnknownVtbl) {
///         fn Cancel() -> HRESULT,
///     }
/// }
/// ```
///
/// Methods are listed in native declaration order; the base vtable is nested
/// as the first field so inherited slots keep their native positions.
macro_rules! com_interface {
    (
        $(#[doc = $doc:literal])*
        #[uuid($iid:literal)]
        interface $iface:ident($vtbl:ident): $parent:ident($pvtbl:ident) {
            $(
                $(#[$mattr:meta])*
                fn $method:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty,
            )*
        }
    ) => {
        #[doc = concat!("Vtable of [`", stringify!($iface), "`].")]
        #[repr(C)]
        pub struct $vtbl {
            pub parent: $pvtbl,
            $(
                pub $method: unsafe extern "system" fn(This: *mut $iface $(, $arg: $ty)*) -> $ret,
            )*
        }

        $(#[doc = $doc])*
        #[repr(C)]
        pub struct $iface {
            pub lpVtbl: *const $vtbl,
        }

        impl $iface {
            $(
                $(#[$mattr])*
                #[inline]
                pub unsafe fn $method(&self $(, $arg: $ty)*) -> $ret {
                    // SAFETY: the caller guarantees `self` is a live interface
                    // pointer whose vtable has this layout.
                    unsafe { ((*self.lpVtbl).$method)(self as *const Self as *mut Self $(, $arg)*) }
                }
            )*
        }

        impl ::core::ops::Deref for $iface {
            type Target = $parent;

            fn deref(&self) -> &$parent {
                // SAFETY: both handles are a single vtable pointer, and this
                // vtable starts with the base vtable.
                unsafe { &*(self as *const Self as *const $parent) }
            }
        }

        // SAFETY: the handle is `#[repr(C)]` with the vtable pointer first and
        // the vtable starts with `IUnknownVtbl`.
        unsafe impl $crate::com::Interface for $iface {
            const IID: $crate::com::GUID = $crate::com::GUID::from_u128($iid);
            const NAME: &'static str = stringify!($iface);
        }

        impl $crate::com::Vtable for $iface {
            type Vtbl = $vtbl;
            const BASE: Option<&'static str> = Some(stringify!($parent));
            const SLOT_COUNT: usize = <$parent as $crate::com::Vtable>::SLOT_COUNT + {
                const OWN: &[&str] = &[$(stringify!($method)),*];
                OWN.len()
            };

            fn slots() -> Vec<&'static str> {
                let mut slots = <$parent as $crate::com::Vtable>::slots();
                slots.extend_from_slice(&[$(stringify!($method)),*]);
                slots
            }
        }
    };
}

/// Declare an interface that this crate only passes around by pointer.
///
/// The handle is still a single vtable pointer whose first three slots are
/// `IUnknown`, so it can be reference-counted and queried; the remaining
/// slots are not bound.
macro_rules! opaque_interface {
    (
        $(#[doc = $doc:literal])*
        #[uuid($iid:literal)]
        interface $iface:ident;
    ) => {
        $(#[doc = $doc])*
        #[repr(C)]
        pub struct $iface {
            pub lpVtbl: *const $crate::com::IUnknownVtbl,
        }

        impl ::core::ops::Deref for $iface {
            type Target = $crate::com::IUnknown;

            fn deref(&self) -> &$crate::com::IUnknown {
                // SAFETY: every COM vtable starts with the IUnknown slots.
                unsafe { &*(self as *const Self as *const $crate::com::IUnknown) }
            }
        }

        // SAFETY: single vtable pointer whose table starts with IUnknown.
        unsafe impl $crate::com::Interface for $iface {
            const IID: $crate::com::GUID = $crate::com::GUID::from_u128($iid);
            const NAME: &'static str = stringify!($iface);
        }
    };
}

/// Declare a native enumeration as a transparent integer newtype with one
/// module-level constant per native name.
///
/// Aliases are ordinary entries whose value refers to the replacement
/// constant, so both names resolve to the same number.  The `flags` form
/// also declares every name as a `bitflags` flag of the same newtype, which
/// supplies the set operators and `contains`/`insert`/`remove`.
macro_rules! native_enum {
    (
        $(#[doc = $doc:literal])*
        pub enum $name:ident: $repr:ty {
            $( $(#[$vattr:meta])* $variant:ident = $value:expr, )*
        }
    ) => {
        $(#[doc = $doc])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub $repr);

        $( $(#[$vattr])* pub const $variant: $name = $name($value); )*

        impl $name {
            /// Every native name with its value, in header order.
            pub const NAMED: &'static [(&'static str, $name)] = &[$((stringify!($variant), $variant)),*];

            /// First native name carrying this value, if any.
            pub fn name(self) -> Option<&'static str> {
                Self::NAMED.iter().find(|(_, v)| *v == self).map(|(n, _)| *n)
            }
        }
    };

    (
        $(#[doc = $doc:literal])*
        pub flags $name:ident: $repr:ty {
            $( $(#[$($vattr:tt)*])* $variant:ident = $value:expr, )*
        }
    ) => {
        native_enum! {
            $(#[doc = $doc])*
            pub enum $name: $repr {
                $( $(#[$($vattr)*])* $variant = $value, )*
            }
        }

        ::bitflags::bitflags! {
            impl $name: $repr {
                $( $(#[$($vattr)*])* const $variant = $value; )*
            }
        }
    };
}

/// Generate getter/setter pairs over a single backing integer.
///
/// Each line is `getter, setter: offset, width;`.  Reads mask and shift;
/// writes clear the field's bits and OR the truncated value in.
macro_rules! bitfield {
    (
        impl $name:ident($field:ident: $storage:ty) {
            $(
                $(#[doc = $doc:literal])*
                $get:ident, $set:ident: $offset:literal, $width:literal;
            )*
        }
    ) => {
        impl $name {
            $(
                $(#[doc = $doc])*
                #[inline]
                pub fn $get(&self) -> $storage {
                    $crate::bits::get(self.$field, $offset, $width)
                }

                #[inline]
                pub fn $set(&mut self, value: $storage) {
                    $crate::bits::set(&mut self.$field, $offset, $width, value)
                }
            )*
        }
    };
}
