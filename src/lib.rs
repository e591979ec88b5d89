// ── Safety policy ────────────────────────────────────────────────────────────
// This crate is an FFI layer, so unsafe code is expected, but it is confined:
//   • the generated forwarding methods (`macros.rs`) – one slot read + call
//   • `com::ptr`     – AddRef / Release / QueryInterface on owned handles
//   • `factory`      – calls into d2d1.dll / dwrite.dll
// Each unsafe block MUST carry a `// SAFETY:` comment.
#![deny(unsafe_op_in_unsafe_fn)]

//! ABI-exact bindings for the Direct2D 1.1/1.2 device and device-context
//! interfaces and the DirectWrite font-face and text-analysis interfaces.
//!
//! Every interface is a single vtable pointer; every method is an
//! `unsafe fn` that forwards to the native slot and returns its result
//! unchanged.  [`com::ComPtr`] and [`factory`] add reference-counted
//! ownership and `Result`-based errors on top.

#[macro_use]
mod macros;

pub mod abi;
pub mod bits;
pub mod com;
pub mod dcommon;
pub mod error;
pub mod foreign;

#[cfg(feature = "d2d1")]
pub mod d2d1;
#[cfg(feature = "dwrite")]
pub mod dwrite;
#[cfg(feature = "print")]
pub mod print;

#[cfg(all(windows, any(feature = "d2d1", feature = "dwrite")))]
pub mod factory;

pub use com::{ComPtr, Interface, Vtable};
pub use error::{Error, Result};
