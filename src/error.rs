// ── Central error type ────────────────────────────────────────────────────────
//
// The raw bindings return native HRESULTs unchanged and never construct an
// `Error`.  Translation happens only where a status code leaves the binding
// layer: `ComPtr` (reference-counted handles) and the `factory` entry points,
// both of which funnel through `check`.

use crate::com::HRESULT;

/// Every error that d2dwrite can produce.
#[derive(Debug)]
pub enum Error {
    /// A native call returned a failure HRESULT.
    Native {
        /// The name of the failing function or method, for display purposes.
        function: &'static str,
        /// The HRESULT exactly as the native code returned it.
        code: HRESULT,
    },

    /// A native call reported success but left its interface out-parameter null.
    NullInterface {
        function: &'static str,
    },

    /// Serializing the layout catalogue failed.
    Json(serde_json::Error),
}

impl Error {
    /// The native HRESULT behind this error, if there is one.
    pub fn code(&self) -> Option<HRESULT> {
        match self {
            Self::Native { code, .. } => Some(*code),
            Self::NullInterface { .. } | Self::Json(_) => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native { function, code } => {
                // HRESULT.0 is i32; show the bit pattern the SDK documents.
                write!(f, "{function} failed (HRESULT {:#010x})", code.0 as u32)
            }
            Self::NullInterface { function } => {
                write!(f, "{function} succeeded but returned a null interface")
            }
            Self::Json(e) => write!(f, "layout catalogue serialization failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Native { .. } | Self::NullInterface { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Map a native status code onto `Result`.
///
/// Success codes (including `S_FALSE`) pass; anything with the severity bit
/// set becomes `Error::Native` carrying the untouched HRESULT.
pub fn check(function: &'static str, code: HRESULT) -> Result<()> {
    if code.0 >= 0 {
        return Ok(());
    }
    log::debug!("{function} failed with HRESULT {:#010x}", code.0 as u32);
    Err(Error::Native { function, code })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::com::{E_NOINTERFACE, S_FALSE, S_OK};

    #[test]
    fn success_codes_pass() {
        assert!(check("S_OK", S_OK).is_ok());
        assert!(check("S_FALSE", S_FALSE).is_ok());
    }

    #[test]
    fn failure_keeps_the_native_code() {
        let err = check("QueryInterface", E_NOINTERFACE).unwrap_err();
        assert_eq!(err.code(), Some(E_NOINTERFACE));
        assert_eq!(
            err.to_string(),
            "QueryInterface failed (HRESULT 0x80004002)"
        );
    }

    #[test]
    fn null_interface_display() {
        let err = Error::NullInterface { function: "D2D1CreateDevice" };
        assert_eq!(err.code(), None);
        assert_eq!(
            err.to_string(),
            "D2D1CreateDevice succeeded but returned a null interface"
        );
    }
}
