// ── DXGI and WIC types consumed by Direct2D ───────────────────────────────────
//
// Direct2D accepts these as parameters only.  They are declared here at
// pointer granularity so that signatures stay typed; none of their own
// methods are bound.

#![allow(non_snake_case, non_camel_case_types)]

native_enum! {
    /// Resource data formats (dxgiformat.h).  Only the formats Direct2D can
    /// target or load are listed.
    pub enum DXGI_FORMAT: i32 {
        DXGI_FORMAT_UNKNOWN = 0,
        DXGI_FORMAT_R32G32B32A32_FLOAT = 2,
        DXGI_FORMAT_R16G16B16A16_FLOAT = 10,
        DXGI_FORMAT_R16G16B16A16_UNORM = 11,
        DXGI_FORMAT_R10G10B10A2_UNORM = 24,
        DXGI_FORMAT_R8G8B8A8_UNORM = 28,
        DXGI_FORMAT_R8G8B8A8_UNORM_SRGB = 29,
        DXGI_FORMAT_A8_UNORM = 65,
        DXGI_FORMAT_B8G8R8A8_UNORM = 87,
        DXGI_FORMAT_B8G8R8X8_UNORM = 88,
        DXGI_FORMAT_B8G8R8A8_UNORM_SRGB = 91,
        DXGI_FORMAT_B8G8R8X8_UNORM_SRGB = 93,
        DXGI_FORMAT_FORCE_UINT = 0xffff_ffff_u32 as i32,
    }
}

// ── DXGI ──────────────────────────────────────────────────────────────────────

opaque_interface! {
    /// DXGI device backing a Direct3D device; input to `D2D1CreateDevice`.
    #[uuid(0x54ec77fa_1377_44e6_8c32_88fd5f44c84c)]
    interface IDXGIDevice;
}

opaque_interface! {
    /// DXGI surface; input to `D2D1CreateDeviceContext` and
    /// `CreateBitmapFromDxgiSurface`.
    #[uuid(0xcafcb56c_6ac3_4889_bf47_9e23bbd260ec)]
    interface IDXGISurface;
}

// ── WIC ───────────────────────────────────────────────────────────────────────

opaque_interface! {
    #[uuid(0x00000120_a8f2_4877_ba0a_fd2b6645fb94)]
    interface IWICBitmapSource;
}

opaque_interface! {
    #[uuid(0x3c613a02_34b2_44ea_9a7c_45aea9c6fd6d)]
    interface IWICColorContext;
}

opaque_interface! {
    #[uuid(0xec5ec8a9_c395_4314_9c77_54d7a935ff70)]
    interface IWICImagingFactory;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::com::{Interface, GUID};
    use std::mem::size_of;

    #[test]
    fn opaque_handles_are_one_pointer() {
        assert_eq!(size_of::<IDXGIDevice>(), size_of::<usize>());
        assert_eq!(size_of::<IWICImagingFactory>(), size_of::<usize>());
    }

    #[test]
    fn published_iids() {
        assert_eq!(
            IDXGISurface::IID,
            GUID::from_values(0xcafcb56c, 0x6ac3, 0x4889, [0xbf, 0x47, 0x9e, 0x23, 0xbb, 0xd2, 0x60, 0xec])
        );
        assert_eq!(
            IWICBitmapSource::IID,
            GUID::from_values(0x00000120, 0xa8f2, 0x4877, [0xba, 0x0a, 0xfd, 0x2b, 0x66, 0x45, 0xfb, 0x94])
        );
    }

    #[test]
    fn format_values() {
        assert_eq!(DXGI_FORMAT_B8G8R8A8_UNORM.0, 87);
        assert_eq!(DXGI_FORMAT_B8G8R8A8_UNORM.name(), Some("DXGI_FORMAT_B8G8R8A8_UNORM"));
        assert_eq!(DXGI_FORMAT(12345).name(), None);
    }
}
