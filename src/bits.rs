// ── Bit-field packing ─────────────────────────────────────────────────────────
//
// C bit-fields (`UINT8 isWhitespace : 1;`) have no Rust equivalent.  Structs
// that contain them keep a single private backing integer, and the accessors
// generated by `bitfield!` go through `get` / `set` below.
//
// Bits are allocated from the least-significant end, which is what MSVC does
// for every bit-field struct in the DirectWrite headers.

/// Integer types that can back a bit-field.
pub trait BitStorage: Copy {
    /// Width of the storage unit in bits.
    const BITS: u32;

    fn to_u32(self) -> u32;

    /// Truncating conversion back to the storage type.
    fn from_u32(value: u32) -> Self;
}

macro_rules! impl_bit_storage {
    ($($ty:ty),*) => {
        $(
            impl BitStorage for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn to_u32(self) -> u32 {
                    self as u32
                }

                #[inline]
                fn from_u32(value: u32) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_bit_storage!(u8, u16, u32);

/// Mask with the low `width` bits set.
#[inline]
pub const fn mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Read `width` bits starting at bit `offset`.
#[inline]
pub fn get<T: BitStorage>(storage: T, offset: u32, width: u32) -> T {
    debug_assert!(offset < T::BITS && offset + width <= T::BITS, "bit range exceeds storage");
    T::from_u32((storage.to_u32() >> offset) & mask(width))
}

/// Write `value` into `width` bits starting at bit `offset`.
///
/// Bits of `value` above `width` are dropped, exactly as a C assignment to a
/// bit-field member would drop them.  All other bits of `storage` keep their
/// current value.
#[inline]
pub fn set<T: BitStorage>(storage: &mut T, offset: u32, width: u32, value: T) {
    debug_assert!(offset < T::BITS && offset + width <= T::BITS, "bit range exceeds storage");
    let field = mask(width) << offset;
    let cleared = storage.to_u32() & !field;
    *storage = T::from_u32(cleared | ((value.to_u32() << offset) & field));
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_widths() {
        assert_eq!(mask(0), 0);
        assert_eq!(mask(1), 0b1);
        assert_eq!(mask(4), 0b1111);
        assert_eq!(mask(32), u32::MAX);
    }

    #[test]
    fn round_trip_every_value_of_a_nibble() {
        for value in 0..16u8 {
            let mut byte = 0u8;
            set(&mut byte, 2, 4, value);
            assert_eq!(get(byte, 2, 4), value);
        }
    }

    #[test]
    fn set_leaves_neighbours_untouched() {
        let mut word: u16 = 0xFFFF;
        set(&mut word, 4, 1, 0);
        assert_eq!(word, 0xFFEF);

        let mut word: u16 = 0;
        set(&mut word, 4, 1, 1);
        assert_eq!(word, 0x0010);
    }

    #[test]
    fn overwide_value_is_truncated() {
        let mut byte = 0u8;
        set(&mut byte, 0, 2, 0b111);
        assert_eq!(byte, 0b11);
        assert_eq!(get(byte, 2, 6), 0);
    }

    #[test]
    fn top_bits_of_storage() {
        let mut byte = 0u8;
        set(&mut byte, 6, 2, 0b10);
        assert_eq!(byte, 0b1000_0000);
        assert_eq!(get(byte, 6, 2), 0b10);

        let mut dword = 0u32;
        set(&mut dword, 0, 32, u32::MAX);
        assert_eq!(get(dword, 0, 32), u32::MAX);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "bit range exceeds storage")]
    fn offset_at_storage_width_is_rejected() {
        get(u32::MAX, 32, 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "bit range exceeds storage")]
    fn empty_field_past_the_end_is_rejected_on_write() {
        let mut dword = 0u32;
        set(&mut dword, 32, 0, 0);
    }
}
