use core::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer types the codec can carry.
///
/// The codec never computes on `Self` directly: values are widened to `u128` for the
/// effective-range check and the payload is accumulated in a `u64`, which always holds
/// the at most 63 representable bits.
pub trait VarUInt: sealed::Sealed + Copy + Default + PartialEq + Debug + Display {
    /// Nominal width of the type in bits.
    const BITS: u32;

    /// Lossless widening to `u128`.
    fn to_u128(self) -> u128;

    /// Narrow a decoded payload. Callers guarantee `v < 2^BITS`.
    fn from_payload(v: u64) -> Self;
}

macro_rules! impl_var_uint {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl VarUInt for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline(always)]
                fn from_payload(v: u64) -> Self {
                    v as $ty
                }
            }
        )*
    };
}

impl_var_uint!(u8, u16, u32, u64, u128, usize);
