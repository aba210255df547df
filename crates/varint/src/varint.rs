//! varint.rs  –  typed wrapper, no allocation
use crate::limits::{Limits, MAX_ENCODED_BYTES};
use crate::utils::{DecodeError, EncodeError};
use crate::{decode, encode, encoded_len};

/// A value that travels as a varint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Varint<T>(pub T);

impl<T: Limits> Varint<T> {
    /// Encoded length in bytes.
    #[inline(always)]
    pub fn encoded_len(self) -> Result<usize, EncodeError> {
        encoded_len(self.0)
    }

    /// Encode into a 9-byte buffer; returns (buffer, length_used).
    #[inline]
    pub fn encode(self) -> Result<([u8; MAX_ENCODED_BYTES], usize), EncodeError> {
        let mut buf = [0u8; MAX_ENCODED_BYTES];
        let len = encode(self.0, &mut buf)?;
        Ok((buf, len))
    }

    /// Decode from the front of `bytes`, returning the value and bytes consumed.
    pub fn decode(bytes: &[u8]) -> Result<(Self, usize), DecodeError> {
        let (value, used) = decode::<T>(bytes)?;
        Ok((Varint(value), used))
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Limits> From<T> for Varint<T> {
    fn from(v: T) -> Self {
        Self(v)
    }
}

macro_rules! impl_from_varint {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<Varint<$ty>> for $ty {
                fn from(v: Varint<$ty>) -> Self {
                    v.0
                }
            }
        )*
    };
}

impl_from_varint!(u8, u16, u32, u64, u128, usize);
