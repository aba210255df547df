//! Byte budget and bit limit shared by the encoder and decoder.
//!
//! The wire format caps every value at [`MAX_ENCODED_BYTES`] bytes and
//! [`MAX_PAYLOAD_BITS`] payload bits, whatever the nominal width of the host type.
//! Types of 57 bits and wider therefore never use their top bits.

use crate::utils::numbers::VarUInt;

/// Hard ceiling on the length of any encoding.
pub const MAX_ENCODED_BYTES: usize = 9;

/// Effective value range of the format.
pub const MAX_PAYLOAD_BITS: u32 = 63;

/// Groups of 7 bits needed for `digits` bits, before the format ceiling applies.
#[inline(always)]
pub const fn max_encoded_size(digits: u32) -> usize {
    (digits as usize + 6) / 7
}

/// Maximum encoded length for a `digits`-wide integer.
#[inline(always)]
pub const fn byte_budget(digits: u32) -> usize {
    let size = max_encoded_size(digits);
    if size < MAX_ENCODED_BYTES {
        size
    } else {
        MAX_ENCODED_BYTES
    }
}

/// Number of payload bits a `digits`-wide integer can carry on the wire.
#[inline(always)]
pub const fn bit_limit(digits: u32) -> u32 {
    if digits < MAX_PAYLOAD_BITS {
        digits
    } else {
        MAX_PAYLOAD_BITS
    }
}

/// Whether `chunk` fits in the payload bits left after `shift` bits were consumed.
///
/// `None` when no bits are left at all, `Some(false)` when the group carries bits above
/// the limit.
#[inline(always)]
pub(crate) const fn chunk_fits(chunk: u8, shift: u32, limit: u32) -> Option<bool> {
    if shift >= limit {
        return None;
    }
    let remaining = limit - shift;
    Some(remaining >= 7 || (chunk as u32) < (1 << remaining))
}

/// Width-generic views of the functions above.
pub trait Limits: VarUInt {
    const MAX_ENCODED_SIZE: usize = max_encoded_size(Self::BITS);
    const BYTE_BUDGET: usize = byte_budget(Self::BITS);
    const BIT_LIMIT: u32 = bit_limit(Self::BITS);
}

impl<T: VarUInt> Limits for T {}
