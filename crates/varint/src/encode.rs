use crate::debug_log;
use crate::limits::{Limits, MAX_PAYLOAD_BITS};
use crate::utils::{numbers::VarUInt, EncodeError};

/// Reject values the format cannot carry and return the payload as `u64`.
#[inline(always)]
fn payload<T: VarUInt>(value: T) -> Result<u64, EncodeError> {
    let wide = value.to_u128();
    if T::BITS > MAX_PAYLOAD_BITS && wide >= 1u128 << MAX_PAYLOAD_BITS {
        debug_log!("encode: {} is outside the {}-bit range", value, MAX_PAYLOAD_BITS);
        return Err(EncodeError::Overflow);
    }
    Ok(wide as u64)
}

/// Number of 7-bit groups in `v`, at least one.
#[inline(always)]
fn groups(mut v: u64) -> usize {
    let mut needed = 1;
    while v >= 0x80 {
        v >>= 7;
        needed += 1;
    }
    needed
}

/// Payload and encoded length of `value`, or `Overflow` if it cannot be carried.
#[inline(always)]
fn measure<T: Limits>(value: T) -> Result<(u64, usize), EncodeError> {
    let v = payload(value)?;
    let needed = groups(v);
    if needed > T::BYTE_BUDGET {
        debug_log!("encode: {} needs {} bytes, budget is {}", value, needed, T::BYTE_BUDGET);
        return Err(EncodeError::Overflow);
    }
    Ok((v, needed))
}

/// Exact number of bytes [`encode`] writes for `value`.
pub fn encoded_len<T: Limits>(value: T) -> Result<usize, EncodeError> {
    measure(value).map(|(_, needed)| needed)
}

/// Encode `value` into the front of `out`, returning the number of bytes written.
///
/// Range errors take precedence over buffer size: a value the format can never carry
/// is reported as [`EncodeError::Overflow`] even when `out` is large. On error nothing
/// is written.
pub fn encode<T: Limits>(value: T, out: &mut [u8]) -> Result<usize, EncodeError> {
    let (mut v, needed) = measure(value)?;
    if out.len() < needed {
        debug_log!("encode: {} needs {} bytes, buffer has {}", value, needed, out.len());
        return Err(EncodeError::BufferTooSmall);
    }

    for (i, slot) in out[..needed].iter_mut().enumerate() {
        let byte = (v & 0x7F) as u8;
        v >>= 7;
        *slot = if i + 1 < needed { byte | 0x80 } else { byte };
    }
    Ok(needed)
}

/// Append the encoding of `value` to `out`. `out` is untouched on error.
pub fn encode_to_vec<T: Limits>(value: T, out: &mut Vec<u8>) -> Result<usize, EncodeError> {
    let start = out.len();
    let needed = encoded_len(value)?;
    out.resize(start + needed, 0);
    encode(value, &mut out[start..])
}
