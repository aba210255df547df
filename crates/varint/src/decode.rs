use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::debug_log;
use crate::limits::{chunk_fits, Limits};
use crate::utils::DecodeError;

/// Decode the varint at the front of `input`, returning the value and the number of
/// bytes consumed.
///
/// Bytes after the terminal byte are ignored, so a caller walking a larger buffer
/// advances its cursor by the returned count.
pub fn decode<T: Limits>(input: &[u8]) -> Result<(T, usize), DecodeError> {
    let limit = T::BIT_LIMIT;
    let mut value = 0u64;
    let mut shift = 0u32;

    for (i, &byte) in input.iter().take(T::BYTE_BUDGET).enumerate() {
        let chunk = byte & 0x7F;

        match chunk_fits(chunk, shift, limit) {
            Some(true) => (),
            Some(false) => {
                debug_log!("decode: group {} ({:#04x}) exceeds {} bits", i, byte, limit);
                return Err(DecodeError::Overflow);
            }
            None => {
                debug_log!("decode: shift {} reached the {}-bit limit", shift, limit);
                return Err(DecodeError::Overflow);
            }
        }

        value |= (chunk as u64) << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            if i > 0 && byte == 0x00 {
                debug_log!("decode: redundant zero group at byte {}", i);
                return Err(DecodeError::NotMinimal);
            }
            return Ok((T::from_payload(value), i + 1));
        }
    }

    if input.len() < T::BYTE_BUDGET {
        debug_log!("decode: {} bytes without a terminal byte", input.len());
        return Err(DecodeError::BufferTooSmall);
    }
    debug_log!("decode: no terminal byte within {} bytes", T::BYTE_BUDGET);
    Err(DecodeError::Overflow)
}

/// Iterator over back-to-back varints in one slice.
///
/// Stops after the first error; [`remainder`](Varints::remainder) then starts at the
/// varint that failed.
#[derive(Debug, Clone)]
pub struct Varints<'a, T> {
    input: &'a [u8],
    pos: usize,
    failed: bool,
    _ty: PhantomData<T>,
}

impl<'a, T: Limits> Varints<'a, T> {
    pub fn new(input: &'a [u8]) -> Self {
        Varints {
            input,
            pos: 0,
            failed: false,
            _ty: PhantomData,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remainder(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }
}

impl<T: Limits> Iterator for Varints<'_, T> {
    type Item = Result<T, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }
        match decode::<T>(&self.input[self.pos..]) {
            Ok((value, used)) => {
                self.pos += used;
                Some(Ok(value))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let left = self.input.len() - self.pos;
        (usize::from(left > 0), Some(left))
    }
}

impl<T: Limits> FusedIterator for Varints<'_, T> {}

/// Decode every varint in `input`. The whole slice must be consumed.
pub fn decode_all<T: Limits>(input: &[u8]) -> Result<Vec<T>, DecodeError> {
    Varints::new(input).collect()
}
