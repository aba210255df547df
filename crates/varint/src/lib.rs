//! Strict LEB128-style varints.
//!
//! Wire format: 7 payload bits per byte, least-significant group first, bit 7 set on
//! every byte except the last. An encoding is at most [`MAX_ENCODED_BYTES`] bytes and
//! carries at most [`MAX_PAYLOAD_BITS`] bits, whatever the width of the host integer.
//!
//! Decoding is strict: values that do not fit the target width, encodings without a
//! terminal byte inside the byte budget, and redundant trailing zero groups are all
//! rejected.
//!
//! ```
//! let mut buf = [0u8; varint::MAX_ENCODED_BYTES];
//! let len = varint::encode(300u32, &mut buf).unwrap();
//! assert_eq!(&buf[..len], &[0xAC, 0x02]);
//! assert_eq!(varint::decode::<u32>(&buf[..len]), Ok((300, 2)));
//! ```
pub mod utils;
pub mod limits;

mod encode;
mod decode;
pub mod varint;

#[cfg(feature = "python")]
mod pyo3;

pub use utils::{
    DecodeError,
    EncodeError,
    numbers::VarUInt
};
pub use limits::{
    Limits,
    MAX_ENCODED_BYTES,
    MAX_PAYLOAD_BITS
};
pub use encode::{encode, encode_to_vec, encoded_len};
pub use decode::{decode, decode_all, Varints};
pub use varint::Varint;
