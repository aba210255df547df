pub mod numbers;

#[macro_export]
#[cfg(feature = "debug")]
macro_rules! debug_log {
    ($($args:tt)*) => {{
        println!("{}", format_args!($($args)*));
    }};
}

#[macro_export]
#[cfg(not(feature = "debug"))]
macro_rules! debug_log {
    ($($args:tt)*) => {{}};
}

/// Reasons [`encode`](crate::encode) can refuse a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::thiserror::Error)]
pub enum EncodeError {
    /// The output buffer is shorter than the encoding; retry with a larger one.
    #[error("output buffer too small for varint")]
    BufferTooSmall,
    /// The value does not fit in 63 bits or in the byte budget of its width.
    #[error("value exceeds the varint range")]
    Overflow,
}

/// Reasons [`decode`](crate::decode) can reject input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::thiserror::Error)]
pub enum DecodeError {
    /// Input ended before a terminal byte; more bytes may complete the value.
    #[error("input ends before the varint terminates")]
    BufferTooSmall,
    /// The encoded payload does not fit in the target width or in 63 bits.
    #[error("varint exceeds the representable range")]
    Overflow,
    /// The encoding carries a redundant trailing zero group.
    #[error("varint is not minimally encoded")]
    NotMinimal,
}

impl DecodeError {
    /// Whether the same call could succeed once more input is available.
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, DecodeError::BufferTooSmall)
    }
}
