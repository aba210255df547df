use itertools::iproduct;
use proptest::prelude::*;
use varint::{
    decode, decode_all, encode, encode_to_vec, encoded_len, DecodeError, EncodeError, Limits,
    Varints, MAX_ENCODED_BYTES,
};

/// Shortest possible encoding length of `v`.
fn minimal_len(v: u64) -> usize {
    let bits = 64 - v.leading_zeros() as usize;
    bits.max(1).div_ceil(7)
}

fn roundtrip<T: Limits>(v: T) -> usize {
    let mut buf = [0u8; MAX_ENCODED_BYTES];
    let len = encode(v, &mut buf).expect("encode failed");
    assert_eq!(decode::<T>(&buf[..len]), Ok((v, len)), "round-trip mismatch for {v}");
    len
}

#[test]
fn test_boundary_grid() {
    // powers of two and their neighbours, across every 7-bit group edge
    let edges = (0..63u32).flat_map(|b| {
        let p = 1u64 << b;
        [p - 1, p, p + 1]
    });
    for (v, offset) in iproduct!(edges, 0..3usize) {
        let mut buf = [0xAAu8; MAX_ENCODED_BYTES + 3];
        let len = encode(v, &mut buf[offset..]).expect("encode failed");
        assert_eq!(len, minimal_len(v), "length of {v}");
        assert_eq!(decode::<u64>(&buf[offset..]), Ok((v, len)));
    }
}

#[test]
fn test_narrow_widths_take_every_value() {
    for v in 0..=u8::MAX {
        roundtrip(v);
    }
    for v in 0..=u16::MAX {
        assert_eq!(roundtrip(v), minimal_len(v as u64));
    }
}

#[test]
fn test_every_truncation_is_incomplete() {
    let mut buf = [0u8; MAX_ENCODED_BYTES];
    for v in [128u64, 1 << 20, 1 << 40, (1 << 63) - 1] {
        let len = encode(v, &mut buf).unwrap();
        for cut in 0..len {
            assert_eq!(decode::<u64>(&buf[..cut]), Err(DecodeError::BufferTooSmall));
        }
    }
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            std::thread::spawn(move || {
                let mut buf = [0u8; MAX_ENCODED_BYTES];
                for v in (t..1 << 16).step_by(4) {
                    let v = v << 40;
                    let len = encode(v, &mut buf).unwrap();
                    assert_eq!(decode::<u64>(&buf[..len]), Ok((v, len)));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker panicked");
    }
}

proptest! {
    #[test]
    fn roundtrip_u64(v in 0u64..(1u64 << 63)) {
        let len = roundtrip(v);
        prop_assert_eq!(len, minimal_len(v));
        prop_assert_eq!(encoded_len(v), Ok(len));
    }

    #[test]
    fn roundtrip_u32(v in any::<u32>()) {
        let len = roundtrip(v);
        prop_assert!(len <= 5);
    }

    #[test]
    fn roundtrip_u128(v in 0u128..(1u128 << 63)) {
        roundtrip(v);
    }

    #[test]
    fn past_63_bits_always_overflows(v in (1u64 << 63)..=u64::MAX, size in 0usize..16) {
        let mut buf = vec![0u8; size];
        prop_assert_eq!(encode(v, &mut buf), Err(EncodeError::Overflow));
        prop_assert_eq!(encode(v as u128, &mut buf), Err(EncodeError::Overflow));
    }

    #[test]
    fn padded_zero_group_is_rejected(v in 0u64..(1u64 << 56)) {
        let mut buf = Vec::new();
        encode_to_vec(v, &mut buf).unwrap();
        let last = buf.len() - 1;
        buf[last] |= 0x80;
        buf.push(0x00);
        prop_assert_eq!(decode::<u64>(&buf), Err(DecodeError::NotMinimal));
    }

    #[test]
    fn errors_are_stable(bytes in prop::collection::vec(any::<u8>(), 0..12)) {
        let first = decode::<u32>(&bytes);
        prop_assert_eq!(decode::<u32>(&bytes), first);
        let first = decode::<u64>(&bytes);
        prop_assert_eq!(decode::<u64>(&bytes), first);
    }

    #[test]
    fn decoded_values_fit_the_bit_limit(bytes in prop::collection::vec(any::<u8>(), 0..12)) {
        if let Ok((v, used)) = decode::<u64>(&bytes) {
            prop_assert!(v < 1 << 63);
            prop_assert!(used <= MAX_ENCODED_BYTES);
            prop_assert_eq!(used, minimal_len(v));
        }
        if let Ok((v, _)) = decode::<u8>(&bytes) {
            let (wide, _) = decode::<u64>(&bytes).unwrap();
            prop_assert_eq!(v as u64, wide);
        }
    }

    #[test]
    fn sequences_roundtrip(values in prop::collection::vec(0u64..(1u64 << 63), 0..64)) {
        let mut buf = Vec::new();
        for &v in &values {
            encode_to_vec(v, &mut buf).unwrap();
        }
        prop_assert_eq!(decode_all::<u64>(&buf), Ok(values.clone()));

        let mut it = Varints::<u64>::new(&buf);
        prop_assert_eq!(it.by_ref().count(), values.len());
        prop_assert_eq!(it.position(), buf.len());
        prop_assert!(it.remainder().is_empty());
    }
}
