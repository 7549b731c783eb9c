use super::*;

/// Decode a whole slice, panicking on any error.
fn decode_all(bytes: &[u8]) -> Vec<u32> {
    let mut dec = Utf8Decoder::new();
    let mut out = Vec::new();
    for &b in bytes {
        if let Some(cp) = dec.feed(b).unwrap() {
            out.push(cp);
        }
    }
    dec.finish().unwrap();
    out
}

#[test]
fn test_ascii_passthrough() {
    assert_eq!(decode_all(b"abc 123\n"), vec![97, 98, 99, 32, 49, 50, 51, 10]);
}

#[test]
fn test_two_byte_sequence() {
    // é = U+00E9 = 0xC3 0xA9
    assert_eq!(decode_all("é".as_bytes()), vec![0xE9]);
}

#[test]
fn test_three_byte_sequence() {
    // 世 = U+4E16 = 0xE4 0xB8 0x96
    assert_eq!(decode_all("世".as_bytes()), vec![0x4E16]);
}

#[test]
fn test_four_byte_sequence() {
    // 😀 = U+1F600
    assert_eq!(decode_all("😀".as_bytes()), vec![0x1F600]);
}

#[test]
fn test_mixed_text() {
    let cps = decode_all("çà y está".as_bytes());
    assert_eq!(
        cps,
        vec![0xE7, 0xE0, 0x20, 0x79, 0x20, 0x65, 0x73, 0x74, 0xE1]
    );
}

#[test]
fn test_feed_returns_none_mid_sequence() {
    let mut dec = Utf8Decoder::new();
    assert_eq!(dec.feed(0xC3).unwrap(), None);
    assert!(!dec.is_idle());
    assert_eq!(dec.feed(0xA9).unwrap(), Some(0xE9));
    assert!(dec.is_idle());
}

#[test]
fn test_state_survives_arbitrary_split() {
    // Feed the same bytes in two halves split mid-character; the decoder
    // carries the open sequence across the boundary.
    let bytes = "aé".as_bytes(); // 0x61 0xC3 0xA9
    let mut dec = Utf8Decoder::new();
    let mut out = Vec::new();
    for &b in &bytes[..2] {
        if let Some(cp) = dec.feed(b).unwrap() {
            out.push(cp);
        }
    }
    for &b in &bytes[2..] {
        if let Some(cp) = dec.feed(b).unwrap() {
            out.push(cp);
        }
    }
    dec.finish().unwrap();
    assert_eq!(out, vec![0x61, 0xE9]);
}

#[test]
fn test_truncated_sequence_detected_at_finish() {
    let mut dec = Utf8Decoder::new();
    assert_eq!(dec.feed(0xE4).unwrap(), None);
    assert_eq!(dec.feed(0xB8).unwrap(), None);
    assert_eq!(dec.finish(), Err(DecodeError::Truncated { missing: 1 }));
}

#[test]
fn test_bare_continuation_byte_rejected() {
    let mut dec = Utf8Decoder::new();
    assert_eq!(
        dec.feed(0xA9),
        Err(DecodeError::InvalidLead {
            byte: 0xA9,
            offset: 0
        })
    );
}

#[test]
fn test_invalid_lead_f8() {
    let mut dec = Utf8Decoder::new();
    assert!(matches!(
        dec.feed(0xF8),
        Err(DecodeError::InvalidLead { byte: 0xF8, .. })
    ));
}

#[test]
fn test_non_continuation_inside_sequence() {
    let mut dec = Utf8Decoder::new();
    dec.feed(0xC3).unwrap();
    assert_eq!(
        dec.feed(b'x'),
        Err(DecodeError::InvalidContinuation {
            byte: b'x',
            offset: 1
        })
    );
}

#[test]
fn test_overlong_encoding_rejected() {
    // 0xC0 0xAF is an overlong encoding of '/'
    let mut dec = Utf8Decoder::new();
    dec.feed(0xC0).unwrap();
    assert_eq!(dec.feed(0xAF), Err(DecodeError::Overlong { value: 0x2F }));
}

#[test]
fn test_surrogate_rejected() {
    // 0xED 0xA0 0x80 encodes U+D800
    let mut dec = Utf8Decoder::new();
    dec.feed(0xED).unwrap();
    dec.feed(0xA0).unwrap();
    assert_eq!(dec.feed(0x80), Err(DecodeError::InvalidScalar { value: 0xD800 }));
}

#[test]
fn test_error_offset_counts_fed_bytes() {
    let mut dec = Utf8Decoder::new();
    for &b in b"abcd" {
        dec.feed(b).unwrap();
    }
    assert_eq!(
        dec.feed(0xFF),
        Err(DecodeError::InvalidLead {
            byte: 0xFF,
            offset: 4
        })
    );
}

#[test]
fn test_full_latin1_round_trip() {
    // Every Latin-1 code point encodes to <= 2 bytes and decodes back
    for cp in 0u32..=0xFF {
        let ch = char::from_u32(cp).unwrap();
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        assert_eq!(decode_all(encoded.as_bytes()), vec![cp]);
    }
}
