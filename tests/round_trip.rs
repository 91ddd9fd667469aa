//! Round-trip tests
//!
//! Decodes encoder output back into kind, address and payload, and re-derives
//! the checksum from the decoded bytes.

use proptest::prelude::*;
use srec_encoder::{encode, encode_chunks};
use srec_spec::{checksum, select, AddressWidth, EncoderConfig, RecordKind};

#[derive(Debug, PartialEq, Eq)]
struct Decoded {
    kind: RecordKind,
    address: u32,
    payload: Vec<u8>,
}

fn hex_byte(text: &str) -> u8 {
    assert!(
        text.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
        "lowercase or invalid hex: {}",
        text
    );
    u8::from_str_radix(text, 16).expect("invalid hex")
}

/// Reverse of the line encoder; panics on anything malformed
fn decode(line: &str) -> Decoded {
    let line = line.strip_suffix('\n').expect("missing newline");
    assert_eq!(line.len() % 2, 0);

    let bytes: Vec<u8> = (2..line.len())
        .step_by(2)
        .map(|i| hex_byte(&line[i..i + 2]))
        .collect();
    let (body, cs) = bytes.split_at(bytes.len() - 1);
    assert_eq!(cs[0], checksum(body), "checksum mismatch in {}", line);
    assert_eq!(body[0] as usize, body.len(), "length field mismatch in {}", line);

    let kind = match &line[..2] {
        "S0" => RecordKind::Header,
        "S1" => RecordKind::Data16,
        "S2" => RecordKind::Data24,
        "S3" => RecordKind::Data32,
        "S9" => RecordKind::End,
        tag => panic!("unexpected tag {}", tag),
    };
    let width = match kind {
        RecordKind::Header | RecordKind::Data16 => AddressWidth::Two,
        RecordKind::Data24 => AddressWidth::Three,
        RecordKind::Data32 => AddressWidth::Four,
        // S9 carries no width of its own; infer it from the length field
        RecordKind::End => AddressWidth::try_from(body[0] - 1).expect("bad S9 length"),
    };

    let addr_bytes = &body[1..1 + width.bytes()];
    let address = addr_bytes.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32);

    Decoded {
        kind,
        address,
        payload: body[1 + width.bytes()..].to_vec(),
    }
}

#[test]
fn test_decode_reference_lines() {
    assert_eq!(
        decode("S9030000FC\n"),
        Decoded {
            kind: RecordKind::End,
            address: 0,
            payload: vec![]
        }
    );
    assert_eq!(decode("S008000048454C4C4F83\n").payload, b"HELLO".to_vec());
}

#[test]
fn test_stream_reassembles_input() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i * 7 + 3) as u8).collect();
    let start = 0xFF_FE00;
    let lines = encode_chunks(data.chunks(16), start, Some("image"), EncoderConfig::default())
        .unwrap();

    let header = decode(&lines[0]);
    assert_eq!(header.kind, RecordKind::Header);
    assert_eq!(header.payload, b"image".to_vec());

    let mut rebuilt = Vec::new();
    let mut expected_address = start;
    for line in &lines[1..lines.len() - 1] {
        let record = decode(line);
        assert_eq!(record.address, expected_address);
        assert_eq!(record.kind, select(record.address));
        expected_address += record.payload.len() as u32;
        rebuilt.extend(record.payload);
    }
    assert_eq!(rebuilt, data);

    let end = decode(lines.last().unwrap());
    assert_eq!(end.kind, RecordKind::End);
    assert_eq!(end.address, start);
}

proptest! {
    #[test]
    fn test_data_round_trip(
        address in any::<u32>(),
        payload in proptest::collection::vec(any::<u8>(), 0..=32)
    ) {
        let kind = select(address);
        let line = encode(kind, address, &payload).unwrap();
        prop_assert_eq!(decode(&line), Decoded { kind, address, payload });
    }

    #[test]
    fn test_end_round_trip(address in any::<u32>()) {
        let line = encode(RecordKind::End, address, &[]).unwrap();
        prop_assert_eq!(
            decode(&line),
            Decoded { kind: RecordKind::End, address, payload: vec![] }
        );
    }

    #[test]
    fn test_header_round_trip(text in "[ -~]{1,31}") {
        let line = encode(RecordKind::Header, 0, text.as_bytes()).unwrap();
        let decoded = decode(&line);
        prop_assert_eq!(decoded.kind, RecordKind::Header);
        prop_assert_eq!(decoded.address, 0);
        prop_assert_eq!(decoded.payload, text.into_bytes());
    }

    #[test]
    fn test_stream_round_trip(
        start in 0u32..0xFFFF_0000,
        data in proptest::collection::vec(any::<u8>(), 0..200)
    ) {
        let lines = encode_chunks(data.chunks(16), start, None, EncoderConfig::default()).unwrap();
        prop_assert_eq!(lines.len(), data.len().div_ceil(16) + 1);

        let rebuilt: Vec<u8> = lines[..lines.len() - 1]
            .iter()
            .flat_map(|line| decode(line).payload)
            .collect();
        prop_assert_eq!(rebuilt, data);
        prop_assert_eq!(decode(lines.last().unwrap()).address, start);
    }
}
