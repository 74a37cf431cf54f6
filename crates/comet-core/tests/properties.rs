use comet_core::{CometError, ErrorKind, decode, split_frame};
use proptest::prelude::*;

const KNOWN_TAGS: [u8; 5] = [0x01, 0x02, 0x04, 0x07, 0x11];

fn frame(body: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0x80, body.len() as u8];
    bytes.extend_from_slice(body);
    bytes.push(0x00);
    bytes
}

fn text_block(tag: u8, text: &[u8]) -> Vec<u8> {
    let mut block = vec![tag, text.len() as u8];
    block.extend_from_slice(text);
    block
}

proptest! {
    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        let _ = decode(&bytes);
    }

    #[test]
    fn decode_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(decode(&bytes), decode(&bytes));
    }

    #[test]
    fn foreign_message_type_rejected(
        message_type in any::<u8>().prop_filter("not caller id", |b| *b != 0x80),
        rest in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut bytes = vec![message_type];
        bytes.extend_from_slice(&rest);
        let err = decode(&bytes).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::UnsupportedMessageType);
        let hex = format!("{:#x}", message_type);
        prop_assert!(err.to_string().contains(&hex));
    }

    #[test]
    fn unknown_tag_rejected(
        tag in any::<u8>().prop_filter("unknown tag", |t| !KNOWN_TAGS.contains(t)),
        value in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let bytes = frame(&text_block(tag, &value));
        prop_assert_eq!(
            decode(&bytes),
            Err(CometError::UnrecognizedParameterTag { tag })
        );
    }

    #[test]
    fn trailing_bytes_ignored(
        number in "[0-9]{0,20}",
        name in "[A-Z ]{0,20}",
        trailing in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut body = text_block(0x02, number.as_bytes());
        body.extend(text_block(0x07, name.as_bytes()));
        let bytes = frame(&body);
        let mut with_trailing = bytes.clone();
        with_trailing.extend_from_slice(&trailing);

        let record = decode(&bytes).unwrap();
        prop_assert_eq!(decode(&with_trailing).unwrap(), record.clone());
        prop_assert_eq!(record.calling_line_number.as_deref(), Some(number.as_str()));
        prop_assert_eq!(record.calling_line_name.as_deref(), Some(name.as_str()));
    }

    #[test]
    fn truncated_frame_rejected(
        body in prop::collection::vec(any::<u8>(), 0..64),
        cut in 1usize..4,
    ) {
        let bytes = frame(&body);
        let cut = cut.min(bytes.len() - 2);
        let truncated = &bytes[..bytes.len() - cut];
        prop_assert_eq!(
            split_frame(truncated).unwrap_err(),
            CometError::TooShort { needed: bytes.len(), actual: truncated.len() }
        );
    }
}
