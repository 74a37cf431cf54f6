use tracing::{debug, trace};

use super::error::CometError;
use super::field::Field;
use super::layout;
use super::reader::{CometReader, ParameterCursor};
use super::values;
use crate::CallerId;

/// A framed Comet message borrowed from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub message_type: u8,
    /// Declared body length (excludes type, length and checksum bytes).
    pub length: u8,
    pub body: &'a [u8],
    /// Carried through as received; never validated.
    pub checksum: u8,
}

/// One tag/length/value block of the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub tag: u8,
    pub value: &'a [u8],
}

/// Split raw bytes into a Caller ID frame.
///
/// The message type is checked as soon as it is read, so a buffer holding
/// only a foreign type byte reports the type rather than truncation. Bytes
/// past the checksum are ignored.
///
/// # Examples
/// ```
/// use comet_core::split_frame;
///
/// let frame = split_frame(&[0x80, 3, 0x11, 1, 0x01, 0xa1, 0xff]).unwrap();
/// assert_eq!(frame.length, 3);
/// assert_eq!(frame.body, &[0x11, 1, 0x01]);
/// assert_eq!(frame.checksum, 0xa1);
/// ```
pub fn split_frame(bytes: &[u8]) -> Result<Frame<'_>, CometError> {
    let reader = CometReader::new(bytes);

    let message_type = reader.read_message_type()?;
    if message_type != layout::CALLER_ID_MESSAGE_TYPE {
        return Err(CometError::UnsupportedMessageType {
            value: message_type,
        });
    }

    let length = reader.read_length()?;
    reader.require_len(layout::frame_len(length))?;
    let body = reader.read_slice(layout::BODY_OFFSET..layout::checksum_offset(length))?;
    let checksum = reader.read_u8(layout::checksum_offset(length))?;

    debug!(
        length,
        checksum,
        trailing = bytes.len() - layout::frame_len(length),
        "split caller id frame"
    );

    Ok(Frame {
        message_type,
        length,
        body,
        checksum,
    })
}

/// Walk the frame body into parameter blocks, in byte order.
pub fn extract_parameters<'a>(frame: &Frame<'a>) -> Result<Vec<Parameter<'a>>, CometError> {
    ParameterCursor::new(frame.body)
        .map(|block| {
            let (tag, value) = block?;
            trace!(tag, len = value.len(), "extracted parameter block");
            Ok(Parameter { tag, value })
        })
        .collect()
}

/// Decode a Comet Caller ID message.
///
/// Any framing, tag or value error aborts the whole decode; no partial
/// record is returned. A tag that repeats overwrites the earlier value.
///
/// # Examples
/// ```
/// use comet_core::{CallType, decode};
///
/// let record = decode(&[0x80, 3, 0x11, 1, 0x01, 0xa1]).unwrap();
/// assert_eq!(record.call_type, Some(CallType::VoiceCall));
/// assert!(record.date_time.is_none());
/// ```
pub fn decode(bytes: &[u8]) -> Result<CallerId, CometError> {
    let frame = split_frame(bytes)?;
    let parameters = extract_parameters(&frame)?;

    let mut record = CallerId::default();
    for parameter in parameters {
        let field = Field::from_tag(parameter.tag)?;
        let value = values::interpret(field, parameter.value)?;
        record.insert(value);
    }
    debug!(fields = record.len(), "decoded caller id message");
    Ok(record)
}
