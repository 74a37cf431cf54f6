//! Comet core library for decoding analog Caller ID messages.
//!
//! A message flows strictly forward through four pure steps: the frame is
//! split into type, length, body and checksum; the body is walked as
//! tag/length/value parameter blocks; each tag resolves to a named field;
//! each field's raw bytes are interpreted into a typed value. Decoding is
//! byte-oriented, synchronous and side-effect free; obtaining the bytes is
//! the caller's business.
//!
//! Invariants:
//! - Only message type `0x80` (Caller ID) is accepted.
//! - Bytes after the checksum are never read.
//! - Any framing, tag or value error fails the whole decode.
//!
//! # Examples
//! ```
//! use comet_core::{CallType, decode};
//!
//! let mut bytes = vec![0x80, 15, 0x11, 1, 0x01, 0x02, 10];
//! bytes.extend_from_slice(b"1234567890");
//! bytes.push(0x00);
//!
//! let record = decode(&bytes)?;
//! assert_eq!(record.call_type, Some(CallType::VoiceCall));
//! assert_eq!(record.calling_line_number.as_deref(), Some("1234567890"));
//! # Ok::<(), comet_core::CometError>(())
//! ```

use serde::{Deserialize, Serialize};

mod protocols;

use protocols::comet::layout;

pub use protocols::comet::error::{CometError, ErrorKind};
pub use protocols::comet::field::Field;
pub use protocols::comet::parser::{Frame, Parameter};
pub use protocols::comet::values::FieldValue;
pub use protocols::comet::{decode, extract_parameters, split_frame};

/// Decoded Caller ID record.
///
/// A field is present only when its tag occurred in the message; absent
/// fields are omitted from serialized output rather than written as null.
///
/// # Examples
/// ```
/// use comet_core::{CallType, CallerId, FieldValue};
///
/// let mut record = CallerId::default();
/// assert!(record.is_empty());
/// record.insert(FieldValue::CallType(CallType::MessageWaiting));
/// assert_eq!(record.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerId {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calling_line_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_for_absence_of_number: Option<AbsenceReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calling_line_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_type: Option<CallType>,
}

impl CallerId {
    /// Store a value in its field, replacing any earlier value.
    pub fn insert(&mut self, value: FieldValue) {
        match value {
            FieldValue::DateTime(v) => self.date_time = Some(v),
            FieldValue::CallingLineNumber(v) => self.calling_line_number = Some(v),
            FieldValue::ReasonForAbsenceOfNumber(v) => self.reason_for_absence_of_number = Some(v),
            FieldValue::CallingLineName(v) => self.calling_line_name = Some(v),
            FieldValue::CallType(v) => self.call_type = Some(v),
        }
    }

    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::DateTime => self.date_time.is_some(),
            Field::CallingLineNumber => self.calling_line_number.is_some(),
            Field::ReasonForAbsenceOfNumber => self.reason_for_absence_of_number.is_some(),
            Field::CallingLineName => self.calling_line_name.is_some(),
            Field::CallType => self.call_type.is_some(),
        }
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.contains(**f)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Date and time of the call, as two-character digit strings.
///
/// No calendar validation is applied; leading zeros are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTime {
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minutes: String,
}

/// Why the calling line number is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AbsenceReason {
    Withheld,
    Unavailable,
}

impl AbsenceReason {
    /// # Examples
    /// ```
    /// use comet_core::AbsenceReason;
    ///
    /// assert_eq!(AbsenceReason::from_code(0x50).unwrap(), AbsenceReason::Withheld);
    /// assert!(AbsenceReason::from_code(0x00).is_err());
    /// ```
    pub fn from_code(code: u8) -> Result<Self, CometError> {
        match code {
            layout::ABSENCE_WITHHELD => Ok(AbsenceReason::Withheld),
            layout::ABSENCE_UNAVAILABLE => Ok(AbsenceReason::Unavailable),
            value => Err(CometError::UnrecognizedAbsenceReason { value }),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            AbsenceReason::Withheld => layout::ABSENCE_WITHHELD,
            AbsenceReason::Unavailable => layout::ABSENCE_UNAVAILABLE,
        }
    }
}

/// Kind of call being signalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallType {
    VoiceCall,
    RingBackWhenFree,
    MessageWaiting,
}

impl CallType {
    pub fn from_code(code: u8) -> Result<Self, CometError> {
        match code {
            layout::CALL_TYPE_VOICE => Ok(CallType::VoiceCall),
            layout::CALL_TYPE_RING_BACK_WHEN_FREE => Ok(CallType::RingBackWhenFree),
            layout::CALL_TYPE_MESSAGE_WAITING => Ok(CallType::MessageWaiting),
            value => Err(CometError::UnrecognizedCallType { value }),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            CallType::VoiceCall => layout::CALL_TYPE_VOICE,
            CallType::RingBackWhenFree => layout::CALL_TYPE_RING_BACK_WHEN_FREE,
            CallType::MessageWaiting => layout::CALL_TYPE_MESSAGE_WAITING,
        }
    }
}
