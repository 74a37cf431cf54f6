use thiserror::Error;

/// Errors returned by Comet message decoding.
///
/// Byte values are rendered as lowercase hexadecimal with a `0x` prefix and
/// no zero padding (`0x99`, `0x4f`, `0x1`).
///
/// # Examples
/// ```
/// use comet_core::{CometError, ErrorKind};
///
/// let err = CometError::UnsupportedMessageType { value: 0x99 };
/// assert!(err.to_string().contains("0x99"));
/// assert_eq!(err.kind(), ErrorKind::UnsupportedMessageType);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CometError {
    #[error("message too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error(
        "received message type '{value:#x}', only message type '0x80' (Caller ID) is supported"
    )]
    UnsupportedMessageType { value: u8 },
    #[error("truncated parameter header at body offset {offset} (body length {length})")]
    TruncatedParameterHeader { offset: usize, length: usize },
    #[error(
        "parameter type '{tag:#x}' overruns message body: need {needed} bytes, {available} available"
    )]
    ParameterOverrun {
        tag: u8,
        needed: usize,
        available: usize,
    },
    #[error("parameter type '{tag:#x}' not recognised")]
    UnrecognizedParameterTag { tag: u8 },
    #[error("invalid date/time length: expected 8 bytes, got {length}")]
    InvalidDateTime { length: usize },
    #[error("invalid date/time digit '{value:#x}' at offset {offset}")]
    NonDigitDateTime { offset: usize, value: u8 },
    #[error("empty value for {field}")]
    EmptyValue { field: &'static str },
    #[error("reason for absence of number '{value:#x}' not recognised")]
    UnrecognizedAbsenceReason { value: u8 },
    #[error("call type '{value:#x}' not recognised")]
    UnrecognizedCallType { value: u8 },
}

/// Coarse error categories callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedMessageType,
    UnrecognizedParameterTag,
    UnrecognizedEnumValue,
    /// Framing or value layout does not fit the declared lengths.
    Malformed,
}

impl CometError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CometError::UnsupportedMessageType { .. } => ErrorKind::UnsupportedMessageType,
            CometError::UnrecognizedParameterTag { .. } => ErrorKind::UnrecognizedParameterTag,
            CometError::UnrecognizedAbsenceReason { .. }
            | CometError::UnrecognizedCallType { .. } => ErrorKind::UnrecognizedEnumValue,
            CometError::TooShort { .. }
            | CometError::TruncatedParameterHeader { .. }
            | CometError::ParameterOverrun { .. }
            | CometError::InvalidDateTime { .. }
            | CometError::NonDigitDateTime { .. }
            | CometError::EmptyValue { .. } => ErrorKind::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CometError, ErrorKind};

    #[test]
    fn hex_rendering_is_lowercase_unpadded() {
        let err = CometError::UnrecognizedAbsenceReason { value: 0x4F };
        assert_eq!(
            err.to_string(),
            "reason for absence of number '0x4f' not recognised"
        );
        let err = CometError::UnrecognizedParameterTag { tag: 0x03 };
        assert_eq!(err.to_string(), "parameter type '0x3' not recognised");
    }

    #[test]
    fn unsupported_type_message() {
        let err = CometError::UnsupportedMessageType { value: 0x99 };
        assert_eq!(
            err.to_string(),
            "received message type '0x99', only message type '0x80' (Caller ID) is supported"
        );
    }

    #[test]
    fn enum_failures_share_a_kind() {
        assert_eq!(
            CometError::UnrecognizedCallType { value: 0x99 }.kind(),
            ErrorKind::UnrecognizedEnumValue
        );
        assert_eq!(
            CometError::UnrecognizedAbsenceReason { value: 0 }.kind(),
            ErrorKind::UnrecognizedEnumValue
        );
        assert_eq!(
            CometError::TooShort {
                needed: 3,
                actual: 1
            }
            .kind(),
            ErrorKind::Malformed
        );
    }
}
