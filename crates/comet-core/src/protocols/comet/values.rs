use tracing::trace;

use super::error::CometError;
use super::field::Field;
use super::layout;
use crate::{AbsenceReason, CallType, DateTime};

/// Interpreted value of a single parameter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    DateTime(DateTime),
    CallingLineNumber(String),
    ReasonForAbsenceOfNumber(AbsenceReason),
    CallingLineName(String),
    CallType(CallType),
}

impl FieldValue {
    pub fn field(&self) -> Field {
        match self {
            FieldValue::DateTime(_) => Field::DateTime,
            FieldValue::CallingLineNumber(_) => Field::CallingLineNumber,
            FieldValue::ReasonForAbsenceOfNumber(_) => Field::ReasonForAbsenceOfNumber,
            FieldValue::CallingLineName(_) => Field::CallingLineName,
            FieldValue::CallType(_) => Field::CallType,
        }
    }
}

/// Convert raw block bytes into the typed value for `field`.
///
/// Fields without a dedicated interpreter are decoded as 7-bit ASCII text.
pub fn interpret(field: Field, value: &[u8]) -> Result<FieldValue, CometError> {
    trace!(%field, len = value.len(), "interpreting parameter value");
    match field {
        Field::DateTime => read_date_time(value).map(FieldValue::DateTime),
        Field::ReasonForAbsenceOfNumber => {
            let code = first_byte(field, value)?;
            AbsenceReason::from_code(code).map(FieldValue::ReasonForAbsenceOfNumber)
        }
        Field::CallType => {
            let code = first_byte(field, value)?;
            CallType::from_code(code).map(FieldValue::CallType)
        }
        Field::CallingLineNumber => Ok(FieldValue::CallingLineNumber(read_ascii(value))),
        Field::CallingLineName => Ok(FieldValue::CallingLineName(read_ascii(value))),
    }
}

/// 7-bit ASCII decode; the high bit of each byte is dropped so the string
/// keeps the byte length of the input.
pub fn read_ascii(value: &[u8]) -> String {
    value.iter().map(|b| char::from(b & 0x7f)).collect()
}

pub fn read_date_time(value: &[u8]) -> Result<DateTime, CometError> {
    if value.len() != layout::DATE_TIME_LEN {
        return Err(CometError::InvalidDateTime {
            length: value.len(),
        });
    }
    if let Some(offset) = value.iter().position(|b| !b.is_ascii_digit()) {
        return Err(CometError::NonDigitDateTime {
            offset,
            value: value[offset],
        });
    }
    Ok(DateTime {
        month: read_ascii(&value[layout::MONTH_RANGE]),
        day: read_ascii(&value[layout::DAY_RANGE]),
        hour: read_ascii(&value[layout::HOUR_RANGE]),
        minutes: read_ascii(&value[layout::MINUTES_RANGE]),
    })
}

// Enumerated fields only look at their first byte.
fn first_byte(field: Field, value: &[u8]) -> Result<u8, CometError> {
    value.first().copied().ok_or(CometError::EmptyValue {
        field: field.name(),
    })
}
