use super::error::CometError;
use super::layout;

/// Named slot in a decoded Caller ID record, one per recognised parameter tag.
///
/// # Examples
/// ```
/// use comet_core::Field;
///
/// let field = Field::from_tag(0x07).unwrap();
/// assert_eq!(field, Field::CallingLineName);
/// assert_eq!(field.name(), "callingLineName");
/// assert!(Field::from_tag(0x03).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DateTime,
    CallingLineNumber,
    ReasonForAbsenceOfNumber,
    CallingLineName,
    CallType,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::DateTime,
        Field::CallingLineNumber,
        Field::ReasonForAbsenceOfNumber,
        Field::CallingLineName,
        Field::CallType,
    ];

    /// Resolve a parameter tag; unknown tags are an error.
    pub fn from_tag(tag: u8) -> Result<Self, CometError> {
        match tag {
            layout::TAG_DATE_TIME => Ok(Field::DateTime),
            layout::TAG_CALLING_LINE_NUMBER => Ok(Field::CallingLineNumber),
            layout::TAG_REASON_FOR_ABSENCE => Ok(Field::ReasonForAbsenceOfNumber),
            layout::TAG_CALLING_LINE_NAME => Ok(Field::CallingLineName),
            layout::TAG_CALL_TYPE => Ok(Field::CallType),
            _ => Err(CometError::UnrecognizedParameterTag { tag }),
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Field::DateTime => layout::TAG_DATE_TIME,
            Field::CallingLineNumber => layout::TAG_CALLING_LINE_NUMBER,
            Field::ReasonForAbsenceOfNumber => layout::TAG_REASON_FOR_ABSENCE,
            Field::CallingLineName => layout::TAG_CALLING_LINE_NAME,
            Field::CallType => layout::TAG_CALL_TYPE,
        }
    }

    /// Record key, as it appears in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Field::DateTime => "dateTime",
            Field::CallingLineNumber => "callingLineNumber",
            Field::ReasonForAbsenceOfNumber => "reasonForAbsenceOfNumber",
            Field::CallingLineName => "callingLineName",
            Field::CallType => "callType",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Field;
    use crate::protocols::comet::error::CometError;

    #[test]
    fn tags_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_tag(field.tag()).unwrap(), field);
        }
    }

    #[test]
    fn unknown_tags_rejected() {
        let known: Vec<u8> = Field::ALL.iter().map(|f| f.tag()).collect();
        for tag in 0..=u8::MAX {
            if known.contains(&tag) {
                continue;
            }
            assert_eq!(
                Field::from_tag(tag),
                Err(CometError::UnrecognizedParameterTag { tag })
            );
        }
    }

    #[test]
    fn display_uses_record_key() {
        assert_eq!(
            Field::ReasonForAbsenceOfNumber.to_string(),
            "reasonForAbsenceOfNumber"
        );
    }
}
