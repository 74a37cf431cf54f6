use super::error::CometError;
use super::layout;

/// Bounds-checked view over a Comet message buffer.
pub struct CometReader<'a> {
    payload: &'a [u8],
}

impl<'a> CometReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), CometError> {
        if self.payload.len() < needed {
            return Err(CometError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, CometError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(CometError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], CometError> {
        self.payload.get(range.clone()).ok_or(CometError::TooShort {
            needed: range.end,
            actual: self.payload.len(),
        })
    }

    pub fn read_message_type(&self) -> Result<u8, CometError> {
        self.read_u8(layout::MESSAGE_TYPE_OFFSET)
    }

    pub fn read_length(&self) -> Result<u8, CometError> {
        self.read_u8(layout::LENGTH_OFFSET)
    }
}

/// Walks a message body as contiguous tag/length/value blocks.
///
/// Each step yields the tag and the value slice, or the first framing error.
/// After an error the cursor is exhausted.
pub struct ParameterCursor<'a> {
    body: &'a [u8],
    offset: usize,
}

impl<'a> ParameterCursor<'a> {
    pub fn new(body: &'a [u8]) -> Self {
        Self { body, offset: 0 }
    }

    fn read_block(&self) -> Result<(u8, &'a [u8], usize), CometError> {
        let header_end = self.offset + layout::PARAM_HEADER_LEN;
        let header = self
            .body
            .get(self.offset..header_end)
            .ok_or(CometError::TruncatedParameterHeader {
                offset: self.offset,
                length: self.body.len(),
            })?;
        let tag = header[layout::PARAM_TAG_OFFSET];
        let value_len = header[layout::PARAM_LENGTH_OFFSET] as usize;
        let value_end = header_end + value_len;
        let value = self
            .body
            .get(header_end..value_end)
            .ok_or(CometError::ParameterOverrun {
                tag,
                needed: value_len,
                available: self.body.len() - header_end,
            })?;
        Ok((tag, value, value_end))
    }
}

impl<'a> Iterator for ParameterCursor<'a> {
    type Item = Result<(u8, &'a [u8]), CometError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.body.len() {
            return None;
        }
        match self.read_block() {
            Ok((tag, value, next_offset)) => {
                self.offset = next_offset;
                Some(Ok((tag, value)))
            }
            Err(err) => {
                self.offset = self.body.len();
                Some(Err(err))
            }
        }
    }
}
