pub const MESSAGE_TYPE_OFFSET: usize = 0;
pub const LENGTH_OFFSET: usize = 1;
pub const BODY_OFFSET: usize = 2;
/// Type byte, length byte and trailing checksum byte.
pub const FRAME_OVERHEAD: usize = 3;

pub const CALLER_ID_MESSAGE_TYPE: u8 = 0x80;

pub const PARAM_TAG_OFFSET: usize = 0;
pub const PARAM_LENGTH_OFFSET: usize = 1;
pub const PARAM_HEADER_LEN: usize = 2;

pub const TAG_DATE_TIME: u8 = 0x01;
pub const TAG_CALLING_LINE_NUMBER: u8 = 0x02;
pub const TAG_REASON_FOR_ABSENCE: u8 = 0x04;
pub const TAG_CALLING_LINE_NAME: u8 = 0x07;
pub const TAG_CALL_TYPE: u8 = 0x11;

pub const DATE_TIME_LEN: usize = 8;
pub const MONTH_RANGE: std::ops::Range<usize> = 0..2;
pub const DAY_RANGE: std::ops::Range<usize> = 2..4;
pub const HOUR_RANGE: std::ops::Range<usize> = 4..6;
pub const MINUTES_RANGE: std::ops::Range<usize> = 6..8;

pub const ABSENCE_WITHHELD: u8 = 0x50;
pub const ABSENCE_UNAVAILABLE: u8 = 0x4F;

pub const CALL_TYPE_VOICE: u8 = 0x01;
pub const CALL_TYPE_RING_BACK_WHEN_FREE: u8 = 0x02;
pub const CALL_TYPE_MESSAGE_WAITING: u8 = 0x81;

/// Total frame size for a declared body length.
pub const fn frame_len(length: u8) -> usize {
    length as usize + FRAME_OVERHEAD
}

pub const fn checksum_offset(length: u8) -> usize {
    BODY_OFFSET + length as usize
}
