//! Comet Caller ID message decoding.
//!
//! A message is a type byte (`0x80`, Caller ID), a body length byte, the body
//! and an unvalidated checksum byte. The body is a packed run of
//! tag/length/value parameter blocks; each tag resolves to a record field
//! and each field selects a value interpreter (ASCII text, date/time, or an
//! enumerated code).
//!
//! Declared lengths are never trusted: a frame shorter than `length + 3` and
//! a block whose value runs past the body are both hard errors. Wire
//! constants live in `layout`, bounds-checked access in `reader`.

pub mod error;
pub mod field;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod values;

pub use parser::{decode, extract_parameters, split_frame};
