//! Named single-byte control codes.
//!
//! These carry no behavior. They exist so that callers building record formats on top of this
//! crate can write and compare delimiters by name.

/// Null.
pub const NULL: u8 = 0x00;
/// Start of heading.
pub const SOH: u8 = 0x01;
/// Start of text.
pub const STX: u8 = 0x02;
/// End of text.
pub const ETX: u8 = 0x03;
/// End of segment.
pub const ES: u8 = 0x19;
/// File separator.
pub const FS: u8 = 0x1C;
/// Group separator.
pub const GS: u8 = 0x1D;
/// Record separator.
pub const RS: u8 = 0x1E;
/// Unit separator.
pub const US: u8 = 0x1F;
/// Delete.
pub const DEL: u8 = 0x7F;
