//! Reads and writes fixed-width little-endian values over byte streams.
//!
//! Integers are encoded in exactly their width, least-significant byte first, two's-complement
//! for signed types. Floats are encoded as the raw bits of their IEEE-754 representation. Code
//! points are encoded as 32-bit ordinals. Strings and byte sequences are copied verbatim.
//! Sequences are the concatenation of their elements. Nothing carries a length prefix, so the
//! reader must be told how much to read.
//!
//! [`StreamWriter`] and [`StreamReader`] work over any [`Sink`] or [`Source`]. With the `std`
//! feature, that is any `std::io::Write` or `std::io::Read`.
//!
//! Every operation either transfers the exact number of bytes it needs or fails with
//! [`CodecError::InvalidBytes`].
//!
//! ```
//! use le_stream_io::{StreamReader, StreamWriter};
//!
//! let mut w = StreamWriter::new();
//! w.write_u32(0x01020304).unwrap();
//! w.write_string("abc").unwrap();
//! assert_eq!(w.out, [0x04, 0x03, 0x02, 0x01, b'a', b'b', b'c']);
//!
//! let mut r = StreamReader::wrap(w.out.as_slice());
//! assert_eq!(r.read_u32(), Ok(0x01020304));
//! assert_eq!(r.read_string(3).unwrap().as_slice(), b"abc");
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod control;
mod error;
mod reader;
mod scalar;
pub mod stream;
mod writer;


pub use error::{CodecError, Result};
pub use reader::StreamReader;
pub use scalar::{CodePoint, Scalar};
pub use stream::{Sink, Source};
pub use writer::StreamWriter;
