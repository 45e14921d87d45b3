use crate::error::{short_transfer, stream_failed, Result};
use crate::scalar::{CodePoint, Scalar};
use crate::stream::Sink;
use zerocopy::IntoBytes;

extern crate alloc;
use alloc::vec::Vec;

/// Encodes fixed-width values into a [`Sink`], in little-endian byte order.
///
/// Every `write_*` method issues at most one call to the sink. The call succeeds only if the sink
/// accepts every byte it was offered; anything less is reported as
/// [`CodecError::InvalidBytes`](crate::CodecError::InvalidBytes). Nothing is retried and nothing
/// is buffered between calls.
///
/// Nothing is framed, either. Strings and sequences are written without a length, so the reader
/// needs to learn the length some other way.
pub struct StreamWriter<W> {
    /// The output sink.
    pub out: W,
}

impl<W> StreamWriter<W> {
    /// Constructor
    pub fn wrap(out: W) -> Self {
        Self { out }
    }

    /// Extracts the inner sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Accesses the inner sink
    pub fn inner(&self) -> &W {
        &self.out
    }

    /// Mutably accesses the inner sink
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

impl StreamWriter<Vec<u8>> {
    /// Creates a new `StreamWriter` over a `Vec<u8>`
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    /// Creates a new `StreamWriter` over a `Vec<u8>` with the given capacity.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            out: Vec::with_capacity(len),
        }
    }
}

impl Default for StreamWriter<Vec<u8>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Sink> StreamWriter<W> {
    /// Writes `bytes` verbatim, in a single call to the sink.
    ///
    /// If `bytes` is empty, this succeeds without calling the sink at all.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }

        match self.out.write_some(bytes) {
            Ok(n) if n == bytes.len() => Ok(()),
            Ok(n) => Err(short_transfer("write", bytes.len(), n)),
            Err(e) => Err(stream_failed("write", bytes.len(), e)),
        }
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<()> {
        self.write_bytes(&value)
    }

    /// Writes a single scalar value using its fixed-width encoding.
    #[inline]
    pub fn write<T: Scalar>(&mut self, value: T) -> Result<()> {
        self.write_bytes(value.to_wire().as_bytes())
    }

    /// Writes a sequence of scalar values, with no count and no delimiter.
    ///
    /// The values are encoded into one contiguous buffer of `values.len() * T::WIDTH` bytes, which
    /// is handed to the sink in a single call. An empty sequence does not call the sink.
    pub fn write_slice<T: Scalar>(&mut self, values: &[T]) -> Result<()> {
        let wire: Vec<T::Wire> = values.iter().map(|&v| v.to_wire()).collect();
        self.write_bytes(wire.as_bytes())
    }

    /// Writes a single byte.
    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    /// Writes a single `u8` value
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `u16` value
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `u32` value
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `u64` value
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `i8` value
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `i16` value
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `i32` value
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `i64` value
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write(value)
    }

    /// Writes an `f32` value. The value is encoded using the 4-byte little-endian form of its raw
    /// bits, so NaN payloads are written as-is.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write(value)
    }

    /// Writes an `f64` value. The value is encoded using the 8-byte little-endian form of its raw
    /// bits, so NaN payloads are written as-is.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write(value)
    }

    /// Writes a code point as its 32-bit little-endian ordinal.
    ///
    /// Accepts a `char` or a [`CodePoint`]. The ordinal is not validated.
    pub fn write_rune(&mut self, value: impl Into<CodePoint>) -> Result<()> {
        self.write(value.into())
    }

    /// Writes the bytes of a string verbatim, with no length prefix and no terminator.
    ///
    /// This accepts anything that views as bytes (`str`, `[u8]`, `BStr`) and does not validate
    /// that the content is well-formed UTF-8. An empty string does not call the sink.
    pub fn write_string<S: AsRef<[u8]> + ?Sized>(&mut self, s: &S) -> Result<()> {
        self.write_bytes(s.as_ref())
    }

    /// Writes a sequence of `u8` values. This is the same as [`Self::write_bytes`].
    pub fn write_u8s(&mut self, values: &[u8]) -> Result<()> {
        self.write_bytes(values)
    }

    /// Writes a sequence of `u16` values
    pub fn write_u16s(&mut self, values: &[u16]) -> Result<()> {
        self.write_slice(values)
    }

    /// Writes a sequence of `u32` values
    pub fn write_u32s(&mut self, values: &[u32]) -> Result<()> {
        self.write_slice(values)
    }

    /// Writes a sequence of `u64` values
    pub fn write_u64s(&mut self, values: &[u64]) -> Result<()> {
        self.write_slice(values)
    }

    /// Writes a sequence of `i8` values
    pub fn write_i8s(&mut self, values: &[i8]) -> Result<()> {
        self.write_bytes(values.as_bytes())
    }

    /// Writes a sequence of `i16` values
    pub fn write_i16s(&mut self, values: &[i16]) -> Result<()> {
        self.write_slice(values)
    }

    /// Writes a sequence of `i32` values
    pub fn write_i32s(&mut self, values: &[i32]) -> Result<()> {
        self.write_slice(values)
    }

    /// Writes a sequence of `i64` values
    pub fn write_i64s(&mut self, values: &[i64]) -> Result<()> {
        self.write_slice(values)
    }

    /// Writes a sequence of `f32` values
    pub fn write_f32s(&mut self, values: &[f32]) -> Result<()> {
        self.write_slice(values)
    }

    /// Writes a sequence of `f64` values
    pub fn write_f64s(&mut self, values: &[f64]) -> Result<()> {
        self.write_slice(values)
    }

    /// Writes a sequence of code points.
    pub fn write_runes(&mut self, values: &[CodePoint]) -> Result<()> {
        self.write_slice(values)
    }
}
