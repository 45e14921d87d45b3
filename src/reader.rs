use crate::error::{short_transfer, stream_failed, Result};
use crate::scalar::{CodePoint, Scalar};
use crate::stream::Source;
use zerocopy::{FromZeros, IntoBytes};

extern crate alloc;
use alloc::vec::Vec;

/// Upper bound on how many elements `read_vec` reserves room for before any data has arrived.
const PREALLOC_LIMIT: usize = 4096;

/// Decodes fixed-width values from a [`Source`], in little-endian byte order.
///
/// Each scalar is read with exactly one call to the source, asking for exactly the width of the
/// value. If the source fills fewer bytes than that, even zero bytes with no error, the read
/// fails with [`CodecError::InvalidBytes`](crate::CodecError::InvalidBytes). Short reads are
/// not retried, so sources that may legitimately return partial reads (sockets, pipes) should be
/// wrapped in something that buffers, such as `std::io::BufReader`.
///
/// Sequence reads issue one call per element and are all-or-nothing: if any element fails, the
/// elements decoded so far are discarded and only the error is returned.
pub struct StreamReader<R> {
    /// The input source.
    pub input: R,
}

impl<R> StreamReader<R> {
    /// Constructor
    pub fn wrap(input: R) -> Self {
        Self { input }
    }

    /// Extracts the inner source
    pub fn into_inner(self) -> R {
        self.input
    }

    /// Accesses the inner source
    pub fn inner(&self) -> &R {
        &self.input
    }

    /// Mutably accesses the inner source
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.input
    }
}

impl<R: Source> StreamReader<R> {
    /// Fills all of `buf` with a single call to the source.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }

        match self.input.read_some(buf) {
            Ok(n) if n == buf.len() => Ok(()),
            Ok(n) => Err(short_transfer("read", buf.len(), n)),
            Err(e) => Err(stream_failed("read", buf.len(), e)),
        }
    }

    /// Reads `len` bytes verbatim.
    ///
    /// A zero-length read succeeds without calling the source. If a buffer of `len` bytes cannot be
    /// allocated, the read fails without calling the source.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        if let Err(e) = buf.try_reserve_exact(len) {
            return Err(stream_failed("read", len, e));
        }
        buf.resize(len, 0u8);
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Reads a small array of bytes, with a constant length.
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Reads a single scalar value using its fixed-width encoding.
    #[inline]
    pub fn read<T: Scalar>(&mut self) -> Result<T> {
        let mut wire = T::Wire::new_zeroed();
        self.fill(wire.as_mut_bytes())?;
        Ok(T::from_wire(wire))
    }

    /// Reads `count` scalar values, one underlying read per value.
    ///
    /// Stops at the first failure and returns only the error.
    pub fn read_vec<T: Scalar>(&mut self, count: usize) -> Result<Vec<T>> {
        let mut values = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        for _ in 0..count {
            values.push(self.read::<T>()?);
        }
        Ok(values)
    }

    /// Reads a single byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        self.read()
    }

    /// Reads a single `u8` value.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read()
    }

    /// Reads a `u16` in little-endian byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read()
    }

    /// Reads a `u32` in little-endian byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read()
    }

    /// Reads a `u64` in little-endian byte order.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read()
    }

    /// Reads a single `i8` value.
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read()
    }

    /// Reads a `i16` in little-endian byte order.
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read()
    }

    /// Reads a `i32` in little-endian byte order.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read()
    }

    /// Reads a `i64` in little-endian byte order.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read()
    }

    /// Reads an `f32` from the raw bits of its little-endian representation.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read()
    }

    /// Reads an `f64` from the raw bits of its little-endian representation.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read()
    }

    /// Reads a code point from its 32-bit little-endian ordinal.
    ///
    /// The ordinal is not checked. Surrogates and values above `0x10FFFF` are returned as-is;
    /// use [`CodePoint::to_char`] if a `char` is needed.
    pub fn read_rune(&mut self) -> Result<CodePoint> {
        self.read()
    }

    /// Reads `len` bytes and returns them as a byte string.
    ///
    /// The content is not validated; byte sequences that are not well-formed UTF-8 are preserved.
    #[cfg(feature = "bstr")]
    pub fn read_string(&mut self, len: usize) -> Result<bstr::BString> {
        Ok(bstr::BString::from(self.read_bytes(len)?))
    }

    /// Reads `len` bytes of string content.
    ///
    /// The content is not validated; byte sequences that are not well-formed UTF-8 are preserved.
    #[cfg(not(feature = "bstr"))]
    pub fn read_string(&mut self, len: usize) -> Result<Vec<u8>> {
        self.read_bytes(len)
    }

    /// Reads `count` `u8` values, one byte per underlying read.
    pub fn read_u8s(&mut self, count: usize) -> Result<Vec<u8>> {
        self.read_vec(count)
    }

    /// Reads `count` `u16` values.
    pub fn read_u16s(&mut self, count: usize) -> Result<Vec<u16>> {
        self.read_vec(count)
    }

    /// Reads `count` `u32` values.
    pub fn read_u32s(&mut self, count: usize) -> Result<Vec<u32>> {
        self.read_vec(count)
    }

    /// Reads `count` `u64` values.
    pub fn read_u64s(&mut self, count: usize) -> Result<Vec<u64>> {
        self.read_vec(count)
    }

    /// Reads `count` `i8` values.
    pub fn read_i8s(&mut self, count: usize) -> Result<Vec<i8>> {
        self.read_vec(count)
    }

    /// Reads `count` `i16` values.
    pub fn read_i16s(&mut self, count: usize) -> Result<Vec<i16>> {
        self.read_vec(count)
    }

    /// Reads `count` `i32` values.
    pub fn read_i32s(&mut self, count: usize) -> Result<Vec<i32>> {
        self.read_vec(count)
    }

    /// Reads `count` `i64` values.
    pub fn read_i64s(&mut self, count: usize) -> Result<Vec<i64>> {
        self.read_vec(count)
    }

    /// Reads `count` `f32` values.
    pub fn read_f32s(&mut self, count: usize) -> Result<Vec<f32>> {
        self.read_vec(count)
    }

    /// Reads `count` `f64` values.
    pub fn read_f64s(&mut self, count: usize) -> Result<Vec<f64>> {
        self.read_vec(count)
    }

    /// Reads `count` code points.
    pub fn read_runes(&mut self, count: usize) -> Result<Vec<CodePoint>> {
        self.read_vec(count)
    }
}
