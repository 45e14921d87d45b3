//! The byte stream capabilities that the codec is written against.
//!
//! The codec never buffers or retries. Each call on a [`Sink`] or [`Source`] is a single
//! underlying transfer, and the reported count is taken at face value.

/// Something that accepts bytes: a file, a socket, an in-memory buffer.
pub trait Sink {
    /// Error reported by the underlying transport.
    type Error: core::fmt::Debug;

    /// Offers `bytes` to the sink and returns how many of them it accepted.
    fn write_some(&mut self, bytes: &[u8]) -> Result<usize, Self::Error>;
}

/// Something that yields bytes: a file, a socket, an in-memory buffer.
pub trait Source {
    /// Error reported by the underlying transport.
    type Error: core::fmt::Debug;

    /// Fills up to `buf.len()` bytes of `buf` and returns how many were filled.
    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

#[cfg(feature = "std")]
impl<W: std::io::Write + ?Sized> Sink for W {
    type Error = std::io::Error;

    #[inline]
    fn write_some(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        self.write(bytes)
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read + ?Sized> Source for R {
    type Error = std::io::Error;

    #[inline]
    fn read_some(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.read(buf)
    }
}

#[cfg(not(feature = "std"))]
mod no_std_impls {
    use super::{Sink, Source};
    use alloc::vec::Vec;
    use core::convert::Infallible;

    impl Sink for Vec<u8> {
        type Error = Infallible;

        fn write_some(&mut self, bytes: &[u8]) -> Result<usize, Infallible> {
            self.extend_from_slice(bytes);
            Ok(bytes.len())
        }
    }

    /// Writes into the front of the slice and advances it, like `std::io::Write for &mut [u8]`.
    impl Sink for &mut [u8] {
        type Error = Infallible;

        fn write_some(&mut self, bytes: &[u8]) -> Result<usize, Infallible> {
            let n = bytes.len().min(self.len());
            let (head, tail) = core::mem::take(self).split_at_mut(n);
            head.copy_from_slice(&bytes[..n]);
            *self = tail;
            Ok(n)
        }
    }

    impl Source for &[u8] {
        type Error = Infallible;

        fn read_some(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
            let n = buf.len().min(self.len());
            let (head, tail) = self.split_at(n);
            buf[..n].copy_from_slice(head);
            *self = tail;
            Ok(n)
        }
    }

    impl<S: Sink + ?Sized> Sink for &mut S {
        type Error = S::Error;

        fn write_some(&mut self, bytes: &[u8]) -> Result<usize, S::Error> {
            (**self).write_some(bytes)
        }
    }

    impl<S: Source + ?Sized> Source for &mut S {
        type Error = S::Error;

        fn read_some(&mut self, buf: &mut [u8]) -> Result<usize, S::Error> {
            (**self).read_some(buf)
        }
    }
}
