//! The closed set of fixed-width scalar kinds and their wire representations.

use core::fmt;
use zerocopy::byteorder::{I16, I32, I64, LE, U16, U32, U64};
use zerocopy::{FromBytes, Immutable, IntoBytes};

mod sealed {
    pub trait Sealed {}
}

/// A value that is encoded as a fixed number of bytes, in little-endian byte order.
///
/// This trait is sealed. It is implemented for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`,
/// `i64`, `f32`, `f64` and [`CodePoint`].
pub trait Scalar: Copy + sealed::Sealed {
    /// The in-memory form of the encoded value. Its size is the encoded width and its bytes are
    /// exactly the bytes on the wire.
    type Wire: FromBytes + IntoBytes + Immutable + Copy;

    /// The number of bytes that one value occupies on the wire.
    const WIDTH: usize = core::mem::size_of::<Self::Wire>();

    /// Converts the value to its wire representation.
    fn to_wire(self) -> Self::Wire;

    /// Converts a wire representation back to the value.
    fn from_wire(wire: Self::Wire) -> Self;
}

macro_rules! scalar {
    // 8-bit kinds are their own wire form.
    ($t:ty) => {
        impl sealed::Sealed for $t {}

        impl Scalar for $t {
            type Wire = $t;

            #[inline(always)]
            fn to_wire(self) -> $t {
                self
            }

            #[inline(always)]
            fn from_wire(wire: $t) -> $t {
                wire
            }
        }
    };

    ($t:ty => $wire:ident) => {
        impl sealed::Sealed for $t {}

        impl Scalar for $t {
            type Wire = $wire<LE>;

            #[inline(always)]
            fn to_wire(self) -> $wire<LE> {
                $wire::new(self)
            }

            #[inline(always)]
            fn from_wire(wire: $wire<LE>) -> $t {
                wire.get()
            }
        }
    };

    // Floats travel as their raw bits so that NaN payloads are preserved.
    ($t:ty => $wire:ident, bits) => {
        impl sealed::Sealed for $t {}

        impl Scalar for $t {
            type Wire = $wire<LE>;

            #[inline(always)]
            fn to_wire(self) -> $wire<LE> {
                $wire::new(self.to_bits())
            }

            #[inline(always)]
            fn from_wire(wire: $wire<LE>) -> $t {
                <$t>::from_bits(wire.get())
            }
        }
    };
}

scalar!(u8);
scalar!(i8);
scalar!(u16 => U16);
scalar!(u32 => U32);
scalar!(u64 => U64);
scalar!(i16 => I16);
scalar!(i32 => I32);
scalar!(i64 => I64);
scalar!(f32 => U32, bits);
scalar!(f64 => U64, bits);

/// A Unicode code point, stored as its raw 32-bit ordinal.
///
/// Unlike `char`, a `CodePoint` can hold any 32-bit value, including surrogates and values above
/// `0x10FFFF`. Decoding never rejects a value, so every 32-bit pattern survives a round trip.
/// Use [`CodePoint::to_char`] to check whether it names a Unicode scalar value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct CodePoint(pub u32);

impl CodePoint {
    /// Creates a code point from a raw ordinal. No validation is performed.
    pub const fn new(ordinal: u32) -> Self {
        Self(ordinal)
    }

    /// Returns the raw ordinal.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the ordinal reinterpreted as a signed 32-bit value.
    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// Returns the corresponding `char`, if the ordinal is a Unicode scalar value.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<u32> for CodePoint {
    fn from(ordinal: u32) -> Self {
        Self(ordinal)
    }
}

impl From<i32> for CodePoint {
    fn from(ordinal: i32) -> Self {
        Self(ordinal as u32)
    }
}

impl From<CodePoint> for u32 {
    fn from(c: CodePoint) -> u32 {
        c.0
    }
}

impl TryFrom<CodePoint> for char {
    type Error = CodePoint;

    fn try_from(c: CodePoint) -> core::result::Result<char, CodePoint> {
        c.to_char().ok_or(c)
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "U+{:04X} {:?}", self.0, c),
            None => write!(f, "U+{:04X}", self.0),
        }
    }
}

impl sealed::Sealed for CodePoint {}

impl Scalar for CodePoint {
    type Wire = U32<LE>;

    #[inline(always)]
    fn to_wire(self) -> U32<LE> {
        U32::new(self.0)
    }

    #[inline(always)]
    fn from_wire(wire: U32<LE>) -> CodePoint {
        CodePoint(wire.get())
    }
}
