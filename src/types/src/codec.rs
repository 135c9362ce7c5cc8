// Copyright 2026 The EPID Member Harness Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("{kind}: expected {expected} bytes, found {actual}")]
    Length {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{kind}: header declares {declared} entries but {remaining} bytes follow")]
    Count {
        kind: &'static str,
        declared: u32,
        remaining: usize,
    },
    #[error("{kind}: truncated input")]
    Truncated { kind: &'static str },
}

/// Cursor over a serialized structure.
pub struct Reader<'a> {
    kind: &'static str,
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(kind: &'static str, bytes: &'a [u8]) -> Self {
        Reader { kind, bytes }
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8], FormatError> {
        if self.bytes.len() < len {
            return Err(FormatError::Truncated { kind: self.kind });
        }
        let (head, tail) = self.bytes.split_at(len);
        self.bytes = tail;
        Ok(head)
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

/// A structure with exactly one canonical byte layout of `SIZE` bytes.
pub trait OctetString: Sized {
    const NAME: &'static str;
    const SIZE: usize;

    fn read_from(reader: &mut Reader<'_>) -> Result<Self, FormatError>;
    fn write_to(&self, out: &mut Vec<u8>);

    /// Decodes `bytes`, which must be exactly `SIZE` long.
    fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() != Self::SIZE {
            return Err(FormatError::Length {
                kind: Self::NAME,
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        Self::read_from(&mut Reader::new(Self::NAME, bytes))
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE);
        self.write_to(&mut out);
        out
    }
}

// Fixed-width big-endian octet string.
macro_rules! octets {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(C)]
        pub struct $name(pub [u8; $len]);

        impl Default for $name {
            fn default() -> Self {
                $name([0u8; $len])
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(&self.0))
            }
        }

        impl $crate::codec::OctetString for $name {
            const NAME: &'static str = stringify!($name);
            const SIZE: usize = $len;

            fn read_from(
                reader: &mut $crate::codec::Reader<'_>,
            ) -> Result<Self, $crate::codec::FormatError> {
                let mut bytes = [0u8; $len];
                bytes.copy_from_slice(reader.take($len)?);
                Ok($name(bytes))
            }

            fn write_to(&self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.0);
            }
        }
    };
}

// Aggregate laid out as the concatenation of its fields, in declaration order.
macro_rules! composite {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$fmeta:meta])* pub $field:ident: $ty:ty,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(C)]
        pub struct $name {
            $($(#[$fmeta])* pub $field: $ty,)+
        }

        impl $crate::codec::OctetString for $name {
            const NAME: &'static str = stringify!($name);
            const SIZE: usize = 0 $(+ <$ty as $crate::codec::OctetString>::SIZE)+;

            fn read_from(
                reader: &mut $crate::codec::Reader<'_>,
            ) -> Result<Self, $crate::codec::FormatError> {
                Ok($name {
                    $($field: <$ty as $crate::codec::OctetString>::read_from(reader)?,)+
                })
            }

            fn write_to(&self, out: &mut Vec<u8>) {
                $($crate::codec::OctetString::write_to(&self.$field, out);)+
            }
        }

        const _: () = assert!(
            core::mem::size_of::<$name>() == <$name as $crate::codec::OctetString>::SIZE
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_reports_truncation() {
        let bytes = [1u8, 2, 3];
        let mut reader = Reader::new("Test", &bytes);
        assert_eq!(reader.take(2).unwrap(), &[1, 2]);
        assert_eq!(reader.remaining(), 1);
        assert_eq!(
            reader.take(2),
            Err(FormatError::Truncated { kind: "Test" })
        );
    }
}
