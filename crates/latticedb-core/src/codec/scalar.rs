use std::{fmt, mem::size_of};

mod sealed {
    pub trait Sealed {}
}

///
/// NativeScalar
///
/// Arithmetic type the codec can place on the wire at its native width
/// and byte order. Sealed: the set of widths is part of the file format.
///

pub trait NativeScalar: Copy + sealed::Sealed {
    const KIND: ScalarKind;

    /// On-wire width in bytes.
    const SIZE: usize;

    fn extend_native(self, out: &mut Vec<u8>);

    /// Decode from exactly `SIZE` bytes.
    fn from_native(bytes: &[u8]) -> Self;

    fn into_value(self) -> ScalarValue;

    fn sequence_ref(values: &[Self]) -> SequenceRef<'_>;
}

// One invocation defines the closed scalar set and every per-kind dispatch.
macro_rules! native_scalars {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        ///
        /// ScalarKind
        ///

        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum ScalarKind {
            $($variant,)*
        }

        impl fmt::Display for ScalarKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let label = match self {
                    $(Self::$variant => stringify!($ty),)*
                };
                write!(f, "{label}")
            }
        }

        impl ScalarKind {
            /// On-wire width in bytes.
            #[must_use]
            pub const fn size(self) -> u64 {
                match self {
                    $(Self::$variant => size_of::<$ty>() as u64,)*
                }
            }
        }

        ///
        /// ScalarValue
        ///

        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum ScalarValue {
            $($variant($ty),)*
        }

        impl ScalarValue {
            #[must_use]
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    $(Self::$variant(_) => ScalarKind::$variant,)*
                }
            }

            pub(crate) fn encode_into(&self, out: &mut Vec<u8>) {
                match *self {
                    $(Self::$variant(v) => v.extend_native(out),)*
                }
            }

            pub(crate) fn decode(kind: ScalarKind, bytes: &[u8]) -> Self {
                match kind {
                    $(ScalarKind::$variant => Self::$variant(<$ty>::from_native(bytes)),)*
                }
            }
        }

        ///
        /// SequenceRef
        /// Borrowed flat sequence; its length is not written.
        ///

        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum SequenceRef<'a> {
            $($variant(&'a [$ty]),)*
        }

        impl SequenceRef<'_> {
            #[must_use]
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    $(Self::$variant(_) => ScalarKind::$variant,)*
                }
            }

            #[must_use]
            pub const fn len(&self) -> usize {
                match self {
                    $(Self::$variant(values) => values.len(),)*
                }
            }

            #[must_use]
            pub const fn is_empty(&self) -> bool {
                self.len() == 0
            }

            pub(crate) fn encode_into(&self, out: &mut Vec<u8>) {
                match self {
                    $(Self::$variant(values) => {
                        for &v in *values {
                            v.extend_native(out);
                        }
                    })*
                }
            }
        }

        ///
        /// SequenceValue
        /// Owned flat sequence produced by a read.
        ///

        #[derive(Clone, Debug, PartialEq)]
        pub enum SequenceValue {
            $($variant(Vec<$ty>),)*
        }

        impl SequenceValue {
            #[must_use]
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    $(Self::$variant(_) => ScalarKind::$variant,)*
                }
            }

            #[must_use]
            pub fn as_sequence_ref(&self) -> SequenceRef<'_> {
                match self {
                    $(Self::$variant(values) => SequenceRef::$variant(values),)*
                }
            }

            pub(crate) fn decode(kind: ScalarKind, bytes: &[u8]) -> Self {
                match kind {
                    $(ScalarKind::$variant => Self::$variant(decode_all::<$ty>(bytes)),)*
                }
            }
        }

        $(
            impl sealed::Sealed for $ty {}

            impl NativeScalar for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;
                const SIZE: usize = size_of::<$ty>();

                fn extend_native(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_ne_bytes());
                }

                fn from_native(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; size_of::<$ty>()];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_ne_bytes(buf)
                }

                fn into_value(self) -> ScalarValue {
                    ScalarValue::$variant(self)
                }

                fn sequence_ref(values: &[Self]) -> SequenceRef<'_> {
                    SequenceRef::$variant(values)
                }
            }
        )*
    };
}

native_scalars! {
    U8 => u8,
    I32 => i32,
    U32 => u32,
    I64 => i64,
    U64 => u64,
    F32 => f32,
    F64 => f64,
}

pub(crate) fn decode_all<T: NativeScalar>(bytes: &[u8]) -> Vec<T> {
    bytes.chunks_exact(T::SIZE).map(T::from_native).collect()
}
