use core::fmt;
use core::marker::PhantomData;

use serde::de::{Error, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes a fixed-size array as a tuple of `N` elements, without length prefix.
pub(crate) fn serialize_array<T, S, const N: usize>(
    array: &[T; N],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let mut tuple = serializer.serialize_tuple(N)?;
    for elem in array {
        tuple.serialize_element(elem)?;
    }
    tuple.end()
}

/// Deserializes a tuple of exactly `N` elements.
pub(crate) fn deserialize_array<'de, T, D, const N: usize>(
    deserializer: D,
) -> Result<[T; N], D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    deserializer.deserialize_tuple(N, ArrayVisitor(PhantomData))
}

/// Borrowed array serialized as a tuple, for nested arrays such as matrix rows.
pub(crate) struct TupleRef<'a, T, const N: usize>(pub &'a [T; N]);

impl<T: Serialize, const N: usize> Serialize for TupleRef<'_, T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_array(self.0, serializer)
    }
}

/// Owned counterpart of [TupleRef].
pub(crate) struct TupleArray<T, const N: usize>(pub [T; N]);

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for TupleArray<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_array(deserializer).map(TupleArray)
    }
}

struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for ArrayVisitor<T, N> {
    type Value = [T; N];

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {N} elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut elements = Vec::with_capacity(N);
        while let Some(elem) = seq.next_element()? {
            if elements.len() == N {
                return Err(A::Error::invalid_length(N + 1, &self));
            }
            elements.push(elem);
        }

        let len = elements.len();
        elements
            .try_into()
            .map_err(|_| A::Error::invalid_length(len, &self))
    }
}
