use core::fmt;
use core::marker::PhantomData;

use ::serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use ::serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::array::Array;
use crate::RingBuffer;

/// Serialized as a sequence of the live elements, front to back.
impl<A: Array> Serialize for RingBuffer<A>
    where A::Item: Serialize
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elt in self {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

/// Deserialized by pushing every element of the sequence to the back, so a
/// sequence longer than the capacity keeps only its last elements.
impl<'de, A: Array> Deserialize<'de> for RingBuffer<A>
    where A::Item: Deserialize<'de> + Default
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        deserializer.deserialize_seq(RingBufferVisitor(PhantomData))
    }
}

struct RingBufferVisitor<A>(PhantomData<A>);

impl<'de, A: Array> Visitor<'de> for RingBufferVisitor<A>
    where A::Item: Deserialize<'de> + Default
{
    type Value = RingBuffer<A>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of at most {} elements", A::slot_count().saturating_sub(1))
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where S: SeqAccess<'de>
    {
        let mut ring = RingBuffer::new();
        while let Some(elt) = seq.next_element()? {
            ring.push_back(elt);
        }
        Ok(ring)
    }
}

#[cfg(test)]
mod tests {
    use crate::RingBuffer;

    #[test]
    fn serializes_live_elements_in_order() {
        let mut ring: RingBuffer<[_; 4]> = RingBuffer::new();
        ring.extend([1, 2, 3, 4, 5]);
        assert_eq!(serde_json::to_string(&ring).unwrap(), "[3,4,5]");
    }

    #[test]
    fn deserialize_keeps_most_recent() {
        let ring: RingBuffer<[u8; 4]> = serde_json::from_str("[1,2,3,4,5]").unwrap();
        assert_eq!(ring, vec![3, 4, 5]);

        let empty: RingBuffer<[u8; 4]> = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn rejects_non_sequence() {
        let res: Result<RingBuffer<[u8; 4]>, _> = serde_json::from_str("{\"a\":1}");
        assert!(res.is_err());
    }
}
