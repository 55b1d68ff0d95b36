//! Serde adapters between stored BSON values and the JSON API shape.
//!
//! Entities are deserialized from BSON documents but serialized to JSON, so
//! object ids become 24-char hex strings and BSON datetimes become RFC 3339
//! strings on the way out.

/// `ObjectId` stored natively, rendered as hex.
pub mod object_id_hex {
    use bson::oid::ObjectId;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &ObjectId, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&id.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ObjectId, D::Error> {
        ObjectId::deserialize(deserializer)
    }
}

/// BSON datetime stored natively, rendered as RFC 3339.
pub mod timestamp {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use showcase_core::types::Timestamp;

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        Ok(bson::DateTime::deserialize(deserializer)?.to_chrono())
    }
}

/// Optional variant of [`timestamp`].
pub mod option_timestamp {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use showcase_core::types::Timestamp;

    pub fn serialize<S: Serializer>(
        value: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        Ok(Option::<bson::DateTime>::deserialize(deserializer)?.map(|dt| dt.to_chrono()))
    }
}
