//! Serde adapters for the wire format: digests as lowercase hex strings
//! without a prefix, field elements as canonical JSON integers. Out-of-range
//! integers and malformed hex are rejected at parse time.

pub mod hex_digest {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(digest: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(digest))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let raw = String::deserialize(deserializer)?;
        decode(&raw).map_err(D::Error::custom)
    }

    pub(super) fn decode(raw: &str) -> Result<[u8; 32], String> {
        let bytes = hex::decode(raw).map_err(|error| format!("invalid hex digest: {error}"))?;
        bytes
            .try_into()
            .map_err(|_| "expected a 32 byte digest".to_string())
    }
}

pub mod hex_digest_vec {
    use serde::{de::Error, ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        digests: &[[u8; 32]],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(digests.len()))?;
        for digest in digests {
            seq.serialize_element(&hex::encode(digest))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<[u8; 32]>, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|digest| super::hex_digest::decode(digest).map_err(D::Error::custom))
            .collect()
    }
}

pub mod field_element {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use starklite_math::field::{element::FieldElement, traits::IsTwoAdicField};

    pub fn serialize<S, F>(element: &FieldElement<F>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        F: IsTwoAdicField,
    {
        serializer.serialize_u64(element.representative())
    }

    pub fn deserialize<'de, D, F>(deserializer: D) -> Result<FieldElement<F>, D::Error>
    where
        D: Deserializer<'de>,
        F: IsTwoAdicField,
    {
        let value = u64::deserialize(deserializer)?;
        decode(value).map_err(D::Error::custom)
    }

    pub(super) fn decode<F: IsTwoAdicField>(value: u64) -> Result<FieldElement<F>, String> {
        if value >= F::MODULUS {
            return Err(format!("field element {value} out of range"));
        }
        Ok(FieldElement::from(value))
    }
}

pub mod field_element_vec {
    use serde::{de::Error, ser::SerializeSeq, Deserialize, Deserializer, Serializer};
    use starklite_math::field::{element::FieldElement, traits::IsTwoAdicField};

    pub fn serialize<S, F>(
        elements: &[FieldElement<F>],
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        F: IsTwoAdicField,
    {
        let mut seq = serializer.serialize_seq(Some(elements.len()))?;
        for element in elements {
            seq.serialize_element(&element.representative())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D, F>(deserializer: D) -> Result<Vec<FieldElement<F>>, D::Error>
    where
        D: Deserializer<'de>,
        F: IsTwoAdicField,
    {
        let raw = Vec::<u64>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|value| super::field_element::decode(value).map_err(D::Error::custom))
            .collect()
    }
}
