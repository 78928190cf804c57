use crate::errors::ByteConversionError;
use crate::field::{element::FieldElement, traits::IsField};

/// Types that can be converted from and into big-endian bytes. Merkle leaves
/// and transcript messages go through this trait, so both sides of the
/// protocol agree on one byte rendering.
pub trait ByteConversion: Sized {
    fn to_bytes_be(&self) -> Vec<u8>;

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError>;
}

impl<F> ByteConversion for FieldElement<F>
where
    F: IsField<BaseType = u64>,
{
    fn to_bytes_be(&self) -> Vec<u8> {
        self.representative().to_be_bytes().to_vec()
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        let bytes: [u8; 8] = bytes
            .try_into()
            .map_err(|_| ByteConversionError::InvalidLength {
                expected: 8,
                got: bytes.len(),
            })?;
        Ok(Self::from(u64::from_be_bytes(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fields::stark101_prime_field::Stark101PrimeField;

    type FE = FieldElement<Stark101PrimeField>;

    #[test]
    fn to_bytes_be_is_8_bytes() {
        let bytes = FE::from(258).to_bytes_be();
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0, 1, 2]);
    }

    #[test]
    fn byte_round_trip() {
        let element = FE::from(3221225472);
        assert_eq!(
            FE::from_bytes_be(&element.to_bytes_be()).unwrap(),
            element
        );
    }

    #[test]
    fn from_bytes_be_rejects_wrong_length() {
        assert_eq!(
            FE::from_bytes_be(&[1, 2, 3]),
            Err(ByteConversionError::InvalidLength {
                expected: 8,
                got: 3
            })
        );
    }
}
