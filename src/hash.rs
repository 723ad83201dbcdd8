use std::fmt;

use crate::error::SpeechError;

/// 32-bit Jenkins one-at-a-time hash of a track or speaker name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashValue(u32);

impl HashValue {
    /// Hash a name with the Jenkins one-at-a-time function.
    ///
    /// Empty input is rejected: an empty track or speaker name would hash
    /// to zero and silently collide with every other empty name.
    pub fn of(input: &str) -> Result<Self, SpeechError> {
        if input.is_empty() {
            return Err(SpeechError::EmptyInput);
        }

        let mut hash: u32 = 0;
        for c in input.chars() {
            hash = hash.wrapping_add(c as u32);
            hash = hash.wrapping_add(hash << 10);
            hash ^= hash >> 6;
        }
        hash = hash.wrapping_add(hash << 3);
        hash ^= hash >> 11;
        hash = hash.wrapping_add(hash << 15);

        Ok(HashValue(hash))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Big-endian bytes, matching the hex-pair order of the display form.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Lowercase 8-digit hex, the form used in item names.
    pub fn to_hex_lower(&self) -> String {
        format!("{:08x}", self.0)
    }

    /// Byte-wise XOR with another hash. Commutative.
    pub fn combine(&self, other: &HashValue) -> CombinedHash {
        let a = self.to_bytes();
        let b = other.to_bytes();
        let mut out = [0u8; 4];
        for i in 0..4 {
            out[i] = a[i] ^ b[i];
        }
        CombinedHash(out)
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// XOR of a track hash and a speaker hash, used as an asset identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombinedHash(pub(crate) [u8; 4]);

impl CombinedHash {
    pub fn bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_hex_lower(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for CombinedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}
