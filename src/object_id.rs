//! Globally-unique, lexicographically sortable identifiers.
//!
//! An [`ObjectId`] is 12 bytes: a 4-byte big-endian seconds timestamp, a
//! 5-byte random value generated once per process, and a 3-byte counter
//! seeded from a random starting point. Hex encoding yields 24 characters
//! that sort in generation order.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const RAW_LEN: usize = 12;
const HEX_LEN: usize = 24;

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; RAW_LEN]);

impl ObjectId {
    /// Generates a new identifier from the current time, the per-process
    /// random value, and the next counter value.
    pub fn new() -> Self {
        let seconds = Utc::now().timestamp() as u32;
        let process = PROCESS_UNIQUE.get_or_init(rand::random::<[u8; 5]>);
        let count = COUNTER
            .get_or_init(|| AtomicU32::new(rand::random::<u32>()))
            .fetch_add(1, Ordering::Relaxed);

        let mut raw = [0u8; RAW_LEN];
        raw[0..4].copy_from_slice(&seconds.to_be_bytes());
        raw[4..9].copy_from_slice(process);
        raw[9..12].copy_from_slice(&count.to_be_bytes()[1..4]);
        ObjectId(raw)
    }

    pub const fn from_bytes(bytes: [u8; RAW_LEN]) -> Self {
        ObjectId(bytes)
    }

    pub const fn bytes(&self) -> [u8; RAW_LEN] {
        self.0
    }

    /// Parses a 24-character hex string.
    pub fn parse_str(s: &str) -> Result<Self, ParseObjectIdError> {
        if s.len() != HEX_LEN {
            return Err(ParseObjectIdError::InvalidLength(s.len()));
        }

        let mut raw = [0u8; RAW_LEN];
        hex::decode_to_slice(s, &mut raw).map_err(|_| ParseObjectIdError::InvalidHex)?;
        Ok(ObjectId(raw))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The creation instant embedded in the first four bytes, at second
    /// precision.
    pub fn timestamp(&self) -> DateTime<Utc> {
        let seconds = u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]]);
        Utc.timestamp_opt(i64::from(seconds), 0)
            .single()
            .expect("4-byte second counts are representable")
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = ObjectId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 24-character hex string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<ObjectId, E> {
                ObjectId::parse_str(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseObjectIdError {
    InvalidLength(usize),
    InvalidHex,
}

impl fmt::Display for ParseObjectIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseObjectIdError::InvalidLength(len) => {
                write!(f, "expected 24 hex characters, got {}", len)
            }
            ParseObjectIdError::InvalidHex => write!(f, "invalid hex digit"),
        }
    }
}

impl std::error::Error for ParseObjectIdError {}
