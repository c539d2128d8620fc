use std::fmt;
use std::str::FromStr;

use crate::consts::DEFAULT_HASH_LEN;
use crate::error::SentinelError;

/// The reserved predecessor hash marking "no predecessor" (genesis).
///
/// Its length is tied to the node's hash encoding, so it is built from a
/// length rather than written out as a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentinel(String);

impl Sentinel {
    pub fn zeros(len: usize) -> Result<Self, SentinelError> {
        if len == 0 {
            return Err(SentinelError::EmptyLength);
        }
        Ok(Self("0".repeat(len)))
    }

    pub fn parse(value: &str) -> Result<Self, SentinelError> {
        if value.is_empty() {
            return Err(SentinelError::EmptyLength);
        }
        if !value.bytes().all(|b| b == b'0') {
            return Err(SentinelError::NotZeros(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, hash: &str) -> bool {
        self.0 == hash
    }

    /// True if `hash` has the same encoded length as this sentinel.
    pub fn check_len(&self, hash: &str) -> bool {
        hash.len() == self.0.len()
    }
}

impl Default for Sentinel {
    fn default() -> Self {
        Self("0".repeat(DEFAULT_HASH_LEN))
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Sentinel {
    type Err = SentinelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sentinel::parse(s)
    }
}
