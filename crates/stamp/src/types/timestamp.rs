use crate::types::{DatePattern, TimeError};
use chrono::{DateTime, Utc};
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Timestamp
/// (in seconds)
///
/// `EPOCH` doubles as the unset value: a synthesized field starts there and
/// the combined hook only fills `created` while it still holds it.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);
    pub const MIN: Self = Self(u64::MIN);
    pub const MAX: Self = Self(u64::MAX);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Construct from milliseconds (truncate to seconds).
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms / 1_000)
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, TimeError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| TimeError::Parse(e.to_string()))?;
        let secs = u64::try_from(dt.timestamp()).map_err(|_| TimeError::BeforeEpoch)?;

        Ok(Self(secs))
    }

    /// Integer seconds, or RFC 3339.
    pub fn parse_flexible(s: &str) -> Result<Self, TimeError> {
        if let Ok(n) = s.parse::<u64>() {
            return Ok(Self(n));
        }

        Self::parse_rfc3339(s)
    }

    /// Current wall-clock timestamp in seconds.
    #[must_use]
    pub fn now() -> Self {
        Self::from_clock(Utc::now().timestamp())
    }

    /// A clock reading is never the unset value; readings at or before the
    /// epoch clamp to one second after it.
    #[must_use]
    pub fn from_clock(secs: i64) -> Self {
        Self(u64::try_from(secs).unwrap_or(0).max(Self::EPOCH.0 + 1))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == Self::EPOCH.0
    }

    pub fn to_datetime(self) -> Result<DateTime<Utc>, TimeError> {
        i64::try_from(self.0)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or(TimeError::OutOfRange(self.0))
    }

    /// Render through a display pattern such as `yyyy-MM-dd HH:mm:ss` (UTC).
    pub fn format(self, pattern: &DatePattern) -> Result<String, TimeError> {
        let dt = self.to_datetime()?;

        Ok(dt.format(pattern.chrono_format()).to_string())
    }
}

impl From<u64> for Timestamp {
    fn from(u: u64) -> Self {
        Self(u)
    }
}

impl PartialEq<u64> for Timestamp {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<u64> for Timestamp {
    fn partial_cmp(&self, other: &u64) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

///
/// TESTS
///
