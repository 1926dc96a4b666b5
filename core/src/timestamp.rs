//! The two timestamp shapes the Live API puts on the wire.
//!
//! # Design
//! Most endpoints send RFC 3339 instants (`ZonedTimestamp`). A handful of
//! fields instead use `YYYY-MM-DD HH:MM:SSZ`, where the trailing `Z` is a
//! literal character and the value carries no zone at all
//! (`LiteralTimestamp`). The two are separate types so a field can never be
//! decoded with the wrong codec.

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const LITERAL_LAYOUT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]Z");

/// Naive date-time in the fixed `YYYY-MM-DD HH:MM:SSZ` layout.
///
/// The `Z` is part of the layout, not a UTC marker: `2023-06-01 12:30:45Z`
/// decodes to 12:30:45 with no offset applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LiteralTimestamp(PrimitiveDateTime);

impl LiteralTimestamp {
    pub fn new(value: PrimitiveDateTime) -> Self {
        Self(value)
    }

    /// Parse a raw token, tolerating the surrounding JSON quotes.
    pub fn parse(input: &str) -> Result<Self, time::error::Parse> {
        let raw = input.trim_matches('"');
        PrimitiveDateTime::parse(raw, LITERAL_LAYOUT).map(Self)
    }

    /// Render in the wire layout. `Display` and `Serialize` go through here.
    pub fn format(&self) -> Result<String, time::error::Format> {
        self.0.format(LITERAL_LAYOUT)
    }

    pub fn into_inner(self) -> PrimitiveDateTime {
        self.0
    }
}

impl From<PrimitiveDateTime> for LiteralTimestamp {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for LiteralTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.format().map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Serialize for LiteralTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = self.format().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> Deserialize<'de> for LiteralTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value)
            .map_err(|e| D::Error::custom(format!("invalid timestamp {value:?}: {e}")))
    }
}

/// RFC 3339 instant with an explicit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZonedTimestamp(OffsetDateTime);

impl ZonedTimestamp {
    pub fn new(value: OffsetDateTime) -> Self {
        Self(value)
    }

    /// Parse an RFC 3339 instant. Date and time must be joined by `T`; a
    /// space there belongs to the literal layout and is rejected.
    pub fn parse(input: &str) -> Result<Self, time::error::Parse> {
        if !matches!(input.as_bytes().get(10), Some(b'T')) {
            // `InvalidLiteral` is `#[non_exhaustive]`; let `time` build it.
            return Err(time::Time::parse("", time::macros::format_description!("T"))
                .expect_err("empty input never matches a literal"));
        }
        OffsetDateTime::parse(input, &Rfc3339).map(Self)
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for ZonedTimestamp {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for ZonedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Serialize for ZonedTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = self.0.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> Deserialize<'de> for ZonedTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value)
            .map_err(|e| D::Error::custom(format!("invalid timestamp {value:?}: {e}")))
    }
}
