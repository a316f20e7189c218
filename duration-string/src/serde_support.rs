// SPDX-FileCopyrightText: 2026 duration-string contributors
//
// SPDX-License-Identifier: MIT

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::DurationString;

impl Serialize for DurationString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct DurationStringVisitor;

impl Visitor<'_> for DurationStringVisitor {
    type Value = DurationString;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a duration string such as '5m 30s'")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for DurationString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DurationStringVisitor)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anyhow::Result;
    use serde::{Deserialize, Serialize};

    use crate::DurationString;

    #[derive(Debug, Serialize, Deserialize)]
    struct Sample {
        d: DurationString,
    }

    #[test]
    fn serializes_to_string_form() -> Result<()> {
        let s = Sample {
            d: DurationString::new(Duration::from_secs(60)),
        };
        assert_eq!(serde_json::to_string(&s)?, r#"{"d":"1m"}"#);
        Ok(())
    }

    #[test]
    fn deserializes_from_string_form() -> Result<()> {
        let s: Sample = serde_json::from_str(r#"{"d":"2m"}"#)?;
        assert_eq!(Duration::from(s.d), Duration::from_secs(120));
        Ok(())
    }

    #[test]
    fn round_trips_sub_second_values() -> Result<()> {
        let s: Sample = serde_json::from_str(r#"{"d":"1500ns"}"#)?;
        assert_eq!(serde_json::to_string(&s)?, r#"{"d":"1500ns"}"#);
        Ok(())
    }

    #[test]
    fn rejects_malformed_strings() {
        let err = serde_json::from_str::<Sample>(r#"{"d":"10 parsecs"}"#).unwrap_err();
        assert!(err.to_string().contains("expected a duration string"));
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(serde_json::from_str::<Sample>(r#"{"d":100}"#).is_err());
    }
}
