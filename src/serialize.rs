//! Contains custom serialization and deserialization functions.

use std::str::FromStr;
use std::marker::PhantomData;
use std::fmt::{self, Display};
use serde::Deserialize;
use serde::de::{self, Deserializer};

/// SteamIDs are sent as strings to avoid precision loss in JavaScript clients.
pub mod steamid_string {
    use steamid_ng::SteamID;
    use serde::{Serializer, Deserializer};

    pub fn serialize<S>(steamid: &SteamID, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&u64::from(*steamid).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SteamID, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::string_or_number::<D, u64>(deserializer).map(SteamID::from)
    }
}

/// A SteamID of `0` means there is no user.
pub fn option_steamid_zero_as_none<'de, D>(deserializer: D) -> Result<Option<steamid_ng::SteamID>, D::Error>
where
    D: Deserializer<'de>,
{
    match string_or_number::<D, u64>(deserializer)? {
        0 => Ok(None),
        id => Ok(Some(steamid_ng::SteamID::from(id))),
    }
}

pub mod ts_seconds_option_none_when_zero {
    use core::fmt;
    use serde::{de, ser};
    use chrono::{DateTime, Utc, serde::SecondsTimestampVisitor};

    pub fn serialize<S>(opt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match *opt {
            Some(ref dt) => serializer.serialize_some(&dt.timestamp()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_option(OptionSecondsTimestampVisitor)
    }

    struct OptionSecondsTimestampVisitor;

    impl<'de> de::Visitor<'de> for OptionSecondsTimestampVisitor {
        type Value = Option<DateTime<Utc>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a unix timestamp in seconds or none")
        }

        fn visit_some<D>(self, d: D) -> Result<Self::Value, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            match d.deserialize_i64(SecondsTimestampVisitor) {
                Ok(date) if date.timestamp() == 0 => Ok(None),
                Ok(date) => Ok(Some(date)),
                Err(error) => Err(error),
            }
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }
}

pub fn from_int_to_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s: u8 = Deserialize::deserialize(deserializer)?;

    match s {
        1 => Ok(true),
        _ => Ok(false),
    }
}

pub fn string_or_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    T::Err: Display,
{
    struct NumericVisitor<T> {
        marker: PhantomData<T>,
    }

    impl<'de, T> de::Visitor<'de> for NumericVisitor<T>
    where
        T: FromStr + TryFrom<u64>,
        T::Err: Display,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            T::try_from(v)
                .map_err(|_e| de::Error::custom("Number too large to fit in target type"))
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse::<T>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(NumericVisitor { marker: PhantomData })
}

pub fn option_string_or_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    T::Err: Display,
{
    string_or_number(deserializer).map(Some)
}

/// Percentages are numbers in older responses and strings in newer ones.
pub fn float_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct FloatVisitor;

    impl de::Visitor<'_> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.trim().parse::<f64>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(FloatVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use steamid_ng::SteamID;

    #[derive(Deserialize)]
    struct Lender {
        #[serde(deserialize_with = "option_steamid_zero_as_none")]
        lender_steamid: Option<SteamID>,
    }

    #[derive(Deserialize)]
    struct Percent {
        #[serde(deserialize_with = "float_or_string")]
        percent: f64,
    }

    #[test]
    fn zero_steamid_is_none() {
        let lender: Lender = serde_json::from_str(r#"{"lender_steamid":"0"}"#).unwrap();

        assert!(lender.lender_steamid.is_none());

        let lender: Lender = serde_json::from_str(r#"{"lender_steamid":"76561197960287930"}"#).unwrap();

        assert_eq!(lender.lender_steamid.map(u64::from), Some(76561197960287930));
    }

    #[test]
    fn percent_from_string_or_number() {
        let percent: Percent = serde_json::from_str(r#"{"percent":"85.5"}"#).unwrap();

        assert_eq!(percent.percent, 85.5);

        let percent: Percent = serde_json::from_str(r#"{"percent":12.25}"#).unwrap();

        assert_eq!(percent.percent, 12.25);
    }
}
