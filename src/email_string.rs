use std::fmt::{self, Formatter};
use std::ops::Deref;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;
use serde::de::Unexpected::Str;
use thiserror::Error;

/// An address that passed shape validation: `local@domain.tld`, no
/// whitespace anywhere, nonempty parts. Stored and compared
/// case-sensitively; no attempt at full RFC 5321 validation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EmailString(String);

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("not a valid email address")]
pub struct EmailParseError;

impl FromStr for EmailString {
    type Err = EmailParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (local, domain) = s.split_once('@').ok_or(EmailParseError)?;
        if local.is_empty() || domain.contains('@') {
            return Err(EmailParseError);
        }
        let (host, tld) = domain.rsplit_once('.').ok_or(EmailParseError)?;
        if host.is_empty() || tld.is_empty() {
            return Err(EmailParseError);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(EmailParseError);
        }
        Ok(EmailString(s.to_string()))
    }
}

impl Deref for EmailString {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0[..]
    }
}

impl fmt::Display for EmailString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl EmailString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for EmailString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EmailString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = EmailString;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("string containing a valid email address")
            }

            fn visit_str<E>(self, v: &str) -> Result<EmailString, E>
            where
                E: Error,
            {
                EmailString::from_str(v)
                    .map_err(|_| Error::invalid_value(Str(v), &self))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
