//! Block confirmation tags accepted by state-reading RPC methods.

use crate::utils::error::RelayError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Which view of chain state a read applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfirmationTag {
    #[default]
    Latest,
    Earliest,
    Pending,
}

impl ConfirmationTag {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmationTag::Latest => "latest",
            ConfirmationTag::Earliest => "earliest",
            ConfirmationTag::Pending => "pending",
        }
    }

    /// Parse an optional tag, falling back to `latest`
    ///
    /// # Errors
    /// * `RelayError::Validation` - tag is present but not one of the three names
    pub fn parse_or_default(tag: Option<&str>) -> Result<Self, RelayError> {
        match tag {
            None => Ok(Self::default()),
            Some(tag) => tag.parse(),
        }
    }
}

/// Anything a query method accepts in the tag position
///
/// Strings are checked against the three known names; `None` means `latest`.
pub trait IntoTag {
    fn into_tag(self) -> Result<ConfirmationTag, RelayError>;
}

impl IntoTag for ConfirmationTag {
    fn into_tag(self) -> Result<ConfirmationTag, RelayError> {
        Ok(self)
    }
}

impl IntoTag for &str {
    fn into_tag(self) -> Result<ConfirmationTag, RelayError> {
        self.parse()
    }
}

impl IntoTag for Option<&str> {
    fn into_tag(self) -> Result<ConfirmationTag, RelayError> {
        ConfirmationTag::parse_or_default(self)
    }
}

impl FromStr for ConfirmationTag {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(ConfirmationTag::Latest),
            "earliest" => Ok(ConfirmationTag::Earliest),
            "pending" => Ok(ConfirmationTag::Pending),
            other => Err(RelayError::Validation(format!("invalid tag: {}", other))),
        }
    }
}

impl fmt::Display for ConfirmationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConfirmationTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("latest".parse::<ConfirmationTag>().unwrap(), ConfirmationTag::Latest);
        assert_eq!("earliest".parse::<ConfirmationTag>().unwrap(), ConfirmationTag::Earliest);
        assert_eq!("pending".parse::<ConfirmationTag>().unwrap(), ConfirmationTag::Pending);
    }

    #[test]
    fn test_rejects_other_strings() {
        for tag in ["Latest", "finalized", "0x10", ""] {
            assert!(matches!(
                tag.parse::<ConfirmationTag>(),
                Err(RelayError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_into_tag() {
        assert_eq!("pending".into_tag().unwrap(), ConfirmationTag::Pending);
        assert_eq!(None::<&str>.into_tag().unwrap(), ConfirmationTag::Latest);
        assert!("safe".into_tag().is_err());
    }

    #[test]
    fn test_default_is_latest() {
        assert_eq!(ConfirmationTag::parse_or_default(None).unwrap(), ConfirmationTag::Latest);
        assert_eq!(
            serde_json::to_value(ConfirmationTag::Pending).unwrap(),
            serde_json::json!("pending")
        );
    }
}
