//! The `crossorigin` CORS settings attribute shared by styles and scripts.

use crate::error::{RegistryError, normalize};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// CORS settings for a fetched resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossOrigin {
    /// `crossorigin="anonymous"`
    Anonymous,
    /// `crossorigin="use-credentials"`
    UseCredentials,
}

impl CrossOrigin {
    /// Returns the HTML attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::UseCredentials => "use-credentials",
        }
    }
}

impl fmt::Display for CrossOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrossOrigin {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            // An empty attribute value is the anonymous state in HTML.
            "" | "anonymous" => Ok(Self::Anonymous),
            "use-credentials" => Ok(Self::UseCredentials),
            _ => Err(RegistryError::InvalidCrossOrigin(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_attribute_values() {
        assert_eq!("anonymous".parse(), Ok(CrossOrigin::Anonymous));
        assert_eq!("".parse(), Ok(CrossOrigin::Anonymous));
        assert_eq!("USE_CREDENTIALS".parse(), Ok(CrossOrigin::UseCredentials));
        assert!(matches!(
            "sometimes".parse::<CrossOrigin>(),
            Err(RegistryError::InvalidCrossOrigin(_))
        ));
    }

    #[test]
    fn display_matches_attribute() {
        assert_eq!(CrossOrigin::UseCredentials.to_string(), "use-credentials");
    }
}
