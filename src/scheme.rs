//! URI scheme of an IIIF request.

use std::fmt;
use std::str::FromStr;

use crate::constants::UNSUPPORTED_SCHEME_MESSAGE;
use crate::error::ParseErrorReason;

/// A scheme supported by IIIF image services.
///
/// # Examples
///
/// ```
/// use iiif_uri::Scheme;
///
/// assert_eq!(Scheme::parse("https").unwrap(), Scheme::Https);
/// assert!(Scheme::parse("ftp").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Scheme {
    /// `http`
    Http,
    /// `https`
    Https,
}

impl Scheme {
    /// Classifies a scheme token, as reported by the URL parser (no trailing colon).
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorReason::UnsupportedScheme`] for anything other than
    /// `http` or `https`.
    pub fn parse(input: &str) -> Result<Self, ParseErrorReason> {
        match input {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(ParseErrorReason::UnsupportedScheme {
                value: other.to_string(),
                message: UNSUPPORTED_SCHEME_MESSAGE.to_string(),
            }),
        }
    }

    /// Returns the scheme token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = ParseErrorReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
