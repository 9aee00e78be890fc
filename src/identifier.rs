//! Identifier of the source image.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped when an identifier is written into a path segment.
///
/// Everything except ASCII alphanumerics and `-_.!~*'()`, so `/`, `:` and `%`
/// inside an identifier never leak into the URI structure.
const IDENTIFIER_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// An opaque identifier naming the source image, stored percent-decoded.
///
/// Once decoded an identifier may contain path-like characters, e.g. an ARK
/// such as `ark:/53355/cl010066723`.
///
/// # Examples
///
/// ```
/// use iiif_uri::Identifier;
///
/// let id = Identifier::decode("ark%3A%2F53355%2Fcl010066723").unwrap();
/// assert_eq!(id.as_str(), "ark:/53355/cl010066723");
/// assert_eq!(id.encoded(), "ark%3A%2F53355%2Fcl010066723");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Identifier(String);

impl Identifier {
    /// Creates an identifier from its decoded form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Decodes a percent-encoded path segment.
    ///
    /// Returns `None` if the escapes do not decode to UTF-8.
    #[must_use]
    pub fn decode(segment: &str) -> Option<Self> {
        percent_decode_str(segment)
            .decode_utf8()
            .ok()
            .map(|decoded| Self(decoded.into_owned()))
    }

    /// Returns the decoded identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier percent-encoded for use as a single path segment.
    #[must_use]
    pub fn encoded(&self) -> String {
        utf8_percent_encode(&self.0, IDENTIFIER_ENCODE_SET).to_string()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
