//! Quality and format of an Image Request, taken from the final `quality.format` segment.

use std::fmt;

use crate::error::ParseErrorReason;

/// Characters that would split the `quality.format` segment or end the path.
const RESERVED: [char; 4] = ['.', '/', '?', '#'];

/// Qualities every IIIF image service understands.
const WELL_KNOWN_QUALITIES: [&str; 4] = ["color", "gray", "bitonal", "default"];

/// The colour quality of the returned image.
///
/// Besides the well-known values servers may define their own, so any
/// non-empty token without `.`, `/`, `?` or `#` is accepted.
///
/// # Examples
///
/// ```
/// use iiif_uri::Quality;
///
/// assert!(Quality::new("gray").unwrap().is_well_known());
/// assert!(!Quality::new("sepia").unwrap().is_well_known());
/// assert!(Quality::new("").is_none());
/// assert!(Quality::new("a.b").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(transparent)
)]
pub struct Quality(String);

impl Quality {
    /// Creates a quality, or `None` if the token is empty or contains `.`,
    /// `/`, `?` or `#`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        is_token(&value).then_some(Self(value))
    }

    /// The server's default quality.
    #[must_use]
    pub fn default_quality() -> Self {
        Self("default".to_string())
    }

    /// Full colour.
    #[must_use]
    pub fn color() -> Self {
        Self("color".to_string())
    }

    /// Greyscale.
    #[must_use]
    pub fn gray() -> Self {
        Self("gray".to_string())
    }

    /// Black and white.
    #[must_use]
    pub fn bitonal() -> Self {
        Self("bitonal".to_string())
    }

    /// Returns the quality token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for `color`, `gray`, `bitonal` and `default`.
    #[must_use]
    pub fn is_well_known(&self) -> bool {
        WELL_KNOWN_QUALITIES.contains(&self.0.as_str())
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Quality {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The file extension of the returned image, e.g. `jpg` or `png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(transparent)
)]
pub struct Format(String);

impl Format {
    /// Creates a format, or `None` if the token is empty or contains `.`,
    /// `/`, `?` or `#`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        is_token(&value).then_some(Self(value))
    }

    /// JPEG, the format every service supports.
    #[must_use]
    pub fn jpg() -> Self {
        Self("jpg".to_string())
    }

    /// Returns the format token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Format {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_token(value: &str) -> bool {
    !value.is_empty() && !value.contains(RESERVED)
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Quality {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Deserialize;

        let s = String::deserialize(deserializer)?;
        Self::new(s).ok_or_else(|| serde::de::Error::custom("invalid quality token"))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Format {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Deserialize;

        let s = String::deserialize(deserializer)?;
        Self::new(s).ok_or_else(|| serde::de::Error::custom("invalid format token"))
    }
}

/// Splits the final `quality.format` segment of an Image Request.
///
/// # Errors
///
/// A segment without exactly one `.` is a [`ParseErrorReason::MalformedPath`].
/// A missing quality or format is reported as [`ParseErrorReason::MissingQuality`]
/// or [`ParseErrorReason::MissingFormat`]; when both halves are checked each
/// failure is listed.
///
/// # Examples
///
/// ```
/// use iiif_uri::parse_quality_and_format;
///
/// let (quality, format) = parse_quality_and_format("color.png").unwrap();
/// assert_eq!(quality.as_str(), "color");
/// assert_eq!(format.as_str(), "png");
/// assert!(parse_quality_and_format("default.jpg.png").is_err());
/// ```
pub fn parse_quality_and_format(
    segment: &str,
) -> Result<(Quality, Format), Vec<ParseErrorReason>> {
    let Some(dot) = segment.find('.') else {
        return Err(vec![ParseErrorReason::malformed_path(segment, None)]);
    };

    if dot == 0 {
        return Err(vec![ParseErrorReason::MissingQuality {
            value: segment.to_string(),
        }]);
    }

    if dot == segment.len() - 1 {
        return Err(vec![ParseErrorReason::MissingFormat {
            value: segment.to_string(),
        }]);
    }

    let parts: Vec<&str> = segment.split('.').collect();
    let [quality, format] = parts.as_slice() else {
        return Err(vec![ParseErrorReason::malformed_path(segment, None)]);
    };

    let quality = Quality::new(*quality);
    let format = Format::new(*format);

    match (quality, format) {
        (Some(quality), Some(format)) => Ok((quality, format)),
        (quality, format) => {
            let mut errors = Vec::with_capacity(2);
            if quality.is_none() {
                errors.push(ParseErrorReason::MissingQuality {
                    value: segment.to_string(),
                });
            }
            if format.is_none() {
                errors.push(ParseErrorReason::MissingFormat {
                    value: segment.to_string(),
                });
            }
            Err(errors)
        }
    }
}
