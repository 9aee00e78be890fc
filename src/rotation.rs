//! Rotation selector of an Image Request.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BANG_MARKER, MAX_ROTATION_DEGREES};
use crate::error::ParseErrorReason;

/// Rotation applied to the scaled image, optionally after mirroring.
///
/// Degrees are kept exactly as written; fractional values are not rounded.
///
/// # Examples
///
/// ```
/// use iiif_uri::Rotation;
///
/// assert_eq!(Rotation::parse("90").unwrap(), Rotation::Clockwise { degrees: 90.0 });
/// assert_eq!(Rotation::parse("!180.5").unwrap(), Rotation::Mirrored { degrees: 180.5 });
/// assert!(Rotation::parse("361").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "tag", rename_all = "camelCase")
)]
pub enum Rotation {
    /// Clockwise rotation
    Clockwise {
        /// Degrees in `0..=360`
        degrees: f64,
    },
    /// Mirrored horizontally, then rotated clockwise
    Mirrored {
        /// Degrees in `0..=360`
        degrees: f64,
    },
}

impl Rotation {
    /// Parses a rotation path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorReason::BadRotation`] if the segment (after an
    /// optional leading `!`) is not a number, or is outside `0..=360`.
    pub fn parse(input: &str) -> Result<Self, ParseErrorReason> {
        let (mirrored, n) = match input.strip_prefix(BANG_MARKER) {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let degrees = n
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite())
            .ok_or_else(|| {
                ParseErrorReason::bad_rotation(
                    input,
                    format!("Error parsing '{n}' into degree of rotation"),
                )
            })?;

        if degrees < 0.0 {
            return Err(ParseErrorReason::bad_rotation(
                input,
                "The degree of rotation must be >= 0",
            ));
        }

        if degrees > MAX_ROTATION_DEGREES {
            return Err(ParseErrorReason::bad_rotation(
                input,
                "The degree of rotation must be <= 360",
            ));
        }

        // `-0` renders as `0`.
        let degrees = degrees.abs();

        Ok(if mirrored {
            Self::Mirrored { degrees }
        } else {
            Self::Clockwise { degrees }
        })
    }

    /// Returns the degree of rotation.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Clockwise { degrees } | Self::Mirrored { degrees } => *degrees,
        }
    }

    /// Returns true if the image is mirrored before rotation.
    #[must_use]
    pub const fn is_mirrored(&self) -> bool {
        matches!(self, Self::Mirrored { .. })
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::Clockwise { degrees: 0.0 }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clockwise { degrees } => write!(f, "{degrees}"),
            Self::Mirrored { degrees } => write!(f, "{BANG_MARKER}{degrees}"),
        }
    }
}

impl FromStr for Rotation {
    type Err = ParseErrorReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rotation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Deserialize;

        #[derive(serde::Deserialize)]
        #[serde(tag = "tag", rename_all = "camelCase")]
        enum RotationData {
            Clockwise { degrees: f64 },
            Mirrored { degrees: f64 },
        }

        let rotation = match RotationData::deserialize(deserializer)? {
            RotationData::Clockwise { degrees } => Self::Clockwise { degrees },
            RotationData::Mirrored { degrees } => Self::Mirrored { degrees },
        };
        Self::parse(&rotation.to_string()).map_err(serde::de::Error::custom)
    }
}
