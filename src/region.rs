//! Region selector of an Image Request.

use std::fmt;
use std::str::FromStr;

use crate::constants::{PERCENT_PREFIX, REGION_COMMAS};
use crate::error::ParseErrorReason;

/// The rectangular portion of the source image to return.
///
/// # Examples
///
/// ```
/// use iiif_uri::Region;
///
/// assert_eq!(Region::parse("full").unwrap(), Region::Full);
/// assert_eq!(
///     Region::parse("1,3,22,44").unwrap(),
///     Region::Pixels { x: 1, y: 3, w: 22, h: 44 }
/// );
/// assert!(Region::parse("1,2,3").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "tag", rename_all = "camelCase")
)]
pub enum Region {
    /// The complete image
    Full,
    /// The largest centred square
    Square,
    /// A rectangle in pixels of the full image
    Pixels {
        /// Left edge
        x: u64,
        /// Top edge
        y: u64,
        /// Width
        w: u64,
        /// Height
        h: u64,
    },
    /// A rectangle in percent of the full image's dimensions
    Percentages {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        w: f64,
        /// Height
        h: f64,
    },
}

impl Region {
    /// Parses a region path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorReason::BadRegion`] if the segment is not `full`,
    /// `square`, `x,y,w,h` or `pct:x,y,w,h` with four non-negative numbers.
    pub fn parse(input: &str) -> Result<Self, ParseErrorReason> {
        match input {
            "full" => return Ok(Self::Full),
            "square" => return Ok(Self::Square),
            _ => {}
        }

        let bad = || ParseErrorReason::BadRegion {
            value: input.to_string(),
            message: None,
        };

        if input.matches(',').count() != REGION_COMMAS {
            return Err(bad());
        }

        if let Some(rest) = input.strip_prefix(PERCENT_PREFIX) {
            // `-0` renders as `0`.
            let [x, y, w, h] = Self::components(rest, |n| {
                n.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .map(f64::abs)
            })
            .ok_or_else(bad)?;
            Ok(Self::Percentages { x, y, w, h })
        } else {
            let [x, y, w, h] = Self::components(input, |n| n.parse::<u64>().ok()).ok_or_else(bad)?;
            Ok(Self::Pixels { x, y, w, h })
        }
    }

    /// Parses exactly four comma-separated numbers, all of which must succeed.
    fn components<T>(input: &str, parse: impl Fn(&str) -> Option<T>) -> Option<[T; 4]> {
        let mut parts = input.split(',').map(parse);
        let values = [parts.next()??, parts.next()??, parts.next()??, parts.next()??];
        parts.next().is_none().then_some(values)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Square => f.write_str("square"),
            Self::Pixels { x, y, w, h } => write!(f, "{x},{y},{w},{h}"),
            Self::Percentages { x, y, w, h } => write!(f, "{PERCENT_PREFIX}{x},{y},{w},{h}"),
        }
    }
}

impl FromStr for Region {
    type Err = ParseErrorReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Deserialize;

        #[derive(serde::Deserialize)]
        #[serde(tag = "tag", rename_all = "camelCase")]
        enum RegionData {
            Full,
            Square,
            Pixels { x: u64, y: u64, w: u64, h: u64 },
            Percentages { x: f64, y: f64, w: f64, h: f64 },
        }

        let region = match RegionData::deserialize(deserializer)? {
            RegionData::Full => Self::Full,
            RegionData::Square => Self::Square,
            RegionData::Pixels { x, y, w, h } => Self::Pixels { x, y, w, h },
            RegionData::Percentages { x, y, w, h } => Self::Percentages { x, y, w, h },
        };
        Self::parse(&region.to_string()).map_err(serde::de::Error::custom)
    }
}
