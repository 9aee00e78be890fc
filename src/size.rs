//! Size selector of an Image Request.

use std::fmt;
use std::str::FromStr;

use crate::config::SizeGrammar;
use crate::constants::{
    BANG_MARKER, PERCENT_PREFIX, SIZE_FULL_REMOVED_MESSAGE, UNPARSEABLE_SIZE_MESSAGE,
    UPSCALE_MARKER,
};
use crate::error::ParseErrorReason;

/// The dimensions the extracted region is scaled to.
///
/// `scaled` records a leading `^`, which allows the result to be larger than
/// the extracted region.
///
/// # Examples
///
/// ```
/// use iiif_uri::Size;
///
/// assert_eq!(Size::parse("max").unwrap(), Size::Max { scaled: false });
/// assert_eq!(
///     Size::parse("^!12,34").unwrap(),
///     Size::Constrained { w: 12, h: 34, scaled: true }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "tag", rename_all = "camelCase")
)]
pub enum Size {
    /// The largest size the server supports
    Max {
        /// Up-scaling allowed
        scaled: bool,
    },
    /// The full size of the region; only produced by [`SizeGrammar::Legacy`]
    Full,
    /// A percentage of the region's dimensions
    Percentage {
        /// Percentage, at least 0
        percentage: f64,
        /// Up-scaling allowed
        scaled: bool,
    },
    /// An exact width, height chosen to keep the aspect ratio
    Width {
        /// Width, at least 1
        w: u64,
        /// Up-scaling allowed
        scaled: bool,
    },
    /// An exact height, width chosen to keep the aspect ratio
    Height {
        /// Height, at least 1
        h: u64,
        /// Up-scaling allowed
        scaled: bool,
    },
    /// An exact width and height, possibly distorting the image
    WidthAndHeight {
        /// Width, at least 1
        w: u64,
        /// Height, at least 1
        h: u64,
        /// Up-scaling allowed
        scaled: bool,
    },
    /// The largest size fitting within `w` by `h` that keeps the aspect ratio
    Constrained {
        /// Maximum width, at least 1
        w: u64,
        /// Maximum height, at least 1
        h: u64,
        /// Up-scaling allowed
        scaled: bool,
    },
}

impl Size {
    /// Parses a size path segment using the current grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorReason::BadSize`] if the segment matches no size form.
    pub fn parse(input: &str) -> Result<Self, ParseErrorReason> {
        Self::parse_with_grammar(input, SizeGrammar::Current)
    }

    /// Parses a size path segment using the given grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorReason::BadSize`] if the segment matches no size form.
    pub fn parse_with_grammar(input: &str, grammar: SizeGrammar) -> Result<Self, ParseErrorReason> {
        let (scaled, body) = match input.strip_prefix(UPSCALE_MARKER) {
            Some(rest) if grammar.allows_upscaling() => (true, rest),
            _ => (false, input),
        };

        // pct:n
        if let Some(pct) = body.strip_prefix(PERCENT_PREFIX) {
            // `-0` renders as `0`.
            let percentage = parse_number(input, pct, parse_real, 0.0)?.abs();
            return Ok(Self::Percentage { percentage, scaled });
        }

        // w,
        if let Some(w) = body.strip_suffix(',').filter(|w| !w.is_empty()) {
            let w = parse_dimension(input, w)?;
            return Ok(Self::Width { w, scaled });
        }

        // ,h
        if let Some(h) = body.strip_prefix(',') {
            let h = parse_dimension(input, h)?;
            return Ok(Self::Height { h, scaled });
        }

        // !w,h
        if let Some(pair) = body.strip_prefix(BANG_MARKER) {
            if !pair.contains(',') {
                return Err(unparseable(input));
            }
            let (w, h) = parse_pair(input, pair)?;
            return Ok(Self::Constrained { w, h, scaled });
        }

        // w,h
        if body.contains(',') {
            let (w, h) = parse_pair(input, body)?;
            return Ok(Self::WidthAndHeight { w, h, scaled });
        }

        match body {
            "max" => Ok(Self::Max { scaled }),
            "full" if grammar.allows_full() => Ok(Self::Full),
            "full" => Err(ParseErrorReason::bad_size(
                input,
                Some(SIZE_FULL_REMOVED_MESSAGE.to_string()),
            )),
            _ => Err(unparseable(input)),
        }
    }

    /// Returns true if the size allows up-scaling.
    #[must_use]
    pub const fn scaled(&self) -> bool {
        match self {
            Self::Full => false,
            Self::Max { scaled }
            | Self::Percentage { scaled, .. }
            | Self::Width { scaled, .. }
            | Self::Height { scaled, .. }
            | Self::WidthAndHeight { scaled, .. }
            | Self::Constrained { scaled, .. } => *scaled,
        }
    }
}

fn unparseable(segment: &str) -> ParseErrorReason {
    ParseErrorReason::bad_size(segment, Some(UNPARSEABLE_SIZE_MESSAGE.to_string()))
}

fn parse_real(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_integer(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}

/// Parses one number out of `segment`.
///
/// A token that is not a number is reported with a message naming it; a number
/// below `minimum` is reported without one. Either way the error carries the
/// whole segment.
fn parse_number<T: PartialOrd>(
    segment: &str,
    token: &str,
    parse: fn(&str) -> Option<T>,
    minimum: T,
) -> Result<T, ParseErrorReason> {
    let n = parse(token).ok_or_else(|| {
        ParseErrorReason::bad_size(segment, Some(format!("Error parsing '{token}'")))
    })?;

    if n < minimum {
        return Err(ParseErrorReason::bad_size(segment, None));
    }

    Ok(n)
}

fn parse_dimension(segment: &str, token: &str) -> Result<u64, ParseErrorReason> {
    parse_number(segment, token, parse_integer, 1).map(i64::unsigned_abs)
}

/// Parses `w,h`. A wrong number of values is reported against `pair` itself.
fn parse_pair(segment: &str, pair: &str) -> Result<(u64, u64), ParseErrorReason> {
    let tokens: Vec<&str> = pair.split(',').collect();
    let [w, h] = tokens.as_slice() else {
        return Err(ParseErrorReason::bad_size(
            pair,
            Some(format!(
                "Error parsing size: expecting 2 values, got {}",
                tokens.len()
            )),
        ));
    };

    Ok((parse_dimension(segment, w)?, parse_dimension(segment, h)?))
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scaled() {
            write!(f, "{UPSCALE_MARKER}")?;
        }
        match self {
            Self::Max { .. } => f.write_str("max"),
            Self::Full => f.write_str("full"),
            Self::Percentage { percentage, .. } => write!(f, "{PERCENT_PREFIX}{percentage}"),
            Self::Width { w, .. } => write!(f, "{w},"),
            Self::Height { h, .. } => write!(f, ",{h}"),
            Self::WidthAndHeight { w, h, .. } => write!(f, "{w},{h}"),
            Self::Constrained { w, h, .. } => write!(f, "{BANG_MARKER}{w},{h}"),
        }
    }
}

impl FromStr for Size {
    type Err = ParseErrorReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Size {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Deserialize;

        #[derive(serde::Deserialize)]
        #[serde(tag = "tag", rename_all = "camelCase")]
        enum SizeData {
            Max {
                #[serde(default)]
                scaled: bool,
            },
            Full,
            Percentage {
                percentage: f64,
                #[serde(default)]
                scaled: bool,
            },
            Width {
                w: u64,
                #[serde(default)]
                scaled: bool,
            },
            Height {
                h: u64,
                #[serde(default)]
                scaled: bool,
            },
            WidthAndHeight {
                w: u64,
                h: u64,
                #[serde(default)]
                scaled: bool,
            },
            Constrained {
                w: u64,
                h: u64,
                #[serde(default)]
                scaled: bool,
            },
        }

        let size = match SizeData::deserialize(deserializer)? {
            SizeData::Max { scaled } => Self::Max { scaled },
            SizeData::Full => Self::Full,
            SizeData::Percentage { percentage, scaled } => Self::Percentage { percentage, scaled },
            SizeData::Width { w, scaled } => Self::Width { w, scaled },
            SizeData::Height { h, scaled } => Self::Height { h, scaled },
            SizeData::WidthAndHeight { w, h, scaled } => Self::WidthAndHeight { w, h, scaled },
            SizeData::Constrained { w, h, scaled } => Self::Constrained { w, h, scaled },
        };
        let grammar = if matches!(size, Self::Full) {
            SizeGrammar::Legacy
        } else {
            SizeGrammar::Current
        };
        Self::parse_with_grammar(&size.to_string(), grammar).map_err(serde::de::Error::custom)
    }
}
