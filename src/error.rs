//! Error types for IIIF URI parsing.

use thiserror::Error;

/// Errors that can occur when parsing an IIIF request URI.
///
/// A `ParseError` always carries at least one [`ParseErrorReason`]. Structural
/// problems (scheme, path shape, quality and format) are collected together,
/// while a bad region, size or rotation is reported on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("failed to parse IIIF URI '{uri}': {}", join_reasons(.errors))]
pub struct ParseError {
    /// The input that failed to parse, trimmed of surrounding whitespace
    uri: String,
    /// Every reason the input was rejected, in detection order
    errors: Vec<ParseErrorReason>,
}

impl ParseError {
    /// Creates an error from its first reason and any further reasons.
    #[must_use]
    pub fn new(
        uri: impl Into<String>,
        first: ParseErrorReason,
        rest: impl IntoIterator<Item = ParseErrorReason>,
    ) -> Self {
        let mut errors = vec![first];
        errors.extend(rest);
        Self {
            uri: uri.into(),
            errors,
        }
    }

    /// Creates an error carrying a single reason.
    #[must_use]
    pub fn single(uri: impl Into<String>, reason: ParseErrorReason) -> Self {
        Self::new(uri, reason, [])
    }

    /// Builds an error from reasons the caller has already accumulated.
    pub(crate) fn collected(uri: &str, errors: Vec<ParseErrorReason>) -> Self {
        debug_assert!(!errors.is_empty(), "a parse error needs at least one reason");
        Self {
            uri: uri.to_string(),
            errors,
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the reasons for rejection. Never empty.
    #[must_use]
    pub fn errors(&self) -> &[ParseErrorReason] {
        &self.errors
    }

    /// Returns the first reason for rejection.
    #[must_use]
    pub fn first(&self) -> &ParseErrorReason {
        &self.errors[0]
    }
}

/// A single reason an IIIF request URI was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "tag", rename_all = "camelCase")
)]
pub enum ParseErrorReason {
    /// The input is not a URI, or its port is not a number in `0..=65535`
    #[cfg_attr(feature = "serde", serde(rename = "malformedURI"))]
    #[error("malformed URI '{value}'")]
    MalformedUri {
        /// The rejected input
        value: String,
    },
    /// The scheme is neither `http` nor `https`
    #[error("unsupported scheme '{value}': {message}")]
    UnsupportedScheme {
        /// The scheme that was found
        value: String,
        /// Explanation of the supported schemes
        message: String,
    },
    /// The path has too few segments, or the final segment is not `quality.format`
    #[error("malformed path '{value}'{}", describe(.message.as_deref()))]
    MalformedPath {
        /// The offending path or segment
        value: String,
        /// Explanation, when one is available
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        message: Option<String>,
    },
    /// The final segment has no quality before the `.`
    #[error("missing quality in '{value}'")]
    MissingQuality {
        /// The `quality.format` segment
        value: String,
    },
    /// The final segment has no format after the `.`
    #[error("missing format in '{value}'")]
    MissingFormat {
        /// The `quality.format` segment
        value: String,
    },
    /// The region segment does not match any region form
    #[error("bad region '{value}'{}", describe(.message.as_deref()))]
    BadRegion {
        /// The region segment
        value: String,
        /// Explanation, when one is available
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        message: Option<String>,
    },
    /// The size segment does not match any size form
    #[error("bad size '{value}'{}", describe(.message.as_deref()))]
    BadSize {
        /// The size segment
        value: String,
        /// Explanation, when one is available
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        message: Option<String>,
    },
    /// The rotation segment is not a degree of rotation in `0..=360`
    #[error("bad rotation '{value}'{}", describe(.message.as_deref()))]
    BadRotation {
        /// The rotation segment
        value: String,
        /// Explanation, when one is available
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        message: Option<String>,
    },
}

impl ParseErrorReason {
    /// Returns the offending value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::MalformedUri { value }
            | Self::UnsupportedScheme { value, .. }
            | Self::MalformedPath { value, .. }
            | Self::MissingQuality { value }
            | Self::MissingFormat { value }
            | Self::BadRegion { value, .. }
            | Self::BadSize { value, .. }
            | Self::BadRotation { value, .. } => value,
        }
    }

    /// Returns the explanatory message, if the reason carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::UnsupportedScheme { message, .. } => Some(message),
            Self::MalformedPath { message, .. }
            | Self::BadRegion { message, .. }
            | Self::BadSize { message, .. }
            | Self::BadRotation { message, .. } => message.as_deref(),
            Self::MalformedUri { .. } | Self::MissingQuality { .. } | Self::MissingFormat { .. } => {
                None
            }
        }
    }

    pub(crate) fn malformed_uri(value: impl Into<String>) -> Self {
        Self::MalformedUri {
            value: value.into(),
        }
    }

    pub(crate) fn malformed_path(value: impl Into<String>, message: Option<&str>) -> Self {
        Self::MalformedPath {
            value: value.into(),
            message: message.map(str::to_string),
        }
    }

    pub(crate) fn bad_size(value: impl Into<String>, message: Option<String>) -> Self {
        Self::BadSize {
            value: value.into(),
            message,
        }
    }

    pub(crate) fn bad_rotation(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRotation {
            value: value.into(),
            message: Some(message.into()),
        }
    }
}

fn describe(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}

fn join_reasons(errors: &[ParseErrorReason]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
