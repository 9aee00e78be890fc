//! Request dispatch and assembly.
//!
//! Structural problems (scheme, path length, the `quality.format` segment) are
//! collected and reported together. Once those pass, the rotation, size and
//! region segments are parsed right to left and the first bad one is reported
//! on its own.

use tracing::{debug, trace};
use url::Url;

use crate::config::ParseOptions;
use crate::constants::{
    INFO_JSON, MIN_IMAGE_REQUEST_SEGMENTS, MIN_INFORMATION_REQUEST_SEGMENTS,
    MISSING_IDENTIFIER_MESSAGE, NOT_ENOUGH_PARAMETERS_MESSAGE,
};
use crate::error::{ParseError, ParseErrorReason};
use crate::identifier::Identifier;
use crate::path::PathSegments;
use crate::quality::parse_quality_and_format;
use crate::region::Region;
use crate::request::{ImageInformationRequest, ImageRequest, Location, Request};
use crate::rotation::Rotation;
use crate::scheme::Scheme;
use crate::server::Server;
use crate::size::Size;

/// Parses an IIIF Image Request or Image Information Request URI with the
/// default [`ParseOptions`].
///
/// Surrounding whitespace is ignored and any query string is discarded. Paths
/// ending in `info.json` are Image Information Requests; everything else is
/// parsed as an Image Request.
///
/// # Errors
///
/// Returns a [`ParseError`] listing at least one [`ParseErrorReason`].
///
/// # Examples
///
/// ```
/// use iiif_uri::{parse, ParseErrorReason, Region, Request};
///
/// let request = parse("https://example.org/image-service/abcd1234/full/max/0/default.jpg").unwrap();
/// let Request::Image(image) = request else { panic!("expected an image request") };
/// assert_eq!(image.region(), Region::Full);
///
/// let err = parse("ftp://example.org/info.json").unwrap_err();
/// assert!(matches!(err.errors()[0], ParseErrorReason::UnsupportedScheme { .. }));
/// assert!(matches!(err.errors()[1], ParseErrorReason::MalformedPath { .. }));
/// ```
pub fn parse(input: &str) -> Result<Request, ParseError> {
    Parser::default().parse(input)
}

/// A configurable IIIF request parser.
///
/// The parser holds no state besides its options and may be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use iiif_uri::{ParseOptions, Parser, Size, SizeGrammar};
///
/// let parser = Parser::new(ParseOptions::new().with_size_grammar(SizeGrammar::Legacy));
/// let request = parser
///     .parse("https://example.org/abcd1234/full/full/0/default.jpg")
///     .unwrap();
/// assert_eq!(request.as_image().unwrap().size(), Size::Full);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub const fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Returns the parser's options.
    #[must_use]
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses an IIIF request URI.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] listing at least one [`ParseErrorReason`].
    pub fn parse(&self, input: &str) -> Result<Request, ParseError> {
        let input = input.trim_matches(is_c0_control_or_space);
        let result = self.dispatch(input);

        if let Err(err) = &result {
            debug!(
                uri = input,
                reasons = err.errors().len(),
                first = %err.first(),
                "rejected IIIF request URI"
            );
        }

        result
    }

    fn dispatch(&self, input: &str) -> Result<Request, ParseError> {
        let url = Url::parse(input)
            .map_err(|_| ParseError::single(input, ParseErrorReason::malformed_uri(input)))?;

        if url.path().ends_with(INFO_JSON) {
            trace!(path = url.path(), "dispatching image information request");
            parse_information_request(&url, input).map(Request::Information)
        } else {
            trace!(path = url.path(), "dispatching image request");
            self.parse_image_request(&url, input).map(Request::Image)
        }
    }

    fn parse_image_request(&self, url: &Url, input: &str) -> Result<ImageRequest, ParseError> {
        let fail = |reason: ParseErrorReason| ParseError::single(input, reason);

        let path = url.path();
        let mut segments = PathSegments::split(path);

        let scheme = Scheme::parse(url.scheme());
        let path_error = (segments.len() < MIN_IMAGE_REQUEST_SEGMENTS).then(|| {
            ParseErrorReason::malformed_path(path, Some(NOT_ENOUGH_PARAMETERS_MESSAGE))
        });
        let quality_and_format = parse_quality_and_format(segments.pop());

        let (scheme, (quality, format)) = match (scheme, path_error, quality_and_format) {
            (Ok(scheme), None, Ok(quality_and_format)) => (scheme, quality_and_format),
            (scheme, path_error, quality_and_format) => {
                let errors = scheme
                    .err()
                    .into_iter()
                    .chain(path_error)
                    .chain(quality_and_format.err().into_iter().flatten())
                    .collect();
                return Err(ParseError::collected(input, errors));
            }
        };

        let rotation = Rotation::parse(segments.pop()).map_err(fail)?;
        let size = Size::parse_with_grammar(segments.pop(), self.options.size_grammar())
            .map_err(fail)?;
        let region = Region::parse(segments.pop()).map_err(fail)?;
        let identifier = decode_identifier(segments.pop(), input)?;

        trace!(%region, %size, %rotation, "parsed image request");

        let location = Location {
            scheme,
            server: Server::from_url(url),
            prefix: segments.into_prefix(),
            identifier,
        };

        ImageRequest::from_parts(location, region, size, rotation, quality, format)
            .map_err(|_| fail(ParseErrorReason::malformed_uri(input)))
    }
}

fn parse_information_request(
    url: &Url,
    input: &str,
) -> Result<ImageInformationRequest, ParseError> {
    let path = url.path();
    let mut segments = PathSegments::split(path);

    let path_error = (segments.len() < MIN_INFORMATION_REQUEST_SEGMENTS)
        .then(|| ParseErrorReason::malformed_path(path, Some(MISSING_IDENTIFIER_MESSAGE)));

    let scheme = match (Scheme::parse(url.scheme()), path_error) {
        (Ok(scheme), None) => scheme,
        (Ok(_), Some(path_error)) => return Err(ParseError::single(input, path_error)),
        (Err(scheme_error), path_error) => {
            return Err(ParseError::new(input, scheme_error, path_error));
        }
    };

    // The trailing `info.json`.
    segments.pop();
    let identifier = decode_identifier(segments.pop(), input)?;

    let location = Location {
        scheme,
        server: Server::from_url(url),
        prefix: segments.into_prefix(),
        identifier,
    };

    ImageInformationRequest::from_location(location)
        .map_err(|_| ParseError::single(input, ParseErrorReason::malformed_uri(input)))
}

/// Escapes that do not decode to UTF-8 make the whole URI malformed.
fn decode_identifier(segment: &str, input: &str) -> Result<Identifier, ParseError> {
    Identifier::decode(segment)
        .ok_or_else(|| ParseError::single(input, ParseErrorReason::malformed_uri(input)))
}

/// What the URL standard strips from both ends of its input.
const fn is_c0_control_or_space(c: char) -> bool {
    c <= ' '
}
