//! Typestate builder for constructing requests programmatically.
//!
//! Each state carries the components set so far, so a request can only be
//! built once the scheme, server and identifier are known.

use url::Url;

use crate::config::{ParseOptions, SizeGrammar};
use crate::error::{ParseError, ParseErrorReason};
use crate::identifier::Identifier;
use crate::parser::Parser;
use crate::quality::{Format, Quality};
use crate::region::Region;
use crate::request::{ImageInformationRequest, ImageRequest, Location, Request};
use crate::rotation::Rotation;
use crate::scheme::Scheme;
use crate::server::Server;
use crate::size::Size;

/// Marker: nothing set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// State: scheme and server have been set.
#[derive(Debug, Clone)]
pub struct HasServer {
    scheme: Scheme,
    server: Server,
}

/// State: scheme, server and identifier are set, ready to build.
#[derive(Debug, Clone)]
pub struct Ready {
    scheme: Scheme,
    server: Server,
    identifier: Identifier,
}

/// A typestate builder for [`ImageRequest`] and [`ImageInformationRequest`].
///
/// Image parameters default to the whole image at the largest size, unrotated,
/// in the default quality as JPEG (`full/max/0/default.jpg`).
///
/// # Examples
///
/// ```
/// use iiif_uri::{RequestBuilder, Scheme, Server, Size};
///
/// let request = RequestBuilder::new()
///     .server(Scheme::Https, Server::new("example.org", None))
///     .prefix("/iiif")
///     .identifier("ark:/53355/cl010066723")
///     .size(Size::Width { w: 200, scaled: false })
///     .build_image()
///     .unwrap();
///
/// assert_eq!(
///     request.uri().as_str(),
///     "https://example.org/iiif/ark%3A%2F53355%2Fcl010066723/full/200,/0/default.jpg"
/// );
/// ```
///
/// Building before the identifier is set does not compile:
///
/// ```compile_fail
/// use iiif_uri::{RequestBuilder, Scheme, Server};
///
/// let request = RequestBuilder::new()
///     .server(Scheme::Https, Server::new("example.org", None))
///     .build_information();
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder<State = Empty> {
    state: State,
    prefix: Option<String>,
    region: Region,
    size: Size,
    rotation: Rotation,
    quality: Quality,
    format: Format,
}

impl RequestBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Empty,
            prefix: None,
            region: Region::Full,
            size: Size::Max { scaled: false },
            rotation: Rotation::default(),
            quality: Quality::default_quality(),
            format: Format::jpg(),
        }
    }

    /// Sets the scheme and server and advances to the [`HasServer`] state.
    #[must_use]
    pub fn server(self, scheme: Scheme, server: Server) -> RequestBuilder<HasServer> {
        self.map_state(|Empty| HasServer { scheme, server })
    }
}

impl Default for RequestBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder<HasServer> {
    /// Sets the decoded identifier and advances to the [`Ready`] state.
    #[must_use]
    pub fn identifier(self, identifier: impl Into<Identifier>) -> RequestBuilder<Ready> {
        let identifier = identifier.into();
        self.map_state(|HasServer { scheme, server }| Ready {
            scheme,
            server,
            identifier,
        })
    }
}

impl RequestBuilder<Ready> {
    /// Builds an Image Information Request.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the components do not form a valid URI
    /// (e.g. the host contains spaces), or if the rendered URI does not parse
    /// back to the same request (e.g. the identifier is `..` or the prefix
    /// contains `?`).
    pub fn build_information(self) -> Result<ImageInformationRequest, ParseError> {
        let (location, ..) = self.into_parts();
        let request = ImageInformationRequest::from_location(location).map_err(wrap)?;

        let parsed = reparse(request.uri(), SizeGrammar::Current)?;
        if parsed.as_information() == Some(&request) {
            Ok(request)
        } else {
            Err(mismatch(request.uri()))
        }
    }

    /// Builds an Image Request.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the components do not form a valid URI
    /// (e.g. the host contains spaces), or if the rendered URI does not parse
    /// back to the same request (e.g. the identifier is `..`).
    pub fn build_image(self) -> Result<ImageRequest, ParseError> {
        let (location, region, size, rotation, quality, format) = self.into_parts();
        let request = ImageRequest::from_parts(location, region, size, rotation, quality, format)
            .map_err(wrap)?;

        // `full` only exists in the legacy grammar, which has no `^`.
        let grammar = if matches!(request.size(), Size::Full) {
            SizeGrammar::Legacy
        } else {
            SizeGrammar::Current
        };
        let parsed = reparse(request.uri(), grammar)?;
        if parsed.as_image() == Some(&request) {
            Ok(request)
        } else {
            Err(mismatch(request.uri()))
        }
    }

    fn into_parts(self) -> (Location, Region, Size, Rotation, Quality, Format) {
        let Ready {
            scheme,
            server,
            identifier,
        } = self.state;
        let location = Location {
            scheme,
            server,
            prefix: self.prefix,
            identifier,
        };
        (
            location,
            self.region,
            self.size,
            self.rotation,
            self.quality,
            self.format,
        )
    }
}

impl<State> RequestBuilder<State> {
    /// Sets the path preceding the identifier. A missing leading `/` is added.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.starts_with('/') {
            prefix.insert(0, '/');
        }
        self.prefix = Some(prefix);
        self
    }

    /// Sets the region. Default: [`Region::Full`].
    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Sets the size. Default: `max`.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the rotation. Default: 0 degrees clockwise.
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the quality. Default: `default`.
    #[must_use]
    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Sets the format. Default: `jpg`.
    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    fn map_state<Next>(self, advance: impl FnOnce(State) -> Next) -> RequestBuilder<Next> {
        RequestBuilder {
            state: advance(self.state),
            prefix: self.prefix,
            region: self.region,
            size: self.size,
            rotation: self.rotation,
            quality: self.quality,
            format: self.format,
        }
    }
}

fn wrap(reason: ParseErrorReason) -> ParseError {
    ParseError::single(reason.value().to_string(), reason)
}

/// Parses a freshly rendered URI with the given size grammar.
fn reparse(uri: &Url, grammar: SizeGrammar) -> Result<Request, ParseError> {
    Parser::new(ParseOptions::new().with_size_grammar(grammar)).parse(uri.as_str())
}

/// The rendered URI parses, but to a different request.
fn mismatch(uri: &Url) -> ParseError {
    ParseError::single(uri.as_str(), ParseErrorReason::malformed_uri(uri.as_str()))
}
