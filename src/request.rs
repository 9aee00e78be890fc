//! Parsed IIIF requests.

use std::fmt;

use url::Url;

use crate::error::ParseErrorReason;
use crate::identifier::Identifier;
use crate::quality::{Format, Quality};
use crate::region::Region;
use crate::rotation::Rotation;
use crate::scheme::Scheme;
use crate::serializer;
use crate::server::Server;
use crate::size::Size;

/// Where an image lives: the part shared by both request kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub(crate) struct Location {
    pub(crate) scheme: Scheme,
    pub(crate) server: Server,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) prefix: Option<String>,
    pub(crate) identifier: Identifier,
}

/// An Image Information Request (`.../{identifier}/info.json`).
///
/// # Examples
///
/// ```
/// use iiif_uri::{parse, Request};
///
/// let Ok(Request::Information(request)) =
///     parse("https://example.org/image-service/abcd1234/info.json")
/// else {
///     panic!("expected an information request");
/// };
/// assert_eq!(request.prefix(), Some("/image-service"));
/// assert_eq!(request.identifier().as_str(), "abcd1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImageInformationRequest {
    uri: Url,
    #[cfg_attr(feature = "serde", serde(flatten))]
    location: Location,
}

impl ImageInformationRequest {
    pub(crate) fn from_location(location: Location) -> Result<Self, ParseErrorReason> {
        let uri = serializer::information_uri(&location)?;
        Ok(Self { uri, location })
    }

    /// Returns the canonical URI of this request.
    #[must_use]
    pub const fn uri(&self) -> &Url {
        &self.uri
    }

    /// Returns the scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.location.scheme
    }

    /// Returns the server.
    #[must_use]
    pub const fn server(&self) -> &Server {
        &self.location.server
    }

    /// Returns the path preceding the identifier, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.location.prefix.as_deref()
    }

    /// Returns the decoded identifier.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.location.identifier
    }
}

impl fmt::Display for ImageInformationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri.as_str())
    }
}

/// An Image Request
/// (`.../{identifier}/{region}/{size}/{rotation}/{quality}.{format}`).
///
/// # Examples
///
/// ```
/// use iiif_uri::{parse, Region, Request, Size};
///
/// let Ok(Request::Image(request)) =
///     parse("https://example.org/image-service/abcd1234/1,3,22,44/!12,34/90/color.png")
/// else {
///     panic!("expected an image request");
/// };
/// assert_eq!(request.region(), Region::Pixels { x: 1, y: 3, w: 22, h: 44 });
/// assert_eq!(request.size(), Size::Constrained { w: 12, h: 34, scaled: false });
/// assert_eq!(request.quality().as_str(), "color");
/// assert_eq!(request.format().as_str(), "png");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImageRequest {
    uri: Url,
    #[cfg_attr(feature = "serde", serde(flatten))]
    location: Location,
    region: Region,
    size: Size,
    rotation: Rotation,
    quality: Quality,
    format: Format,
}

impl ImageRequest {
    pub(crate) fn from_parts(
        location: Location,
        region: Region,
        size: Size,
        rotation: Rotation,
        quality: Quality,
        format: Format,
    ) -> Result<Self, ParseErrorReason> {
        let uri = serializer::image_uri(&location, &region, &size, &rotation, &quality, &format)?;
        Ok(Self {
            uri,
            location,
            region,
            size,
            rotation,
            quality,
            format,
        })
    }

    /// Returns the canonical URI of this request.
    #[must_use]
    pub const fn uri(&self) -> &Url {
        &self.uri
    }

    /// Returns the scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.location.scheme
    }

    /// Returns the server.
    #[must_use]
    pub const fn server(&self) -> &Server {
        &self.location.server
    }

    /// Returns the path preceding the identifier, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.location.prefix.as_deref()
    }

    /// Returns the decoded identifier.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.location.identifier
    }

    /// Returns the region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the rotation.
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns the quality.
    #[must_use]
    pub const fn quality(&self) -> &Quality {
        &self.quality
    }

    /// Returns the format.
    #[must_use]
    pub const fn format(&self) -> &Format {
        &self.format
    }
}

impl fmt::Display for ImageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri.as_str())
    }
}

/// A successfully parsed IIIF request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "tag")
)]
pub enum Request {
    /// A request for image pixels
    #[cfg_attr(feature = "serde", serde(rename = "imageRequest"))]
    Image(ImageRequest),
    /// A request for image metadata
    #[cfg_attr(feature = "serde", serde(rename = "imageInformationRequest"))]
    Information(ImageInformationRequest),
}

impl Request {
    /// Returns the canonical URI of the request.
    #[must_use]
    pub const fn uri(&self) -> &Url {
        match self {
            Self::Image(request) => request.uri(),
            Self::Information(request) => request.uri(),
        }
    }

    /// Returns the decoded identifier.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        match self {
            Self::Image(request) => request.identifier(),
            Self::Information(request) => request.identifier(),
        }
    }

    /// Returns the image request, if this is one.
    #[must_use]
    pub const fn as_image(&self) -> Option<&ImageRequest> {
        match self {
            Self::Image(request) => Some(request),
            Self::Information(_) => None,
        }
    }

    /// Returns the information request, if this is one.
    #[must_use]
    pub const fn as_information(&self) -> Option<&ImageInformationRequest> {
        match self {
            Self::Information(request) => Some(request),
            Self::Image(_) => None,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri().as_str())
    }
}

impl From<ImageRequest> for Request {
    fn from(request: ImageRequest) -> Self {
        Self::Image(request)
    }
}

impl From<ImageInformationRequest> for Request {
    fn from(request: ImageInformationRequest) -> Self {
        Self::Information(request)
    }
}
