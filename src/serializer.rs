//! Canonical URIs for parsed requests.
//!
//! Serialization is the left inverse of parsing: every request this crate
//! produces renders to a URI that parses back to an equal request.

use url::Url;

use crate::constants::INFO_JSON;
use crate::error::ParseErrorReason;
use crate::quality::{Format, Quality};
use crate::region::Region;
use crate::request::{Location, Request};
use crate::rotation::Rotation;
use crate::size::Size;

/// Returns the canonical URI of a request.
///
/// Query strings are never part of the canonical form, and the identifier is
/// always percent-encoded as a single path segment.
///
/// # Examples
///
/// ```
/// use iiif_uri::{parse, to_uri};
///
/// let request = parse("  https://example.org/iiif/ark%3a%2f1/full/max/0/default.jpg?x=1 ").unwrap();
/// assert_eq!(
///     to_uri(&request).as_str(),
///     "https://example.org/iiif/ark%3A%2F1/full/max/0/default.jpg"
/// );
/// ```
#[must_use]
pub fn to_uri(request: &Request) -> Url {
    request.uri().clone()
}

pub(crate) fn information_uri(location: &Location) -> Result<Url, ParseErrorReason> {
    let mut text = base(location);
    text.push('/');
    text.push_str(INFO_JSON);
    canonicalize(text)
}

pub(crate) fn image_uri(
    location: &Location,
    region: &Region,
    size: &Size,
    rotation: &Rotation,
    quality: &Quality,
    format: &Format,
) -> Result<Url, ParseErrorReason> {
    let text = format!(
        "{}/{region}/{size}/{rotation}/{quality}.{format}",
        base(location)
    );
    canonicalize(text)
}

/// Renders `scheme://server[/prefix]/identifier`.
fn base(location: &Location) -> String {
    let mut text = format!("{}://{}", location.scheme, location.server);
    if let Some(prefix) = &location.prefix {
        if !prefix.starts_with('/') {
            text.push('/');
        }
        text.push_str(prefix);
    }
    text.push('/');
    text.push_str(&location.identifier.encoded());
    text
}

fn canonicalize(text: String) -> Result<Url, ParseErrorReason> {
    Url::parse(&text).map_err(|_| ParseErrorReason::malformed_uri(text))
}
