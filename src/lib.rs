//! Parser and serializer for IIIF Image API request URIs.
//!
//! This crate decomposes IIIF Image API URIs into structured requests, or into
//! a list of reasons the URI was rejected, and renders requests back into
//! canonical URIs.
//!
//! # Overview
//!
//! Two kinds of request are recognised:
//!
//! ```text
//! {scheme}://{server}[/{prefix}]/{identifier}/info.json
//! {scheme}://{server}[/{prefix}]/{identifier}/{region}/{size}/{rotation}/{quality}.{format}
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use iiif_uri::{parse, Region, Request, Rotation, Size};
//!
//! let request = parse(
//!     "https://example.org/image-service/abcd1234/1,3,22,44/!12,34/90/color.png"
//! ).unwrap();
//!
//! let Request::Image(image) = request else { panic!("expected an image request") };
//! assert_eq!(image.prefix(), Some("/image-service"));
//! assert_eq!(image.identifier().as_str(), "abcd1234");
//! assert_eq!(image.region(), Region::Pixels { x: 1, y: 3, w: 22, h: 44 });
//! assert_eq!(image.size(), Size::Constrained { w: 12, h: 34, scaled: false });
//! assert_eq!(image.rotation(), Rotation::Clockwise { degrees: 90.0 });
//! ```
//!
//! # Errors
//!
//! A rejected URI yields a [`ParseError`] with one or more
//! [`ParseErrorReason`]s. An unsupported scheme, a path with too few segments
//! and a bad `quality.format` segment are all reported together; a bad
//! rotation, size or region is reported alone, checked in that order.
//!
//! ```rust
//! use iiif_uri::{parse, ParseErrorReason};
//!
//! let err = parse("https://example.org:FOO/image-service/info.json").unwrap_err();
//! assert!(matches!(err.errors(), [ParseErrorReason::MalformedUri { .. }]));
//! ```
//!
//! # Builder Pattern
//!
//! ```rust
//! use iiif_uri::{RequestBuilder, Scheme, Server};
//!
//! let info = RequestBuilder::new()
//!     .server(Scheme::Https, Server::new("example.org", None))
//!     .identifier("abcd1234")
//!     .build_information()
//!     .unwrap();
//!
//! assert_eq!(info.uri().as_str(), "https://example.org/abcd1234/info.json");
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod config;
mod constants;
mod error;
mod identifier;
mod parser;
mod path;
pub mod prelude;
mod quality;
mod region;
mod request;
mod rotation;
mod scheme;
mod serializer;
mod server;
mod size;

pub use builder::{Empty, HasServer, Ready, RequestBuilder};
pub use config::{ParseOptions, SizeGrammar};
pub use constants::{
    INFO_JSON, MAX_ROTATION_DEGREES, MIN_IMAGE_REQUEST_SEGMENTS, MIN_INFORMATION_REQUEST_SEGMENTS,
    PERCENT_PREFIX,
};
pub use error::{ParseError, ParseErrorReason};
pub use identifier::Identifier;
pub use parser::{Parser, parse};
pub use quality::{Format, Quality, parse_quality_and_format};
pub use region::Region;
pub use request::{ImageInformationRequest, ImageRequest, Request};
pub use rotation::Rotation;
pub use scheme::Scheme;
pub use serializer::to_uri;
pub use server::Server;
pub use size::Size;
pub use url::Url;
