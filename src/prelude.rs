//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use iiif_uri::prelude::*;
//!
//! let request = parse("https://example.org/abcd1234/info.json").unwrap();
//! assert!(matches!(request, Request::Information(_)));
//! ```
//!
//! Builder state markers (`Empty`, `HasServer`, `Ready`) are intentionally
//! excluded as they are implementation details.

pub use crate::{
    // Entry points
    parse, parse_quality_and_format, to_uri, Parser,
    // Core types
    Format, Identifier, ImageInformationRequest, ImageRequest, Quality, Region, Request, Rotation,
    Scheme, Server, Size,
    // Builder
    RequestBuilder,
    // Configuration
    ParseOptions, SizeGrammar,
    // Errors
    ParseError, ParseErrorReason,
};
