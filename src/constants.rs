//! Constants for IIIF Image API URI parsing.

/// Final path segment of an Image Information Request.
pub const INFO_JSON: &str = "info.json";

/// Prefix marking percentage values in region and size segments.
pub const PERCENT_PREFIX: &str = "pct:";

/// Leading marker on a size segment that allows up-scaling.
pub const UPSCALE_MARKER: char = '^';

/// Leading marker on a rotation segment that requests mirroring,
/// and on a size segment that requests a constrained ("best fit") size.
pub const BANG_MARKER: char = '!';

/// Minimum number of `/`-separated path parts in an Image Request
/// (leading empty part, identifier, region, size, rotation, quality.format).
pub const MIN_IMAGE_REQUEST_SEGMENTS: usize = 6;

/// Minimum number of `/`-separated path parts in an Image Information Request
/// (leading empty part, identifier, `info.json`).
pub const MIN_INFORMATION_REQUEST_SEGMENTS: usize = 3;

/// Number of commas in a pixel or percentage region (`x,y,w,h`).
pub const REGION_COMMAS: usize = 3;

/// Largest accepted degree of rotation.
pub const MAX_ROTATION_DEGREES: f64 = 360.0;

/// Message attached to an unsupported scheme.
pub const UNSUPPORTED_SCHEME_MESSAGE: &str = "The only supported schemes are http and https";

/// Message attached to an Image Request path that is too short.
pub const NOT_ENOUGH_PARAMETERS_MESSAGE: &str = "Not enough parameters in URI";

/// Message attached to an Image Information Request path that is too short.
pub const MISSING_IDENTIFIER_MESSAGE: &str = "Missing <prefix>/identifier";

/// Message attached to a size segment that matches no size form.
pub const UNPARSEABLE_SIZE_MESSAGE: &str = "Unable to parse value into a size";

/// Message attached to the IIIF 2.x `full` size under the current grammar.
pub const SIZE_FULL_REMOVED_MESSAGE: &str =
    "The value full is no longer allowed for the size parameter, max must be used instead";
