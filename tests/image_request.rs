//! Image Request scenarios.

use iiif_uri::{
    parse, ImageRequest, ParseError, ParseErrorReason, Region, Request, Rotation, Scheme, Size,
};

const BASE: &str = "https://example.org/image-service/iiif/abcd1234";

fn image(uri: &str) -> ImageRequest {
    match parse(uri) {
        Ok(Request::Image(request)) => request,
        other => panic!("expected an image request for {uri}, got {other:?}"),
    }
}

fn error(uri: &str) -> ParseError {
    parse(uri).expect_err("expected a parse error")
}

/// Parses a request whose region, size and rotation are the given segments.
fn with_segments(region: &str, size: &str, rotation: &str) -> Result<Request, ParseError> {
    parse(&format!("{BASE}/{region}/{size}/{rotation}/default.jpg"))
}

fn single_reason(result: Result<Request, ParseError>) -> ParseErrorReason {
    let err = result.expect_err("expected a parse error");
    assert_eq!(err.errors().len(), 1, "expected exactly one reason: {err}");
    err.first().clone()
}

fn bad_size(value: &str, message: Option<&str>) -> ParseErrorReason {
    ParseErrorReason::BadSize {
        value: value.to_string(),
        message: message.map(str::to_string),
    }
}

fn bad_region(value: &str) -> ParseErrorReason {
    ParseErrorReason::BadRegion {
        value: value.to_string(),
        message: None,
    }
}

fn bad_rotation(value: &str, message: &str) -> ParseErrorReason {
    ParseErrorReason::BadRotation {
        value: value.to_string(),
        message: Some(message.to_string()),
    }
}

mod sunny_day {
    use super::*;

    #[test]
    fn vanilla_uri() {
        let uri = "https://example.org/image-service/abcd1234/full/max/0/default.jpg";
        let request = image(uri);
        assert_eq!(request.uri().as_str(), uri);
        assert_eq!(request.scheme(), Scheme::Https);
        assert_eq!(request.server().host(), "example.org");
        assert_eq!(request.server().port(), None);
        assert_eq!(request.prefix(), Some("/image-service"));
        assert_eq!(request.identifier().as_str(), "abcd1234");
        assert_eq!(request.region(), Region::Full);
        assert_eq!(request.size(), Size::Max { scaled: false });
        assert_eq!(request.rotation(), Rotation::Clockwise { degrees: 0.0 });
        assert_eq!(request.quality().as_str(), "default");
        assert_eq!(request.format().as_str(), "jpg");
    }

    #[test]
    fn explicit_port() {
        let uri = "https://example.org:8080/image-service/abcd1234/full/max/0/default.jpg";
        let request = image(uri);
        assert_eq!(request.uri().as_str(), uri);
        assert_eq!(request.server().port(), Some(8080));
    }

    #[test]
    fn two_section_prefix() {
        let request = image("https://example.org/image-service/iiif/abcd1234/full/max/0/default.jpg");
        assert_eq!(request.prefix(), Some("/image-service/iiif"));
    }

    #[test]
    fn no_prefix() {
        let uri = "https://example.org/abcd1234/full/max/0/default.jpg";
        let request = image(uri);
        assert_eq!(request.uri().as_str(), uri);
        assert_eq!(request.prefix(), None);
    }

    #[test]
    fn pixel_region_and_constrained_size() {
        let request =
            image("https://example.org/image-service/abcd1234/1,3,22,44/!12,34/90/color.png");
        assert_eq!(request.region(), Region::Pixels { x: 1, y: 3, w: 22, h: 44 });
        assert_eq!(
            request.size(),
            Size::Constrained {
                w: 12,
                h: 34,
                scaled: false
            }
        );
        assert_eq!(request.rotation(), Rotation::Clockwise { degrees: 90.0 });
        assert_eq!(request.quality().as_str(), "color");
        assert_eq!(request.format().as_str(), "png");
    }

    #[test]
    fn regions() {
        let region = |segment: &str| image(&format!("{BASE}/{segment}/max/0/default.jpg")).region();
        assert_eq!(region("full"), Region::Full);
        assert_eq!(region("square"), Region::Square);
        assert_eq!(region("0,1,2,3"), Region::Pixels { x: 0, y: 1, w: 2, h: 3 });
        assert_eq!(
            region("pct:0.5,1,2.25,3"),
            Region::Percentages {
                x: 0.5,
                y: 1.0,
                w: 2.25,
                h: 3.0
            }
        );
    }

    #[test]
    fn sizes() {
        let size = |segment: &str| image(&format!("{BASE}/0,1,2,3/{segment}/0/default.jpg")).size();
        assert_eq!(size("max"), Size::Max { scaled: false });
        assert_eq!(size("^max"), Size::Max { scaled: true });
        assert_eq!(
            size("pct:44.5"),
            Size::Percentage {
                percentage: 44.5,
                scaled: false
            }
        );
        assert_eq!(size("72,"), Size::Width { w: 72, scaled: false });
        assert_eq!(size(",72"), Size::Height { h: 72, scaled: false });
        assert_eq!(
            size("1,1"),
            Size::WidthAndHeight {
                w: 1,
                h: 1,
                scaled: false
            }
        );
        assert_eq!(
            size("^!12,34"),
            Size::Constrained {
                w: 12,
                h: 34,
                scaled: true
            }
        );
    }

    #[test]
    fn clockwise_and_mirrored_rotations() {
        for degrees in [0.0, 1.0, 90.0, 180.0, 360.0, 0.1, 1.1, 90.123, 180.4546] {
            let clockwise =
                image(&format!("https://example.org/image-service/abcd1234/full/max/{degrees}/default.jpg"));
            assert_eq!(clockwise.rotation(), Rotation::Clockwise { degrees });

            let mirrored =
                image(&format!("https://example.org/image-service/abcd1234/full/max/!{degrees}/default.jpg"));
            assert_eq!(mirrored.rotation(), Rotation::Mirrored { degrees });
        }
    }

    #[test]
    fn qualities() {
        for quality in ["color", "gray", "bitonal", "default"] {
            let request = image(&format!(
                "https://example.org/image-service/abcd1234/full/max/0/{quality}.jpg"
            ));
            assert_eq!(request.quality().as_str(), quality);
            assert!(request.quality().is_well_known());
        }
    }

    #[test]
    fn server_defined_quality() {
        let request = image("https://example.org/abcd1234/full/max/0/sepia.jpg");
        assert_eq!(request.quality().as_str(), "sepia");
        assert!(!request.quality().is_well_known());
    }

    #[test]
    fn formats() {
        for format in ["jpg", "png", "tif", "JPG", "JPEG"] {
            let request = image(&format!(
                "https://example.org/image-service/abcd1234/full/max/0/default.{format}"
            ));
            assert_eq!(request.format().as_str(), format);
        }
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        let request = image("https://example.org/abcd1234/pct:-0,0,5,5/pct:-0/-0/default.jpg");
        assert_eq!(
            request.uri().as_str(),
            "https://example.org/abcd1234/pct:0,0,5,5/pct:0/0/default.jpg"
        );
    }

    #[test]
    fn encoded_identifier_is_decoded_and_normalized() {
        let request = image("https://example.org/iiif/ark%3a%2F53355%2fcl010066723/full/max/0/default.jpg");
        assert_eq!(request.identifier().as_str(), "ark:/53355/cl010066723");
        assert_eq!(
            request.uri().as_str(),
            "https://example.org/iiif/ark%3A%2F53355%2Fcl010066723/full/max/0/default.jpg"
        );
    }
}

mod rainy_day {
    use super::*;

    #[test]
    fn missing_identifier() {
        let err = error("https://example.org/full/max/0/default.jpg");
        assert_eq!(err.uri(), "https://example.org/full/max/0/default.jpg");
        assert_eq!(
            err.errors(),
            [ParseErrorReason::MalformedPath {
                value: "/full/max/0/default.jpg".to_string(),
                message: Some("Not enough parameters in URI".to_string()),
            }]
        );
    }

    #[test]
    fn unsupported_scheme() {
        let err = error("ftp://example.org/image-service/123abc/full/max/0/default.jpg");
        assert_eq!(
            err.uri(),
            "ftp://example.org/image-service/123abc/full/max/0/default.jpg"
        );
        assert_eq!(
            err.errors(),
            [ParseErrorReason::UnsupportedScheme {
                value: "ftp".to_string(),
                message: "The only supported schemes are http and https".to_string(),
            }]
        );
    }

    #[test]
    fn malformed_uris() {
        for uri in [
            "://example.org/image-service/123abc/full/max/0/default.jpg",
            "https://example.org:FOO/image-service/123abc/full/max/0/default.jpg",
            "https://example.org:-1/image-service/123abc/full/max/0/default.jpg",
            "https://example.org:65536/image-service/123abc/full/max/0/default.jpg",
            "https://example.org:33.5/image-service/123abc/full/max/0/default.jpg",
        ] {
            let err = error(uri);
            assert_eq!(
                err.errors(),
                [ParseErrorReason::MalformedUri {
                    value: uri.to_string()
                }],
                "for {uri}"
            );
        }
    }

    #[test]
    fn missing_region_shifts_identifier_into_region() {
        let reason =
            single_reason(parse("https://example.org/image-service/abcd1234/max/0/default.jpg"));
        assert_eq!(reason, bad_region("abcd1234"));
    }

    #[test]
    fn missing_size_shifts_region_into_size() {
        let reason =
            single_reason(parse("https://example.org/image-service/abcd1234/full/0/default.jpg"));
        assert_eq!(
            reason,
            bad_size(
                "full",
                Some("The value full is no longer allowed for the size parameter, max must be used instead")
            )
        );
    }

    #[test]
    fn missing_rotation() {
        let reason =
            single_reason(parse("https://example.org/image-service/abcd1234/full/max/default.jpg"));
        assert_eq!(
            reason,
            bad_rotation("max", "Error parsing 'max' into degree of rotation")
        );
    }

    #[test]
    fn quality_and_format_errors() {
        let cases = [
            (
                "https://example.org/image-service/abcd1234/full/max/0/.jpg",
                ParseErrorReason::MissingQuality {
                    value: ".jpg".to_string(),
                },
            ),
            (
                "https://example.org/image-service/abcd1234/full/max/0/default.",
                ParseErrorReason::MissingFormat {
                    value: "default.".to_string(),
                },
            ),
            (
                "https://example.org/image-service/abcd1234/full/max/0/default.jpg.png",
                ParseErrorReason::MalformedPath {
                    value: "default.jpg.png".to_string(),
                    message: None,
                },
            ),
            (
                "https://example.org/image-service/abcd1234/full/max/0/default",
                ParseErrorReason::MalformedPath {
                    value: "default".to_string(),
                    message: None,
                },
            ),
        ];

        for (uri, expected) in cases {
            assert_eq!(single_reason(parse(uri)), expected, "for {uri}");
        }
    }

    #[test]
    fn scheme_path_and_quality_errors_accumulate() {
        let err = error("ftp://example.org/max/0/.jpg");
        assert_eq!(
            err.errors(),
            [
                ParseErrorReason::UnsupportedScheme {
                    value: "ftp".to_string(),
                    message: "The only supported schemes are http and https".to_string(),
                },
                ParseErrorReason::MalformedPath {
                    value: "/max/0/.jpg".to_string(),
                    message: Some("Not enough parameters in URI".to_string()),
                },
                ParseErrorReason::MissingQuality {
                    value: ".jpg".to_string(),
                },
            ]
        );
    }

    #[test]
    fn bad_regions() {
        for region in [
            "-1,3,22,44",
            "1,-3,22,44",
            "1,3,-22,44",
            "1,3,22,-44",
            "",
            ",,,",
            "1",
            "1,2",
            "1,2,3",
            ",1,2,3,4",
            "1,2,3,4,",
            ",1,2,3,4,",
            "pct:inf,0,1,1",
        ] {
            assert_eq!(
                single_reason(with_segments(region, "max", "0")),
                bad_region(region),
                "for region {region:?}"
            );
        }
    }

    #[test]
    fn bad_sizes_without_message() {
        for size in [
            "pct:-1", "0,", "-1,", ",0", ",-1", "-145,283", "145,-283", "-145,-283", "0,283",
            "12,0", "0,0",
        ] {
            assert_eq!(
                single_reason(with_segments("0,1,2,3", size, "0")),
                bad_size(size, None),
                "for size {size:?}"
            );
        }
    }

    #[test]
    fn bad_sizes_with_message() {
        let cases = [
            ("", "Unable to parse value into a size"),
            ("pct", "Unable to parse value into a size"),
            ("unsupported", "Unable to parse value into a size"),
            ("pct:", "Error parsing ''"),
            ("pct:hello", "Error parsing 'hello'"),
            ("pct:inf", "Error parsing 'inf'"),
            (",,,", "Error parsing ',,'"),
            ("bingo,", "Error parsing 'bingo'"),
            (",bingo", "Error parsing 'bingo'"),
            ("bingo,283", "Error parsing 'bingo'"),
            ("12,bingo", "Error parsing 'bingo'"),
            ("bin,go", "Error parsing 'bin'"),
            ("!", "Unable to parse value into a size"),
            ("!,", "Error parsing '!'"),
            ("!-1", "Unable to parse value into a size"),
            ("!0", "Unable to parse value into a size"),
            ("!bingo", "Unable to parse value into a size"),
            (
                "full",
                "The value full is no longer allowed for the size parameter, max must be used instead",
            ),
        ];

        for (size, message) in cases {
            assert_eq!(
                single_reason(with_segments("0,1,2,3", size, "0")),
                bad_size(size, Some(message)),
                "for size {size:?}"
            );
        }
    }

    #[test]
    fn wrong_number_of_size_values() {
        assert_eq!(
            single_reason(with_segments("0,1,2,3", "1,1,1", "0")),
            bad_size("1,1,1", Some("Error parsing size: expecting 2 values, got 3"))
        );
        assert_eq!(
            single_reason(with_segments("0,1,2,3", "!1,1,1,1", "0")),
            bad_size("1,1,1,1", Some("Error parsing size: expecting 2 values, got 4"))
        );
    }

    #[test]
    fn bad_rotations() {
        let cases = [
            ("", "Error parsing '' into degree of rotation"),
            ("-1", "The degree of rotation must be >= 0"),
            ("-0.0001", "The degree of rotation must be >= 0"),
            ("361", "The degree of rotation must be <= 360"),
            ("360.00001", "The degree of rotation must be <= 360"),
            ("bingo", "Error parsing 'bingo' into degree of rotation"),
            ("!", "Error parsing '' into degree of rotation"),
            ("!-1", "The degree of rotation must be >= 0"),
            ("!361", "The degree of rotation must be <= 360"),
            ("!360.00001", "The degree of rotation must be <= 360"),
            ("!bingo", "Error parsing 'bingo' into degree of rotation"),
        ];

        for (rotation, message) in cases {
            assert_eq!(
                single_reason(with_segments("full", "max", rotation)),
                bad_rotation(rotation, message),
                "for rotation {rotation:?}"
            );
        }
    }

    #[test]
    fn rotation_is_checked_before_size_and_region() {
        let reason = single_reason(with_segments("bad", "bad", "bad"));
        assert!(matches!(reason, ParseErrorReason::BadRotation { .. }));

        let reason = single_reason(with_segments("bad", "bad", "0"));
        assert!(matches!(reason, ParseErrorReason::BadSize { .. }));
    }

    #[test]
    fn error_uri_is_trimmed_input() {
        let err = error("  https://example.org/image-service/abcd1234/full/max/0/default  ");
        assert_eq!(
            err.uri(),
            "https://example.org/image-service/abcd1234/full/max/0/default"
        );
    }
}
