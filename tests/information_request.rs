//! Image Information Request scenarios.

use iiif_uri::{parse, ImageInformationRequest, ParseError, ParseErrorReason, Request, Scheme};

fn information(uri: &str) -> ImageInformationRequest {
    match parse(uri) {
        Ok(Request::Information(request)) => request,
        other => panic!("expected an information request for {uri}, got {other:?}"),
    }
}

fn error(uri: &str) -> ParseError {
    parse(uri).expect_err("expected a parse error")
}

mod sunny_day {
    use super::*;

    #[test]
    fn vanilla_uri_with_surrounding_whitespace() {
        for uri in [
            "https://example.org/image-service/abcd1234/info.json",
            "    https://example.org/image-service/abcd1234/info.json",
            "https://example.org/image-service/abcd1234/info.json    ",
            "   https://example.org/image-service/abcd1234/info.json          ",
        ] {
            let request = information(uri);
            assert_eq!(request.uri().as_str(), uri.trim());
            assert_eq!(request.scheme(), Scheme::Https);
            assert_eq!(request.server().host(), "example.org");
            assert_eq!(request.server().port(), None);
            assert_eq!(request.prefix(), Some("/image-service"));
            assert_eq!(request.identifier().as_str(), "abcd1234");
        }
    }

    #[test]
    fn explicit_port() {
        let request = information("https://example.org:80/image-service/abcd1234/info.json");
        assert_eq!(
            request.uri().as_str(),
            "https://example.org:80/image-service/abcd1234/info.json"
        );
        assert_eq!(request.server().port(), Some(80));
    }

    #[test]
    fn no_prefix() {
        let request = information("https://example.org/abcd1234/info.json");
        assert_eq!(request.uri().as_str(), "https://example.org/abcd1234/info.json");
        assert_eq!(request.prefix(), None);
        assert_eq!(request.identifier().as_str(), "abcd1234");
    }

    #[test]
    fn two_section_prefix() {
        let request = information("https://example.org/image-service/iiif/abcd1234/info.json");
        assert_eq!(request.prefix(), Some("/image-service/iiif"));
    }

    #[test]
    fn encoded_identifier() {
        let uri = "https://example.org/image-service/ark%3A%2F53355%2Fcl010066723/info.json";
        let request = information(uri);
        assert_eq!(request.uri().as_str(), uri);
        assert_eq!(request.identifier().as_str(), "ark:/53355/cl010066723");
    }

    #[test]
    fn query_is_discarded() {
        let request =
            information("https://example.org/image-service/abcd1234/info.json?name=foo&age=24");
        assert_eq!(
            request.uri().as_str(),
            "https://example.org/image-service/abcd1234/info.json"
        );
        assert_eq!(request.identifier().as_str(), "abcd1234");
    }

    #[test]
    fn http_scheme() {
        let request = information("http://example.org/abcd1234/info.json");
        assert_eq!(request.scheme(), Scheme::Http);
    }
}

mod rainy_day {
    use super::*;

    #[test]
    fn missing_identifier() {
        let err = error("https://example.org/info.json");
        assert_eq!(err.uri(), "https://example.org/info.json");
        assert_eq!(
            err.errors(),
            [ParseErrorReason::MalformedPath {
                value: "/info.json".to_string(),
                message: Some("Missing <prefix>/identifier".to_string()),
            }]
        );
    }

    #[test]
    fn unsupported_scheme() {
        let err = error("ftp://example.org/abcd1234/info.json");
        assert_eq!(err.uri(), "ftp://example.org/abcd1234/info.json");
        assert_eq!(
            err.errors(),
            [ParseErrorReason::UnsupportedScheme {
                value: "ftp".to_string(),
                message: "The only supported schemes are http and https".to_string(),
            }]
        );
    }

    #[test]
    fn unsupported_scheme_and_missing_identifier() {
        let err = error("ftp://example.org/info.json");
        assert_eq!(
            err.errors(),
            [
                ParseErrorReason::UnsupportedScheme {
                    value: "ftp".to_string(),
                    message: "The only supported schemes are http and https".to_string(),
                },
                ParseErrorReason::MalformedPath {
                    value: "/info.json".to_string(),
                    message: Some("Missing <prefix>/identifier".to_string()),
                },
            ]
        );
    }

    #[test]
    fn malformed_uris() {
        for uri in [
            "://example.org/image-service/info.json",
            "https://example.org:FOO/image-service/info.json",
            "https://example.org:-1/image-service/info.json",
            "https://example.org:65536/image-service/info.json",
            "https://example.org:33.5/image-service/info.json",
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
}
