//! Canonicalization should be idempotent.

use url_canon::{canonicalize_with, is_canonical, CanonicalizeOptions, CaseFold};

/// Noisy inputs as they appear in crawl logs.
const NOISY_INPUTS: &[&str] = &[
    "http://example.com",
    "HTTPS://Example.COM/",
    "http://example.com/a//",
    "http://example.com//",
    "http://user:PW@Example.com:8080/A/B/?Q=1&r=%7e#Frag",
    "http://example.com/%",
    "http://example.com/%%25",
    "http://example.com/%a%2A",
    "http://example.com/%g1%2A",
    "http://example.com/10% proof",
    "http://example.com/a%2Fb%2F",
    "http://example.com/a%3Fb?c%3Fd%23e#f%23g",
    "http://ex%41mple.com/",
    "http://[::1]:80/x",
    "/%2A",
    "/%2a*",
    "/foo/",
    "/%2F%2Fhost/path",
    "a%3Ab/c",
    "a%2Fb%3Ac",
    "/\u{E6}blegr\u{F8}d og \u{F8}l",
    "%C3%A6blegr%C3%B8d",
    "Red, Ros\u{E9} 14%",
    "Red%2C%20Ros%C3%A9 14%25",
    "%ce%ce%b1%b1",
    "%E0%80%80%C3",
    "%C3%%A9",
    "\u{C6}BLEGR\u{D8}D",
    "tab\there\u{85}",
    "mailto:Someone@Example.com",
    "urn:isbn%3A0451450523",
    "h%74tp://example.com/",
    "%41:/%2Fx",
    "a%2Bb://x",
    "h%74tp:foo",
    "\u{212A}:x",
    "http://example.com/a%3Fb",
    "http://example.com/a/%3F",
    "http://example.com/a//%3Fx/?q",
    "a%3F%3Ab",
    "%3F//x",
    "mailto:a%3Fb",
    "urn:%2F%2Fx",
    "?only=query",
    "#only-fragment",
    "",
];

/// All combinations of options.
fn all_options() -> Vec<CanonicalizeOptions> {
    let mut options = Vec::new();
    for correct_high_order in [true, false] {
        for unambiguous in [true, false] {
            for case_fold in [CaseFold::Ascii, CaseFold::Unicode] {
                options.push(
                    CanonicalizeOptions::new()
                        .with_correct_high_order(correct_high_order)
                        .with_unambiguous(unambiguous)
                        .with_case_fold(case_fold),
                );
            }
        }
    }
    options
}

#[test]
fn canonicalize_twice() {
    for opts in all_options() {
        for input in NOISY_INPUTS {
            let once = canonicalize_with(input, &opts).expect("should be canonicalizable");
            let twice = canonicalize_with(&once, &opts).expect("canonical form should be valid");
            assert_eq!(once, twice, "input={input:?}, opts={opts:?}");
        }
    }
}

#[test]
fn output_is_canonical() {
    for opts in all_options() {
        for input in NOISY_INPUTS {
            let once = canonicalize_with(input, &opts).expect("should be canonicalizable");
            assert!(
                is_canonical(&once, &opts),
                "output={once:?}, input={input:?}, opts={opts:?}"
            );
        }
    }
}

#[test]
fn noisy_inputs_are_not_canonical() {
    let opts = CanonicalizeOptions::new();
    for input in [
        "http://example.com",
        "HTTPS://Example.COM/",
        "/foo/",
        "/%2A",
        "Red, Ros\u{E9} 14%",
    ] {
        assert!(!is_canonical(input, &opts), "input={input:?}");
    }
}
