//! The PEP 440 version grammar:
//!
//! ```text
//! ["v"] [EPOCH "!"] RELEASE [PRE] [POST | LEGACY_POST] [DEV] ["+" LOCAL]
//! ```
//!
//! Each component has its own rule. A rule for an optional component returns `Ok(None)` and
//! leaves the scanner where it was when the component is absent, so the rules compose in
//! sequence and the whole input has to be consumed at the end.
//!
//! See <https://peps.python.org/pep-0440/#appendix-b-parsing-version-strings-with-regular-expressions>

use unscanny::Scanner;

use crate::{ParseErrorKind, Prerelease, PrereleaseKind, Version, VersionParseError};

/// Pre-release spellings, longest first so that `alpha` isn't read as `a` followed by `lpha`.
const PRE_LABELS: &[(&str, PrereleaseKind)] = &[
    ("preview", PrereleaseKind::Rc),
    ("alpha", PrereleaseKind::Alpha),
    ("beta", PrereleaseKind::Beta),
    ("pre", PrereleaseKind::Rc),
    ("rc", PrereleaseKind::Rc),
    ("a", PrereleaseKind::Alpha),
    ("b", PrereleaseKind::Beta),
    ("c", PrereleaseKind::Rc),
];

/// Post-release spellings, longest first.
const POST_LABELS: &[&str] = &["post", "rev", "r"];

/// Parses a complete version string, rejecting anything the grammar doesn't match in full.
pub(crate) fn parse_version(input: &str) -> Result<Version, VersionParseError> {
    let mut s = Scanner::new(input);
    parse_components(&mut s).map_err(|kind| VersionParseError::new(input, kind))
}

fn parse_components(s: &mut Scanner) -> Result<Version, ParseErrorKind> {
    // <https://peps.python.org/pep-0440/#preceding-v-character>
    s.eat_if(['v', 'V']);
    // "If no explicit epoch is given, the implicit epoch is 0"
    let epoch = parse_epoch(s)?.unwrap_or_default();
    let release = parse_release(s)?;
    let pre = parse_pre(s)?;
    let post = parse_post(s)?;
    let dev = parse_dev(s)?;
    let local = parse_local(s)?;

    if !s.done() {
        return Err(ParseErrorKind::UnexpectedTrailing {
            pos: s.cursor(),
            trailing: s.after().to_string(),
        });
    }

    Ok(Version::new(release)
        .with_epoch(epoch)
        .with_pre(pre)
        .with_post(post)
        .with_dev(dev)
        .with_local(local))
}

/// `N!`
fn parse_epoch(s: &mut Scanner) -> Result<Option<u64>, ParseErrorKind> {
    let checkpoint = s.cursor();
    if let Some(epoch) = parse_number(s)? {
        if s.eat_if('!') {
            return Ok(Some(epoch));
        }
    }
    s.jump(checkpoint);
    Ok(None)
}

/// `N(.N)*`
///
/// A dot only continues the release if a digit follows it, so `1.0.post1` stops before `.post1`.
fn parse_release(s: &mut Scanner) -> Result<Vec<u64>, ParseErrorKind> {
    let Some(first) = parse_number(s)? else {
        return Err(ParseErrorKind::MissingRelease { pos: s.cursor() });
    };
    let mut release = vec![first];
    loop {
        let checkpoint = s.cursor();
        if !s.eat_if('.') {
            break;
        }
        let Some(segment) = parse_number(s)? else {
            s.jump(checkpoint);
            break;
        };
        release.push(segment);
    }
    Ok(release)
}

/// `[-_.]? (a|b|c|rc|alpha|beta|pre|preview) [-_.]? N?`
///
/// <https://peps.python.org/pep-0440/#pre-release-spelling>
fn parse_pre(s: &mut Scanner) -> Result<Option<Prerelease>, ParseErrorKind> {
    let checkpoint = s.cursor();
    eat_separator(s);
    let Some(kind) = PRE_LABELS
        .iter()
        .find_map(|(label, kind)| eat_keyword(s, label).then_some(*kind))
    else {
        s.jump(checkpoint);
        return Ok(None);
    };
    eat_separator(s);
    // <https://peps.python.org/pep-0440/#implicit-pre-release-number>
    let number = parse_number(s)?.unwrap_or_default();
    Ok(Some(Prerelease { kind, number }))
}

/// `-N` or `[-_.]? (post|rev|r) [-_.]? N?`
///
/// <https://peps.python.org/pep-0440/#post-release-spelling>
fn parse_post(s: &mut Scanner) -> Result<Option<u64>, ParseErrorKind> {
    let checkpoint = s.cursor();
    if s.eat_if('-') {
        if let Some(post) = parse_number(s)? {
            return Ok(Some(post));
        }
        s.jump(checkpoint);
    }

    eat_separator(s);
    if !POST_LABELS.iter().any(|label| eat_keyword(s, label)) {
        s.jump(checkpoint);
        return Ok(None);
    }
    eat_separator(s);
    // <https://peps.python.org/pep-0440/#implicit-post-release-number>
    Ok(Some(parse_number(s)?.unwrap_or_default()))
}

/// `[-_.]? dev [-_.]? N?`
///
/// <https://peps.python.org/pep-0440/#development-release-spelling>
fn parse_dev(s: &mut Scanner) -> Result<Option<u64>, ParseErrorKind> {
    let checkpoint = s.cursor();
    eat_separator(s);
    if !eat_keyword(s, "dev") {
        s.jump(checkpoint);
        return Ok(None);
    }
    eat_separator(s);
    // <https://peps.python.org/pep-0440/#implicit-development-release-number>
    Ok(Some(parse_number(s)?.unwrap_or_default()))
}

/// `+ [a-z0-9]+ ([-_.] [a-z0-9]+)*`, kept verbatim.
///
/// <https://peps.python.org/pep-0440/#local-version-identifiers>
fn parse_local(s: &mut Scanner) -> Result<Option<String>, ParseErrorKind> {
    if !s.eat_if('+') {
        return Ok(None);
    }
    let start = s.cursor();
    if s.eat_while(|c: char| c.is_ascii_alphanumeric()).is_empty() {
        return Err(ParseErrorKind::InvalidLocal { pos: start });
    }
    loop {
        let checkpoint = s.cursor();
        if !eat_separator(s) {
            break;
        }
        if s.eat_while(|c: char| c.is_ascii_alphanumeric()).is_empty() {
            // A trailing separator isn't part of the local version.
            s.jump(checkpoint);
            break;
        }
    }
    Ok(Some(s.from(start).to_string()))
}

fn eat_separator(s: &mut Scanner) -> bool {
    s.eat_if(['-', '_', '.'])
}

/// Eats `keyword` if the input continues with it, ignoring ASCII case.
fn eat_keyword(s: &mut Scanner, keyword: &str) -> bool {
    let matches = s
        .after()
        .get(..keyword.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword));
    if matches {
        s.jump(s.cursor() + keyword.len());
    }
    matches
}

/// A run of ASCII digits, leading zeros allowed.
fn parse_number(s: &mut Scanner) -> Result<Option<u64>, ParseErrorKind> {
    let digits = s.eat_while(|c: char| c.is_ascii_digit());
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ParseErrorKind::NumberTooLarge {
            number: digits.to_string(),
        })
}
