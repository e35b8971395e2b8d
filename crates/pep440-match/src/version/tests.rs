use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use insta::assert_snapshot;

use crate::ParseErrorKind;

use super::*;

/// <https://github.com/pypa/packaging/blob/237ff3aa348486cf835a980592af3a59fccd6101/tests/test_version.py#L24-L81>
#[test]
fn test_packaging_versions() {
    let versions = [
        // Implicit epoch of 0
        "1.0.dev456",
        "1.0a1",
        "1.0a2.dev456",
        "1.0a12.dev456",
        "1.0a12",
        "1.0b1.dev456",
        "1.0b2",
        "1.0b2.post345.dev456",
        "1.0b2.post345",
        "1.0b2-346",
        "1.0c1.dev456",
        "1.0c1",
        "1.0rc2",
        "1.0c3",
        "1.0",
        "1.0.post456.dev34",
        "1.0.post456",
        "1.1.dev1",
        "1.2+123abc",
        "1.2+123abc456",
        "1.2+abc",
        "1.2+abc123",
        "1.2+abc123def",
        "1.2+1234.abc",
        "1.2+123456",
        "1.2.r32+123456",
        "1.2.rev33+123456",
        // Explicit epoch of 1
        "1!1.0.dev456",
        "1!1.0a1",
        "1!1.0b2.post345.dev456",
        "1!1.0b2-346",
        "1!1.0c3",
        "1!1.0.post456",
        "1!1.2.rev33+123456",
    ];
    for version in versions {
        Version::from_str(version).unwrap();
    }
}

/// <https://github.com/pypa/packaging/blob/237ff3aa348486cf835a980592af3a59fccd6101/tests/test_version.py#L91-L100>
#[test]
fn test_packaging_failures() {
    let versions = [
        // Nonsensical versions should be invalid
        "french toast",
        // Versions with invalid local versions
        "1.0+a+",
        "1.0++",
        "1.0+_foobar",
        "1.0+foo&asd",
        "1.0+1+1",
        // Malformed releases and suffixes
        "not.a.version",
        "1..0",
        "1.0-foo",
        "1.0++abc",
        "!1.0",
        "",
        "v",
        "1.0.",
        "1.0-",
        "1.0+",
        "1.0+abc.",
        "1.0.*",
        "1.0a1a2",
        "1.0.post1.post2",
        "1.0.dev1.dev2",
        // Surrounding whitespace is not part of the grammar
        " 1.0",
        "1.0\n",
    ];
    for version in versions {
        let err = Version::from_str(version).unwrap_err();
        assert_eq!(err.input(), version);
    }
}

#[test]
fn test_equality_and_normalization() {
    let versions = [
        // Various development release incarnations
        ("1.0dev", "1.0.dev0"),
        ("1.0.dev", "1.0.dev0"),
        ("1.0dev1", "1.0.dev1"),
        ("1.0-dev", "1.0.dev0"),
        ("1.0-dev1", "1.0.dev1"),
        ("1.0DEV", "1.0.dev0"),
        ("1.0.DEV1", "1.0.dev1"),
        ("1.0_dev_2", "1.0.dev2"),
        // Various alpha incarnations
        ("1.0a", "1.0a0"),
        ("1.0.a", "1.0a0"),
        ("1.0.a1", "1.0a1"),
        ("1.0-a1", "1.0a1"),
        ("1.0alpha", "1.0a0"),
        ("1.0.alpha1", "1.0a1"),
        ("1.0-ALPHA1", "1.0a1"),
        ("1.0A", "1.0a0"),
        // Various beta incarnations
        ("1.0b", "1.0b0"),
        ("1.0.b1", "1.0b1"),
        ("1.0beta", "1.0b0"),
        ("1.0-beta1", "1.0b1"),
        ("1.0BETA", "1.0b0"),
        // Various release candidate incarnations
        ("1.0c", "1.0rc0"),
        ("1.0.c1", "1.0rc1"),
        ("1.0rc", "1.0rc0"),
        ("1.0-rc1", "1.0rc1"),
        ("1.0pre", "1.0rc0"),
        ("1.0preview3", "1.0rc3"),
        ("1.0.PREVIEW", "1.0rc0"),
        ("1.0RC1", "1.0rc1"),
        // Various post release incarnations
        ("1.0post", "1.0.post0"),
        ("1.0.post", "1.0.post0"),
        ("1.0post1", "1.0.post1"),
        ("1.0-post", "1.0.post0"),
        ("1.0POST", "1.0.post0"),
        ("1.0r", "1.0.post0"),
        ("1.0rev", "1.0.post0"),
        ("1.0.r1", "1.0.post1"),
        ("1.0.rev1", "1.0.post1"),
        ("1.0-5", "1.0.post5"),
        ("1.0-r5", "1.0.post5"),
        ("1.0-rev5", "1.0.post5"),
        // Integer Normalization
        ("1.01", "1.1"),
        ("1.0a05", "1.0a5"),
        ("1.0b07", "1.0b7"),
        ("1.0c056", "1.0rc56"),
        ("1.0rc09", "1.0rc9"),
        ("1.0.post000", "1.0.post0"),
        ("1.1.dev09000", "1.1.dev9000"),
        ("00!1.2", "1.2"),
        ("0100!0.0", "100!0.0"),
        // Various other normalizations
        ("v1.0", "1.0"),
        ("V1.0", "1.0"),
        ("1.0a1-2.DEV3", "1.0a1.post2.dev3"),
        ("1.0-a-1", "1.0a1"),
    ];
    for (version_str, normalized_str) in versions {
        let version = Version::from_str(version_str).unwrap();
        let normalized = Version::from_str(normalized_str).unwrap();
        assert_eq!(version, normalized, "{version_str} {normalized_str}");
        assert_eq!(
            version.to_string(),
            normalized_str,
            "{version_str} {normalized_str}"
        );
    }
}

#[test]
fn test_display_keeps_release_shape() {
    let versions = [
        "1.2.3",
        "2!1.0",
        "1.0.0.0",
        "1.2.3.4.5",
        "1.0a1",
        "1.0.post5",
        "1.0.dev3",
        "1.0+abc.def",
        "1!2.3.4rc5.post6.dev7+build.meta",
    ];
    for version in versions {
        assert_eq!(Version::from_str(version).unwrap().to_string(), version);
    }
}

#[test]
fn test_local_kept_verbatim() {
    let version = Version::from_str("1.0+Ubuntu-1_2").unwrap();
    assert_eq!(version.local(), Some("Ubuntu-1_2"));
    assert_eq!(version.to_string(), "1.0+Ubuntu-1_2");
}

/// Parsing the display form of a version gives the same version back, even when the display
/// differs from the input.
#[test]
fn test_normalizing_round_trip() {
    let versions = [
        "1.0",
        "v2!1.0-ALPHA_1-3.DEV+Local.7",
        "1.0c",
        "1.0.r",
        "01.002.0003",
        "1.0-5",
        "3.4.5b2.post-2",
    ];
    for input in versions {
        let version = Version::from_str(input).unwrap();
        let display = version.to_string();
        let reparsed = Version::from_str(&display).unwrap();
        assert_eq!(reparsed, version, "{input} -> {display}");
        assert!(reparsed.strict_eq(&version), "{input} -> {display}");
        assert_eq!(reparsed.to_string(), display, "{input} -> {display}");
    }
}

#[test]
fn test_fields() {
    let version = Version::from_str("1.2.3").unwrap();
    assert_eq!(version.epoch(), 0);
    assert_eq!(version.release(), &[1, 2, 3]);
    assert_eq!(version.pre(), None);
    assert_eq!(version.post(), None);
    assert_eq!(version.dev(), None);
    assert_eq!(version.local(), None);
    assert!(version.is_stable());

    let version = Version::from_str("1!2.3.4rc5.post6.dev7+build.meta").unwrap();
    assert_eq!(version.epoch(), 1);
    assert_eq!(version.release(), &[2, 3, 4]);
    assert_eq!(
        version.pre(),
        Some(Prerelease {
            kind: PrereleaseKind::Rc,
            number: 5
        })
    );
    assert_eq!(version.post(), Some(6));
    assert_eq!(version.dev(), Some(7));
    assert_eq!(version.local(), Some("build.meta"));
    assert!(version.any_prerelease());
}

/// Omitted numbers are `0`, but the component itself is still present.
#[test]
fn test_implicit_zero_suffixes() {
    assert_eq!(Version::from_str("1.0.dev").unwrap().dev(), Some(0));
    assert_eq!(Version::from_str("1.0.post").unwrap().post(), Some(0));
    assert_eq!(
        Version::from_str("1.0a").unwrap().pre(),
        Some(Prerelease {
            kind: PrereleaseKind::Alpha,
            number: 0
        })
    );
    assert_ne!(
        Version::from_str("1.0.post").unwrap(),
        Version::from_str("1.0").unwrap()
    );
    assert_ne!(
        Version::from_str("1.0.dev").unwrap(),
        Version::from_str("1.0").unwrap()
    );
}

#[test]
fn test_trailing_zero_equivalence() {
    let one = Version::from_str("1").unwrap();
    for version in ["1.0", "1.0.0", "1.0.0.0"] {
        let version = Version::from_str(version).unwrap();
        assert_eq!(version, one);
        assert_eq!(version.cmp(&one), Ordering::Equal);
        assert!(version.strict_eq(&one));
    }
    assert_eq!(
        Version::from_str("0").unwrap(),
        Version::from_str("0.0.0").unwrap()
    );
    assert_ne!(
        Version::from_str("1.0.1").unwrap(),
        Version::from_str("1.1").unwrap()
    );
}

#[test]
fn test_local_ignored_except_for_strict_eq() {
    let abc = Version::from_str("1.0+abc").unwrap();
    let xyz = Version::from_str("1.0+xyz").unwrap();
    let plain = Version::from_str("1.0").unwrap();

    assert_eq!(abc, xyz);
    assert_eq!(abc, plain);
    assert_eq!(abc.cmp(&xyz), Ordering::Equal);
    assert!(!(abc < xyz) && !(xyz < abc));

    assert!(abc.strict_eq(&abc.clone()));
    assert!(!abc.strict_eq(&xyz));
    assert!(!abc.strict_eq(&plain));
    assert!(plain.strict_eq(&Version::from_str("1.0.0").unwrap()));
    assert!(abc.clone().without_local().strict_eq(&plain));
}

#[test]
fn test_ordering_chain() {
    let chain = ["1.0.dev1", "1.0a1", "1.0b1", "1.0rc1", "1.0", "1.0.post1"];
    for pair in chain.windows(2) {
        let lower = Version::from_str(pair[0]).unwrap();
        let higher = Version::from_str(pair[1]).unwrap();
        assert!(lower < higher, "{} < {}", pair[0], pair[1]);
        assert!(higher > lower, "{} > {}", pair[1], pair[0]);
    }
    assert!(Version::from_str("1.0.dev0").unwrap() < Version::from_str("1.0a0").unwrap());
    assert!(Version::from_str("1.0rc0").unwrap() < Version::from_str("1.0").unwrap());
    assert!(Version::from_str("1.0").unwrap() < Version::from_str("1.0.post0").unwrap());
}

#[test]
fn test_epoch_dominates() {
    assert!(Version::from_str("1!0.1.0").unwrap() > Version::from_str("0!1.0.0").unwrap());
    assert!(Version::from_str("1!1.0").unwrap() > Version::from_str("0!2.0").unwrap());
    assert!(Version::from_str("1!1.0.dev0").unwrap() > Version::from_str("99.0.post9").unwrap());
}

/// Sorted under the tie-break order epoch, release, dev, pre, post.
const VERSIONS_SORTED: &[&str] = &[
    "0.9",
    "1.0a1.dev1",
    "1.0rc1.dev1",
    "1.0.dev1",
    "1.0.post1.dev1",
    "1.0.dev2",
    "1.0a1",
    "1.0a2",
    "1.0a2.post1",
    "1.0b1",
    "1.0rc1",
    "1.0",
    "1.0.post1",
    "1.0.post2",
    "1.0.1.dev0",
    "1.0.1",
    "1.1a1",
    "1.10",
    "2",
    "1!0.1",
    "1!0.1.post1",
];

/// Every pair of versions compares the way its position in the sorted list says it should.
#[test]
fn test_operators_true() {
    let versions: Vec<Version> = VERSIONS_SORTED
        .iter()
        .map(|version| Version::from_str(version).unwrap())
        .collect();

    for (i, a) in versions.iter().enumerate() {
        for (j, b) in versions.iter().enumerate() {
            let ordering = i.cmp(&j);
            assert_eq!(a.cmp(b), ordering, "{a} {ordering:?} {b}");
            assert_eq!(a == b, i == j, "{a} == {b}");
            assert_eq!(a < b, i < j, "{a} < {b}");
            assert_eq!(a <= b, i <= j, "{a} <= {b}");
            assert_eq!(a > b, i > j, "{a} > {b}");
            assert_eq!(a >= b, i >= j, "{a} >= {b}");
            assert_eq!(a != b, i != j, "{a} != {b}");
        }
    }
}

#[test]
fn test_sort() {
    let mut versions: Vec<Version> = VERSIONS_SORTED
        .iter()
        .rev()
        .map(|version| Version::from_str(version).unwrap())
        .collect();
    versions.sort();
    let sorted: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, VERSIONS_SORTED);
}

#[test]
fn test_hash_matches_equality() {
    let versions: HashSet<Version> = ["1.0", "1.0.0", "1+abc", "1.0.0.0+xyz", "1.0.post0"]
        .into_iter()
        .map(|version| Version::from_str(version).unwrap())
        .collect();
    assert_eq!(versions.len(), 2);
    assert!(versions.contains(&Version::new([1])));
    assert!(versions.contains(&Version::new([1]).with_post(Some(0))));
}

#[test]
fn test_builders() {
    let version = Version::new([1, 2])
        .with_epoch(3)
        .with_pre(Some(Prerelease {
            kind: PrereleaseKind::Beta,
            number: 4,
        }))
        .with_post(Some(5))
        .with_dev(Some(6))
        .with_local(Some("cpu".to_string()));
    assert_eq!(version.to_string(), "3!1.2b4.post5.dev6+cpu");
    assert_eq!(version.only_release().to_string(), "3!1.2");
    assert_eq!(
        version.clone().with_release([2, 0, 0]).to_string(),
        "3!2.0.0b4.post5.dev6+cpu"
    );
    assert!(
        version
            .without_local()
            .strict_eq(&Version::from_str("3!1.2b4.post5.dev6").unwrap())
    );
}

#[test]
fn test_empty_release_is_zero() {
    let version = Version::new(Vec::<u64>::new());
    assert_eq!(version.release(), &[0]);
    assert_eq!(version.to_string(), "0");

    let version = Version::new([1, 2])
        .with_epoch(2)
        .with_release(Vec::<u64>::new());
    assert_eq!(version.release(), &[0]);
    assert_eq!(version.to_string(), "2!0");
    assert_eq!(version, Version::from_str("2!0.0").unwrap());
}

#[test]
fn test_error_kinds() {
    let cases = [
        ("not.a.version", ParseErrorKind::MissingRelease { pos: 0 }),
        ("!1.0", ParseErrorKind::MissingRelease { pos: 0 }),
        ("v", ParseErrorKind::MissingRelease { pos: 1 }),
        ("1.0++abc", ParseErrorKind::InvalidLocal { pos: 4 }),
        (
            "1..0",
            ParseErrorKind::UnexpectedTrailing {
                pos: 1,
                trailing: "..0".to_string(),
            },
        ),
        (
            "1.0-foo",
            ParseErrorKind::UnexpectedTrailing {
                pos: 3,
                trailing: "-foo".to_string(),
            },
        ),
        (
            "1.0.dev99999999999999999999",
            ParseErrorKind::NumberTooLarge {
                number: "99999999999999999999".to_string(),
            },
        ),
    ];
    for (input, kind) in cases {
        let err = Version::from_str(input).unwrap_err();
        assert_eq!(err.kind(), &kind, "{input}");
        assert_eq!(err.input(), input);
    }
}

#[test]
fn test_error_messages() {
    assert_snapshot!(
        Version::from_str("1.0-foo").unwrap_err(),
        @"Failed to parse `1.0-foo`: unexpected `-foo` at position 3"
    );
    assert_snapshot!(
        Version::from_str("!1.0").unwrap_err(),
        @"Failed to parse `!1.0`: expected a release number at position 0"
    );
    assert_snapshot!(
        Version::from_str("1.0++abc").unwrap_err(),
        @"Failed to parse `1.0++abc`: expected a local version segment at position 4"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let version = Version::from_str("1.0alpha1+abc").unwrap();
    let json = serde_json::to_string(&version).unwrap();
    assert_eq!(json, r#""1.0a1+abc""#);
    let parsed: Version = serde_json::from_str(&json).unwrap();
    assert!(parsed.strict_eq(&version));
    assert!(serde_json::from_str::<Version>(r#""1.0-foo""#).is_err());
}
