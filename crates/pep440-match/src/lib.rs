//! Parsing, ordering and range matching for Python package version numbers, following
//! [PEP 440](https://peps.python.org/pep-0440)
//!
//! ```rust
//! use std::str::FromStr;
//! use pep440_match::{Range, RangeSet, Version};
//!
//! let version = Version::from_str("1.19").unwrap();
//! let range = Range::from_str(">=1.16").unwrap();
//! assert!(range.matches(&version));
//! let ranges = RangeSet::from_str(">=1.16, <2.0, !=1.18").unwrap();
//! assert!(ranges.matches(&version));
//! assert!(!ranges.matches(&Version::from_str("1.18.0").unwrap()));
//! ```
//!
//! A few things worth knowing about the version model:
//!
//! * An epoch (`1!1.2.3`) dominates everything else, so `1.0 < 2!0.1`.
//! * Trailing zeros in the release don't count: `1 == 1.0 == 1.0.0`, although the version is
//!   displayed the way it was written.
//! * For a fixed release, `1.0.dev0 < 1.0a1 < 1.0b1 < 1.0rc1 < 1.0 < 1.0.post1`. A dev suffix
//!   on a pre-release still sorts the whole version before any pre-release.
//! * The local segment (`+ubuntu.1`) is kept for display but ignored by comparisons, so `==1.0`
//!   matches `1.0+ubuntu.1`. [`Version::strict_eq`] takes it into account.
//! * `~=V` is the half-open interval described in [`Range::compatible_bounds`].
//!
//! Ranges don't special-case pre-releases: `<2.0` matches `2.0rc1` because it sorts below `2.0`.
#![deny(missing_docs)]

pub use {
    error::{ParseErrorKind, VersionParseError},
    range::{Operator, Range},
    range_set::RangeSet,
    version::{Prerelease, PrereleaseKind, Version},
};

mod error;
mod parse;
mod range;
mod range_set;
mod version;
#[cfg(feature = "version-ranges")]
mod version_ranges;
