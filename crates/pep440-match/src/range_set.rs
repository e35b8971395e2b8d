use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::trace;

use crate::{Range, Version, VersionParseError};

/// A comma-separated list of ranges such as `>=1.0, <2.0, !=1.5`, which holds when every range
/// holds.
///
/// ```rust
/// use std::str::FromStr;
/// use pep440_match::{RangeSet, Version};
///
/// let ranges = RangeSet::from_str(">=1.0, <2.0, !=1.5").unwrap();
/// assert!(ranges.matches(&Version::from_str("1.4.0").unwrap()));
/// assert!(!ranges.matches(&Version::from_str("1.5").unwrap()));
/// assert_eq!(ranges.to_string(), ">=1.0,<2.0,!=1.5");
/// ```
///
/// The ranges keep the order they were written in. An empty set places no constraint and
/// matches every version.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RangeSet(Vec<Range>);

impl RangeSet {
    /// A set without any range, matching everything.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Whether the set has no ranges.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the version satisfies all ranges in the set.
    pub fn matches(&self, version: &Version) -> bool {
        self.0.iter().all(|range| range.matches(version))
    }
}

impl Deref for RangeSet {
    type Target = [Range];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for RangeSet {
    type Item = Range;
    type IntoIter = std::vec::IntoIter<Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Range> for RangeSet {
    fn from_iter<T: IntoIterator<Item = Range>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Range> for RangeSet {
    fn from(range: Range) -> Self {
        Self(vec![range])
    }
}

impl FromStr for RangeSet {
    type Err = VersionParseError;

    /// Splits on commas and parses each trimmed piece as a [`Range`]. Empty pieces, e.g. from a
    /// trailing comma, are skipped. The first invalid range fails the whole set.
    fn from_str(ranges: &str) -> Result<Self, Self::Err> {
        ranges
            .split(',')
            .map(str::trim)
            .filter(|range| {
                if range.is_empty() {
                    trace!("Skipping empty range in `{ranges}`");
                    false
                } else {
                    true
                }
            })
            .map(Range::from_str)
            .collect()
    }
}

/// The ranges joined with `,` and no whitespace, e.g. `>=1.0,<2.0`.
impl Display for RangeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, range) in self.0.iter().enumerate() {
            if idx == 0 {
                write!(f, "{range}")?;
            } else {
                write!(f, ",{range}")?;
            }
        }
        Ok(())
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for RangeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl Serialize for RangeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
