use std::fmt::{Display, Formatter};
use std::ops::{Bound, RangeBounds};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::trace;

use crate::{ParseErrorKind, Version, VersionParseError};

/// One of `~=` `==` `!=` `<=` `>=` `<` `>`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
    /// `== 1.2.3`
    Equal,
    /// `!= 1.2.3`
    NotEqual,
    /// `< 1.2.3`
    LessThan,
    /// `<= 1.2.3`
    LessThanEqual,
    /// `> 1.2.3`
    GreaterThan,
    /// `>= 1.2.3`
    GreaterThanEqual,
    /// `~= 1.2.3`, the [compatible release](https://peps.python.org/pep-0440/#compatible-release)
    TildeEqual,
}

impl Operator {
    /// All operators, in the order a range's prefix is checked against them. The two-character
    /// operators come first so that `>=` isn't read as `>` followed by `=`.
    pub const ALL: [Self; 7] = [
        Self::TildeEqual,
        Self::GreaterThanEqual,
        Self::LessThanEqual,
        Self::NotEqual,
        Self::Equal,
        Self::GreaterThan,
        Self::LessThan,
    ];

    /// The operator symbol, e.g. `~=`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::TildeEqual => "~=",
        }
    }

    /// Split a leading operator off `input`, returning the operator and the rest.
    fn split_prefix(input: &str) -> Option<(Self, &str)> {
        Self::ALL.into_iter().find_map(|operator| {
            input
                .strip_prefix(operator.as_str())
                .map(|rest| (operator, rest))
        })
    }
}

impl FromStr for Operator {
    type Err = VersionParseError;

    /// Parses exactly one operator symbol, e.g. `>=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.as_str() == s)
            .ok_or_else(|| VersionParseError::new(s, ParseErrorKind::MissingOperator))
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single version constraint such as `>=1.2.3` or `~=2.2`, parse with [`Range::from_str`].
///
/// ```rust
/// use std::str::FromStr;
/// use pep440_match::{Range, Version};
///
/// let range = Range::from_str("~=2.2").unwrap();
/// assert!(range.matches(&Version::from_str("2.2.9").unwrap()));
/// assert!(!range.matches(&Version::from_str("2.3").unwrap()));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Range {
    operator: Operator,
    version: Version,
}

impl Range {
    /// Create a range from its operator and bound.
    pub fn new(operator: Operator, version: Version) -> Self {
        Self { operator, version }
    }

    /// Get the operator, e.g. `>=` in `>= 2.0.0`
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the version, e.g. `2.0.0` in `<= 2.0.0`
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Get the operator and version parts of this range.
    pub fn into_parts(self) -> (Operator, Version) {
        (self.operator, self.version)
    }

    /// Whether the given version satisfies the range.
    ///
    /// The comparison operators use the ordering of [`Version`] as is, so `==1.0` matches
    /// `1.0.0` and `1.0+local`, and `~=` holds for versions inside
    /// [`compatible_bounds`](Self::compatible_bounds).
    pub fn matches(&self, version: &Version) -> bool {
        match self.operator {
            Operator::Equal => version == &self.version,
            Operator::NotEqual => version != &self.version,
            Operator::LessThan => version < &self.version,
            Operator::LessThanEqual => version <= &self.version,
            Operator::GreaterThan => version > &self.version,
            Operator::GreaterThanEqual => version >= &self.version,
            Operator::TildeEqual => self.compatible_bounds().contains(version),
        }
    }

    /// The half-open interval `[V, upper)` that `~=V` stands for.
    ///
    /// The upper bound is `V` with its last release segment incremented: `~=2.2` is
    /// `[2.2, 2.3)`, `~=2.2.1` is `[2.2.1, 2.2.2)` and `~=2` is `[2, 3)`. Everything else about
    /// `V` carries over to the upper bound, so `~=2.2rc1` is `[2.2rc1, 2.3rc1)`. The upper bound is
    /// only unbounded if the increment would overflow.
    ///
    /// The bounds are computed from the version alone, whatever the operator.
    pub fn compatible_bounds(&self) -> (Bound<Version>, Bound<Version>) {
        let upper = self
            .version
            .release()
            .split_last()
            .and_then(|(last, prefix)| {
                let next = last.checked_add(1)?;
                Some(
                    self.version
                        .clone()
                        .with_release(prefix.iter().copied().chain([next])),
                )
            });

        match &upper {
            Some(upper) => trace!("Expanded `{self}` to [{}, {upper})", self.version),
            None => trace!("Expanded `{self}` to [{}, ∞)", self.version),
        }

        let upper = upper.map_or(Bound::Unbounded, Bound::Excluded);
        (Bound::Included(self.version.clone()), upper)
    }
}

impl FromStr for Range {
    type Err = VersionParseError;

    /// Parses a range such as `>=1.19`, `~=2.2` or `!=1!2012.2`.
    ///
    /// Surrounding whitespace is ignored. The operator must be directly followed by the version,
    /// so `>= 1.0` is rejected like the version ` 1.0` would be.
    fn from_str(range: &str) -> Result<Self, Self::Err> {
        let range = range.trim();
        let Some((operator, version)) = Operator::split_prefix(range) else {
            return Err(VersionParseError::new(range, ParseErrorKind::MissingOperator));
        };
        if version.is_empty() {
            return Err(VersionParseError::new(range, ParseErrorKind::MissingVersion));
        }
        let version = Version::from_str(version)?;
        Ok(Self { operator, version })
    }
}

/// The operator immediately followed by the normalized version, e.g. `~=1.0rc1`.
impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Range {
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
impl Serialize for Range {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
