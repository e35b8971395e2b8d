use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::VersionParseError;
use crate::parse::parse_version;

/// The kind of a pre-release, in ascending order.
///
/// <https://peps.python.org/pep-0440/#pre-releases>
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrereleaseKind {
    /// `a`, also spelled `alpha`
    Alpha,
    /// `b`, also spelled `beta`
    Beta,
    /// `rc`, also spelled `c`, `pre` or `preview`
    Rc,
}

impl Display for PrereleaseKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alpha => write!(f, "a"),
            Self::Beta => write!(f, "b"),
            Self::Rc => write!(f, "rc"),
        }
    }
}

/// A pre-release such as `rc5`: the normalized label plus its number.
///
/// Ordered by kind first, then by number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prerelease {
    /// The kind of pre-release.
    pub kind: PrereleaseKind,
    /// The number following the label, `0` if the input had none.
    pub number: u64,
}

impl Display for Prerelease {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind, self.number)
    }
}

/// A version number such as `1.2.3` or `4!5.6.7rc8.post9.dev0+local`.
///
/// Parse with [`Version::from_str`] or [`str::parse`]:
///
/// ```rust
/// use std::str::FromStr;
/// use pep440_match::Version;
///
/// let version = Version::from_str("1.0alpha1").unwrap();
/// assert_eq!(version.to_string(), "1.0a1");
/// assert!(version < "1.0".parse().unwrap());
/// ```
///
/// Equality, ordering and hashing ignore trailing zeros in the release (`1.0 == 1.0.0`) and the
/// local segment (`1.0+abc == 1.0+xyz`). Use [`Version::strict_eq`] to also compare the local
/// segment. Display keeps the release as written, so `1.0.0` stays `1.0.0`.
#[derive(Clone, Debug)]
pub struct Version {
    epoch: u64,
    release: Vec<u64>,
    pre: Option<Prerelease>,
    post: Option<u64>,
    dev: Option<u64>,
    local: Option<String>,
}

impl Version {
    /// Create a new version from an iterator of release segments, such as `[3, 8]` for `3.8`.
    ///
    /// A release has at least one segment, an empty iterator gives the release `0`.
    pub fn new<I, R>(release_numbers: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Borrow<u64>,
    {
        Self {
            epoch: 0,
            release: collect_release(release_numbers),
            pre: None,
            post: None,
            dev: None,
            local: None,
        }
    }

    /// The [versioning epoch](https://peps.python.org/pep-0440/#version-epochs), `0` unless
    /// the version has an `N!` prefix.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The release segments, such as `[1, 2, 3]` for `1.2.3`, with trailing zeros as written.
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// The [pre-release](https://peps.python.org/pep-0440/#pre-releases), if any.
    pub fn pre(&self) -> Option<Prerelease> {
        self.pre
    }

    /// The [post-release](https://peps.python.org/pep-0440/#post-releases) number, if any.
    pub fn post(&self) -> Option<u64> {
        self.post
    }

    /// The [development release](https://peps.python.org/pep-0440/#developmental-releases)
    /// number, if any.
    pub fn dev(&self) -> Option<u64> {
        self.dev
    }

    /// The [local version label](https://peps.python.org/pep-0440/#local-version-identifiers)
    /// after the `+`, as written.
    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }

    /// Whether this is an alpha/beta/rc version
    pub fn is_pre(&self) -> bool {
        self.pre.is_some()
    }

    /// Whether this is a post version
    pub fn is_post(&self) -> bool {
        self.post.is_some()
    }

    /// Whether this is a dev version
    pub fn is_dev(&self) -> bool {
        self.dev.is_some()
    }

    /// Whether this is a local version (e.g. `1.2.3+deadbeef`)
    pub fn is_local(&self) -> bool {
        self.local.is_some()
    }

    /// Whether this is an alpha/beta/rc or dev version
    pub fn any_prerelease(&self) -> bool {
        self.is_pre() || self.is_dev()
    }

    /// Whether this is neither a pre-release nor a dev version.
    pub fn is_stable(&self) -> bool {
        !self.any_prerelease()
    }

    /// Set the epoch and return the updated version.
    #[must_use]
    pub fn with_epoch(mut self, epoch: u64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Replace the release segments and return the updated version.
    ///
    /// As with [`Version::new`], an empty iterator gives the release `0`.
    #[must_use]
    pub fn with_release<I, R>(mut self, release_numbers: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Borrow<u64>,
    {
        self.release = collect_release(release_numbers);
        self
    }

    /// Set the pre-release component and return the updated version.
    #[must_use]
    pub fn with_pre(mut self, pre: Option<Prerelease>) -> Self {
        self.pre = pre;
        self
    }

    /// Set the post-release number and return the updated version.
    #[must_use]
    pub fn with_post(mut self, post: Option<u64>) -> Self {
        self.post = post;
        self
    }

    /// Set the dev-release number and return the updated version.
    #[must_use]
    pub fn with_dev(mut self, dev: Option<u64>) -> Self {
        self.dev = dev;
        self
    }

    /// Set the local label and return the updated version.
    #[must_use]
    pub fn with_local(mut self, local: Option<String>) -> Self {
        self.local = local;
        self
    }

    /// Drop the local label.
    #[must_use]
    pub fn without_local(self) -> Self {
        self.with_local(None)
    }

    /// Keep only the epoch and the release, e.g. `1!2.0` for `1!2.0rc1.post3+abc`.
    #[must_use]
    pub fn only_release(&self) -> Self {
        Self::new(&self.release).with_epoch(self.epoch)
    }

    /// Equality that also requires the local labels to match, including both being absent.
    ///
    /// ```rust
    /// use pep440_match::Version;
    ///
    /// let abc: Version = "1.0+abc".parse().unwrap();
    /// let xyz: Version = "1.0+xyz".parse().unwrap();
    /// assert_eq!(abc, xyz);
    /// assert!(!abc.strict_eq(&xyz));
    /// ```
    pub fn strict_eq(&self, other: &Self) -> bool {
        self == other && self.local == other.local
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Parses a version such as `1.19`, `1.0a1`, `1.0+abc.5` or `1!2012.2`.
    ///
    /// The whole input must match; surrounding whitespace is rejected.
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        parse_version(version)
    }
}

/// Shows the normalized version.
impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}!", self.epoch)?;
        }
        for (index, segment) in self.release.iter().enumerate() {
            if index == 0 {
                write!(f, "{segment}")?;
            } else {
                write!(f, ".{segment}")?;
            }
        }
        if let Some(pre) = self.pre {
            write!(f, "{pre}")?;
        }
        if let Some(post) = self.post {
            write!(f, ".post{post}")?;
        }
        if let Some(dev) = self.dev {
            write!(f, ".dev{dev}")?;
        }
        if let Some(local) = &self.local {
            write!(f, "+{local}")?;
        }
        Ok(())
    }
}

fn collect_release<I, R>(release_numbers: I) -> Vec<u64>
where
    I: IntoIterator<Item = R>,
    R: Borrow<u64>,
{
    let mut release: Vec<u64> = release_numbers
        .into_iter()
        .map(|number| *number.borrow())
        .collect();
    if release.is_empty() {
        release.push(0);
    }
    release
}

/// The release without its trailing zeros, so that `1.0.0`, `1.0` and `1` compare equal.
fn trim_release(release: &[u64]) -> &[u64] {
    let len = release
        .iter()
        .rposition(|segment| *segment != 0)
        .map_or(0, |last| last + 1);
    &release[..len]
}

/// Compare the release parts of two versions, e.g. `4.3.1` > `4.2`, `1.1.0` == `1.1` and
/// `1.16` < `1.19`.
fn compare_release(this: &[u64], other: &[u64]) -> Ordering {
    trim_release(this).cmp(trim_release(other))
}

/// Orders a suffix that places a version *before* its plain release (`dev` and `pre`): being
/// present sorts lower than being absent, two present values compare directly.
fn compare_leading<T: Ord>(this: Option<T>, other: Option<T>) -> Ordering {
    match (this, other) {
        (Some(this), Some(other)) => this.cmp(&other),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Ord for Version {
    /// Compares epoch, release, dev, pre and post in that order, stopping at the first
    /// difference. For a fixed release:
    ///
    /// 1.0.dev1 < 1.0a1 < 1.0b1 < 1.0rc1 < 1.0 < 1.0.post1
    ///
    /// `None` sorts before `Some` for post, which is exactly the `Option` order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| compare_release(&self.release, &other.release))
            .then_with(|| compare_leading(self.dev, other.dev))
            .then_with(|| compare_leading(self.pre, other.pre))
            .then_with(|| self.post.cmp(&other.post))
    }
}

impl PartialOrd<Self> for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<Self> for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    /// Custom implementation ignoring trailing zeros and the local label, matching `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.epoch.hash(state);
        trim_release(&self.release).hash(state);
        self.pre.hash(state);
        self.post.hash(state);
        self.dev.hash(state);
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
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
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests;
