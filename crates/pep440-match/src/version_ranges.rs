//! Convert [`RangeSet`] and [`Range`] to [`Ranges`], for use with solvers built on
//! `version-ranges`.

use version_ranges::Ranges;

use crate::{Operator, Range, RangeSet, Version};

impl From<RangeSet> for Ranges<Version> {
    /// The intersection of all ranges in the set. An empty set is the full range.
    fn from(ranges: RangeSet) -> Self {
        let mut intersection = Self::full();
        for range in ranges {
            intersection = intersection.intersection(&Self::from(range));
        }
        intersection
    }
}

impl From<Range> for Ranges<Version> {
    /// The versions that [`Range::matches`] accepts.
    fn from(range: Range) -> Self {
        let (operator, version) = range.into_parts();
        match operator {
            Operator::Equal => Self::singleton(version),
            Operator::NotEqual => Self::singleton(version).complement(),
            Operator::LessThan => Self::strictly_lower_than(version),
            Operator::LessThanEqual => Self::lower_than(version),
            Operator::GreaterThan => Self::strictly_higher_than(version),
            Operator::GreaterThanEqual => Self::higher_than(version),
            Operator::TildeEqual => {
                Self::from_range_bounds(Range::new(operator, version).compatible_bounds())
            }
        }
    }
}
