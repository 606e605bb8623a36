//! Shortest-path distances with an explicit unreachable marker.

use std::cmp::Ordering;

use serde::{Serialize, Serializer};

use super::edge::Weight;

/// Distance from a shortest-path source.
///
/// `Unreachable` compares greater than every finite distance and never
/// converts to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distance {
    /// Known path cost.
    Finite(Weight),
    /// No path from the source.
    #[default]
    Unreachable,
}

impl Distance {
    /// Zero distance (the source itself).
    pub const ZERO: Distance = Distance::Finite(0);

    /// The finite value, if any.
    pub fn finite(self) -> Option<Weight> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Unreachable => None,
        }
    }

    /// Whether a path exists.
    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Extend this distance by an edge weight. Saturates instead of wrapping.
    pub fn add_weight(self, weight: Weight) -> Self {
        match self {
            Self::Finite(d) => Self::Finite(d.saturating_add(weight)),
            Self::Unreachable => Self::Unreachable,
        }
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.cmp(b),
            (Self::Finite(_), Self::Unreachable) => Ordering::Less,
            (Self::Unreachable, Self::Finite(_)) => Ordering::Greater,
            (Self::Unreachable, Self::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", d),
            Self::Unreachable => write!(f, "Not Reachable"),
        }
    }
}

/// Serializes as a number, or `null` when unreachable.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(d) => serializer.serialize_u64(*d),
            Self::Unreachable => serializer.serialize_none(),
        }
    }
}
