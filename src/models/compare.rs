// Ordering and compatibility predicates over Version values
//
// Equality, hashing, and ordering all range over the same four-element key
// `[major, minor, patch, pre]`; build metadata never participates.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::models::version::Version;

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl Ord for Version {
    /// Element-wise byte-lexicographic comparison; the first differing
    /// segment decides.
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparison_key().cmp(&other.comparison_key())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Version {
    /// Compatible-release check modeled on Ruby's `~>` operator: is `self` at
    /// least as new as `floor` and within the same compatibility family?
    ///
    /// A floor whose minor segment is `"0"` matches any minor/patch within
    /// the same major; otherwise major and minor must match exactly and the
    /// patch must not sort below the floor's. Pre-release and build metadata
    /// are not consulted.
    pub fn pessimistic_greater_than(&self, floor: &Self) -> bool {
        if self.comparison_key() == floor.comparison_key() {
            return true;
        }

        if floor.minor == "0" && self.major == floor.major {
            return true;
        }

        self.major == floor.major && self.minor == floor.minor && self.patch >= floor.patch
    }
}
