//! Alternative sets.
//!
//! Alternatives are numbered from 1 by the prediction engine. The set keeps
//! them sorted and deduplicated, inline for the common case of a handful of
//! conflicting alternatives. Storage grows with the number of alternatives,
//! never with their magnitude.

use std::fmt;
use std::iter::Copied;
use std::slice;

use smallvec::SmallVec;

/// Set of grammar alternative numbers.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct AltSet {
    alts: SmallVec<[usize; 4]>,
}

impl AltSet {
    /// Create an empty set.
    pub fn new() -> Self {
        AltSet {
            alts: SmallVec::new(),
        }
    }

    /// Add an alternative. Returns `true` if it was not already present.
    pub fn insert(&mut self, alt: usize) -> bool {
        match self.alts.binary_search(&alt) {
            Ok(_) => false,
            Err(pos) => {
                self.alts.insert(pos, alt);
                true
            }
        }
    }

    /// Number of alternatives in the set.
    pub fn len(&self) -> usize {
        self.alts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alts.is_empty()
    }

    /// Iterate alternatives in ascending order.
    pub fn iter(&self) -> Copied<slice::Iter<'_, usize>> {
        self.alts.iter().copied()
    }
}

impl FromIterator<usize> for AltSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = AltSet::new();
        for alt in iter {
            set.insert(alt);
        }
        set
    }
}

impl<'a> IntoIterator for &'a AltSet {
    type Item = usize;
    type IntoIter = Copied<slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AltSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, alt) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{alt}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for AltSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AltSet{self}")
    }
}
