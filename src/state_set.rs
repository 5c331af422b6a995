use std::fmt;
use std::hash::{Hash, Hasher};

use bit_set::BitSet;

use crate::fsa::StateRef;

/// A set of states of one automaton, identified by their `StateRef`.
///
/// Backed by a bitset, so membership and insertion are O(1). Two sets are
/// equal (and hash the same) when they have the same members, regardless
/// of how much capacity either one has grown.
#[derive(Clone, Default)]
pub struct StateSet {
    bits: BitSet,
}

impl StateSet {
    pub fn new() -> Self {
        StateSet { bits: BitSet::new() }
    }

    pub fn singleton(state: StateRef) -> Self {
        let mut set = StateSet::new();
        set.insert(state);
        set
    }

    #[inline]
    pub fn contains(&self, state: StateRef) -> bool {
        self.bits.contains(state)
    }

    /// Adds `state`, returning `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, state: StateRef) -> bool {
        self.bits.insert(state)
    }

    pub fn union(&self, other: &StateSet) -> StateSet {
        let mut bits = self.bits.clone();
        bits.union_with(&other.bits);
        StateSet { bits }
    }

    pub fn union_with(&mut self, other: &StateSet) {
        self.bits.union_with(&other.bits);
    }

    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.iter().all(|state| other.contains(state))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateRef> + '_ {
        self.bits.iter()
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for StateSet {}

impl Hash for StateSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for member in self.iter() {
            member.hash(state);
        }
    }
}

impl FromIterator<StateRef> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateRef>>(iter: I) -> Self {
        let mut set = StateSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<StateRef> for StateSet {
    fn extend<I: IntoIterator<Item = StateRef>>(&mut self, iter: I) {
        for state in iter {
            self.insert(state);
        }
    }
}

impl<'a> Extend<&'a StateRef> for StateSet {
    fn extend<I: IntoIterator<Item = &'a StateRef>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned())
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_braced(f, self.iter())
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Writes `{a,b,c}`.
pub(crate) fn write_braced<T, I>(f: &mut fmt::Formatter, items: I) -> fmt::Result
where
    T: fmt::Display,
    I: IntoIterator<Item = T>,
{
    f.write_str("{")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("}")
}
