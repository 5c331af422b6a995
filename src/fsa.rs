use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use bit_vec::BitVec;
use indexmap::{IndexMap, IndexSet};
use log::trace;

use crate::error::{unknown_state, FsaError, Result};
use crate::state_set::{write_braced, StateSet};

/// Dense index of a state, assigned in the order states are added.
pub type StateRef = usize;

#[derive(Clone, Debug)]
pub(crate) struct FsaState<Input: Eq + Hash> {
    pub(crate) epsilons: StateSet,
    pub(crate) transitions: IndexMap<Input, StateSet>,
}

impl<Input: Eq + Hash> FsaState<Input> {
    fn new() -> Self {
        FsaState {
            epsilons: StateSet::new(),
            transitions: IndexMap::new(),
        }
    }
}

/// A finite automaton over caller-chosen state labels, possibly with
/// epsilon transitions.
///
/// Labels are interned to dense `StateRef`s in insertion order; every
/// query works on those, so `StateSet`s returned by one automaton are
/// only meaningful for that automaton.
#[derive(Clone, Debug)]
pub struct Fsa<S: Eq + Hash = usize, Input: Eq + Hash = char> {
    pub(crate) labels: IndexSet<S>,
    pub(crate) states: Vec<FsaState<Input>>,
    pub(crate) finals: BitVec,
    pub(crate) start: Option<StateRef>,
    pub(crate) alphabet: IndexSet<Input>,
}

/// One edge of an automaton; a `None` symbol is an epsilon edge.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Transition<'a, S, Input> {
    pub from: &'a S,
    pub symbol: Option<&'a Input>,
    pub to: &'a S,
}

impl<S: Eq + Hash, Input: Eq + Hash> Default for Fsa<S, Input> {
    fn default() -> Self {
        Fsa {
            labels: IndexSet::new(),
            states: Vec::new(),
            finals: BitVec::new(),
            start: None,
            alphabet: IndexSet::new(),
        }
    }
}

impl<S, Input> Fsa<S, Input>
where
    S: Eq + Hash + Clone + Debug,
    Input: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id`, or overwrites its flags if it already exists.
    ///
    /// Only one state can be the start state: flagging a second one fails
    /// with `DuplicateStart` and leaves the automaton as it was. Use
    /// `set_start` to move the start state explicitly.
    pub fn add_state(&mut self, id: S, is_start: bool, is_accepting: bool) -> Result<StateRef> {
        let existing = self.labels.get_index_of(&id);
        if is_start {
            if let Some(current) = self.start {
                if Some(current) != existing {
                    trace!("rejected second start state {:?}", id);
                    return Err(FsaError::DuplicateStart {
                        current: format!("{:?}", self.labels[current]),
                        requested: format!("{:?}", id),
                    });
                }
            }
        }

        let state = match existing {
            Some(state) => {
                self.finals.set(state, is_accepting);
                state
            }
            None => {
                let (state, _) = self.labels.insert_full(id);
                self.states.push(FsaState::new());
                self.finals.push(is_accepting);
                state
            }
        };

        if is_start {
            self.start = Some(state);
        } else if self.start == Some(state) {
            self.start = None;
        }
        Ok(state)
    }

    /// Makes `id` the start state, replacing any previous one.
    pub fn set_start(&mut self, id: &S) -> Result<()> {
        let state = self.lookup(id)?;
        self.start = Some(state);
        Ok(())
    }

    /// Adds the edge `from --symbol--> to`, where a `None` symbol is epsilon.
    /// Both endpoints must have been added before.
    pub fn add_transition(&mut self, from: &S, to: &S, symbol: Option<Input>) -> Result<()> {
        let from = self.lookup(from)?;
        let to = self.lookup(to)?;
        let state = &mut self.states[from];
        match symbol {
            None => {
                state.epsilons.insert(to);
            }
            Some(symbol) => {
                state
                    .transitions
                    .entry(symbol.clone())
                    .or_insert_with(StateSet::new)
                    .insert(to);
                self.alphabet.insert(symbol);
            }
        }
        Ok(())
    }

    pub fn add_epsilon(&mut self, from: &S, to: &S) -> Result<()> {
        self.add_transition(from, to, None)
    }

    pub(crate) fn lookup(&self, id: &S) -> Result<StateRef> {
        self.labels.get_index_of(id).ok_or_else(|| {
            trace!("lookup of unknown state {:?}", id);
            unknown_state(id)
        })
    }

    /// Interns a group of labels as a `StateSet` of this automaton.
    pub fn set_of<'a, I>(&self, ids: I) -> Result<StateSet>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        ids.into_iter().map(|id| self.lookup(id)).collect()
    }

    /// Closure of the start state, or `NoStartState`.
    pub fn initial(&self) -> Result<StateSet> {
        self.start
            .map(|start| self.closure_of(start))
            .ok_or(FsaError::NoStartState)
    }
}

impl<S: Eq + Hash, Input: Eq + Hash> Fsa<S, Input> {
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state_ref(&self, id: &S) -> Option<StateRef> {
        self.labels.get_index_of(id)
    }

    pub fn label(&self, state: StateRef) -> Option<&S> {
        self.labels.get_index(state)
    }

    /// All state labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &S> {
        self.labels.iter()
    }

    pub fn start(&self) -> Option<&S> {
        self.start.and_then(|start| self.label(start))
    }

    pub fn start_ref(&self) -> Option<StateRef> {
        self.start
    }

    pub fn is_accepting(&self, id: &S) -> bool {
        self.state_ref(id)
            .map_or(false, |state| self.is_accepting_ref(state))
    }

    #[inline]
    pub fn is_accepting_ref(&self, state: StateRef) -> bool {
        self.finals.get(state).unwrap_or(false)
    }

    pub fn contains_accepting(&self, states: &StateSet) -> bool {
        states.iter().any(|state| self.is_accepting_ref(state))
    }

    /// Non-epsilon symbols in the order they were first used.
    pub fn alphabet(&self) -> impl Iterator<Item = &Input> {
        self.alphabet.iter()
    }

    /// Every edge, grouped by source state in insertion order. Epsilon edges
    /// come first, then symbols in first-use order, targets ascending.
    pub fn transitions(&self) -> impl Iterator<Item = Transition<'_, S, Input>> {
        let labels = &self.labels;
        self.states.iter().enumerate().flat_map(move |(from, state)| {
            let from = &labels[from];
            let epsilons = state.epsilons.iter().map(move |to| Transition {
                from,
                symbol: None,
                to: &labels[to],
            });
            let symbols = state.transitions.iter().flat_map(move |(symbol, targets)| {
                targets.iter().map(move |to| Transition {
                    from,
                    symbol: Some(symbol),
                    to: &labels[to],
                })
            });
            epsilons.chain(symbols)
        })
    }

    /// Renders `states` by label, sorted ascending: `{1,2,4}`.
    pub fn display_set<'a>(&'a self, states: &'a StateSet) -> SetDisplay<'a, S, Input> {
        SetDisplay { fsa: self, states }
    }
}

pub struct SetDisplay<'a, S: Eq + Hash, Input: Eq + Hash> {
    fsa: &'a Fsa<S, Input>,
    states: &'a StateSet,
}

impl<'a, S, Input> Display for SetDisplay<'a, S, Input>
where
    S: Eq + Hash + Ord + Display,
    Input: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut labels: Vec<&S> = self
            .states
            .iter()
            .filter_map(|state| self.fsa.label(state))
            .collect();
        labels.sort();
        write_braced(f, labels)
    }
}
