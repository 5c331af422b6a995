//! Subset (powerset) construction.
//!
//! Every DFA state stands for the epsilon-closed set of NFA states the NFA
//! can be in after reading some input. Sets are interned by value, so each
//! reachable set becomes exactly one DFA state and is expanded once.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::{FsaError, Result};
use crate::fsa::{Fsa, StateRef};
use crate::state_set::StateSet;

/// Knobs for `Fsa::powerset_construction`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SubsetConfig {
    /// Fail with `CapacityExceeded` instead of building more DFA states
    /// than this. `None` is unbounded.
    pub max_states: Option<usize>,
}

impl SubsetConfig {
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = Some(max_states);
        self
    }

    fn check(&self, states: usize) -> Result<()> {
        match self.max_states {
            Some(limit) if states > limit => Err(FsaError::CapacityExceeded { limit }),
            _ => Ok(()),
        }
    }
}

/// The result of a subset construction.
#[derive(Clone, Debug)]
pub struct Determinized<Input: Eq + Hash> {
    /// States are numbered `0..n` in discovery order; `0` is the start.
    pub dfa: Fsa<usize, Input>,
    /// `subsets[n]` is the set of NFA states DFA state `n` stands for.
    pub subsets: Vec<StateSet>,
}

impl<Input: Eq + Hash> Determinized<Input> {
    pub fn subset(&self, dfa_state: StateRef) -> Option<&StateSet> {
        self.subsets.get(dfa_state)
    }
}

impl<S, Input> Fsa<S, Input>
where
    S: Eq + Hash + Clone + Debug,
    Input: Eq + Hash + Clone,
{
    /// An equivalent automaton without epsilon edges or choices.
    pub fn to_dfa(&self) -> Result<Fsa<usize, Input>> {
        self.powerset_construction(&SubsetConfig::default())
            .map(|determinized| determinized.dfa)
    }

    pub fn powerset_construction(&self, config: &SubsetConfig) -> Result<Determinized<Input>> {
        let mut dfa = Fsa::new();
        let mut subsets: Vec<StateSet> = Vec::new();

        let cur_states = match self.initial() {
            Ok(states) => states,
            Err(FsaError::NoStartState) => {
                debug!("no start state, subset construction yields an empty automaton");
                return Ok(Determinized { dfa, subsets });
            }
            Err(err) => return Err(err),
        };

        let mut states_map: HashMap<StateSet, StateRef> = HashMap::new();
        config.check(1)?;
        dfa.add_state(0, true, self.contains_accepting(&cur_states))?;
        states_map.insert(cur_states.clone(), 0);
        subsets.push(cur_states.clone());

        let mut worklist = vec![(cur_states, 0)];
        while let Some((cur_states, cur_num)) = worklist.pop() {
            for symbol in &self.alphabet {
                let nxt_states = self.advance(&cur_states, symbol);

                // Skip the stuck state
                if nxt_states.is_empty() {
                    continue;
                }

                let nxt_num = match states_map.get(&nxt_states) {
                    Some(&nxt_num) => nxt_num,
                    None => {
                        let nxt_num = subsets.len();
                        config.check(nxt_num + 1)?;
                        trace!("interned {} as DFA state {}", nxt_states, nxt_num);
                        dfa.add_state(nxt_num, false, self.contains_accepting(&nxt_states))?;
                        states_map.insert(nxt_states.clone(), nxt_num);
                        subsets.push(nxt_states.clone());
                        worklist.push((nxt_states, nxt_num));
                        nxt_num
                    }
                };

                dfa.add_transition(&cur_num, &nxt_num, Some(symbol.clone()))?;
            }
        }

        debug!(
            "subset construction: {} NFA states became {} DFA states",
            self.len(),
            dfa.len()
        );
        Ok(Determinized { dfa, subsets })
    }
}
