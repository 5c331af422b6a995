use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::fsa::{Fsa, StateRef};
use crate::state_set::StateSet;

impl<S, Input> Fsa<S, Input>
where
    S: Eq + Hash + Clone + Debug,
    Input: Eq + Hash + Clone,
{
    /// States reachable from `state` by reading `symbol`, epsilon edges
    /// included on both sides. The result is already closed.
    pub fn next(&self, state: &S, symbol: &Input) -> Result<StateSet> {
        let state = self.lookup(state)?;
        Ok(self.next_of(state, symbol))
    }
}

impl<S: Eq + Hash, Input: Eq + Hash> Fsa<S, Input> {
    pub fn next_of(&self, state: StateRef, symbol: &Input) -> StateSet {
        self.advance(&self.closure_of(state), symbol)
    }

    /// Union of `next` over every member of `states`.
    pub fn next_set(&self, states: &StateSet, symbol: &Input) -> StateSet {
        self.advance(&self.closure_set(states), symbol)
    }

    /// Steps an already closed set over `symbol` and closes the targets.
    #[inline]
    pub(crate) fn advance(&self, closed: &StateSet, symbol: &Input) -> StateSet {
        let mut nxt_states = StateSet::new();
        for state in closed.iter() {
            let targets = self
                .states
                .get(state)
                .and_then(|st| st.transitions.get(symbol));
            if let Some(targets) = targets {
                nxt_states.union_with(targets);
            }
        }
        if nxt_states.is_empty() {
            return nxt_states;
        }
        self.closure_set(&nxt_states)
    }
}
