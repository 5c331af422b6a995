use std::hash::Hash;

use crate::fsa::Fsa;

impl<S: Eq + Hash, Input: Eq + Hash> Fsa<S, Input> {
    /// True when there are no epsilon edges and no state has two targets
    /// for the same symbol. Unreachable states count too.
    pub fn deterministic(&self) -> bool {
        self.states.iter().all(|state| {
            state.epsilons.is_empty()
                && state.transitions.values().all(|targets| targets.len() <= 1)
        })
    }
}
