//! Epsilon closures.
//!
//! A closure is the fixed point of following epsilon edges. It is computed
//! with a worklist; a state is pushed only the first time it enters the
//! result, which is what makes epsilon cycles terminate.

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
    /// The states reachable from `state` through epsilon edges alone,
    /// including `state` itself.
    pub fn closure(&self, state: &S) -> Result<StateSet> {
        let state = self.lookup(state)?;
        Ok(self.closure_of(state))
    }
}

impl<S: Eq + Hash, Input: Eq + Hash> Fsa<S, Input> {
    pub fn closure_of(&self, state: StateRef) -> StateSet {
        self.close(StateSet::singleton(state))
    }

    /// Closes all of `states` in a single traversal.
    pub fn closure_set(&self, states: &StateSet) -> StateSet {
        self.close(states.clone())
    }

    fn close(&self, mut closed: StateSet) -> StateSet {
        let mut worklist: Vec<StateRef> = closed.iter().collect();
        while let Some(state) = worklist.pop() {
            // Refs from another automaton stay in the set but have no edges here
            let epsilons = match self.states.get(state) {
                Some(st) => &st.epsilons,
                None => continue,
            };
            for target in epsilons.iter() {
                if closed.insert(target) {
                    worklist.push(target);
                }
            }
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyclic() -> Fsa {
        // 0 -> 1 -> 2 -> 0 on epsilon, 2 -a-> 3, 3 -> 4 on epsilon
        let mut fsa = Fsa::new();
        for id in 0..5 {
            fsa.add_state(id, id == 0, id == 4).unwrap();
        }
        fsa.add_epsilon(&0, &1).unwrap();
        fsa.add_epsilon(&1, &2).unwrap();
        fsa.add_epsilon(&2, &0).unwrap();
        fsa.add_transition(&2, &3, Some('a')).unwrap();
        fsa.add_epsilon(&3, &4).unwrap();
        fsa
    }

    #[test]
    fn epsilon_cycles_terminate() {
        let fsa = cyclic();
        for id in 0..3 {
            let closure = fsa.closure(&id).unwrap();
            assert_eq!(closure.to_string(), "{0,1,2}");
        }
    }

    #[test]
    fn closure_contains_the_seed_and_is_closed() {
        let fsa = cyclic();
        for id in 0..5 {
            let closure = fsa.closure(&id).unwrap();
            assert!(closure.contains(id));
            assert_eq!(fsa.closure_set(&closure), closure);
        }
        assert_eq!(fsa.closure(&3).unwrap().to_string(), "{3,4}");
        assert_eq!(fsa.closure(&4).unwrap().to_string(), "{4}");
    }

    #[test]
    fn closure_set_is_the_union_of_closures() {
        let fsa = cyclic();
        let seeds: StateSet = vec![1, 3].into_iter().collect();
        let expected = fsa.closure_of(1).union(&fsa.closure_of(3));
        assert_eq!(fsa.closure_set(&seeds), expected);
        assert!(fsa.closure_set(&StateSet::new()).is_empty());
    }

    #[test]
    fn foreign_refs_do_not_panic() {
        let fsa = cyclic();
        assert_eq!(fsa.closure_of(42).to_string(), "{42}");
        assert!(fsa.closure(&42).is_err());
    }
}
