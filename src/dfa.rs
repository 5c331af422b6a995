//! Dense transition tables for deterministic automata.

use std::fmt::Debug;
use std::hash::Hash;

use bit_vec::BitVec;
use indexmap::IndexSet;
use log::debug;

use crate::automaton::Automaton;
use crate::error::{FsaError, Result};
use crate::fsa::Fsa;

/// Row of the state that accepts nothing. Every missing edge leads here.
pub const DFA_STUCK: usize = 0;
/// Row of the first state added to the frozen automaton.
pub const DFA_START: usize = 1;

#[derive(Clone, Debug)]
pub struct DFAState {
    /// Target row per symbol, in alphabet order.
    pub transitions: Box<[usize]>,
}

/// A deterministic automaton frozen into a table.
///
/// Row `r + 1` is state `r` of the automaton it was frozen from.
#[derive(Clone, Debug)]
pub struct DFA<Input: Eq + Hash = char> {
    alphabet: IndexSet<Input>,
    pub states: Box<[DFAState]>,
    pub finals: BitVec,
    start: Option<usize>,
}

impl<Input: Eq + Hash> DFA<Input> {
    /// The row the simulation starts in, if any.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    #[inline]
    pub fn column(&self, input: &Input) -> Option<usize> {
        self.alphabet.get_index_of(input)
    }
}

impl<S, Input> Fsa<S, Input>
where
    S: Eq + Hash + Clone + Debug,
    Input: Eq + Hash + Clone,
{
    /// Freezes a deterministic automaton into a `DFA` table.
    pub fn freeze(&self) -> Result<DFA<Input>> {
        if !self.deterministic() {
            return Err(FsaError::NotDeterministic);
        }

        let width = self.alphabet.len();
        let mut finals = BitVec::with_capacity(self.len() + 1);
        let mut states = Vec::with_capacity(self.len() + 1);

        finals.push(false);
        states.push(DFAState {
            transitions: vec![DFA_STUCK; width].into_boxed_slice(),
        });

        for (n, state) in self.states.iter().enumerate() {
            let mut transitions = vec![DFA_STUCK; width];
            for (symbol, targets) in &state.transitions {
                let column = self.alphabet.get_index_of(symbol);
                if let (Some(column), Some(to)) = (column, targets.iter().next()) {
                    transitions[column] = to + 1;
                }
            }
            finals.push(self.is_accepting_ref(n));
            states.push(DFAState {
                transitions: transitions.into_boxed_slice(),
            });
        }

        debug!("froze {} states over {} symbols", self.len(), width);
        Ok(DFA {
            alphabet: self.alphabet.clone(),
            states: states.into_boxed_slice(),
            finals,
            start: self.start.map(|start| start + 1),
        })
    }
}

impl<Input: Eq + Hash> Automaton<Input> for DFA<Input> {
    type State = usize;

    #[inline]
    fn start_state(&self) -> Option<Self::State> {
        self.start
    }

    #[inline]
    fn next_state(&self, state: &Self::State, input: &Input) -> Self::State {
        match (self.column(input), self.states.get(*state)) {
            (Some(column), Some(row)) => row.transitions[column],
            _ => DFA_STUCK,
        }
    }

    #[inline]
    fn is_stuck(&self, state: &Self::State) -> bool {
        *state == DFA_STUCK
    }

    #[inline]
    fn is_accepting(&self, state: &Self::State) -> bool {
        self.finals.get(*state).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Binary numbers divisible by three
    fn mod_three() -> Fsa<&'static str> {
        let mut fsa = Fsa::new();
        fsa.add_state("r0", true, true).unwrap();
        fsa.add_state("r1", false, false).unwrap();
        fsa.add_state("r2", false, false).unwrap();
        for &(from, symbol, to) in &[
            ("r0", '0', "r0"),
            ("r0", '1', "r1"),
            ("r1", '0', "r2"),
            ("r1", '1', "r0"),
            ("r2", '0', "r1"),
            ("r2", '1', "r2"),
        ] {
            fsa.add_transition(&from, &to, Some(symbol)).unwrap();
        }
        fsa
    }

    #[test]
    fn rows_are_shifted_past_the_stuck_row() {
        let dfa = mod_three().freeze().unwrap();
        assert_eq!(dfa.start(), Some(DFA_START));
        assert_eq!(dfa.states.len(), 4);
        assert_eq!(&*dfa.states[DFA_STUCK].transitions, &[0, 0]);
        assert_eq!(&*dfa.states[1].transitions, &[1, 2]);
        assert_eq!(&*dfa.states[2].transitions, &[3, 1]);
        assert!(dfa.finals[1]);
        assert!(!dfa.finals[DFA_STUCK]);
    }

    #[test]
    fn frozen_table_simulates_the_same_language() {
        let fsa = mod_three();
        let dfa = fsa.freeze().unwrap();
        for n in 0u32..64 {
            let word = format!("{:b}", n);
            assert_eq!(dfa.accepts(word.chars()), n % 3 == 0, "{}", word);
            assert_eq!(fsa.accepts(word.chars()), n % 3 == 0, "{}", word);
        }
        assert!(!dfa.accepts("102".chars()));
    }

    #[test]
    fn nondeterministic_automata_do_not_freeze() {
        let mut fsa = mod_three();
        fsa.add_epsilon(&"r0", &"r2").unwrap();
        assert_eq!(fsa.freeze().unwrap_err(), FsaError::NotDeterministic);
    }

    #[test]
    fn missing_start_freezes_to_a_rejecting_table() {
        let mut fsa = mod_three();
        fsa.add_state("r0", false, true).unwrap();
        let dfa = fsa.freeze().unwrap();
        assert_eq!(dfa.start(), None);
        assert!(!dfa.accepts("".chars()));
        assert_eq!(dfa.longest_prefix(&['0', '0']), None);
    }
}
