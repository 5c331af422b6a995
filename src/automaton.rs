use std::fmt::Debug;
use std::hash::Hash;

use crate::fsa::Fsa;
use crate::state_set::StateSet;

/// Stepwise simulation of an automaton over a sequence of symbols.
pub trait Automaton<Input> {
    type State: Debug;

    /// The state before any input is read, or `None` if the automaton has
    /// no start state (and therefore accepts nothing).
    fn start_state(&self) -> Option<Self::State>;

    fn next_state(&self, state: &Self::State, input: &Input) -> Self::State;

    /// A stuck state accepts nothing, whatever input follows.
    fn is_stuck(&self, state: &Self::State) -> bool;

    fn is_accepting(&self, state: &Self::State) -> bool;

    /// Runs the whole input, giving up as soon as the run gets stuck.
    fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = Input>,
    {
        let mut state = match self.start_state() {
            Some(state) => state,
            None => return false,
        };
        for symbol in input {
            state = self.next_state(&state, &symbol);
            // Return early if "in stuck state"
            if self.is_stuck(&state) {
                return false;
            }
        }
        self.is_accepting(&state)
    }

    /// Lengths of the accepted prefixes of `s`, shortest first.
    fn prefixes<'i, 'a>(&'a self, s: &'i [Input]) -> Prefixes<'i, 'a, Input, Self>
    where
        Self: Sized,
    {
        Prefixes {
            aut: self,
            input: s,
            offset: 0,
            state: self.start_state(),
        }
    }

    /// The longest accepted prefix of `s`, as a maximal-munch lexer wants it.
    fn longest_prefix(&self, s: &[Input]) -> Option<usize>
    where
        Self: Sized,
    {
        self.prefixes(s).last()
    }
}

/// An iterator over the accepted prefixes of some input.
///
/// This iterator yields prefix lengths, `0` included when the automaton
/// accepts the empty string.
#[derive(Debug)]
pub struct Prefixes<'i, 'a, Input: 'i, A: 'a + Automaton<Input>> {
    aut: &'a A,
    input: &'i [Input],
    offset: usize,
    state: Option<A::State>,
}

impl<'i, 'a, Input, A: Automaton<Input>> Iterator for Prefixes<'i, 'a, Input, A> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(state) = self.state.take() {
            let offset = self.offset;
            let accepted = self.aut.is_accepting(&state);
            if offset < self.input.len() {
                let nxt_state = self.aut.next_state(&state, &self.input[offset]);
                if !self.aut.is_stuck(&nxt_state) {
                    self.state = Some(nxt_state);
                }
            }
            self.offset += 1;
            if accepted {
                return Some(offset);
            }
        }
        None
    }
}

impl<S: Eq + Hash, Input: Eq + Hash> Automaton<Input> for Fsa<S, Input> {
    type State = StateSet;

    #[inline]
    fn start_state(&self) -> Option<Self::State> {
        self.start.map(|start| self.closure_of(start))
    }

    /// `state` is closed whenever it comes from `start_state` or an earlier
    /// step, so it is not closed again here.
    #[inline]
    fn next_state(&self, state: &Self::State, input: &Input) -> Self::State {
        self.advance(state, input)
    }

    #[inline]
    fn is_stuck(&self, state: &Self::State) -> bool {
        state.is_empty()
    }

    #[inline]
    fn is_accepting(&self, state: &Self::State) -> bool {
        self.contains_accepting(state)
    }
}
