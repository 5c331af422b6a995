//! Finite automata with epsilon transitions: simulation, epsilon closures
//! and subset construction to deterministic automata.
//!
//! ```
//! use fsa::{Automaton, Fsa};
//!
//! let mut nfa: Fsa = Fsa::new();
//! nfa.add_state(0, true, false)?;
//! nfa.add_state(1, false, true)?;
//! nfa.add_transition(&0, &0, Some('a'))?;
//! nfa.add_transition(&0, &1, Some('a'))?;
//!
//! let dfa = nfa.to_dfa()?;
//! assert!(dfa.deterministic());
//! assert!(dfa.accepts("aaa".chars()));
//! assert!(!dfa.accepts("".chars()));
//! # Ok::<(), fsa::FsaError>(())
//! ```

pub mod automaton;
mod closure;
pub mod dfa;
mod determinism;
pub mod error;
pub mod fsa;
pub mod state_set;
pub mod subset;
mod transition;

pub use crate::automaton::{Automaton, Prefixes};
pub use crate::dfa::{DFAState, DFA, DFA_START, DFA_STUCK};
pub use crate::error::{FsaError, Result};
pub use crate::fsa::{Fsa, SetDisplay, StateRef, Transition};
pub use crate::state_set::StateSet;
pub use crate::subset::{Determinized, SubsetConfig};
