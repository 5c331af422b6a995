//! Errors reported while building, converting or freezing automata.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FsaError {
    /// A transition or query named a state that was never added.
    #[error("unknown state {state}")]
    UnknownState { state: String },

    /// A second state was flagged as start while another one already is.
    #[error("cannot make {requested} the start state, {current} already is")]
    DuplicateStart { current: String, requested: String },

    /// Subset construction produced more states than the configured limit.
    #[error("automaton exceeds the limit of {limit} states")]
    CapacityExceeded { limit: usize },

    /// The automaton has no start state.
    #[error("automaton has no start state")]
    NoStartState,

    /// Freezing requires an automaton without epsilon edges or choices.
    #[error("automaton is not deterministic")]
    NotDeterministic,
}

pub type Result<T, E = FsaError> = std::result::Result<T, E>;

pub(crate) fn unknown_state<S: std::fmt::Debug>(state: &S) -> FsaError {
    FsaError::UnknownState {
        state: format!("{:?}", state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_states() {
        let err = unknown_state(&"q7");
        assert_eq!(err.to_string(), r#"unknown state "q7""#);

        let err = FsaError::DuplicateStart {
            current: "0".into(),
            requested: "3".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot make 3 the start state, 0 already is"
        );
    }
}
