use crate::{Command, Effect, Msg, SessionState, StopReason};

/// Pure update function: applies a message to state and returns any effects.
///
/// Once the session is stopped every message is ignored.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    if state.is_stopped() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::TokenRead { token, at } => {
            if token.is_empty() {
                return (state, Vec::new());
            }
            match state.syntax().classify(token) {
                Command::Snapshot => vec![Effect::Report(state.counter_mut().render(at))],
                Command::Help => vec![Effect::ShowHelp],
                Command::Reset => {
                    state.counter_mut().reset();
                    Vec::new()
                }
                Command::Terminate => {
                    state.stop(StopReason::Terminated);
                    vec![Effect::Report(state.counter_mut().render(at))]
                }
                Command::Word(word) => {
                    state.record_word(word, at);
                    Vec::new()
                }
            }
        }
        Msg::EndOfStream { at } => {
            state.stop(StopReason::EndOfStream);
            vec![Effect::Report(state.counter_mut().render(at))]
        }
    };

    (state, effects)
}
