//! Wake-word gate in front of the interpreter
//!
//! The robot only acts on an utterance that directly follows its name.
//! Saying a dismiss phrase cancels, and a farewell ends the session.
//! When configured to await a start signal, nothing is heard until the
//! master controller sends [`START_MESSAGE`].

use crate::SessionConfig;

/// Master controller message that opens a session
pub const START_MESSAGE: &str = "start";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Wake word heard; the next utterance is a command
    Awake,
    /// Listening cancelled
    Dismissed,
    /// Farewell while listening; no further utterances are accepted
    Ended,
    /// Normalised command text to interpret
    Command(String),
    /// Not addressed to the robot
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    listening: bool,
    started: bool,
    active: bool,
}

fn matches_any(phrases: &[String], text: &str) -> bool {
    phrases.iter().any(|p| normalise(p) == text)
}

fn normalise(utterance: &str) -> String {
    utterance
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let started = !config.await_start;
        Self {
            config,
            listening: false,
            started,
            active: true,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Handle a message from the master controller. Returns true when it
    /// started the session.
    pub fn handle_master_message(&mut self, message: &str) -> bool {
        if self.started || message.trim() != START_MESSAGE {
            return false;
        }
        self.started = true;
        tracing::info!("got start signal");
        true
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one recognised utterance
    pub fn feed(&mut self, utterance: &str) -> SessionEvent {
        if !self.active {
            return SessionEvent::Ignored;
        }
        if !self.started {
            tracing::debug!("waiting for start signal");
            return SessionEvent::Ignored;
        }
        let text = normalise(utterance);

        if text == normalise(&self.config.wake_word) {
            self.listening = true;
            tracing::info!("listening for a command");
            SessionEvent::Awake
        } else if matches_any(&self.config.dismiss_phrases, &text) {
            self.listening = false;
            tracing::info!("no longer listening");
            SessionEvent::Dismissed
        } else if self.listening {
            self.listening = false;
            if matches_any(&self.config.farewell_phrases, &text) {
                self.active = false;
                tracing::info!("session ended");
                SessionEvent::Ended
            } else {
                SessionEvent::Command(text)
            }
        } else {
            tracing::debug!(%text, "wake word not said; ignoring");
            SessionEvent::Ignored
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_requires_wake_word() {
        let mut session = Session::default();
        assert_eq!(session.feed("move left"), SessionEvent::Ignored);
        assert_eq!(session.feed("Lily"), SessionEvent::Awake);
        assert!(session.is_listening());
        assert_eq!(
            session.feed("Move   Left"),
            SessionEvent::Command("move left".to_string())
        );
        // one command per wake word
        assert_eq!(session.feed("stop"), SessionEvent::Ignored);
    }

    #[test]
    fn test_dismiss() {
        let mut session = Session::default();
        session.feed("lily");
        assert_eq!(session.feed("never mind"), SessionEvent::Dismissed);
        assert_eq!(session.feed("stop"), SessionEvent::Ignored);
        assert_eq!(session.feed("nevermind"), SessionEvent::Dismissed);
    }

    #[test]
    fn test_goodbye_ends_session() {
        let mut session = Session::default();
        // a farewell is only honoured when addressed
        assert_eq!(session.feed("goodbye"), SessionEvent::Ignored);
        session.feed("lily");
        assert_eq!(session.feed("good bye"), SessionEvent::Ended);
        assert!(!session.is_active());
        assert_eq!(session.feed("lily"), SessionEvent::Ignored);
    }

    #[test]
    fn test_custom_wake_word() {
        let mut session = Session::new(SessionConfig {
            wake_word: "robot".to_string(),
            ..SessionConfig::default()
        });
        assert_eq!(session.feed("lily"), SessionEvent::Ignored);
        assert_eq!(session.feed("Robot"), SessionEvent::Awake);
    }

    #[test]
    fn test_waits_for_start_signal() {
        let mut session = Session::new(SessionConfig {
            await_start: true,
            ..SessionConfig::default()
        });
        assert!(!session.is_started());
        assert_eq!(session.feed("lily"), SessionEvent::Ignored);
        assert!(!session.handle_master_message("stop"));
        assert!(session.handle_master_message("start"));
        // a second start is a no-op
        assert!(!session.handle_master_message("start"));
        assert_eq!(session.feed("lily"), SessionEvent::Awake);
        assert_eq!(session.feed("stop"), SessionEvent::Command("stop".to_string()));
    }

    #[test]
    fn test_started_by_default() {
        assert!(Session::default().is_started());
    }
}
