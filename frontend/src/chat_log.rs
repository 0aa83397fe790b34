//! Message log behind the chat widget.

use crate::relay::Role;

pub const GREETING: &str =
    "Hello! I am Momentum Media's AI assistant. How can we help you grow your business today?";
pub const APOLOGY: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again later.";

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Append-only list of messages. Only the reply currently streaming may change.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    streaming: bool,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Model,
                text: GREETING.to_string(),
            }],
            streaming: false,
        }
    }
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Starts an exchange: the user's message plus an empty model reply.
    /// Refused while another reply is still streaming.
    pub fn begin_exchange(&mut self, text: &str) -> bool {
        if self.streaming {
            return false;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            text: text.to_string(),
        });
        self.messages.push(ChatMessage {
            role: Role::Model,
            text: String::new(),
        });
        self.streaming = true;
        true
    }

    /// Appends a streamed fragment to the reply in progress.
    pub fn push_fragment(&mut self, fragment: &str) {
        if !self.streaming {
            return;
        }
        if let Some(last) = self.messages.last_mut() {
            last.text.push_str(fragment);
        }
    }

    /// Closes the reply in progress and returns its full text.
    ///
    /// A reply that streamed no text at all is shown as the apology and
    /// returns `None`, so it never enters the session history.
    pub fn finish_exchange(&mut self) -> Option<String> {
        if !self.streaming {
            return None;
        }
        let reply = self
            .messages
            .last()
            .map(|last| last.text.clone())
            .filter(|text| !text.is_empty());
        if reply.is_none() {
            self.fail_exchange();
        }
        self.streaming = false;
        reply
    }

    /// Replaces the reply in progress with the apology.
    pub fn fail_exchange(&mut self) {
        if !self.streaming {
            return;
        }
        self.streaming = false;
        if let Some(last) = self.messages.last_mut() {
            last.text = APOLOGY.to_string();
        }
    }

    /// Stops accepting fragments, keeping whatever already arrived.
    /// Returns the partial reply.
    pub fn interrupt_exchange(&mut self) -> Option<String> {
        if !self.streaming {
            return None;
        }
        self.streaming = false;
        self.messages.last().map(|last| last.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{ChatSession, GeminiClient};

    fn run_exchange(log: &mut ChatLog, user: &str, fragments: &[&str]) -> Option<String> {
        assert!(log.begin_exchange(user));
        for fragment in fragments {
            log.push_fragment(fragment);
        }
        log.finish_exchange()
    }

    #[test]
    fn test_log_starts_with_greeting() {
        let log = ChatLog::default();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].role, Role::Model);
        assert_eq!(log.messages()[0].text, GREETING);
    }

    #[test]
    fn test_each_exchange_adds_user_then_model_with_concatenated_fragments() {
        let mut log = ChatLog::default();
        let exchanges: &[(&str, &[&str])] = &[
            ("Hi", &["Hello", "! How can ", "we help?"]),
            ("Pricing?", &["From ₹10,000", "/mo."]),
            ("Thanks", &["You're welcome!"]),
        ];
        for (i, (user, fragments)) in exchanges.iter().enumerate() {
            let reply = run_exchange(&mut log, user, fragments).unwrap();
            let len = log.messages().len();
            assert_eq!(len, 1 + 2 * (i + 1));
            let pair = &log.messages()[len - 2..];
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[0].text, *user);
            assert_eq!(pair[1].role, Role::Model);
            assert_eq!(pair[1].text, fragments.concat());
            assert_eq!(reply, fragments.concat());
        }
    }

    #[test]
    fn test_second_send_is_refused_while_streaming() {
        let mut log = ChatLog::default();
        assert!(log.begin_exchange("first"));
        assert!(!log.begin_exchange("second"));
        assert_eq!(log.messages().len(), 3);
        log.push_fragment("ok");
        assert_eq!(log.finish_exchange().as_deref(), Some("ok"));
        assert!(log.begin_exchange("second"));
    }

    #[test]
    fn test_failure_replaces_placeholder_with_apology() {
        let mut log = ChatLog::default();
        log.begin_exchange("Hi");
        log.push_fragment("Hel");
        log.fail_exchange();
        assert_eq!(log.messages().len(), 3);
        assert_eq!(log.messages()[2].text, APOLOGY);
        assert!(log.begin_exchange("Again"));
    }

    #[test]
    fn test_reply_without_text_shows_apology_and_stays_out_of_history() {
        let mut log = ChatLog::default();
        let mut session = ChatSession::new(GeminiClient::new(Some("k"), "https://example.test", "m"));

        assert!(log.begin_exchange("Hi"));
        session.begin_turn("Hi");
        assert_eq!(log.finish_exchange(), None);
        session.abandon_turn();

        assert_eq!(log.messages().len(), 3);
        assert_eq!(log.messages()[2].role, Role::Model);
        assert_eq!(log.messages()[2].text, APOLOGY);

        let request = session.begin_turn("Hello?");
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].joined_text(), "Hello?");
        assert!(log.begin_exchange("Hello?"));
    }

    #[test]
    fn test_fragments_after_interrupt_are_ignored() {
        let mut log = ChatLog::default();
        log.begin_exchange("Hi");
        log.push_fragment("Partial");
        assert_eq!(log.interrupt_exchange().as_deref(), Some("Partial"));
        log.push_fragment(" late");
        assert_eq!(log.messages()[2].text, "Partial");
        assert_eq!(log.finish_exchange(), None);
    }
}
