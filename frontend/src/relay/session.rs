use std::future::Future;

use log::debug;

use super::cancel::CancelToken;
use super::client::{ChatStream, GeminiClient};
use super::error::RelayError;
use super::wire::{Content, GenerateContentRequest, Role};

pub const SYSTEM_INSTRUCTION: &str = r#"You are the AI Digital Marketing Assistant for "Momentum Media", a premium digital marketing agency.
Your goal is to assist potential clients by answering questions about digital marketing services, packages, and strategy.

Agency Details:
- Name: Momentum Media
- Tagline: Create Connect Acquire
- Founder: A visionary leader in digital growth (refer to as "The Founder").
- Services: Performance Marketing, SEO, Lead Gen, Web Design, Meta Ads, Google Ads, Content Creation.
- Pricing:
  1. Starter: ₹10,000/mo (6 ads, GMB, Setup).
  2. Growth: ₹20,000/mo (8 ads, SEO).
  3. Dominator: ₹30,000/mo (12 ads, Full SEO).
  *Note: Ad spend is excluded from packages.

Tone: Professional, knowledgeable, persuasive, yet approachable. Matches the agency's premium "luxury yet modern" vibe.
Keep answers concise (under 100 words unless detailed explanation is requested).
Always encourage booking a consultation or requesting a callback for complex needs."#;

/// Conversation with the agency assistant. Holds every committed turn and
/// sends the whole history with each new message.
#[derive(Clone, Debug)]
pub struct ChatSession {
    client: GeminiClient,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            history: Vec::new(),
        }
    }

    /// Forgets every turn; the system instruction stays.
    pub fn reset(&mut self) {
        debug!("Resetting chat session ({} turns)", self.history.len());
        self.history.clear();
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Appends the user's turn and returns the request that carries it.
    pub fn begin_turn(&mut self, message: &str) -> GenerateContentRequest {
        self.history.push(Content::text(Some(Role::User), message));
        GenerateContentRequest {
            contents: self.history.clone(),
            system_instruction: Some(Content::text(None, SYSTEM_INSTRUCTION)),
            generation_config: None,
        }
    }

    /// Commits the finished model reply so later turns carry it as context.
    pub fn record_reply(&mut self, reply: &str) {
        self.history.push(Content::text(Some(Role::Model), reply));
    }

    /// Drops a user turn whose reply never completed.
    pub fn abandon_turn(&mut self) {
        if matches!(self.history.last(), Some(turn) if turn.role == Some(Role::User)) {
            self.history.pop();
        }
    }

    /// Sends `message` and opens the streamed reply.
    ///
    /// The returned future does not borrow the session, so it can be spawned
    /// while the owner keeps handling events. Call [`record_reply`] once the
    /// stream is drained, or [`abandon_turn`] if it fails.
    ///
    /// [`record_reply`]: ChatSession::record_reply
    /// [`abandon_turn`]: ChatSession::abandon_turn
    pub fn send_message(
        &mut self,
        message: &str,
        cancel: &CancelToken,
    ) -> impl Future<Output = Result<ChatStream, RelayError>> + 'static {
        let request = self.begin_turn(message);
        let client = self.client.clone();
        let cancel = cancel.clone();
        async move { client.stream_generate_content(&request, &cancel).await }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ChatSession {
        ChatSession::new(GeminiClient::new(Some("test-key"), "https://example.test", "m"))
    }

    #[test]
    fn test_first_turn_carries_system_instruction_and_message() {
        let mut session = session();
        let request = session.begin_turn("What does the Growth package include?");
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, Some(Role::User));
        assert_eq!(request.contents[0].joined_text(), "What does the Growth package include?");
        let system = request.system_instruction.unwrap().joined_text();
        assert!(system.contains("Momentum Media"));
        assert!(system.contains("Ad spend is excluded"));
    }

    #[test]
    fn test_later_turns_include_prior_exchange() {
        let mut session = session();
        session.begin_turn("Hi");
        session.record_reply("Hello! How can we help?");
        let request = session.begin_turn("Tell me about SEO");
        let roles: Vec<_> = request.contents.iter().map(|c| c.role).collect();
        assert_eq!(roles, vec![Some(Role::User), Some(Role::Model), Some(Role::User)]);
    }

    #[test]
    fn test_abandon_turn_only_drops_dangling_user_turn() {
        let mut session = session();
        session.begin_turn("Hi");
        session.record_reply("Hello!");
        session.abandon_turn();
        assert_eq!(session.history().len(), 2);

        session.begin_turn("Are you there?");
        session.abandon_turn();
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[1].role, Some(Role::Model));
    }

    #[test]
    fn test_reset_clears_history() {
        let mut session = session();
        session.begin_turn("Hi");
        session.record_reply("Hello!");
        session.reset();
        assert!(session.history().is_empty());
        let request = session.begin_turn("Start over");
        assert_eq!(request.contents.len(), 1);
    }
}
