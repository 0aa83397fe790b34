//! Thin client for the hosted Gemini API: one-shot structured generation
//! and a streamed chat session.

pub mod cancel;
pub mod campaign;
pub mod client;
pub mod error;
pub mod session;
pub mod sse;
pub mod wire;

pub use cancel::CancelToken;
pub use campaign::{generate_campaign_ideas, CampaignIdea, CampaignOutcome};
pub use client::GeminiClient;
pub use error::RelayError;
pub use session::ChatSession;
pub use wire::Role;
