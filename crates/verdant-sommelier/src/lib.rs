//! The Verdant Leaf tea sommelier chat.
//!
//! Models the chat widget's conversation state and its contract with a
//! generative-text backend: a fixed system instruction, a transcript of
//! user/model turns, and fallback copy so a backend failure never reaches
//! the customer as a raw error. The vendor integration itself lives
//! outside this repo; [`ScriptedSommelier`] provides an offline backend
//! with the same shape.

mod backend;
mod chat;
mod error;
mod scripted;

pub use backend::{converse, SommelierBackend};
pub use chat::{
    ChatMessage, ChatRole, Transcript, FALLBACK_EMPTY_REPLY, FALLBACK_OFFLINE, GREETING,
    SYSTEM_INSTRUCTION, TEMPERATURE,
};
pub use error::SommelierError;
pub use scripted::ScriptedSommelier;
