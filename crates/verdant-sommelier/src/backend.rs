//! The backend seam and failure-safe conversation helper.

use async_trait::async_trait;

use crate::chat::{Transcript, FALLBACK_EMPTY_REPLY, FALLBACK_OFFLINE};
use crate::error::SommelierError;

/// A generative-text backend for the sommelier.
///
/// Implementations receive the full transcript (the latest user turn last)
/// and return the model's reply text. The system instruction and
/// temperature in [`crate::chat`] are part of the contract for any real
/// backend.
#[async_trait]
pub trait SommelierBackend: Send + Sync {
    /// Generate a reply to the conversation.
    async fn reply(&self, transcript: &Transcript) -> Result<String, SommelierError>;
}

/// Send one user message through a backend, appending both turns to the
/// transcript and returning the text shown to the customer.
///
/// Failures never surface raw: an empty reply becomes
/// [`FALLBACK_EMPTY_REPLY`] and a backend error becomes
/// [`FALLBACK_OFFLINE`].
pub async fn converse(
    backend: &dyn SommelierBackend,
    transcript: &mut Transcript,
    user_text: impl Into<String>,
) -> String {
    transcript.push_user(user_text);

    let reply = match backend.reply(transcript).await {
        Ok(text) if text.trim().is_empty() => FALLBACK_EMPTY_REPLY.to_string(),
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(%err, "sommelier backend failed");
            FALLBACK_OFFLINE.to_string()
        }
    };

    transcript.push_model(reply.clone());
    reply
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<&'static str, ()>);

    #[async_trait]
    impl SommelierBackend for Fixed {
        async fn reply(&self, _transcript: &Transcript) -> Result<String, SommelierError> {
            self.0
                .map(str::to_string)
                .map_err(|()| SommelierError::Unavailable("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn test_reply_passes_through() {
        let mut transcript = Transcript::new();
        let reply = converse(&Fixed(Ok("Try an oolong.")), &mut transcript, "hi").await;
        assert_eq!(reply, "Try an oolong.");
        assert_eq!(transcript.messages().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_reply_falls_back() {
        let mut transcript = Transcript::new();
        let reply = converse(&Fixed(Ok("   ")), &mut transcript, "hi").await;
        assert_eq!(reply, FALLBACK_EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_error_falls_back_without_surfacing() {
        let mut transcript = Transcript::new();
        let reply = converse(&Fixed(Err(())), &mut transcript, "hi").await;
        assert_eq!(reply, FALLBACK_OFFLINE);
        // The fallback still lands in the transcript as a model turn.
        assert_eq!(transcript.messages().last().unwrap().text, FALLBACK_OFFLINE);
    }
}
