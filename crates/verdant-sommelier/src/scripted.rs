//! Offline scripted backend.

use async_trait::async_trait;

use crate::backend::SommelierBackend;
use crate::chat::Transcript;
use crate::error::SommelierError;

/// A keyword-matching sommelier for offline use and tests.
///
/// Scans the latest user message for tea topics and answers from a small
/// set of canned recommendations, in the house voice.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSommelier;

impl ScriptedSommelier {
    pub fn new() -> Self {
        Self
    }

    fn recommend(&self, message: &str) -> String {
        let message = message.to_lowercase();
        let rules: &[(&[&str], &str)] = &[
            (
                &["green", "fresh", "grassy"],
                "For a fresh, vegetal cup I would steer you to our Misty Peak Dragon Well — \
                 wok-fired by hand, with a chestnut sweetness that rewards an 80°C steep.",
            ),
            (
                &["black", "strong", "morning", "energy"],
                "May I suggest the Imperial Golden Needle? Downy Yunnan buds, wild honey and \
                 malt — a bracing yet refined way to open the morning.",
            ),
            (
                &["white", "delicate", "light"],
                "The Silver Needle Supreme is our most delicate offering: only silver-downy \
                 buds, sun-dried, with notes of melon and white peach.",
            ),
            (
                &["oolong", "floral", "creamy"],
                "Our Iron Goddess Oolong carries an orchid fragrance and a creamy, lingering \
                 finish — semi-oxidised and rolled in the Anxi tradition.",
            ),
            (
                &["sleep", "evening", "calm", "relax"],
                "For the evening I would keep the caffeine low: the Silver Needle Supreme, \
                 steeped gently, is wonderfully calming.",
            ),
            (
                &["gift", "present"],
                "A gifting thought: pair the Imperial Golden Needle with the Silver Needle \
                 Supreme — a study in contrast between Yunnan warmth and Fujian delicacy.",
            ),
        ];

        for (keywords, reply) in rules {
            if keywords.iter().any(|k| message.contains(k)) {
                return (*reply).to_string();
            }
        }

        "Every palate finds its leaf. Tell me — do you lean toward something brisk and \
         malty, or soft and floral? I shall pour accordingly."
            .to_string()
    }
}

#[async_trait]
impl SommelierBackend for ScriptedSommelier {
    async fn reply(&self, transcript: &Transcript) -> Result<String, SommelierError> {
        let last = transcript.last_user_message().unwrap_or_default();
        Ok(self.recommend(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::converse;

    #[tokio::test]
    async fn test_keyword_match() {
        let backend = ScriptedSommelier::new();
        let mut transcript = Transcript::new();
        let reply = converse(&backend, &mut transcript, "something green and fresh").await;
        assert!(reply.contains("Dragon Well"));
    }

    #[tokio::test]
    async fn test_default_reply() {
        let backend = ScriptedSommelier::new();
        let mut transcript = Transcript::new();
        let reply = converse(&backend, &mut transcript, "hello there").await;
        assert!(reply.contains("palate"));
    }

    #[tokio::test]
    async fn test_evening_recommendation_is_low_caffeine() {
        let backend = ScriptedSommelier::new();
        let mut transcript = Transcript::new();
        let reply = converse(&backend, &mut transcript, "what about before sleep?").await;
        assert!(reply.contains("Silver Needle"));
    }
}
