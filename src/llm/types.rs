//! Wire types for the generateContent reply

use serde::Deserialize;

/// Parsed reply from a generateContent call
///
/// Mirrors the service's response shape: a list of candidates, each holding
/// content made of parts. Anything beyond the first text part of the first
/// candidate is carried but unused.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateReply {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateReply {
    /// Build a reply holding a single text part (test and stub helper)
    pub fn from_text(text: &str) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Content {
                    parts: vec![Part {
                        text: Some(text.to_string()),
                    }],
                },
            }],
        }
    }

    /// First text part of the first candidate, trimmed
    ///
    /// Returns `None` when the reply has no candidates, no parts, or no text
    /// in the first part.
    pub fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .parts
            .first()?
            .text
            .as_ref()
            .map(|t| t.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_present() {
        let reply = GenerateReply::from_text("  shopping cart, checkout flow  ");
        assert_eq!(reply.first_text(), Some("shopping cart, checkout flow".to_string()));
    }

    #[test]
    fn test_first_text_no_candidates() {
        let reply = GenerateReply::default();
        assert_eq!(reply.first_text(), None);
    }

    #[test]
    fn test_first_text_no_parts() {
        let reply = GenerateReply {
            candidates: vec![Candidate::default()],
        };
        assert_eq!(reply.first_text(), None);
    }

    #[test]
    fn test_deserialize_service_shape() {
        let json = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [ { "text": "a, b, c" } ],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ]
        }"#;

        let reply: GenerateReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.first_text(), Some("a, b, c".to_string()));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let reply: GenerateReply = serde_json::from_str("{}").unwrap();
        assert!(reply.candidates.is_empty());
        assert_eq!(reply.first_text(), None);
    }
}
