//! The agent definition submitted to the platform
//!
//! These types serialize exactly to the wire shapes the OmniDimension
//! agent-creation endpoint expects. A definition is constructed once,
//! sent once, and never mutated or persisted locally.

use serde::{Deserialize, Serialize};

/// A hosted conversational agent, as the platform's creation endpoint
/// accepts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Display name of the agent
    pub name: String,
    /// Opening line spoken when a call connects
    pub welcome_message: String,
    /// Call-flow script sections; order is significant and preserved
    pub context_breakdown: Vec<ContextSection>,
    /// Call direction
    pub call_type: CallType,
    /// Speech-to-text provider selection
    pub transcriber: TranscriberConfig,
    /// Language model selection
    pub model: ModelConfig,
    /// Text-to-speech provider selection
    pub voice: VoiceConfig,
}

/// One section of the conversational script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextSection {
    /// Section heading shown in the platform's script editor
    pub title: String,
    /// Instructions for this part of the call
    pub body: String,
    /// Whether the platform applies this section
    pub is_enabled: bool,
}

impl ContextSection {
    /// An enabled section
    pub fn enabled(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            is_enabled: true,
        }
    }
}

/// Call direction. Serializes to the exact strings `"Outgoing"` and
/// `"Incoming"` the platform matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallType {
    Outgoing,
    Incoming,
}

impl CallType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallType::Outgoing => "Outgoing",
            CallType::Incoming => "Incoming",
        }
    }
}

/// Transcription provider selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriberConfig {
    /// Provider name (e.g. "Azure")
    pub provider: String,
    /// Silence timeout in milliseconds before a turn is closed
    pub silence_timeout_ms: u32,
}

/// Model selection for the agent's replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier (e.g. "gemini-3.0-pro")
    pub model: String,
    /// Sampling temperature, passed through as the wire's double
    pub temperature: f64,
}

/// Voice provider selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Provider name (e.g. "cartesia")
    pub provider: String,
    /// Provider-scoped voice identifier
    pub voice_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_definition() -> AgentDefinition {
        AgentDefinition {
            name: "Test Agent".to_string(),
            welcome_message: "Hello.".to_string(),
            context_breakdown: vec![
                ContextSection::enabled("First", "Open the call."),
                ContextSection::enabled("Second", "Close the call."),
            ],
            call_type: CallType::Outgoing,
            transcriber: TranscriberConfig {
                provider: "Azure".to_string(),
                silence_timeout_ms: 400,
            },
            model: ModelConfig {
                model: "gemini-3.0-pro".to_string(),
                temperature: 0.7,
            },
            voice: VoiceConfig {
                provider: "cartesia".to_string(),
                voice_id: "voice-1".to_string(),
            },
        }
    }

    #[test]
    fn test_call_type_serializes_to_exact_strings() {
        assert_eq!(
            serde_json::to_string(&CallType::Outgoing).unwrap(),
            "\"Outgoing\""
        );
        assert_eq!(
            serde_json::to_string(&CallType::Incoming).unwrap(),
            "\"Incoming\""
        );
    }

    #[test]
    fn test_call_type_as_str() {
        assert_eq!(CallType::Outgoing.as_str(), "Outgoing");
        assert_eq!(CallType::Incoming.as_str(), "Incoming");
    }

    #[test]
    fn test_definition_wire_keys() {
        let payload = serde_json::to_value(sample_definition()).unwrap();
        let object = payload.as_object().unwrap();

        for key in [
            "name",
            "welcome_message",
            "context_breakdown",
            "call_type",
            "transcriber",
            "model",
            "voice",
        ] {
            assert!(object.contains_key(key), "missing wire key {}", key);
        }

        let section = &payload["context_breakdown"][0];
        assert_eq!(section["title"], "First");
        assert_eq!(section["body"], "Open the call.");
        assert_eq!(section["is_enabled"], true);
    }

    #[test]
    fn test_section_order_preserved() {
        let payload = serde_json::to_value(sample_definition()).unwrap();
        let sections = payload["context_breakdown"].as_array().unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0]["title"], "First");
        assert_eq!(sections[1]["title"], "Second");
    }

    #[test]
    fn test_definition_round_trip() {
        let definition = sample_definition();
        let json = serde_json::to_string(&definition).unwrap();
        let deserialized: AgentDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, definition);
    }

    #[test]
    fn test_enabled_section_constructor() {
        let section = ContextSection::enabled("Title", " body ");
        assert_eq!(section.title, "Title");
        assert_eq!(section.body, " body ");
        assert!(section.is_enabled);
    }
}
