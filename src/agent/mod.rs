pub mod advisor;
pub mod definition;

pub use definition::{
    AgentDefinition, CallType, ContextSection, ModelConfig, TranscriberConfig, VoiceConfig,
};
