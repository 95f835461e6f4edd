//! The request payload built from the advisor preset must match the
//! configured literals exactly, field for field.

use greenflux_agent::agent::{advisor, AgentDefinition};
use serde_json::json;

#[test]
fn test_advisor_payload_matches_literals() {
    let payload = serde_json::to_value(advisor::definition()).unwrap();

    let expected = json!({
        "name": "Alex, B2B Sustainability Advisor",
        "welcome_message": "Hi, this is Alex from GreenFlux, your B2B Sustainability Advisor. Have you calculated your 2026 CBAM liability yet?",
        "context_breakdown": [
            {
                "title": "Agent Role & Context (MANDATORY for Outbound agents)",
                "body": " You are Alex, a B2B Sustainability Advisor for GreenFlux, calling EU importers to discuss carbon liability management and regulatory compliance. ",
                "is_enabled": true
            },
            {
                "title": "Introduction",
                "body": " Ask if the user has calculated their 2026 CBAM liability to open the discussion. ",
                "is_enabled": true
            },
            {
                "title": "Assessment",
                "body": " Inquire about their primary commodity and import volume to provide a 'Carbon Debt' estimate using the provided formula. ",
                "is_enabled": true
            },
            {
                "title": "Value Proposition",
                "body": " Explain how GreenFlux Marketplace offers high-integrity credits to offset liabilities and improve ESG scores. ",
                "is_enabled": true
            },
            {
                "title": "Closing",
                "body": " Offer to deliver a detailed compliance report to their GitHub-synced dashboard or schedule a demo for further assistance. ",
                "is_enabled": true
            }
        ],
        "call_type": "Outgoing",
        "transcriber": {
            "provider": "Azure",
            "silence_timeout_ms": 400
        },
        "model": {
            "model": "gemini-3.0-pro",
            "temperature": 0.7
        },
        "voice": {
            "provider": "cartesia",
            "voice_id": "2747b6cf-fa34-460c-97db-267566918881"
        }
    });

    assert_eq!(payload, expected);
}

#[test]
fn test_advisor_payload_round_trips() {
    let definition = advisor::definition();
    let json = serde_json::to_string(&definition).unwrap();
    let restored: AgentDefinition = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, definition);
}

#[test]
fn test_advisor_payload_is_stable() {
    // The preset is a function of nothing; two builds must agree.
    assert_eq!(advisor::definition(), advisor::definition());
}
