//! Integration tests for trip context gathering.
//!
//! These tests wire the handlers against each profile source:
//! 1. The profile tool envelope serializes to the agent-facing shape
//! 2. Profile and mood records are gathered together
//! 3. Rule tables and profile records load from disk

use serde_json::json;
use std::sync::Arc;

use trip_context::adapters::{
    DefaultProfileSource, FsProfileSource, InMemoryProfileSource, KeywordMoodClassifier,
};
use trip_context::application::{
    AnalyzeEmotionCommand, AnalyzeEmotionHandler, GatherTripContextHandler,
    GatherTripContextQuery, ReadUserProfileHandler, ReadUserProfileQuery, ToolStatus,
};
use trip_context::domain::foundation::{ErrorCode, UserId};
use trip_context::domain::mood::{BudgetSensitivity, MoodRuleSet};
use trip_context::domain::travel::{
    NormalizerDefaults, PreferenceMap, ProfileNormalizer, RawProfile,
};
use trip_context::ports::ProfileSource;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn gather_handler(source: Arc<dyn ProfileSource>) -> GatherTripContextHandler {
    GatherTripContextHandler::new(
        ReadUserProfileHandler::new(source, ProfileNormalizer::default()),
        AnalyzeEmotionHandler::new(Arc::new(KeywordMoodClassifier::builtin())),
    )
}

// =============================================================================
// Profile Tool
// =============================================================================

#[tokio::test]
async fn default_source_envelope_has_agent_facing_shape() {
    let handler = ReadUserProfileHandler::new(
        Arc::new(DefaultProfileSource::new()),
        ProfileNormalizer::default(),
    );

    let result = handler
        .handle(ReadUserProfileQuery {
            user_id: user("anyone"),
        })
        .await
        .unwrap();

    assert_eq!(result.status, ToolStatus::Success);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "status": "success",
            "profile_data": {
                "preference_vector": [
                    {"key": "Nature", "value": 0.9},
                    {"key": "Culture/History", "value": 0.7},
                    {"key": "Nightlife", "value": 0.2}
                ],
                "max_daily_budget": 250.0,
                "preferred_transport_mode": "Public Transport"
            }
        })
    );
}

#[tokio::test]
async fn configured_default_transport_applies_to_missing_mode() {
    let source = InMemoryProfileSource::new().with_profile(
        user("ada"),
        RawProfile::new(PreferenceMap::new().with("Beaches", 1.0), 80.0),
    );
    let normalizer = ProfileNormalizer::new(NormalizerDefaults {
        transport_mode: "Bike".to_string(),
    });
    let handler = ReadUserProfileHandler::new(Arc::new(source), normalizer);

    let result = handler
        .handle(ReadUserProfileQuery {
            user_id: user("ada"),
        })
        .await
        .unwrap();

    assert_eq!(result.profile_data.preferred_transport_mode(), "Bike");
}

#[tokio::test]
async fn unknown_user_is_reported_as_not_found() {
    let handler = ReadUserProfileHandler::new(
        Arc::new(InMemoryProfileSource::new()),
        ProfileNormalizer::default(),
    );

    let err = handler
        .handle(ReadUserProfileQuery {
            user_id: user("ghost"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ProfileNotFound);
}

#[tokio::test]
async fn invalid_stored_profile_is_a_validation_failure() {
    let source = InMemoryProfileSource::new().with_profile(
        user("bob"),
        RawProfile::new(PreferenceMap::new().with("Nature", 1.5), 100.0),
    );
    let handler = ReadUserProfileHandler::new(Arc::new(source), ProfileNormalizer::default());

    let err = handler
        .handle(ReadUserProfileQuery {
            user_id: user("bob"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationFailed);
}

// =============================================================================
// Emotion Tool
// =============================================================================

#[test]
fn emotion_handler_reproduces_documented_examples() {
    let handler = AnalyzeEmotionHandler::new(Arc::new(KeywordMoodClassifier::builtin()));

    let stressed = handler.handle(AnalyzeEmotionCommand {
        user_input: "I need to relax after a stressful week".to_string(),
    });
    assert_eq!(
        serde_json::to_value(&stressed).unwrap(),
        json!({
            "primary_state": "Stress Relief",
            "mandatory_constraints": ["Quiet", "Low-Energy", "Nature", "Comfort"],
            "budget_sensitivity": "Flexible"
        })
    );

    let neutral = handler.handle(AnalyzeEmotionCommand {
        user_input: "Looking for a fun city tour".to_string(),
    });
    assert_eq!(
        serde_json::to_value(&neutral).unwrap(),
        json!({
            "primary_state": "General",
            "mandatory_constraints": [],
            "budget_sensitivity": "Normal"
        })
    );
}

// =============================================================================
// Gathered Context
// =============================================================================

#[tokio::test]
async fn gathers_profile_and_mood_together() {
    let handler = gather_handler(Arc::new(DefaultProfileSource::new()));

    let context = handler
        .handle(GatherTripContextQuery {
            user_id: user("default"),
            user_input: "Celebrating our anniversary this weekend".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(context.user_profile.preference_for("Nature"), Some(0.9));
    assert_eq!(context.emotional_context.primary_state, "Celebration");
    assert_eq!(
        context.emotional_context.budget_sensitivity,
        BudgetSensitivity::HighEnd
    );

    let value = serde_json::to_value(&context).unwrap();
    assert!(value.get("user_profile").is_some());
    assert!(value.get("emotional_context").is_some());
}

#[tokio::test]
async fn gather_fails_when_profile_is_missing() {
    let handler = gather_handler(Arc::new(InMemoryProfileSource::new()));

    let err = handler
        .handle(GatherTripContextQuery {
            user_id: user("nobody"),
            user_input: "anything".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ProfileNotFound);
}

// =============================================================================
// Filesystem Wiring
// =============================================================================

#[tokio::test]
async fn reads_profiles_and_rules_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = dir.path().join("profiles");
    std::fs::create_dir_all(&profiles).unwrap();
    std::fs::write(
        profiles.join("carla.yaml"),
        "preference_vector:\n  Museums: 0.8\n  Food: 0.6\nmax_daily_budget: 120\n",
    )
    .unwrap();

    let rules_path = dir.path().join("rules.yaml");
    std::fs::write(
        &rules_path,
        r#"
- triggers: [foodie, tasting]
  primary_state: Culinary
  mandatory_constraints: [Local Cuisine]
  budget_sensitivity: Normal
"#,
    )
    .unwrap();

    let rules = MoodRuleSet::from_yaml_str(&std::fs::read_to_string(&rules_path).unwrap()).unwrap();
    let handler = GatherTripContextHandler::new(
        ReadUserProfileHandler::new(
            Arc::new(FsProfileSource::new(dir.path())),
            ProfileNormalizer::default(),
        ),
        AnalyzeEmotionHandler::new(Arc::new(KeywordMoodClassifier::new(rules))),
    );

    let context = handler
        .handle(GatherTripContextQuery {
            user_id: user("carla"),
            user_input: "A Foodie weekend with a wine TASTING".to_string(),
        })
        .await
        .unwrap();

    let categories: Vec<&str> = context
        .user_profile
        .preferences()
        .iter()
        .map(|e| e.category())
        .collect();
    assert_eq!(categories, vec!["Museums", "Food"]);
    assert_eq!(context.user_profile.preferred_transport_mode(), "Walk");
    assert_eq!(context.emotional_context.primary_state, "Culinary");
    assert_eq!(context.emotional_context.mandatory_constraints, vec!["Local Cuisine"]);
}
