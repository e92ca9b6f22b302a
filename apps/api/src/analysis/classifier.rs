//! Emotion classifier: one completion call, then normalization against the taxonomy.
//!
//! Whatever the model returns, a successful call yields a taxonomy member and a
//! confidence in [0, 1]. Out-of-taxonomy labels are not errors; they collapse to
//! the fallback label with a neutral confidence.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::emotion::Emotion;
use crate::analysis::prompts::{MOOD_ANALYSIS_PROMPT_TEMPLATE, MOOD_ANALYSIS_SYSTEM};
use crate::llm_client::{complete_json, CompletionProvider, CompletionRequest, LlmError};

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 200;
/// Confidence used when the model omits one, and for fallback labels.
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Error)]
#[error("Failed to analyze mood: {0}")]
pub struct ClassifyError(#[from] pub LlmError);

/// Validated classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionAnalysis {
    pub emotion: Emotion,
    pub confidence_score: f64,
}

/// Raw JSON object the model is asked to produce.
#[derive(Debug, Deserialize)]
struct RawMoodResponse {
    emotion: String,
    #[serde(default)]
    confidence: Option<Value>,
    #[serde(default)]
    reasoning: Option<String>,
}

/// Builds the single completion request for `text`.
pub fn build_request(text: &str) -> CompletionRequest {
    let prompt = MOOD_ANALYSIS_PROMPT_TEMPLATE
        .replace("{emotions}", &Emotion::taxonomy_list())
        .replace("{entry_text}", text);
    CompletionRequest {
        system: MOOD_ANALYSIS_SYSTEM.to_string(),
        prompt,
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        json_mode: true,
    }
}

/// Classifies `text` with exactly one provider call. Callers reject empty text first.
pub async fn classify_emotion(
    text: &str,
    provider: &dyn CompletionProvider,
) -> Result<EmotionAnalysis, ClassifyError> {
    let raw: RawMoodResponse = complete_json(provider, &build_request(text))
        .await
        .map_err(|e| {
            tracing::error!("LLM API error: {e}");
            ClassifyError(e)
        })?;

    Ok(normalize(&raw))
}

fn normalize(raw: &RawMoodResponse) -> EmotionAnalysis {
    let label = raw.emotion.to_lowercase();
    let Some(emotion) = Emotion::from_label(&label) else {
        warn!(
            "LLM returned unexpected emotion: {label}, defaulting to \"{}\"",
            Emotion::FALLBACK
        );
        return EmotionAnalysis {
            emotion: Emotion::FALLBACK,
            confidence_score: NEUTRAL_CONFIDENCE,
        };
    };

    let confidence = raw
        .confidence
        .as_ref()
        .and_then(Value::as_f64)
        .unwrap_or(NEUTRAL_CONFIDENCE);

    let confidence_score = confidence.clamp(0.0, 1.0);
    info!(
        "LLM analysis: {emotion} ({confidence_score}), reasoning: {}",
        raw.reasoning.as_deref().unwrap_or("<none>")
    );

    EmotionAnalysis {
        emotion,
        confidence_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProvider;

    async fn classify_reply(reply: &str) -> EmotionAnalysis {
        let provider = ScriptedProvider::replying(reply);
        classify_emotion("Some journal text", &provider).await.unwrap()
    }

    #[test]
    fn test_request_embeds_taxonomy_and_text() {
        let req = build_request("I finally finished my project and I'm so relieved");
        assert!(req.prompt.contains(&Emotion::taxonomy_list()));
        assert!(req
            .prompt
            .contains("\"I finally finished my project and I'm so relieved\""));
        assert!(req.prompt.contains("\"confidence\""));
        assert!(req.prompt.contains("\"reasoning\""));
        assert!(req.system.contains("valid JSON"));
        assert!((req.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(req.max_tokens, 200);
        assert!(req.json_mode);
    }

    #[tokio::test]
    async fn test_valid_label_and_confidence_pass_through() {
        let analysis =
            classify_reply(r#"{"emotion": "contentment", "confidence": 0.82, "reasoning": "relief"}"#)
                .await;
        assert_eq!(analysis.emotion, Emotion::Contentment);
        assert!((analysis.confidence_score - 0.82).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_label_is_lowercased_before_matching() {
        let analysis = classify_reply(r#"{"emotion": "GRATEFUL", "confidence": 0.9}"#).await;
        assert_eq!(analysis.emotion, Emotion::Grateful);
        assert!((analysis.confidence_score - 0.9).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_unknown_label_falls_back_to_confused_any_casing() {
        for label in ["happiness", "Happiness", "HAPPINESS", "melancholy"] {
            let reply = format!(r#"{{"emotion": "{label}", "confidence": 0.97}}"#);
            let analysis = classify_reply(&reply).await;
            assert_eq!(analysis.emotion, Emotion::Confused, "label {label}");
            assert_eq!(analysis.confidence_score, 0.5, "label {label}");
        }
    }

    #[tokio::test]
    async fn test_confidence_above_one_is_clamped() {
        let analysis = classify_reply(r#"{"emotion": "joy", "confidence": 1.4}"#).await;
        assert_eq!(analysis.confidence_score, 1.0);
    }

    #[tokio::test]
    async fn test_negative_confidence_is_clamped() {
        let analysis = classify_reply(r#"{"emotion": "fear", "confidence": -0.2}"#).await;
        assert_eq!(analysis.confidence_score, 0.0);
    }

    #[tokio::test]
    async fn test_missing_confidence_defaults_to_half() {
        let analysis = classify_reply(r#"{"emotion": "hope", "reasoning": "looking ahead"}"#).await;
        assert_eq!(analysis.emotion, Emotion::Hope);
        assert_eq!(analysis.confidence_score, 0.5);
    }

    #[tokio::test]
    async fn test_non_numeric_confidence_defaults_to_half() {
        let analysis = classify_reply(r#"{"emotion": "anger", "confidence": "high"}"#).await;
        assert_eq!(analysis.confidence_score, 0.5);
    }

    #[tokio::test]
    async fn test_zero_confidence_is_kept() {
        let analysis = classify_reply(r#"{"emotion": "stressed", "confidence": 0}"#).await;
        assert_eq!(analysis.confidence_score, 0.0);
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_an_error() {
        let provider = ScriptedProvider::replying("I think the user feels joy.");
        let err = classify_emotion("text", &provider).await.unwrap_err();
        assert!(matches!(err.0, LlmError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_reply_without_emotion_field_is_an_error() {
        let provider = ScriptedProvider::replying(r#"{"confidence": 0.7}"#);
        assert!(classify_emotion("text", &provider).await.is_err());
    }

    #[tokio::test]
    async fn test_provider_failure_is_wrapped() {
        let provider = ScriptedProvider::failing();
        let err = classify_emotion("text", &provider).await.unwrap_err();
        assert!(matches!(err.0, LlmError::Api { status: 500, .. }));
        assert!(err.to_string().starts_with("Failed to analyze mood"));
    }

    #[tokio::test]
    async fn test_exactly_one_provider_call() {
        let provider = ScriptedProvider::failing();
        let _ = classify_emotion("text", &provider).await;
        assert_eq!(provider.calls(), 1);

        let provider = ScriptedProvider::replying(r#"{"emotion": "joy"}"#);
        classify_emotion("text", &provider).await.unwrap();
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_result_always_in_taxonomy_and_unit_interval() {
        let replies = [
            r#"{"emotion": "JOY", "confidence": 3}"#,
            r#"{"emotion": "rage", "confidence": -5}"#,
            r#"{"emotion": "Overwhelmed", "confidence": 0.33}"#,
            r#"{"emotion": "", "confidence": 0.9}"#,
            r#"{"emotion": "peaceful", "confidence": null}"#,
        ];
        for reply in replies {
            let analysis = classify_reply(reply).await;
            assert!(Emotion::ALL.contains(&analysis.emotion), "reply {reply}");
            assert!(
                (0.0..=1.0).contains(&analysis.confidence_score),
                "reply {reply}"
            );
        }
    }
}
