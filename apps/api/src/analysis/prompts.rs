// LLM prompt constants for mood analysis.

/// System prompt for mood classification: fixes role and JSON-only output.
pub const MOOD_ANALYSIS_SYSTEM: &str =
    "You are an empathetic mental health assistant that \
    analyzes mood journal entries to identify emotions. \
    Always respond in valid JSON format.";

/// Mood classification prompt template.
/// Replace `{emotions}` and `{entry_text}` before sending.
pub const MOOD_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following mood journal entry and determine the primary emotion. Choose only ONE emotion from this list: {emotions}.

Journal Entry:
"{entry_text}"

Respond in JSON format with:
{
  "emotion": "the primary emotion from the list",
  "confidence": a number between 0 and 1 indicating confidence,
  "reasoning": "brief explanation of why this emotion was chosen"
}

Be empathetic and consider the overall tone and context."#;
