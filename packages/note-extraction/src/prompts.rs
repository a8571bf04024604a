//! LLM prompts and response schema for semantic extraction.
//!
//! The prompt contract is future-only: the model must extract tasks that
//! still need to be done and ignore anything already completed.

/// System prompt establishing the future-only extraction rules.
pub const EXTRACT_SYSTEM_PROMPT: &str = r#"You are an expert at identifying FUTURE action items and tasks from text.
An action item is a task, todo, or actionable item that needs to be done in the FUTURE.

CRITICAL RULES:
1. ONLY extract FUTURE actions - things that still need to be done
2. DO NOT extract PAST actions - things that have already been completed
3. Pay attention to verb tenses:
   - Past tense (went, bought, brought, saw) = ALREADY DONE, do NOT extract
   - Future tense (will, planning to, going to, need to) = TO BE DONE, extract these
   - Present tense plans/intentions (I am planning to, I will) = TO BE DONE, extract these
4. Extract explicit future plans, intentions, and commitments
5. Extract implicit future tasks inferred from context (e.g., "I'm planning to buy X" means extract "Buy X")

Examples:
- "I went to the store and bought milk" -> NO action item (past, already done)
- "I will buy flowers" -> Extract "Buy flowers" (future action)
- "I'm planning to repaint the fence" -> Extract "Repaint the fence" (future plan)

Return them as a JSON object with an "action_items" array of strings.
Each action item should be a clear, concise description of what needs to be done in the future."#;

/// Per-call user prompt. `{text}` is replaced with the raw input verbatim.
pub const EXTRACT_USER_PROMPT: &str = r#"Extract all FUTURE action items from the following text.
IMPORTANT: Only extract actions that still need to be done. Do NOT extract actions that have already been completed (past tense).

Text:
{text}

Return a JSON object with an "action_items" array containing all FUTURE action items that need to be done.
Exclude any actions that are described in past tense (already completed)."#;

/// Format the extraction user prompt with the input text.
pub fn format_extract_prompt(text: &str) -> String {
    EXTRACT_USER_PROMPT.replace("{text}", text)
}

/// JSON schema constraining the model's response: a single object with an
/// `action_items` array of strings.
pub fn action_items_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "action_items": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of action items extracted from the text"
            }
        },
        "required": ["action_items"]
    })
}
