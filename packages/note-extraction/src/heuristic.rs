//! Deterministic, offline action-item extraction.
//!
//! Classifies individual lines by surface syntax (bullets, keyword prefixes,
//! checkbox markers) and falls back to imperative-sentence detection when no
//! line matches. Pure function over the input text: no I/O, no error states.

use regex::Regex;

use crate::dedupe::dedupe_case_insensitive;

/// Bullet markers recognized at the start of a line: dash, asterisk, bullet
/// character, or a decimal ordinal like "1. ".
const BULLET_PREFIX_PATTERN: &str = r"^\s*([-*•]|\d+\.)\s+";

/// Keyword prefixes that mark a line as an action item (matched on the
/// lowercased line).
const KEYWORD_PREFIXES: [&str; 3] = ["todo:", "action:", "next:"];

/// Closed set of sentence-leading verbs treated as imperative.
const IMPERATIVE_STARTERS: [&str; 12] = [
    "add",
    "create",
    "implement",
    "fix",
    "update",
    "write",
    "check",
    "verify",
    "refactor",
    "document",
    "design",
    "investigate",
];

/// Extract action items from free-form text.
///
/// Returns trimmed, case-insensitively deduplicated items in first-occurrence
/// order. Total over all inputs: empty or matchless text yields an empty
/// list. The sentence fallback only activates when no line matched at all,
/// never as a supplement.
pub fn extract_action_items(text: &str) -> Vec<String> {
    let bullet = Regex::new(BULLET_PREFIX_PATTERN).unwrap();

    let mut extracted: Vec<String> = Vec::new();
    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if is_action_line(line, &bullet) {
            let cleaned = clean_action_line(line, &bullet);
            // A line that was nothing but markers cleans down to nothing.
            if !cleaned.is_empty() {
                extracted.push(cleaned);
            }
        }
    }

    // Fallback: nothing matched line-wise, so split into sentences and keep
    // the imperative-looking ones.
    if extracted.is_empty() {
        for sentence in split_sentences(text.trim()) {
            let s = sentence.trim();
            if s.is_empty() {
                continue;
            }
            if looks_imperative(s) {
                extracted.push(s.to_string());
            }
        }
    }

    dedupe_case_insensitive(extracted)
}

/// Strip the markers that made a line an action line, in order: anchored
/// bullet prefix, then leading checkbox markers, then a keyword prefix.
fn clean_action_line(line: &str, bullet: &Regex) -> String {
    let cleaned = bullet.replace(line, "");
    let cleaned = cleaned.trim();
    let cleaned = cleaned.strip_prefix("[ ]").unwrap_or(cleaned).trim();
    let cleaned = cleaned.strip_prefix("[todo]").unwrap_or(cleaned).trim();
    let cleaned = strip_keyword_prefix(cleaned).trim();
    cleaned.to_string()
}

/// Strip a leading `todo:` / `action:` / `next:` prefix, ignoring ASCII case.
fn strip_keyword_prefix(line: &str) -> &str {
    for prefix in KEYWORD_PREFIXES {
        if let Some(head) = line.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return &line[prefix.len()..];
            }
        }
    }
    line
}

/// Classify a trimmed, non-empty line as an action line.
fn is_action_line(line: &str, bullet: &Regex) -> bool {
    let lowered = line.to_lowercase();
    if bullet.is_match(&lowered) {
        return true;
    }
    if KEYWORD_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
        return true;
    }
    lowered.contains("[ ]") || lowered.contains("[todo]")
}

/// Split text into sentences at `.`, `!` or `?` followed by whitespace.
/// Terminal punctuation stays attached to its sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let boundary = Regex::new(r"[.!?]\s+").unwrap();
    let mut sentences = Vec::new();
    let mut last = 0;
    for m in boundary.find_iter(text) {
        // The punctuation char is a single byte, keep it with the sentence.
        sentences.push(&text[last..m.start() + 1]);
        last = m.end();
    }
    sentences.push(&text[last..]);
    sentences
}

/// Crude imperative test: the first `[A-Za-z']+` token must be one of the
/// fixed starter verbs. Only the first word is inspected.
fn looks_imperative(sentence: &str) -> bool {
    let first: String = sentence
        .chars()
        .skip_while(|c| !c.is_ascii_alphabetic() && *c != '\'')
        .take_while(|c| c.is_ascii_alphabetic() || *c == '\'')
        .collect();
    if first.is_empty() {
        return false;
    }
    let lowered = first.to_lowercase();
    IMPERATIVE_STARTERS.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_input() {
        assert!(extract_action_items("").is_empty());
        assert!(extract_action_items("   ").is_empty());
        assert!(extract_action_items("\n\n  \n").is_empty());
    }

    #[test]
    fn test_bullet_variants() {
        let text = "- dash item\n* star item\n• dot item\n2. ordinal item";
        let items = extract_action_items(text);
        assert_eq!(
            items,
            vec!["dash item", "star item", "dot item", "ordinal item"]
        );
    }

    #[test]
    fn test_bullet_requires_trailing_whitespace() {
        // "-item" is not a bullet; "3.item" is not an ordinal
        let items = extract_action_items("-item\n3.item");
        assert!(items.is_empty());
    }

    #[test]
    fn test_keyword_prefixes_stripped_case_insensitively() {
        let items = extract_action_items("TODO: Implement auth\naction: Set up DB\nnext: Write tests");
        assert_eq!(items, vec!["Implement auth", "Set up DB", "Write tests"]);
    }

    #[test]
    fn test_checkbox_strip_after_bullet_strip() {
        let items = extract_action_items("- [ ] Set up database\n- [todo] Ship release");
        assert_eq!(items, vec!["Set up database", "Ship release"]);
    }

    #[test]
    fn test_checkbox_anywhere_marks_line() {
        let items = extract_action_items("remember [ ] call mom");
        assert_eq!(items, vec!["remember [ ] call mom"]);
    }

    #[test]
    fn test_fallback_only_when_no_line_matched() {
        // A single bullet suppresses the fallback for the whole text.
        let text = "- real item\nImplement the feature now.";
        let items = extract_action_items(text);
        assert_eq!(items, vec!["real item"]);
    }

    #[test]
    fn test_fallback_imperative_sentences() {
        let text = "I went to the store. Implement the feature now. Verify the output!";
        let items = extract_action_items(text);
        assert_eq!(
            items,
            vec!["Implement the feature now.", "Verify the output!"]
        );
    }

    #[test]
    fn test_fallback_first_word_only() {
        // "I will implement" starts with "I", not an imperative starter.
        let items = extract_action_items("I went to the store. I will implement the feature.");
        assert!(items.is_empty());
    }

    #[test]
    fn test_split_sentences_keeps_punctuation() {
        let sentences = split_sentences("One. Two! Three? Four");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?", "Four"]);
    }

    #[test]
    fn test_looks_imperative() {
        assert!(looks_imperative("Fix the login bug."));
        assert!(looks_imperative("  check the logs"));
        assert!(!looks_imperative("We should fix this."));
        assert!(!looks_imperative("12345"));
        assert!(!looks_imperative(""));
    }
}
