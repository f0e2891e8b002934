//! Clean-up applied to raw model text before it is parsed.
//!
//! Models like to wrap JSON answers in a markdown code fence even when told
//! not to. This is not a JSON repair engine: only the fence is removed, and
//! anything still invalid afterwards is the caller's parse error.

const FENCE: &str = "```";

/// Strip a surrounding markdown code fence and trim whitespace.
///
/// * A leading ```` ``` ```` (optionally followed by a language tag such as
///   `json`) is dropped up to and including the first line break.
/// * A trailing ```` ``` ```` is dropped.
///
/// Applying the function to its own output is a no-op.
///
/// ```
/// use hilal_core::normalize::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
/// ```
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if text.starts_with(FENCE) {
        if let Some((_, rest)) = text.split_once('\n') {
            text = rest;
        } else {
            // Single-line fence: "```{...}```"
            text = &text[FENCE.len()..];
        }
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_json_is_left_alone() {
        assert_eq!(strip_code_fence(r#"{"a":"b"}"#), r#"{"a":"b"}"#);
    }

    #[test]
    fn bare_fence_round_trips_document() {
        let doc = r#"{"origin":"Hijra","originRefLink":"https://example.org"}"#;
        let wrapped = format!("```\n{doc}\n```");

        assert_eq!(strip_code_fence(&wrapped), doc);
    }

    #[test]
    fn language_tagged_fence_is_removed() {
        let wrapped = "```json\n{\n  \"surah\": \"Al-Fatiha\"\n}\n```\n";
        assert_eq!(strip_code_fence(wrapped), "{\n  \"surah\": \"Al-Fatiha\"\n}");
    }

    #[test]
    fn stripping_is_idempotent() {
        let inputs = [
            "```json\n{\"a\":1}\n```",
            "```\n[1, 2, 3]\n```",
            "```{\"a\":1}```",
            "  \n{\"a\":1}\n  ",
            "not json at all",
            "",
        ];

        for input in inputs {
            let once = strip_code_fence(input);
            assert_eq!(strip_code_fence(once), once, "input: {input:?}");
        }
    }

    #[test]
    fn only_trailing_fence() {
        assert_eq!(strip_code_fence("{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn single_line_fence() {
        assert_eq!(strip_code_fence("```{\"a\":1}```"), "{\"a\":1}");
    }
}
