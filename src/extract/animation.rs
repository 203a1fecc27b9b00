//! Animation extraction: strict JSON decode of an embedded array first, then
//! a line parser that strips enumeration markers. Either way the result is
//! normalized to exactly five steps.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extract::model::AnimationSequence;
use crate::extract::scan;

// leading "1.", "2)", "3:", "Step 4:" or "*" plus the whitespace after it
static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+[.):]|Step \d+:|\*)\s*").expect("marker regex"));

pub fn extract_animation(text: &str) -> AnimationSequence {
    if let Some(block) = scan::embedded_block(text, '[', ']') {
        match serde_json::from_str::<Vec<String>>(block) {
            Ok(steps) => return AnimationSequence::from_steps(steps),
            Err(err) => debug!(error = %err, "animation block is not a JSON string array, using line parser"),
        }
    }
    parse_animation_lines(text)
}

fn parse_animation_lines(text: &str) -> AnimationSequence {
    let mut steps = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('{') || line.starts_with('}')
        {
            continue;
        }
        let cleaned = MARKER_RE.replace(line, "");
        if !cleaned.is_empty() {
            steps.push(cleaned.into_owned());
        }
    }
    AnimationSequence::from_steps(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_enumeration_markers() {
        let seq = extract_animation("1. Rotate\n2. Zoom\nStep 3: Vibrate");
        assert_eq!(
            seq.steps(),
            &["Rotate", "Zoom", "Vibrate", "Animation step 4", "Animation step 5"]
        );
    }

    #[test]
    fn marker_variants() {
        let seq = extract_animation("1) Spin\n2: Tilt\n* Shake\n3. Pan\nPlain line");
        assert_eq!(seq.steps()[0], "Spin");
        assert_eq!(seq.steps()[1], "Tilt");
        assert_eq!(seq.steps()[2], "Shake");
        assert_eq!(seq.steps()[3], "Pan");
        assert_eq!(seq.steps()[4], "Plain line");
    }

    #[test]
    fn skips_comments_and_braces() {
        let seq = extract_animation("# heading\n{\n1. Rotate\n}\n\n2. Zoom");
        assert_eq!(seq.steps()[0], "Rotate");
        assert_eq!(seq.steps()[1], "Zoom");
        assert_eq!(seq.steps()[2], "Animation step 3");
    }

    #[test]
    fn truncates_to_five_in_original_order() {
        let text = (1..=7)
            .map(|n| format!("{n}. Action {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let seq = extract_animation(&text);
        assert_eq!(seq.steps().len(), 5);
        assert_eq!(seq.steps()[0], "Action 1");
        assert_eq!(seq.steps()[4], "Action 5");
    }

    #[test]
    fn embedded_json_array_wins() {
        let text = "Here you go:\n[\"Rotate\", \"Zoom in\", \"Zoom out\", \"Vibrate\", \"Reset\"]\nEnjoy!";
        let seq = extract_animation(text);
        assert_eq!(seq.steps()[0], "Rotate");
        assert_eq!(seq.steps()[4], "Reset");
    }

    #[test]
    fn short_json_array_is_padded() {
        let seq = extract_animation("[\"Rotate\", \"Zoom\"]");
        assert_eq!(
            seq.steps(),
            &["Rotate", "Zoom", "Animation step 3", "Animation step 4", "Animation step 5"]
        );
    }

    #[test]
    fn non_string_array_falls_back_to_line_parser() {
        let seq = extract_animation("[1, 2, 3]\n1. Rotate slowly");
        // the unparseable array line is kept verbatim by the line parser
        assert_eq!(seq.steps()[0], "[1, 2, 3]");
        assert_eq!(seq.steps()[1], "Rotate slowly");
    }

    #[test]
    fn always_exactly_five() {
        for text in ["", "   \n  ", "# only\n# comments", "1. One\n2. Two\n3. Three"] {
            let seq = extract_animation(text);
            assert_eq!(seq.steps().len(), 5);
            assert!(seq.steps().iter().all(|s| !s.trim().is_empty()));
        }
    }
}
