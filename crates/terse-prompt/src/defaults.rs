// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in version instructions and few-shot examples.
//!
//! These constants define baseline model behavior and must stay
//! byte-stable: settings surfaces override them per key (versions)
//! or wholesale (examples), and tests pin their content.

/// Default instruction for version 1 (grammar and clarity cleanup).
pub const DEFAULT_VERSION1: &str = "Refine the grammar, sentence structure, and overall clarity of the message without changing its core meaning or intent. Identify and remove unnecessary stop words (e.g., \"the,\" \"which,\" \"and\") or connector words that can be omitted without altering the message's meaning.";

/// Default instruction for version 2 (abbreviation substitution).
pub const DEFAULT_VERSION2: &str = "Replace longer phrases or words with widely recognized abbreviations where appropriate (e.g., \"in my opinion\" → \"IMO,\" \"developer\" → \"dev\").";

/// Default instruction for version 3 (shorter-synonym substitution).
pub const DEFAULT_VERSION3: &str = "Substitute longer words with shorter, concise synonyms that maintain the message's meaning (e.g., \"continuous\" → \"constant,\" \"profession\" → \"job\").";

const EXAMPLE_1: &str = r#"Example 1:
Original message: "I'm really excited about the new project we're starting next week. It's going to be challenging, but I think it will be a great opportunity for our team to learn and grow together."

<thinking>
Core ideas: excitement, new project, start time, challenge, team growth.
Decisions:
1. Remove filler words "really" and "I think"
2. Abbreviate "next week" to "next wk"
3. Use emojis for "excited" and "project"
4. Condense "learn and grow together" to "grow as one"
</thinking>

<response>
{
  "version1": "I'm excited about the new project starting next week. It'll be challenging, but a great opportunity for our team to learn and grow together.",
  "version2": "Excited for new project next wk. Challenging, but great opp for team learning & growth.",
  "version3": "🎉 New project next wk. Tough, but team will grow as one."
}
</response>"#;

const EXAMPLE_2: &str = r#"Example 2:
Original message: "The annual company retreat is scheduled for next month in Hawaii. It's a fantastic opportunity for team building, strategic planning, and enjoying some well-deserved relaxation time together."

<thinking>
Core ideas: annual retreat, location, timing, purpose (team building, planning, relaxation).
Decisions:
1. Combine ideas into more concise structure
2. Use abbreviations for "next month" and "Hawaii"
3. Replace "fantastic opportunity" with shorter synonym
4. Use emojis for "retreat" and "Hawaii"
</thinking>

<response>
{
  "version1": "Our annual company retreat is next month in Hawaii. It's great for team building, strategic planning, and enjoying relaxation together.",
  "version2": "Annual company retreat next mo in HI. Great for team building, planning & relaxation.",
  "version3": "🏝️ retreat next mo in HI. Team bonds, plans & chills."
}
</response>"#;

const EXAMPLE_3: &str = r#"Example 3:
Original message: "The new software update includes significant improvements to user interface design, enhanced security features, and optimized performance for faster load times across all devices."

<thinking>
Core ideas: new update, UI improvements, security enhancements, performance optimization.
Decisions:
1. Remove unnecessary words like "significant" and "enhanced"
2. Use common tech abbreviations
3. Condense phrases to their essence
4. Use emojis for key concepts
</thinking>

<response>
{
  "version1": "The new software update improves user interface design, security features, and optimizes performance for faster load times on all devices.",
  "version2": "New SW update: better UI, improved security & optimized perf for faster load times on all devices.",
  "version3": "SW update: better UI, better security, higher speed on all devices."
}
</response>"#;

/// The three default few-shot examples, in order.
pub const DEFAULT_EXAMPLES: [&str; 3] = [EXAMPLE_1, EXAMPLE_2, EXAMPLE_3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_exactly_three_default_examples() {
        assert_eq!(DEFAULT_EXAMPLES.len(), 3);
        for (i, example) in DEFAULT_EXAMPLES.iter().enumerate() {
            assert!(example.starts_with(&format!("Example {}:", i + 1)));
            assert!(example.contains("<thinking>"));
            assert!(example.contains("<response>"));
        }
    }

    #[test]
    fn default_examples_carry_well_formed_response_sections() {
        // Each example demonstrates the exact output contract the
        // extractor enforces.
        for example in DEFAULT_EXAMPLES {
            let start = example.find("<response>").unwrap() + "<response>".len();
            let end = example.find("</response>").unwrap();
            let value: serde_json::Value = serde_json::from_str(&example[start..end]).unwrap();
            for key in ["version1", "version2", "version3"] {
                assert!(value[key].is_string(), "{key} must be a string");
            }
        }
    }

    #[test]
    fn default_instructions_are_distinct() {
        assert_ne!(DEFAULT_VERSION1, DEFAULT_VERSION2);
        assert_ne!(DEFAULT_VERSION2, DEFAULT_VERSION3);
        assert!(DEFAULT_VERSION1.contains("grammar"));
        assert!(DEFAULT_VERSION2.contains("abbreviations"));
        assert!(DEFAULT_VERSION3.contains("synonyms"));
    }
}
