//! Voice Input
//!
//! Recognized speech arrives as a [`VoiceResult`]; this module cleans the
//! text and splits sub-ingredient phrases like "2 kg rice" into parts.
//! Capture itself lives in the browser layer.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{StoreError, StoreResult};

/// Languages offered for speech capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceLanguage {
    #[serde(rename = "en-US")]
    English,
    #[serde(rename = "hi-IN")]
    Hindi,
    #[serde(rename = "gu-IN")]
    Gujarati,
}

impl VoiceLanguage {
    pub const ALL: [VoiceLanguage; 3] = [
        VoiceLanguage::English,
        VoiceLanguage::Hindi,
        VoiceLanguage::Gujarati,
    ];

    /// BCP 47 tag handed to the recognizer
    pub fn tag(&self) -> &'static str {
        match self {
            VoiceLanguage::English => "en-US",
            VoiceLanguage::Hindi => "hi-IN",
            VoiceLanguage::Gujarati => "gu-IN",
        }
    }

    /// Button label in the language itself
    pub fn label(&self) -> &'static str {
        match self {
            VoiceLanguage::English => "English",
            VoiceLanguage::Hindi => "हिंदी",
            VoiceLanguage::Gujarati => "ગુજરાતી",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(tag))
    }
}

/// Final text handed back by a capture session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceResult {
    pub text: String,
    pub language_tag: String,
}

impl VoiceResult {
    pub fn new(text: impl Into<String>, language: VoiceLanguage) -> Self {
        Self {
            text: text.into(),
            language_tag: language.tag().to_string(),
        }
    }

    pub fn language(&self) -> Option<VoiceLanguage> {
        VoiceLanguage::from_tag(&self.language_tag)
    }

    /// Cleaned text, or None if nothing usable was recognized
    pub fn candidate(&self) -> Option<String> {
        let cleaned = clean_transcript(&self.text);
        (!cleaned.is_empty()).then_some(cleaned)
    }
}

/// Sub-ingredient fields extracted from a spoken phrase
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    pub quantity: f64,
    pub unit: String,
    pub name: String,
}

/// Strip zero-width characters and collapse whitespace
pub fn clean_transcript(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}'))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Best-effort split of "<number> [unit] name" phrases
///
/// The first positive number is the quantity and a known unit right after
/// it (or glued to it, as in "2kg") is the unit. Everything else is the
/// name. Phrases without a number, or with nothing left for the name,
/// become one piece named after the whole text.
pub fn parse_sub_ingredient(text: &str, config: &AppConfig) -> ParsedIngredient {
    let cleaned = clean_transcript(text);
    let words: Vec<&str> = cleaned.split(' ').filter(|w| !w.is_empty()).collect();

    for (i, word) in words.iter().enumerate() {
        let Some((quantity, suffix)) = split_number(word) else {
            continue;
        };

        let (unit, consumed) = if suffix.is_empty() {
            match words.get(i + 1).and_then(|w| config.known_unit(w)) {
                Some(unit) => (unit.to_string(), 2),
                None => (config.default_unit.clone(), 1),
            }
        } else {
            match config.known_unit(suffix) {
                Some(unit) => (unit.to_string(), 1),
                // "7up" and friends are words, not quantities
                None => continue,
            }
        };

        let mut rest: Vec<&str> = words[..i].to_vec();
        let mut after = &words[i + consumed..];
        if consumed == 2 || !suffix.is_empty() {
            if let Some((first, tail)) = after.split_first() {
                if first.eq_ignore_ascii_case("of") {
                    after = tail;
                }
            }
        }
        rest.extend_from_slice(after);

        let name = rest.join(" ");
        if name.is_empty() {
            break;
        }
        return ParsedIngredient { quantity, unit, name };
    }

    ParsedIngredient {
        quantity: 1.0,
        unit: config.default_unit.clone(),
        name: cleaned,
    }
}

/// Parse a dictated or typed quantity
pub fn parse_quantity(text: &str) -> StoreResult<f64> {
    let cleaned = clean_transcript(text);
    match split_number(&cleaned) {
        Some((quantity, "")) => Ok(quantity),
        _ => Err(StoreError::validation(format!(
            "Quantity must be a positive number, got {:?}",
            cleaned
        ))),
    }
}

/// Leading positive number of a token and whatever follows it
///
/// Accepts integers, decimals and simple fractions ("1/2").
fn split_number(token: &str) -> Option<(f64, &str)> {
    if let Some((num, den)) = token.split_once('/') {
        let num: f64 = num.parse().ok()?;
        let den: f64 = den.parse().ok()?;
        let value = num / den;
        return (value.is_finite() && value > 0.0).then_some((value, ""));
    }

    let mut seen_dot = false;
    let end = token
        .char_indices()
        .find(|(_, c)| match c {
            '0'..='9' => false,
            '.' if !seen_dot => {
                seen_dot = true;
                false
            }
            _ => true,
        })
        .map(|(idx, _)| idx)
        .unwrap_or(token.len());

    let (number, suffix) = token.split_at(end);
    if !number.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let value: f64 = number.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some((value, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedIngredient {
        parse_sub_ingredient(text, &AppConfig::default())
    }

    #[test]
    fn test_clean_transcript() {
        assert_eq!(clean_transcript("  two\u{200B}  kg \n rice\u{FEFF} "), "two kg rice");
        assert_eq!(clean_transcript("\u{200C}"), "");
    }

    #[test]
    fn test_number_unit_name() {
        assert_eq!(
            parse("2 kg basmati rice"),
            ParsedIngredient { quantity: 2.0, unit: "kg".into(), name: "basmati rice".into() }
        );
    }

    #[test]
    fn test_name_before_number() {
        assert_eq!(
            parse("Tomatoes 3"),
            ParsedIngredient { quantity: 3.0, unit: "pieces".into(), name: "Tomatoes".into() }
        );
        assert_eq!(
            parse("milk 1.5 liters"),
            ParsedIngredient { quantity: 1.5, unit: "liters".into(), name: "milk".into() }
        );
    }

    #[test]
    fn test_glued_unit_and_fraction() {
        assert_eq!(
            parse("250g Butter"),
            ParsedIngredient { quantity: 250.0, unit: "g".into(), name: "Butter".into() }
        );
        assert_eq!(
            parse("1/2 Cups of sugar"),
            ParsedIngredient { quantity: 0.5, unit: "cups".into(), name: "sugar".into() }
        );
    }

    #[test]
    fn test_unparsed_text_defaults_to_one_piece() {
        assert_eq!(
            parse("fresh coriander"),
            ParsedIngredient { quantity: 1.0, unit: "pieces".into(), name: "fresh coriander".into() }
        );
        // Nothing left for the name after the number and unit
        assert_eq!(
            parse("5 kg"),
            ParsedIngredient { quantity: 1.0, unit: "pieces".into(), name: "5 kg".into() }
        );
        // Zero is not a quantity
        assert_eq!(parse("0 eggs").quantity, 1.0);
    }

    #[test]
    fn test_unknown_glued_suffix_is_a_word() {
        assert_eq!(
            parse("7up 2 bottles"),
            ParsedIngredient { quantity: 2.0, unit: "pieces".into(), name: "7up bottles".into() }
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_quantity("3/4").unwrap(), 0.75);
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("a lot").is_err());
        assert!(parse_quantity("2kg").is_err());
    }

    #[test]
    fn test_languages() {
        assert_eq!(VoiceLanguage::from_tag("hi-in"), Some(VoiceLanguage::Hindi));
        assert_eq!(VoiceLanguage::Gujarati.tag(), "gu-IN");
        assert_eq!(serde_json::to_string(&VoiceLanguage::English).unwrap(), "\"en-US\"");
    }

    #[test]
    fn test_voice_result_candidate() {
        let result = VoiceResult::new("  Weekend   BBQ ", VoiceLanguage::English);
        assert_eq!(result.candidate().as_deref(), Some("Weekend BBQ"));
        assert_eq!(result.language(), Some(VoiceLanguage::English));
        assert!(VoiceResult::new(" \u{200B} ", VoiceLanguage::Hindi).candidate().is_none());
    }
}
