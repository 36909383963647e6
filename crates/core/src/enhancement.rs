//! The tagged enhancement result and the provider instruction builder.

use crate::language::Lang;

/// Outcome of one enhancement attempt.
///
/// Both variants collapse to the same wire shape (`{"enhancedPrompt":
/// ...}`); the tag records which path produced the text so tests can
/// tell a live provider response from the static fallback without
/// changing the external contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enhancement {
    /// Text returned verbatim by the generative provider.
    Provider(String),
    /// Text synthesized from the static fallback template.
    Fallback(String),
}

impl Enhancement {
    /// The enhanced prompt text, discarding the source tag.
    pub fn into_text(self) -> String {
        match self {
            Enhancement::Provider(text) | Enhancement::Fallback(text) => text,
        }
    }

    /// Whether this enhancement came from the static fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Enhancement::Fallback(_))
    }
}

/// Build the fixed instruction prompt sent to the generative provider.
///
/// Embeds the idea verbatim and constrains the entire response to the
/// detected language.
pub fn build_instruction(idea: &str, lang: Lang) -> String {
    format!(
        "You are an expert website architect. Transform this website idea: \"{idea}\" \
         into a professional, structured prompt. \
         Include: Value Proposition, Design Style, and UI Sections. \
         Constraint: The entire response must be written in {} only.",
        lang.english_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_embeds_idea_verbatim() {
        let prompt = build_instruction("A marketplace for digital art", Lang::En);
        assert!(prompt.contains("\"A marketplace for digital art\""));
    }

    #[test]
    fn instruction_names_english_for_latin_input() {
        let prompt = build_instruction("A marketplace for digital art", Lang::En);
        assert!(prompt.contains("written in English only"));
    }

    #[test]
    fn instruction_names_arabic_for_arabic_input() {
        let prompt = build_instruction("موقع لبيع الكتب", Lang::Ar);
        assert!(prompt.contains("written in Arabic only"));
    }

    #[test]
    fn into_text_drops_the_tag() {
        assert_eq!(
            Enhancement::Provider("a".to_string()).into_text(),
            Enhancement::Fallback("a".to_string()).into_text(),
        );
    }

    #[test]
    fn is_fallback_distinguishes_paths() {
        assert!(Enhancement::Fallback(String::new()).is_fallback());
        assert!(!Enhancement::Provider(String::new()).is_fallback());
    }
}
