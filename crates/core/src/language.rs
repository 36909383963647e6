//! Script-based language selection.
//!
//! The enhancer is bilingual (English/Arabic). Which language a response
//! uses is decided by a narrow heuristic: any character in the Arabic
//! Unicode block selects Arabic. This is a script detector, not a
//! language classifier. Upgrading it to a real language-identification
//! library would change observable behavior, so it stays a plain range
//! scan.

/// Target language for an enhancement response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ar,
}

impl Lang {
    /// English name of the language, as spelled out in the provider
    /// instruction ("must be written in Arabic only").
    pub fn english_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ar => "Arabic",
        }
    }
}

/// Detect the target language for an idea.
///
/// Returns [`Lang::Ar`] if the text contains any character in the Arabic
/// Unicode block (U+0600..=U+06FF), [`Lang::En`] otherwise.
pub fn detect(idea: &str) -> Lang {
    if idea.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c)) {
        Lang::Ar
    } else {
        Lang::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_is_english() {
        assert_eq!(detect("A marketplace for digital art"), Lang::En);
    }

    #[test]
    fn arabic_text_is_arabic() {
        assert_eq!(detect("موقع لبيع الكتب"), Lang::Ar);
    }

    #[test]
    fn single_arabic_char_selects_arabic() {
        assert_eq!(detect("my fitness app ك"), Lang::Ar);
    }

    #[test]
    fn arabic_punctuation_counts() {
        // U+061F (Arabic question mark) sits inside the scanned block.
        assert_eq!(detect("what؟"), Lang::Ar);
    }

    #[test]
    fn empty_input_is_english() {
        assert_eq!(detect(""), Lang::En);
    }

    #[test]
    fn non_arabic_non_latin_is_english() {
        // Cyrillic is outside the Arabic block, so the heuristic
        // defaults to English.
        assert_eq!(detect("сайт для книг"), Lang::En);
    }
}
