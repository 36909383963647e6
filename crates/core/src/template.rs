//! Static fallback templates and the deterministic formatter.
//!
//! When the generative provider is unavailable or fails, the service
//! synthesizes a structured response by filling a language-keyed
//! template with the literal idea text. The templates are compile-time
//! constants; nothing here is mutated after process start.

use crate::language::Lang;

/// A language-keyed set of section headers and boilerplate strings.
pub struct FallbackTemplate {
    /// Document header line.
    pub header: &'static str,
    /// Section 1 label: value proposition.
    pub proposition: &'static str,
    /// Section 2 label: visual and design direction.
    pub design: &'static str,
    /// Section 3 label: core UI/UX modules.
    pub modules: &'static str,
    /// Section 4 label: technical infrastructure.
    pub tech: &'static str,
    /// Fixed design-style bullet text.
    pub design_style: &'static str,
    /// Fixed typography bullet text.
    pub typography: &'static str,
    /// Fixed color-palette bullet text.
    pub palette: &'static str,
    /// Fixed technology-stack recommendation.
    pub stack: &'static str,
}

static TEMPLATE_EN: FallbackTemplate = FallbackTemplate {
    header: "--- STRATEGIC WEBSITE ARCHITECTURE ---",
    proposition: "1. Core Value Proposition",
    design: "2. Visual and Design Direction",
    modules: "3. Core UI/UX Modules",
    tech: "4. Technical Infrastructure",
    design_style: "Modern Minimalism with high-fidelity components.",
    typography: "High-contrast Sans-serif system.",
    palette: "Deep Slate (#0F172A) and Electric Blue (#2563EB).",
    stack: "React.js with Tailwind CSS (Mobile-first).",
};

static TEMPLATE_AR: FallbackTemplate = FallbackTemplate {
    header: "--- البنية الاستراتيجية للموقع ---",
    proposition: "1. عرض القيمة الأساسي",
    design: "2. التوجه البصري والتصميم",
    modules: "3. الأقسام الأساسية لواجهة المستخدم",
    tech: "4. البنية التحتية التقنية",
    design_style: "بساطة حديثة (Minimalism) مع مكونات عالية الدقة.",
    typography: "نظام خطوط Sans-serif متباين.",
    palette: "الأزرق الداكن العميق (#0F172A) والأزرق الملكي (#2563EB).",
    stack: "React.js مع Tailwind CSS (استجابة كاملة).",
};

impl FallbackTemplate {
    /// Look up the template for a target language.
    pub fn for_lang(lang: Lang) -> &'static FallbackTemplate {
        match lang {
            Lang::En => &TEMPLATE_EN,
            Lang::Ar => &TEMPLATE_AR,
        }
    }
}

/// Fill the static template for `lang` with the literal idea text.
///
/// Produces the fixed four-section document: title line, value
/// proposition referencing the idea, design-direction bullets,
/// UI-module bullets, and a technology-stack line. The connective
/// English strings ("Project Concept:", bullet labels, module names)
/// are part of the template shape and stay English in both variants.
pub fn format_fallback(idea: &str, lang: Lang) -> String {
    let t = FallbackTemplate::for_lang(lang);

    format!(
        "{header}\n\
         \n\
         Project Concept: {idea}\n\
         \n\
         {proposition}\n\
         A premium digital solution for {idea} designed to establish market authority through optimized UX.\n\
         \n\
         {design}\n\
         - Style: {design_style}\n\
         - Typography: {typography}\n\
         - Color Palette: {palette}\n\
         \n\
         {modules}\n\
         - Immersive Hero Section\n\
         - Feature Ecosystem\n\
         - Trust Architecture\n\
         - Strategic Footer\n\
         \n\
         {tech}\n\
         Recommended Stack: {stack}",
        header = t.header,
        idea = idea,
        proposition = t.proposition,
        design = t.design,
        design_style = t.design_style,
        typography = t.typography,
        palette = t.palette,
        modules = t.modules,
        tech = t.tech,
        stack = t.stack,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_fallback_contains_concept_line() {
        let text = format_fallback("A marketplace for digital art", Lang::En);
        assert!(text.contains("Project Concept: A marketplace for digital art"));
    }

    #[test]
    fn english_fallback_sections_in_order() {
        let text = format_fallback("A marketplace for digital art", Lang::En);

        let positions: Vec<usize> = [
            "1. Core Value Proposition",
            "2. Visual and Design Direction",
            "3. Core UI/UX Modules",
            "4. Technical Infrastructure",
        ]
        .iter()
        .map(|s| text.find(s).expect("section header missing"))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn english_fallback_starts_with_header() {
        let text = format_fallback("A marketplace for digital art", Lang::En);
        assert!(text.starts_with("--- STRATEGIC WEBSITE ARCHITECTURE ---"));
        // No stray whitespace around the document.
        assert_eq!(text, text.trim());
    }

    #[test]
    fn arabic_fallback_uses_arabic_labels() {
        let text = format_fallback("موقع لبيع الكتب", Lang::Ar);
        assert!(text.starts_with("--- البنية الاستراتيجية للموقع ---"));
        assert!(text.contains("1. عرض القيمة الأساسي"));
        assert!(text.contains("2. التوجه البصري والتصميم"));
        assert!(text.contains("3. الأقسام الأساسية لواجهة المستخدم"));
        assert!(text.contains("4. البنية التحتية التقنية"));
        assert!(text.contains("Project Concept: موقع لبيع الكتب"));
    }

    #[test]
    fn idea_is_interpolated_verbatim() {
        // The formatter never escapes or rewrites the idea, even if it
        // contains template-looking characters.
        let text = format_fallback("100% \"organic\" {site}", Lang::En);
        assert!(text.contains("Project Concept: 100% \"organic\" {site}"));
    }

    #[test]
    fn fixed_stack_line_present() {
        let text = format_fallback("a fitness tracking app", Lang::En);
        assert!(text.contains("Recommended Stack: React.js with Tailwind CSS (Mobile-first)."));
    }
}
