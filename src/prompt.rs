use crate::language::Language;

/// Instruction template sent to the completion endpoint. The three
/// `{placeholder}` markers are filled by literal replacement; the code is
/// fenced with triple quotes and passed through without escaping, so the
/// same sequence inside the code itself is not handled specially.
pub const CONVERSION_TEMPLATE: &str = "\
You are an expert multi-language code converter.
Your goals are:
- Read and fully understand the provided source code.
- Rewrite the code in a *different target programming language* specified by the user.
- Preserve the original logic, structure, and behavior.
- Improve clarity when needed, but DO NOT change functionality.
- If the input language or target language is ambiguous, ask for clarification.
- Add comments in the target language only if the user requests them.

Below is the source code and the target language:

SOURCE_LANGUAGE: {source_language}
TARGET_LANGUAGE: {target_language}

SOURCE_CODE:
\"\"\"
{source_code}
\"\"\"

YOUR OUTPUT ({target_language}) with comments in SPANISH:
";

/// Fill the template with the request fields. Pure; identical inputs yield
/// an identical prompt.
pub fn build_prompt(source: Language, target: Language, source_code: &str) -> String {
    CONVERSION_TEMPLATE
        .replace("{source_language}", source.display_name())
        .replace("{target_language}", target.display_name())
        .replace("{source_code}", source_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_all_three_slots() {
        let prompt = build_prompt(Language::Python, Language::JavaScript, "print('hi')");
        assert!(prompt.contains("SOURCE_LANGUAGE: Python"));
        assert!(prompt.contains("TARGET_LANGUAGE: JavaScript"));
        assert!(prompt.contains("print('hi')"));
        assert!(prompt.contains("YOUR OUTPUT (JavaScript)"));
        assert!(!prompt.contains("{source_language}"));
        assert!(!prompt.contains("{target_language}"));
        assert!(!prompt.contains("{source_code}"));
    }

    #[test]
    fn code_is_embedded_verbatim() {
        let code = "int x=1;\n\n\tif (x) { return; }  ";
        let prompt = build_prompt(Language::Cpp, Language::Rust, code);
        assert!(prompt.contains(code));
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let a = build_prompt(Language::Go, Language::Ruby, "fmt.Println(1)");
        let b = build_prompt(Language::Go, Language::Ruby, "fmt.Println(1)");
        assert_eq!(a, b);
    }

    #[test]
    fn annotation_language_is_fixed() {
        assert!(CONVERSION_TEMPLATE.contains("SPANISH"));
    }
}
