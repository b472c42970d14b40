use serde::{Deserialize, Serialize};

/// The closed set of languages the converter accepts, on both sides.
///
/// Wire names are the human-readable display names ("C#", "C++", "PHP"),
/// so form submissions with any other name fail at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Python,
    JavaScript,
    R,
    #[serde(rename = "C#")]
    CSharp,
    Go,
    #[serde(rename = "PHP")]
    Php,
    Ruby,
    #[serde(rename = "C++")]
    Cpp,
    Rust,
    Swift,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::Python,
        Language::JavaScript,
        Language::R,
        Language::CSharp,
        Language::Go,
        Language::Php,
        Language::Ruby,
        Language::Cpp,
        Language::Rust,
        Language::Swift,
    ];

    /// Human-readable name shown in the selectors and substituted into the prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::R => "R",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Cpp => "C++",
            Language::Rust => "Rust",
            Language::Swift => "Swift",
        }
    }

    /// Canonical lowercase identifier used to select a highlighting mode.
    pub fn highlight_id(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::R => "r",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Cpp => "cpp",
            Language::Rust => "rust",
            Language::Swift => "swift",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_highlight_id() {
        for lang in Language::ALL {
            let id = lang.highlight_id();
            assert!(!id.is_empty(), "{lang} has no highlight id");
            assert_eq!(id, id.to_lowercase(), "{lang} id is not lowercase");
        }
    }

    #[test]
    fn wire_names_are_display_names() {
        for lang in Language::ALL {
            let wire = serde_json::to_string(&lang).unwrap();
            assert_eq!(wire, format!("\"{}\"", lang.display_name()));
            let back: Language = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, lang);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(serde_json::from_str::<Language>("\"COBOL\"").is_err());
    }

    #[test]
    fn punctuated_names_round_trip() {
        assert_eq!(
            serde_json::from_str::<Language>("\"C#\"").unwrap(),
            Language::CSharp
        );
        assert_eq!(
            serde_json::from_str::<Language>("\"C++\"").unwrap(),
            Language::Cpp
        );
        assert_eq!(Language::Cpp.highlight_id(), "cpp");
        assert_eq!(Language::CSharp.highlight_id(), "csharp");
    }
}
