use serde::Deserialize;

use crate::error::ConvertError;
use crate::language::Language;

/// Cap on the length of the code field, in characters.
pub const MAX_SOURCE_CHARS: usize = 15_000;

/// Raw form fields as posted by the page, prior to any validation. Unknown
/// language names already fail deserialization via the closed enum.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub source_code: String,
    pub source_language: Language,
    pub target_language: Language,
}

/// A submission that passed every precondition. Only
/// [`ConversionRequest::from_submission`] builds one, so holding a value
/// means: code within the cap and non-empty, credential present, languages
/// distinct.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    api_key: String,
    source_code: String,
    source_language: Language,
    target_language: Language,
}

impl ConversionRequest {
    /// Screen a submission, in the order the form enforces:
    /// oversize code is an error before anything else, an empty code field
    /// means there is nothing to do (`Ok(None)`), then the credential and
    /// same-language checks apply.
    pub fn from_submission(sub: &Submission) -> Result<Option<Self>, ConvertError> {
        let len = sub.source_code.chars().count();
        if len > MAX_SOURCE_CHARS {
            return Err(ConvertError::InputTooLarge(len));
        }
        if sub.source_code.is_empty() {
            return Ok(None);
        }
        if sub.api_key.is_empty() {
            return Err(ConvertError::MissingCredential);
        }
        if sub.source_language == sub.target_language {
            return Err(ConvertError::NoOpConversion);
        }
        Ok(Some(Self {
            api_key: sub.api_key.clone(),
            source_code: sub.source_code.clone(),
            source_language: sub.source_language,
            target_language: sub.target_language,
        }))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn source_language(&self) -> Language {
        self.source_language
    }

    pub fn target_language(&self) -> Language {
        self.target_language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(api_key: &str, code: &str, source: Language, target: Language) -> Submission {
        Submission {
            api_key: api_key.to_string(),
            source_code: code.to_string(),
            source_language: source,
            target_language: target,
        }
    }

    #[test]
    fn oversize_code_is_rejected_regardless_of_other_fields() {
        let code = "x".repeat(MAX_SOURCE_CHARS + 1);
        // Same languages and empty credential would each halt later; the
        // length check must win.
        let sub = submission("", &code, Language::Python, Language::Python);
        match ConversionRequest::from_submission(&sub) {
            Err(ConvertError::InputTooLarge(len)) => assert_eq!(len, MAX_SOURCE_CHARS + 1),
            other => panic!("expected InputTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn code_at_the_cap_passes() {
        let code = "y".repeat(MAX_SOURCE_CHARS);
        let sub = submission("valid-key", &code, Language::Python, Language::JavaScript);
        assert!(ConversionRequest::from_submission(&sub).unwrap().is_some());
    }

    #[test]
    fn empty_code_is_idle() {
        let sub = submission("valid-key", "", Language::Python, Language::JavaScript);
        assert!(ConversionRequest::from_submission(&sub).unwrap().is_none());
    }

    #[test]
    fn missing_credential_is_caught_before_language_check() {
        let sub = submission("", "int x=1;", Language::Cpp, Language::Cpp);
        assert!(matches!(
            ConversionRequest::from_submission(&sub),
            Err(ConvertError::MissingCredential)
        ));
    }

    #[test]
    fn same_language_is_a_no_op() {
        let sub = submission("valid-key", "x=1", Language::Python, Language::Python);
        assert!(matches!(
            ConversionRequest::from_submission(&sub),
            Err(ConvertError::NoOpConversion)
        ));
    }

    #[test]
    fn valid_submission_is_carried_verbatim() {
        let sub = submission("valid-key", "print('hi')", Language::Python, Language::JavaScript);
        let req = ConversionRequest::from_submission(&sub).unwrap().unwrap();
        assert_eq!(req.api_key(), "valid-key");
        assert_eq!(req.source_code(), "print('hi')");
        assert_eq!(req.source_language(), Language::Python);
        assert_eq!(req.target_language(), Language::JavaScript);
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // Multibyte characters stay under the cap as long as their count does.
        let code = "ñ".repeat(MAX_SOURCE_CHARS);
        let sub = submission("valid-key", &code, Language::Python, Language::Ruby);
        assert!(ConversionRequest::from_submission(&sub).unwrap().is_some());
    }
}
