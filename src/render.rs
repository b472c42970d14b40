use serde::Serialize;

use crate::error::ConvertError;
use crate::language::Language;
use crate::llm::ModelError;
use crate::request::MAX_SOURCE_CHARS;

/// What a submission produced. The page renders exactly one of these into
/// its single output region; `kind` tells it whether that is an error, a
/// warning, an informational note, or a highlighted code block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Idle,
    Error { message: String },
    Warning { message: String },
    Info { message: String },
    Code { code: String, highlight: &'static str },
}

/// Wrap a model reply for display. The text is passed through verbatim;
/// only the highlighting mode is derived from the target language.
pub fn render_code(reply: String, target: Language) -> Outcome {
    Outcome::Code {
        code: reply,
        highlight: target.highlight_id(),
    }
}

impl From<ConvertError> for Outcome {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::InputTooLarge(_) => Outcome::Error {
                message: format!(
                    "El tamaño máximo de caracteres del código es de {MAX_SOURCE_CHARS}"
                ),
            },
            ConvertError::MissingCredential => Outcome::Warning {
                message: "Por favor, introduzca su Groq API KEY.".to_string(),
            },
            ConvertError::NoOpConversion => Outcome::Info {
                message: "El lenguaje fuente y objetivo son iguales. No se requiere conversión."
                    .to_string(),
            },
            ConvertError::Remote(model_err) => Outcome::Error {
                message: remote_message(&model_err).to_string(),
            },
        }
    }
}

fn remote_message(err: &ModelError) -> &'static str {
    match err {
        ModelError::InvalidCredential => "La API KEY fue rechazada por el servicio de conversión.",
        ModelError::RateLimited => {
            "El servicio de conversión está limitando las peticiones. \
             Inténtelo de nuevo en unos minutos."
        }
        ModelError::Service(_) => "El servicio de conversión devolvió un error.",
        ModelError::Network(_) => "No se pudo contactar con el servicio de conversión.",
        ModelError::EmptyResponse => "El servicio de conversión devolvió una respuesta vacía.",
    }
}
