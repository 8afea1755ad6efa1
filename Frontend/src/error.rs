use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while wiring the panels to a page.
///
/// Click handlers themselves never fail; only setup does.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("no container element matches `{selector}`")]
    MissingContainer { selector: String },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("`{class}` is not a usable class name")]
    InvalidClass { class: String },

    #[error("could not attach click listener: {0}")]
    Listener(String),

    #[error("malformed panel config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("no document available (not running in a browser?)")]
    NoDocument,
}

impl From<PanelError> for JsValue {
    fn from(err: PanelError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = PanelError::MissingContainer {
            selector: ".wrapper".to_string(),
        };
        assert_eq!(err.to_string(), "no container element matches `.wrapper`");

        let err = PanelError::InvalidClass {
            class: "is active".to_string(),
        };
        assert!(err.to_string().contains("is active"));
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PanelError = parse.into();
        assert!(matches!(err, PanelError::Config(_)));
        assert!(err.to_string().starts_with("malformed panel config"));
    }
}
