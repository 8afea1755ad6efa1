use serde::Deserialize;
use web_sys::Document;

use crate::error::PanelError;

// --- Constants ---

pub const WRAPPER_SELECTOR: &str = ".wrapper";
pub const REGISTER_LINK_SELECTOR: &str = ".register-link";
pub const LOGIN_LINK_SELECTOR: &str = ".login-link";
pub const ACTIVE_CLASS: &str = "active";

/// Id of the optional `<script type="application/json">` element carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "panel-toggle-config";

/// Where the panels live on the page and which class marks the register view.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    pub wrapper_selector: String,
    pub register_link_selector: String,
    pub login_link_selector: String,
    pub active_class: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            wrapper_selector: WRAPPER_SELECTOR.to_string(),
            register_link_selector: REGISTER_LINK_SELECTOR.to_string(),
            login_link_selector: LOGIN_LINK_SELECTOR.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
        }
    }
}

impl PanelConfig {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PanelError> {
        let config: PanelConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from the config element if the page has one.
    pub fn from_document(document: &Document) -> Result<Self, PanelError> {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => {
                log::debug!("Loading panel config from #{}", CONFIG_ELEMENT_ID);
                Self::from_json(&raw)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), PanelError> {
        validate_class(&self.active_class)
    }
}

/// A class token must be non-empty and free of whitespace, same as `DOMTokenList`.
pub(crate) fn validate_class(class: &str) -> Result<(), PanelError> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(PanelError::InvalidClass {
            class: class.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let config = PanelConfig::default();
        assert_eq!(config.wrapper_selector, ".wrapper");
        assert_eq!(config.register_link_selector, ".register-link");
        assert_eq!(config.login_link_selector, ".login-link");
        assert_eq!(config.active_class, "active");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PanelConfig::from_json(r#"{"active_class": "is-register"}"#).unwrap();
        assert_eq!(config.active_class, "is-register");
        assert_eq!(config.wrapper_selector, WRAPPER_SELECTOR);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PanelConfig::from_json("{}").unwrap(), PanelConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PanelConfig::from_json(r#"{"wraper_selector": ".x"}"#).unwrap_err();
        assert!(matches!(err, PanelError::Config(_)));
    }

    #[test]
    fn marker_must_be_a_single_token() {
        for bad in ["", "is active", "\tactive"] {
            let raw = format!(r#"{{"active_class": {:?}}}"#, bad);
            let err = PanelConfig::from_json(&raw).unwrap_err();
            assert!(matches!(err, PanelError::InvalidClass { .. }), "{bad:?}");
        }
    }
}
