//! Login/register panel toggle for the chat landing page.
//!
//! Two ways to use it:
//! - server-rendered pages call [`dom::bind_auth_panels`] (`bindAuthPanels` from JS)
//!   to wire the existing `.wrapper`, `.register-link` and `.login-link` elements;
//! - Leptos apps render [`components::AuthPanels`].

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod panel;

pub use components::AuthPanels;
pub use config::PanelConfig;
pub use dom::{bind_panel_toggle, PanelBinding};
pub use error::PanelError;
pub use panel::{ClassSet, ClassTarget, PanelToggleController, PanelView};
