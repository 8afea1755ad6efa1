//! Wiring for server-rendered pages: find the wrapper and the two links
//! with `querySelector` and attach click listeners.
//!
//! Lookups and listeners go through [`ElementLookup`] and [`ClickSource`],
//! so the same binding runs against a `web_sys::Document` or a fake page.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::panel::{ClassTarget, PanelToggleController};

type ClickHandler = Closure<dyn FnMut(MouseEvent)>;

// --- Traits ---

/// Finds elements by selector.
pub trait ElementLookup {
    type El: ClassTarget + ClickSource;

    fn query(&self, selector: &str) -> Result<Option<Self::El>, PanelError>;
}

/// An element that can run a callback on click.
pub trait ClickSource {
    type Listener: ClickListener;

    fn listen(&self, on_click: Box<dyn Fn()>) -> Result<Self::Listener, PanelError>;
}

/// Handle to an attached click callback.
pub trait ClickListener {
    fn detach(self);

    /// Leave the callback attached for the rest of the page's life.
    fn persist(self);
}

// --- web_sys ---

impl ClassTarget for Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::error!("class_list add error -> {:?}", e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::error!("class_list removal error -> {:?}", e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl ElementLookup for Document {
    type El = Element;

    fn query(&self, selector: &str) -> Result<Option<Element>, PanelError> {
        self.query_selector(selector)
            .map_err(|e| PanelError::Selector {
                selector: selector.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

pub struct DomListener {
    target: Element,
    handler: ClickHandler,
}

impl ClickSource for Element {
    type Listener = DomListener;

    fn listen(&self, on_click: Box<dyn Fn()>) -> Result<DomListener, PanelError> {
        let handler = ClickHandler::new(move |_: MouseEvent| on_click());
        self.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(|e| PanelError::Listener(format!("{:?}", e)))?;
        Ok(DomListener {
            target: self.clone(),
            handler,
        })
    }
}

impl ClickListener for DomListener {
    fn detach(self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback("click", self.handler.as_ref().unchecked_ref())
        {
            log::error!("click listener removal error -> {:?}", e);
        }
    }

    fn persist(self) {
        self.handler.forget();
    }
}

// --- Binding ---

/// Live listeners on a page. Dropping this detaches them.
pub struct PanelBinding<E: ClickSource> {
    controller: Rc<PanelToggleController<E>>,
    listeners: Vec<E::Listener>,
}

impl<E: ClassTarget + ClickSource> PanelBinding<E> {
    pub fn controller(&self) -> &PanelToggleController<E> {
        &self.controller
    }

    /// Number of triggers that were found and bound (0 to 2).
    pub fn bound_triggers(&self) -> usize {
        self.listeners.len()
    }

    /// Keep the listeners alive for the rest of the page's life.
    pub fn persist(mut self) {
        for listener in self.listeners.drain(..) {
            listener.persist();
        }
    }
}

impl<E: ClickSource> Drop for PanelBinding<E> {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
    }
}

/// Find the wrapper and triggers and bind the triggers that exist.
///
/// The wrapper is required; a missing trigger just means no listener.
pub fn bind_panel_toggle<L>(
    page: &L,
    config: &PanelConfig,
) -> Result<PanelBinding<L::El>, PanelError>
where
    L: ElementLookup,
    L::El: 'static,
{
    config.validate()?;

    let wrapper = page.query(&config.wrapper_selector)?.ok_or_else(|| {
        PanelError::MissingContainer {
            selector: config.wrapper_selector.clone(),
        }
    })?;
    let controller = Rc::new(PanelToggleController::new(wrapper, config.active_class.clone())?);

    let mut binding = PanelBinding {
        controller: controller.clone(),
        listeners: Vec::with_capacity(2),
    };

    if let Some(register_link) = page.query(&config.register_link_selector)? {
        let controller = controller.clone();
        let listener = register_link.listen(Box::new(move || controller.on_register_requested()))?;
        binding.listeners.push(listener);
    } else {
        log::debug!("No `{}` on page, register trigger not bound", config.register_link_selector);
    }

    if let Some(login_link) = page.query(&config.login_link_selector)? {
        let controller = controller.clone();
        let listener = login_link.listen(Box::new(move || controller.on_login_requested()))?;
        binding.listeners.push(listener);
    } else {
        log::debug!("No `{}` on page, login trigger not bound", config.login_link_selector);
    }

    log::info!(
        "Auth panels bound ({} trigger(s), marker `{}`)",
        binding.bound_triggers(),
        config.active_class
    );
    Ok(binding)
}

/// Entry point for pages that render their own markup.
///
/// ```html
/// <script type="module">
///   import init, { bindAuthPanels } from "./auth_panels.js";
///   await init();
///   bindAuthPanels();
/// </script>
/// ```
#[wasm_bindgen(js_name = bindAuthPanels)]
pub fn bind_auth_panels() -> Result<(), JsValue> {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PanelError::NoDocument)?;
    let config = PanelConfig::from_document(&document)?;
    bind_panel_toggle(&document, &config)?.persist();
    Ok(())
}
