//! Login/register panel state.
//!
//! The only state is whether the container carries the marker class.
//! Register requests set it, login requests clear it, and whichever
//! request came last wins.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::{validate_class, ACTIVE_CLASS};
use crate::error::PanelError;

// --- Structs ---

/// Ordered, duplicate-free class list, like an element's `classList`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet(Vec<String>);

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the class was already present.
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.0.push(class.to_string());
        true
    }

    /// Returns `false` if the class was not present.
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != class);
        self.0.len() != before
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ClassSet::new();
        for class in iter {
            set.add(class.as_ref());
        }
        set
    }
}

/// Renders as a `class` attribute value.
impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Which form the page is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelView {
    Login,
    Register,
}

// --- Traits ---

/// Anything with a mutable class list the controller can mark.
pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

impl ClassTarget for RefCell<ClassSet> {
    fn add_class(&self, class: &str) {
        self.borrow_mut().add(class);
    }

    fn remove_class(&self, class: &str) {
        self.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.borrow().contains(class)
    }
}

impl<T: ClassTarget + ?Sized> ClassTarget for Rc<T> {
    fn add_class(&self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class)
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

// --- Controller ---

/// Drives the container's marker class from register/login requests.
#[derive(Debug)]
pub struct PanelToggleController<T> {
    container: T,
    marker: String,
}

impl<T: ClassTarget> PanelToggleController<T> {
    pub fn new(container: T, marker: impl Into<String>) -> Result<Self, PanelError> {
        let marker = marker.into();
        validate_class(&marker)?;
        Ok(Self { container, marker })
    }

    /// Controller using the stock `active` marker.
    pub fn with_active_marker(container: T) -> Self {
        Self {
            container,
            marker: ACTIVE_CLASS.to_string(),
        }
    }

    /// Show the register panel.
    pub fn on_register_requested(&self) {
        log::debug!("Register panel requested");
        self.container.add_class(&self.marker);
    }

    /// Show the login panel.
    pub fn on_login_requested(&self) {
        log::debug!("Login panel requested");
        self.container.remove_class(&self.marker);
    }

    pub fn is_active(&self) -> bool {
        self.container.has_class(&self.marker)
    }

    pub fn view(&self) -> PanelView {
        if self.is_active() {
            PanelView::Register
        } else {
            PanelView::Login
        }
    }

    pub fn container(&self) -> &T {
        &self.container
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}
