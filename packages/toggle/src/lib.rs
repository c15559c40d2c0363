//! Core logic for a password visibility toggle.
//!
//! A [`VisibilityToggle`] binds to two elements of a host document: a
//! password input and a toggle button. Each activation of the button flips
//! the input's `type` attribute between `"password"` and `"text"` and
//! mirrors the state onto the button's `aria-pressed` attribute.
//!
//! The document is abstracted behind the small capability traits in this
//! module, so the toggle can run against a real DOM (see the
//! `password-toggle-web` crate) or against the in-memory fake in
//! [`memory`] for tests.

use std::rc::Rc;

mod config;
mod error;
pub mod memory;
mod toggle;

pub use config::ToggleConfig;
pub use error::BindingError;
pub use toggle::{Visibility, VisibilityToggle};

/// An element the toggle can read and write attributes on.
///
/// The toggle never owns the element's lifecycle; it only touches two
/// attributes on each of its two bound elements.
pub trait ToggleElement {
    /// Read an attribute, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Write an attribute, creating it if absent.
    fn set_attribute(&self, name: &str, value: &str);

    /// Get a reference to the element as `dyn Any`, for downcasting to the
    /// concrete platform element.
    fn as_any(&self) -> &dyn std::any::Any;
}

/// A host document that can look up elements by identifier.
pub trait ToggleDocument {
    /// Find the element with the given identifier.
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn ToggleElement>>;
}

/// An activation event dispatched to the toggle button.
pub trait Activation {
    /// Suppress the event's default action.
    fn prevent_default(&self);
}
