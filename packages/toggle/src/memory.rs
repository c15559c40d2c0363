//! In-memory implementations of the document traits, for testing the toggle
//! without a real DOM.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::{Activation, ToggleDocument, ToggleElement};

/// A [`ToggleElement`] that stores its attributes in memory.
#[derive(Default)]
pub struct MemoryElement {
    attributes: RefCell<FxHashMap<String, String>>,
}

impl MemoryElement {
    /// The names of every attribute currently set on the element.
    pub fn attribute_names(&self) -> Vec<String> {
        self.attributes.borrow().keys().cloned().collect()
    }
}

impl ToggleElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A [`ToggleDocument`] that holds its elements in memory.
///
/// ```rust
/// # use password_toggle::memory::MemoryDocument;
/// # use password_toggle::{ToggleConfig, VisibilityToggle};
/// let document = MemoryDocument::new();
/// document.insert("password");
/// document.insert("password-visibility-button");
///
/// let toggle = VisibilityToggle::bind(&document, ToggleConfig::default()).unwrap();
/// assert!(!toggle.visibility().is_revealed());
/// ```
#[derive(Default)]
pub struct MemoryDocument {
    elements: RefCell<FxHashMap<String, Rc<MemoryElement>>>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element, register it under `id`, and return it.
    pub fn insert(&self, id: impl ToString) -> Rc<MemoryElement> {
        let element = Rc::new(MemoryElement::default());
        self.elements
            .borrow_mut()
            .insert(id.to_string(), element.clone());
        element
    }

    /// The concrete element registered under `id`, if any.
    pub fn element(&self, id: &str) -> Option<Rc<MemoryElement>> {
        self.elements.borrow().get(id).cloned()
    }
}

impl ToggleDocument for MemoryDocument {
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn ToggleElement>> {
        let element = self.element(id)?;
        Some(element as Rc<dyn ToggleElement>)
    }
}

/// An [`Activation`] that records whether its default action was suppressed.
#[derive(Default)]
pub struct MemoryActivation {
    default_prevented: Cell<bool>,
}

impl MemoryActivation {
    /// Create an activation with its default action not yet suppressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`Activation::prevent_default`] has been called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl Activation for MemoryActivation {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}
