//! Web-sys binding for the password visibility toggle.
//!
//! [`bind`] looks up the password input and the toggle button in the page's
//! document, constructs a [`VisibilityToggle`], and attaches a `click`
//! listener to the button. The listener stays live for the page's lifetime;
//! there is no unbind.
//!
//! ```rust, ignore
//! fn main() {
//!     password_toggle_web::launch();
//! }
//! ```

use std::rc::Rc;

use password_toggle::{
    Activation, BindingError, ToggleConfig, ToggleDocument, ToggleElement, VisibilityToggle,
};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

/// The web-target's document provider.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// Get the page's document.
    pub fn get() -> Self {
        let window = web_sys::window()
            .expect("should be run in a context with a `Window` object (the toggle cannot be run from a web worker)");
        let document = window.document().expect("window should have a document");
        Self { document }
    }
}

impl ToggleDocument for WebDocument {
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn ToggleElement>> {
        let element = self.document.get_element_by_id(id)?;
        Some(Rc::new(WebElement(element)))
    }
}

/// A [`ToggleElement`] backed by a real DOM element.
pub struct WebElement(pub web_sys::Element);

impl ToggleElement for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        // `setAttribute` only fails on invalid names; ours are fixed.
        self.0.set_attribute(name, value).unwrap();
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

struct WebActivation(web_sys::Event);

impl Activation for WebActivation {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// Bind a toggle against the page's document and attach its click listener.
pub fn bind(config: ToggleConfig) -> Result<Rc<VisibilityToggle>, BindingError> {
    let document = WebDocument::get();
    let toggle = Rc::new(VisibilityToggle::bind(&document, config)?);

    let button = toggle
        .button()
        .as_any()
        .downcast_ref::<WebElement>()
        .expect("a WebDocument only hands out WebElements")
        .0
        .clone();

    let handler = {
        let toggle = toggle.clone();
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            toggle.activate(&WebActivation(event));
        }) as Box<dyn FnMut(web_sys::Event)>)
    };

    button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(|err| BindingError::Listener(format!("{err:?}")))?;

    // The toggle outlives any scope here, so the closure is handed to the JS
    // garbage collector rather than dropped.
    handler.forget();

    tracing::trace!("bound password visibility toggle");

    Ok(toggle)
}

/// Bind with the default markup contract (`#password` and
/// `#password-visibility-button`).
///
/// A missing element is a startup defect, not a runtime condition, so this
/// panics instead of returning the error. Use [`bind`] to handle it.
pub fn launch() -> Rc<VisibilityToggle> {
    match bind(ToggleConfig::default()) {
        Ok(toggle) => toggle,
        Err(err) => {
            tracing::error!(%err, "failed to bind the password visibility toggle");
            panic!("failed to bind the password visibility toggle: {err}");
        }
    }
}
