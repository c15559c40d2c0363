/// Configuration for binding a [`VisibilityToggle`] to a document.
///
/// The defaults match the expected markup contract: an input with the
/// identifier `password` and a button with the identifier
/// `password-visibility-button`.
///
/// # Example
///
/// ```rust, ignore
/// password_toggle_web::bind(ToggleConfig::new().input_id("current-password"))
/// ```
///
/// [`VisibilityToggle`]: crate::VisibilityToggle
#[derive(Clone, Debug)]
pub struct ToggleConfig {
    pub(crate) input_id: String,
    pub(crate) button_id: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            input_id: "password".to_string(),
            button_id: "password-visibility-button".to_string(),
        }
    }
}

impl ToggleConfig {
    /// Create a config with the default element identifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier of the password input element.
    pub fn input_id(mut self, id: impl Into<String>) -> Self {
        self.input_id = id.into();
        self
    }

    /// Set the identifier of the toggle button element.
    pub fn button_id(mut self, id: impl Into<String>) -> Self {
        self.button_id = id.into();
        self
    }
}
