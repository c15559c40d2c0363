use std::cell::Cell;
use std::rc::Rc;

use crate::{Activation, BindingError, ToggleConfig, ToggleDocument, ToggleElement};

/// Whether the password input's contents are currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// The input masks its contents (`type="password"`). The initial state.
    #[default]
    Hidden,
    /// The input shows its contents (`type="text"`).
    Revealed,
}

impl Visibility {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Revealed,
            Self::Revealed => Self::Hidden,
        }
    }

    /// The value for the input's `type` attribute in this state.
    pub fn field_type(self) -> &'static str {
        match self {
            Self::Hidden => "password",
            Self::Revealed => "text",
        }
    }

    /// The value for the button's `aria-pressed` attribute in this state.
    pub fn pressed(self) -> &'static str {
        match self {
            Self::Hidden => "false",
            Self::Revealed => "true",
        }
    }

    /// Whether the input's contents are shown.
    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }
}

/// A show/hide toggle bound to one password input and one button.
///
/// Constructed once at setup with [`VisibilityToggle::bind`]; each
/// [`activate`](VisibilityToggle::activate) flips the state and rewrites the
/// two attributes it owns. Two activations return to the original state.
pub struct VisibilityToggle {
    visibility: Cell<Visibility>,
    input: Rc<dyn ToggleElement>,
    button: Rc<dyn ToggleElement>,
}

impl VisibilityToggle {
    /// Look up both elements and bind a toggle in the [`Visibility::Hidden`]
    /// state.
    ///
    /// The initial state is written to both attributes immediately, so
    /// markup that disagrees with the assumed default is corrected at bind
    /// time.
    ///
    /// Fails with [`BindingError::MissingElement`] if either identifier is
    /// absent from the document.
    pub fn bind(
        document: &dyn ToggleDocument,
        config: ToggleConfig,
    ) -> Result<Self, BindingError> {
        let ToggleConfig { input_id, button_id } = config;

        let input = document
            .element_by_id(&input_id)
            .ok_or(BindingError::MissingElement { id: input_id })?;
        let button = document
            .element_by_id(&button_id)
            .ok_or(BindingError::MissingElement { id: button_id })?;

        let toggle = Self {
            visibility: Cell::new(Visibility::Hidden),
            input,
            button,
        };
        toggle.apply();

        Ok(toggle)
    }

    /// Handle one activation of the toggle button.
    ///
    /// Suppresses the event's default action (the button may sit inside a
    /// form), flips the state, and rewrites the two attributes. Infallible
    /// and deliberately not idempotent.
    pub fn activate(&self, event: &dyn Activation) {
        event.prevent_default();

        let visibility = self.visibility.get().toggled();
        self.visibility.set(visibility);
        tracing::trace!(revealed = visibility.is_revealed(), "toggled password visibility");

        self.apply();
    }

    /// The current state.
    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }

    /// The bound button element, for platform layers that need to attach a
    /// native activation listener to it.
    pub fn button(&self) -> &Rc<dyn ToggleElement> {
        &self.button
    }

    fn apply(&self) {
        let visibility = self.visibility.get();
        self.input.set_attribute("type", visibility.field_type());
        self.button.set_attribute("aria-pressed", visibility.pressed());
    }
}

impl std::fmt::Debug for VisibilityToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityToggle")
            .field("visibility", &self.visibility.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryActivation, MemoryDocument};

    fn document_with_defaults() -> MemoryDocument {
        let document = MemoryDocument::new();
        document.insert("password");
        document.insert("password-visibility-button");
        document
    }

    fn attributes_of(document: &MemoryDocument, id: &str) -> (Option<String>, Option<String>) {
        let element = document.element(id).unwrap();
        (element.attribute("type"), element.attribute("aria-pressed"))
    }

    #[test]
    fn bind_writes_the_initial_state() {
        let document = document_with_defaults();
        let toggle = VisibilityToggle::bind(&document, ToggleConfig::default()).unwrap();

        assert_eq!(toggle.visibility(), Visibility::Hidden);
        let (field_type, _) = attributes_of(&document, "password");
        assert_eq!(field_type.as_deref(), Some("password"));
        let (_, pressed) = attributes_of(&document, "password-visibility-button");
        assert_eq!(pressed.as_deref(), Some("false"));
    }

    #[test]
    fn bind_corrects_stale_markup() {
        let document = MemoryDocument::new();
        let input = document.insert("password");
        input.set_attribute("type", "text");
        let button = document.insert("password-visibility-button");
        button.set_attribute("aria-pressed", "true");

        let _toggle = VisibilityToggle::bind(&document, ToggleConfig::default()).unwrap();

        assert_eq!(input.attribute("type").as_deref(), Some("password"));
        assert_eq!(button.attribute("aria-pressed").as_deref(), Some("false"));
    }

    #[test]
    fn one_activation_reveals() {
        let document = document_with_defaults();
        let toggle = VisibilityToggle::bind(&document, ToggleConfig::default()).unwrap();

        toggle.activate(&MemoryActivation::new());

        assert_eq!(toggle.visibility(), Visibility::Revealed);
        let (field_type, _) = attributes_of(&document, "password");
        assert_eq!(field_type.as_deref(), Some("text"));
        let (_, pressed) = attributes_of(&document, "password-visibility-button");
        assert_eq!(pressed.as_deref(), Some("true"));
    }

    #[test]
    fn activations_round_trip() {
        let document = document_with_defaults();
        let toggle = VisibilityToggle::bind(&document, ToggleConfig::default()).unwrap();

        for n in 1..=6 {
            toggle.activate(&MemoryActivation::new());

            let expected = if n % 2 == 1 {
                Visibility::Revealed
            } else {
                Visibility::Hidden
            };
            assert_eq!(toggle.visibility(), expected, "after {n} activations");
            let (field_type, _) = attributes_of(&document, "password");
            assert_eq!(field_type.as_deref(), Some(expected.field_type()));
            let (_, pressed) = attributes_of(&document, "password-visibility-button");
            assert_eq!(pressed.as_deref(), Some(expected.pressed()));
        }
    }

    #[test]
    fn activation_suppresses_the_default_action() {
        let document = document_with_defaults();
        let toggle = VisibilityToggle::bind(&document, ToggleConfig::default()).unwrap();

        let activation = MemoryActivation::new();
        toggle.activate(&activation);

        assert!(activation.default_prevented());
    }

    #[test]
    fn activation_touches_only_the_two_attributes() {
        let document = MemoryDocument::new();
        let input = document.insert("password");
        input.set_attribute("name", "password");
        input.set_attribute("autocomplete", "current-password");
        let button = document.insert("password-visibility-button");
        button.set_attribute("aria-label", "Show password");

        let toggle = VisibilityToggle::bind(&document, ToggleConfig::default()).unwrap();
        toggle.activate(&MemoryActivation::new());

        let mut input_attributes = input.attribute_names();
        input_attributes.sort();
        assert_eq!(input_attributes, ["autocomplete", "name", "type"]);
        assert_eq!(input.attribute("name").as_deref(), Some("password"));
        assert_eq!(
            input.attribute("autocomplete").as_deref(),
            Some("current-password")
        );

        let mut button_attributes = button.attribute_names();
        button_attributes.sort();
        assert_eq!(button_attributes, ["aria-label", "aria-pressed"]);
        assert_eq!(button.attribute("aria-label").as_deref(), Some("Show password"));
    }

    #[test]
    fn missing_input_is_a_binding_error() {
        let document = MemoryDocument::new();
        document.insert("password-visibility-button");

        let err = VisibilityToggle::bind(&document, ToggleConfig::default()).unwrap_err();
        assert!(matches!(err, BindingError::MissingElement { id } if id == "password"));
    }

    #[test]
    fn missing_button_is_a_binding_error() {
        let document = MemoryDocument::new();
        document.insert("password");

        let err = VisibilityToggle::bind(&document, ToggleConfig::default()).unwrap_err();
        assert!(
            matches!(err, BindingError::MissingElement { id } if id == "password-visibility-button")
        );
    }

    #[test]
    fn custom_identifiers_bind() {
        let document = MemoryDocument::new();
        let input = document.insert("current-password");
        document.insert("reveal");

        let config = ToggleConfig::new().input_id("current-password").button_id("reveal");
        let toggle = VisibilityToggle::bind(&document, config).unwrap();
        toggle.activate(&MemoryActivation::new());

        assert_eq!(input.attribute("type").as_deref(), Some("text"));
    }
}
