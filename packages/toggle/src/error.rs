/// Represents an error while binding the toggle to a document.
///
/// Binding failures are startup defects, not runtime conditions: they are
/// surfaced once at setup and are not retried. After a successful bind there
/// is no failure path left.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    /// An expected element identifier was absent from the document.
    #[error("no element with id `{id}` in the document")]
    MissingElement {
        /// The identifier that could not be found.
        id: String,
    },

    /// The platform failed to attach the activation listener.
    #[error("failed to attach the activation listener: {0}")]
    Listener(String),
}
