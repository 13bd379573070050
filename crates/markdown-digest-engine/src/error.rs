use crate::context::ContextKey;

/// Errors surfaced when reading results out of a [`ParseContext`].
///
/// [`ParseContext`]: crate::context::ParseContext
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// The pipeline has no extension that produces this key.
    #[error("no {0} extension is installed in this pipeline")]
    NotConfigured(ContextKey),
    /// The metadata region is not valid YAML for the requested type.
    #[error("Failed to decode metadata: {0}")]
    Decode(#[from] serde_yaml::Error),
}
