//! Parse-scoped result store.
//!
//! Each parse gets a fresh [`ParseContext`]. Extensions publish into it
//! while the pipeline runs; callers read it afterwards. Slots are typed per
//! key, so a value can never be read back as the wrong shape.

use std::fmt;

use crate::error::ContextError;

/// The logical results an extension can publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
    Metadata,
    Snippet,
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextKey::Metadata => f.write_str("metadata"),
            ContextKey::Snippet => f.write_str("snippet"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Slot<T> {
    /// No producer for this key is installed.
    #[default]
    Unclaimed,
    /// A producer is installed; `None` until it publishes.
    Claimed(Option<T>),
}

impl<T> Slot<T> {
    fn claim(&mut self) {
        if matches!(self, Slot::Unclaimed) {
            *self = Slot::Claimed(None);
        }
    }

    fn set(&mut self, key: ContextKey, value: T) {
        if matches!(self, Slot::Claimed(Some(_))) {
            log::warn!("{key} written twice in one parse; keeping the latest value");
        }
        *self = Slot::Claimed(Some(value));
    }

    fn get(&self, key: ContextKey) -> Result<Option<&T>, ContextError> {
        match self {
            Slot::Unclaimed => Err(ContextError::NotConfigured(key)),
            Slot::Claimed(v) => Ok(v.as_ref()),
        }
    }
}

/// Results of one parse: the raw metadata region and the snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    metadata: Slot<Vec<u8>>,
    snippet: Slot<String>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context with the given keys marked as produced by this pipeline.
    pub fn with_keys(keys: &[ContextKey]) -> Self {
        let mut ctx = Self::new();
        for key in keys {
            ctx.claim(*key);
        }
        ctx
    }

    /// Marks `key` as having an installed producer.
    pub fn claim(&mut self, key: ContextKey) {
        match key {
            ContextKey::Metadata => self.metadata.claim(),
            ContextKey::Snippet => self.snippet.claim(),
        }
    }

    #[must_use]
    pub fn is_configured(&self, key: ContextKey) -> bool {
        match key {
            ContextKey::Metadata => !matches!(self.metadata, Slot::Unclaimed),
            ContextKey::Snippet => !matches!(self.snippet, Slot::Unclaimed),
        }
    }

    /// Publishes the raw metadata region. Claims the key if needed.
    pub fn set_metadata(&mut self, raw: Vec<u8>) {
        self.metadata.set(ContextKey::Metadata, raw);
    }

    /// Publishes the snippet. Claims the key if needed.
    pub fn set_snippet(&mut self, snippet: String) {
        self.snippet.set(ContextKey::Snippet, snippet);
    }

    /// Raw bytes of the metadata region.
    ///
    /// `Ok(None)` means the document had no region; `Ok(Some(&[]))` means the
    /// region was present but empty.
    pub fn metadata_raw(&self) -> Result<Option<&[u8]>, ContextError> {
        Ok(self
            .metadata
            .get(ContextKey::Metadata)?
            .map(|v| v.as_slice()))
    }

    /// The snippet, or `""` if the extractor has not published one.
    pub fn snippet(&self) -> Result<&str, ContextError> {
        Ok(self
            .snippet
            .get(ContextKey::Snippet)?
            .map_or("", |s| s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclaimed_keys_are_not_configured() {
        let ctx = ParseContext::new();
        assert!(matches!(
            ctx.metadata_raw(),
            Err(ContextError::NotConfigured(ContextKey::Metadata))
        ));
        assert!(matches!(
            ctx.snippet(),
            Err(ContextError::NotConfigured(ContextKey::Snippet))
        ));
    }

    #[test]
    fn claimed_but_unset_is_empty_not_error() {
        let ctx = ParseContext::with_keys(&[ContextKey::Metadata, ContextKey::Snippet]);
        assert_eq!(ctx.metadata_raw().unwrap(), None);
        assert_eq!(ctx.snippet().unwrap(), "");
    }

    #[test]
    fn empty_metadata_differs_from_absent() {
        let mut ctx = ParseContext::with_keys(&[ContextKey::Metadata]);
        ctx.set_metadata(vec![]);
        assert_eq!(ctx.metadata_raw().unwrap(), Some(&[][..]));
    }

    #[test]
    fn set_claims_the_key() {
        let mut ctx = ParseContext::new();
        ctx.set_snippet("hi".into());
        assert!(ctx.is_configured(ContextKey::Snippet));
        assert!(!ctx.is_configured(ContextKey::Metadata));
        assert_eq!(ctx.snippet().unwrap(), "hi");
    }

    #[test]
    fn second_write_replaces_value() {
        let mut ctx = ParseContext::new();
        ctx.set_snippet("first".into());
        ctx.set_snippet("second".into());
        assert_eq!(ctx.snippet().unwrap(), "second");
    }

    #[test]
    fn claim_does_not_clear_published_value() {
        let mut ctx = ParseContext::new();
        ctx.set_metadata(b"a: 1\n".to_vec());
        ctx.claim(ContextKey::Metadata);
        assert_eq!(ctx.metadata_raw().unwrap(), Some(&b"a: 1\n"[..]));
    }

    #[test]
    fn not_configured_message_names_the_key() {
        let err = ParseContext::new().snippet().unwrap_err();
        assert_eq!(
            err.to_string(),
            "no snippet extension is installed in this pipeline"
        );
    }
}
