use std::sync::{Arc, PoisonError, RwLock};

use super::charset::Charset;
use crate::encoders::algorithms::errors::ConfigError;

/// A process-wide charset that can be reconfigured while other threads encode.
///
/// Reconfiguration builds and validates the replacement table before taking
/// the write lock, then swaps it in whole. Readers either hold the read lock
/// for the duration of a call ([`with`](Self::with)) or take an owned
/// [`snapshot`](Self::snapshot), so no encode or decode ever observes a
/// half-updated bijection. Clones share the same table.
///
/// # Example
///
/// ```
/// use ascbin::SharedCharset;
///
/// let shared = SharedCharset::default();
/// assert!(shared.configure("ab", b'a', 9).is_err());
/// assert_eq!(shared.with(|charset| charset.radix()), 91);
///
/// shared.configure("0123456789", b'#', 4).unwrap();
/// let encoded = shared.with(|charset| ascbin::encode(&[42], charset)).unwrap();
/// assert_eq!(encoded, b"##24");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedCharset {
    inner: Arc<RwLock<Charset>>,
}

impl SharedCharset {
    pub fn new(charset: Charset) -> Self {
        SharedCharset {
            inner: Arc::new(RwLock::new(charset)),
        }
    }

    /// Validates a new table and swaps it in; the old table stays on error.
    pub fn configure(&self, chars: &str, marker: u8, max_code_length: u8) -> Result<(), ConfigError> {
        let replacement = Charset::new(chars, marker, max_code_length)?;
        self.replace(replacement);
        Ok(())
    }

    /// Swaps in an already-built table, returning the previous one.
    pub fn replace(&self, charset: Charset) -> Charset {
        // A poisoned lock still holds a complete table: writers only ever assign.
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, charset)
    }

    /// Owned copy of the current table.
    pub fn snapshot(&self) -> Charset {
        self.with(Charset::clone)
    }

    /// Runs `f` against the current table under the read lock.
    pub fn with<R>(&self, f: impl FnOnce(&Charset) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }
}

impl From<Charset> for SharedCharset {
    fn from(charset: Charset) -> Self {
        SharedCharset::new(charset)
    }
}
