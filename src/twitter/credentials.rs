use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Credential set must contain at least one token")]
pub struct EmptyCredentialSet;

/// Interchangeable bearer tokens with a shared rotating cursor.
///
/// The cursor lives as long as the set and is not reset between searches.
pub struct CredentialSet {
    tokens: Vec<String>,
    cursor: AtomicUsize,
}

impl CredentialSet {
    pub fn new(tokens: Vec<String>) -> Result<Self, EmptyCredentialSet> {
        if tokens.is_empty() {
            return Err(EmptyCredentialSet);
        }
        Ok(Self {
            tokens,
            cursor: AtomicUsize::new(0),
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }

    /// Returns the active index and its token.
    pub fn current(&self) -> (usize, &str) {
        let index = self.current_index();
        (index, &self.tokens[index])
    }

    /// Advances the cursor by one, wrapping, and returns the new index.
    pub fn rotate(&self) -> usize {
        let len = self.tokens.len();
        let previous = self.cursor
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |i| Some((i + 1) % len))
            .unwrap_or_else(|i| i);
        (previous + 1) % len
    }
}

impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSet")
            .field("tokens", &format_args!("[{} redacted]", self.tokens.len()))
            .field("cursor", &self.current_index())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn set(n: usize) -> CredentialSet {
        CredentialSet::new((0..n).map(|i| format!("token-{}", i)).collect()).unwrap()
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(CredentialSet::new(vec![]).is_err());
    }

    #[test]
    fn rotate_wraps_around() {
        let creds = set(3);
        assert_eq!(creds.current(), (0, "token-0"));
        assert_eq!(creds.rotate(), 1);
        assert_eq!(creds.rotate(), 2);
        assert_eq!(creds.rotate(), 0);
        assert_eq!(creds.current(), (0, "token-0"));
    }

    #[test]
    fn single_token_always_stays_at_zero() {
        let creds = set(1);
        assert_eq!(creds.rotate(), 0);
        assert_eq!(creds.current().1, "token-0");
    }

    #[test]
    fn concurrent_rotations_are_not_lost() {
        let creds = Arc::new(set(4));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let creds = Arc::clone(&creds);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        creds.rotate();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        // 800 rotations over 4 tokens lands back on the start
        assert_eq!(creds.current_index(), 0);
    }

    #[test]
    fn debug_output_hides_tokens() {
        let creds = set(2);
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("token-0"));
        assert!(debug.contains("2 redacted"));
    }
}
