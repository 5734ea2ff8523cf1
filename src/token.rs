//! Request tokens for discarding stale responses.
//!
//! Every asynchronous request takes a token before it starts. When the
//! response arrives it may only touch shared display state if its token is
//! still the latest one issued by the same [`TokenIssuer`].

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct TokenIssuer {
    latest: AtomicU64,
}

impl TokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token newer than every token issued before it.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Makes every outstanding token stale.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let issuer = TokenIssuer::new();
        let first = issuer.issue();
        let second = issuer.issue();
        assert!(second > first);
        assert!(!issuer.is_current(first));
        assert!(issuer.is_current(second));
    }

    #[test]
    fn test_invalidate_makes_latest_stale() {
        let issuer = TokenIssuer::new();
        let token = issuer.issue();
        issuer.invalidate();
        assert!(!issuer.is_current(token));
        assert!(issuer.is_current(issuer.issue()));
    }
}
