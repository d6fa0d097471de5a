//! Refresh token domain model

use chrono::{DateTime, Utc};

/// Stored session artifact. Only the SHA-256 hash of the opaque token is
/// persisted; the raw value is returned to the client once at issue time.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub id: String,
    pub user_id: String,
    pub token_hash: String,
    pub device_name: Option<String>,
    pub user_agent: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token(expires_in: Duration, revoked: bool) -> RefreshToken {
        let now = Utc::now();
        RefreshToken {
            id: "tok-1".into(),
            user_id: "usr-1".into(),
            token_hash: "hash".into(),
            device_name: None,
            user_agent: None,
            expires_at: now + expires_in,
            revoked_at: revoked.then_some(now),
            created_at: now,
        }
    }

    #[test]
    fn live_token_is_usable() {
        assert!(token(Duration::days(7), false).is_usable(Utc::now()));
    }

    #[test]
    fn expired_or_revoked_is_not() {
        assert!(!token(Duration::seconds(-1), false).is_usable(Utc::now()));
        assert!(!token(Duration::days(7), true).is_usable(Utc::now()));
    }
}
