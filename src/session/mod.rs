mod error;

pub use error::UnlockError;

/// Key-management collaborator that owns the actual decryption
pub trait KeyRing {
    type Error: std::error::Error;

    /// Try to decrypt the key ring with `password`
    fn unlock(&mut self, password: &str) -> Result<(), Self::Error>;

    /// Reject every interaction waiting on the unlock
    fn reject_all(&mut self);

    /// Display name of the currently selected account
    fn selected_account_name(&self) -> Option<&str>;
}

/// Submit the unlock form.
///
/// An empty password is rejected before the key ring is touched. Any key
/// ring failure is reported as [`UnlockError::InvalidPassword`]; the
/// underlying cause is only logged.
pub fn submit_unlock<K: KeyRing + ?Sized>(keyring: &mut K, password: &str) -> Result<(), UnlockError> {
    if password.is_empty() {
        return Err(UnlockError::PasswordRequired);
    }

    match keyring.unlock(password) {
        Ok(()) => {
            tracing::info!(auth_type = "password", "account unlocked");
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Fail to decrypt: {}", e);
            Err(UnlockError::InvalidPassword)
        }
    }
}

/// The unlock screen was dismissed without unlocking
pub fn abandon<K: KeyRing + ?Sized>(keyring: &mut K) {
    tracing::debug!("unlock abandoned, rejecting pending interactions");
    keyring.reject_all();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("decryption failed")]
    struct DecryptError;

    #[derive(Default)]
    struct FakeKeyRing {
        secret: String,
        unlocked: bool,
        unlock_calls: usize,
        rejected: usize,
    }

    impl KeyRing for FakeKeyRing {
        type Error = DecryptError;

        fn unlock(&mut self, password: &str) -> Result<(), DecryptError> {
            self.unlock_calls += 1;
            if password == self.secret {
                self.unlocked = true;
                Ok(())
            } else {
                Err(DecryptError)
            }
        }

        fn reject_all(&mut self) {
            self.rejected += 1;
        }

        fn selected_account_name(&self) -> Option<&str> {
            self.unlocked.then_some("main")
        }
    }

    fn keyring() -> FakeKeyRing {
        FakeKeyRing {
            secret: "hunter2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_password_is_required() {
        let mut ring = keyring();
        assert_eq!(submit_unlock(&mut ring, ""), Err(UnlockError::PasswordRequired));
        assert_eq!(ring.unlock_calls, 0);
    }

    #[test]
    fn test_wrong_password_is_invalid() {
        let mut ring = keyring();
        let err = submit_unlock(&mut ring, "letmein").unwrap_err();
        assert_eq!(err, UnlockError::InvalidPassword);
        assert_eq!(err.to_string(), "Invalid password");
        assert!(ring.selected_account_name().is_none());
    }

    #[test]
    fn test_correct_password_unlocks() {
        let mut ring = keyring();
        assert!(submit_unlock(&mut ring, "hunter2").is_ok());
        assert_eq!(ring.selected_account_name(), Some("main"));
    }

    #[test]
    fn test_abandon_rejects_pending() {
        let mut ring = keyring();
        abandon(&mut ring);
        assert_eq!(ring.rejected, 1);
        assert!(!ring.unlocked);
    }
}
