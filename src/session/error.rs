use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnlockError {
    #[error("Password is required")]
    PasswordRequired,

    #[error("Invalid password")]
    InvalidPassword,
}
