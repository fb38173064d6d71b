use async_trait::async_trait;

/// The signed-in admin, as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
}

/// Session lifecycle: the admin surface only cares which of the two states
/// the session is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    SignedOut,
    SignedIn(AdminUser),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("Not signed in")]
    NotSignedIn,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Auth service error: {0}")]
    Service(String),
}

/// Port for the external session provider.
///
/// The admin surface refuses all mutating flows while the state is
/// `SignedOut`; `sign_out` tears the local session down even when the
/// remote revocation fails.
#[async_trait]
pub trait SessionGate: Send + Sync {
    async fn state(&self) -> SessionState;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}
