//! GoTrue adapter for the session gate port.
//!
//! Holds the access token in-process; there is no persisted session. The
//! lifecycle is exactly {signed-out, signed-in(user)} with teardown on
//! sign-out.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::auth::application::ports::outgoing::session_gate::{
    AdminUser, AuthError, SessionGate, SessionState,
};
use crate::content::adapter::outgoing::supabase::config::SupabaseConfig;

#[derive(Debug, Clone)]
struct ActiveSession {
    access_token: String,
    user: AdminUser,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: GoTrueUser,
}

#[derive(Deserialize)]
struct GoTrueUser {
    id: String,
    email: Option<String>,
}

pub struct SupabaseSession {
    http: reqwest::Client,
    base: String,
    api_key: String,
    session: RwLock<Option<ActiveSession>>,
}

impl SupabaseSession {
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.url.clone(),
            api_key: config.api_key.clone(),
            session: RwLock::new(None),
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base, path)
    }
}

#[async_trait]
impl SessionGate for SupabaseSession {
    async fn state(&self) -> SessionState {
        match self.session.read().await.as_ref() {
            Some(active) => SessionState::SignedIn(active.user.clone()),
            None => SessionState::SignedOut,
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminUser, AuthError> {
        let response = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Service(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST || status == reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Service(format!("{status}: {body}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Service(e.to_string()))?;

        let user = AdminUser {
            id: token.user.id,
            email: token.user.email.unwrap_or_default(),
        };

        *self.session.write().await = Some(ActiveSession {
            access_token: token.access_token,
            user: user.clone(),
        });

        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        // Tear the local session down first; a failed remote revocation
        // must not leave the admin surface signed in.
        let Some(active) = self.session.write().await.take() else {
            return Ok(());
        };

        let result = self
            .http
            .post(self.auth_url("logout"))
            .header("apikey", &self.api_key)
            .bearer_auth(&active.access_token)
            .send()
            .await;

        if let Err(e) = result {
            tracing::warn!("Token revocation failed during sign-out: {e}");
        }

        Ok(())
    }
}
