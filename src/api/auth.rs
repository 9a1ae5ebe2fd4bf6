//! Password-grant login against the token-issuance endpoint.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use thiserror::Error;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::config::SecureString;

/// Errors that can occur during login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password left empty; no request was made
    #[error("Email and password are required")]
    MissingCredentials,

    /// Request could not be built
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network or transport failure
    #[error("Token request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status
    #[error("Token endpoint returned {status}")]
    Rejected { status: u16 },

    /// Body was not a usable token response
    #[error("Malformed token response: {reason}")]
    MalformedResponse { reason: String },
}

impl AuthError {
    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "Please fill in credentials",
            _ => "Login failed. Please try again.",
        }
    }
}

/// Email/password pair submitted to the token endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecureString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecureString::new(password),
        }
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(())
    }

    fn form(&self) -> [(&'static str, &str); 3] {
        [
            ("grant_type", "password"),
            ("username", self.email.as_str()),
            ("password", self.password.expose()),
        ]
    }
}

/// Body of a successful token response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Exchanges credentials for an access token and installs it on the client.
pub struct AuthGateway {
    client: Arc<ApiClient>,
    token_path: String,
}

impl AuthGateway {
    pub fn new(client: Arc<ApiClient>, token_path: impl Into<String>) -> Self {
        Self {
            client,
            token_path: token_path.into(),
        }
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Single attempt, no retry. On success the token is installed for every
    /// later request made through the shared client.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        credentials.validate()?;

        let attempt = uuid::Uuid::new_v4();
        tracing::debug!(%attempt, email = %credentials.email, "Submitting token request");

        let response = self
            .client
            .request(Method::POST, &self.token_path)?
            .form(&credentials.form())
            .send()
            .await
            .map_err(|source| AuthError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: TokenResponse =
            response
                .json()
                .await
                .map_err(|e| AuthError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        if body.access_token.is_empty() {
            return Err(AuthError::MalformedResponse {
                reason: "access_token is empty".to_string(),
            });
        }

        self.client.install_token(SecureString::new(body.access_token));
        tracing::info!(
            %attempt,
            token_type = body.token_type.as_deref().unwrap_or("unspecified"),
            "Access token installed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_fails_validation() {
        let creds = Credentials::new("", "x");
        assert!(matches!(creds.validate(), Err(AuthError::MissingCredentials)));
    }

    #[test]
    fn empty_password_fails_validation() {
        let creds = Credentials::new("student@ctflife.com", "");
        assert!(matches!(creds.validate(), Err(AuthError::MissingCredentials)));
    }

    #[test]
    fn form_carries_password_grant() {
        let creds = Credentials::new("student@ctflife.com", "secret");
        let form = creds.form();
        assert_eq!(form[0], ("grant_type", "password"));
        assert_eq!(form[1], ("username", "student@ctflife.com"));
        assert_eq!(form[2], ("password", "secret"));
    }

    #[test]
    fn user_messages_distinguish_validation_only() {
        assert_eq!(
            AuthError::MissingCredentials.user_message(),
            "Please fill in credentials"
        );
        assert_eq!(
            AuthError::Rejected { status: 401 }.user_message(),
            "Login failed. Please try again."
        );
    }
}
