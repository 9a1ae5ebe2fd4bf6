use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder};

use crate::api::error::ApiError;
use crate::api::routes::RouteTable;
use crate::config::{RemoteConfig, SecureString};

/// HTTP client shared by every request issuer in the session.
///
/// Owns the access token. Once installed, the token is attached as a bearer
/// credential to every request built through [`ApiClient::request`] until it is
/// replaced.
pub struct ApiClient {
    http: Client,
    routes: RouteTable,
    token: RwLock<Option<SecureString>>,
}

impl ApiClient {
    pub fn new(remote: &RemoteConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("ctflife/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::ClientBuild { source })?;

        Ok(Self {
            http,
            routes: RouteTable::from_config(remote),
            token: RwLock::new(None),
        })
    }

    /// Start a request to `path`, carrying the installed token if any.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.routes.resolve(path)?;
        let builder = self.http.request(method, url);
        Ok(match self.token.read().as_ref() {
            Some(token) => builder.bearer_auth(token.expose()),
            None => builder,
        })
    }

    /// Replace the session credential.
    pub fn install_token(&self, token: SecureString) {
        *self.token.write() = Some(token);
    }

    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    pub fn token(&self) -> Option<SecureString> {
        self.token.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&RemoteConfig::default()).unwrap()
    }

    #[test]
    fn starts_without_token() {
        assert!(!client().has_token());
    }

    #[test]
    fn bearer_header_attached_after_install() {
        let client = client();
        let before = client.request(Method::GET, "/users/me").unwrap().build().unwrap();
        assert!(before.headers().get("authorization").is_none());

        client.install_token(SecureString::new("abc123"));
        let after = client.request(Method::GET, "/student/profile").unwrap().build().unwrap();
        assert_eq!(after.headers().get("authorization").unwrap(), "Bearer abc123");
    }

    #[test]
    fn later_install_overwrites_token() {
        let client = client();
        client.install_token(SecureString::new("first"));
        client.install_token(SecureString::new("second"));
        assert_eq!(client.token().unwrap().expose(), "second");
    }

    #[test]
    fn unrouted_path_is_rejected_before_sending() {
        assert!(matches!(
            client().request(Method::GET, "/elsewhere"),
            Err(ApiError::UnroutedPath { .. })
        ));
    }
}
