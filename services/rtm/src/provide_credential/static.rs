use crate::Credential;
use async_trait::async_trait;
use rtm_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed credential.
///
/// This provider is used when the api key and shared secret are known up
/// front and need no dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with api key and shared secret.
    pub fn new(api_key: &str, shared_secret: &str) -> Self {
        Self {
            credential: Credential::new(api_key, shared_secret),
        }
    }

    /// Set the auth token.
    pub fn with_auth_token(mut self, token: &str) -> Self {
        self.credential.auth_token = Some(token.to_string());
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
