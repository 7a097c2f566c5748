use async_trait::async_trait;
use rtm_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider loads the credential set on a [`Config`].
///
/// Only the config fields are read; see [`Config::from_env`] to merge the
/// environment first.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new provider via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let (Some(key), Some(secret)) = (&self.config.api_key, &self.config.shared_secret) else {
            return Ok(None);
        };
        if key.is_empty() || secret.is_empty() {
            return Ok(None);
        }

        Ok(Some(Credential {
            api_key: key.clone(),
            shared_secret: secret.clone(),
            auth_token: self.config.auth_token.clone(),
        }))
    }
}
