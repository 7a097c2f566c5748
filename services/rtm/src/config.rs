// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use rtm_core::utils::Redact;
use rtm_core::{Context, Error, Result};

use crate::constants::*;

/// Config carries all the configuration for the Remember The Milk client.
#[derive(Clone)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RTM_API_KEY`]
    pub api_key: Option<String>,
    /// `shared_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RTM_SHARED_SECRET`]
    pub shared_secret: Option<String>,
    /// `auth_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RTM_AUTH_TOKEN`]
    pub auth_token: Option<String>,
    /// Base URL for API method calls, must end with `/`.
    ///
    /// Default to `https://api.rememberthemilk.com/services/rest/`.
    pub base_url: String,
    /// Base URL for the web authentication page, must end with `/`.
    ///
    /// Default to `https://www.rememberthemilk.com/services/`.
    pub web_base_url: String,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            shared_secret: None,
            auth_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            web_base_url: DEFAULT_WEB_BASE_URL.to_string(),
            user_agent: format!("rtm-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key)
            .field("shared_secret", &Redact::from(&self.shared_secret))
            .field("auth_token", &Redact::from(&self.auth_token))
            .field("base_url", &self.base_url)
            .field("web_base_url", &self.web_base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Config {
    /// Load config from env, keeping fields that are already set.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(RTM_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(RTM_SHARED_SECRET) {
            self.shared_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(RTM_AUTH_TOKEN) {
            self.auth_token.get_or_insert(v);
        }

        self
    }

    /// Set the api key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the shared secret.
    pub fn with_shared_secret(mut self, shared_secret: impl Into<String>) -> Self {
        self.shared_secret = Some(shared_secret.into());
        self
    }

    /// Set the auth token.
    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    /// Set the base URL for API method calls.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the base URL for the web authentication page.
    pub fn with_web_base_url(mut self, web_base_url: impl Into<String>) -> Self {
        self.web_base_url = web_base_url.into();
        self
    }

    /// Set the user agent sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check that both base URLs are usable.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("base_url", &self.base_url),
            ("web_base_url", &self.web_base_url),
        ] {
            if !url.ends_with('/') {
                return Err(Error::config_invalid(format!(
                    "{name} must have a trailing slash, but {url:?} does not"
                )));
            }
            url.parse::<http::Uri>().map_err(|e| {
                Error::config_invalid(format!("{name} {url:?} is not a valid uri")).with_source(e)
            })?;
        }

        Ok(())
    }
}
