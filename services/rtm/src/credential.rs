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

use rtm_core::utils::Redact;
use rtm_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the api key, the shared secret and the auth token.
#[derive(Default, Clone)]
pub struct Credential {
    /// API key identifying the application.
    pub api_key: String,
    /// Shared secret used to sign requests, never sent over the wire.
    pub shared_secret: String,
    /// Auth token of the user, present once the user granted access.
    pub auth_token: Option<String>,
}

impl Credential {
    /// Create a new credential without auth token.
    pub fn new(api_key: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            shared_secret: shared_secret.into(),
            auth_token: None,
        }
    }

    /// Attach an auth token.
    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("shared_secret", &Redact::from(&self.shared_secret))
            .field("auth_token", &Redact::from(&self.auth_token))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.shared_secret.is_empty()
    }
}
