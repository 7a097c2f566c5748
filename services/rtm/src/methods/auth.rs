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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;
use rtm_core::{Error, ParameterSet, Result};
use serde::Deserialize;

use crate::client::Client;
use crate::constants::*;
use crate::sign_request::sign_parameters;

/// Access level requested from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Read tasks, contacts, groups and lists.
    Read,
    /// Add and modify tasks, contacts, groups and lists. Implies read.
    Write,
    /// Delete tasks, contacts, groups and lists. Implies write.
    Delete,
}

impl Permission {
    /// Wire value of the permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::Delete => "delete",
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "read" => Ok(Permission::Read),
            "write" => Ok(Permission::Write),
            "delete" => Ok(Permission::Delete),
            v => Err(Error::request_invalid(format!("unknown permission {v:?}"))),
        }
    }
}

/// Result of a successful token exchange or check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Authentication {
    /// Granted permission, as sent by the service.
    pub perms: String,
    /// The auth token.
    pub token: String,
    /// Owner of the token.
    pub user: AuthUser,
}

/// User attached to an auth token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthUser {
    /// User id.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Display name.
    pub fullname: String,
}

#[derive(Deserialize)]
struct FrobResponse {
    frob: String,
}

#[derive(Deserialize)]
struct AuthResponse {
    auth: Authentication,
}

/// Authentication methods.
///
/// Remember The Milk API docs: <https://www.rememberthemilk.com/services/api/authentication.rtm>
#[derive(Debug, Clone, Copy)]
pub struct AuthService<'a> {
    client: &'a Client,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// URL to send the user to, for web based applications.
    ///
    /// No request is sent, only the credential is loaded to sign the URL.
    pub async fn auth_url(&self, perms: Permission) -> Result<String> {
        self.build_auth_url(perms, None).await
    }

    /// URL to send the user to, for desktop applications holding a frob
    /// from [`AuthService::get_frob`].
    pub async fn auth_url_with_frob(&self, perms: Permission, frob: &str) -> Result<String> {
        self.build_auth_url(perms, Some(frob)).await
    }

    async fn build_auth_url(&self, perms: Permission, frob: Option<&str>) -> Result<String> {
        let cred = self.client.signer().credential().await?.ok_or_else(|| {
            Error::credential_invalid("no valid credential found to sign the auth url")
        })?;

        let mut query = ParameterSet::new()
            .with(PARAM_API_KEY, &cred.api_key)
            .with("perms", perms.as_str());
        if let Some(frob) = frob {
            query.insert_non_empty("frob", frob);
        }
        sign_parameters(&cred.shared_secret, &mut query);

        debug!("built auth url for {perms} permission");
        Ok(format!(
            "{}{}?{}",
            self.client.web_base_url(),
            AUTH_PATH,
            query.to_query_string()
        ))
    }

    /// `rtm.auth.getFrob`
    pub async fn get_frob(&self) -> Result<String> {
        let resp: FrobResponse = self
            .client
            .call("rtm.auth.getFrob", ParameterSet::new())
            .await?;
        Ok(resp.frob)
    }

    /// `rtm.auth.getToken`, exchange an authorized frob for a token.
    pub async fn get_token(&self, frob: &str) -> Result<Authentication> {
        let resp: AuthResponse = self
            .client
            .call("rtm.auth.getToken", ParameterSet::new().with("frob", frob))
            .await?;
        Ok(resp.auth)
    }

    /// `rtm.auth.checkToken`, check `token` instead of the client's one.
    pub async fn check_token(&self, token: &str) -> Result<Authentication> {
        let resp: AuthResponse = self
            .client
            .call(
                "rtm.auth.checkToken",
                ParameterSet::new().with(PARAM_AUTH_TOKEN, token),
            )
            .await?;
        Ok(resp.auth)
    }
}
