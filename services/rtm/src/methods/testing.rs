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

use std::collections::BTreeMap;

use rtm_core::{ParameterSet, Result};
use serde::Deserialize;

use crate::client::Client;

/// User returned by `rtm.test.login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    /// User id.
    pub id: String,
    /// Login name.
    pub username: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    user: User,
}

/// `rtm.test.*` methods.
#[derive(Debug, Clone, Copy)]
pub struct TestService<'a> {
    client: &'a Client,
}

impl<'a> TestService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `rtm.test.echo`, returns the parameters as seen by the service.
    ///
    /// The `stat` field of the envelope is not part of the result.
    pub async fn echo(&self, params: ParameterSet) -> Result<BTreeMap<String, String>> {
        let mut echoed: BTreeMap<String, String> =
            self.client.call("rtm.test.echo", params).await?;
        echoed.remove("stat");
        Ok(echoed)
    }

    /// `rtm.test.login`, checks that the auth token is accepted.
    pub async fn login(&self) -> Result<User> {
        let resp: LoginResponse = self
            .client
            .call("rtm.test.login", ParameterSet::new())
            .await?;
        Ok(resp.user)
    }
}
