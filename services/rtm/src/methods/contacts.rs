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

use rtm_core::{ParameterSet, Result};
use serde::Deserialize;

use crate::client::Client;

/// A contact of the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Contact id.
    pub id: String,
    /// Display name.
    pub fullname: String,
    /// Login name.
    pub username: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct Contacts {
    contact: Vec<Contact>,
}

#[derive(Deserialize)]
struct GetListResponse {
    contacts: Contacts,
}

/// `rtm.contacts.*` methods.
#[derive(Debug, Clone, Copy)]
pub struct ContactService<'a> {
    client: &'a Client,
}

impl<'a> ContactService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `rtm.contacts.getList`
    pub async fn get_list(&self) -> Result<Vec<Contact>> {
        let resp: GetListResponse = self
            .client
            .call("rtm.contacts.getList", ParameterSet::new())
            .await?;
        Ok(resp.contacts.contact)
    }
}
