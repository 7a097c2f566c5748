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

/// A task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct List {
    /// List id.
    pub id: String,
    /// List name.
    pub name: String,
    /// `"1"` if deleted.
    pub deleted: String,
    /// `"1"` if the list cannot be modified, like the Inbox.
    pub locked: String,
    /// `"1"` if archived.
    pub archived: String,
    /// Sort position.
    pub position: String,
    /// `"1"` for a smart list.
    pub smart: String,
    /// Sort order of the tasks.
    pub sort_order: String,
    /// Access level of the user on a shared list.
    pub permission: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct Lists {
    list: Vec<List>,
}

#[derive(Deserialize)]
struct GetListResponse {
    lists: Lists,
}

/// `rtm.lists.*` methods.
#[derive(Debug, Clone, Copy)]
pub struct ListService<'a> {
    client: &'a Client,
}

impl<'a> ListService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `rtm.lists.getList`
    pub async fn get_list(&self) -> Result<Vec<List>> {
        let resp: GetListResponse = self
            .client
            .call("rtm.lists.getList", ParameterSet::new())
            .await?;
        Ok(resp.lists.list)
    }
}
