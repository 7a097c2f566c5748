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

/// Transaction recorded on a timeline by a mutating call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// Transaction id, used to undo.
    pub id: String,
    /// `"1"` if the transaction can be undone.
    pub undoable: String,
}

#[derive(Deserialize)]
struct CreateResponse {
    timeline: String,
}

/// `rtm.timelines.*` methods.
///
/// Remember The Milk API docs: <https://www.rememberthemilk.com/services/api/timelines.rtm>
#[derive(Debug, Clone, Copy)]
pub struct TimelineService<'a> {
    client: &'a Client,
}

impl<'a> TimelineService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `rtm.timelines.create`, returns the id of a new timeline.
    pub async fn create(&self) -> Result<String> {
        let resp: CreateResponse = self
            .client
            .call("rtm.timelines.create", ParameterSet::new())
            .await?;
        Ok(resp.timeline)
    }
}
