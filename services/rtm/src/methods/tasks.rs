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
use crate::methods::Transaction;

/// Input of `rtm.tasks.add`.
///
/// Empty fields are not sent. Without a list id the task goes to the Inbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    timeline: String,
    name: String,
    list_id: String,
    smart_add: bool,
    parent_task_id: String,
    external_id: String,
    give_to: String,
}

impl TaskInput {
    /// Create an input for task `name` on `timeline`.
    pub fn new(timeline: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            timeline: timeline.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add the task to this list.
    pub fn with_list_id(mut self, list_id: impl Into<String>) -> Self {
        self.list_id = list_id.into();
        self
    }

    /// Process the name with Smart Add.
    ///
    /// Docs about Smart Add: <https://www.rememberthemilk.com/help/?ctx=basics.smartadd.whatis>
    pub fn with_smart_add(mut self, enabled: bool) -> Self {
        self.smart_add = enabled;
        self
    }

    /// Create the task as a sub-task, pro accounts only. The parent's list
    /// wins over [`TaskInput::with_list_id`].
    pub fn with_parent_task_id(mut self, parent_task_id: impl Into<String>) -> Self {
        self.parent_task_id = parent_task_id.into();
        self
    }

    /// Attach an id from another system.
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Give the task to a contact.
    pub fn with_give_to(mut self, give_to: impl Into<String>) -> Self {
        self.give_to = give_to.into();
        self
    }

    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params.insert_non_empty("timeline", &self.timeline);
        params.insert_non_empty("list_id", &self.list_id);
        params.insert_non_empty("name", &self.name);
        if self.smart_add {
            params.insert("parse", "1");
        }
        params.insert_non_empty("parent_task_id", &self.parent_task_id);
        params.insert_non_empty("external_id", &self.external_id);
        params.insert_non_empty("give_to", &self.give_to);
        params
    }
}

/// A single occurrence of a task series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Task id.
    pub id: String,
    /// Due date in ISO 8601, empty if none.
    pub due: String,
    /// `"1"` if `due` carries a time.
    pub has_due_time: String,
    /// When the task was added.
    pub added: String,
    /// When the task was completed, empty if open.
    pub completed: String,
    /// When the task was deleted, empty if not.
    pub deleted: String,
    /// `1`, `2`, `3` or `N` for none.
    pub priority: String,
    /// How many times the task was postponed.
    pub postponed: String,
    /// Free form time estimate.
    pub estimate: String,
    /// Start date in ISO 8601, empty if none.
    pub start: String,
    /// `"1"` if `start` carries a time.
    pub has_start_time: String,
}

/// A task series and its occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskSeries {
    /// Series id.
    pub id: String,
    /// When the series was created.
    pub created: String,
    /// When the series was last modified.
    pub modified: String,
    /// Task name.
    pub name: String,
    /// Where the task came from, such as `api` or `js`.
    pub source: String,
    /// Attached URL.
    pub url: String,
    /// Attached location id.
    pub location_id: String,
    /// Parent task id for sub-tasks.
    pub parent_task_id: String,
    /// Occurrences of the series.
    pub task: Vec<Task>,
}

/// Task series grouped by list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskList {
    /// List id.
    pub id: String,
    /// Series in the list.
    pub taskseries: Vec<TaskSeries>,
}

/// Result of `rtm.tasks.add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskAddResponse {
    /// Transaction to undo the addition.
    pub transaction: Transaction,
    /// The list holding the new task.
    pub list: TaskList,
}

/// `rtm.tasks.*` methods.
///
/// Remember The Milk API docs: <https://www.rememberthemilk.com/services/api/tasks.rtm>
#[derive(Debug, Clone, Copy)]
pub struct TaskService<'a> {
    client: &'a Client,
}

impl<'a> TaskService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `rtm.tasks.add`, requires a timeline from
    /// [`TimelineService::create`](crate::TimelineService::create).
    pub async fn add(&self, task: TaskInput) -> Result<TaskAddResponse> {
        self.client.call("rtm.tasks.add", task.to_params()).await
    }
}
