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

//! Typed wrappers of the Remember The Milk methods.
//!
//! Remember The Milk API docs: <https://www.rememberthemilk.com/services/api/methods.rtm>

mod auth;
pub use auth::AuthService;
pub use auth::AuthUser;
pub use auth::Authentication;
pub use auth::Permission;

mod contacts;
pub use contacts::Contact;
pub use contacts::ContactService;

mod lists;
pub use lists::List;
pub use lists::ListService;

mod tags;
pub use tags::Tag;
pub use tags::TagService;

mod tasks;
pub use tasks::Task;
pub use tasks::TaskAddResponse;
pub use tasks::TaskInput;
pub use tasks::TaskList;
pub use tasks::TaskSeries;
pub use tasks::TaskService;

mod testing;
pub use testing::TestService;
pub use testing::User;

mod timelines;
pub use timelines::TimelineService;
pub use timelines::Transaction;
