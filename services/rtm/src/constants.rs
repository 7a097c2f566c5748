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

// Env values used in rtm.
pub const RTM_API_KEY: &str = "RTM_API_KEY";
pub const RTM_SHARED_SECRET: &str = "RTM_SHARED_SECRET";
pub const RTM_AUTH_TOKEN: &str = "RTM_AUTH_TOKEN";

// Endpoints.
pub const DEFAULT_BASE_URL: &str = "https://api.rememberthemilk.com/services/rest/";
pub const DEFAULT_WEB_BASE_URL: &str = "https://www.rememberthemilk.com/services/";
pub const AUTH_PATH: &str = "auth/";

// Fixed markers sent with every method call.
pub const API_VERSION: &str = "2";
pub const RESPONSE_FORMAT_JSON: &str = "json";

// Reserved parameter names.
pub const PARAM_API_SIG: &str = "api_sig";
pub const PARAM_API_KEY: &str = "api_key";
pub const PARAM_AUTH_TOKEN: &str = "auth_token";
pub const PARAM_METHOD: &str = "method";
pub const PARAM_FORMAT: &str = "format";
pub const PARAM_VERSION: &str = "v";

pub const RATE_LIMIT_MESSAGE: &str =
    "Rate limit exceeded. See https://www.rememberthemilk.com/services/api/ratelimit.rtm";
