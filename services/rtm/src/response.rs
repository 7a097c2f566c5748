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

//! Response envelope parsing and error classification.
//!
//! Every Remember The Milk response is wrapped as
//! `{"rsp": {"stat": "ok"|"fail", "err"?: {"code", "msg"}, ...}}` and
//! application failures are reported with HTTP 200. The body is buffered
//! once, so the envelope can be peeked here and decoded again by the caller.

use http::StatusCode;
use rtm_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::constants::RATE_LIMIT_MESSAGE;

/// Error reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 503, the service is throttling this api key.
    #[error("[503] {}", RATE_LIMIT_MESSAGE)]
    RateLimited,
    /// The envelope carried `stat=fail`.
    #[error("[{code}] {message}")]
    Failure {
        /// Remote error code, `0` if the service sent a non-numeric one.
        code: i64,
        /// Remote error message.
        message: String,
    },
}

impl ApiError {
    /// Numeric code of this error.
    pub fn code(&self) -> i64 {
        match self {
            ApiError::RateLimited => i64::from(StatusCode::SERVICE_UNAVAILABLE.as_u16()),
            ApiError::Failure { code, .. } => *code,
        }
    }

    /// Human readable message of this error.
    pub fn message(&self) -> &str {
        match self {
            ApiError::RateLimited => RATE_LIMIT_MESSAGE,
            ApiError::Failure { message, .. } => message,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        let code = err.code();
        match err {
            ApiError::RateLimited => Error::rate_limited(code, RATE_LIMIT_MESSAGE),
            ApiError::Failure { message, .. } => Error::api(code, message),
        }
    }
}

/// Value of the `stat` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// The call succeeded.
    Ok,
    /// The call failed, see `err`.
    Fail,
}

/// Status part of the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    /// Outcome of the call.
    pub stat: Stat,
    /// Error details, present when `stat` is `fail` and `err` is an object.
    #[serde(default, deserialize_with = "deserialize_failure")]
    pub err: Option<Failure>,
}

/// The `err` object of a failed call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Failure {
    /// Error code, documented as a string but accepted as a number too.
    pub code: serde_json::Value,
    /// Error message, empty when absent or not a string.
    pub msg: String,
}

impl Failure {
    /// Build from any JSON value, `None` unless it is an object.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Failure {
            code: obj.get("code").cloned().unwrap_or_default(),
            msg: obj
                .get("msg")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
        })
    }

    /// The code as an integer, `0` when absent or not numeric.
    pub fn numeric_code(&self) -> i64 {
        match &self.code {
            serde_json::Value::String(s) => s.parse().unwrap_or(0),
            serde_json::Value::Number(n) => n.as_i64().unwrap_or(0),
            _ => 0,
        }
    }
}

// A malformed `err` must not hide `stat=fail`.
fn deserialize_failure<'de, D>(deserializer: D) -> std::result::Result<Option<Failure>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Failure::from_value(&value))
}

#[derive(Deserialize)]
struct Envelope<T> {
    rsp: T,
}

/// Peek at the envelope status without taking the body.
///
/// Returns `None` if the body is not a recognizable envelope.
pub fn peek_status(body: &[u8]) -> Option<Status> {
    serde_json::from_slice::<Envelope<Status>>(body)
        .ok()
        .map(|env| env.rsp)
}

/// Classify a response.
///
/// A 503 is always a rate limit and the body is not inspected. Otherwise a
/// `stat=fail` envelope becomes [`ApiError::Failure`]. Anything else,
/// including bodies that are not JSON at all, is not an error here.
pub fn check_response(status: StatusCode, body: &[u8]) -> Option<ApiError> {
    if status == StatusCode::SERVICE_UNAVAILABLE {
        return Some(ApiError::RateLimited);
    }

    let status = peek_status(body)?;
    if status.stat != Stat::Fail {
        return None;
    }

    let failure = status.err.unwrap_or_default();
    Some(ApiError::Failure {
        code: failure.numeric_code(),
        message: failure.msg,
    })
}

/// Decode the content of `rsp` into `T`.
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map(|env| env.rsp)
        .map_err(|e| Error::decode("failed to decode response body").with_source(e))
}
