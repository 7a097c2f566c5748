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

use std::time::Duration;

use anyhow::Result;
use http::header::USER_AGENT;
use http::StatusCode;
use pretty_assertions::assert_eq;
use rtm::{signature, Client, Config, ErrorKind, ParameterSet};
use serde::Deserialize;

use crate::common::*;

#[derive(Debug, Deserialize)]
struct Timeline {
    timeline: String,
}

#[tokio::test]
async fn test_request_is_signed() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok","timeline":"12741021"}}"#);
    let client = client(&mock);

    let resp: Timeline = client
        .call("rtm.timelines.create", ParameterSet::new().with("extra", "a b"))
        .await?;
    assert_eq!(resp.timeline, "12741021");

    let req = mock.last();
    assert_eq!(req.uri.host(), Some("api.rememberthemilk.com"));
    assert_eq!(req.uri.path(), "/services/rest/");

    let query = req.query();
    assert_eq!(query.get("method"), Some("rtm.timelines.create"));
    assert_eq!(query.get("format"), Some("json"));
    assert_eq!(query.get("v"), Some("2"));
    assert_eq!(query.get("api_key"), Some(API_KEY));
    assert_eq!(query.get("extra"), Some("a b"));
    assert!(!query.contains("auth_token"));
    assert_eq!(
        query.get("api_sig"),
        Some(signature(SHARED_SECRET, &query).as_str())
    );

    let ua = req.headers[USER_AGENT].to_str()?;
    assert!(ua.starts_with("rtm-rust/"), "unexpected user agent {ua}");
    Ok(())
}

#[tokio::test]
async fn test_params_cannot_override_base_params() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok"}}"#);
    let client = client(&mock);

    let params = ParameterSet::new()
        .with("method", "rtm.tasks.delete")
        .with("format", "xml")
        .with("api_key", "other");
    client.call_raw("rtm.test.echo", params).await?;

    let query = mock.last().query();
    assert_eq!(query.get("method"), Some("rtm.test.echo"));
    assert_eq!(query.get("format"), Some("json"));
    assert_eq!(query.get("api_key"), Some(API_KEY));
    Ok(())
}

#[tokio::test]
async fn test_auth_token_precedence() -> Result<()> {
    let mock = MockHttpSend::new();
    for _ in 0..3 {
        mock.respond_ok(r#"{"rsp":{"stat":"ok"}}"#);
    }

    // Loaded from config.
    let client = Client::new(context(&mock), config().with_auth_token("loaded"))?;
    client.call_raw("rtm.test.login", ParameterSet::new()).await?;
    assert_eq!(mock.last().query().get("auth_token"), Some("loaded"));

    // Explicit token replaces the loaded one.
    let mut client = client;
    client.set_auth_token("explicit");
    assert_eq!(client.auth_token(), Some("explicit"));
    client.call_raw("rtm.test.login", ParameterSet::new()).await?;
    assert_eq!(mock.last().query().get("auth_token"), Some("explicit"));

    // Per call token wins over both.
    client
        .call_raw(
            "rtm.auth.checkToken",
            ParameterSet::new().with("auth_token", "per_call"),
        )
        .await?;
    let query = mock.last().query();
    assert_eq!(query.get("auth_token"), Some("per_call"));
    assert_eq!(
        query.get("api_sig"),
        Some(signature(SHARED_SECRET, &query).as_str())
    );
    Ok(())
}

#[tokio::test]
async fn test_rate_limited() {
    let mock = MockHttpSend::new();
    mock.respond(StatusCode::SERVICE_UNAVAILABLE, "<html>slow down</html>");
    let client = client(&mock);

    let err = client
        .call_raw("rtm.test.echo", ParameterSet::new())
        .await
        .expect_err("503 must fail");
    assert_eq!(err.kind(), ErrorKind::RateLimited);
    assert_eq!(err.code(), Some(503));
    assert!(err.message().contains("Rate limit exceeded"));
}

#[tokio::test]
async fn test_api_error() {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"fail","err":{"code":"101","msg":"Invalid frob - did you authenticate?"}}}"#);
    let client = client(&mock);

    let err = client
        .auth()
        .get_token("0a56717c3561e53584f292bb7081a533c197270c")
        .await
        .expect_err("fail envelope must fail");
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.code(), Some(101));
    assert_eq!(err.message(), "Invalid frob - did you authenticate?");
    assert!(err.is_remote_error());
}

#[tokio::test]
async fn test_decode_error() {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok","timeline":{"unexpected":true}}}"#);
    let client = client(&mock);

    let err = client
        .call::<Timeline>("rtm.timelines.create", ParameterSet::new())
        .await
        .expect_err("shape mismatch must fail");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_call_raw_passes_non_json_body() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond(StatusCode::OK, vec![0x89, b'P', b'N', b'G']);
    let client = client(&mock);

    let body = client.call_raw("rtm.test.echo", ParameterSet::new()).await?;
    assert_eq!(&body[..], &[0x89, b'P', b'N', b'G']);
    Ok(())
}

#[tokio::test]
async fn test_transport_error() {
    let mock = MockHttpSend::new();
    mock.fail_with(rtm::Error::transport("connection reset"));
    let client = client(&mock);

    let err = client
        .call_until::<Timeline, _, _>(
            "rtm.timelines.create",
            ParameterSet::new(),
            std::future::pending::<&str>(),
        )
        .await
        .expect_err("transport failure must surface");
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_cancelled_before_call() {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok","timeline":"1"}}"#);
    let client = client(&mock);

    let err = client
        .call_until::<Timeline, _, _>("rtm.timelines.create", ParameterSet::new(), async {
            "shutting down"
        })
        .await
        .expect_err("ready cancellation must win");
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(err.message().contains("shutting down"));
    assert!(mock.recorded().is_empty());
}

#[tokio::test]
async fn test_cancelled_during_call() {
    let mock = MockHttpSend::new().with_delay(Duration::from_secs(5));
    mock.respond_ok(r#"{"rsp":{"stat":"ok","timeline":"1"}}"#);
    let client = client(&mock);

    let err = client
        .call_until::<Timeline, _, _>("rtm.timelines.create", ParameterSet::new(), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            "deadline exceeded"
        })
        .await
        .expect_err("cancellation must abort the call");
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(err.message().contains("deadline exceeded"));
    assert_eq!(mock.recorded().len(), 1);
}

#[tokio::test]
async fn test_cancellation_wins_over_transport_error() {
    let mock = MockHttpSend::new();
    mock.fail_with(rtm::Error::transport("connection aborted"));
    let fired = mock.notify_on_send();
    let client = client(&mock);

    // The cancellation fires while the transport is failing.
    let err = client
        .call_until::<Timeline, _, _>("rtm.timelines.create", ParameterSet::new(), async {
            let _ = fired.await;
            "context canceled"
        })
        .await
        .expect_err("call must fail");
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(err.message().contains("context canceled"));
}

#[tokio::test]
async fn test_success_is_kept_when_not_cancelled() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok","timeline":"42"}}"#);
    let client = client(&mock);

    let resp: Timeline = client
        .call_until(
            "rtm.timelines.create",
            ParameterSet::new(),
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "never"
            },
        )
        .await?;
    assert_eq!(resp.timeline, "42");
    Ok(())
}

#[tokio::test]
async fn test_missing_credential() {
    let mock = MockHttpSend::new();
    let client = Client::new(context(&mock), Config::default()).expect("config is valid");

    let err = client
        .call_raw("rtm.test.echo", ParameterSet::new())
        .await
        .expect_err("unsigned call must fail");
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(mock.recorded().is_empty());
}

#[tokio::test]
async fn test_invalid_base_url() {
    let mock = MockHttpSend::new();
    let err = Client::new(
        context(&mock),
        config().with_base_url("https://api.rememberthemilk.com/services/rest"),
    )
    .expect_err("missing trailing slash must fail");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[tokio::test]
async fn test_concurrent_calls() -> Result<()> {
    let mock = MockHttpSend::new();
    for _ in 0..8 {
        mock.respond_ok(r#"{"rsp":{"stat":"ok","timeline":"1"}}"#);
    }
    let client = client(&mock);

    let mut tasks = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .call::<Timeline>(
                    "rtm.timelines.create",
                    ParameterSet::new().with("n", i.to_string()),
                )
                .await
        }));
    }
    for task in tasks {
        task.await??;
    }

    for req in mock.recorded() {
        let query = req.query();
        assert_eq!(
            query.get("api_sig"),
            Some(signature(SHARED_SECRET, &query).as_str())
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_custom_user_agent() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok"}}"#);
    let client = Client::new(context(&mock), config().with_user_agent("my-app/1.0"))?;

    client.call_raw("rtm.test.echo", ParameterSet::new()).await?;
    assert_eq!(mock.last().headers[USER_AGENT], "my-app/1.0");
    Ok(())
}
