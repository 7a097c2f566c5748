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

use anyhow::Result;
use pretty_assertions::assert_eq;
use rtm::{signature, AuthUser, Client, Config, ErrorKind, ParameterSet, Permission, TaskInput};

use crate::common::*;

#[tokio::test]
async fn test_auth_url() -> Result<()> {
    let mock = MockHttpSend::new();
    let client = client(&mock);

    let url = client.auth().auth_url(Permission::Delete).await?;
    // md5("secretapi_keykeypermsdelete")
    assert_eq!(
        url,
        "https://www.rememberthemilk.com/services/auth/?api_key=key&perms=delete&api_sig=6b9b4dd10bf9800193acc2f62362e03a"
    );
    assert!(mock.recorded().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_auth_url_with_frob() -> Result<()> {
    let mock = MockHttpSend::new();
    let client = Client::new(
        context(&mock),
        config()
            .with_auth_token("ignored")
            .with_web_base_url("https://rtm.example.com/services/"),
    )?;

    let url = client
        .auth()
        .auth_url_with_frob(Permission::Read, "abc123")
        .await?;
    // md5("secretapi_keykeyfrobabc123permsread")
    assert_eq!(
        url,
        "https://rtm.example.com/services/auth/?api_key=key&perms=read&frob=abc123&api_sig=d0fd050b66dd7aad5bad9d72168b1489"
    );
    Ok(())
}

#[tokio::test]
async fn test_auth_url_without_credential() {
    let mock = MockHttpSend::new();
    let client = Client::new(context(&mock), Config::default()).expect("config is valid");

    let err = client
        .auth()
        .auth_url(Permission::Write)
        .await
        .expect_err("unsigned url must fail");
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}

#[tokio::test]
async fn test_get_frob() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok","frob":"0a56717c3561e53584f292bb7081a533c197270c"}}"#);
    let client = client(&mock);

    let frob = client.auth().get_frob().await?;
    assert_eq!(frob, "0a56717c3561e53584f292bb7081a533c197270c");
    assert_eq!(mock.last().query().get("method"), Some("rtm.auth.getFrob"));
    Ok(())
}

#[tokio::test]
async fn test_get_token() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(
        r#"{"rsp":{"stat":"ok","auth":{"token":"410c57262293e9d937ee5be75eb7b0128fd61b61","perms":"delete","user":{"id":"1","username":"bob","fullname":"Bob T. Monkey"}}}}"#,
    );
    let mut client = client(&mock);

    let auth = client.auth().get_token("frob_value").await?;
    assert_eq!(auth.token, "410c57262293e9d937ee5be75eb7b0128fd61b61");
    assert_eq!(auth.perms, "delete");
    assert_eq!(
        auth.user,
        AuthUser {
            id: "1".to_string(),
            username: "bob".to_string(),
            fullname: "Bob T. Monkey".to_string(),
        }
    );

    let query = mock.last().query();
    assert_eq!(query.get("method"), Some("rtm.auth.getToken"));
    assert_eq!(query.get("frob"), Some("frob_value"));

    client.set_auth_token(auth.token);
    assert_eq!(
        client.auth_token(),
        Some("410c57262293e9d937ee5be75eb7b0128fd61b61")
    );
    Ok(())
}

#[tokio::test]
async fn test_check_token() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(
        r#"{"rsp":{"stat":"ok","auth":{"token":"checked","perms":"read","user":{"id":"1","username":"bob","fullname":"Bob"}}}}"#,
    );
    let client = client(&mock).with_auth_token("current");

    let auth = client.auth().check_token("checked").await?;
    assert_eq!(auth.token, "checked");

    let query = mock.last().query();
    assert_eq!(query.get("method"), Some("rtm.auth.checkToken"));
    assert_eq!(query.get("auth_token"), Some("checked"));
    Ok(())
}

#[tokio::test]
async fn test_lists_get_list() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(
        r#"{"rsp":{"stat":"ok","lists":{"list":[
            {"id":"100653","name":"Inbox","deleted":"0","locked":"1","archived":"0","position":"-1","smart":"0","sort_order":"0","permission":"owner"},
            {"id":"387549","name":"High Priority","deleted":"0","locked":"0","archived":"0","position":"0","smart":"1"}
        ]}}}"#,
    );
    let client = client(&mock);

    let lists = client.lists().get_list().await?;
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].name, "Inbox");
    assert_eq!(lists[0].locked, "1");
    assert_eq!(lists[1].smart, "1");
    assert_eq!(lists[1].permission, "");
    assert_eq!(mock.last().query().get("method"), Some("rtm.lists.getList"));
    Ok(())
}

#[tokio::test]
async fn test_tags_get_list() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok","tags":{"tag":[{"name":"coffee"},{"name":"phone"}]}}}"#);
    let client = client(&mock);

    let tags = client.tags().get_list().await?;
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["coffee", "phone"]);
    Ok(())
}

#[tokio::test]
async fn test_contacts_get_list() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(
        r#"{"rsp":{"stat":"ok","contacts":{"contact":[{"id":"1","fullname":"Omar Kilani","username":"omar"}]}}}"#,
    );
    let client = client(&mock);

    let contacts = client.contacts().get_list().await?;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].fullname, "Omar Kilani");
    Ok(())
}

#[tokio::test]
async fn test_contacts_empty() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok","contacts":{}}}"#);
    let client = client(&mock);

    assert!(client.contacts().get_list().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_timelines_create() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok","timeline":"12741021"}}"#);
    let client = client(&mock).with_auth_token("token");

    assert_eq!(client.timelines().create().await?, "12741021");
    let query = mock.last().query();
    assert_eq!(query.get("method"), Some("rtm.timelines.create"));
    assert_eq!(query.get("auth_token"), Some("token"));
    Ok(())
}

#[tokio::test]
async fn test_tasks_add() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(
        r#"{"rsp":{"stat":"ok","transaction":{"id":"1234","undoable":"0"},"list":{"id":"987","taskseries":[{"id":"555","name":"Buy milk","source":"api","task":[{"id":"556","due":"","priority":"N","has_due_time":"0"}]}]}}}"#,
    );
    let client = client(&mock).with_auth_token("token");

    let resp = client
        .tasks()
        .add(
            TaskInput::new("12741021", "Buy milk tomorrow")
                .with_list_id("987")
                .with_smart_add(true),
        )
        .await?;
    assert_eq!(resp.transaction.id, "1234");
    assert_eq!(resp.list.id, "987");
    assert_eq!(resp.list.taskseries[0].task[0].id, "556");

    let query = mock.last().query();
    assert_eq!(query.get("method"), Some("rtm.tasks.add"));
    assert_eq!(query.get("timeline"), Some("12741021"));
    assert_eq!(query.get("name"), Some("Buy milk tomorrow"));
    assert_eq!(query.get("list_id"), Some("987"));
    assert_eq!(query.get("parse"), Some("1"));
    assert!(!query.contains("give_to"));
    assert_eq!(
        query.get("api_sig"),
        Some(signature(SHARED_SECRET, &query).as_str())
    );
    Ok(())
}

#[tokio::test]
async fn test_echo() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(
        r#"{"rsp":{"stat":"ok","api_key":"key","format":"json","method":"rtm.test.echo","v":"2","ping":"pong"}}"#,
    );
    let client = client(&mock);

    let echoed = client
        .test()
        .echo(ParameterSet::new().with("ping", "pong"))
        .await?;
    assert_eq!(echoed.get("ping").map(String::as_str), Some("pong"));
    assert!(!echoed.contains_key("stat"));
    assert_eq!(mock.last().query().get("ping"), Some("pong"));
    Ok(())
}

#[tokio::test]
async fn test_login() -> Result<()> {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"ok","user":{"id":"987654321","username":"bob"}}}"#);
    let client = client(&mock).with_auth_token("token");

    let user = client.test().login().await?;
    assert_eq!(user.id, "987654321");
    assert_eq!(user.username, "bob");
    Ok(())
}

#[tokio::test]
async fn test_login_failure() {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"fail","err":{"code":"98","msg":"Login failed / Invalid auth token"}}}"#);
    let client = client(&mock);

    let err = client.test().login().await.expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.code(), Some(98));
}

#[tokio::test]
async fn test_tasks_add_failure_with_malformed_err() {
    let mock = MockHttpSend::new();
    mock.respond_ok(r#"{"rsp":{"stat":"fail","err":{"code":"340","msg":null}}}"#);
    let client = client(&mock).with_auth_token("token");

    let err = client
        .tasks()
        .add(TaskInput::new("1", "milk"))
        .await
        .expect_err("fail envelope must not decode into defaults");
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.code(), Some(340));
    assert_eq!(err.message(), "");
}
