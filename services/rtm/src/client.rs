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

use std::fmt::Display;
use std::future::Future;
use std::pin::pin;
use std::sync::Arc;

use bytes::Bytes;
use http::header::USER_AGENT;
use http::HeaderValue;
use log::{debug, warn};
use rtm_core::utils::redact_query;
use rtm_core::{Context, Error, ErrorKind, ParameterSet, ProvideCredential, Result, Signer};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::constants::*;
use crate::credential::Credential;
use crate::methods::{
    AuthService, ContactService, ListService, TagService, TaskService, TestService,
    TimelineService,
};
use crate::provide_credential::DefaultCredentialProvider;
use crate::response::{check_response, decode_response};
use crate::sign_request::RequestSigner;

/// Client dispatches signed method calls to Remember The Milk.
///
/// A client is cheap to clone and safe to share between tasks. The auth
/// token is the only field that changes after construction, and only
/// through `&mut self`.
///
/// ```no_run
/// use rtm::{Client, Config, Context, OsEnv};
/// use rtm_http_send_reqwest::ReqwestHttpSend;
///
/// # async fn example() -> rtm::Result<()> {
/// let ctx = Context::new()
///     .with_http_send(ReqwestHttpSend::default())
///     .with_env(OsEnv);
/// let client = Client::new(ctx.clone(), Config::default().from_env(&ctx))?;
///
/// for list in client.lists().get_list().await? {
///     println!("{}: {}", list.id, list.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    ctx: Context,
    signer: Signer<Credential>,
    base_url: String,
    web_base_url: String,
    user_agent: HeaderValue,
    auth_token: Option<String>,
}

impl Client {
    /// Create a client that loads its credential from `config`, falling
    /// back to the environment.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let provider = DefaultCredentialProvider::new(Arc::new(config.clone()));
        Self::with_credential_provider(ctx, config, provider)
    }

    /// Create a client configured from environment variables only.
    pub fn from_env(ctx: Context) -> Result<Self> {
        let config = Config::default().from_env(&ctx);
        Self::new(ctx, config)
    }

    /// Create a client with a custom credential provider.
    ///
    /// `config` still supplies the endpoints, the user agent and the
    /// explicit auth token.
    pub fn with_credential_provider(
        ctx: Context,
        config: Config,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        config.validate()?;
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            Error::config_invalid(format!("user agent {:?} is invalid", config.user_agent))
                .with_source(e)
        })?;

        Ok(Self {
            signer: Signer::new(ctx.clone(), provider, RequestSigner::new()),
            ctx,
            base_url: config.base_url,
            web_base_url: config.web_base_url,
            user_agent,
            auth_token: config.auth_token,
        })
    }

    /// Use `token` for every following call.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.set_auth_token(token);
        self
    }

    /// Replace the auth token, typically once the authentication flow
    /// completed.
    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.auth_token = Some(token.into());
    }

    /// The explicit auth token, if any.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// The context used to send requests.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub(crate) fn signer(&self) -> &Signer<Credential> {
        &self.signer
    }

    pub(crate) fn web_base_url(&self) -> &str {
        &self.web_base_url
    }

    /// Authentication methods.
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    /// `rtm.lists.*` methods.
    pub fn lists(&self) -> ListService<'_> {
        ListService::new(self)
    }

    /// `rtm.tags.*` methods.
    pub fn tags(&self) -> TagService<'_> {
        TagService::new(self)
    }

    /// `rtm.contacts.*` methods.
    pub fn contacts(&self) -> ContactService<'_> {
        ContactService::new(self)
    }

    /// `rtm.timelines.*` methods.
    pub fn timelines(&self) -> TimelineService<'_> {
        TimelineService::new(self)
    }

    /// `rtm.tasks.*` methods.
    pub fn tasks(&self) -> TaskService<'_> {
        TaskService::new(self)
    }

    /// `rtm.test.*` methods.
    pub fn test(&self) -> TestService<'_> {
        TestService::new(self)
    }

    /// Call `method` with `params` and decode the content of `rsp` into `T`.
    ///
    /// `params` cannot override `method`, `format` or `v`. An `auth_token`
    /// in `params` takes precedence over the client's one.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: ParameterSet,
    ) -> Result<T> {
        let body = self.call_raw(method, params).await?;
        decode_response(&body)
    }

    /// Call `method` and return the buffered body once it passed the
    /// rate limit and envelope checks.
    pub async fn call_raw(&self, method: &str, params: ParameterSet) -> Result<Bytes> {
        let req = self.build_request(method, params).await?;
        let (parts, body) = self.ctx.http_send(req).await?.into_parts();

        if let Some(err) = check_response(parts.status, &body) {
            warn!("{method} failed with status {}: {err}", parts.status);
            return Err(err.into());
        }

        debug!("{method} succeeded with {} bytes", body.len());
        Ok(body)
    }

    /// Same as [`Client::call`], but gives up once `cancel` resolves.
    ///
    /// The cancellation is reported as [`ErrorKind::Cancelled`] carrying the
    /// output of `cancel`. It is preferred over the call's result when both
    /// are ready, and over a transport error if `cancel` is ready by the
    /// time that error is seen.
    pub async fn call_until<T, C, R>(
        &self,
        method: &str,
        params: ParameterSet,
        cancel: C,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        C: Future<Output = R>,
        R: Display,
    {
        let mut cancel = pin!(cancel);

        let res = tokio::select! {
            biased;
            reason = cancel.as_mut() => return Err(cancelled(method, reason)),
            res = self.call::<T>(method, params) => res,
        };

        match res {
            Err(err) if err.kind() == ErrorKind::Transport => tokio::select! {
                biased;
                reason = cancel.as_mut() => Err(cancelled(method, reason)),
                _ = std::future::ready(()) => Err(err),
            },
            res => res,
        }
    }

    async fn build_request(
        &self,
        method: &str,
        params: ParameterSet,
    ) -> Result<http::Request<Bytes>> {
        let mut query = ParameterSet::new()
            .with(PARAM_METHOD, method)
            .with(PARAM_FORMAT, RESPONSE_FORMAT_JSON)
            .with(PARAM_VERSION, API_VERSION);
        query.extend(params.iter());
        if let Some(token) = &self.auth_token {
            query.insert_if_absent(PARAM_AUTH_TOKEN, token);
        }
        debug!(
            "dispatching {method}: {}",
            redact_query(&query, &[PARAM_AUTH_TOKEN])
        );

        let req = http::Request::get(format!("{}?{}", self.base_url, query.to_query_string()))
            .header(USER_AGENT, self.user_agent.clone())
            .body(Bytes::new())?;

        let (mut parts, body) = req.into_parts();
        self.signer.sign(&mut parts).await?;
        Ok(http::Request::from_parts(parts, body))
    }
}

fn cancelled(method: &str, reason: impl Display) -> Error {
    debug!("{method} cancelled: {reason}");
    Error::cancelled(format!("{method} cancelled: {reason}"))
}
