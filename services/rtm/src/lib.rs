//! Remember The Milk API client.
//!
//! Every method call is a signed `GET` on the REST endpoint. Failures are
//! reported in two ways: HTTP 503 for rate limiting, and a `stat=fail`
//! envelope with HTTP 200 for everything else. [`Client`] checks both
//! before decoding the payload.

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::signature;
pub use sign_request::RequestSigner;

mod response;
pub use response::check_response;
pub use response::decode_response;
pub use response::peek_status;
pub use response::ApiError;
pub use response::Failure;
pub use response::Stat;
pub use response::Status;

mod client;
pub use client::Client;

mod methods;
pub use methods::*;

pub use rtm_core::{Context, Error, ErrorKind, OsEnv, ParameterSet, Result, StaticEnv};
