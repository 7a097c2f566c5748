//! Core components for signed Remember The Milk API requests.
//!
//! This crate provides the service-independent types and traits the `rtm`
//! client is built on.
//!
//! ## Overview
//!
//! - **Context**: a container that holds the HTTP sender and environment access
//! - **ParameterSet**: the single-valued request parameters and their canonical form
//! - **Traits**: credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: caches the credential and drives the request signer
//!
//! ## Example
//!
//! ```no_run
//! use rtm_core::{Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//! use rtm_core::{ParameterSet, SigningRequest};
//! use rtm_core::hash::hex_md5;
//! use async_trait::async_trait;
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             secret: "my-secret".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! #[async_trait]
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut Parts,
//!         cred: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         let Some(cred) = cred else { return Ok(()) };
//!         let mut signing = SigningRequest::build(req)?;
//!         let sig = hex_md5(format!("{}{}", cred.secret, signing.query.canonical_string()).as_bytes());
//!         signing.query.insert("sig", sig);
//!         signing.apply(req)
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyBuilder);
//!
//! let mut parts = http::Request::get("https://example.com/?a=1")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: MD5 hashing helpers
//! - [`utils`]: redaction of secrets in debug output and logs

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod params;
pub use params::ParameterSet;

mod request;
pub use request::SigningRequest;

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod signer;
pub use signer::Signer;
