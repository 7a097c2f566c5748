use async_trait::async_trait;
use log::debug;
use rtm_core::hash::hex_md5_parts;
use rtm_core::{
    Context, Error, ParameterSet, Result, SignRequest, SigningCredential, SigningRequest,
};

use crate::constants::*;
use crate::credential::Credential;

/// Compute the `api_sig` of a parameter set.
///
/// The signature is `md5(shared_secret + key1 + value1 + key2 + value2 ...)`
/// with keys sorted byte-wise, rendered as 32 lowercase hex characters. An
/// `api_sig` already present in `params` is not part of its own input.
///
/// Remember The Milk API docs: <https://www.rememberthemilk.com/services/api/authentication.rtm>
pub fn signature(shared_secret: &str, params: &ParameterSet) -> String {
    let canonical = params.canonical_string_with_filter(|k| k != PARAM_API_SIG);
    hex_md5_parts([shared_secret.as_bytes(), canonical.as_bytes()])
}

/// Replace any `api_sig` in `params` by a fresh signature.
pub(crate) fn sign_parameters(shared_secret: &str, params: &mut ParameterSet) {
    params.remove(PARAM_API_SIG);
    let sig = signature(shared_secret, params);
    params.insert(PARAM_API_SIG, sig);
}

/// RequestSigner signs Remember The Milk method calls.
///
/// The signer adds `api_key` and, unless the request already carries one,
/// the credential's `auth_token` to the query before computing `api_sig`.
#[derive(Debug, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential.filter(|c| c.is_valid()) else {
            return Err(Error::credential_invalid(format!(
                "no valid credential found, set {RTM_API_KEY} and {RTM_SHARED_SECRET}"
            )));
        };

        let mut signing = SigningRequest::build(req)?;
        signing.query.insert(PARAM_API_KEY, &cred.api_key);
        if let Some(token) = &cred.auth_token {
            signing.query.insert_if_absent(PARAM_AUTH_TOKEN, token);
        }
        sign_parameters(&cred.shared_secret, &mut signing.query);
        debug!(
            "signed {} call",
            signing.query.get(PARAM_METHOD).unwrap_or("unknown")
        );

        signing.apply(req)
    }
}
