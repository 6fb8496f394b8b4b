// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::*;
use internal_error::{ErrorIntoInternal, InternalError};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time_source::SystemTimeSource;

use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const SESSION_JWT_ISSUER: &str = "com.explorify.vendor-portal";
const SESSION_JWT_ALGORITHM: Algorithm = Algorithm::HS384;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct SessionServiceImpl {
    time_source: Arc<dyn SystemTimeSource>,
    session_ttl: chrono::Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[component(pub)]
#[interface(dyn SessionService)]
impl SessionServiceImpl {
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(config: Arc<SessionConfig>, time_source: Arc<dyn SystemTimeSource>) -> Self {
        Self {
            time_source,
            session_ttl: config.session_ttl,
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }
}

impl SessionService for SessionServiceImpl {
    fn issue_session(&self, account: &Account) -> Result<String, InternalError> {
        let iat = self.time_source.now();
        let exp = iat + self.session_ttl;

        let claims = SessionTokenClaims {
            iat: iat.timestamp(),
            exp: exp.timestamp(),
            iss: String::from(SESSION_JWT_ISSUER),
            sub: account.id.to_string(),
            email: account.email.clone(),
            role: account.role,
            vendor_verified: account.vendor_verified,
        };

        encode(
            &Header::new(SESSION_JWT_ALGORITHM),
            &claims,
            &self.encoding_key,
        )
        .map_err(ErrorIntoInternal::int_err)
    }

    fn resolve_session(&self, access_token: &str) -> Result<LoggedAccount, AccessTokenError> {
        let mut validation = Validation::new(SESSION_JWT_ALGORITHM);
        validation.set_issuer(&[SESSION_JWT_ISSUER]);
        // Expiry is checked against our own clock below
        validation.validate_exp = false;

        let token_data = decode::<SessionTokenClaims>(access_token, &self.decoding_key, &validation)
            .map_err(|e| match *e.kind() {
                ErrorKind::ExpiredSignature => AccessTokenError::Expired,
                _ => AccessTokenError::Invalid(Box::new(e)),
            })?;

        let claims = token_data.claims;
        if claims.exp <= self.time_source.now().timestamp() {
            return Err(AccessTokenError::Expired);
        }

        Ok(LoggedAccount {
            email: claims.email,
            claims: Some(SessionClaims {
                account_id: AccountID::new(claims.sub),
                role: claims.role,
                vendor_verified: claims.vendor_verified,
            }),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionTokenClaims {
    exp: i64,
    iat: i64,
    iss: String,
    sub: String,
    email: String,
    role: AccountRole,
    vendor_verified: bool,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
