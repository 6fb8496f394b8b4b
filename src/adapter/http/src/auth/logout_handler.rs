// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::SESSION_COOKIE_NAME;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Drops the session cookie. Bearer tokens simply expire, there is no
/// server-side session state to revoke.
#[tracing::instrument(level = "info", skip_all)]
pub async fn logout_handler(jar: CookieJar) -> (CookieJar, http::StatusCode) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"));
    (jar, http::StatusCode::NO_CONTENT)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
