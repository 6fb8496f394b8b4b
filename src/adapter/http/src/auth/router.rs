// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::routing::post;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn root_router() -> axum::Router {
    axum::Router::new()
        .route("/auth/login", post(super::login_handler))
        .route("/auth/logout", post(super::logout_handler))
        .route("/auth/signup", post(super::signup_handler))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
