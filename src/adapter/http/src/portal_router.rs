// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::Catalog;

use crate::AuthenticationLayer;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// All portal routes, without any middleware
pub fn portal_router() -> axum::Router {
    axum::Router::new()
        .merge(crate::auth::root_router())
        .merge(crate::vendor::root_router())
        .merge(crate::pages::root_router())
}

/// Portal routes wired to `catalog`, with every request authenticated
pub fn portal_app(catalog: Catalog) -> axum::Router {
    portal_router().layer(
        tower::ServiceBuilder::new()
            .layer(axum::Extension(catalog))
            .layer(AuthenticationLayer::new()),
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
