// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::{IpAddr, SocketAddr};

use dill::Catalog;
use internal_error::{InternalError, ResultIntoInternal};
use tower_http::cors::{Any, CorsLayer};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct APIServer {
    listener: tokio::net::TcpListener,
    app: axum::Router,
    local_addr: SocketAddr,
}

impl APIServer {
    pub async fn new(catalog: Catalog, address: IpAddr, port: u16) -> Result<Self, InternalError> {
        let app = explorify_adapter_http::portal_app(catalog).layer(
            tower::ServiceBuilder::new()
                .layer(observability::axum::http_layer())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(vec![
                            http::Method::GET,
                            http::Method::POST,
                            http::Method::PUT,
                        ])
                        .allow_headers(Any),
                ),
        );

        let listener = tokio::net::TcpListener::bind(SocketAddr::new(address, port))
            .await
            .int_err()?;
        let local_addr = listener.local_addr().int_err()?;

        Ok(Self {
            listener,
            app,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run(self) -> Result<(), InternalError> {
        axum::serve(self.listener, self.app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .int_err()
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "Failed to listen for the shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
