// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::IpAddr;

use dill::Catalog;

use super::Command;
use crate::{APIServer, CLIError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ServeCommand {
    catalog: Catalog,
    address: IpAddr,
    port: u16,
}

impl ServeCommand {
    pub fn new(catalog: Catalog, address: IpAddr, port: u16) -> Self {
        Self {
            catalog,
            address,
            port,
        }
    }
}

#[async_trait::async_trait]
impl Command for ServeCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let api_server = APIServer::new(self.catalog.clone(), self.address, self.port).await?;

        tracing::info!(
            "Portal is listening on: http://{}",
            api_server.local_addr()
        );
        eprintln!("Portal is listening on: http://{}", api_server.local_addr());

        api_server.run().await?;

        tracing::info!("Portal stopped");
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
