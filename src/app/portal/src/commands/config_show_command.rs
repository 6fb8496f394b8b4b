// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::ResultIntoInternal;

use super::Command;
use crate::{CLIError, PortalAppConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ConfigShowCommand {
    config: PortalAppConfig,
}

impl ConfigShowCommand {
    pub fn new(config: PortalAppConfig) -> Self {
        Self { config }
    }

    pub fn render(&self) -> Result<String, CLIError> {
        let rendered = serde_yaml::to_string(&self.config.masked()).int_err()?;
        Ok(rendered)
    }
}

#[async_trait::async_trait]
impl Command for ConfigShowCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        println!("{}", self.render()?);
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
