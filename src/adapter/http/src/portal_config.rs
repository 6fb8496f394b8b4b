// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use explorify_accounts::RedirectTarget;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_SIGN_IN_PATH: &str = "/auth/sign-in";
pub const DEFAULT_SETTINGS_PATH: &str = "/settings";
pub const DEFAULT_USER_SITE_URL: &str = "https://explorifytrips.com";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Where the portal sends people it refuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub sign_in_path: String,
    pub settings_path: String,
    /// General-audience site for accounts that are not vendors
    pub user_site_url: String,
}

impl PortalConfig {
    pub fn redirect_location(&self, target: RedirectTarget) -> &str {
        match target {
            RedirectTarget::SignIn => &self.sign_in_path,
            RedirectTarget::Settings => &self.settings_path,
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
            settings_path: DEFAULT_SETTINGS_PATH.to_string(),
            user_site_url: DEFAULT_USER_SITE_URL.to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
