// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod account;
mod account_settings_patch;
mod current_account_subject;
mod password;
mod predefined_accounts_config;
mod session_claims;
mod vendor_info;

pub use account::*;
pub use account_settings_patch::*;
pub use current_account_subject::*;
pub use password::*;
pub use predefined_accounts_config::*;
pub use session_claims::*;
pub use vendor_info::*;
