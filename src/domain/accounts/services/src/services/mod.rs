// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod access_gate_impl;
mod account_service_impl;
mod account_settings_service_impl;
mod authentication_service_impl;
mod login_password_auth_provider;
mod password_hashing;
mod predefined_accounts_registrator;
mod session_service_impl;

pub use access_gate_impl::*;
pub use account_service_impl::*;
pub use account_settings_service_impl::*;
pub use authentication_service_impl::*;
pub use login_password_auth_provider::*;
pub(crate) use password_hashing::*;
pub use predefined_accounts_registrator::*;
pub use session_service_impl::*;
