// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod access_gate;
mod account_service;
mod account_settings_service;
mod authentication_provider;
mod authentication_service;
mod session_service;
mod sign_in_error;

pub use access_gate::*;
pub use account_service::*;
pub use account_settings_service::*;
pub use authentication_provider::*;
pub use authentication_service::*;
pub use session_service::*;
pub use sign_in_error::*;
