// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod api_error;
mod axum_utils;
mod middleware;
mod portal_config;
mod portal_router;

pub mod auth;
pub mod pages;
pub mod vendor;

pub use api_error::*;
pub use middleware::*;
pub use portal_config::*;
pub use portal_router::*;
