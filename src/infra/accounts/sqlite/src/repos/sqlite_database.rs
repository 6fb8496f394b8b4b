// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::Path;

use internal_error::{InternalError, ResultIntoInternal};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Opens (creating if needed) the database file and brings the schema up to
/// date
pub async fn connect_sqlite_database(database_path: &Path) -> Result<SqlitePool, InternalError> {
    tracing::info!(path = %database_path.display(), "Opening SQLite database");

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .int_err()?;

    sqlx::migrate!("./migrations").run(&pool).await.int_err()?;

    Ok(pool)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
