// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{required_var, ConfigError};

/// `BLOB_ENDPOINT`/`BLOB_ACCESS_KEY`/`BLOB_SECRET_KEY` (spec §6.5). Object
/// storage itself is an out-of-scope collaborator (spec §1, "treated as an
/// opaque blob-store API"), so this only validates the variables are present
/// at boot; a deployment wiring a real [`oj_adapters::BlobStore`] binds
/// these into it.
#[derive(Debug, Clone)]
pub struct BlobConfig {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
}

impl BlobConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: required_var("BLOB_ENDPOINT")?,
            access_key: required_var("BLOB_ACCESS_KEY")?,
            secret_key: required_var("BLOB_SECRET_KEY")?,
        })
    }
}
