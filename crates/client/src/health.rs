use serde::Deserialize;

use crate::{Client, Result, Storage, Transport};

/// Response given by the health endpoints
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthResp {
    pub status: String,
}

impl<T: Transport, S: Storage> Client<T, S> {
    /// Whether the backend process is up
    pub fn liveness(&self) -> Result<HealthResp> {
        Ok(Self::decode(&self.get("/health/liveness", false)?)?)
    }

    /// Whether the backend can reach its database
    pub fn readiness(&self) -> Result<HealthResp> {
        Ok(Self::decode(&self.get("/health/readiness", false)?)?)
    }
}
