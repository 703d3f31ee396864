//! DTOs for the health check endpoint.

use serde::Serialize;
use std::collections::BTreeMap;

/// Dependency name to liveness, e.g. `{"postgres": true}`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct HealthResponse(pub BTreeMap<String, bool>);
