//! Dependency health reporting.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::domain::repositories::DependencyProbe;

/// Reports whether each registered dependency answers a ping.
pub struct HealthService {
    probes: Vec<Arc<dyn DependencyProbe>>,
}

impl HealthService {
    pub fn new(probes: Vec<Arc<dyn DependencyProbe>>) -> Self {
        Self { probes }
    }

    /// Pings every dependency and maps its name to the outcome.
    ///
    /// A failed ping is logged and reported as `false`; the check itself never fails.
    pub async fn check(&self) -> BTreeMap<String, bool> {
        let mut report = BTreeMap::new();

        for probe in &self.probes {
            let name = probe.name();
            let healthy = match probe.ping().await {
                Ok(()) => true,
                Err(e) => {
                    warn!("Health check for {} failed: {:?}", name, e);
                    false
                }
            };
            report.insert(name, healthy);
        }

        report
    }
}
