//! Fluent builder for constructing a [`Driver`].

use std::sync::Arc;

use cl_core::{CrowdConfig, Policy};
use cl_layout::{VenueCatalog, VenueProvider};
use cl_routing::{router_for, Router};

use crate::{Driver, SimError, SimResult};

/// Fluent builder for [`Driver`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                            |
/// |-------------------------|------------------------------------|
/// | `.provider(p)`          | `VenueCatalog::builtin()`          |
/// | `.baseline_router(r)`   | `NearestExit`                      |
/// | `.adaptive_router(r)`   | `LeastCrowdedOpen`                 |
///
/// # Example
///
/// ```rust,ignore
/// let driver = DriverBuilder::new(config)
///     .provider(VenueCatalog::new(my_layout))
///     .build()?;
/// ```
pub struct DriverBuilder {
    config:          CrowdConfig,
    provider:        Option<Box<dyn VenueProvider>>,
    baseline_router: Option<Arc<dyn Router>>,
    adaptive_router: Option<Arc<dyn Router>>,
}

impl DriverBuilder {
    pub fn new(config: CrowdConfig) -> Self {
        Self {
            config,
            provider:        None,
            baseline_router: None,
            adaptive_router: None,
        }
    }

    /// Supply the venue geometry source.
    pub fn provider(mut self, provider: impl VenueProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Replace the baseline run's router.  Its `policy()` must be
    /// `Policy::Baseline`.
    pub fn baseline_router(mut self, router: Arc<dyn Router>) -> Self {
        self.baseline_router = Some(router);
        self
    }

    /// Replace the adaptive run's router.  Its `policy()` must be
    /// `Policy::Adaptive`.
    pub fn adaptive_router(mut self, router: Arc<dyn Router>) -> Self {
        self.adaptive_router = Some(router);
        self
    }

    /// Validate the configuration and routers and return an idle [`Driver`].
    pub fn build(self) -> SimResult<Driver> {
        self.config.validate()?;

        let baseline = checked(self.baseline_router, Policy::Baseline)?;
        let adaptive = checked(self.adaptive_router, Policy::Adaptive)?;
        let provider = self
            .provider
            .unwrap_or_else(|| Box::new(VenueCatalog::builtin()));

        Ok(Driver::from_parts(self.config, provider, baseline, adaptive))
    }
}

fn checked(router: Option<Arc<dyn Router>>, slot: Policy) -> SimResult<Arc<dyn Router>> {
    let router = router.unwrap_or_else(|| Arc::from(router_for(slot)));
    match router.policy() {
        got if got == slot => Ok(router),
        got => Err(SimError::RouterPolicy { slot, got }),
    }
}
