//! Application state for the web layer.

use std::sync::Arc;

use crate::ehailing::EHailingBackend;
use crate::formatter::TripService;
use crate::myciti::MyCitiBackend;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Trip lookup and formatting
    pub trips: Arc<TripService<MyCitiBackend>>,

    /// E-hailing estimator, if one is configured
    pub estimates: Option<Arc<EHailingBackend>>,

    /// Shorten autocomplete addresses before lookup
    pub truncate_addresses: bool,
}

impl AppState {
    /// Create a new app state.
    pub fn new(trips: TripService<MyCitiBackend>) -> Self {
        Self {
            trips: Arc::new(trips),
            estimates: None,
            truncate_addresses: false,
        }
    }

    /// Price e-hailing rides alongside each bus lookup.
    pub fn with_estimates(mut self, estimates: EHailingBackend) -> Self {
        self.estimates = Some(Arc::new(estimates));
        self
    }

    /// Shorten every submitted address to its first two segments.
    pub fn with_address_truncation(mut self, enabled: bool) -> Self {
        self.truncate_addresses = enabled;
        self
    }
}
