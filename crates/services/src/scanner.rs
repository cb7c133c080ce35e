use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use buddy_core::Catalog;
use buddy_core::model::{DiscoverableObject, SimulationSettings};
use buddy_core::time::after;

use crate::error::ScannerError;
use crate::picker::pick;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning { ready_at: DateTime<Utc> },
    Found(DiscoverableObject),
}

/// Pretend object recognition: a scan "finds" a random catalog object once
/// the scan delay has elapsed.
#[derive(Debug, Clone)]
pub struct ObjectScanner {
    objects: Vec<DiscoverableObject>,
    delay: Duration,
    state: ScanState,
    discovered: u32,
}

impl ObjectScanner {
    /// # Errors
    ///
    /// Returns `ScannerError::NoObjects` for an empty object list.
    pub fn new(objects: Vec<DiscoverableObject>, delay: Duration) -> Result<Self, ScannerError> {
        if objects.is_empty() {
            return Err(ScannerError::NoObjects);
        }
        Ok(Self {
            objects,
            delay,
            state: ScanState::Idle,
            discovered: 0,
        })
    }

    /// # Errors
    ///
    /// Returns `ScannerError::NoObjects` if the catalog has no objects.
    pub fn from_catalog(
        catalog: &Catalog,
        settings: &SimulationSettings,
    ) -> Result<Self, ScannerError> {
        Self::new(catalog.objects().to_vec(), settings.scan_delay())
    }

    #[must_use]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    #[must_use]
    pub fn is_scanning(&self) -> bool {
        matches!(self.state, ScanState::Scanning { .. })
    }

    #[must_use]
    pub fn ready_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            ScanState::Scanning { ready_at } => Some(ready_at),
            _ => None,
        }
    }

    #[must_use]
    pub fn found(&self) -> Option<&DiscoverableObject> {
        match &self.state {
            ScanState::Found(object) => Some(object),
            _ => None,
        }
    }

    /// Number of scans that found something since creation.
    #[must_use]
    pub fn discovered_count(&self) -> u32 {
        self.discovered
    }

    /// Begin a scan, clearing any previous result.
    ///
    /// Returns when the scan will be ready. While a scan is running this is a
    /// no-op returning the existing ready time.
    pub fn start_scan(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        if let ScanState::Scanning { ready_at } = self.state {
            return ready_at;
        }
        let ready_at = after(now, self.delay);
        self.state = ScanState::Scanning { ready_at };
        tracing::debug!(%ready_at, "scan started");
        ready_at
    }

    /// Resolve a running scan whose delay has elapsed.
    ///
    /// Returns the newly found object, or `None` if nothing changed.
    pub fn poll<R: Rng + ?Sized>(
        &mut self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Option<&DiscoverableObject> {
        let ScanState::Scanning { ready_at } = self.state else {
            return None;
        };
        if now < ready_at {
            return None;
        }

        let object = pick(&self.objects, rng)?.clone();
        tracing::debug!(object = object.name(), "scan finished");
        self.discovered = self.discovered.saturating_add(1);
        self.state = ScanState::Found(object);
        self.found()
    }
}
