//! Pipeline orchestrator.
//!
//! Iterates destinations in declared order, pulls hotel aggregates from the
//! configured source, and persists each through the store seam. Individual
//! hotel failures are recorded and skipped; connection loss aborts the run;
//! an interrupt is honored at the hotel-loop boundary. The store connection
//! is released on every exit path.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{error, info, warn};
use uuid::Uuid;

use stayseed_core::Destination;
use stayseed_generate::HotelSource;
use stayseed_store::HotelStore;

use crate::config::ThrottleConfig;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    Interrupted,
    Aborted(String),
}

/// Running totals reported at the end of a run, partial or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub hotels: u64,
    pub rooms: u64,
    pub offers: u64,
    pub reviews: u64,
    pub failed_hotels: u64,
    pub outcome: RunOutcome,
}

impl RunSummary {
    fn new(run_id: String) -> Self {
        Self {
            run_id,
            hotels: 0,
            rooms: 0,
            offers: 0,
            reviews: 0,
            failed_hotels: 0,
            outcome: RunOutcome::Completed,
        }
    }
}

pub struct Pipeline<S> {
    source: Box<dyn HotelSource>,
    store: S,
    throttle: ThrottleConfig,
    interrupt: watch::Receiver<bool>,
}

impl<S: HotelStore + Sync> Pipeline<S> {
    pub fn new(
        source: Box<dyn HotelSource>,
        store: S,
        throttle: ThrottleConfig,
        interrupt: watch::Receiver<bool>,
    ) -> Self {
        Self {
            source,
            store,
            throttle,
            interrupt,
        }
    }

    /// Process every destination and return the run statistics.
    pub async fn run(mut self, destinations: &[Destination]) -> RunSummary {
        let run_id = Uuid::new_v4();
        let mut summary = RunSummary::new(run_id.to_string());

        info!(
            run_id = %run_id,
            destinations = destinations.len(),
            "run started"
        );

        'run: for destination in destinations {
            info!(
                run_id = %run_id,
                destination = %destination.name,
                country = %destination.country,
                target = destination.target_count,
                "processing destination"
            );
            let hotels = self.source.fetch(destination);

            for hotel in &hotels {
                if *self.interrupt.borrow() {
                    warn!(run_id = %run_id, "interrupt received; stopping at hotel boundary");
                    summary.outcome = RunOutcome::Interrupted;
                    break 'run;
                }

                match self.store.persist(hotel).await {
                    Ok(counts) => {
                        summary.hotels += 1;
                        summary.rooms += counts.rooms;
                        summary.offers += counts.offers;
                        summary.reviews += counts.reviews;
                        info!(
                            run_id = %run_id,
                            hotel = %hotel.name,
                            rooms = counts.rooms,
                            offers = counts.offers,
                            reviews = counts.reviews,
                            "hotel persisted"
                        );
                    }
                    Err(err) if err.is_fatal() => {
                        error!(
                            run_id = %run_id,
                            hotel = %hotel.name,
                            error = %err,
                            "store connection lost; aborting run"
                        );
                        summary.outcome = RunOutcome::Aborted(err.to_string());
                        break 'run;
                    }
                    Err(err) => {
                        summary.failed_hotels += 1;
                        warn!(
                            run_id = %run_id,
                            hotel = %hotel.name,
                            error = %err,
                            "hotel skipped after rollback"
                        );
                    }
                }

                self.pause().await;
            }
        }

        self.store.close().await;

        info!(
            run_id = %run_id,
            hotels = summary.hotels,
            rooms = summary.rooms,
            offers = summary.offers,
            reviews = summary.reviews,
            failed_hotels = summary.failed_hotels,
            outcome = ?summary.outcome,
            "run finished"
        );

        summary
    }

    /// Bounded random pause between persistence calls; cut short by an
    /// interrupt so shutdown is not delayed by the throttle.
    async fn pause(&mut self) {
        let ThrottleConfig {
            min_pause_ms,
            max_pause_ms,
        } = self.throttle;
        if max_pause_ms == 0 {
            return;
        }
        let millis = rand::rng().random_range(min_pause_ms..=max_pause_ms);
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(millis)) => {}
            _ = self.interrupt.changed() => {}
        }
    }
}
