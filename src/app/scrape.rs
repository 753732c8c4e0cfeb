//! Scrape request lifecycle: submit, poll, reset

use eframe::egui;
use tracing::{debug, error, info};

use super::App;
use crate::client::{resolve_outcome, ScrapeOutcome};
use crate::types::{ScrapePhase, ScrapeRequest};

impl App {
    /// Validates the form and spawns the request.
    ///
    /// A second submission while one is pending is ignored; `Loading` is only
    /// ever entered from `Idle` or a terminal state.
    pub fn submit(&mut self, ctx: &egui::Context) {
        if self.phase == ScrapePhase::Loading {
            return;
        }

        let request = match ScrapeRequest::parse(&self.search_term, &self.total_results) {
            Ok(request) => request,
            Err(e) => {
                self.alert = Some(e.to_string());
                return;
            }
        };

        info!(term = %request.search_for, total = request.total, "Submitting scrape request");

        self.active_term = request.search_for.clone();
        self.businesses.clear();
        self.error_message = None;
        self.last_export = None;
        self.phase = ScrapePhase::Loading;

        let client = self.client.clone();
        let slot = self.scrape_slot.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = resolve_outcome(client.scrape(&request).await);
            *slot.lock().unwrap() = Some(outcome);
            ctx.request_repaint();
        });
    }

    /// Drains the resolution slot and applies the terminal transition.
    pub fn poll_scrape_result(&mut self) {
        let outcome = self.scrape_slot.lock().unwrap().take();
        let Some(outcome) = outcome else { return };

        // A resolution that lands after a reset has nothing to transition;
        // terminal states are only reachable from Loading.
        if self.phase != ScrapePhase::Loading {
            debug!("Dropping stale scrape resolution");
            return;
        }

        self.phase = outcome.phase();
        match outcome {
            ScrapeOutcome::Results(businesses) => {
                info!(count = businesses.len(), "Scrape completed");
                // Replaced wholesale; results never merge across requests
                self.businesses = businesses;
            }
            ScrapeOutcome::Empty => {
                info!("Scrape completed with no results");
            }
            ScrapeOutcome::Failed(message) => {
                error!(error = %message, "Scrape failed");
                self.alert = Some(message.clone());
                self.error_message = Some(message);
            }
        }
    }

    /// Clears the form and all result state, returning the UI to Idle.
    /// No server interaction.
    pub fn reset(&mut self) {
        info!("Resetting form");
        self.search_term.clear();
        self.total_results.clear();
        self.businesses.clear();
        self.error_message = None;
        self.active_term.clear();
        self.last_export = None;
        self.phase = ScrapePhase::Idle;
        self.focus_search = true;
    }
}
