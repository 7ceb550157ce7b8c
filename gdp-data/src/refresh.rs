//! Which fetch result reaches the screen.
//!
//! Every country selection starts a fetch and nothing cancels the earlier
//! ones, so completions can arrive out of order. Each fetch carries a
//! generation number and only the latest generation is applied.

use crate::series::{normalize, NormalizedSeries};
use gdp_econ::{Country, FetchError, RawObservation};
use gdp_utils::dates::ZonePolicy;
use log::{debug, info, warn};

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub country: Country,
}

/// Monotonic generation counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchGenerations {
    latest: u64,
}

impl FetchGenerations {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

/// Outcome of handing a completed fetch to [`SeriesView::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer fetch was started after this one; the result was dropped.
    Stale,
}

/// Everything the dashboard displays: selection, series, loading flag and
/// error message.
///
/// On a failed fetch the error is shown and the series is cleared, so the
/// previous country's numbers never appear under the new country's title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesView {
    country: Country,
    series: NormalizedSeries,
    loading: bool,
    error: Option<String>,
    generations: FetchGenerations,
    zone: ZonePolicy,
}

impl SeriesView {
    pub fn new(country: Country, zone: ZonePolicy) -> Self {
        Self {
            country,
            zone,
            ..Self::default()
        }
    }

    /// Start a fetch for `country`; returns the ticket to complete it with.
    pub fn begin(&mut self, country: Country) -> FetchTicket {
        self.country = country;
        self.loading = true;
        self.error = None;
        let generation = self.generations.issue();
        debug!("Fetch #{} started for {}", generation, country.slug());
        FetchTicket {
            generation,
            country,
        }
    }

    /// Apply a finished fetch if it is still the latest one.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<RawObservation>, FetchError>,
    ) -> Completion {
        if !self.generations.is_current(ticket.generation) {
            debug!(
                "Dropping stale fetch #{} for {} (latest is #{})",
                ticket.generation,
                ticket.country.slug(),
                self.generations.latest()
            );
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(records) => {
                self.series = normalize(&records, self.zone);
                self.error = None;
                info!(
                    "Showing {} points for {}",
                    self.series.len(),
                    ticket.country.slug()
                );
            }
            Err(e) => {
                warn!("Fetch failed for {}: {}", ticket.country.slug(), e);
                self.series = NormalizedSeries::default();
                self.error = Some(e.to_string());
            }
        }
        Completion::Applied
    }

    /// Show an error without a fetch (e.g. no API key configured).
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.series = NormalizedSeries::default();
        self.error = Some(message.into());
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn series(&self) -> &NormalizedSeries {
        &self.series
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn zone(&self) -> ZonePolicy {
        self.zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(country: &str, values: &[f64]) -> Vec<RawObservation> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| RawObservation::new(Some(country), &format!("{}-12-31", 1960 + i), *v))
            .collect()
    }

    #[test]
    fn test_generations_are_monotonic() {
        let mut generations = FetchGenerations::default();
        let first = generations.issue();
        let second = generations.issue();
        assert!(second > first);
        assert!(!generations.is_current(first));
        assert!(generations.is_current(second));
    }

    #[test]
    fn test_begin_sets_loading_and_clears_error() {
        let mut view = SeriesView::new(Country::Mexico, ZonePolicy::Utc);
        view.fail("boom");
        let ticket = view.begin(Country::Sweden);
        assert_eq!(ticket.country, Country::Sweden);
        assert!(view.loading());
        assert_eq!(view.error(), None);
        assert_eq!(view.country(), Country::Sweden);
    }

    #[test]
    fn test_success_replaces_series() {
        let mut view = SeriesView::new(Country::Mexico, ZonePolicy::Utc);
        let ticket = view.begin(Country::Mexico);
        let outcome = view.complete(ticket, Ok(records("Mexico", &[5.0, 10.0])));
        assert_eq!(outcome, Completion::Applied);
        assert!(!view.loading());
        assert_eq!(view.series().growth_rates(), &[0.0, 100.0]);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut view = SeriesView::new(Country::Mexico, ZonePolicy::Utc);
        let mexico = view.begin(Country::Mexico);
        let sweden = view.begin(Country::Sweden);

        // Sweden resolves first, then the superseded Mexico request
        assert_eq!(
            view.complete(sweden, Ok(records("Sweden", &[1.0, 2.0, 3.0]))),
            Completion::Applied
        );
        assert_eq!(
            view.complete(mexico, Ok(records("Mexico", &[5.0]))),
            Completion::Stale
        );
        assert_eq!(view.series().len(), 3);
        assert_eq!(view.country(), Country::Sweden);
    }

    #[test]
    fn test_stale_completion_does_not_end_loading() {
        let mut view = SeriesView::new(Country::Mexico, ZonePolicy::Utc);
        let mexico = view.begin(Country::Mexico);
        let _thailand = view.begin(Country::Thailand);
        view.complete(mexico, Ok(records("Mexico", &[5.0])));
        assert!(view.loading());
        assert!(view.series().is_empty());
    }

    #[test]
    fn test_failure_sets_error_and_clears_series() {
        let mut view = SeriesView::new(Country::Mexico, ZonePolicy::Utc);
        let ticket = view.begin(Country::Mexico);
        view.complete(ticket, Ok(records("Mexico", &[5.0, 10.0])));

        let ticket = view.begin(Country::NewZealand);
        let outcome = view.complete(
            ticket,
            Err(FetchError::Status {
                status: 500,
                country: "new zealand".to_string(),
            }),
        );
        assert_eq!(outcome, Completion::Applied);
        assert!(view.series().is_empty());
        assert_eq!(
            view.error(),
            Some("unexpected HTTP status 500 fetching GDP for 'new zealand'")
        );
    }

    #[test]
    fn test_empty_success_is_not_an_error() {
        let mut view = SeriesView::new(Country::Thailand, ZonePolicy::Utc);
        let ticket = view.begin(Country::Thailand);
        view.complete(ticket, Ok(Vec::new()));
        assert!(view.series().is_empty());
        assert_eq!(view.error(), None);
    }
}
