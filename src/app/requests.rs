//! Request coordinator for the search pipeline.
//!
//! Every committed query either clears the results (empty query) or issues a
//! search tagged with a fresh generation number. A response is applied only if
//! its generation is still the in-flight one, so a slow response for an older
//! query can never overwrite a newer one ("last request wins"). Zellij cannot
//! abort a web request; superseding a generation is what cancels it.

/// Outcome of dispatching a committed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Empty query: clear results, issue nothing.
    Cleared,
    /// Issue a search for `query` tagged with `generation`.
    Issue { generation: u64, query: String },
}

/// Whether an arriving search response may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Current,
    Stale,
}

impl Settlement {
    #[must_use]
    pub const fn is_stale(self) -> bool {
        matches!(self, Self::Stale)
    }
}

/// Tracks the latest issued search generation.
#[derive(Debug, Clone, Default)]
pub struct RequestCoordinator {
    /// Last generation handed out; strictly increasing.
    latest: u64,
    /// Generation whose response is still awaited, if any.
    in_flight: Option<u64>,
}

impl RequestCoordinator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: 0,
            in_flight: None,
        }
    }

    /// Dispatches a committed query, superseding any in-flight search.
    pub fn dispatch(&mut self, query: &str) -> Dispatch {
        if query.is_empty() {
            self.clear();
            return Dispatch::Cleared;
        }

        self.supersede();
        self.latest += 1;
        self.in_flight = Some(self.latest);

        tracing::debug!(generation = self.latest, query = %query, "search issued");
        Dispatch::Issue {
            generation: self.latest,
            query: query.to_string(),
        }
    }

    /// Cancels the in-flight search (if any) without issuing a new one.
    pub fn clear(&mut self) {
        self.supersede();
    }

    /// Decides whether the response for `generation` may be applied.
    ///
    /// Settling the current generation ends its flight, so a duplicate
    /// delivery of the same response is stale.
    pub fn settle(&mut self, generation: u64) -> Settlement {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
            Settlement::Current
        } else {
            tracing::debug!(
                generation = generation,
                in_flight = ?self.in_flight,
                latest = self.latest,
                "dropping stale search response"
            );
            Settlement::Stale
        }
    }

    #[must_use]
    pub const fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    fn supersede(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(generation = previous, "in-flight search superseded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issued(dispatch: Dispatch) -> u64 {
        match dispatch {
            Dispatch::Issue { generation, .. } => generation,
            Dispatch::Cleared => panic!("expected a search to be issued"),
        }
    }

    #[test]
    fn last_request_wins_regardless_of_arrival_order() {
        let mut coordinator = RequestCoordinator::new();

        let first = issued(coordinator.dispatch("a"));
        let second = issued(coordinator.dispatch("ab"));

        assert_eq!(coordinator.settle(second), Settlement::Current);
        assert_eq!(coordinator.settle(first), Settlement::Stale);
    }

    #[test]
    fn generations_increase_monotonically() {
        let mut coordinator = RequestCoordinator::new();

        let generations: Vec<u64> = ["a", "b", "c"]
            .iter()
            .map(|q| issued(coordinator.dispatch(q)))
            .collect();

        assert_eq!(generations, vec![1, 2, 3]);
        assert_eq!(coordinator.in_flight(), Some(3));
    }

    #[test]
    fn empty_query_clears_and_cancels() {
        let mut coordinator = RequestCoordinator::new();
        let generation = issued(coordinator.dispatch("alien"));

        assert_eq!(coordinator.dispatch(""), Dispatch::Cleared);
        assert_eq!(coordinator.in_flight(), None);
        assert_eq!(coordinator.settle(generation), Settlement::Stale);
    }

    #[test]
    fn duplicate_delivery_is_stale() {
        let mut coordinator = RequestCoordinator::new();
        let generation = issued(coordinator.dispatch("heat"));

        assert_eq!(coordinator.settle(generation), Settlement::Current);
        assert_eq!(coordinator.settle(generation), Settlement::Stale);
    }

    #[test]
    fn clear_without_flight_is_harmless() {
        let mut coordinator = RequestCoordinator::new();
        coordinator.clear();
        assert_eq!(issued(coordinator.dispatch("x")), 1);
    }
}
