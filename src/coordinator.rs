//! Search coordinator
//!
//! Owns the query text, the current results and the debounce timer. Time is
//! passed in by the caller, so the state machine never sleeps or spawns; the
//! event loop calls [`SearchCoordinator::poll`] and dispatches whatever
//! request it returns.
//!
//! Every dispatched request carries a sequence number. A response is applied
//! only if its number is higher than any response seen before and it was
//! issued after the last clear, so a slow response for an old query can never
//! replace newer results.

use crate::employee::Employee;
use crate::error::SearchError;
use std::time::{Duration, Instant};

/// A search the event loop should send to the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// What happened to a response handed to the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Results replaced with this many records
    Applied(usize),
    /// A newer response or a clear superseded it
    Stale,
    /// Latest request failed; results left unchanged
    Failed,
}

#[derive(Debug)]
pub struct SearchCoordinator {
    search_text: String,
    results: Vec<Employee>,
    delay: Duration,
    /// Armed debounce timer, as the instant it fires
    deadline: Option<Instant>,
    next_seq: u64,
    /// Highest sequence number whose response has been handled
    seen_seq: u64,
    /// Requests below this number were issued before the last clear
    floor_seq: u64,
    in_flight: usize,
    last_error: Option<String>,
}

impl SearchCoordinator {
    pub fn new(delay: Duration) -> Self {
        Self {
            search_text: String::new(),
            results: Vec::new(),
            delay,
            deadline: None,
            next_seq: 1,
            seen_seq: 0,
            floor_seq: 1,
            in_flight: 0,
            last_error: None,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn results(&self) -> &[Employee] {
        &self.results
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of dispatched requests still awaiting a response
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// When the armed timer will fire, if one is armed
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_busy(&self) -> bool {
        self.deadline.is_some() || self.in_flight > 0
    }

    /// Handle a change notification from the input.
    ///
    /// Any pending timer is cancelled. A blank query clears the results right
    /// away; anything else arms a fresh timer.
    pub fn set_search_text(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text == self.search_text {
            return;
        }
        self.search_text = text;
        self.deadline = None;

        if self.search_text.trim().is_empty() {
            self.results.clear();
            self.last_error = None;
            self.floor_seq = self.next_seq;
            tracing::debug!("query cleared");
        } else {
            self.deadline = Some(now + self.delay);
        }
    }

    /// Fire the timer if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                let seq = self.next_seq;
                self.next_seq += 1;
                self.in_flight += 1;
                tracing::debug!(seq, query = %self.search_text, "debounce fired");
                Some(SearchRequest {
                    seq,
                    query: self.search_text.clone(),
                })
            }
            _ => None,
        }
    }

    /// Handle the outcome of request `seq`.
    pub fn apply_response(
        &mut self,
        seq: u64,
        response: Result<Vec<Employee>, SearchError>,
    ) -> ResponseOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        if seq < self.floor_seq || seq <= self.seen_seq {
            match &response {
                Ok(employees) => {
                    tracing::debug!(seq, count = employees.len(), "discarding stale response")
                }
                Err(err) => tracing::debug!(seq, error = %err, "discarding stale failure"),
            }
            return ResponseOutcome::Stale;
        }
        self.seen_seq = seq;

        match response {
            Ok(employees) => {
                let count = employees.len();
                self.results = employees;
                self.last_error = None;
                tracing::info!(seq, query = %self.search_text, count, "results updated");
                ResponseOutcome::Applied(count)
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "employee search failed");
                self.last_error = Some(err.summary());
                ResponseOutcome::Failed
            }
        }
    }
}

impl Default for SearchCoordinator {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DEBOUNCE)
    }
}
