use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use log::{debug, error, info, warn};

use super::{Lifecycle, Notice, ResultCountPreference, SearchState};
use crate::recommend::{
	RecommendError, RecommendRequest, RecommendResponse, RecommendationService, ResultItem,
};

/// Notice text used when no custom text is configured.
pub const DEFAULT_ERROR_NOTICE: &str = "Recommendation error - check backend";

/// What to do with a response that belongs to an older request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
	/// Drop responses whose ticket is not the latest one issued.
	#[default]
	Discard,
	/// Apply every response as it arrives; the last one to resolve wins.
	Apply,
}

impl StalePolicy {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Discard => "discard",
			Self::Apply => "apply",
		}
	}
}

impl FromStr for StalePolicy {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"discard" => Ok(Self::Discard),
			"apply" => Ok(Self::Apply),
			other => Err(format!("unknown stale response policy `{other}`")),
		}
	}
}

struct Completion {
	ticket: u64,
	outcome: Result<RecommendResponse, RecommendError>,
}

/// Owns the search lifecycle and the only mutable copy of [`SearchState`].
///
/// Requests run on short-lived worker threads; their completions are applied
/// when the UI loop calls [`pump_responses`](Self::pump_responses), so every
/// mutation happens on the caller's thread.
pub struct SearchOrchestrator {
	service: Arc<dyn RecommendationService>,
	state: SearchState,
	policy: StalePolicy,
	error_notice: String,
	next_ticket: u64,
	latest_ticket: Option<u64>,
	in_flight: usize,
	tx: Sender<Completion>,
	rx: Receiver<Completion>,
	notices: VecDeque<Notice>,
}

impl SearchOrchestrator {
	pub fn new(service: Arc<dyn RecommendationService>) -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			service,
			state: SearchState::default(),
			policy: StalePolicy::default(),
			error_notice: DEFAULT_ERROR_NOTICE.to_string(),
			next_ticket: 0,
			latest_ticket: None,
			in_flight: 0,
			tx,
			rx,
			notices: VecDeque::new(),
		}
	}

	#[must_use]
	pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
		self.policy = policy;
		self
	}

	#[must_use]
	pub fn with_error_notice(mut self, message: impl Into<String>) -> Self {
		self.error_notice = message.into();
		self
	}

	#[must_use]
	pub fn with_preference(mut self, preference: ResultCountPreference) -> Self {
		self.state.preference = preference;
		self
	}

	/// Read-only view of the current state.
	#[must_use]
	pub fn state(&self) -> &SearchState {
		&self.state
	}

	#[must_use]
	pub fn stale_policy(&self) -> StalePolicy {
		self.policy
	}

	/// Number of requests that have been issued but not yet applied or dropped.
	#[must_use]
	pub fn in_flight(&self) -> usize {
		self.in_flight
	}

	/// Submit `text` as a new query.
	///
	/// Blank input is ignored. Otherwise exactly one request is dispatched and
	/// its ticket is returned. Earlier in-flight requests are left running.
	pub fn submit_query(&mut self, text: &str) -> Option<u64> {
		let query = text.trim();
		if query.is_empty() {
			return None;
		}

		self.next_ticket = self.next_ticket.wrapping_add(1);
		let ticket = self.next_ticket;
		self.latest_ticket = Some(ticket);
		self.in_flight += 1;

		self.state.query = query.to_string();
		self.state.lifecycle = Lifecycle::Loading;
		self.state.selected = None;

		let request = RecommendRequest {
			query: self.state.query.clone(),
			top_n: self.state.preference.count(),
		};
		debug!(
			"dispatching request #{ticket}: {:?} (top_n={})",
			request.query, request.top_n
		);

		let service = Arc::clone(&self.service);
		let tx = self.tx.clone();
		let spawned = thread::Builder::new()
			.name(format!("recommend-{ticket}"))
			.spawn(move || {
				let outcome = service.recommend(&request);
				let _ = tx.send(Completion { ticket, outcome });
			});
		if let Err(err) = spawned {
			self.resolve(Completion {
				ticket,
				outcome: Err(RecommendError::Client(err.to_string())),
			});
		}

		Some(ticket)
	}

	/// Change how many results the next query requests.
	pub fn set_result_count_preference(&mut self, preference: ResultCountPreference) {
		self.state.preference = preference;
	}

	/// Open the detail overlay for `item`, which must belong to the current
	/// result set. Returns whether the selection changed.
	pub fn select_item(&mut self, item: &ResultItem) -> bool {
		if !self.state.results.iter().any(|candidate| candidate == item) {
			warn!("ignoring selection of {:?}: not in the current results", item.title);
			return false;
		}
		self.state.selected = Some(item.clone());
		true
	}

	/// Select the result at `index` in the current result set.
	pub fn select_index(&mut self, index: usize) -> bool {
		match self.state.results.get(index) {
			Some(item) => {
				self.state.selected = Some(item.clone());
				true
			}
			None => false,
		}
	}

	/// Close the detail overlay.
	pub fn dismiss_overlay(&mut self) {
		self.state.selected = None;
	}

	/// Apply every completion that has arrived. Returns true if any did.
	pub fn pump_responses(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.rx.try_recv() {
				Ok(completion) => {
					self.resolve(completion);
					changed = true;
				}
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
		changed
	}

	/// Pop the oldest pending notice.
	pub fn take_notice(&mut self) -> Option<Notice> {
		self.notices.pop_front()
	}

	#[must_use]
	pub fn pending_notices(&self) -> usize {
		self.notices.len()
	}

	fn resolve(&mut self, completion: Completion) {
		let Completion { ticket, outcome } = completion;
		self.in_flight = self.in_flight.saturating_sub(1);

		let is_latest = self.latest_ticket == Some(ticket);
		if !is_latest && self.policy == StalePolicy::Discard {
			match &outcome {
				Ok(_) => warn!("discarding response for stale request #{ticket}"),
				Err(err) => warn!("discarding failure for stale request #{ticket}: {err}"),
			}
			return;
		}

		match outcome {
			Ok(response) => {
				let results = response.into_results();
				info!("request #{ticket} returned {} results", results.len());
				self.state.results = results;
				self.state.selected = None;
				self.state.revision = self.state.revision.wrapping_add(1);
				self.state.lifecycle = Lifecycle::Populated;
			}
			Err(err) => {
				error!("request #{ticket} failed: {err}");
				self.notices
					.push_back(Notice::new(self.error_notice.clone(), err.to_string()));
				self.state.lifecycle = Lifecycle::Failed;
			}
		}
	}
}
