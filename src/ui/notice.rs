use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::search::Notice;

/// How long a banner stays up unless a key dismisses it first.
pub(crate) const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Queue of failure banners. One banner is visible at a time so every
/// failure gets its own turn on screen.
#[derive(Debug)]
pub(crate) struct NoticeBoard {
	queue: VecDeque<Notice>,
	current: Option<(Notice, Instant)>,
	ttl: Duration,
}

impl NoticeBoard {
	pub(crate) fn new(ttl: Duration) -> Self {
		Self {
			queue: VecDeque::new(),
			current: None,
			ttl,
		}
	}

	pub(crate) fn push(&mut self, notice: Notice) {
		self.queue.push_back(notice);
	}

	/// Expire the visible banner if its time is up and promote the next one.
	pub(crate) fn tick(&mut self, now: Instant) {
		if let Some((_, expires_at)) = &self.current
			&& now >= *expires_at
		{
			self.current = None;
		}
		if self.current.is_none()
			&& let Some(next) = self.queue.pop_front()
		{
			self.current = Some((next, now + self.ttl));
		}
	}

	/// Hide the visible banner. Returns whether one was showing.
	pub(crate) fn dismiss(&mut self) -> bool {
		self.current.take().is_some()
	}

	pub(crate) fn current(&self) -> Option<&Notice> {
		self.current.as_ref().map(|(notice, _)| notice)
	}

	pub(crate) fn pending(&self) -> usize {
		self.queue.len()
	}
}

impl Default for NoticeBoard {
	fn default() -> Self {
		Self::new(NOTICE_TTL)
	}
}
