//! Transient toast notifications.
//!
//! A toast is on screen for its lifetime, then spends [`EXIT_ANIMATION_MS`]
//! sliding out before it is removed.

use std::collections::VecDeque;

use chrono::{DateTime, TimeDelta, Utc};

/// Default on-screen lifetime.
pub const DEFAULT_TTL_MS: i64 = 3_000;

/// Longest on-screen lifetime; longer requests are clamped to it.
pub const MAX_TTL_MS: i64 = 60_000;

/// Slide-out duration after the lifetime ends.
pub const EXIT_ANIMATION_MS: i64 = 300;

/// Where a toast is in its lifecycle at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Showing,
    Leaving,
    Gone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NotificationQueue {
    ttl: TimeDelta,
    items: VecDeque<Notification>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(TimeDelta::milliseconds(DEFAULT_TTL_MS))
    }
}

impl NotificationQueue {
    /// Queue whose toasts stay on screen for `ttl`, clamped to
    /// `0..=MAX_TTL_MS`.
    #[must_use]
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            ttl: ttl.clamp(TimeDelta::zero(), TimeDelta::milliseconds(MAX_TTL_MS)),
            items: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    pub fn push(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        let message = message.into();
        tracing::debug!(%message, "notification shown");
        self.items.push_back(Notification {
            message,
            shown_at: now,
        });
    }

    #[must_use]
    pub fn phase(&self, notification: &Notification, now: DateTime<Utc>) -> Phase {
        let age = now - notification.shown_at;
        if age < self.ttl {
            Phase::Showing
        } else if age < self.lifetime() {
            Phase::Leaving
        } else {
            Phase::Gone
        }
    }

    /// Drop toasts whose exit animation has finished. Returns how many were removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        let lifetime = self.lifetime();
        self.items.retain(|n| now - n.shown_at < lifetime);
        before - self.items.len()
    }

    /// Time from showing a toast to removing it.
    fn lifetime(&self) -> TimeDelta {
        self.ttl + TimeDelta::milliseconds(EXIT_ANIMATION_MS)
    }

    /// Toasts fully on screen at `now`.
    #[must_use]
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| self.phase(n, now) == Phase::Showing)
            .collect()
    }

    /// All toasts not yet removed, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
