use std::time::{Duration, Instant};

use crate::domain::weather::Condition;

/// How long the icon stays hidden while it swaps to a new condition.
pub const ICON_FADE: Duration = Duration::from_millis(500);

/// Condition icon with a short blank gap whenever the condition changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTransition {
    shown: Condition,
    pending: Option<(Condition, Instant)>,
}

impl IconTransition {
    #[must_use]
    pub fn new(condition: Condition) -> Self {
        Self {
            shown: condition,
            pending: None,
        }
    }

    /// Starts hiding the icon if `condition` differs from what is on screen or
    /// already queued. A newer request restarts the gap.
    pub fn request(&mut self, condition: Condition, now: Instant) {
        let target = self.pending.map_or(self.shown, |(pending, _)| pending);
        if target == condition {
            return;
        }
        self.pending = Some((condition, now));
    }

    pub fn settle(&mut self, now: Instant) {
        if let Some((condition, since)) = self.pending
            && now.saturating_duration_since(since) >= ICON_FADE
        {
            self.shown = condition;
            self.pending = None;
        }
    }

    /// `None` while the icon is hidden.
    #[must_use]
    pub fn visible(&self) -> Option<Condition> {
        if self.pending.is_some() {
            None
        } else {
            Some(self.shown)
        }
    }
}
