//! Timer utilities for search time management.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::sync::SearchToken;

/// Calculate the duration from now until a deadline, if the deadline is in the future.
#[inline]
fn duration_until(deadline: Instant) -> Option<Duration> {
    let now = Instant::now();
    if deadline > now {
        Some(deadline - now)
    } else {
        None
    }
}

/// A background thread that cancels one search when its budget runs out.
///
/// The timer only ever cancels the search id it was armed for. It is not
/// joined on drop; the thread finishes on its own after the budget elapses.
pub struct DeadlineTimer {
    handle: Option<JoinHandle<()>>,
    token: SearchToken,
}

impl DeadlineTimer {
    /// Arm a timer that cancels `token` after `budget`.
    ///
    /// A zero budget cancels immediately and spawns nothing. A budget too
    /// large to form a deadline also spawns nothing and never cancels.
    #[must_use]
    pub fn start(budget: Duration, token: SearchToken) -> Self {
        let Some(deadline) = Instant::now().checked_add(budget) else {
            log::debug!("search {} has no reachable deadline, running untimed", token.id());
            return DeadlineTimer {
                handle: None,
                token,
            };
        };
        let handle = match duration_until(deadline) {
            Some(wait) => {
                let timer_token = token.clone();
                let spawned = thread::Builder::new()
                    .name("search-timer".to_string())
                    .spawn(move || {
                        thread::sleep(wait);
                        if !timer_token.is_cancelled() {
                            log::debug!("search {} reached its time budget", timer_token.id());
                        }
                        timer_token.cancel();
                    });
                match spawned {
                    Ok(handle) => Some(handle),
                    Err(err) => {
                        log::warn!("could not spawn search timer, stopping immediately: {err}");
                        token.cancel();
                        None
                    }
                }
            }
            None => {
                token.cancel();
                None
            }
        };
        DeadlineTimer { handle, token }
    }

    /// Check if the search this timer guards has been cancelled.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for the timer thread to finish.
    pub fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
