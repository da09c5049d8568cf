use std::fmt;
use std::str::FromStr;

use crate::state::AppError;
use crate::timer::{Millis, Timer};

/// Top-level screens.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum View {
    Dashboard,
    Forum,
    Marketplace,
    Chat,
    Tours,
    Profile,
    Reviews,
    Gears,
    Contact,
    Search,
}

impl View {
    pub const ALL: [View; 10] = [
        View::Dashboard,
        View::Forum,
        View::Marketplace,
        View::Chat,
        View::Tours,
        View::Profile,
        View::Reviews,
        View::Gears,
        View::Contact,
        View::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Forum => "forum",
            View::Marketplace => "marketplace",
            View::Chat => "chat",
            View::Tours => "tours",
            View::Profile => "profile",
            View::Reviews => "reviews",
            View::Gears => "gears",
            View::Contact => "contact",
            View::Search => "search",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| AppError::Validation(format!("unknown view '{}'", s)))
    }
}

/// Which screen is up, its deep-link parameter, the search query and the
/// simulated loading phase.
pub struct UiState {
    pub view: View,
    pub view_param: Option<String>,
    pub search_query: String,
    pub loading: bool,
    pub loading_timer: Timer,
    /// App clock.
    pub now: Millis,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            view: View::Dashboard,
            view_param: None,
            search_query: String::new(),
            loading: false,
            loading_timer: Timer::new(),
            now: 0,
            should_quit: false,
        }
    }
}

impl UiState {
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Enter the loading phase for `delay` ms. A pending phase is replaced.
    pub fn begin_loading(&mut self, delay: Millis) {
        if delay == 0 {
            self.loading_timer.cancel();
            self.loading = false;
            return;
        }
        self.loading = true;
        self.loading_timer.start(self.now, delay);
    }

    pub fn cancel_loading(&mut self) {
        self.loading_timer.cancel();
        self.loading = false;
    }

    /// Advance the clock; returns true when the loading phase ended on this tick.
    pub fn tick(&mut self, delta: Millis) -> bool {
        self.now = self.now.saturating_add(delta);
        if self.loading_timer.poll(self.now) {
            self.loading = false;
            return true;
        }
        false
    }
}
