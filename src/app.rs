// src/app.rs

use tracing::{debug, info};

use crate::fixtures::FixtureSet;
use crate::global_prefs::PortalPrefs;
use crate::model::User;
use crate::state::tours::{APPLY_TOAST_BODY, APPLY_TOAST_TITLE};
use crate::state::{
    AppResult, ChatState, ContactState, DashboardState, FeedState, ForumState, GearsState, MarketplaceState,
    NotificationState, ProfileState, ReviewsState, SearchState, ToursState, UiState, View,
};
use crate::store::FixtureStore;
use crate::timer::Millis;

/// State of the screen that is currently mounted. Rebuilt on every navigation,
/// so per-screen state (likes, drafts, filters) does not survive leaving it.
pub enum Screen {
    Dashboard(DashboardState),
    Forum(ForumState),
    Marketplace(MarketplaceState),
    Chat(ChatState),
    Tours(ToursState),
    Reviews(ReviewsState),
    Gears(GearsState),
    Contact(ContactState),
    Search(SearchState),
}

impl Screen {
    fn mount(view: View, param: Option<&str>, store: &FixtureStore, prefs: &PortalPrefs, query: &str) -> Self {
        let store = store.clone();
        match view {
            // The profile view is an overlay; callers never mount it.
            View::Dashboard | View::Profile => Screen::Dashboard(DashboardState::new(store)),
            View::Forum => Screen::Forum(ForumState::new(store, prefs.forum_page_size, param)),
            View::Marketplace => Screen::Marketplace(MarketplaceState::new(store, param)),
            View::Chat => Screen::Chat(ChatState::new(store, prefs.clear_unread_on_open)),
            View::Tours => Screen::Tours(ToursState::new(store)),
            View::Reviews => Screen::Reviews(ReviewsState::new(store, param, prefs.reviews_collapsed_limit)),
            View::Gears => Screen::Gears(GearsState::new(store, param, query)),
            View::Contact => Screen::Contact(ContactState::default()),
            View::Search => Screen::Search(SearchState::new(&store, query)),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Screen::Dashboard(_) => View::Dashboard,
            Screen::Forum(_) => View::Forum,
            Screen::Marketplace(_) => View::Marketplace,
            Screen::Chat(_) => View::Chat,
            Screen::Tours(_) => View::Tours,
            Screen::Reviews(_) => View::Reviews,
            Screen::Gears(_) => View::Gears,
            Screen::Contact(_) => View::Contact,
            Screen::Search(_) => View::Search,
        }
    }
}

pub struct App {
    pub store: FixtureStore,
    pub prefs: PortalPrefs,
    pub ui: UiState,
    pub screen: Screen,
    pub profile: ProfileState,
    pub notifications: NotificationState,
    pub feed: FeedState,
}

impl App {
    /// Seed the store from the configured fixtures and land on the dashboard.
    pub fn new(prefs: PortalPrefs) -> AppResult<Self> {
        let seed = FixtureSet::from_prefs(&prefs)?;
        Ok(Self::with_store(FixtureStore::new(seed), prefs))
    }

    pub fn with_store(store: FixtureStore, prefs: PortalPrefs) -> Self {
        let screen = Screen::mount(View::Dashboard, None, &store, &prefs, "");
        let feed = FeedState::new(store.clone());
        Self {
            store,
            prefs,
            ui: UiState::default(),
            screen,
            profile: ProfileState::default(),
            notifications: NotificationState::default(),
            feed,
        }
    }

    /// Switch screens, optionally deep-linking to an entity id.
    pub fn change_view(&mut self, view: View, param: Option<String>) {
        if view == View::Profile {
            let me = self.store.current_user();
            self.show_profile(me);
            return;
        }
        info!(view = %view, param = ?param, "navigate");
        if view != View::Search {
            self.ui.search_query.clear();
        }
        self.ui.view = view;
        self.ui.view_param = param;
        self.notifications.clear_notification();
        self.ui.begin_loading(self.prefs.loading_delay_ms);
        self.screen = Screen::mount(
            view,
            self.ui.view_param.as_deref(),
            &self.store,
            &self.prefs,
            &self.ui.search_query,
        );
    }

    /// Run a global search and show its results straight away.
    pub fn search(&mut self, query: &str) {
        info!(query, "search");
        self.ui.search_query = query.to_string();
        self.ui.view = View::Search;
        self.ui.view_param = None;
        self.ui.cancel_loading();
        self.notifications.clear_notification();
        self.screen = Screen::Search(SearchState::new(&self.store, query));
    }

    /// Open the profile overlay for `user`, or for the viewer when `None`.
    pub fn show_profile(&mut self, user: Option<User>) {
        let Some(user) = user.or_else(|| self.store.current_user()) else {
            debug!("no user to show");
            return;
        };
        debug!(user = %user.id, "profile overlay");
        self.profile.set_profile_for_viewing(user);
    }

    pub fn close_profile(&mut self) {
        self.profile.close_profile_view();
    }

    /// Advance the app clock by `delta` ms and fire due timers.
    pub fn on_tick(&mut self, delta: Millis) {
        if self.ui.tick(delta) {
            debug!(view = %self.ui.view, "loading finished");
        }
        if self.notifications.tick(self.ui.now) {
            debug!("toast dismissed");
        }
    }

    pub fn is_loading(&self) -> bool {
        self.ui.loading
    }

    /// The mounted screen, or `None` while the loading placeholder is up.
    pub fn visible_screen(&self) -> Option<&Screen> {
        (!self.ui.loading).then_some(&self.screen)
    }

    pub fn set_notification(&mut self, title: impl Into<String>, body: impl Into<String>, ms: Option<Millis>) {
        self.notifications.set_notification(title, body, ms, self.ui.now);
    }

    /// Apply to a tour lottery from the tours screen and confirm with a toast.
    pub fn apply_to_tour(&mut self, id: &str) -> AppResult<()> {
        let Screen::Tours(tours) = &self.screen else {
            return Err(crate::state::AppError::Validation("Open the tours screen first.".to_string()));
        };
        tours.apply(id)?;
        let toast_ms = self.prefs.toast_ms;
        self.set_notification(APPLY_TOAST_TITLE, APPLY_TOAST_BODY, Some(toast_ms));
        Ok(())
    }
}
