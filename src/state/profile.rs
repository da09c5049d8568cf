use crate::model::{User, DEFAULT_JOIN_DATE, NO_BIO, NO_GEAR};

/// Profile modal: hidden, or showing exactly one user.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileOverlay {
    #[default]
    Hidden,
    Shown(User),
}

/// What the profile card displays, with placeholders filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub username: String,
    pub badge: Option<String>,
    pub member_since: String,
    pub bio: String,
    /// `None` renders the "no gear" placeholder.
    pub gear: Option<Vec<String>>,
}

impl ProfileCard {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            badge: user.badge.map(|b| b.to_string()),
            member_since: user
                .join_date
                .clone()
                .unwrap_or_else(|| DEFAULT_JOIN_DATE.to_string()),
            bio: user.bio.clone().unwrap_or_else(|| NO_BIO.to_string()),
            gear: user.gear_list.clone(),
        }
    }

    pub fn gear_line(&self) -> String {
        match &self.gear {
            Some(gear) => gear.join(", "),
            None => NO_GEAR.to_string(),
        }
    }
}

/// State management for the profile overlay
#[derive(Default)]
pub struct ProfileState {
    pub overlay: ProfileOverlay,
}

impl ProfileState {
    /// Show `user`, replacing whoever is on screen.
    pub fn set_profile_for_viewing(&mut self, user: User) {
        self.overlay = ProfileOverlay::Shown(user);
    }

    pub fn close_profile_view(&mut self) {
        self.overlay = ProfileOverlay::Hidden;
    }

    /// A click outside the overlay surface closes it; inside it does nothing.
    pub fn click(&mut self, inside_surface: bool) {
        if !inside_surface {
            self.close_profile_view();
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.overlay, ProfileOverlay::Shown(_))
    }

    pub fn shown_user(&self) -> Option<&User> {
        match &self.overlay {
            ProfileOverlay::Shown(user) => Some(user),
            ProfileOverlay::Hidden => None,
        }
    }

    pub fn card(&self) -> Option<ProfileCard> {
        self.shown_user().map(ProfileCard::from_user)
    }
}
