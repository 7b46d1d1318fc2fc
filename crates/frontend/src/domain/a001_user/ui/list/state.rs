use contracts::domain::a001_user::{User, UserStatus};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct UsersListState {
    pub search_query: String,
    /// `None` shows every user
    pub status_filter: Option<UserStatus>,
}

impl UsersListState {
    pub fn accepts(&self, user: &User) -> bool {
        user.matches(&self.search_query)
            && self.status_filter.map_or(true, |status| user.status == status)
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}
