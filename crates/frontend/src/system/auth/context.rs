use contracts::shared::metadata::{FormValues, ValidationError};
use contracts::system::auth::AuthSession;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Auth context provider component.
///
/// The session lives only in this signal; reloading the page signs out.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Validate the login form and open a session
pub fn do_login(
    values: &FormValues,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ValidationError> {
    let session = AuthSession::login(values)?;
    set_auth_state.set(AuthState {
        session: Some(session),
    });
    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    log::info!("Signed out");
    set_auth_state.set(AuthState::default());
}
