//! App-wide session context: the current login pair as a signal, restored
//! from storage on mount and revalidated against the backend.

use contracts::domain::user::{User, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::storage;
use crate::domain::auth::api;

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::default());

    // Restore from storage immediately, then revalidate the token against
    // /auth/me. The silent variant keeps a stale token on a public page from
    // bouncing to the login screen; it just clears the session.
    Effect::new(move |_| {
        if let Some(token) = storage::token() {
            set_session.set(SessionState {
                token: Some(token.clone()),
                user: storage::user(),
            });
            spawn_local(async move {
                match api::me_silent().await {
                    Ok(user) => set_session.set(SessionState {
                        token: Some(token),
                        user: Some(user),
                    }),
                    Err(_) => {
                        storage::clear_session();
                        set_session.set(SessionState::default());
                    }
                }
            });
        }
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Drop the stored credentials and reset the in-memory session.
pub fn do_logout(set_session: WriteSignal<SessionState>) {
    storage::clear_session();
    set_session.set(SessionState::default());
}
