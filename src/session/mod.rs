/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    Subscribe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// No identity; only the login view is reachable.
    LoggedOut,

    /// Active identity; dashboard and picker are reachable.
    LoggedIn { email: String },
}

/// Process-wide session: who is logged in and what is on screen.
///
/// Transitions keep the invariant that `Dashboard` and `Subscribe` are only
/// ever shown while a user is logged in.
#[derive(Debug)]
pub struct SessionState {
    session: Session,
    view: View,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Session::LoggedOut,
            view: View::Login,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn active_email(&self) -> Option<&str> {
        match &self.session {
            Session::LoggedOut => None,
            Session::LoggedIn { email } => Some(email),
        }
    }

    /// Sign in and land on the dashboard. The caller has already validated
    /// the identity string.
    pub fn login(&mut self, email: String) {
        self.session = Session::LoggedIn { email };
        self.view = View::Dashboard;
    }

    /// Drop the identity and fall back to the login view. Idempotent.
    pub fn logout(&mut self) {
        self.session = Session::LoggedOut;
        self.view = View::Login;
    }

    /// Switch views. Jumps into `Dashboard`/`Subscribe` are ignored while
    /// logged out; jumping to `Login` keeps the identity (demo strip).
    pub fn navigate(&mut self, view: View) {
        match (view, &self.session) {
            (View::Login, _) => self.view = View::Login,
            (_, Session::LoggedIn { .. }) => self.view = view,
            (_, Session::LoggedOut) => {}
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out_on_login_view() {
        let state = SessionState::new();

        assert_eq!(state.view(), View::Login);
        assert_eq!(state.active_email(), None);
    }

    #[test]
    fn login_lands_on_dashboard() {
        let mut state = SessionState::new();
        state.login("x@y.com".to_string());

        assert_eq!(state.view(), View::Dashboard);
        assert_eq!(state.active_email(), Some("x@y.com"));
    }

    #[test]
    fn logout_forces_login_view() {
        let mut state = SessionState::new();
        state.login("x@y.com".to_string());
        state.navigate(View::Subscribe);

        state.logout();

        assert_eq!(state.view(), View::Login);
        assert_eq!(state.active_email(), None);
    }

    #[test]
    fn navigation_is_guarded_while_logged_out() {
        let mut state = SessionState::new();

        state.navigate(View::Dashboard);
        assert_eq!(state.view(), View::Login);

        state.navigate(View::Subscribe);
        assert_eq!(state.view(), View::Login);
    }

    #[test]
    fn dashboard_and_picker_round_trip() {
        let mut state = SessionState::new();
        state.login("x@y.com".to_string());

        state.navigate(View::Subscribe);
        assert_eq!(state.view(), View::Subscribe);

        state.navigate(View::Dashboard);
        assert_eq!(state.view(), View::Dashboard);
    }

    #[test]
    fn login_view_jump_keeps_identity() {
        let mut state = SessionState::new();
        state.login("x@y.com".to_string());

        state.navigate(View::Login);

        assert_eq!(state.view(), View::Login);
        assert_eq!(state.active_email(), Some("x@y.com"));
    }
}
