use crate::catalog::Icon;
use crate::model::User;
use crate::session::SessionState;

pub const HOME_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of checking the session before rendering a protected view.
#[derive(Clone, Debug, PartialEq)]
pub enum Gate<'a> {
    Loading,
    Redirect(&'static str),
    Allow(&'a User),
}

/// The dashboard requires a user. Evaluated again on every session change,
/// so a sign-out elsewhere also sends the visitor away.
pub fn dashboard_gate(state: &SessionState) -> Gate<'_> {
    if state.is_pending() {
        return Gate::Loading;
    }
    match state.user() {
        Some(user) => Gate::Allow(user),
        None => Gate::Redirect(AUTH_PATH),
    }
}

/// Where the auth page sends visitors who are already signed in.
pub fn auth_redirect(state: &SessionState) -> Option<&'static str> {
    state.user().map(|_| DASHBOARD_PATH)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    Navigate {
        label: &'static str,
        path: &'static str,
        icon: Option<Icon>,
        primary: bool,
    },
    SignOut {
        label: &'static str,
        icon: Icon,
    },
}

/// The header shows exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionCluster {
    Anonymous,
    Authenticated,
}

impl ActionCluster {
    pub fn for_state(state: &SessionState) -> Self {
        if state.user().is_some() {
            ActionCluster::Authenticated
        } else {
            ActionCluster::Anonymous
        }
    }

    pub fn actions(&self) -> [HeaderAction; 2] {
        match self {
            ActionCluster::Anonymous => [
                HeaderAction::Navigate {
                    label: "Sign In",
                    path: AUTH_PATH,
                    icon: None,
                    primary: false,
                },
                HeaderAction::Navigate {
                    label: "Get Started",
                    path: AUTH_PATH,
                    icon: None,
                    primary: true,
                },
            ],
            ActionCluster::Authenticated => [
                HeaderAction::Navigate {
                    label: "Dashboard",
                    path: DASHBOARD_PATH,
                    icon: Some(Icon::User),
                    primary: false,
                },
                HeaderAction::SignOut {
                    label: "Sign Out",
                    icon: Icon::LogOut,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::session_for;

    fn signed_in() -> SessionState {
        SessionState::Ready(Some(session_for("a@b.com")))
    }

    #[test]
    fn dashboard_gate_states() {
        assert_eq!(dashboard_gate(&SessionState::Pending), Gate::Loading);
        assert_eq!(
            dashboard_gate(&SessionState::Ready(None)),
            Gate::Redirect("/auth")
        );
        assert_eq!(
            dashboard_gate(&SessionState::Unavailable("timeout".to_string())),
            Gate::Redirect("/auth")
        );
        let state = signed_in();
        match dashboard_gate(&state) {
            Gate::Allow(user) => assert_eq!(user.email.as_deref(), Some("a@b.com")),
            other => panic!("expected access, got {other:?}"),
        }
    }

    #[test]
    fn auth_page_redirects_signed_in_visitors() {
        assert_eq!(auth_redirect(&signed_in()), Some("/dashboard"));
        assert_eq!(auth_redirect(&SessionState::Ready(None)), None);
        assert_eq!(auth_redirect(&SessionState::Pending), None);
    }

    #[test]
    fn exactly_one_cluster() {
        let cases = [
            (SessionState::Pending, ActionCluster::Anonymous),
            (SessionState::Ready(None), ActionCluster::Anonymous),
            (
                SessionState::Unavailable("offline".to_string()),
                ActionCluster::Anonymous,
            ),
            (signed_in(), ActionCluster::Authenticated),
        ];
        for (state, expected) in cases {
            assert_eq!(ActionCluster::for_state(&state), expected);
        }
    }

    #[test]
    fn cluster_actions() {
        let anonymous = ActionCluster::Anonymous.actions();
        assert!(anonymous.iter().all(|action| matches!(
            action,
            HeaderAction::Navigate { path: "/auth", .. }
        )));

        let authenticated = ActionCluster::Authenticated.actions();
        assert!(matches!(
            authenticated[0],
            HeaderAction::Navigate {
                label: "Dashboard",
                path: "/dashboard",
                ..
            }
        ));
        assert!(matches!(authenticated[1], HeaderAction::SignOut { .. }));
    }
}
