//! Client-side route guard.
//!
//! The dashboard front end guards navigation and UI subtrees with the same
//! gate the server middleware uses; this module is the UI-framework-agnostic
//! state machine behind that. It decides against a cached `Session`, so it
//! is a rendering convenience only; the server guards remain authoritative
//! for every request.

use crate::authz::{self, Decision, Principal, Requirement};

/// Client-cached authentication state. `Loading` covers the window between
/// app start and the login/whoami response landing.
#[derive(Debug, Clone)]
pub enum Session {
    Loading,
    Anonymous,
    Authenticated(Principal),
}

impl Session {
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Session::Authenticated(p) => Some(p),
            _ => None,
        }
    }
}

/// What the UI should do for a guarded subtree. Exactly one of these holds
/// at a time; in particular children and fallback can never both render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still loading; render a loading affordance, neither children
    /// nor fallback.
    Pending,
    /// Render the guarded children.
    Render,
    /// Render the guard's fallback (e.g. an access-denied panel).
    Fallback,
    /// Navigate away, typically to login or an unauthorized page.
    Redirect(String),
}

#[derive(Debug, Clone)]
enum DenyBehavior {
    Fallback,
    Redirect(String),
}

/// Declarative guard for a route or UI subtree.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    requirement: Option<Requirement>,
    login_path: String,
    on_deny: DenyBehavior,
}

impl RouteGuard {
    /// Guard that only requires a logged-in session.
    pub fn authenticated() -> Self {
        Self {
            requirement: None,
            login_path: "/login".to_string(),
            on_deny: DenyBehavior::Fallback,
        }
    }

    /// Guard that requires the session's principal to satisfy `requirement`.
    pub fn requiring(requirement: impl Into<Requirement>) -> Self {
        Self {
            requirement: Some(requirement.into()),
            ..Self::authenticated()
        }
    }

    /// Redirect instead of rendering the fallback when the principal is
    /// denied.
    pub fn redirect_on_deny(mut self, path: impl Into<String>) -> Self {
        self.on_deny = DenyBehavior::Redirect(path.into());
        self
    }

    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Evaluate the guard against the cached session. Pure: same session,
    /// same outcome.
    pub fn evaluate(&self, session: &Session) -> GuardOutcome {
        let principal = match session {
            Session::Loading => return GuardOutcome::Pending,
            Session::Anonymous => return GuardOutcome::Redirect(self.login_path.clone()),
            Session::Authenticated(p) => p,
        };

        let allowed = match &self.requirement {
            None => true,
            Some(requirement) => authz::allow(principal, requirement) == Decision::Allow,
        };

        if allowed {
            GuardOutcome::Render
        } else {
            match &self.on_deny {
                DenyBehavior::Fallback => GuardOutcome::Fallback,
                DenyBehavior::Redirect(path) => GuardOutcome::Redirect(path.clone()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::{Permission, RoleMap};
    use uuid::Uuid;

    fn interviewer() -> Principal {
        let map = RoleMap::builtin().unwrap();
        Principal::from_roles(
            Uuid::new_v4(),
            "pat",
            vec!["Interviewer".to_string()],
            &map,
        )
    }

    #[test]
    fn test_loading_session_is_pending() {
        let guard = RouteGuard::requiring(Permission::CandidatesView);
        assert_eq!(guard.evaluate(&Session::Loading), GuardOutcome::Pending);
    }

    #[test]
    fn test_resolved_session_yields_exactly_one_terminal_outcome() {
        let guard = RouteGuard::requiring(Permission::CandidatesDelete);
        let sessions = [
            Session::Anonymous,
            Session::Authenticated(interviewer()),
        ];
        for session in &sessions {
            let outcome = guard.evaluate(session);
            assert_ne!(outcome, GuardOutcome::Pending);
            // the outcome enum is exclusive: Render and Fallback cannot
            // both hold, so asserting equality pins down exactly one
            match session {
                Session::Anonymous => {
                    assert_eq!(outcome, GuardOutcome::Redirect("/login".to_string()));
                }
                _ => assert_eq!(outcome, GuardOutcome::Fallback),
            }
        }
    }

    #[test]
    fn test_allowed_principal_renders_children() {
        let guard = RouteGuard::requiring(Permission::InterviewsEdit);
        let session = Session::Authenticated(interviewer());
        assert_eq!(guard.evaluate(&session), GuardOutcome::Render);
    }

    #[test]
    fn test_redirect_on_deny() {
        let guard =
            RouteGuard::requiring(Permission::SystemSettings).redirect_on_deny("/unauthorized");
        let session = Session::Authenticated(interviewer());
        assert_eq!(
            guard.evaluate(&session),
            GuardOutcome::Redirect("/unauthorized".to_string())
        );
    }

    #[test]
    fn test_authenticated_guard_needs_only_login() {
        let guard = RouteGuard::authenticated();
        assert_eq!(
            guard.evaluate(&Session::Authenticated(interviewer())),
            GuardOutcome::Render
        );
        assert_eq!(
            guard.evaluate(&Session::Anonymous),
            GuardOutcome::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_evaluate_is_stable_across_calls() {
        let guard = RouteGuard::requiring(Permission::CandidatesView);
        let session = Session::Authenticated(interviewer());
        assert_eq!(guard.evaluate(&session), guard.evaluate(&session));
    }
}
