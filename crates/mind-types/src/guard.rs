//! Route access rules. Pure over `(route, phase)` so every redirect can be
//! checked without a browser.

use crate::session::SessionPhase;

pub const LOGIN_PATH: &str = "/login";
pub const USER_HOME: &str = "/dashboard";
pub const ADMIN_HOME: &str = "/admin";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Login,
    Dashboard,
    Admin,
    ChangePassword,
    ForgotPassword,
    ResetPassword,
    AdminRegister,
    Invite,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => AppRoute::Root,
            ["login"] => AppRoute::Login,
            ["dashboard"] => AppRoute::Dashboard,
            ["admin"] => AppRoute::Admin,
            ["admin", "register"] => AppRoute::AdminRegister,
            ["change-password"] => AppRoute::ChangePassword,
            ["forgot-password"] => AppRoute::ForgotPassword,
            ["reset-password", _] => AppRoute::ResetPassword,
            ["invite", _] => AppRoute::Invite,
            _ => AppRoute::NotFound,
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            AppRoute::Dashboard | AppRoute::Admin | AppRoute::ChangePassword
        )
    }

    pub fn admin_only(&self) -> bool {
        matches!(self, AppRoute::Admin)
    }
}

/// `/invite/:token` with a non-empty token.
pub fn is_invite_path(path: &str) -> bool {
    AppRoute::from_path(path) == AppRoute::Invite
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Render,
    /// Session still being checked; show a loader, never redirect.
    Pending,
    Redirect(&'static str),
    /// Drop the current session, then render.
    Logout,
}

pub fn home_for(phase: &SessionPhase) -> &'static str {
    match phase.role() {
        Some(role) if role.is_admin() => ADMIN_HOME,
        Some(_) => USER_HOME,
        None => LOGIN_PATH,
    }
}

pub fn decide(route: AppRoute, phase: &SessionPhase) -> Access {
    match (route, phase) {
        (AppRoute::Invite, SessionPhase::Authenticated(_)) => Access::Logout,
        (AppRoute::Invite, _) => Access::Render,

        (AppRoute::Root | AppRoute::Login, SessionPhase::Checking) => Access::Pending,
        (AppRoute::Root | AppRoute::Login, SessionPhase::Authenticated(_)) => {
            Access::Redirect(home_for(phase))
        }
        (AppRoute::Root, SessionPhase::Anonymous) => Access::Redirect(LOGIN_PATH),
        (AppRoute::Login, SessionPhase::Anonymous) => Access::Render,

        (r, SessionPhase::Checking) if r.requires_session() => Access::Pending,
        (r, SessionPhase::Anonymous) if r.requires_session() => Access::Redirect(LOGIN_PATH),

        (AppRoute::Admin, SessionPhase::Authenticated(role)) if !role.is_admin() => {
            Access::Redirect(USER_HOME)
        }
        (AppRoute::Dashboard, SessionPhase::Authenticated(role)) if role.is_admin() => {
            Access::Redirect(ADMIN_HOME)
        }

        _ => Access::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Role;

    fn admin() -> SessionPhase {
        SessionPhase::Authenticated(Role::Admin)
    }

    fn user() -> SessionPhase {
        SessionPhase::Authenticated(Role::User)
    }

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Root);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/admin/"), AppRoute::Admin);
        assert_eq!(AppRoute::from_path("/admin/register"), AppRoute::AdminRegister);
        assert_eq!(AppRoute::from_path("/reset-password/abc"), AppRoute::ResetPassword);
        assert_eq!(AppRoute::from_path("/invite/abc"), AppRoute::Invite);
        assert_eq!(AppRoute::from_path("/invite"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/invite/a/b"), AppRoute::NotFound);
    }

    #[test]
    fn anonymous_users_land_on_login() {
        let anon = SessionPhase::Anonymous;
        assert_eq!(decide(AppRoute::Root, &anon), Access::Redirect("/login"));
        assert_eq!(decide(AppRoute::Login, &anon), Access::Render);
        assert_eq!(decide(AppRoute::Dashboard, &anon), Access::Redirect("/login"));
        assert_eq!(decide(AppRoute::Admin, &anon), Access::Redirect("/login"));
        assert_eq!(decide(AppRoute::ChangePassword, &anon), Access::Redirect("/login"));
    }

    #[test]
    fn admin_is_sent_to_admin_dashboard() {
        assert_eq!(decide(AppRoute::Dashboard, &admin()), Access::Redirect("/admin"));
        assert_eq!(decide(AppRoute::Admin, &admin()), Access::Render);
        assert_eq!(decide(AppRoute::Login, &admin()), Access::Redirect("/admin"));
    }

    #[test]
    fn non_admin_cannot_open_admin_dashboard() {
        assert_eq!(decide(AppRoute::Admin, &user()), Access::Redirect("/dashboard"));
        let other = SessionPhase::Authenticated(Role::Other("STAFF".into()));
        assert_eq!(decide(AppRoute::Admin, &other), Access::Redirect("/dashboard"));
        assert_eq!(decide(AppRoute::Dashboard, &user()), Access::Render);
        assert_eq!(decide(AppRoute::Root, &user()), Access::Redirect("/dashboard"));
    }

    #[test]
    fn invite_forces_logout_when_signed_in() {
        assert_eq!(decide(AppRoute::Invite, &admin()), Access::Logout);
        assert_eq!(decide(AppRoute::Invite, &SessionPhase::Anonymous), Access::Render);
        assert!(is_invite_path("/invite/8d1e"));
        assert!(!is_invite_path("/invite/"));
    }

    #[test]
    fn checking_never_redirects() {
        let checking = SessionPhase::Checking;
        for route in [
            AppRoute::Root,
            AppRoute::Login,
            AppRoute::Dashboard,
            AppRoute::Admin,
            AppRoute::ChangePassword,
        ] {
            assert_eq!(decide(route, &checking), Access::Pending);
        }
        assert_eq!(decide(AppRoute::ForgotPassword, &checking), Access::Render);
    }

    #[test]
    fn public_pages_render_for_everyone() {
        for phase in [SessionPhase::Anonymous, user(), admin()] {
            assert_eq!(decide(AppRoute::ForgotPassword, &phase), Access::Render);
            assert_eq!(decide(AppRoute::ResetPassword, &phase), Access::Render);
            assert_eq!(decide(AppRoute::AdminRegister, &phase), Access::Render);
        }
    }
}
