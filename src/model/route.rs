//! Page access rules shared by the server route guard and the client layouts.

use crate::model::user::Role;

/// Returns where a request for `path` must be redirected, given the session's role.
///
/// | path                  | no session | USER | ADMIN    |
/// |-----------------------|------------|------|----------|
/// | `/admin`, `/admin/**` | `/login`   | `/`  | pass     |
/// | `/login`, `/register` | pass       | `/`  | `/admin` |
pub fn redirect_for(path: &str, role: Option<Role>) -> Option<&'static str> {
    if is_admin_path(path) {
        return match role {
            None => Some("/login"),
            Some(Role::User) => Some("/"),
            Some(Role::Admin) => None,
        };
    }

    if matches!(path.trim_end_matches('/'), "/login" | "/register") {
        return match role {
            None => None,
            Some(Role::User) => Some("/"),
            Some(Role::Admin) => Some("/admin"),
        };
    }

    None
}

fn is_admin_path(path: &str) -> bool {
    path == "/admin" || path.starts_with("/admin/")
}
