//! Request guards: session wrappers, role checks for API handlers and page redirects.

pub mod auth;
pub mod route_guard;
pub mod session;

#[cfg(test)]
mod test;
