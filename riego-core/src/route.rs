//! View routes.
//!
//! Two routes only, addressed through the URL fragment (`#/`, `#/home`).
//! No route requires a session.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Session gate (default route)
    #[default]
    Login,
    /// Navigation shell + irrigation form
    Home,
}

impl AppRoute {
    /// Exact path match. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "" => Some(Self::Login),
            "/home" => Some(Self::Home),
            _ => None,
        }
    }

    /// Resolve a `location.hash` value. Unknown fragments land on the login view.
    pub fn from_fragment(fragment: &str) -> Self {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        Self::from_path(path).unwrap_or_default()
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Home => "/home",
        }
    }

    pub fn fragment(&self) -> String {
        format!("#{}", self.path())
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Login));
        assert_eq!(AppRoute::from_path("/home"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/home/"), None);
        assert_eq!(AppRoute::from_path("/dashboard"), None);
    }

    #[test]
    fn test_from_fragment() {
        assert_eq!(AppRoute::from_fragment(""), AppRoute::Login);
        assert_eq!(AppRoute::from_fragment("#/"), AppRoute::Login);
        assert_eq!(AppRoute::from_fragment("#/home"), AppRoute::Home);
        assert_eq!(AppRoute::from_fragment("#/nowhere"), AppRoute::Login);
    }

    #[test]
    fn test_fragment_resolves_back() {
        for route in [AppRoute::Login, AppRoute::Home] {
            assert_eq!(AppRoute::from_fragment(&route.fragment()), route);
        }
    }
}
