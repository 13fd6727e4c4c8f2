//! # Routes and History
//!
//! Atlas has three screens, addressed by paths the same way a web app
//! would be:
//!
//! ```text
//! /             → redirect to /countries
//! /countries    → card grid with search and region filter
//! /<code>       → detail page for the country with that alpha3 code
//! anything else → not-found page
//! ```
//!
//! The path is the source of truth for the detail page: the identifier is
//! looked up in the store on every render, so a path typed by hand (or
//! passed on the command line) works the same as one reached by opening a
//! card.

use std::fmt;

pub const LIST_PATH: &str = "/countries";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    /// Alpha3 code (or, for hand-typed paths, a country name).
    Detail(String),
    /// The path that failed to match.
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Route::List;
        }

        let Some(rest) = trimmed.strip_prefix('/') else {
            return Route::NotFound(trimmed.to_string());
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest == &LIST_PATH[1..] {
            Route::List
        } else if !rest.is_empty() && !rest.contains('/') {
            Route::Detail(rest.to_string())
        } else {
            Route::NotFound(trimmed.to_string())
        }
    }

    /// Canonical path for this route. `/` is never produced; it redirects.
    pub fn path(&self) -> String {
        match self {
            Route::List => LIST_PATH.to_string(),
            Route::Detail(id) => format!("/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn detail_for(code: &str) -> Route {
        Route::Detail(code.to_string())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Navigation stack. The root entry is held apart from the pushed ones,
/// so there is always a current route.
#[derive(Debug, Clone)]
pub struct History {
    root: Route,
    pushed: Vec<Route>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::List)
    }
}

impl History {
    pub fn new(root: Route) -> Self {
        Self {
            root,
            pushed: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        self.pushed.last().unwrap_or(&self.root)
    }

    pub fn push(&mut self, route: Route) {
        self.pushed.push(route);
    }

    /// Goes back one entry. Returns false at the root entry.
    pub fn back(&mut self) -> bool {
        self.pushed.pop().is_some()
    }

    /// Number of entries, root included.
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_list() {
        assert_eq!(Route::parse("/"), Route::List);
        assert_eq!(Route::parse(""), Route::List);
        assert_eq!(Route::parse("/").path(), "/countries");
    }

    #[test]
    fn test_list_path() {
        assert_eq!(Route::parse("/countries"), Route::List);
        assert_eq!(Route::parse("/countries/"), Route::List);
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(Route::parse("/BEL"), Route::Detail("BEL".to_string()));
        assert_eq!(Route::parse("/Japan/"), Route::Detail("Japan".to_string()));
        assert_eq!(Route::detail_for("FRA").path(), "/FRA");
    }

    #[test]
    fn test_unknown_shapes_are_not_found() {
        assert_eq!(
            Route::parse("/countries/BEL"),
            Route::NotFound("/countries/BEL".to_string())
        );
        assert_eq!(Route::parse("countries"), Route::NotFound("countries".to_string()));
        assert_eq!(Route::parse("//"), Route::NotFound("//".to_string()));
    }

    #[test]
    fn test_history_back_is_one_level() {
        let mut history = History::default();
        history.push(Route::detail_for("BEL"));
        history.push(Route::detail_for("FRA"));
        assert_eq!(history.depth(), 3);

        assert!(history.back());
        assert_eq!(history.current(), &Route::detail_for("BEL"));
        assert!(history.back());
        assert_eq!(history.current(), &Route::List);
        assert!(!history.back());
        assert_eq!(history.current(), &Route::List);
    }

    #[test]
    fn test_history_can_start_on_detail() {
        let mut history = History::new(Route::parse("/JPN"));
        assert_eq!(history.current(), &Route::detail_for("JPN"));
        assert!(!history.back());
    }

    #[test]
    fn test_root_survives_repeated_back() {
        let mut history = History::new(Route::detail_for("BEL"));
        history.push(Route::List);
        for _ in 0..3 {
            history.back();
        }
        assert_eq!(history.depth(), 1);
        assert_eq!(history.current(), &Route::detail_for("BEL"));
    }
}
