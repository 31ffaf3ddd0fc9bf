/// Logical destinations of the navigation shell. The frontend router keeps
/// the URL; this mapping is the single source of truth for which view a
/// path resolves to, including the catch-all redirect to the overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Overview,
    Detail(String),
    Resolution(String),
}

impl Route {
    /// Map a URL path onto a view. Unmatched paths resolve to `Overview`.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Overview,
            ["alerts", id] => Route::Detail((*id).to_string()),
            ["alerts", id, "resolve"] => Route::Resolution((*id).to_string()),
            _ => Route::Overview,
        }
    }

    /// Canonical path for a destination, used for navigation links.
    pub fn path(&self) -> String {
        match self {
            Route::Overview => "/".to_string(),
            Route::Detail(id) => format!("/alerts/{}", id),
            Route::Resolution(id) => format!("/alerts/{}/resolve", id),
        }
    }

    /// Whether the sidebar entry for `link_path` should highlight while
    /// this route is active. Alert detail and resolution both live under
    /// the overview entry.
    pub fn is_active(&self, link_path: &str) -> bool {
        match link_path {
            "/" => true,
            _ => Route::parse(link_path) == *self,
        }
    }
}
