use strum_macros::Display;

/// The HTML documents this client is mounted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Page {
    Upload,
    Dashboard,
    History,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Upload, Page::Dashboard, Page::History];

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/index.html" => Some(Page::Upload),
            "/dashboard" | "/dashboard.html" => Some(Page::Dashboard),
            "/history" | "/history.html" => Some(Page::History),
            _ => None,
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Page::Upload => "/",
            Page::Dashboard => "/dashboard",
            Page::History => "/history",
        }
    }

    pub fn document(&self) -> &'static str {
        match self {
            Page::Upload => "index.html",
            Page::Dashboard => "dashboard.html",
            Page::History => "history.html",
        }
    }
}
