use serde::{Deserialize, Serialize};

/// Root folder assigned to reports that do not live under a `Domains` folder.
pub const DEFAULT_ROOT_FOLDER: &str = "/";

/// A report as listed by the report server catalog.
///
/// `path` holds the catalog path (`/Home/dev/Domains/Sales/Report`) when
/// deserialized and the embeddable viewer URL once the reader has processed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportRecord {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub root_folder: String,
}

/// OData envelope returned by the catalog listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportCatalog {
    pub value: Vec<ReportRecord>,
}

/// The session cookie issued by the report server's logon endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Header value for forwarding the cookie to a browser session.
    pub fn to_set_cookie(&self) -> String {
        format!("{}={}; Path=/", self.name, self.value)
    }
}

/// Result of one reader call: the processed reports plus the session cookie
/// the caller should forward.
#[derive(Debug, Clone)]
pub struct ReportListing {
    pub reports: Vec<ReportRecord>,
    pub session_cookie: SessionCookie,
}
