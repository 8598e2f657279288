pub mod report;

pub use report::{ReportCatalog, ReportListing, ReportRecord, SessionCookie, DEFAULT_ROOT_FOLDER};
