pub mod catalog;
pub mod options;
pub mod provider;
pub mod report_server;
pub mod session;

pub use options::ReaderOptions;
pub use provider::ReportsReader;
pub use report_server::ReportServerReader;
