pub mod config;
pub mod error;
pub mod logging;
pub mod request;
pub mod toolkit;
pub mod url_model;

pub use config::SiteConfig;
pub use error::ToolkitError;
pub use request::RequestContext;
pub use toolkit::UrlToolkit;
