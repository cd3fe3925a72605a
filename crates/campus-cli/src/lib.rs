pub mod app;
pub mod error;
pub mod logger;

pub use app::AppContext;
pub use error::{CliError, CliResult};
