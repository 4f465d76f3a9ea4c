pub mod config;
pub mod db;
pub mod models;
pub mod telemetry;
pub mod test_environment;
pub mod test_utils;
pub mod traits;
pub mod utils;

pub use config::DatabaseConfig;
pub use db::DatabasePool;
pub use traits::EmployeeStore;
