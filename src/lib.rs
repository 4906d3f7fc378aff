pub mod config;
pub mod error;
pub mod model;
pub mod utils;

pub use config::Config;
pub use error::{HrmError, Result};
pub use model::employee::Employee;
pub use model::service::ServiceCharges;
