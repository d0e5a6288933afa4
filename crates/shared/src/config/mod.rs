mod database;
mod myconfig;

pub use self::database::{ConnectionManager, DatabaseConfig};
pub use self::myconfig::Config;
