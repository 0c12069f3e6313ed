pub mod import;
pub mod initdb;
pub mod serve;

pub use import::import_forecasts;
pub use initdb::init_database;
pub use serve::serve;
