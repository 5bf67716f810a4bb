pub mod health;
pub mod create;
pub mod get;

pub use health::health_handler;
pub use create::create_handler;
pub use get::get_handler;
