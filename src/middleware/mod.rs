pub mod identity;
pub mod logger;
