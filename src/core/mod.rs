pub mod aggregate;
pub mod backup;
pub mod config;
pub mod del;
pub mod import;
pub mod log;
pub mod logic;
pub mod presence;
pub mod roster;
pub mod save;
pub mod summary;
pub mod window;
