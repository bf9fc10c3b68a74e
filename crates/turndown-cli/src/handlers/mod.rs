pub mod auth;
pub mod catalog;
pub mod clean;
pub mod config;
pub mod init;
pub mod session;
pub mod spot_check;
