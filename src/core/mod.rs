pub mod config;
pub mod download;
pub mod installer;
pub mod release;
pub mod workspace;
