//! alt:V JS v2 client module updater
//!
//! Downloads the latest client module build and installs it into a local
//! alt:V launcher folder configured in `.jsv2-client-updater.json`.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;

#[cfg(test)]
mod test_support;
