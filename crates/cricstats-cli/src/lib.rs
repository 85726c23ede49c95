//! Library components of the cricstats command line.

pub mod config;
pub mod export;
pub mod logging;
