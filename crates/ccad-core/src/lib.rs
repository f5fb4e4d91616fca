pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod logging;
pub mod manifest;
pub mod pipeline;
