pub mod config;
pub mod downloader;
pub mod entrance;
pub mod logging;
pub mod progress;
pub mod segment;
pub mod source;
pub mod states;
