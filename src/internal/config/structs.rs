pub mod transfer_config;

pub use transfer_config::TransferConfig;
