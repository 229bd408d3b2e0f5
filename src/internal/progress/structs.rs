pub mod console_progress;
pub mod progress_counter;
pub mod transfer_progress;

pub use console_progress::ConsoleProgress;
pub use progress_counter::ProgressCounter;
pub use transfer_progress::TransferProgress;
