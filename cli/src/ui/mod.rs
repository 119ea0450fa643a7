//! UI utilities for terminal output.

mod events;
mod qr;
mod usage;

pub use events::{print_event, print_summary};
pub use qr::print_qr_code;
pub use usage::print_usage;
