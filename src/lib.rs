//! cidex - Terminal browser for the CID-10 medical code catalog
//!
//! Fetches the full CID-10 record set once from a catalog API and lets the
//! user explore it from the terminal: debounced accent-insensitive substring
//! search, incremental reveal of long result lists, and explicit loading and
//! error screens with manual retry.
//!
//! # Features
//!
//! - **One-shot fetch**: the whole catalog is loaded in a single request
//! - **Accent-insensitive search**: "colera" finds "Cólera"
//! - **Debounced filtering**: typing is settled for 300ms before filtering
//! - **Incremental reveal**: results appear 50 at a time on demand
//! - **Retry on failure**: network errors keep the session alive
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cidex::{Config, HttpCidProvider};
//!
//! fn main() -> cidex::Result<()> {
//!     let config = Config::from_env();
//!     let provider = Arc::new(HttpCidProvider::new(&config.base_url)?);
//!     cidex::tui::run(provider)
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod logging;
pub mod reveal;
pub mod search;
pub mod tui;

// Re-export main types
pub use catalog::{Cid, CidProvider, HttpCidProvider};
pub use config::Config;
pub use debounce::Debouncer;
pub use error::{CidexError, FetchError, Result};
pub use reveal::{RevealState, PAGE_SIZE};
pub use search::{filter_records, normalize};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format a count with pt-BR digit grouping ("1234567" becomes "1.234.567")
pub fn format_count_pt_br(value: usize) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(c);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_small_values_unchanged() {
        assert_eq!(format_count_pt_br(0), "0");
        assert_eq!(format_count_pt_br(7), "7");
        assert_eq!(format_count_pt_br(999), "999");
    }

    #[test]
    fn test_format_count_groups_thousands_with_dots() {
        assert_eq!(format_count_pt_br(1000), "1.000");
        assert_eq!(format_count_pt_br(14197), "14.197");
        assert_eq!(format_count_pt_br(123456), "123.456");
        assert_eq!(format_count_pt_br(1234567), "1.234.567");
    }
}
