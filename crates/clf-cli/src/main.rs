//! comments-link-filter - comment link filter CLI
//!
//! Reads comment HTML, neutralizes its links and writes the result.
//!
//! ## Quick Start
//!
//! ```bash
//! # Filter a comment from stdin with the default pipeline
//! echo '<a href="http://x.com">spam</a>' | comments-link-filter filter
//!
//! # Strip every tag outside the allow-list
//! comments-link-filter strip comment.html --allow p --allow em
//!
//! # Write a default configuration file
//! comments-link-filter config init
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
