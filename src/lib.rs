// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Hello, World!
//!
//! This crate prints a single greeting line through a log-style sink. It
//! exists to check that a build and test toolchain works from end to end.
//!
//! # Quick Start
//!
//! Greeting on stderr:
//!
//! ```no_run
//! use anyhow::Result;
//! use hello_world::{greeter, log};
//!
//! fn main() -> Result<()> {
//!     log::init()?;
//!     greeter::greet();
//!     Ok(())
//! }
//! ```
//!
//! Capturing the greeting instead:
//!
//! ```
//! use hello_world::greeter;
//! use hello_world::log::CaptureBuffer;
//!
//! let buffer = CaptureBuffer::new();
//! greeter::greet_with(buffer.clone());
//! assert!(buffer.contents().ends_with("Hello, World!\n"));
//! ```
//!
//! # Output Format
//!
//! | Part        | Example               |
//! |-------------|-----------------------|
//! | timestamp   | `2025/05/15 16:09:38` |
//! | separator   | a single space        |
//! | message     | `Hello, World!`       |
//! | terminator  | `\n`                  |

pub mod greeter;
pub mod log;

pub use greeter::GREETING;
