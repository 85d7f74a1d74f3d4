//! # Takeaway
//!
//! An interactive command-line assistant that builds a takeaway order, optionally
//! resuming one saved earlier, and writes the result to disk.
//!
//! ## Usage
//!
//! ```bash
//! takeaway [-v] [--output-dir DIR]
//! ```
//!
//! ## Modules
//!
//! - `app` - Configuration, logging setup and fatal error handling
//! - `catalog` - Static menu of dishes and the toppings each allows
//! - `cli` - Command-line argument structures
//! - `codec` - YAML/JSON order files, format picked by extension
//! - `error` - Unified error type with categories and exit codes
//! - `interaction` - The `Chooser` abstraction and its terminal implementation
//! - `order` - The order record and its enumerations
//! - `workflow` - The step-by-step ordering flow
//! - `testing` - Scripted chooser for tests
pub mod app;
pub mod catalog;
pub mod cli;
pub mod codec;
pub mod error;
pub mod interaction;
pub mod order;
pub mod workflow;

pub mod testing;
