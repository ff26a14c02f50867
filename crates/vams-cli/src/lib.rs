//! # vams-cli: Vendor Agreement Command-Line Interface
//!
//! A thin shell over the domain crates. Each subcommand reads its input
//! files, calls into `vams-catalog`, `vams-policy` or `vams-state`, and
//! prints the result as a table or JSON.
//!
//! ## Subcommands
//!
//! - `list`: Agreement list with keyword search and pagination
//! - `validate`: Mandatory-field validation of a vendor record file
//! - `districts`: Location hierarchy and districts still available to a vendor
//! - `status`: Agreement status for a date range
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates. No business logic here.
//! - Rendering is done by pure functions so it can be tested without a
//!   terminal.

pub mod config;
pub mod districts;
pub mod input;
pub mod list;
pub mod output;
pub mod status;
pub mod validate;
