//! ranktrack - Terminal-based Valorant account and rank tracker
//!
//! This library provides the core functionality for the ranktrack
//! application. It keeps a roster of Valorant accounts grouped into named
//! sections, looks their competitive ranks up from a public rank API, and
//! serves the roster over HTTP to a terminal client.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, sections, rank data)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `lookup`: Upstream rank lookup client
//! - `server`: Tracker HTTP service and background rank refresher
//! - `client`: HTTP client shared by the TUI and one-shot commands
//! - `tui`: Interactive terminal interface
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: One-shot command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ranktrack::config::{paths::TrackerPaths, settings::Settings};
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod lookup;
pub mod models;
pub mod server;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
