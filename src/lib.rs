/*!
 * # mdnorm - Markdown transcript normalizer
 *
 * A Rust library for cleaning up Japanese Markdown transcripts produced by OCR.
 *
 * ## Features
 *
 * - Join lines broken by page layout, keeping breaks after punctuation
 * - Collapse blank lines and strip spaces
 * - Widen ASCII punctuation to full-width forms
 * - Rewrite leading dashes as em-dash runs
 * - Turn speaker sections into Markdown blockquotes
 * - Keep a list of protected terms byte-for-byte intact
 *
 * ## Architecture
 *
 * - `app_config`: Configuration management
 * - `normalizer`: The rewrite pipeline:
 *   - `normalizer::protect`: Protected term placeholders
 *   - `normalizer::rules`: Line and character rewrite rules
 *   - `normalizer::blockquote`: Speaker blockquote state machine
 * - `file_utils`: File system operations
 * - `app_controller`: Runs the pipeline over a list of files
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod normalizer;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FileOutcome, RunSummary};
pub use errors::{AppError, NormalizeError};
pub use normalizer::{Normalizer, PlaceholderMap, QuoteRule, QuoteState, Stage};
