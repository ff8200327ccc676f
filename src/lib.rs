// SPDX-License-Identifier: MPL-2.0
//! `geolog` extracts GPS positions from the metadata of a directory of
//! images, normalizes them to signed decimal degrees, and writes one
//! record per located image to a plain-text report.
//!
//! The core lives in [`domain::gps`]: a sexagesimal parser, a
//! degree converter, and a normalizer accepting either pre-resolved
//! decimal magnitudes (with separate hemisphere reference tags) or
//! packed degree/minute/second strings. Everything else is plumbing
//! around it: an EXIF adapter, a directory scanner, and the batch
//! driver that assembles the report.

#![doc(html_root_url = "https://docs.rs/geolog/0.1.0")]

pub mod application;
pub mod batch;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod report;
