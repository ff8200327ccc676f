// SPDX-License-Identifier: MPL-2.0
//! Application layer - port definitions.
//!
//! Sits between the domain layer (pure normalization logic) and the
//! infrastructure adapters:
//!
//! - [`port`]: trait definitions (interfaces) for dependency inversion

pub mod port;
