//! Derive compact artifacts from JSON documents.
//!
//! Two pure, depth-first transforms over `serde_json::Value` (built with
//! `preserve_order`, so object key order is the input's):
//! - [`trim::trim_value`] — a structurally-faithful copy with every array
//!   capped at a fixed element count, at every depth.
//! - [`infer::generate_schema`] — an inferred JSON Schema (`type`,
//!   `properties`, `items`, `required`, `$schema` only), where heterogeneous
//!   shapes unify through [`merge::merge`] and per-object `required` narrows
//!   to the keys common to all merged branches.
//!
//! Both transforms are total over finite trees; parsing, file handling and
//! jq/pointer selection live in the collaborator modules and report through
//! [`error::Error`].

pub mod cli;
pub mod error;
pub mod infer;
pub mod input;
pub mod jq_exec;
pub mod merge;
pub mod schema;
pub mod trim;

pub use error::Error;
pub use infer::{Inference, SCHEMA_DRAFT, generate_schema, infer_value};
pub use merge::merge;
pub use schema::{Schema, TypeTag};
pub use trim::trim_value;
