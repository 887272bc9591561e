//! CLI command implementations for `graph-models`.
//!
//! Each subcommand lives in its own module and exports an `*Args` struct
//! parsed by `clap` plus a `run` function taking the args and the resolved
//! [`Config`](crate::config::Config).
//!
//! - **`list`**: registered models, families and collections
//! - **`describe`**: one entry plus its JSON Schema
//! - **`schema`**: the JSON Schema alone
//! - **`decode`**: what a payload decodes into
//! - **`roundtrip`**: decode, re-encode and report divergences

pub mod decode;
pub mod describe;
pub mod input;
pub mod list;
pub mod roundtrip;
pub mod schema;
