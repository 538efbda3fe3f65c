// NOTE: formsmith layering
//
// types    - field model, tokens, serde shapes
// engine   - pure functions: reorder, validation assignment, preview, codegen
// runtime  - the session's FormBuilder, action scripts, config file
// cli      - argument parsing, plain/json output, and the terminal editor
//
// Both the terminal editor and `run` scripts funnel every edit through
// `FormBuilder::apply`, so the two surfaces cannot drift apart.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, EmitTarget};
pub use commands::run;
