pub mod action;
pub mod builder;
pub mod config;
pub mod error;
pub mod ids;
pub mod script;

pub use action::{ActionOutcome, BuilderAction, FieldRef};
pub use builder::FormBuilder;
pub use config::{BuilderConfig, Config, PreviewConfig, resolve_config_path};
pub use error::{Error, Result};
pub use ids::{IdGenerator, IdStrategy, RandomIds, SequentialIds};
pub use script::{ScriptStep, load_script, parse_script, run_script};
