pub mod config;
pub mod edit;
pub mod palette;
pub mod run;
