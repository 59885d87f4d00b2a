pub mod action;
pub mod check;
pub mod patterns;

pub use action::{run_action, run_action_in};
pub use check::{CheckOptions, HostIo, cli_inputs, run_check, run_check_command, run_check_impl};
pub use patterns::{pattern_cli_inputs, run_patterns, run_patterns_command, run_patterns_impl};
