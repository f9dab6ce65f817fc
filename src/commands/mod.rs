pub mod generate;

pub use generate::{config_from_cli, exit_code, mode_from_cli, run_generate, run_generate_impl};
