//! Bootstrap a local Python development environment.
//!
//! Runs three steps in order, stopping at the first failure:
//! 1. create a `.venv` virtual environment
//! 2. create an empty `requirements.txt` if there is none
//! 3. install `requirements.txt` into the virtual environment

mod bootstrap;
mod error;

pub use bootstrap::{
    Bootstrap, REQUIREMENTS_FILE, Step, VENV_DIR, activate_command, default_python,
    usage_instructions,
};
pub use error::BootstrapError;
