use crate::error::BootstrapError;
use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

/// Directory name of the virtual environment
pub const VENV_DIR: &str = ".venv";
/// Dependency manifest installed into the environment
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Subprocess steps of the bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateEnvironment,
    InstallDependencies,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateEnvironment => write!(f, "create virtual environment"),
            Step::InstallDependencies => write!(f, "install dependencies"),
        }
    }
}

/// Interpreter used when none is given.
pub fn default_python() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Shell command that activates the virtual environment.
pub fn activate_command() -> &'static str {
    if cfg!(target_os = "windows") {
        ".venv\\Scripts\\activate"
    } else {
        "source .venv/bin/activate"
    }
}

/// Instructions printed after a successful bootstrap.
pub fn usage_instructions() -> String {
    format!(
        "
To activate the virtual environment:
    {}

To install packages:
    pip install <package_name>

To save dependencies to requirements.txt:
    pip freeze > requirements.txt
",
        activate_command()
    )
}

/// Bootstraps a virtual environment inside a project directory.
pub struct Bootstrap {
    project_dir: PathBuf,
    python: String,
}

impl Bootstrap {
    pub fn new(project_dir: impl Into<PathBuf>, python: impl Into<String>) -> Self {
        Bootstrap {
            project_dir: project_dir.into(),
            python: python.into(),
        }
    }

    pub fn venv_dir(&self) -> PathBuf {
        self.project_dir.join(VENV_DIR)
    }

    pub fn requirements_path(&self) -> PathBuf {
        self.project_dir.join(REQUIREMENTS_FILE)
    }

    /// Interpreter inside the virtual environment.
    pub fn venv_python(&self) -> PathBuf {
        if cfg!(target_os = "windows") {
            self.venv_dir().join("Scripts").join("python.exe")
        } else {
            self.venv_dir().join("bin").join("python")
        }
    }

    /// Run all steps in order. The first failure aborts the rest.
    pub fn run(&self) -> Result<(), BootstrapError> {
        println!("Creating virtual environment...");
        self.create_environment()?;

        if self.ensure_requirements()? {
            println!("Creating empty {} file...", REQUIREMENTS_FILE);
        }

        println!("\nInstalling dependencies...");
        self.install_dependencies()?;

        Ok(())
    }

    /// `<python> -m venv .venv`
    pub fn create_environment(&self) -> Result<(), BootstrapError> {
        let mut command = Command::new(&self.python);
        command.args(["-m", "venv", VENV_DIR]);
        self.run_step(Step::CreateEnvironment, command)
    }

    /// Create an empty requirements file if none exists.
    ///
    /// Returns true when the file was created. An existing file is not
    /// opened for writing.
    pub fn ensure_requirements(&self) -> Result<bool, BootstrapError> {
        let path = self.requirements_path();
        if path.exists() {
            return Ok(false);
        }

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(BootstrapError::Requirements)?;
        info!("Created {}", path.display());
        Ok(true)
    }

    /// `<venv python> -m pip install -r requirements.txt`
    pub fn install_dependencies(&self) -> Result<(), BootstrapError> {
        let mut command = Command::new(self.venv_python());
        command.args(["-m", "pip", "install", "-r", REQUIREMENTS_FILE]);
        self.run_step(Step::InstallDependencies, command)
    }

    fn run_step(&self, step: Step, mut command: Command) -> Result<(), BootstrapError> {
        debug!("Running {:?} in {}", command, self.project_dir.display());

        let output = command
            .current_dir(&self.project_dir)
            .output()
            .map_err(|source| BootstrapError::Spawn { step, source })?;

        if !output.status.success() {
            return Err(BootstrapError::StepFailed {
                step,
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            println!("{}", stdout);
        }

        info!("Step succeeded: {}", step);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn ensure_requirements_creates_empty_file() {
        let dir = tempdir().unwrap();
        let bootstrap = Bootstrap::new(dir.path(), "python3");

        assert!(bootstrap.ensure_requirements().unwrap());

        let content = fs::read(dir.path().join("requirements.txt")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn ensure_requirements_keeps_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("requirements.txt"), "pillow\n").unwrap();
        let bootstrap = Bootstrap::new(dir.path(), "python3");

        assert!(!bootstrap.ensure_requirements().unwrap());

        let content = fs::read_to_string(dir.path().join("requirements.txt")).unwrap();
        assert_eq!(content, "pillow\n");
    }

    #[test]
    fn missing_interpreter_aborts_before_requirements() {
        let dir = tempdir().unwrap();
        let bootstrap = Bootstrap::new(dir.path(), "definitely-not-a-python-interpreter");

        let result = bootstrap.run();

        assert!(matches!(
            result,
            Err(BootstrapError::Spawn {
                step: Step::CreateEnvironment,
                ..
            })
        ));
        assert!(!dir.path().join("requirements.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn failing_first_step_stops_the_run() {
        let dir = tempdir().unwrap();
        let bootstrap = Bootstrap::new(dir.path(), "false");

        let result = bootstrap.run();

        assert!(matches!(
            result,
            Err(BootstrapError::StepFailed {
                step: Step::CreateEnvironment,
                exit_code: Some(1),
                ..
            })
        ));
        assert!(!dir.path().join("requirements.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn install_fails_without_environment_interpreter() {
        let dir = tempdir().unwrap();
        // `true` accepts any arguments and succeeds without creating .venv
        let bootstrap = Bootstrap::new(dir.path(), "true");

        let result = bootstrap.run();

        assert!(dir.path().join("requirements.txt").exists());
        assert!(matches!(
            result,
            Err(BootstrapError::Spawn {
                step: Step::InstallDependencies,
                ..
            })
        ));
    }

    #[test]
    fn venv_python_lives_in_venv_dir() {
        let bootstrap = Bootstrap::new("/project", "python3");
        assert!(bootstrap.venv_python().starts_with(Path::new("/project").join(".venv")));
    }

    #[test]
    fn usage_mentions_activation_and_freeze() {
        let usage = usage_instructions();
        assert!(usage.contains(activate_command()));
        assert!(usage.contains("pip freeze > requirements.txt"));
    }
}
