use crate::{CliError, CliResult};
use stamp_core::{error::Error, memory::MemoryProject};
use std::{fs, path::Path};

/// Project file looked up in the working directory when none is given.
pub const PROJECT_FILE_NAME: &str = "stamp-project.json";

/// A missing project file means there is no focused project.
pub fn load(path: &Path) -> CliResult<MemoryProject> {
    if !path.exists() {
        return Err(Error::unavailable(format!(
            "no focused project: '{}' does not exist",
            path.display()
        ))
        .into());
    }

    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let project: MemoryProject =
        serde_json::from_str(&contents).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), types = project.types.len(), "loaded project");

    Ok(project)
}

pub fn save(path: &Path, project: &MemoryProject) -> CliResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json + "\n").map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "saved project");

    Ok(())
}
