use std::path::Path;

use gantt_view::model::Project;

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("could not read or write the file: {0}")]
    Io(#[from] std::io::Error),
    #[error("the file is not a valid project: {0}")]
    Format(#[from] serde_json::Error),
}

/// Save a project to a JSON file.
pub fn save_project(project: &Project, path: &Path) -> Result<(), FileError> {
    let json = serde_json::to_string_pretty(project)?;
    std::fs::write(path, json)?;
    log::info!("saved project '{}' to {}", project.name, path.display());
    Ok(())
}

/// Load a project from a JSON file.
pub fn load_project(path: &Path) -> Result<Project, FileError> {
    let json = std::fs::read_to_string(path)?;
    let project = serde_json::from_str(&json)?;
    log::info!("loaded project from {}", path.display());
    Ok(project)
}
