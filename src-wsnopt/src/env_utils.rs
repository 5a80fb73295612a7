//! Output directory resolution for generated data
//!
//! Results land under `<root>/data_generated`, where the root is the
//! `WSNOPT_DIR` environment variable when set and the working directory
//! otherwise. The directory is created on demand.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the project root for generated data.
pub const WSNOPT_DIR: &str = "WSNOPT_DIR";

/// Directory under the root where generated data is written.
pub const DATA_GENERATED: &str = "data_generated";

/// Error type for output directory issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("WSNOPT_DIR points to a non-existent directory: {0}")]
    RootNotFound(PathBuf),

    #[error("failed to create the data_generated directory: {0}")]
    CreationFailed(std::io::Error),
}

/// Resolve the data directory under an explicit root, creating it if
/// necessary. `None` means the working directory.
///
/// # Errors
///
/// Returns an error if:
/// - the root directory does not exist
/// - the data directory cannot be created
pub fn data_generated_dir_under(root: Option<PathBuf>) -> Result<PathBuf, EnvError> {
    let root = match root {
        Some(path) => {
            if !path.exists() {
                return Err(EnvError::RootNotFound(path));
            }
            path
        }
        None => PathBuf::from("."),
    };

    let data_generated = root.join(DATA_GENERATED);
    if !data_generated.exists() {
        std::fs::create_dir_all(&data_generated).map_err(EnvError::CreationFailed)?;
    }

    Ok(data_generated)
}

/// Resolve the data_generated directory from the environment.
///
/// # Example
///
/// ```no_run
/// use wsnopt::env_utils::get_data_generated_dir;
///
/// let data_dir = get_data_generated_dir()?;
/// println!("Data directory: {}", data_dir.display());
/// # Ok::<(), wsnopt::env_utils::EnvError>(())
/// ```
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    data_generated_dir_under(env::var(WSNOPT_DIR).ok().map(PathBuf::from))
}
