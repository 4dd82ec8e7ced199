use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// No candidate location held a store file.
    NotFound { searched: Vec<PathBuf> },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::NotFound { searched } => {
                write!(f, "Maccy database not found. Searched:")?;
                for path in searched {
                    write!(f, "\n  {}", path.display())?;
                }
                write!(
                    f,
                    "\nPass --db <PATH>, set {}, or place a '{}' file in the current directory",
                    STORE_PATH_ENV, TESTING_STORE_NAME
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::NotFound { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Environment variable overriding store discovery.
pub const STORE_PATH_ENV: &str = "CLIPSIFT_DB";

/// File name picked up from the working directory, handy for copies of a store.
pub const TESTING_STORE_NAME: &str = "Maccy-Storage.sqlite";

/// Locations Maccy has used for its store, relative to the home directory.
pub const MACCY_STORE_LOCATIONS: &[&str] = &[
    "Library/Application Support/Maccy/Storage.sqlite",
    "Library/Containers/org.p0deje.Maccy/Data/Library/Application Support/Maccy/Storage.sqlite",
    "Library/Group Containers/43Q936XBMJ.org.p0deje.Maccy/Library/Application Support/Maccy/Storage.sqlite",
];

/// Resolve the store path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CLIPSIFT_DB environment variable (with tilde expansion)
/// 3. Known Maccy locations under the home directory
/// 4. `Maccy-Storage.sqlite` in the current directory
///
/// Explicit and environment paths are returned as given; opening them
/// reports a missing file. Discovered candidates must exist.
pub fn resolve_store_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    let env_path = std::env::var(STORE_PATH_ENV).ok();
    let cwd = std::env::current_dir()?;
    let candidates = candidate_paths(dirs::home_dir().as_deref(), &cwd);

    resolve_store_path_from(explicit_path, env_path.as_deref(), &candidates)
}

/// Priority resolution over already-gathered inputs.
pub fn resolve_store_path_from(
    explicit_path: Option<&str>,
    env_path: Option<&str>,
    candidates: &[PathBuf],
) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        tracing::debug!("Using {} from {}", path, STORE_PATH_ENV);
        return Ok(expand_tilde(path));
    }

    for candidate in candidates {
        tracing::debug!("Checking database path: {}", candidate.display());
        if candidate.is_file() {
            tracing::info!("Found Maccy database at: {}", candidate.display());
            return Ok(candidate.clone());
        }
    }

    tracing::info!("No Maccy database found in any expected location");
    Err(Error::NotFound {
        searched: candidates.to_vec(),
    })
}

/// Ordered discovery candidates for a given home and working directory.
pub fn candidate_paths(home: Option<&Path>, working_dir: &Path) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = home
        .map(|home| {
            MACCY_STORE_LOCATIONS
                .iter()
                .map(|relative| home.join(relative))
                .collect()
        })
        .unwrap_or_default();

    candidates.push(working_dir.join(TESTING_STORE_NAME));
    candidates
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
