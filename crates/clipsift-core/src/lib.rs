mod path;

pub use path::{
    Error, MACCY_STORE_LOCATIONS, Result, STORE_PATH_ENV, TESTING_STORE_NAME, candidate_paths,
    expand_tilde, resolve_store_path, resolve_store_path_from,
};
