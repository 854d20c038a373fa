use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
///
/// `GLADE_DATA_DIR` wins when set; otherwise the first existing candidate near the
/// working directory or the executable is used.
fn detect_data_root() -> PathBuf {
    if let Some(dir) = env::var_os("GLADE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    let mut candidates = vec![PathBuf::from("glade_engine/data"), PathBuf::from("data")];
    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("glade_engine/data"));
        candidates.push(dir.join("data"));
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("glade_engine/data"));
            candidates.push(parent.join("data"));
        }
    }
    first_existing_dir(candidates).unwrap_or_else(|| PathBuf::from("glade_engine/data"))
}

fn first_existing_dir(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|candidate| candidate.is_dir())
}
