//! Path utilities: expand ~ and resolve the database location.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute paths are kept, relative ones are placed under `base`.
pub fn resolve_under(base: &Path, name: &str) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_names_land_under_base() {
        let base = Path::new("/var/lib/rattendance");
        assert_eq!(
            resolve_under(base, "members.sqlite"),
            PathBuf::from("/var/lib/rattendance/members.sqlite")
        );
        assert_eq!(
            resolve_under(base, "/tmp/other.sqlite"),
            PathBuf::from("/tmp/other.sqlite")
        );
    }
}
