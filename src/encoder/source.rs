//! Call-site path shortening.
//!
//! Paths are shown relative to the working directory captured the first time
//! a handler is built. A path outside that directory, or a relative path such
//! as the ones `Location::caller` usually reports, is printed unchanged.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static WORKING_DIR: LazyLock<Option<PathBuf>> = LazyLock::new(|| std::env::current_dir().ok());

/// Pins the working directory used by [`shorten`].
pub(crate) fn capture_working_dir() {
    LazyLock::force(&WORKING_DIR);
}

pub(super) fn shorten(file: &str) -> Cow<'_, str> {
    WORKING_DIR
        .as_deref()
        .map_or(Cow::Borrowed(file), |cwd| relative_to(file, cwd))
}

fn relative_to<'a>(file: &'a str, base: &Path) -> Cow<'a, str> {
    let path = Path::new(file);
    if !path.is_absolute() {
        return Cow::Borrowed(file);
    }
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => Cow::Owned(rel.to_string_lossy().into_owned()),
        _ => Cow::Borrowed(file),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn strips_base_prefix() {
        let base = Path::new("/home/dev/project");
        assert_eq!(
            relative_to("/home/dev/project/src/main.rs", base),
            "src/main.rs"
        );
    }

    #[test]
    fn leaves_outside_paths_alone() {
        let base = Path::new("/home/dev/project");
        assert_eq!(relative_to("/usr/lib/rust/lib.rs", base), "/usr/lib/rust/lib.rs");
    }

    #[test]
    fn leaves_relative_paths_alone() {
        let base = Path::new("/home/dev/project");
        assert_eq!(relative_to("src/lib.rs", base), "src/lib.rs");
    }
}
