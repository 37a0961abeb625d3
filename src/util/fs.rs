//! Filesystem and path utilities.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

/// Get the directory containing `path`.
///
/// Returns `None` for an empty path or a path without a parent (a bare root).
/// A bare file name yields an empty directory, meaning the current directory.
pub fn directory_of(path: &Path) -> Option<&Path> {
    if path.as_os_str().is_empty() {
        return None;
    }
    path.parent()
}

/// Join a solution-relative path onto a directory.
///
/// Solution files always use `\` as the separator; it is translated to the
/// platform separator before joining.
pub fn join_relative(dir: &Path, relative: &str) -> PathBuf {
    let relative = if std::path::MAIN_SEPARATOR == '\\' {
        relative.to_string()
    } else {
        relative.replace('\\', "/")
    };
    dir.join(relative)
}

/// Make a path absolute and fold away `.` and `..` segments.
///
/// This is purely lexical: the path does not need to exist and symlinks are
/// not followed. Relative paths are anchored at the current directory.
pub fn normalize_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    Ok(normalized)
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// List the files directly inside `dir` with the given extension, sorted.
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches && path.is_file() {
            results.push(path);
        }
    }

    results.sort();
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_of() {
        assert_eq!(
            directory_of(Path::new("/solutions/app.sln")),
            Some(Path::new("/solutions"))
        );
        assert_eq!(directory_of(Path::new("app.sln")), Some(Path::new("")));
        assert_eq!(directory_of(Path::new("")), None);
        assert_eq!(directory_of(Path::new("/")), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_join_relative_translates_separators() {
        let joined = join_relative(Path::new("/solutions"), r"sub\proj\proj.csproj");
        assert_eq!(joined, PathBuf::from("/solutions/sub/proj/proj.csproj"));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_path_folds_dots() {
        let path = Path::new("/solutions/./sub/../other/proj.csproj");
        assert_eq!(
            normalize_path(path).unwrap(),
            PathBuf::from("/solutions/other/proj.csproj")
        );

        assert_eq!(normalize_path(Path::new("/../a")).unwrap(), PathBuf::from("/a"));
    }

    #[test]
    fn test_normalize_relative_path_is_absolute() {
        let normalized = normalize_path(Path::new("some/../project.csproj")).unwrap();
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("project.csproj"));
    }

    #[test]
    fn test_files_with_extension() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.sln"), "").unwrap();
        fs::write(tmp.path().join("a.SLN"), "").unwrap();
        fs::write(tmp.path().join("readme.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("dir.sln")).unwrap();

        let files = files_with_extension(tmp.path(), "sln").unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.SLN"));
    }
}
