use std::path::{Path, PathBuf};

use anyhow::Result;
use ignore::WalkBuilder;

/// Whether `path` is a Kotlin UI source file.
fn is_kotlin_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "kt")
}

/// Walk directories and collect .kt file paths.
///
/// Features:
/// - Always recursive traversal
/// - Always skips Gradle build/ directories
/// - Always respects git ignore patterns
/// - Returns deterministically sorted paths
pub fn collect_kotlin_files(paths: &[impl AsRef<Path>], hidden: bool) -> Result<Vec<PathBuf>> {
    let walk_paths: Vec<_> = if paths.is_empty() {
        vec![std::env::current_dir()?]
    } else {
        paths.iter().map(|p| p.as_ref().to_path_buf()).collect()
    };

    let mut files = Vec::new();

    for root in walk_paths {
        let mut builder = WalkBuilder::new(&root);

        builder
            .hidden(!hidden)
            .git_ignore(true)
            .git_exclude(true)
            .git_global(true)
            .filter_entry(|entry| {
                // Skip Gradle output directories
                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    if let Some(name) = entry.file_name().to_str() {
                        if name == "build" {
                            return false;
                        }
                    }
                }
                true
            });

        for result in builder.build() {
            let entry = result?;
            let path = entry.path();

            if path.is_file() && is_kotlin_file(path) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort(); // Deterministic ordering
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collects_only_kotlin_files_sorted() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::create_dir(temp.path().join("ui"))?;
        fs::write(temp.path().join("ui/b.kt"), "")?;
        fs::write(temp.path().join("a.kt"), "")?;
        fs::write(temp.path().join("notes.md"), "")?;

        let files = collect_kotlin_files(&[temp.path()], false)?;
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(names, vec![PathBuf::from("a.kt"), PathBuf::from("ui/b.kt")]);
        Ok(())
    }

    #[test]
    fn test_skips_build_directories() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::create_dir(temp.path().join("build"))?;
        fs::write(temp.path().join("build/generated.kt"), "")?;
        fs::write(temp.path().join("Screen.kt"), "")?;

        let files = collect_kotlin_files(&[temp.path()], false)?;
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Screen.kt"));
        Ok(())
    }
}
