//! Structural checks keeping `tests/unit` in step with `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    /// Files that only wire modules together
    fn is_module_root(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    /// Rust files and directories below `root`, relative to it
    fn rust_tree(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let Ok(relative) = path.strip_prefix(root) else {
                    continue;
                };
                if path.is_dir() {
                    found.insert(relative.to_path_buf());
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative.to_path_buf());
                }
            }
        }

        Ok(found)
    }

    /// Module names declared with `mod name;` in a source file
    fn declared_modules(content: &str) -> BTreeSet<String> {
        content
            .lines()
            .map(str::trim)
            .filter_map(|line| line.strip_prefix("pub ").unwrap_or(line).strip_prefix("mod "))
            .filter_map(|rest| rest.strip_suffix(';'))
            .map(|name| name.trim().to_string())
            .collect()
    }

    fn listing(paths: &[&PathBuf], root: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {root}/{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source module has a unit test file at the mirrored path
    // Verified by deleting tests/unit/io/progress.rs
    #[test]
    fn test_every_source_file_is_mirrored() {
        let sources = rust_tree(Path::new(SRC_ROOT)).unwrap();
        let units = rust_tree(Path::new(UNIT_ROOT)).unwrap();

        let missing: Vec<_> = sources
            .iter()
            .filter(|path| !is_module_root(path) && !units.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            listing(&missing, SRC_ROOT)
        );
    }

    // Tests no unit test file outlives its source module
    // Verified by adding tests/unit/math/noise.rs
    #[test]
    fn test_no_orphaned_unit_tests() {
        let sources = rust_tree(Path::new(SRC_ROOT)).unwrap();
        let units = rust_tree(Path::new(UNIT_ROOT)).unwrap();

        let orphaned: Vec<_> = units
            .iter()
            .filter(|path| !is_module_root(path) && !sources.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a source module:\n{}",
            listing(&orphaned, UNIT_ROOT)
        );
    }

    // Tests each unit module root declares all of its sibling files and directories
    // Verified by removing `mod progress;` from tests/unit/io/mod.rs
    #[test]
    fn test_unit_module_roots_declare_children() {
        let root = Path::new(UNIT_ROOT);
        let mut directories = vec![PathBuf::new()];
        directories.extend(
            rust_tree(root)
                .unwrap()
                .into_iter()
                .filter(|path| root.join(path).is_dir()),
        );
        let mut undeclared = Vec::new();

        for directory in &directories {
            let module_root = if directory.as_os_str().is_empty() {
                root.join("main.rs")
            } else {
                root.join(directory).join("mod.rs")
            };
            let declared = declared_modules(&fs::read_to_string(&module_root).unwrap());

            for entry in fs::read_dir(root.join(directory)).unwrap() {
                let path = entry.unwrap().path();
                if is_module_root(&path) {
                    continue;
                }
                let name = if path.is_dir() {
                    path.file_name()
                } else {
                    path.file_stem()
                };
                let Some(name) = name.and_then(|name| name.to_str()) else {
                    continue;
                };
                if !declared.contains(name) {
                    undeclared.push(format!("  - {} misses `mod {name};`", module_root.display()));
                }
            }
        }

        undeclared.sort();
        assert!(
            undeclared.is_empty(),
            "Unit test modules that are never compiled:\n{}",
            undeclared.join("\n")
        );
    }

    // Tests every non-root file under tests/ defines at least one test
    // Verified by stripping the #[test] attributes from tests/pipeline.rs
    #[test]
    fn test_every_test_file_has_tests() {
        let root = Path::new("tests");
        let empty: Vec<_> = rust_tree(root)
            .unwrap()
            .into_iter()
            .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
            .filter(|path| !is_module_root(path))
            .filter(|path| {
                fs::read_to_string(root.join(path)).is_ok_and(|content| !content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(&empty.iter().collect::<Vec<_>>(), "tests")
        );
    }
}
