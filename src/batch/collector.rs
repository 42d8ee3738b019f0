//! # 文件收集器
//!
//! 在基准目录下按 include / exclude glob 模式收集待压缩的源脚本。
//!
//! ## 功能
//! - 多个 include 模式（任一匹配即选中）
//! - 多个 exclude 模式（任一匹配即排除）
//! - 始终排除已压缩产物（`*.min.*`）
//! - 以 `.` 开头的文件和目录不参与匹配
//! - 收录指向文件的符号链接，但不进入链接目录，不离开基准目录
//! - 结果排序，保证日志可复现
//!
//! ## 依赖关系
//! - 被 `commands/minify.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配模式

use crate::error::{MinifierError, Result};
use crate::models::is_minified_artifact;

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// `*` 不跨越目录分隔符，`**` 匹配任意层目录，通配符不匹配隐藏路径
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// 文件收集器
pub struct FileCollector {
    /// 基准目录
    base: PathBuf,
    /// include 模式
    includes: Vec<Pattern>,
    /// exclude 模式
    excludes: Vec<Pattern>,
}

impl FileCollector {
    /// 创建新的文件收集器，编译所有模式
    pub fn new<I, E>(base: PathBuf, includes: I, excludes: E) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let includes = compile_patterns(includes)?;
        if includes.is_empty() {
            return Err(MinifierError::InvalidArgument(
                "at least one include pattern is required".to_string(),
            ));
        }
        let excludes = compile_patterns(excludes)?;

        Ok(Self {
            base,
            includes,
            excludes,
        })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// 收集所有匹配的文件（已排序）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.base.is_dir() {
            return Err(MinifierError::DirectoryNotFound {
                path: self.base.display().to_string(),
            });
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.base).follow_links(false) {
            let entry = entry.map_err(|e| MinifierError::DiscoveryFailed {
                path: e
                    .path()
                    .unwrap_or(&self.base)
                    .display()
                    .to_string(),
                reason: e.to_string(),
            })?;

            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());

            if is_file && self.is_selected(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    /// 判断文件是否被选中
    fn is_selected(&self, path: &Path) -> bool {
        if is_minified_artifact(path) {
            return false;
        }

        let relative = match relative_slash_path(&self.base, path) {
            Some(rel) => rel,
            None => return false,
        };

        let included = self
            .includes
            .iter()
            .any(|p| p.matches_with(&relative, MATCH_OPTIONS));

        included
            && !self
                .excludes
                .iter()
                .any(|p| p.matches_with(&relative, MATCH_OPTIONS))
    }
}

/// 编译 glob 模式
fn compile_patterns<P>(patterns: P) -> Result<Vec<Pattern>>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| {
            let p = p.as_ref().trim();
            Pattern::new(p).map_err(|e| MinifierError::InvalidPattern {
                pattern: p.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// 相对基准目录的路径，统一使用 `/` 分隔
fn relative_slash_path(base: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Vec<&str> = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "var a = 1;").unwrap();
    }

    fn plugin_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "forms/assets/script/form.js");
        touch(root, "forms/assets/script/form.min.js");
        touch(root, "forms/assets/script/vendor/lib.js");
        touch(root, "forms/assets/style/form.css");
        touch(root, "forms/src/build.js");
        touch(root, "gallery/assets/script/gallery.js");
        dir
    }

    fn default_collector(root: &Path) -> FileCollector {
        FileCollector::new(
            root.to_path_buf(),
            ["**/assets/script/**/*.js"],
            ["**/assets/script/**/*.min.js"],
        )
        .unwrap()
    }

    #[test]
    fn test_collect_default_patterns() {
        let dir = plugin_tree();
        let files = default_collector(dir.path()).collect().unwrap();

        let rel: Vec<String> = files
            .iter()
            .map(|f| relative_slash_path(dir.path(), f).unwrap())
            .collect();
        assert_eq!(
            rel,
            vec![
                "forms/assets/script/form.js",
                "forms/assets/script/vendor/lib.js",
                "gallery/assets/script/gallery.js",
            ]
        );
    }

    #[test]
    fn test_artifacts_excluded_without_exclude_pattern() {
        let dir = plugin_tree();
        let collector =
            FileCollector::new(dir.path().to_path_buf(), ["**/*.js"], Vec::<String>::new())
                .unwrap();
        let files = collector.collect().unwrap();

        assert!(files.iter().all(|f| !is_minified_artifact(f)));
        assert!(files.iter().any(|f| f.ends_with("forms/src/build.js")));
    }

    #[test]
    fn test_exclude_pattern() {
        let dir = plugin_tree();
        let collector = FileCollector::new(
            dir.path().to_path_buf(),
            ["**/assets/script/**/*.js"],
            ["**/vendor/*.js"],
        )
        .unwrap();
        let files = collector.collect().unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| !f.ends_with("vendor/lib.js")));
    }

    #[test]
    fn test_collect_is_sorted() {
        let dir = plugin_tree();
        let files = default_collector(dir.path()).collect().unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_missing_base_directory() {
        let dir = tempfile::tempdir().unwrap();
        let collector = default_collector(&dir.path().join("missing"));
        assert!(matches!(
            collector.collect(),
            Err(MinifierError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileCollector::new(PathBuf::from("."), ["**/[.js"], ["*.min.js"]);
        assert!(matches!(result, Err(MinifierError::InvalidPattern { .. })));
    }

    #[test]
    fn test_requires_include_pattern() {
        let result = FileCollector::new(PathBuf::from("."), Vec::<String>::new(), ["*.min.js"]);
        assert!(matches!(result, Err(MinifierError::InvalidArgument(_))));
    }

    #[test]
    fn test_hidden_paths_not_matched() {
        let dir = plugin_tree();
        touch(dir.path(), "forms/assets/script/.eslintrc.js");
        touch(dir.path(), "forms/assets/script/.cache/chunk.js");

        let files = default_collector(dir.path()).collect().unwrap();

        assert_eq!(files.len(), 3);
        assert!(files
            .iter()
            .all(|f| !relative_slash_path(dir.path(), f).unwrap().contains("/.")));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_script_collected() {
        let dir = plugin_tree();
        let shared = tempfile::tempdir().unwrap();
        touch(shared.path(), "shared.js");
        std::os::unix::fs::symlink(
            shared.path().join("shared.js"),
            dir.path().join("gallery/assets/script/shared.js"),
        )
        .unwrap();

        let files = default_collector(dir.path()).collect().unwrap();

        assert!(files
            .iter()
            .any(|f| f.ends_with("gallery/assets/script/shared.js")));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_aborts_discovery() {
        use std::os::unix::fs::PermissionsExt;

        let dir = plugin_tree();
        let locked = dir.path().join("gallery/assets/script");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root 不受权限限制，此时无法构造遍历错误
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = default_collector(dir.path()).collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(MinifierError::DiscoveryFailed { path, .. }) => {
                assert!(path.ends_with("gallery/assets/script"), "{}", path);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_relative_slash_path() {
        let rel = relative_slash_path(Path::new("/a/b"), Path::new("/a/b/c/d.js")).unwrap();
        assert_eq!(rel, "c/d.js");
        assert!(relative_slash_path(Path::new("/a/b"), Path::new("/x/d.js")).is_none());
    }
}
