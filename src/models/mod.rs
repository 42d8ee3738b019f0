//! # 数据模型模块
//!
//! 定义源脚本与压缩产物之间的命名规则。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: artifact

pub mod artifact;

pub use artifact::{is_minified_artifact, output_path_for};
