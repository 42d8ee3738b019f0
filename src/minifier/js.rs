//! # JavaScript 压缩器
//!
//! 基于 oxc 工具链实现 `Minifier`：解析 -> 压缩/混淆 -> 紧凑输出。
//!
//! | compress | mangle | 流程                              |
//! |----------|--------|-----------------------------------|
//! | true     | *      | `oxc_minifier::Minifier`          |
//! | false    | true   | 仅 `oxc_mangler::Mangler`         |
//! | false    | false  | 仅去除空白（codegen minify 模式） |
//!
//! ## 依赖关系
//! - 被 `commands/minify.rs` 使用
//! - 使用 `oxc_parser`, `oxc_minifier`, `oxc_mangler`, `oxc_codegen`

use super::{Minifier, MinifyOptions, TopLevel};

use oxc_allocator::Allocator;
use oxc_codegen::{CodeGenerator, CodegenOptions};
use oxc_mangler::Mangler;
use oxc_minifier::{CompressOptions, Minifier as OxcMinifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

/// JavaScript 压缩器
#[derive(Debug, Clone)]
pub struct JsMinifier {
    options: MinifyOptions,
}

impl JsMinifier {
    /// 创建压缩器
    pub fn new(options: MinifyOptions) -> Self {
        Self { options }
    }

    fn source_type(&self) -> SourceType {
        SourceType::default().with_module(self.options.top_level == TopLevel::Module)
    }
}

impl Minifier for JsMinifier {
    fn minify(&self, source: &str) -> std::result::Result<Vec<u8>, String> {
        // Allocator 不能跨线程共享，每次调用单独创建
        let allocator = Allocator::default();
        let parsed = Parser::new(&allocator, source, self.source_type()).parse();

        if parsed.panicked || !parsed.errors.is_empty() {
            let reasons: Vec<String> = parsed.errors.iter().map(|e| e.to_string()).collect();
            return Err(if reasons.is_empty() {
                "parser aborted".to_string()
            } else {
                reasons.join("; ")
            });
        }

        let mut program = parsed.program;

        let mangler = if self.options.compress {
            let options = MinifierOptions {
                mangle: self.options.mangle,
                compress: CompressOptions::default(),
            };
            OxcMinifier::new(options)
                .build(&allocator, &mut program)
                .mangler
        } else if self.options.mangle {
            Some(Mangler::default().build(&program))
        } else {
            None
        };

        let code = CodeGenerator::new()
            .with_options(CodegenOptions {
                minify: true,
                ..CodegenOptions::default()
            })
            .with_mangler(mangler)
            .build(&program)
            .code;

        Ok(code.into_bytes())
    }
}
