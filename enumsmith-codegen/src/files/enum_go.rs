//! The generated Go source file for one enum.

use std::path::{Path, PathBuf};

use enumsmith_core::GeneratedFile;

use crate::{CodeBuilder, NormalizedEnum, naming::NamingConvention};

/// Go source file declaring an enum type, its constants, and the
/// collection exposing them.
///
/// Rendering is a pure function of the normalized enum, so identical
/// input (including the timestamp) produces identical bytes. The
/// output is laid out to satisfy gofmt: tab indentation, aligned const
/// names, aligned composite literal values.
pub struct EnumGoFile<'a> {
    enum_def: &'a NormalizedEnum,
    naming: &'a NamingConvention,
}

impl<'a> EnumGoFile<'a> {
    pub fn new(enum_def: &'a NormalizedEnum, naming: &'a NamingConvention) -> Self {
        Self { enum_def, naming }
    }
}

impl GeneratedFile for EnumGoFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.naming.file_name(&self.enum_def.name))
    }

    fn render(&self) -> String {
        let e = self.enum_def;
        let key_width = e.values.iter().map(|v| v.key.len()).max().unwrap_or(0);

        let mut builder = CodeBuilder::go()
            .line(&format!(
                "// Code generated by enumsmith at {}. DO NOT EDIT.",
                e.generated_at.format("%Y-%m-%d %H:%M:%S")
            ))
            .blank()
            .line("package enum")
            .blank()
            .line(&format!("type {} string", e.name))
            .blank();

        builder = if e.values.is_empty() {
            builder.line("const ()")
        } else {
            builder.block_with_close("const (", ")", |b| {
                b.each(&e.values, |b, value| {
                    b.line(&format!(
                        "{:key_width$} {} = \"{}\"",
                        value.key, e.name, value.value
                    ))
                })
            })
        };

        builder = builder
            .blank()
            .line(&format!(
                "type {} map[{}]struct{{}}",
                e.collection_type, e.name
            ))
            .blank();

        if e.values.is_empty() {
            builder
                .line(&format!("var {} = {}{{}}", e.collection_var, e.collection_type))
                .build()
        } else {
            builder
                .block_with_close(
                    &format!("var {} = {}{{", e.collection_var, e.collection_type),
                    "}",
                    |b| {
                        b.each(&e.values, |b, value| {
                            let pad = " ".repeat(key_width - value.key.len());
                            b.line(&format!("{}:{} {{}},", value.key, pad))
                        })
                    },
                )
                .build()
        }
    }
}
