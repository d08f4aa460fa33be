//! Wrapping integer literals in `fault_int!` sites.
//!
//! Every integer literal evaluated at runtime becomes its own fault site:
//!
//! ```text
//! let retries = 3;        =>  let retries = ::faultline::fault_int!(3);
//! ```
//!
//! A negated literal is wrapped whole (`fault_int!(-128)`), so that the
//! literal stays the direct operand of the negation and `i8::MIN` style values
//! still pass the `overflowing_literals` lint.
//!
//! Literals that must stay constant expressions are left alone: `const` and
//! `static` items, `const fn` bodies, `const` blocks, enum discriminants, array
//! lengths, types, const generic arguments, patterns and attributes. Macro
//! arguments are opaque token streams and are never touched, which is also why
//! a second run over instrumented source changes nothing.

use std::fs;
use std::io::Write;
use std::path::Path;

use proc_macro2::LineColumn;
use syn::visit::{self, Visit};
use syn::{
    Attribute, Expr, ExprLit, ExprUnary, GenericArgument, GenericParam, ImplItemConst, ImplItemFn,
    ItemConst, ItemFn, ItemStatic, Lit, LitInt, Macro, Pat, TraitItemConst, TraitItemFn, Type, UnOp,
    Variant,
};

use crate::error::InjectError;
use crate::line_index::LineIndex;

/// Macro path used when none is configured.
pub const DEFAULT_MACRO_PATH: &str = "::faultline::fault_int";

const BOM: &str = "\u{feff}";

/// Options for [`instrument_source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentOptions {
    /// Path of the wrapping macro, without the `!`.
    pub macro_path: String,
}

impl Default for InstrumentOptions {
    fn default() -> Self {
        Self {
            macro_path: DEFAULT_MACRO_PATH.to_string(),
        }
    }
}

/// Result of instrumenting one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrumented {
    /// The rewritten source.
    pub source: String,
    /// Number of literals wrapped.
    pub wrapped: usize,
}

/// Wraps every runtime integer literal of `source` in the configured macro.
///
/// `path` only labels errors. The input must parse, and so must the output.
pub fn instrument_source(
    path: &Path,
    source: &str,
    options: &InstrumentOptions,
) -> Result<Instrumented, InjectError> {
    let (bom, body) = match source.strip_prefix(BOM) {
        Some(body) => (BOM, body),
        None => ("", source),
    };

    let file = syn::parse_file(body).map_err(|source| InjectError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut collector = LiteralCollector::default();
    collector.visit_file(&file);

    let index = LineIndex::new(body);
    let mut ranges = Vec::with_capacity(collector.literals.len());
    for (start, end) in collector.literals {
        let range = index
            .offset(start)
            .zip(index.offset(end))
            .ok_or_else(|| InjectError::Span {
                path: path.to_path_buf(),
                line: start.line,
                column: start.column,
            })?;
        ranges.push(range);
    }

    // Splice back to front so earlier offsets stay valid.
    ranges.sort_unstable();
    let mut rewritten = body.to_string();
    for &(start, end) in ranges.iter().rev() {
        let wrapped = format!("{}!({})", options.macro_path, &body[start..end]);
        rewritten.replace_range(start..end, &wrapped);
    }

    if let Err(source) = syn::parse_file(&rewritten) {
        return Err(InjectError::Unparseable {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::debug!(
        path = %path.display(),
        wrapped = ranges.len(),
        skipped_receivers = collector.skipped_receivers,
        "instrumented source"
    );

    Ok(Instrumented {
        source: format!("{bom}{rewritten}"),
        wrapped: ranges.len(),
    })
}

/// Reads and instruments `path` without writing anything.
pub fn instrument_path(path: &Path, options: &InstrumentOptions) -> Result<Instrumented, InjectError> {
    let source = fs::read_to_string(path).map_err(|source| InjectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    instrument_source(path, &source, options)
}

/// Instruments `path` in place. The file is only written if a literal was wrapped.
///
/// The new text goes to a temporary file next to `path`, which then replaces
/// it, so a failed write leaves the original intact.
pub fn instrument_in_place(path: &Path, options: &InstrumentOptions) -> Result<usize, InjectError> {
    let instrumented = instrument_path(path, options)?;
    if instrumented.wrapped > 0 {
        replace_file(path, &instrumented.source).map_err(|source| InjectError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(instrumented.wrapped)
}

fn replace_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let permissions = fs::metadata(path)?.permissions();

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Collects the positions of integer literals that are safe to wrap.
#[derive(Default)]
struct LiteralCollector {
    literals: Vec<(LineColumn, LineColumn)>,
    skipped_receivers: usize,
}

impl LiteralCollector {
    fn push(&mut self, start: LineColumn, lit: &LitInt) {
        self.literals.push((start, lit.span().end()));
    }
}

fn int_literal(expr: &Expr) -> Option<&LitInt> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => Some(lit),
        _ => None,
    }
}

/// `1.max(x)` stops compiling once the receiver is a generic macro call.
fn is_int_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Lit(_) => int_literal(expr).is_some(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => int_literal(expr).is_some(),
        Expr::Paren(paren) => is_int_literal(&paren.expr),
        _ => false,
    }
}

impl<'ast> Visit<'ast> for LiteralCollector {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        match expr {
            Expr::Lit(ExprLit {
                lit: Lit::Int(lit), ..
            }) => self.push(lit.span().start(), lit),
            Expr::Unary(ExprUnary {
                op: UnOp::Neg(minus),
                expr: operand,
                ..
            }) => match int_literal(operand) {
                Some(lit) => self.push(minus.spans[0].start(), lit),
                None => visit::visit_expr(self, expr),
            },
            Expr::MethodCall(call) if is_int_literal(&call.receiver) => {
                tracing::trace!(
                    line = call.method.span().start().line,
                    method = %call.method,
                    "skipping literal receiver"
                );
                self.skipped_receivers += 1;
                for arg in &call.args {
                    self.visit_expr(arg);
                }
            }
            Expr::Repeat(repeat) => self.visit_expr(&repeat.expr),
            Expr::Const(_) => {}
            _ => visit::visit_expr(self, expr),
        }
    }

    fn visit_item_fn(&mut self, item: &'ast ItemFn) {
        if item.sig.constness.is_none() {
            visit::visit_item_fn(self, item);
        }
    }

    fn visit_impl_item_fn(&mut self, item: &'ast ImplItemFn) {
        if item.sig.constness.is_none() {
            visit::visit_impl_item_fn(self, item);
        }
    }

    fn visit_trait_item_fn(&mut self, item: &'ast TraitItemFn) {
        if item.sig.constness.is_none() {
            visit::visit_trait_item_fn(self, item);
        }
    }

    fn visit_item_const(&mut self, _: &'ast ItemConst) {}

    fn visit_item_static(&mut self, _: &'ast ItemStatic) {}

    fn visit_impl_item_const(&mut self, _: &'ast ImplItemConst) {}

    fn visit_trait_item_const(&mut self, _: &'ast TraitItemConst) {}

    fn visit_variant(&mut self, _: &'ast Variant) {}

    fn visit_type(&mut self, _: &'ast Type) {}

    fn visit_generic_argument(&mut self, _: &'ast GenericArgument) {}

    fn visit_generic_param(&mut self, _: &'ast GenericParam) {}

    fn visit_pat(&mut self, _: &'ast Pat) {}

    fn visit_attribute(&mut self, _: &'ast Attribute) {}

    fn visit_macro(&mut self, _: &'ast Macro) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instrument(source: &str) -> Instrumented {
        instrument_source(Path::new("test.rs"), source, &InstrumentOptions::default())
            .expect("instrumentation failed")
    }

    #[test]
    fn test_wraps_runtime_literals() {
        let out = instrument("fn f() -> u32 { let a = 3; a + 0x10 }\n");
        assert_eq!(
            out.source,
            "fn f() -> u32 { let a = ::faultline::fault_int!(3); a + ::faultline::fault_int!(0x10) }\n"
        );
        assert_eq!(out.wrapped, 2);
    }

    #[test]
    fn test_leaves_const_contexts() {
        let source = "const N: usize = 4;\n\
                      static S: u8 = 1;\n\
                      enum E { A = 1 }\n\
                      const fn k() -> u8 { 2 }\n\
                      fn f(x: u8) -> [u8; 2] { match x { 5 => [0; 2], _ => [x; 2] } }\n";
        let out = instrument(source);
        assert_eq!(out.wrapped, 1);
        assert!(out.source.contains("[::faultline::fault_int!(0); 2]"));
    }

    #[test]
    fn test_skips_macros_and_is_idempotent() {
        let once = instrument("fn f() { let v = vec![1, 2]; let n = 7; }\n");
        assert_eq!(once.wrapped, 1);
        let twice = instrument(&once.source);
        assert_eq!(twice.wrapped, 0);
        assert_eq!(twice.source, once.source);
    }

    #[test]
    fn test_literal_receiver_is_skipped() {
        let out = instrument("fn f(x: u64) -> u64 { 5.max(x + 1) }\n");
        assert_eq!(
            out.source,
            "fn f(x: u64) -> u64 { 5.max(x + ::faultline::fault_int!(1)) }\n"
        );
    }

    #[test]
    fn test_custom_macro_path() {
        let options = InstrumentOptions {
            macro_path: "fault_int".to_string(),
        };
        let out = instrument_source(Path::new("t.rs"), "fn f() -> i8 { -1 }", &options).unwrap();
        assert_eq!(out.source, "fn f() -> i8 { fault_int!(-1) }");
    }

    #[test]
    fn test_negated_literal_is_wrapped_whole() {
        let out = instrument(
            "fn lo() -> i8 { -128 }\nfn lo64() -> i64 { - 9223372036854775808 }\nfn d(x: i32) -> i32 { x - 1 }\n",
        );
        assert_eq!(
            out.source,
            "fn lo() -> i8 { ::faultline::fault_int!(-128) }\n\
             fn lo64() -> i64 { ::faultline::fault_int!(- 9223372036854775808) }\n\
             fn d(x: i32) -> i32 { x - ::faultline::fault_int!(1) }\n"
        );
        assert_eq!(out.wrapped, 3);
    }

    #[test]
    fn test_negated_literal_receiver_is_skipped() {
        let out = instrument("fn f() -> i32 { (-7).abs() }\n");
        assert_eq!(out.wrapped, 0);
    }

    #[test]
    fn test_bom_is_preserved() {
        let out = instrument("\u{feff}fn f() -> u8 { 9 }\n");
        assert_eq!(out.source, "\u{feff}fn f() -> u8 { ::faultline::fault_int!(9) }\n");
    }

    #[test]
    fn test_rejects_invalid_input() {
        let err = instrument_source(
            Path::new("broken.rs"),
            "fn f( {",
            &InstrumentOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, InjectError::Parse { .. }));
        assert_eq!(err.to_string(), "broken.rs does not parse as Rust");
    }
}
