//! Listing the environment variables a file's fault sites respond to.
//!
//! Each `fault_*!` invocation is located the way `column!()` sees it: the
//! start of the macro path, columns counted from 1. Names are built by the
//! same routine the runtime uses, so the output can be pasted straight into a
//! test harness.
//!
//! The arguments of a fault macro are parsed as expressions, so sites nested
//! inside them (`fault_conditional!({ fault_return!(); })`) are listed too.
//! Invocations inside the arguments of other macros (`vec![..]`, `assert!(..)`)
//! are not parsed and therefore not listed.

use std::fs;
use std::path::Path;

use faultline::{FaultKind, location_id, named_id, with_suffix};
use proc_macro2::{LineColumn, TokenStream};
use syn::parse::{ParseStream, Parser};
use syn::punctuated::Punctuated;
use syn::visit::Visit;
use syn::{Expr, ExprCall, ExprLit, ExprMacro, Ident, Lit, Macro, Token};

use crate::error::InjectError;

/// One environment variable consulted by one fault site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteListing {
    /// The environment variable.
    pub var: String,
    /// Line of the macro invocation, 1-based.
    pub line: usize,
    /// Column of the macro invocation, 1-based.
    pub column: usize,
    /// Which macro it is.
    pub kind: FaultKind,
}

impl SiteListing {
    /// `<VAR>\t<path>:<line>:<column>\t<macro>!`, one line of `list` output.
    pub fn render(&self, path: &Path) -> String {
        format!(
            "{}\t{}:{}:{}\t{}!",
            self.var,
            path.display(),
            self.line,
            self.column,
            self.kind.macro_name()
        )
    }
}

/// Lists the fault variables of `source`, in source order.
///
/// `path` provides the file name used in location identifiers.
pub fn list_sites(path: &Path, source: &str) -> Result<Vec<SiteListing>, InjectError> {
    let file = syn::parse_file(source.strip_prefix('\u{feff}').unwrap_or(source)).map_err(
        |source| InjectError::Parse {
            path: path.to_path_buf(),
            source,
        },
    )?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut collector = SiteCollector {
        file_name: &file_name,
        listings: Vec::new(),
    };
    collector.visit_file(&file);

    let mut listings = collector.listings;
    listings.sort_by_key(|listing| (listing.line, listing.column));
    Ok(listings)
}

/// Reads `path` and lists its fault variables.
pub fn list_path(path: &Path) -> Result<Vec<SiteListing>, InjectError> {
    let source = fs::read_to_string(path).map_err(|source| InjectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    list_sites(path, &source)
}

/// How a macro invocation names its site.
enum SiteArg {
    /// No `site:` argument or `site: fault_site!()`, named after its location.
    Implicit,
    /// `site: FaultSite::named("...")`.
    Named(String),
    /// `site: <anything else>`, unknown until runtime.
    Opaque,
}

/// A parsed fault macro body.
struct Invocation {
    site: SiteArg,
    /// The remaining arguments, empty when they are not expressions (a loop
    /// label).
    args: Vec<Expr>,
}

fn invocation(input: ParseStream) -> syn::Result<Invocation> {
    let fork = input.fork();
    let explicit = fork.parse::<Ident>().is_ok_and(|ident| ident == "site")
        && fork.peek(Token![:])
        && !fork.peek(Token![::]);

    let site = if explicit {
        input.parse::<Ident>()?;
        input.parse::<Token![:]>()?;
        let site: Expr = input.parse()?;
        if !input.is_empty() {
            input.parse::<Token![,]>()?;
        }
        site_arg(&site)
    } else {
        SiteArg::Implicit
    };

    let rest: TokenStream = input.parse()?;
    let args = Punctuated::<Expr, Token![,]>::parse_terminated
        .parse2(rest)
        .map(|args| args.into_iter().collect())
        .unwrap_or_default();

    Ok(Invocation { site, args })
}

fn site_arg(site: &Expr) -> SiteArg {
    if is_fault_site(site) {
        // `fault_site!()` here expands at the location of the enclosing macro.
        return SiteArg::Implicit;
    }
    match named_site(site) {
        Some(name) => SiteArg::Named(name),
        None => SiteArg::Opaque,
    }
}

/// `fault_site!()`, under any path prefix.
fn is_fault_site(expr: &Expr) -> bool {
    let Expr::Macro(ExprMacro { mac, .. }) = expr else {
        return false;
    };
    mac.tokens.is_empty()
        && mac
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "fault_site")
}

/// The name in `FaultSite::named("...")`, under any path prefix.
fn named_site(expr: &Expr) -> Option<String> {
    let Expr::Call(ExprCall { func, args, .. }) = expr else {
        return None;
    };
    let Expr::Path(func) = func.as_ref() else {
        return None;
    };
    let mut segments = func.path.segments.iter().rev();
    if segments.next()?.ident != "named" || segments.next()?.ident != "FaultSite" {
        return None;
    }
    match args.first() {
        Some(Expr::Lit(ExprLit {
            lit: Lit::Str(name),
            ..
        })) if args.len() == 1 => Some(name.value()),
        _ => None,
    }
}

struct SiteCollector<'a> {
    file_name: &'a str,
    listings: Vec<SiteListing>,
}

impl SiteCollector<'_> {
    fn record(&mut self, kind: FaultKind, start: LineColumn, arg: SiteArg) {
        let column = start.column + 1;
        let id = match arg {
            SiteArg::Implicit => location_id(self.file_name, start.line as u32, column as u32),
            SiteArg::Named(name) => named_id(&name),
            SiteArg::Opaque => {
                tracing::debug!(
                    line = start.line,
                    column,
                    "site expression is not a literal name, skipping"
                );
                return;
            }
        };
        for &suffix in kind.suffixes() {
            self.listings.push(SiteListing {
                var: with_suffix(id.clone(), suffix),
                line: start.line,
                column,
                kind,
            });
        }
    }
}

impl<'ast> Visit<'ast> for SiteCollector<'_> {
    fn visit_macro(&mut self, mac: &'ast Macro) {
        let Some(last) = mac.path.segments.last() else {
            return;
        };
        let Some(kind) = FaultKind::from_macro_name(&last.ident.to_string()) else {
            return;
        };

        let start = match (&mac.path.leading_colon, mac.path.segments.first()) {
            (Some(colon), _) => colon.spans[0].start(),
            (None, Some(first)) => first.ident.span().start(),
            (None, None) => return,
        };

        match mac.parse_body_with(invocation) {
            Ok(Invocation { site, args }) => {
                self.record(kind, start, site);
                // The arguments are owned here, so visit them at their own lifetime.
                for arg in &args {
                    Visit::visit_expr(self, arg);
                }
            }
            Err(err) => tracing::warn!(
                line = start.line,
                error = %err,
                "unparseable {} invocation",
                kind.macro_name()
            ),
        }
    }
}
