//! The `fault_*!` macros.
//!
//! Every behavior macro has two forms. The implicit form derives its site from
//! the invocation (`file!()`, `line!()`, `column!()`); the explicit form takes
//! `site: <expr>` as first argument, for named sites or for code generated by
//! other macros, where every expansion would otherwise share one location.

/// The [`FaultSite`](crate::FaultSite) of this invocation.
///
/// When called from another macro, the location is that of the outermost
/// invocation, which is what gives every `fault_*!` call its own site.
#[macro_export]
macro_rules! fault_site {
    () => {
        $crate::FaultSite::at(file!(), line!(), column!())
    };
}

/// `true` if the bare site variable is set.
///
/// ```rust
/// # fn cache_lookup() -> Option<u32> { Some(1) }
/// let hit = if faultline::fault_active!() { None } else { cache_lookup() };
/// # assert_eq!(hit, Some(1));
/// ```
#[macro_export]
macro_rules! fault_active {
    (site: $site:expr) => {
        $crate::FaultSite::is_active(&$site, ::core::option::Option::None)
    };
    () => {
        $crate::fault_active!(site: $crate::fault_site!())
    };
}

/// `return;` from the enclosing function when armed.
#[macro_export]
macro_rules! fault_return {
    (site: $site:expr) => {
        if $crate::FaultSite::is_active(&$site, ::core::option::Option::None) {
            return;
        }
    };
    () => {
        $crate::fault_return!(site: $crate::fault_site!())
    };
}

/// `return 0;` from the enclosing function when `_TRUE` is armed.
#[macro_export]
macro_rules! fault_return_int {
    (site: $site:expr) => {
        if $crate::FaultSite::is_active(
            &$site,
            ::core::option::Option::Some($crate::Suffix::True),
        ) {
            return 0;
        }
    };
    () => {
        $crate::fault_return_int!(site: $crate::fault_site!())
    };
}

/// Runs the block unless `_SKIP` is armed.
///
/// ```rust
/// let mut flushed = false;
/// faultline::fault_conditional!({
///     flushed = true;
/// });
/// assert!(flushed);
/// ```
#[macro_export]
macro_rules! fault_conditional {
    (site: $site:expr, $body:block) => {
        if !$crate::FaultSite::is_active(
            &$site,
            ::core::option::Option::Some($crate::Suffix::Skip),
        ) $body
    };
    ($body:block) => {
        $crate::fault_conditional!(site: $crate::fault_site!(), $body)
    };
}

/// `return true;` when `_TRUE` is armed, else `return false;` when `_FALSE` is.
///
/// `_TRUE` is checked first, so it wins when both are set.
#[macro_export]
macro_rules! fault_return_bool {
    (site: $site:expr) => {{
        let site = $site;
        if site.is_active(::core::option::Option::Some($crate::Suffix::True)) {
            return true;
        }
        if site.is_active(::core::option::Option::Some($crate::Suffix::False)) {
            return false;
        }
    }};
    () => {
        $crate::fault_return_bool!(site: $crate::fault_site!())
    };
}

/// `return $val;` when armed. `$val` is only evaluated on that path.
///
/// ```rust
/// fn open() -> Result<u32, &'static str> {
///     faultline::fault_return_val!(Err("injected"));
///     Ok(3)
/// }
/// assert_eq!(open(), Ok(3));
/// ```
#[macro_export]
macro_rules! fault_return_val {
    (site: $site:expr, $val:expr) => {
        if $crate::FaultSite::is_active(&$site, ::core::option::Option::None) {
            return $val;
        }
    };
    ($val:expr) => {
        $crate::fault_return_val!(site: $crate::fault_site!(), $val)
    };
}

/// `return $first;` when `_OPT1` is armed, else `return $second;` when `_OPT2` is.
#[macro_export]
macro_rules! fault_return_val2 {
    (site: $site:expr, $first:expr, $second:expr) => {{
        let site = $site;
        if site.is_active(::core::option::Option::Some($crate::Suffix::Opt1)) {
            return $first;
        }
        if site.is_active(::core::option::Option::Some($crate::Suffix::Opt2)) {
            return $second;
        }
    }};
    ($first:expr, $second:expr) => {
        $crate::fault_return_val2!(site: $crate::fault_site!(), $first, $second)
    };
}

/// `break` out of the enclosing loop, or the labeled one, when armed.
#[macro_export]
macro_rules! fault_break {
    (site: $site:expr, $label:lifetime) => {
        if $crate::FaultSite::is_active(&$site, ::core::option::Option::None) {
            break $label;
        }
    };
    (site: $site:expr) => {
        if $crate::FaultSite::is_active(&$site, ::core::option::Option::None) {
            break;
        }
    };
    ($label:lifetime) => {
        $crate::fault_break!(site: $crate::fault_site!(), $label)
    };
    () => {
        $crate::fault_break!(site: $crate::fault_site!())
    };
}

/// The integer, decremented (`_LESS`), incremented (`_MORE`) or inverted
/// (`_INVERSE`) when armed, checked in that order.
///
/// ```rust
/// let len: usize = faultline::fault_int!(16);
/// assert_eq!(len, 16);
/// ```
#[macro_export]
macro_rules! fault_int {
    (site: $site:expr, $value:expr) => {
        $crate::FaultSite::perturb_int(&$site, $value)
    };
    ($value:expr) => {
        $crate::fault_int!(site: $crate::fault_site!(), $value)
    };
}

/// The boolean, negated when `_FLIP` is armed.
#[macro_export]
macro_rules! fault_flip {
    (site: $site:expr, $value:expr) => {
        $crate::FaultSite::flip(&$site, $value)
    };
    ($value:expr) => {
        $crate::fault_flip!(site: $crate::fault_site!(), $value)
    };
}

/// The condition, forced `true` by `_FORCE_ON` or `false` by `_FORCE_OFF`.
///
/// `_FORCE_ON` is checked first. The condition is not evaluated when forced.
///
/// ```rust
/// let ready = true;
/// if faultline::fault_if_cond!(ready) {
///     // normal path
/// }
/// ```
#[macro_export]
macro_rules! fault_if_cond {
    (site: $site:expr, $cond:expr) => {{
        let site = $site;
        site.is_active(::core::option::Option::Some($crate::Suffix::ForceOn))
            || (!site.is_active(::core::option::Option::Some($crate::Suffix::ForceOff))
                && $cond)
    }};
    ($cond:expr) => {
        $crate::fault_if_cond!(site: $crate::fault_site!(), $cond)
    };
}
