//! The behavior macros and the variables each one consults.

use crate::suffix::Suffix;

/// One kind of fault site, i.e. one behavior macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// `fault_active!`: raw activation flag.
    Active,
    /// `fault_return!`: unconditional `return;`.
    Return,
    /// `fault_return_int!`: `return 0;`.
    ReturnInt,
    /// `fault_conditional!`: skip the guarded block.
    Conditional,
    /// `fault_return_bool!`: `return true;` or `return false;`.
    ReturnBool,
    /// `fault_return_val!`: return a caller-supplied value.
    ReturnVal,
    /// `fault_return_val2!`: return one of two caller-supplied values.
    ReturnVal2,
    /// `fault_break!`: break out of a loop.
    Break,
    /// `fault_int!`: perturb an integer.
    Int,
    /// `fault_flip!`: negate a boolean.
    Flip,
    /// `fault_if_cond!`: force a condition on or off.
    IfCond,
}

impl FaultKind {
    /// Every kind.
    pub const ALL: [FaultKind; 11] = [
        FaultKind::Active,
        FaultKind::Return,
        FaultKind::ReturnInt,
        FaultKind::Conditional,
        FaultKind::ReturnBool,
        FaultKind::ReturnVal,
        FaultKind::ReturnVal2,
        FaultKind::Break,
        FaultKind::Int,
        FaultKind::Flip,
        FaultKind::IfCond,
    ];

    /// Name of the macro, without `!`.
    pub const fn macro_name(self) -> &'static str {
        match self {
            FaultKind::Active => "fault_active",
            FaultKind::Return => "fault_return",
            FaultKind::ReturnInt => "fault_return_int",
            FaultKind::Conditional => "fault_conditional",
            FaultKind::ReturnBool => "fault_return_bool",
            FaultKind::ReturnVal => "fault_return_val",
            FaultKind::ReturnVal2 => "fault_return_val2",
            FaultKind::Break => "fault_break",
            FaultKind::Int => "fault_int",
            FaultKind::Flip => "fault_flip",
            FaultKind::IfCond => "fault_if_cond",
        }
    }

    /// Kind for a macro name, if it is one of ours.
    pub fn from_macro_name(name: &str) -> Option<FaultKind> {
        FaultKind::ALL
            .into_iter()
            .find(|kind| kind.macro_name() == name)
    }

    /// Suffixes consulted by the macro, in the order they are checked.
    /// `None` is the bare identifier.
    pub const fn suffixes(self) -> &'static [Option<Suffix>] {
        match self {
            FaultKind::Active | FaultKind::Return | FaultKind::ReturnVal | FaultKind::Break => {
                &[None]
            }
            FaultKind::ReturnInt => &[Some(Suffix::True)],
            FaultKind::Conditional => &[Some(Suffix::Skip)],
            FaultKind::ReturnBool => &[Some(Suffix::True), Some(Suffix::False)],
            FaultKind::ReturnVal2 => &[Some(Suffix::Opt1), Some(Suffix::Opt2)],
            FaultKind::Int => &[
                Some(Suffix::Less),
                Some(Suffix::More),
                Some(Suffix::Inverse),
            ],
            FaultKind::Flip => &[Some(Suffix::Flip)],
            FaultKind::IfCond => &[Some(Suffix::ForceOn), Some(Suffix::ForceOff)],
        }
    }
}
