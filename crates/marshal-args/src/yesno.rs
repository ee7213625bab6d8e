//! The `y`/`n` boolean encoding.

use crate::value::{ArgText, ArgValue};

/// A boolean that renders as `y` or `n`.
///
/// Some tools take `--flag=y` / `--flag=n` instead of a bare switch. Wrap
/// the field in `Option` so that "not set" stays distinguishable from an
/// explicit `n`:
///
/// ```
/// use marshal_args::{MarshalArgs, YesNo, NO, YES};
///
/// #[derive(MarshalArgs, Default)]
/// pub struct ChangeOptions {
///     #[argv("--activate")]
///     pub activate: Option<YesNo>,
/// }
///
/// let on = ChangeOptions { activate: YES };
/// let off = ChangeOptions { activate: NO };
/// let unset = ChangeOptions::default();
///
/// assert_eq!(on.marshal_args(), ["--activate=y"]);
/// assert_eq!(off.marshal_args(), ["--activate=n"]);
/// assert!(unset.marshal_args().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct YesNo(pub bool);

/// Ready-made explicit "yes".
pub const YES: Option<YesNo> = Some(YesNo(true));

/// Ready-made explicit "no".
pub const NO: Option<YesNo> = Some(YesNo(false));

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        YesNo(value)
    }
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        value.0
    }
}

impl ArgText for YesNo {
    fn arg_text(&self) -> String {
        let text = if self.0 { "y" } else { "n" };
        text.to_string()
    }
}

impl ArgValue for YesNo {
    fn is_zero(&self) -> bool {
        !self.0
    }

    fn as_text(&self) -> Option<&dyn ArgText> {
        Some(self)
    }
}
