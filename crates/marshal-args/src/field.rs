//! Field descriptors and the [`MarshalArgs`] trait.

use std::fmt;

use crate::encoder::marshal;
use crate::tag::Tag;
use crate::value::ArgValue;

/// Per-field metadata produced while inspecting an option struct.
///
/// Descriptors borrow from the struct they describe and only live for one
/// marshaling pass.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// Rust field name, used in diagnostics.
    pub name: &'static str,
    /// Inclusion annotation.
    pub tag: Tag,
    /// Current value.
    pub value: &'a dyn ArgValue,
    /// Whether the field is public. Hidden fields are never encoded.
    pub visible: bool,
}

impl<'a> Field<'a> {
    /// Describe a visible field.
    pub fn new(name: &'static str, tag: Tag, value: &'a dyn ArgValue) -> Self {
        Field {
            name,
            tag,
            value,
            visible: true,
        }
    }

    /// Mark the field as hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Returns `true` if the value is the zero value of its shape.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns `true` if this field should produce output.
    pub fn is_included(&self) -> bool {
        self.visible && !self.is_zero()
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("kind", &self.value.kind())
            .field("visible", &self.visible)
            .field("zero", &self.is_zero())
            .finish()
    }
}

/// Types that can be marshaled into an argument vector.
///
/// Usually derived with `#[derive(MarshalArgs)]`:
///
/// ```
/// use marshal_args::MarshalArgs;
///
/// #[derive(MarshalArgs, Default)]
/// pub struct RemoveOptions {
///     #[argv(0)]
///     pub name: String,
///     #[argv("--force")]
///     pub force: bool,
/// }
///
/// let opts = RemoveOptions { name: "vg0/data".into(), force: true };
/// assert_eq!(opts.marshal_args(), ["--force", "vg0/data"]);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use marshal_args::{Field, MarshalArgs, Tag};
///
/// pub struct ResizeOptions {
///     pub name: String,
///     pub size: String,
/// }
///
/// impl MarshalArgs for ResizeOptions {
///     fn arg_fields(&self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("name", Tag::parse("0"), &self.name),
///             Field::new("size", Tag::parse("--size"), &self.size),
///         ]
///     }
/// }
///
/// let opts = ResizeOptions { name: "vg0/data".into(), size: "2G".into() };
/// assert_eq!(opts.marshal_args(), ["--size=2G", "vg0/data"]);
/// ```
pub trait MarshalArgs {
    /// Annotated fields in declaration order, flattened structs expanded
    /// inline at the position they are declared.
    fn arg_fields(&self) -> Vec<Field<'_>>;

    /// Produce the argument vector for this value.
    fn marshal_args(&self) -> Vec<String> {
        marshal(self)
    }
}

impl<T: MarshalArgs + ?Sized> MarshalArgs for &T {
    fn arg_fields(&self) -> Vec<Field<'_>> {
        (**self).arg_fields()
    }
}

impl<T: MarshalArgs + ?Sized> MarshalArgs for Box<T> {
    fn arg_fields(&self) -> Vec<Field<'_>> {
        (**self).arg_fields()
    }
}
