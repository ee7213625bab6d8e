//! Field value shapes.
//!
//! Every type that can appear in an option struct implements [`ArgValue`].
//! The encoder asks a value for its built-in [`Shape`] first and only falls
//! back to the [`ArgText`] rendering capability when the shape is
//! [`Shape::Other`].

/// Built-in value shape, borrowed from the option struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// Boolean switch.
    Bool(bool),
    /// Any primitive integer.
    Integer(i128),
    /// Text emitted verbatim.
    Text(&'a str),
    /// Sequence of text, one token or slot per item.
    TextList(Vec<&'a str>),
    /// No built-in shape applies.
    Other,
}

/// Custom text rendering for option values.
///
/// Implement this for values that need their own textual form, then expose
/// it through [`ArgValue::as_text`].
///
/// ```
/// use marshal_args::{ArgText, ArgValue};
///
/// pub struct Percent(u8);
///
/// impl ArgText for Percent {
///     fn arg_text(&self) -> String {
///         format!("{}%", self.0)
///     }
/// }
///
/// impl ArgValue for Percent {
///     fn is_zero(&self) -> bool {
///         self.0 == 0
///     }
///
///     fn as_text(&self) -> Option<&dyn ArgText> {
///         Some(self)
///     }
/// }
/// ```
pub trait ArgText {
    /// Render the value as a single argument string.
    fn arg_text(&self) -> String;
}

/// A value that can be carried by an annotated option field.
pub trait ArgValue {
    /// Whether this is the zero value of its shape. Zero values are omitted
    /// from the argument vector.
    fn is_zero(&self) -> bool;

    /// Built-in shape of the value.
    fn shape(&self) -> Shape<'_> {
        Shape::Other
    }

    /// Custom rendering, consulted only when [`shape`](ArgValue::shape)
    /// returns [`Shape::Other`].
    fn as_text(&self) -> Option<&dyn ArgText> {
        None
    }

    /// Name of the value's kind, used when reporting an unsupported shape.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl ArgValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Bool(*self)
    }
}

macro_rules! integer_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ArgValue for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Integer(*self as i128)
                }
            }
        )*
    };
}

integer_values!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ArgValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl ArgValue for &str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl ArgValue for Vec<String> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::TextList(self.iter().map(String::as_str).collect())
    }
}

impl ArgValue for Vec<&str> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::TextList(self.clone())
    }
}

/// The nullable form of every shape. Only `None` is empty: `Some(false)`,
/// `Some(0)` and `Some(String::new())` are explicit values and get encoded.
impl<T: ArgValue> ArgValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn shape(&self) -> Shape<'_> {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Other,
        }
    }

    fn as_text(&self) -> Option<&dyn ArgText> {
        self.as_ref().and_then(|inner| inner.as_text())
    }

    fn kind(&self) -> &'static str {
        match self {
            Some(inner) => inner.kind(),
            None => std::any::type_name::<Self>(),
        }
    }
}
