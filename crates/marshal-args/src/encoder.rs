//! The argument encoder.
//!
//! Named tokens are appended in the order fields are pushed. Positional
//! values are written into a slot buffer and appended, in slot order, after
//! every named token.

use crate::field::{Field, MarshalArgs};
use crate::tag::Tag;
use crate::value::Shape;

/// Marshal an option struct into an argument vector.
///
/// # Panics
///
/// Panics if an included field has no built-in shape and no custom text
/// rendering. That can only happen for a misdeclared option struct.
pub fn marshal<A: MarshalArgs + ?Sized>(args: &A) -> Vec<String> {
    let mut encoder = Encoder::new();
    encoder.extend(&args.arg_fields());
    encoder.finish()
}

/// Position-indexed buffer for positional arguments.
///
/// Sized to the highest written slot; slots that are never written come out
/// as empty strings. Writing a slot twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalSlots {
    slots: Vec<String>,
}

impl PositionalSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `value` at slot `pos`, growing the buffer as needed.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is `usize::MAX`.
    pub fn set(&mut self, pos: usize, value: String) {
        if pos >= self.slots.len() {
            let len = pos
                .checked_add(1)
                .unwrap_or_else(|| panic!("positional slot {} out of range", pos));
            self.slots.resize(len, String::new());
        }
        self.slots[pos] = value;
    }

    /// Number of slots, i.e. highest written index + 1.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot values in ascending index order.
    pub fn into_vec(self) -> Vec<String> {
        self.slots
    }
}

/// Accumulates tokens from field descriptors.
///
/// [`marshal`] covers the common case. Use an encoder directly to merge the
/// fields of several option structs into one vector.
///
/// ```
/// use marshal_args::{Encoder, Field, Tag};
///
/// let size = String::from("10G");
/// let name = String::from("vg0/data");
///
/// let mut encoder = Encoder::new();
/// encoder.push(&Field::new("name", Tag::Positional(0), &name));
/// encoder.push(&Field::new("size", Tag::Named("--size"), &size));
///
/// assert_eq!(encoder.finish(), ["--size=10G", "vg0/data"]);
/// ```
#[derive(Debug, Default)]
pub struct Encoder {
    named: Vec<String>,
    positional: PositionalSlots,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode every field in order.
    pub fn extend(&mut self, fields: &[Field<'_>]) {
        for field in fields {
            self.push(field);
        }
    }

    /// Encode one field. Hidden and zero-valued fields produce nothing.
    ///
    /// # Panics
    ///
    /// Panics with `unsupported argument type` when the value matches no
    /// built-in shape and has no custom rendering.
    pub fn push(&mut self, field: &Field<'_>) {
        if !field.is_included() {
            return;
        }

        match (field.value.shape(), field.tag) {
            (Shape::Bool(b), Tag::Positional(pos)) => {
                self.positional.set(slot(field, pos, 0), b.to_string())
            }
            (Shape::Bool(b), Tag::Named(flag)) => {
                if b {
                    self.named.push(flag.to_string());
                }
            }
            (Shape::Integer(n), _) => self.scalar(field, n.to_string()),
            (Shape::Text(text), _) => self.scalar(field, text.to_string()),
            (Shape::TextList(items), Tag::Positional(base)) => {
                for (offset, item) in items.into_iter().enumerate() {
                    self.positional.set(slot(field, base, offset), item.to_string());
                }
            }
            (Shape::TextList(items), Tag::Named(flag)) => {
                self.named
                    .extend(items.into_iter().map(|item| format!("{}={}", flag, item)));
            }
            (Shape::Other, _) => match field.value.as_text() {
                Some(custom) => self.scalar(field, custom.arg_text()),
                None => panic!(
                    "unsupported argument type: {} (field `{}`)",
                    field.value.kind(),
                    field.name
                ),
            },
        }
    }

    /// Named tokens followed by the flattened positional slots.
    pub fn finish(self) -> Vec<String> {
        let mut args = self.named;
        args.extend(self.positional.into_vec());
        args
    }

    fn scalar(&mut self, field: &Field<'_>, value: String) {
        match field.tag {
            Tag::Positional(pos) => self.positional.set(slot(field, pos, 0), value),
            Tag::Named(flag) => self.named.push(format!("{}={}", flag, value)),
        }
    }
}

/// Slot `base + offset`, leaving room for the buffer length.
fn slot(field: &Field<'_>, base: usize, offset: usize) -> usize {
    match base.checked_add(offset) {
        Some(pos) if pos < usize::MAX => pos,
        _ => panic!(
            "positional slot out of range: {} + {} (field `{}`)",
            base, offset, field.name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ArgText, ArgValue};

    fn encode(fields: &[Field<'_>]) -> Vec<String> {
        let mut encoder = Encoder::new();
        encoder.extend(fields);
        encoder.finish()
    }

    #[test]
    fn test_positional_slots_fill_gaps() {
        let mut slots = PositionalSlots::new();
        slots.set(2, "c".into());
        slots.set(0, "a".into());
        assert_eq!(slots.len(), 3);
        assert_eq!(slots.into_vec(), ["a", "", "c"]);
    }

    #[test]
    fn test_positional_slots_last_write_wins() {
        let mut slots = PositionalSlots::new();
        slots.set(0, "first".into());
        slots.set(0, "second".into());
        assert_eq!(slots.into_vec(), ["second"]);
    }

    #[test]
    fn test_named_bool_is_presence_flag() {
        let yes = true;
        let no = false;
        assert_eq!(encode(&[Field::new("f", Tag::Named("--force"), &yes)]), ["--force"]);
        assert!(encode(&[Field::new("f", Tag::Named("--force"), &no)]).is_empty());
    }

    #[test]
    fn test_named_explicit_false_is_dropped() {
        let no = Some(false);
        assert!(encode(&[Field::new("f", Tag::Named("--force"), &no)]).is_empty());
    }

    #[test]
    fn test_positional_bool_is_literal() {
        let yes = Some(true);
        let no = Some(false);
        assert_eq!(encode(&[Field::new("b", Tag::Positional(0), &yes)]), ["true"]);
        assert_eq!(encode(&[Field::new("b", Tag::Positional(0), &no)]), ["false"]);
    }

    #[test]
    fn test_integers() {
        let n = 42u32;
        let neg = Some(-3i64);
        assert_eq!(
            encode(&[
                Field::new("n", Tag::Named("--stripes"), &n),
                Field::new("neg", Tag::Positional(0), &neg),
            ]),
            ["--stripes=42", "-3"]
        );
    }

    #[test]
    fn test_explicit_zero_integer_is_encoded() {
        let zero = Some(0u32);
        assert_eq!(
            encode(&[Field::new("n", Tag::Named("--mirrors"), &zero)]),
            ["--mirrors=0"]
        );
    }

    #[test]
    fn test_text_list_positional_uses_consecutive_slots() {
        let devices = vec!["/dev/sdb".to_string(), "/dev/sdc".to_string()];
        let name = String::from("vg0");
        assert_eq!(
            encode(&[
                Field::new("devices", Tag::Positional(1), &devices),
                Field::new("name", Tag::Positional(0), &name),
            ]),
            ["vg0", "/dev/sdb", "/dev/sdc"]
        );
    }

    #[test]
    fn test_text_list_named_repeats_flag() {
        let tags = vec!["a", "b", "c"];
        assert_eq!(
            encode(&[Field::new("tags", Tag::Named("--addtag"), &tags)]),
            ["--addtag=a", "--addtag=b", "--addtag=c"]
        );
    }

    #[test]
    fn test_hidden_field_is_skipped() {
        let secret = String::from("hunter2");
        assert!(encode(&[Field::new("secret", Tag::Named("--password"), &secret).hidden()])
            .is_empty());
    }

    struct Size(u64);

    impl ArgText for Size {
        fn arg_text(&self) -> String {
            format!("{}m", self.0)
        }
    }

    impl ArgValue for Size {
        fn is_zero(&self) -> bool {
            self.0 == 0
        }

        fn as_text(&self) -> Option<&dyn ArgText> {
            Some(self)
        }
    }

    #[test]
    fn test_custom_rendering() {
        let size = Size(512);
        let nullable = Some(Size(64));
        assert_eq!(
            encode(&[
                Field::new("size", Tag::Named("--size"), &size),
                Field::new("extent", Tag::Positional(0), &nullable),
            ]),
            ["--size=512m", "64m"]
        );
    }

    #[test]
    fn test_custom_zero_is_skipped() {
        let size = Size(0);
        assert!(encode(&[Field::new("size", Tag::Named("--size"), &size)]).is_empty());
    }

    struct Ratio(f64);

    impl ArgValue for Ratio {
        fn is_zero(&self) -> bool {
            self.0 == 0.0
        }
    }

    #[test]
    #[should_panic(expected = "unsupported argument type")]
    fn test_unsupported_shape_panics() {
        let ratio = Ratio(0.5);
        encode(&[Field::new("ratio", Tag::Named("--ratio"), &ratio)]);
    }

    #[test]
    fn test_unsupported_zero_value_is_not_inspected() {
        let ratio = Ratio(0.0);
        assert!(encode(&[Field::new("ratio", Tag::Named("--ratio"), &ratio)]).is_empty());
    }

    struct Both;

    impl ArgText for Both {
        fn arg_text(&self) -> String {
            "custom".to_string()
        }
    }

    impl ArgValue for Both {
        fn is_zero(&self) -> bool {
            false
        }

        fn shape(&self) -> Shape<'_> {
            Shape::Text("builtin")
        }

        fn as_text(&self) -> Option<&dyn ArgText> {
            Some(self)
        }
    }

    #[test]
    fn test_builtin_shape_wins_over_custom_rendering() {
        assert_eq!(encode(&[Field::new("x", Tag::Named("--x"), &Both)]), ["--x=builtin"]);
        assert_eq!(encode(&[Field::new("x", Tag::Positional(0), &Both)]), ["builtin"]);
    }

    #[test]
    #[should_panic(expected = "(field `devices`)")]
    fn test_positional_list_past_last_slot_panics() {
        let devices = vec!["/dev/sdb", "/dev/sdc"];
        encode(&[Field::new("devices", Tag::Positional(usize::MAX), &devices)]);
    }

    #[test]
    #[should_panic(expected = "positional slot out of range")]
    fn test_positional_scalar_at_last_slot_panics() {
        let name = String::from("vg0");
        encode(&[Field::new("name", Tag::Positional(usize::MAX), &name)]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_positional_slots_reject_last_index() {
        PositionalSlots::new().set(usize::MAX, "x".into());
    }
}
