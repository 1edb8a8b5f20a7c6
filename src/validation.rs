//! Field Validation
//!
//! Pure validation rules for contact form fields. The DOM side (error class,
//! message node) is in `components::contact_form`.

use regex::Regex;
use std::sync::OnceLock;

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_SELECT: &str = "Please select an option";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

/// Kind of form control
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    /// `<select>`
    Select,
    /// `<textarea>`
    TextArea,
}

impl FieldKind {
    /// From a tag name and the `type` of inputs. Both compare
    /// case-insensitively, as HTML does.
    pub fn from_element(tag_name: &str, input_type: &str) -> Self {
        match (tag_name.to_ascii_uppercase().as_str(), input_type.to_ascii_lowercase().as_str()) {
            ("SELECT", _) => FieldKind::Select,
            ("TEXTAREA", _) => FieldKind::TextArea,
            (_, "email") => FieldKind::Email,
            _ => FieldKind::Text,
        }
    }
}

/// Snapshot of a field at validation time
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Validation {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl Validation {
    fn ok() -> Self {
        Self { valid: true, message: String::new() }
    }

    fn fail(message: &str) -> Self {
        Self { valid: false, message: message.to_string() }
    }
}

/// Validate one field. Surrounding whitespace is ignored.
///
/// A required `<select>` left empty reports the select-specific message rather
/// than the generic required one.
pub fn validate(field: &Field) -> Validation {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return match field.kind {
            FieldKind::Select => Validation::fail(MSG_SELECT),
            _ => Validation::fail(MSG_REQUIRED),
        };
    }

    if field.kind == FieldKind::Email && !value.is_empty() && !email_regex().is_match(value) {
        return Validation::fail(MSG_EMAIL);
    }

    Validation::ok()
}

/// Event on a single form control
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
    Blur,
    Input,
}

/// Whether `event` should re-validate a control. Typing only re-checks a
/// control already flagged with an error; leaving it always checks.
pub fn should_validate(event: FieldEvent, flagged: bool) -> bool {
    match event {
        FieldEvent::Blur => true,
        FieldEvent::Input => flagged,
    }
}

/// Positions of the required fields, in order
pub fn required_indices(fields: &[Field]) -> Vec<usize> {
    fields.iter().enumerate().filter(|(_, f)| f.required).map(|(i, _)| i).collect()
}

/// Validate every field, returning `(index, result)` pairs in order
pub fn validate_all(fields: &[Field]) -> Vec<(usize, Validation)> {
    fields.iter().enumerate().map(|(i, f)| (i, validate(f))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_empty() {
        let result = validate(&Field::new("name", FieldKind::Text, true, ""));
        assert!(!result.valid);
        assert_eq!(result.message, MSG_REQUIRED);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let result = validate(&Field::new("message", FieldKind::TextArea, true, "   \n"));
        assert_eq!(result.message, MSG_REQUIRED);
    }

    #[test]
    fn test_invalid_email() {
        let result = validate(&Field::new("email", FieldKind::Email, false, "not-an-email"));
        assert!(!result.valid);
        assert_eq!(result.message, MSG_EMAIL);
    }

    #[test]
    fn test_valid_email() {
        let result = validate(&Field::new("email", FieldKind::Email, true, "a@b.co"));
        assert!(result.valid);
        assert!(result.message.is_empty());
    }

    #[test]
    fn test_email_edge_cases() {
        for bad in ["a@b", "@b.co", "a b@c.de", "a@@b.co", "a@b.", "a@.co"] {
            let result = validate(&Field::new("email", FieldKind::Email, true, bad));
            assert_eq!(result.message, MSG_EMAIL, "accepted {:?}", bad);
        }
        for good in ["first.last@example.com", " padded@site.io ", "x@y.z.w"] {
            assert!(validate(&Field::new("email", FieldKind::Email, true, good)).valid, "rejected {:?}", good);
        }
    }

    #[test]
    fn test_optional_empty_email_is_valid() {
        assert!(validate(&Field::new("email", FieldKind::Email, false, "")).valid);
    }

    #[test]
    fn test_required_select_empty() {
        let result = validate(&Field::new("service", FieldKind::Select, true, ""));
        assert_eq!(result.message, MSG_SELECT);
        assert!(validate(&Field::new("service", FieldKind::Select, true, "web")).valid);
    }

    #[test]
    fn test_kind_from_element() {
        assert_eq!(FieldKind::from_element("SELECT", ""), FieldKind::Select);
        assert_eq!(FieldKind::from_element("input", "email"), FieldKind::Email);
        assert_eq!(FieldKind::from_element("TEXTAREA", "textarea"), FieldKind::TextArea);
        assert_eq!(FieldKind::from_element("INPUT", "tel"), FieldKind::Text);
    }

    #[test]
    fn test_uppercase_email_type_is_still_checked() {
        let kind = FieldKind::from_element("INPUT", "EMAIL");
        assert_eq!(kind, FieldKind::Email);

        let result = validate(&Field::new("email", kind, true, "not-an-email"));
        assert_eq!(result.message, MSG_EMAIL);
    }

    #[test]
    fn test_typing_rechecks_only_flagged_fields() {
        assert!(should_validate(FieldEvent::Input, true));
        assert!(!should_validate(FieldEvent::Input, false));
        assert!(should_validate(FieldEvent::Blur, false));
        assert!(should_validate(FieldEvent::Blur, true));
    }

    #[test]
    fn test_required_indices_skip_optional_fields() {
        let fields = vec![
            Field::new("name", FieldKind::Text, true, ""),
            Field::new("company", FieldKind::Text, false, ""),
            Field::new("service", FieldKind::Select, true, ""),
            Field::new("budget", FieldKind::Select, false, ""),
        ];
        assert_eq!(required_indices(&fields), vec![0, 2]);
    }

    #[test]
    fn test_validate_all_keeps_order() {
        let fields = vec![
            Field::new("name", FieldKind::Text, true, "Ada"),
            Field::new("email", FieldKind::Email, true, "nope"),
        ];
        let results = validate_all(&fields);
        assert!(results[0].1.valid);
        assert_eq!(results[1], (1, Validation::fail(MSG_EMAIL)));
    }
}
