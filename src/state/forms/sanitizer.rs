//! Keystroke sanitization rules
//!
//! Every field value passes through [`sanitize`] before it is stored, so a
//! field never holds a character outside its kind's class or more
//! characters than its kind allows.

use super::field::FieldKind;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[^A-Za-zÁÀÃÂÄÉÈÊËÍÌÎÏÒÓÔÕÖÚÙÛÜÇáàãâäéèêëíìîïóòôõöúùûüç ]")
        .expect("name pattern is valid")
});

static DIGIT_REJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^0-9]").expect("digit pattern is valid"));

fn reject_pattern(kind: FieldKind) -> &'static Regex {
    match kind {
        FieldKind::Name => &*NAME_REJECT,
        FieldKind::Cpf | FieldKind::BirthDate | FieldKind::Cep | FieldKind::Password => {
            &*DIGIT_REJECT
        }
    }
}

/// Turn a proposed field value into the value the field accepts.
///
/// `candidate` is the whole new value, not a delta. Disallowed characters
/// are dropped; if what remains is longer than the kind's maximum, the
/// update is refused and `previous` is returned untouched. Separators in a
/// formatted paste such as `01310-100` do not count toward the cap.
pub fn sanitize(kind: FieldKind, previous: &str, candidate: &str) -> String {
    let filtered = reject_pattern(kind).replace_all(candidate, "");

    match kind.max_length() {
        Some(max) if filtered.chars().count() > max => previous.to_string(),
        _ => filtered.into_owned(),
    }
}

/// Required-field check run at submit time.
pub fn validate_required(value: &str) -> bool {
    value.is_empty()
}

/// Lay `value` into a `#`-placeholder mask for display.
///
/// Literal separators are only emitted when more input follows them, so a
/// half-typed CEP shows as `01310` rather than `01310-`.
pub fn apply_mask(mask: &str, value: &str) -> String {
    let mut out = String::with_capacity(mask.len());
    let mut chars = value.chars().peekable();

    for slot in mask.chars() {
        if chars.peek().is_none() {
            break;
        }
        if slot == '#' {
            if let Some(c) = chars.next() {
                out.push(c);
            }
        } else {
            out.push(slot);
        }
    }

    out.extend(chars);
    out
}
