//! Case conversion for labels and type names.
//!
//! Converts camel/mixed-case tokens to lowercase underscore form. Predicate
//! names and localization keys are derived through these functions, so the
//! rules here are part of the public naming contract:
//!
//! 1. an underscore is inserted between a run of uppercase/digit characters
//!    and a following titlecase run (`ABCDef` -> `ABC_Def`),
//! 2. an underscore is inserted between a lowercase-or-digit character and a
//!    following uppercase character (`fooBar` -> `foo_Bar`),
//! 3. hyphens become underscores,
//! 4. the whole result is lowercased.
//!
//! Both functions are idempotent on already-snake_case input.

/// Converts a camel/mixed-case token to lowercase underscore form.
///
/// ```
/// use inum::to_snake_case;
///
/// assert_eq!(to_snake_case("CamelCase"), "camel_case");
/// assert_eq!(to_snake_case("UNDER_SCORE"), "under_score");
/// assert_eq!(to_snake_case("Came1Case"), "came1_case");
/// ```
#[must_use]
pub fn to_snake_case(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let mut out = String::with_capacity(token.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            out.push('_');
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            // A word boundary sits before an uppercase char when the previous
            // char ends a lowercase/digit run, or when an uppercase run is
            // followed by a titlecase run (the next char is lowercase).
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    out
}

/// Like [`to_snake_case`], but first maps `::` scope separators to
/// `separator`.
///
/// Localization-key derivation passes `"."` so `Name::Space` becomes
/// `name.space`; callers with a different keying scheme can pass their own
/// separator.
#[must_use]
pub fn to_snake_case_scoped(token: &str, separator: &str) -> String {
    to_snake_case(&token.replace("::", separator))
}
