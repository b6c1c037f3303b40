//! Sign-prefixed degrees/minutes/seconds strings.
//!
//! Templates are plain text with placeholders:
//!
//! | placeholder     | value                                  |
//! |-----------------|----------------------------------------|
//! | `{sign}`        | `+` for values ≥ 0, `-` otherwise      |
//! | `{degrees}`     | whole degrees of the magnitude         |
//! | `{minutes}`     | whole arc-minutes                      |
//! | `{seconds}`     | arc-seconds, shortest representation   |
//! | `{seconds:.N}`  | arc-seconds with exactly N decimals    |
//!
//! `{{` and `}}` emit literal braces.

use crate::error::FormatError;
use crate::hdms::degrees_to_hdms;

/// `+123°27'39.60"` style template.
pub const DMS_TEMPLATE: &str = "{sign}{degrees}°{minutes}'{seconds:.2}\"";

/// Largest accepted `{seconds:.N}` precision.
const MAX_PRECISION: usize = 17;

enum Field {
    Sign,
    Degrees,
    Minutes,
    Seconds(Option<usize>),
}

fn parse_field(spec: &str) -> Result<Field, FormatError> {
    let (name, precision) = match spec.split_once(':') {
        Some((name, fmt)) => {
            let digits = fmt
                .strip_prefix('.')
                .ok_or_else(|| FormatError::InvalidPrecision(fmt.to_string()))?;
            let p: usize = digits
                .parse()
                .map_err(|_| FormatError::InvalidPrecision(fmt.to_string()))?;
            if p > MAX_PRECISION {
                return Err(FormatError::InvalidPrecision(fmt.to_string()));
            }
            (name, Some(p))
        }
        None => (spec, None),
    };

    match (name, precision) {
        ("sign", None) => Ok(Field::Sign),
        ("degrees", None) => Ok(Field::Degrees),
        ("minutes", None) => Ok(Field::Minutes),
        ("seconds", p) => Ok(Field::Seconds(p)),
        (_, Some(_)) if matches!(name, "sign" | "degrees" | "minutes") => {
            Err(FormatError::InvalidPrecision(spec.to_string()))
        }
        _ => Err(FormatError::UnknownPlaceholder(name.to_string())),
    }
}

/// Format a decimal-degree value as a sign-prefixed DMS string.
///
/// The sign is taken from the raw value before decomposition, so a tiny
/// negative value whose magnitude rounds to zero still renders with `-`.
/// The magnitude is decomposed with the floor-based rule of
/// [`degrees_to_hdms`]; sub-second rounding is left to the `{seconds:.N}`
/// precision.
///
/// ```
/// use meridian_units::{DMS_TEMPLATE, format_decimal_to_dms};
///
/// let s = format_decimal_to_dms(123.461, DMS_TEMPLATE).unwrap();
/// assert_eq!(s, "+123°27'39.60\"");
/// ```
pub fn format_decimal_to_dms(value: f64, template: &str) -> Result<String, FormatError> {
    let sign = if value < 0.0 { '-' } else { '+' };
    let dms = degrees_to_hdms(value.abs());

    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(FormatError::UnmatchedBrace(i)),
            '{' => {
                let rest = &template[i + 1..];
                let end = rest.find('}').ok_or(FormatError::Unterminated(i))?;
                let field = parse_field(&rest[..end])?;
                // Skip the placeholder body and its closing brace.
                while let Some((j, _)) = chars.peek() {
                    if *j > i + end + 1 {
                        break;
                    }
                    chars.next();
                }
                match field {
                    Field::Sign => out.push(sign),
                    Field::Degrees => out.push_str(&dms.degrees.to_string()),
                    Field::Minutes => out.push_str(&dms.minutes.to_string()),
                    Field::Seconds(Some(p)) => out.push_str(&format!("{:.*}", p, dms.seconds)),
                    Field::Seconds(None) => out.push_str(&dms.seconds.to_string()),
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
