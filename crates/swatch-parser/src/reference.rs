//! Reference resolution: interpreting a declaration value as a variable
//! reference and translating it to a target-system name.

use nom::{
    bytes::complete::tag,
    character::complete::{char, multispace0},
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};

use swatch_core::{ParseError, ReferencePath};

use crate::lexer::{ident, integer};

/// Parse the identifier out of a `var(--IDENT)` reference, whitespace
/// around tokens being insignificant.
pub(crate) fn var_ident(input: &str) -> IResult<&str, &str> {
    delimited(
        tuple((tag("var"), multispace0, char('('), multispace0, tag("--"))),
        ident,
        preceded(multispace0, char(')')),
    )(input)
}

/// Parse an `--alpha( var(--IDENT) / N% )` form into the identifier and the
/// raw opacity percentage.
fn alpha_reference(input: &str) -> IResult<&str, (&str, u32)> {
    delimited(
        tuple((tag("--alpha"), multispace0, char('('), multispace0)),
        tuple((
            var_ident,
            preceded(
                tuple((multispace0, char('/'), multispace0)),
                terminated(integer, char('%')),
            ),
        )),
        preceded(multispace0, char(')')),
    )(input)
}

/// Resolve a declaration value to its canonical target-system name.
///
/// Two forms are recognized: a plain `var(--x)` reference, and the
/// alpha-blended `--alpha(var(--x) / N%)` form. The identifier's hyphens
/// become path separators; a non-100% opacity becomes a two-digit suffix
/// step. 100% opacity is noise and yields the bare reference. Anything else
/// (literal colors, calc expressions, nested functions) is a resolution
/// failure.
pub fn resolve_reference(raw: &str) -> Result<ReferencePath, ParseError> {
    let value = raw.trim();

    if let Ok((rest, (name, opacity))) = alpha_reference(value) {
        if !rest.trim().is_empty() {
            return Err(unresolvable(raw));
        }
        let opacity = match opacity {
            100 => None,
            0..=99 => Some(opacity as u8),
            _ => {
                return Err(ParseError::InvalidOpacity {
                    value: opacity.to_string(),
                })
            }
        };
        return Ok(ReferencePath::from_css_ident(name, opacity));
    }

    if let Ok((rest, name)) = var_ident(value) {
        if !rest.trim().is_empty() {
            return Err(unresolvable(raw));
        }
        return Ok(ReferencePath::from_css_ident(name, None));
    }

    Err(unresolvable(raw))
}

fn unresolvable(raw: &str) -> ParseError {
    ParseError::UnresolvableReference {
        value: raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reference() {
        let path = resolve_reference("var(--color-red-500)").unwrap();
        assert_eq!(path.canonical(), "color/red/500");
    }

    #[test]
    fn test_plain_reference_with_whitespace() {
        let path = resolve_reference("  var( --color-red-500 )  ").unwrap();
        assert_eq!(path.canonical(), "color/red/500");
    }

    #[test]
    fn test_alpha_reference_pads_single_digit() {
        let path = resolve_reference("--alpha(var(--color-red-500) / 5%)").unwrap();
        assert_eq!(path.canonical(), "color/red/500_05");
    }

    #[test]
    fn test_alpha_reference_two_digits() {
        let path = resolve_reference("--alpha(var(--color-red-500) / 50%)").unwrap();
        assert_eq!(path.canonical(), "color/red/500_50");
    }

    #[test]
    fn test_full_opacity_drops_suffix() {
        let path = resolve_reference("--alpha(var(--color-red-500) / 100%)").unwrap();
        assert_eq!(path.canonical(), "color/red/500");
    }

    #[test]
    fn test_stepless_color_keeps_same_suffix_rule() {
        let path = resolve_reference("--alpha(var(--color-black) / 50%)").unwrap();
        assert_eq!(path.canonical(), "color/black_50");
        assert!(path.is_stepless());
    }

    #[test]
    fn test_alpha_whitespace_insensitive() {
        let path = resolve_reference("--alpha( var( --color-black )  /  7% )").unwrap();
        assert_eq!(path.canonical(), "color/black_07");
    }

    #[test]
    fn test_literal_is_rejected() {
        let err = resolve_reference("red").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnresolvableReference {
                value: "red".to_string()
            }
        );
    }

    #[test]
    fn test_calc_is_rejected() {
        assert!(matches!(
            resolve_reference("calc(var(--x) * 2)"),
            Err(ParseError::UnresolvableReference { .. })
        ));
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        assert!(matches!(
            resolve_reference("var(--color-red-500) !important"),
            Err(ParseError::UnresolvableReference { .. })
        ));
    }

    #[test]
    fn test_opacity_above_100_is_rejected() {
        let err = resolve_reference("--alpha(var(--color-red-500) / 250%)").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidOpacity {
                value: "250".to_string()
            }
        );
    }

    #[test]
    fn test_fractional_opacity_is_rejected() {
        assert!(matches!(
            resolve_reference("--alpha(var(--color-red-500) / 12.5%)"),
            Err(ParseError::UnresolvableReference { .. })
        ));
    }
}
