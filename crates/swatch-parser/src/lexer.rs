//! Low-level scanners shared by the reference parser.

use nom::{
    bytes::complete::{take_while, take_while1},
    combinator::{map_res, recognize},
    sequence::pair,
    IResult,
};

/// Parse a CSS custom-property identifier body (the part after `--`):
/// starts with a letter or underscore, followed by alphanumerics,
/// underscores, and hyphens.
pub fn ident(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
    ))(input)
}

/// Parse an unsigned decimal integer.
pub fn integer(input: &str) -> IResult<&str, u32> {
    map_res(take_while1(|c: char| c.is_ascii_digit()), str::parse)(input)
}
