// Namespaced markup tags: `<ns:name attr="value">`

use nom::bytes::complete::{take_till, take_while};
use nom::character::complete::{char, multispace0, multispace1, satisfy};
use nom::combinator::recognize;
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded};
use nom::{IResult, Parser};

use crate::event::Attributes;

fn name_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn ident(input: &str) -> IResult<&str, &str> {
    recognize(pair(satisfy(name_start), take_while(name_char))).parse(input)
}

/// A tag name with a mandatory namespace separator, e.g. `foo:bar`.
/// The `:` is what distinguishes custom markup from ordinary HTML-looking
/// text, which this parser passes through literally.
pub fn qualified_name(input: &str) -> IResult<&str, &str> {
    recognize((ident, char(':'), ident)).parse(input)
}

/// One `key="value"` attribute. Values are taken verbatim up to the
/// closing quote; no entity expansion.
fn attribute(input: &str) -> IResult<&str, (String, String)> {
    let (input, key) = ident(input)?;
    let (input, _) = char('=').parse(input)?;
    let (input, value) = delimited(char('"'), take_till(|c| c == '"'), char('"')).parse(input)?;
    Ok((input, (key.to_string(), value.to_string())))
}

/// Parse a complete opening tag. Succeeds only when the whole candidate
/// forms `<ns:name attr="v" ...>`; attribute order is preserved.
pub fn open_tag(input: &str) -> IResult<&str, (String, Option<Attributes>)> {
    let (input, _) = char('<').parse(input)?;
    let (input, name) = qualified_name(input)?;
    let (input, attrs) = many0(preceded(multispace1, attribute)).parse(input)?;
    let (input, _) = multispace0.parse(input)?;
    let (input, _) = char('>').parse(input)?;

    let attributes = if attrs.is_empty() {
        None
    } else {
        Some(attrs.into_iter().collect())
    };
    Ok((input, (name.to_string(), attributes)))
}
