//! Parser for parenthesized prefix notation
//!
//! ```text
//! expression := symbol | '(' connective expression* ')'
//! connective := word
//! symbol     := word
//! word       := [A-Za-z0-9_]+
//! ```
//!
//! Space, tab, carriage return and newline separate tokens and are otherwise
//! ignored. Other whitespace, such as a no-break space, is an unexpected
//! character. A word must end at a separator, `)` or the end of input. Once a
//! `(` has been read the parser never backtracks: any failure inside a
//! compound is final.

use super::syntax::SyntaxTree;
use crate::error::ParseError;
use crate::logic::is_symbol_char;
use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, multispace0},
    combinator::{cut, map},
    error::{ErrorKind, ParseError as NomParseError},
    IResult,
};

/// Where a parse stopped, as the unconsumed input at that point
#[derive(Debug, Clone, PartialEq)]
enum Failure<'a> {
    Unexpected(&'a str),
    EndOfInput,
    Nom(&'a str),
}

impl<'a> NomParseError<&'a str> for Failure<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Failure::Nom(input)
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

type PResult<'a, T> = IResult<&'a str, T, Failure<'a>>;

/// The characters `multispace0` skips
pub(crate) fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Parse the single leading expression of `text`.
///
/// Returns the tree and the unconsumed remainder; what to do with trailing
/// input is up to the caller.
pub fn parse_expression(text: &str) -> Result<(SyntaxTree, &str), ParseError> {
    if text.trim_matches(is_separator).is_empty() {
        return Err(ParseError::EmptyInput);
    }
    expression(text)
        .map(|(rest, tree)| (tree, rest))
        .map_err(|e| to_parse_error(text, e))
}

/// Parse `text` as exactly one expression, allowing surrounding whitespace
pub fn parse(text: &str) -> Result<SyntaxTree, ParseError> {
    let (tree, rest) = parse_expression(text)?;
    let trailing = rest.trim_start_matches(is_separator);
    if !trailing.is_empty() {
        return Err(ParseError::TrailingInput(char_offset(text, trailing)));
    }
    Ok(tree)
}

fn expression(input: &str) -> PResult<'_, SyntaxTree> {
    let (input, _) = multispace0(input)?;
    alt((compound, map(word, SyntaxTree::atomic)))(input)
}

fn compound(input: &str) -> PResult<'_, SyntaxTree> {
    let (input, _) = char('(')(input)?;
    cut(compound_body)(input)
}

fn compound_body(input: &str) -> PResult<'_, SyntaxTree> {
    let (input, _) = multispace0(input)?;
    let (mut input, connective) = word(input)?;

    let mut args = Vec::new();
    loop {
        let (rest, _) = multispace0(input)?;
        match rest.chars().next() {
            None => return Err(nom::Err::Failure(Failure::EndOfInput)),
            Some(')') => return Ok((&rest[1..], SyntaxTree::compound(connective, args))),
            Some(_) => {
                let (rest, arg) = expression(rest)?;
                args.push(arg);
                input = rest;
            }
        }
    }
}

/// A non-empty word that ends at whitespace, `)` or end of input
fn word(input: &str) -> PResult<'_, &str> {
    let (rest, word) = take_while(is_symbol_char)(input)?;
    match rest.chars().next() {
        None if word.is_empty() => Err(nom::Err::Failure(Failure::EndOfInput)),
        Some(c) if word.is_empty() || !(is_separator(c) || c == ')') => {
            Err(nom::Err::Failure(Failure::Unexpected(rest)))
        }
        _ => Ok((rest, word)),
    }
}

fn to_parse_error(text: &str, err: nom::Err<Failure<'_>>) -> ParseError {
    let failure = match err {
        nom::Err::Incomplete(_) => return ParseError::UnterminatedExpression,
        nom::Err::Error(failure) | nom::Err::Failure(failure) => failure,
    };
    match failure {
        Failure::EndOfInput => ParseError::UnterminatedExpression,
        Failure::Unexpected(rest) | Failure::Nom(rest) => match rest.chars().next() {
            Some(character) => ParseError::UnexpectedCharacter {
                character,
                position: char_offset(text, rest),
            },
            None => ParseError::UnterminatedExpression,
        },
    }
}

/// Zero-based character offset of `rest` within `text`
fn char_offset(text: &str, rest: &str) -> usize {
    text[..text.len() - rest.len()].chars().count()
}
