//! # Tokenizer
//!
//! Splits a line of RPN input into whitespace-separated tokens.
//!
//! Any run of Unicode whitespace separates two tokens, so an empty or blank line yields no
//! tokens at all. Each [`TokenSpan`] remembers its 1-based index in the line and the byte
//! offset where it starts.

use nom::{
    bytes::complete::{take_till1, take_while},
    error::{context, VerboseError},
    sequence::pair,
    IResult,
};

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan<'a> {
    pub text: &'a str,
    /// 1-based index of the token within the line
    pub index: usize,
    /// Byte offset of the first character
    pub offset: usize,
}

impl TokenSpan<'_> {
    /// Position reported in error messages.
    ///
    /// Assumes single-character tokens separated by single spaces, so the n-th token sits at
    /// character `2n - 1`.
    pub fn position(&self) -> usize {
        self.index * 2 - 1
    }
}

fn parse_token(input: &str) -> ParserResult<(&str, &str)> {
    context(
        "token",
        pair(
            take_while(|c: char| c.is_whitespace()),
            take_till1(|c: char| c.is_whitespace()),
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn tokenize(input: &str) -> Vec<TokenSpan<'_>> {
    let mut tokens = Vec::new();
    let mut remaining = input;

    // parse_token only fails once nothing but whitespace is left
    while let Ok((rest, (whitespace, text))) = parse_token(remaining) {
        let offset = input.len() - remaining.len() + whitespace.len();
        tokens.push(TokenSpan {
            text,
            index: tokens.len() + 1,
            offset,
        });
        remaining = rest;
    }

    tracing::debug!("tokenized {} tokens", tokens.len());
    tokens
}
