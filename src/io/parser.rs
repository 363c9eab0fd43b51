// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shape description parser using pest

use crate::error::{Result, ShapeError};
use crate::shape::{Circle, Rectangle, Shape, ShapeKind, Square};
use pest::Parser;
use pest_derive::Parser;
use tracing::{debug, trace};

#[derive(Parser)]
#[grammar = "io/shape.pest"]
struct DescriptionParser;

/// Split a description into its whitespace-delimited tokens
pub fn tokenize(input: &str) -> Result<Vec<&str>> {
    let description = DescriptionParser::parse(Rule::description, input)
        .map_err(|e| ShapeError::invalid_format(input, e.to_string()))?
        .next()
        .ok_or_else(|| ShapeError::invalid_format(input, "empty parse tree"))?;

    let tokens: Vec<&str> = description
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::token)
        .map(|pair| pair.as_str())
        .collect();

    trace!(?tokens, "tokenized description");
    Ok(tokens)
}

/// Tokens of a description whose count has already been checked
pub(crate) struct Fields<'a> {
    input: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Tokenize `input` and require exactly the token count of `kind`
    pub(crate) fn read(input: &'a str, kind: ShapeKind) -> Result<Self> {
        let tokens = tokenize(input)?;
        let expected = kind.token_count();
        if tokens.len() != expected {
            return Err(ShapeError::invalid_format(
                input,
                format!(
                    "{} expects {} tokens, found {}",
                    kind,
                    expected,
                    tokens.len()
                ),
            ));
        }
        Ok(Self { input, tokens })
    }

    /// Integer at `position`
    pub(crate) fn integer(&self, position: usize) -> Result<i64> {
        let token = self.tokens.get(position).ok_or_else(|| {
            ShapeError::invalid_format(self.input, format!("missing token {}", position))
        })?;
        token.parse::<i64>().map_err(|e| {
            ShapeError::invalid_format(
                self.input,
                format!("token {} ({:?}) is not an integer: {}", position, token, e),
            )
        })
    }
}

/// Parse any supported shape, choosing the variant from the leading label
pub fn parse_shape(input: &str) -> Result<Shape> {
    let tokens = tokenize(input)?;
    let label = tokens
        .first()
        .ok_or_else(|| ShapeError::invalid_format(input, "empty description"))?;
    let kind = ShapeKind::from_label(label).ok_or_else(|| {
        ShapeError::invalid_format(input, format!("unknown shape {:?}", label))
    })?;

    debug!(%kind, "parsing shape description");
    let shape = match kind {
        ShapeKind::Square => Square::from_input_string(input)?.into(),
        ShapeKind::Rectangle => Rectangle::from_input_string(input)?.into(),
        ShapeKind::Circle => Circle::from_input_string(input)?.into(),
    };
    Ok(shape)
}
