// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - parsing and formatting shape descriptions

mod document;
mod format;
mod parser;

pub use document::{parse_document, parse_document_file, ParsedLine};
pub use format::to_canonical_string;
pub(crate) use parser::Fields;
pub use parser::{parse_shape, tokenize};
