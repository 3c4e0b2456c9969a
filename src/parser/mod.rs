/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     parser/mod.rs
 * Purpose:  Root module for the PANDA recursive-descent recognizer.
 * 
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Statement rules
 *   - Expression rules
 *   - Shared helper utilities
 *   - The grammar table and its validation pass
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the PANDA project.
 * 
 * PANDA is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

/// Core parser orchestration:
/// - Owns the `Parser` struct and `ParserOptions`
/// - Exposes the `parse(tokens)` entry points
pub mod parser;

/// Statement-level rules:
/// - assignmentStatement
pub mod statements;

/// Expression-level rules:
/// - subtExpression → addExpression → multExpression → atomicExpression
pub mod expressions;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - required-token consumption
pub mod helpers;

/// The grammar as data:
/// - productions and EBNF rendering
/// - FIRST sets
/// - validation
pub mod grammar;

/// Re-export the public parse entry points so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, parse_with, Parser, ParserOptions};
