/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     parser/statements.rs
 * Purpose:  Statement-level rules of the PANDA grammar.
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

use crate::lexer::token::TokenKind;
use crate::parser::parser::{Parser, RuleResult};

impl<'t> Parser<'t> {
    /// assignmentStatement → Identifier "=" expression
    ///
    /// The only statement form the language has so far.
    pub fn assignment_statement(&mut self) -> RuleResult {
        self.consume(TokenKind::Identifier)?;
        self.consume(TokenKind::Assignment)?;
        self.expression()
    }
}
