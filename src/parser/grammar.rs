/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     parser/grammar.rs
 * Purpose:  The PANDA grammar as read-only data, its FIRST sets, and the
 *           one-time validation pass run by the test suite.
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
use crate::lexer::vocabulary;
use std::collections::HashSet;
use std::fmt;

/// Names of the grammar rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    AssignmentStatement,
    Expression,
    SubtExpression,
    AddExpression,
    MultExpression,
    AtomicExpression,
}

impl Rule {
    pub const ALL: [Rule; 6] = [
        Rule::AssignmentStatement,
        Rule::Expression,
        Rule::SubtExpression,
        Rule::AddExpression,
        Rule::MultExpression,
        Rule::AtomicExpression,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::AssignmentStatement => "assignmentStatement",
            Rule::Expression => "expression",
            Rule::SubtExpression => "subtExpression",
            Rule::AddExpression => "addExpression",
            Rule::MultExpression => "multExpression",
            Rule::AtomicExpression => "atomicExpression",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One element of a right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A terminal: one token of this kind.
    Token(TokenKind),

    /// A non-terminal.
    Rule(Rule),

    /// `( … )*`: the enclosed sequence, zero or more times.
    Many(&'static [Symbol]),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Token(kind) => write!(f, "{}", kind),
            Symbol::Rule(rule) => write!(f, "{}", rule),
            Symbol::Many(inner) => write!(f, "( {} )*", join(inner)),
        }
    }
}

/// A rule and its ordered alternatives.
#[derive(Debug, Clone, Copy)]
pub struct Production {
    pub rule: Rule,
    pub alternatives: &'static [&'static [Symbol]],
}

impl fmt::Display for Production {
    /// Renders the production in EBNF:
    /// ```text
    /// atomicExpression := LParen expression RParen | Integer | Identifier
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alternatives: Vec<String> = self.alternatives.iter().map(|alt| join(alt)).collect();
        write!(f, "{} := {}", self.rule, alternatives.join(" | "))
    }
}

fn join(seq: &[Symbol]) -> String {
    seq.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Where recognition starts.
pub const START: Rule = Rule::AssignmentStatement;

/// The complete PANDA grammar.
///
/// The recursive-descent functions in `statements.rs` and `expressions.rs`
/// implement exactly these productions; this table is what the validation
/// pass and the FIRST-set queries read.
pub static GRAMMAR: &[Production] = &[
    Production {
        rule: Rule::AssignmentStatement,
        alternatives: &[&[
            Symbol::Token(TokenKind::Identifier),
            Symbol::Token(TokenKind::Assignment),
            Symbol::Rule(Rule::Expression),
        ]],
    },
    Production {
        rule: Rule::Expression,
        alternatives: &[&[Symbol::Rule(Rule::SubtExpression)]],
    },
    Production {
        rule: Rule::SubtExpression,
        alternatives: &[&[
            Symbol::Rule(Rule::AddExpression),
            Symbol::Many(&[
                Symbol::Token(TokenKind::Subtraction),
                Symbol::Rule(Rule::AddExpression),
            ]),
        ]],
    },
    Production {
        rule: Rule::AddExpression,
        alternatives: &[&[
            Symbol::Rule(Rule::MultExpression),
            Symbol::Many(&[
                Symbol::Token(TokenKind::Addition),
                Symbol::Rule(Rule::MultExpression),
            ]),
        ]],
    },
    Production {
        rule: Rule::MultExpression,
        alternatives: &[&[
            Symbol::Rule(Rule::AtomicExpression),
            Symbol::Many(&[
                Symbol::Token(TokenKind::Multiplication),
                Symbol::Rule(Rule::AtomicExpression),
            ]),
        ]],
    },
    Production {
        rule: Rule::AtomicExpression,
        alternatives: &[
            &[
                Symbol::Token(TokenKind::LParen),
                Symbol::Rule(Rule::Expression),
                Symbol::Token(TokenKind::RParen),
            ],
            &[Symbol::Token(TokenKind::Integer)],
            &[Symbol::Token(TokenKind::Identifier)],
        ],
    },
];

/// Problems the validation pass can find in a grammar table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Two productions for the same rule.
    DuplicateRule(Rule),

    /// A rule is used (or is the start rule) but has no production.
    UndefinedRule {
        rule: Rule,
        referenced_by: Option<Rule>,
    },

    /// A terminal the vocabulary cannot produce.
    UnknownTerminal { kind: TokenKind, rule: Rule },

    /// A `( … )*` body that can match nothing, which would loop forever.
    NullableRepetition(Rule),

    /// The rule can reach itself without consuming a token.
    LeftRecursion(Rule),

    /// Two alternatives start with the same token, so one token of
    /// lookahead cannot choose between them.
    AmbiguousAlternatives { rule: Rule, kind: TokenKind },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::DuplicateRule(rule) => {
                write!(f, "rule `{}` is defined more than once", rule)
            }
            GrammarError::UndefinedRule {
                rule,
                referenced_by: Some(by),
            } => write!(f, "rule `{}` referenced by `{}` is not defined", rule, by),
            GrammarError::UndefinedRule { rule, referenced_by: None } => {
                write!(f, "start rule `{}` is not defined", rule)
            }
            GrammarError::UnknownTerminal { kind, rule } => {
                write!(f, "rule `{}` uses `{}`, which the vocabulary never emits", rule, kind)
            }
            GrammarError::NullableRepetition(rule) => {
                write!(f, "rule `{}` repeats a sequence that can be empty", rule)
            }
            GrammarError::LeftRecursion(rule) => write!(f, "rule `{}` is left-recursive", rule),
            GrammarError::AmbiguousAlternatives { rule, kind } => write!(
                f,
                "alternatives of `{}` both start with `{}`",
                rule, kind
            ),
        }
    }
}

impl std::error::Error for GrammarError {}

/// Validates the built-in grammar.
pub fn validate() -> Result<(), GrammarError> {
    validate_productions(GRAMMAR, START)
}

/// FIRST set of `rule` in the built-in grammar, in alternative order.
pub fn first_set(rule: Rule) -> Vec<TokenKind> {
    Analysis::new(GRAMMAR).first(rule)
}

/// Looks up the production for `rule` in the built-in grammar.
pub fn production(rule: Rule) -> Option<&'static Production> {
    GRAMMAR.iter().find(|p| p.rule == rule)
}

/// Checks a grammar table before any recognizer relies on it.
///
/// # Checks, in order
/// - every rule has at most one production
/// - the start rule and every referenced rule are defined
/// - every terminal is emitted by the vocabulary
/// - no repetition body is nullable
/// - no rule is left-recursive
/// - the alternatives of each rule have disjoint FIRST sets
///
/// Returns the first problem found.
pub fn validate_productions(productions: &[Production], start: Rule) -> Result<(), GrammarError> {
    for (i, p) in productions.iter().enumerate() {
        if productions[..i].iter().any(|q| q.rule == p.rule) {
            return Err(GrammarError::DuplicateRule(p.rule));
        }
    }

    let analysis = Analysis::new(productions);

    if analysis.production(start).is_none() {
        return Err(GrammarError::UndefinedRule {
            rule: start,
            referenced_by: None,
        });
    }

    for p in productions {
        let mut symbols = Vec::new();
        for &alt in p.alternatives {
            flatten(alt, &mut symbols);
        }

        for symbol in symbols {
            match symbol {
                Symbol::Rule(rule) if analysis.production(rule).is_none() => {
                    return Err(GrammarError::UndefinedRule {
                        rule,
                        referenced_by: Some(p.rule),
                    });
                }
                Symbol::Token(kind) if vocabulary::entry_for(kind).is_none() => {
                    return Err(GrammarError::UnknownTerminal { kind, rule: p.rule });
                }
                Symbol::Many(inner) if analysis.seq_nullable(inner) => {
                    return Err(GrammarError::NullableRepetition(p.rule));
                }
                _ => {}
            }
        }
    }

    for p in productions {
        if analysis.is_left_recursive(p.rule) {
            return Err(GrammarError::LeftRecursion(p.rule));
        }
    }

    for p in productions {
        let firsts: Vec<Vec<TokenKind>> = p
            .alternatives
            .iter()
            .map(|alt| analysis.first_of_alternative(alt))
            .collect();

        for (i, a) in firsts.iter().enumerate() {
            for b in &firsts[i + 1..] {
                if let Some(kind) = a.iter().find(|k| b.contains(k)) {
                    return Err(GrammarError::AmbiguousAlternatives {
                        rule: p.rule,
                        kind: *kind,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Collects every symbol of `seq`, descending into repetitions.
fn flatten(seq: &'static [Symbol], out: &mut Vec<Symbol>) {
    for symbol in seq {
        out.push(*symbol);
        if let Symbol::Many(inner) = *symbol {
            flatten(inner, out);
        }
    }
}

fn push_unique(out: &mut Vec<TokenKind>, kind: TokenKind) {
    if !out.contains(&kind) {
        out.push(kind);
    }
}

/// Derived facts about a grammar table.
struct Analysis<'g> {
    productions: &'g [Production],
    nullable: HashSet<Rule>,
}

impl<'g> Analysis<'g> {
    fn new(productions: &'g [Production]) -> Self {
        let mut analysis = Self {
            productions,
            nullable: HashSet::new(),
        };
        analysis.compute_nullable();
        analysis
    }

    fn production(&self, rule: Rule) -> Option<&'g Production> {
        self.productions.iter().find(|p| p.rule == rule)
    }

    /// Fixpoint over "some alternative derives the empty string".
    fn compute_nullable(&mut self) {
        let productions = self.productions;

        loop {
            let mut changed = false;

            for p in productions {
                if self.nullable.contains(&p.rule) {
                    continue;
                }

                if p.alternatives.iter().any(|alt| self.seq_nullable(alt)) {
                    self.nullable.insert(p.rule);
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }
    }

    fn seq_nullable(&self, seq: &[Symbol]) -> bool {
        seq.iter().all(|symbol| match symbol {
            Symbol::Token(_) => false,
            Symbol::Rule(rule) => self.nullable.contains(rule),
            Symbol::Many(_) => true,
        })
    }

    fn first(&self, rule: Rule) -> Vec<TokenKind> {
        let mut out = Vec::new();
        self.first_of_rule(rule, &mut HashSet::new(), &mut out);
        out
    }

    fn first_of_alternative(&self, seq: &[Symbol]) -> Vec<TokenKind> {
        let mut out = Vec::new();
        self.first_of_seq(seq, &mut HashSet::new(), &mut out);
        out
    }

    fn first_of_rule(&self, rule: Rule, visited: &mut HashSet<Rule>, out: &mut Vec<TokenKind>) {
        if !visited.insert(rule) {
            return;
        }

        if let Some(p) = self.production(rule) {
            for alt in p.alternatives {
                self.first_of_seq(alt, visited, out);
            }
        }
    }

    fn first_of_seq(&self, seq: &[Symbol], visited: &mut HashSet<Rule>, out: &mut Vec<TokenKind>) {
        for symbol in seq {
            match *symbol {
                Symbol::Token(kind) => {
                    push_unique(out, kind);
                    return;
                }
                Symbol::Rule(rule) => {
                    self.first_of_rule(rule, visited, out);
                    if !self.nullable.contains(&rule) {
                        return;
                    }
                }
                Symbol::Many(inner) => self.first_of_seq(inner, visited, out),
            }
        }
    }

    /// Rules that can appear first in `seq` before any token is consumed.
    fn leading_rules(&self, seq: &[Symbol], out: &mut Vec<Rule>) {
        for symbol in seq {
            match *symbol {
                Symbol::Token(_) => return,
                Symbol::Rule(rule) => {
                    out.push(rule);
                    if !self.nullable.contains(&rule) {
                        return;
                    }
                }
                Symbol::Many(inner) => self.leading_rules(inner, out),
            }
        }
    }

    fn is_left_recursive(&self, rule: Rule) -> bool {
        let mut stack = vec![rule];
        let mut seen = HashSet::new();

        while let Some(current) = stack.pop() {
            let Some(p) = self.production(current) else {
                continue;
            };

            for alt in p.alternatives {
                let mut leading = Vec::new();
                self.leading_rules(alt, &mut leading);

                for next in leading {
                    if next == rule {
                        return true;
                    }
                    if seen.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_grammar_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_every_rule_has_a_production() {
        for rule in Rule::ALL {
            assert!(production(rule).is_some(), "{} has no production", rule);
        }
    }

    #[test]
    fn test_first_sets() {
        let atoms = vec![TokenKind::LParen, TokenKind::Integer, TokenKind::Identifier];

        assert_eq!(first_set(Rule::AtomicExpression), atoms);
        assert_eq!(first_set(Rule::Expression), atoms);
        assert_eq!(first_set(Rule::SubtExpression), atoms);
        assert_eq!(first_set(Rule::AssignmentStatement), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_ebnf_rendering() {
        let rendered: Vec<String> = GRAMMAR.iter().map(|p| p.to_string()).collect();

        assert_eq!(rendered[0], "assignmentStatement := Identifier Assignment expression");
        assert_eq!(
            rendered[2],
            "subtExpression := addExpression ( Subtraction addExpression )*"
        );
        assert_eq!(
            rendered[5],
            "atomicExpression := LParen expression RParen | Integer | Identifier"
        );
    }

    #[test]
    fn test_detects_left_recursion() {
        static LEFT_RECURSIVE: &[Production] = &[Production {
            rule: Rule::Expression,
            alternatives: &[
                &[
                    Symbol::Rule(Rule::Expression),
                    Symbol::Token(TokenKind::Addition),
                    Symbol::Token(TokenKind::Integer),
                ],
                &[Symbol::Token(TokenKind::Integer)],
            ],
        }];

        assert_eq!(
            validate_productions(LEFT_RECURSIVE, Rule::Expression),
            Err(GrammarError::LeftRecursion(Rule::Expression))
        );
    }

    #[test]
    fn test_detects_indirect_left_recursion() {
        static INDIRECT: &[Production] = &[
            Production {
                rule: Rule::Expression,
                alternatives: &[&[Symbol::Rule(Rule::AddExpression)]],
            },
            Production {
                rule: Rule::AddExpression,
                alternatives: &[
                    &[
                        Symbol::Many(&[Symbol::Token(TokenKind::Addition)]),
                        Symbol::Rule(Rule::Expression),
                    ],
                ],
            },
        ];

        assert_eq!(
            validate_productions(INDIRECT, Rule::Expression),
            Err(GrammarError::LeftRecursion(Rule::Expression))
        );
    }

    #[test]
    fn test_detects_ambiguous_alternatives() {
        static AMBIGUOUS: &[Production] = &[Production {
            rule: Rule::AtomicExpression,
            alternatives: &[
                &[Symbol::Token(TokenKind::Integer)],
                &[
                    Symbol::Token(TokenKind::Integer),
                    Symbol::Token(TokenKind::Addition),
                ],
            ],
        }];

        assert_eq!(
            validate_productions(AMBIGUOUS, Rule::AtomicExpression),
            Err(GrammarError::AmbiguousAlternatives {
                rule: Rule::AtomicExpression,
                kind: TokenKind::Integer,
            })
        );
    }

    #[test]
    fn test_detects_undefined_rule() {
        static DANGLING: &[Production] = &[Production {
            rule: Rule::Expression,
            alternatives: &[&[Symbol::Rule(Rule::SubtExpression)]],
        }];

        assert_eq!(
            validate_productions(DANGLING, Rule::Expression),
            Err(GrammarError::UndefinedRule {
                rule: Rule::SubtExpression,
                referenced_by: Some(Rule::Expression),
            })
        );
        assert_eq!(
            validate_productions(DANGLING, Rule::AssignmentStatement),
            Err(GrammarError::UndefinedRule {
                rule: Rule::AssignmentStatement,
                referenced_by: None,
            })
        );
    }

    #[test]
    fn test_detects_nullable_repetition() {
        static EMPTY_LOOP: &[Production] = &[Production {
            rule: Rule::Expression,
            alternatives: &[&[
                Symbol::Token(TokenKind::Integer),
                Symbol::Many(&[Symbol::Many(&[Symbol::Token(TokenKind::Addition)])]),
            ]],
        }];

        assert_eq!(
            validate_productions(EMPTY_LOOP, Rule::Expression),
            Err(GrammarError::NullableRepetition(Rule::Expression))
        );
    }

    #[test]
    fn test_detects_duplicate_rule() {
        static TWICE: &[Production] = &[
            Production {
                rule: Rule::Expression,
                alternatives: &[&[Symbol::Token(TokenKind::Integer)]],
            },
            Production {
                rule: Rule::Expression,
                alternatives: &[&[Symbol::Token(TokenKind::Identifier)]],
            },
        ];

        assert_eq!(
            validate_productions(TWICE, Rule::Expression),
            Err(GrammarError::DuplicateRule(Rule::Expression))
        );
        assert_eq!(
            GrammarError::DuplicateRule(Rule::Expression).to_string(),
            "rule `expression` is defined more than once"
        );
    }
}
