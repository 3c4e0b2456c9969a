/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     main.rs
 * Purpose:  Demonstration binary: lexes one input and prints the result
 *           as JSON, optionally running the recognizer over it.
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

use panda::diagnostics::DiagnosticPrinter;
use panda::parser::grammar;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::env;
use std::error::Error;
use std::process::ExitCode;

/// Input used when none is given on the command line.
const DEMO_INPUT: &str = "True == Truething";

const USAGE: &str = "usage: panda [--parse] [--grammar] [TEXT]";

/// Command-line switches.
#[derive(Debug, Default)]
struct Options {
    parse: bool,
    grammar: bool,
    text: Option<String>,
}

impl Options {
    fn from_args(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Options::default();

        for arg in args {
            match arg.as_str() {
                "--parse" => options.parse = true,
                "--grammar" => options.grammar = true,
                "-h" | "--help" => return Err(USAGE.to_string()),
                flag if flag.starts_with("--") => {
                    return Err(format!("unknown option `{}`\n{}", flag, USAGE));
                }
                _ if options.text.is_some() => {
                    return Err(format!("more than one input given\n{}", USAGE));
                }
                other => options.text = Some(other.to_string()),
            }
        }

        Ok(options)
    }
}

fn main() -> ExitCode {
    let options = match Options::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("panda: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<ExitCode, Box<dyn Error>> {
    if options.grammar {
        for production in grammar::GRAMMAR {
            println!("{}", production);
        }
        grammar::validate()?;
    }

    let source = options.text.as_deref().unwrap_or(DEMO_INPUT);
    let result = panda::lex(source);

    println!("{}", to_tab_indented_json(&result)?);

    let printer = DiagnosticPrinter::new("<input>", source);
    printer.print_all(&result.errors);

    if options.parse {
        if let Err(err) = panda::parser::parse(&result.tokens) {
            eprintln!("{}", err);
            printer.print(err.diagnostic());
            return Ok(ExitCode::FAILURE);
        }
        println!("accepted");
    }

    Ok(ExitCode::SUCCESS)
}

fn to_tab_indented_json<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
