//! sqlscan: Tokenize SQL text and print the token stream.
//!
//! Usage:
//!   sqlscan [options] [file]
//!
//! Reads from the file if given, otherwise from stdin.

use clap::Parser as ClapParser;
use sqlscan_core::LineMap;
use sqlscan_lexer::Tokenizer;
use sqlscan_tokens::TokenKind;
use std::io::Read;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "sqlscan", about = "Tokenize SQL text with scanner-driven lexical rules")]
struct Cli {
    /// SQL file to tokenize; stdin when omitted.
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Emit the token stream as JSON.
    #[arg(long)]
    json: bool,

    /// Include whitespace tokens in the output.
    #[arg(long = "keep-whitespace")]
    keep_whitespace: bool,
}

fn main() {
    let cli = Cli::parse();

    let source = match read_source(cli.file.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let mut tokens = Tokenizer::tokenize(&source);
    if !cli.keep_whitespace {
        tokens.retain(|t| t.kind != TokenKind::Whitespace);
    }

    if cli.json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize tokens: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let chars: Vec<char> = source.chars().collect();
    let line_map = LineMap::new(&source);
    for token in &tokens {
        let lc = line_map.line_and_column_of(token.span.start);
        let text: String = chars[token.span.to_range()].iter().collect();
        println!(
            "{}:{}\t{}\t{}",
            lc.line + 1,
            lc.column + 1,
            token.kind,
            text.escape_debug()
        );
    }
}

fn read_source(file: Option<&str>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
