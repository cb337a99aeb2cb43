use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use jacy::{display_error, display_program, lexer::lexer::tokenize, parser::parser::parse};

#[derive(Parser, Debug)]
#[command(name = "jacy")]
#[command(version, about = "Jacy front end: lexes and parses a source file", long_about = None)]
struct Args {
    /// The source file to parse
    file: PathBuf,

    /// Print the token stream
    #[arg(short = 't', long = "tokens")]
    tokens: bool,

    /// Print the parsed program in canonical form
    #[arg(short = 'a', long = "ast")]
    ast: bool,

    /// Print how long each phase took
    #[arg(long = "timings")]
    timings: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", args.file.display(), err);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &args.file);
            return ExitCode::from(1);
        }
    };

    if args.timings {
        println!("Tokenized in {:?}", start.elapsed());
    }

    if args.tokens {
        for token in &tokens {
            println!("{}", token.debug());
        }
    }

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, &args.file);
            return ExitCode::from(1);
        }
    };

    if args.timings {
        println!("Parsed in {:?}", parse_start.elapsed());
        println!("Total time: {:?}", start.elapsed());
    }

    if args.ast {
        println!("{}", display_program(&program));
    }

    ExitCode::SUCCESS
}
