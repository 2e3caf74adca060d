use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use exprtree::{
    analyze_postfix, analyze_terms, AnalyzeError, ErrorReport, DEMO_EXPRESSION,
};
use exprtree_parser::parser::scanner::DEFAULT_MAX_DEPTH;
use exprtree_parser::{ReduceConfig, ScannerConfig, TokenizerMode, DEFAULT_MAX_TREE_DEPTH};
use log::{debug, LevelFilter};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "exprtree",
    version,
    about = "Parse arithmetic expressions into trees",
    long_about = "exprtree parses an arithmetic expression with one of two strategies.\n\n\
        EXAMPLES:\n\
        \n  exprtree terms '1 + ( 2 + sdsds + asd )'   Scan and validate a term tree\n\
        \n  exprtree postfix '3+4*2'                  Shunting-yard to a binary tree\n\
        \n  exprtree postfix --lexemes '12 * 30'      Use the multi-digit tokenizer\n\
        \n  echo '1 + 2' | exprtree terms --json      Read stdin, print JSON"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan into a nested term tree and validate operand/operator alternation
    Terms(TermsArgs),
    /// Convert to postfix with shunting-yard and reduce to a binary tree
    Postfix(PostfixArgs),
}

#[derive(Debug, Args, Clone)]
struct InputArgs {
    /// Expression text (reads from --file or stdin if not provided)
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Read the expression from a file
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Analyze the built-in demonstration expression
    #[arg(long, conflicts_with_all = ["expression", "file"])]
    demo: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl InputArgs {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

#[derive(Debug, Args, Clone)]
struct TermsArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Maximum parenthesis nesting depth
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Debug, Args, Clone)]
struct PostfixArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Tokenize whole lexemes (multi-digit numbers) instead of single characters
    #[arg(long)]
    lexemes: bool,

    /// Maximum operator nesting depth of the reduced tree
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_TREE_DEPTH)]
    max_depth: usize,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn read_source(input: &InputArgs) -> Result<String, String> {
    let text = if input.demo {
        DEMO_EXPRESSION.to_string()
    } else if let Some(expr) = &input.expression {
        expr.clone()
    } else if let Some(path) = &input.file {
        fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))?
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        buf
    };
    // A trailing line break is not part of the expression.
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

fn emit<T: Serialize + std::fmt::Display>(
    result: Result<T, AnalyzeError>,
    source: &str,
    mode: OutputMode,
) -> i32 {
    match (result, mode) {
        (Ok(report), OutputMode::Text) => {
            print!("{report}");
            0
        }
        (Ok(report), OutputMode::Json) => print_json(&report, 0),
        (Err(err), OutputMode::Text) => {
            eprintln!("{}", err.render(source));
            1
        }
        (Err(err), OutputMode::Json) => print_json(&ErrorReport::from(&err), 1),
    }
}

fn print_json<T: Serialize>(value: &T, code: i32) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            code
        }
        Err(e) => {
            eprintln!("error: failed to serialize report: {e}");
            2
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = match &cli.command {
        Command::Terms(args) => &args.input,
        Command::Postfix(args) => &args.input,
    };
    let source = match read_source(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    debug!("analyzing {source:?}");

    match &cli.command {
        Command::Terms(args) => {
            let config = ScannerConfig {
                max_depth: args.max_depth,
            };
            emit(analyze_terms(&source, config), &source, args.input.output_mode())
        }
        Command::Postfix(args) => {
            let mode = if args.lexemes {
                TokenizerMode::Lexeme
            } else {
                TokenizerMode::CharWise
            };
            let config = ReduceConfig {
                max_depth: args.max_depth,
            };
            emit(
                analyze_postfix(&source, mode, config),
                &source,
                args.input.output_mode(),
            )
        }
    }
}

fn main() {
    std::process::exit(run_cli());
}
