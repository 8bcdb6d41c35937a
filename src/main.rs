use anyhow::{Context, bail};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use shinobi::frontend::ast::Node;
use shinobi::frontend::ast_printer::AstPrinter;
use shinobi::frontend::diagnostic::Diagnostic;
use shinobi::frontend::lexer::tokenize;
use shinobi::frontend::location::LocationRange;
use shinobi::frontend::parser;
use shinobi::frontend::source::{FileName, SourceFile};
use shinobi::frontend::token::{Token, TokenKind};
use shinobi::frontend::writer::{Writer, WriterConfig};
use std::io::{self, Write, stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Ord, PartialOrd, Eq, PartialEq, Debug, Clone, Copy)]
enum CommandArg {
    Lex,
    Parse,
    Format,
}

/// Formats shi build files.
#[derive(Parser, Debug)]
#[command(name = "shinobi", version, long_about = None)]
struct Cli {
    /// Stop after lexing and print the tokens
    #[arg(long, conflicts_with = "parse")]
    lex: bool,

    /// Stop after parsing and print the syntax tree
    #[arg(long)]
    parse: bool,

    /// Spaces per nesting level in the formatted output
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=16))]
    indent: u8,

    /// Rewrite the file in place instead of printing it
    #[arg(short, long, conflicts_with_all = ["lex", "parse"])]
    write: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Build file to read, or `-` for standard input
    #[arg(value_name = "FILE")]
    input_file: PathBuf,
}

impl Cli {
    fn command(&self) -> CommandArg {
        if self.lex {
            CommandArg::Lex
        } else if self.parse {
            CommandArg::Parse
        } else {
            CommandArg::Format
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command();
    let source = Arc::new(read_source(&cli.input_file)?);
    log::info!(
        "{}: read {} bytes",
        source.path().display(),
        source.content.len()
    );

    let tokens = run_lexer(&source)?;
    if command == CommandArg::Lex {
        print_tokens(&tokens)?;
    }

    if command >= CommandArg::Parse {
        let dropped_comment = tokens
            .iter()
            .find(|token| token.kind == TokenKind::Comment)
            .map(Token::range);
        let tree = run_parser(&source, tokens)?;
        if command == CommandArg::Parse {
            AstPrinter::new(stdout().lock()).print(&tree)?;
        }

        if command >= CommandArg::Format {
            if let Some(range) = dropped_comment {
                warn_dropped_comments(&source, range);
            }
            let config = WriterConfig {
                indentation: cli.indent as usize,
            };
            let output = Writer::new(config).write(&tree);
            if cli.write {
                rewrite(&source, &output)?;
            } else {
                stdout().lock().write_all(output.as_bytes())?;
            }
        }
    }

    Ok(())
}

/// `-v` raises the level step by step; `SHINOBI_LOG` takes `env_logger` filter directives.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("SHINOBI_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn read_source(input_file: &Path) -> anyhow::Result<SourceFile> {
    if input_file.as_os_str() == "-" {
        let content = io::read_to_string(io::stdin()).context("failed to read standard input")?;
        return Ok(SourceFile::new(FileName::Stdin, content));
    }
    let content = std::fs::read_to_string(input_file)
        .with_context(|| format!("failed to read {}", input_file.display()))?;
    Ok(SourceFile::new(FileName::from(input_file.to_path_buf()), content))
}

fn run_lexer(source: &Arc<SourceFile>) -> anyhow::Result<Vec<Token>> {
    match tokenize(source.path(), &source.content) {
        Ok(tokens) => Ok(tokens),
        Err(err) => abort(source, err.to_string(), err.range()),
    }
}

fn run_parser(source: &Arc<SourceFile>, tokens: Vec<Token>) -> anyhow::Result<Node> {
    match parser::Parser::new(tokens).parse() {
        Ok(tree) => Ok(tree),
        Err(err) => abort(source, err.to_string(), err.range()),
    }
}

fn abort<T>(source: &Arc<SourceFile>, message: String, range: LocationRange) -> anyhow::Result<T> {
    eprint!("{}", Diagnostic::error(message, source.clone(), range));
    bail!("could not format {}", source.path().display())
}

fn warn_dropped_comments(source: &Arc<SourceFile>, range: LocationRange) {
    let message = "comments are not kept by the formatter".to_string();
    eprint!("{}", Diagnostic::warning(message, source.clone(), range));
}

fn print_tokens(tokens: &[Token]) -> io::Result<()> {
    let mut stdout = stdout().lock();
    for token in tokens {
        writeln!(stdout, "{}: {} {}", token.location, token.kind, token)?;
    }
    Ok(())
}

fn rewrite(source: &SourceFile, output: &str) -> anyhow::Result<()> {
    match &source.name {
        FileName::Real(path) => std::fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display())),
        FileName::Stdin => bail!("standard input cannot be rewritten in place"),
    }
}
