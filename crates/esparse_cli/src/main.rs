//! esparse: Command-line front end for the esparse parser.
//!
//! Usage:
//!   esparse [options] FILE...
//!
//! Parses each file and prints `ok` or the first early error, rendered
//! against the source. Exits with status 1 when any file fails.

mod tracing_config;

use bumpalo::Bump;
use clap::Parser as ClapParser;
use esparse_ast::{Binding, ExportEntryKind, ModuleRecord, Program};
use esparse_core::intern::{InternedString, StringInterner};
use esparse_core::text::char_to_byte_offset;
use esparse_diagnostics::ParseError;
use esparse_parser::{Parser, ParserOptions, SourceType};
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

#[derive(ClapParser, Debug)]
#[command(name = "esparse", about = "esparse - An ECMAScript parser and early error checker", version)]
struct Cli {
    /// JavaScript files to parse.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Parse the files as modules.
    #[arg(long)]
    module: bool,

    /// Parse the files as strict code.
    #[arg(long)]
    strict: bool,

    /// JSON file with parser options; flags override it.
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Nesting limit before "Stack exhausted".
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<u32>,

    /// Print the parsed statements.
    #[arg(long = "dump-ast")]
    dump_ast: bool,

    /// Print declared and captured variables and code features.
    #[arg(long)]
    summary: bool,

    /// Validate without building a tree.
    #[arg(long = "check-only", conflicts_with_all = ["dump_ast", "summary"])]
    check_only: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{path}': {message}")]
    Config { path: String, message: String },
}

/// A parse error attached to the file it came from, for miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(esparse::parse))]
struct SourceError {
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
    #[help]
    location: String,
}

fn main() {
    tracing_config::init_tracing();
    let cli = Cli::parse();

    let options = match build_options(&cli) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    };
    debug!(?options, files = cli.files.len(), "starting");

    let mut failures = 0;
    for path in &cli.files {
        match run_file(&cli, &options, path) {
            Ok(true) => {}
            Ok(false) => failures += 1,
            Err(err) => {
                eprintln!("error: {}", err);
                failures += 1;
            }
        }
    }
    process::exit(if failures > 0 { 1 } else { 0 });
}

fn build_options(cli: &Cli) -> Result<ParserOptions, CliError> {
    let mut options = match &cli.config {
        Some(path) => {
            let path = path.to_string_lossy().into_owned();
            ParserOptions::from_json_file(&path)
                .map_err(|err| CliError::Config { path: path.clone(), message: err.to_string() })?
        }
        None => ParserOptions::default(),
    };
    if cli.module {
        options.source_type = SourceType::Module;
    }
    if cli.strict {
        options.strict_mode = true;
    }
    if let Some(max_depth) = cli.max_depth {
        options.max_depth = max_depth;
    }
    Ok(options)
}

/// Parse one file. `Ok(false)` means the source has an error.
fn run_file(cli: &Cli, options: &ParserOptions, path: &Path) -> Result<bool, CliError> {
    let display = path.display().to_string();
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Io { path: display.clone(), source })?;
    let arena = Bump::new();
    let start = Instant::now();
    let parser = Parser::with_options(&arena, &source, options.clone());

    if cli.check_only {
        let result = parser.check_syntax();
        debug!(file = %path.display(), elapsed = ?start.elapsed(), "checked");
        return Ok(match result {
            Ok(()) => {
                println!("{}: ok", display);
                true
            }
            Err(err) => {
                render_error(&display, &source, &err);
                false
            }
        });
    }

    let interner = parser.interner().clone();
    let result = parser.parse_program();
    debug!(file = %path.display(), elapsed = ?start.elapsed(), "parsed");
    match result {
        Ok(program) => {
            println!("{}: ok", display);
            if cli.summary {
                print_summary(&interner, &program);
            }
            if cli.dump_ast {
                println!("{:#?}", program.statements);
            }
            Ok(true)
        }
        Err(err) => {
            render_error(&display, &source, &err);
            Ok(false)
        }
    }
}

fn render_error(path: &str, source: &str, error: &ParseError) {
    // Spans are character offsets; miette indexes bytes.
    let start = char_to_byte_offset(source, error.span.start);
    let end = char_to_byte_offset(source, error.span.end());
    let report = miette::Report::new(SourceError {
        message: error.message.clone(),
        source_code: NamedSource::new(path, source.to_string()),
        span: (start, end.saturating_sub(start)).into(),
        location: format!("{}:{}:{}", path, error.line, error.column),
    });
    eprintln!("{:?}", report);
}

// ============================================================================
// Summary
// ============================================================================

fn print_summary(interner: &StringInterner, program: &Program<'_>) {
    println!("  strict mode: {}", program.strict_mode);
    println!("  features: {:?}", program.features);
    println!("  constants: {}", program.num_constants);
    println!("  function declarations: {}", program.function_declarations.len());
    print_bindings(interner, "var", program.var_declarations);
    print_bindings(interner, "lexical", program.lexical_variables);
    print_bindings(interner, "captured", program.captured_variables);
    if let Some(record) = &program.module {
        print_module(interner, record);
    }
}

fn print_bindings(interner: &StringInterner, label: &str, bindings: &[Binding]) {
    let names: Vec<&str> = bindings.iter().map(|binding| interner.resolve(binding.name)).collect();
    println!("  {}: [{}]", label, names.join(", "));
}

fn print_module(interner: &StringInterner, record: &ModuleRecord) {
    let requested = interner.resolve_all(record.requested_modules.iter().copied());
    println!("  requested modules: [{}]", requested.join(", "));
    for entry in &record.import_entries {
        println!(
            "  import {:?} '{}' as '{}' from '{}'",
            entry.kind,
            interner.resolve(entry.import_name),
            interner.resolve(entry.local_name),
            interner.resolve(entry.module_request),
        );
    }
    for entry in &record.export_entries {
        let name = |value: Option<InternedString>| value.map_or("*", |name| interner.resolve(name));
        match entry.kind {
            ExportEntryKind::Local => {
                println!("  export '{}' as '{}'", name(entry.local_name), name(entry.export_name));
            }
            ExportEntryKind::Indirect | ExportEntryKind::Star => {
                println!(
                    "  export '{}' as '{}' from '{}'",
                    name(entry.local_name),
                    name(entry.export_name),
                    name(entry.module_request),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("esparse").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let options = build_options(&cli(&["--module", "--max-depth", "50", "a.js"])).unwrap();
        assert_eq!(options.source_type, SourceType::Module);
        assert_eq!(options.max_depth, 50);
        assert!(!options.strict_mode);
    }

    #[test]
    fn test_check_only_conflicts_with_dump() {
        let result = Cli::try_parse_from(["esparse", "--check-only", "--dump-ast", "a.js"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_is_reported() {
        let err = build_options(&cli(&["--config", "/nonexistent/esparse.json", "a.js"])).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }
}
