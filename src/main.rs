use std::io::{self, BufRead, Write};

use clap::{ArgAction, Parser};
use exprtree::{
    Options, get_result,
    interpreter::lexer::{LeafKind, classify},
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// exprtree builds the expression tree of a fully parenthesized arithmetic
/// expression, prints it in infix, prefix and postfix notation, and evaluates
/// it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Rejects malformed expressions and division by zero instead of
    /// substituting zero.
    #[arg(short, long)]
    strict: bool,

    /// Binds a variable before evaluation. May be repeated.
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    variables: Vec<(String, f64)>,

    /// Logs to stderr; repeat for more detail (-d, -dd, -ddd).
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,

    /// The expression, e.g. `((3+4)*2)`. Read from standard input when
    /// omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    let expression = match args.expression {
        Some(expression) => expression,
        None => read_expression().unwrap_or_else(|e| {
                                     eprintln!("Failed to read an expression from standard input: {e}");
                                     std::process::exit(1);
                                 }),
    };

    let options = Options { strict:    args.strict,
                            variables: args.variables.into_iter().collect(), };

    match get_result(&expression, &options) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn read_expression() -> io::Result<String> {
    eprint!("Enter arithmetic expression: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Parses a `NAME=VALUE` binding; the name must be a valid variable name.
fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected NAME=VALUE, found '{binding}'"))?;
    let name = name.trim();

    if classify(name) != Some(LeafKind::Variable) {
        return Err(format!("'{name}' is not a variable name (letters optionally followed by digits)"));
    }

    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;

    Ok((name.to_string(), value))
}

/// Installs a stderr logger. `RUST_LOG` directives take precedence over the
/// level picked by `-d`.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder().with_default_directive(level.into())
                                     .from_env_lossy();

    let fmt_layer = fmt::layer().with_writer(io::stderr)
                                .with_target(true)
                                .with_thread_names(false)
                                .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}
