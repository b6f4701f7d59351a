use std::io::{self, BufWriter, Write};
use std::process;

use tracing_subscriber::EnvFilter;

use super::error::AppError;

/// Reusable CLI application runner that handles:
/// - tracing subscriber installation (stderr, env-filtered, warn by default)
/// - Stdout buffering and flushing
/// - Exit codes (0 = success, 1 = error)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Run the CLI application
    ///
    /// Parses the process arguments with `parse`, then hands a buffered
    /// stdout writer and the parsed input to `main_fn`. Flushing and exit
    /// codes are handled here.
    ///
    /// This function never returns - it calls std::process::exit with the
    /// appropriate code
    pub fn run<T, P, M>(self, parse: P, main_fn: M) -> !
    where
        P: FnOnce(Vec<String>) -> Result<T, AppError>,
        M: FnOnce(&mut dyn Write, T) -> Result<(), AppError>,
    {
        self.init_tracing();

        let args: Vec<String> = std::env::args().collect();
        let result = parse(args).and_then(|input| {
            let mut stdout = BufWriter::new(io::stdout());
            main_fn(&mut stdout, input)?;
            stdout.flush()?;
            Ok(())
        });

        match result {
            Ok(()) => process::exit(0),
            Err(e) => {
                eprintln!("{}: {}", self.name, e);
                process::exit(1);
            }
        }
    }

    /// Install the stderr subscriber
    ///
    /// Unresolved-reference warnings stay visible by default; RUST_LOG
    /// overrides the filter either way.
    fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .ok();
    }
}
