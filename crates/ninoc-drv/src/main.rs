//! `ninoc <source-file> [<destination-file>]`
//!
//! Exit code 0 on success, 1 on any compilation or subprocess failure. No
//! flags are defined.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ninoc_drv::{CompileError, Config, Session};
use ninoc_util::{Diagnostic, Handler};

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => fail(&err),
    };

    if let Err(err) = Session::new(config).compile() {
        fail(&err);
    }
}

/// Renders `err` through a [`Handler`] the way the driver reports every
/// fatal error — a stage is fatal-on-first-error, so the handler only ever
/// collects the one diagnostic before the process exits.
fn fail(err: &CompileError) -> ! {
    let mut handler = Handler::new();
    handler.emit(Diagnostic::error(stage_message(err)));
    eprintln!("{}", handler.first_error().expect("a diagnostic was just emitted"));
    std::process::exit(1);
}

/// Prefixes the error with the stage that detected it; the message already
/// carries its own source position (§7's taxonomy embeds the span in the
/// `Display` of each stage's error type), so the diagnostic is emitted
/// without a separate span to avoid reporting the position twice.
fn stage_message(err: &CompileError) -> String {
    match err {
        CompileError::Lex(e) => format!("Lexer: {e}"),
        CompileError::Parse(e) => format!("Parser: {e}"),
        CompileError::Codegen(e) => format!("Codegen: {e}"),
        CompileError::Driver(e) => format!("Driver: {e}"),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt::layer().with_target(false).with_thread_ids(false).with_thread_names(false);
    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}
