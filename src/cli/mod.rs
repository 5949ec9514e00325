//! Flag-driven command line.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode and exit with a non-zero status on failure.
pub fn run(args: Vec<String>) {
    let result = Context::new(&args).and_then(|mut ctx| ctx.run());

    if let Err(e) = result {
        tracing::debug!(error = ?e, "cli failed");
        prompts::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
