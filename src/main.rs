mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "brewenv=debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // A second subscriber can only come from tests; keep the first.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn main() {
    let args = Cli::parse();

    init_tracing(args.verbose);
    cli::context::init(args.config.as_deref(), args.quiet);

    // For commands that expect a single env, use the first --env value
    let single_env = args.env.first().map(|s| s.as_str());

    let result = match &args.command {
        Commands::Show { field } => cli::commands::show::execute(single_env, field.as_deref()),
        Commands::List => cli::commands::list::execute(),
        Commands::Check { file } => cli::commands::check::execute(file.as_deref(), single_env),
        Commands::Diff => cli::commands::diff::execute(&args.env),
        Commands::Export { format, output } => {
            cli::commands::export::execute(single_env, format, output.as_deref())
        }
        Commands::Urls { callback_path } => {
            cli::commands::urls::execute(single_env, callback_path)
        }
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
