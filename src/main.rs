use bomplan::cli::commands;
use bomplan::cli::logging::init_logging;
use bomplan::cli::{Cli, Commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Install miette's fancy error handler for beautiful diagnostics
    if let Err(e) = miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    })) {
        eprintln!("failed to install diagnostic handler: {}", e);
    }

    let cli = Cli::parse_args();
    init_logging(&cli.global);
    tracing::debug!(command = ?cli.command, "bomplan v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        None => return commands::run::run(cli.run),
        Some(Commands::Run(args)) => return commands::run::run(args),
        Some(Commands::Components(args)) => commands::components::run(args, &cli.global),
        Some(Commands::Unprovided(args)) => commands::unprovided::run(args, &cli.global),
        Some(Commands::Takt(args)) => commands::takt::run(args, &cli.global),
        Some(Commands::Flatten(args)) => commands::flatten::run(args, &cli.global),
        Some(Commands::Config(args)) => commands::config::run(args, &cli.global),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            eprintln!("{:?}", report);
            ExitCode::FAILURE
        }
    }
}
