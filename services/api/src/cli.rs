use crate::decide::{run_decide, DecideArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Decision Engine",
    about = "Serve or run consumer loan decisions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Decide a single loan request and print the outcome
    Decide(DecideArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Decide(args) => run_decide(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["loan-decision-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_decide_arguments() {
        let cli = Cli::try_parse_from([
            "loan-decision-api",
            "decide",
            "--personal-code",
            "38411266610",
            "--amount",
            "4000",
            "--period",
            "12",
            "--today",
            "2025-03-27",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Decide(args)) => {
                assert_eq!(args.personal_code, "38411266610");
                assert_eq!(args.amount, 4000);
                assert_eq!(args.period, 12);
                assert!(args.today.is_some());
                assert!(!args.json);
            }
            other => panic!("expected decide command, got {other:?}"),
        }
    }
}
