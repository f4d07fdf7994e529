use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use rhn_channels_core::{run_report, ReportOptions, Result, RpcClient, RPC_PATH};

mod args;
use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Both credentials are required before any network call is made.
    let (username, password) = match (cli.username.clone(), cli.password.clone()) {
        (Some(username), Some(password)) => (username, password),
        _ => {
            let mut cmd = Cli::command();
            eprintln!("{}", cmd.render_usage());
            return ExitCode::from(1);
        }
    };

    match run(&cli, username, password) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli, username: String, password: String) -> Result<()> {
    if cli.verbose {
        eprintln!(
            "{} https://{}{}",
            "Connecting:".cyan(),
            cli.server,
            RPC_PATH
        );
    }

    let client = RpcClient::connect(&cli.server)?;
    let options = ReportOptions {
        username,
        password,
        base_channel: cli.basechannel.clone(),
        no_custom: cli.no_custom,
    };

    let mut stdout = io::stdout().lock();
    run_report(&client, &options, &mut stdout)
}
