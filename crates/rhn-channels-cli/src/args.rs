use clap::Parser;

use rhn_channels_core::DEFAULT_SERVER;

#[derive(Parser)]
#[command(name = "rhn-channels")]
#[command(about = "List RHN Classic software channels as a parent/child tree")]
#[command(version)]
pub struct Cli {
    /// Username
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password
    #[arg(short, long)]
    pub password: Option<String>,

    /// List child channels for only this base channel
    #[arg(short, long)]
    pub basechannel: Option<String>,

    /// Attempt to filter out custom channels (identified by no gpgkey)
    #[arg(short = 'n', long = "no-custom")]
    pub no_custom: bool,

    /// Server hostname
    #[arg(short, long, default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_credentials_and_defaults() {
        let cli = Cli::try_parse_from(["rhn-channels", "-u", "jdoe", "-p", "secret"]).unwrap();
        assert_eq!(cli.username.as_deref(), Some("jdoe"));
        assert_eq!(cli.password.as_deref(), Some("secret"));
        assert_eq!(cli.server, DEFAULT_SERVER);
        assert!(cli.basechannel.is_none());
        assert!(!cli.no_custom);
    }

    #[test]
    fn parses_long_flags() {
        let cli = Cli::try_parse_from([
            "rhn-channels",
            "--username",
            "jdoe",
            "--password",
            "secret",
            "--basechannel",
            "rhel-x86_64-server-6",
            "--no-custom",
            "--server",
            "satellite.example.com",
        ])
        .unwrap();
        assert_eq!(cli.basechannel.as_deref(), Some("rhel-x86_64-server-6"));
        assert!(cli.no_custom);
        assert_eq!(cli.server, "satellite.example.com");
    }

    #[test]
    fn credentials_may_be_absent() {
        // the missing-credentials precondition is enforced in main, not clap
        let cli = Cli::try_parse_from(["rhn-channels"]).unwrap();
        assert!(cli.username.is_none());
        assert!(cli.password.is_none());
    }
}
