//! Command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Session file used when neither `--session-file` nor `SOUK_SESSION_FILE` is set
pub const DEFAULT_SESSION_FILE: &str = ".souk/session.json";

#[derive(Parser, Debug)]
#[command(author, version, about = "Courier dispatch for the Souk marketplace")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "SOUK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Where the login session is kept between runs
    #[arg(long, env = "SOUK_SESSION_FILE", global = true)]
    pub session_file: Option<PathBuf>,

    /// Log filter (e.g. "info" or "souk_client=debug")
    #[arg(long, env = "SOUK_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Write logs to daily files in this directory instead of stderr
    #[arg(long, env = "SOUK_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and save the session
    Login {
        email: String,
        #[arg(long, env = "SOUK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log out and delete the saved session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List orders waiting for a courier
    Pending,
    /// List couriers, optionally for one zone
    Couriers {
        #[arg(long)]
        zone: Option<String>,
    },
    /// List delivery zones
    Zones,
    /// Assign one pending order; picks the courier locally unless `--courier` is given
    Assign {
        order_id: String,
        #[arg(long)]
        courier: Option<String>,
    },
    /// Let the server pick and assign a courier
    AutoAssign { order_id: String },
    /// Assign every pending order
    AssignAll,
    /// Assign through the admin endpoint
    AdminAssign { order_id: String, courier_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assign_with_courier() {
        let cli = Cli::try_parse_from([
            "souk-dispatch",
            "--api-url",
            "http://api.test",
            "assign",
            "o1",
            "--courier",
            "B",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://api.test"));
        match cli.command {
            Command::Assign { order_id, courier } => {
                assert_eq!(order_id, "o1");
                assert_eq!(courier.as_deref(), Some("B"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["souk-dispatch", "couriers", "--zone", "TUN", "--log-level", "debug"])
            .unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Couriers { zone: Some(z) } if z == "TUN"));
    }
}
