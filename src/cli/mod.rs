pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod ux;

pub use clap::Parser;


pub const CMD_NAME: &str = "athena-views";


// GitHub Actions passes action inputs as environment variables prefixed with "INPUT_".
#[derive(Parser)]
#[command(name = CMD_NAME, version, about = "Athena views generator: runs every SQL file under a directory against Athena.")]
pub struct Cli {
    #[arg(
        long = "path",
        help = "Directory scanned recursively for '.sql' files.",
        env = "INPUT_PATH",
    )]
    pub path: Option<String>,

    #[arg(
        long = "database",
        help = "Athena database the queries run against.",
        env = "INPUT_DATABASE",
    )]
    pub database: Option<String>,

    #[arg(
        long = "workgroup",
        help = "Athena workgroup. [default: default]",
        env = "INPUT_WORKGROUP",
    )]
    pub workgroup: Option<String>,

    #[arg(
        long = "region",
        help = "AWS region of the Athena service. [default: us-east-1]",
        env = "INPUT_REGION",
    )]
    pub region: Option<String>,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Set level of verbosity. [default: INFO]\n\t-v: DEBUG\n\t-vv: TRACE\n--quiet takes precedence over --verbose."
    )]
    pub verbose: u8,

    #[arg(
        short,
        long,
        action = clap::ArgAction::SetTrue,
        help = "Disable all information logs (only ERROR level logs are shown).\n--quiet takes precedence over --verbose."
    )]
    pub quiet: bool,

    #[arg(
        long,
        action = clap::ArgAction::SetTrue,
        help = "Enable JSON output format. Human readable output is disabled when this flag is set."
    )]
    pub json: bool,
}
