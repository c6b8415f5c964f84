use clap::Parser;

use crate::utils::constants::DEFAULT_REQUEST_TIMEOUT_SECS;

#[derive(Parser, Debug)]
#[command(name = "Group Redirect", about = "Forwards a visitor to an available WhatsApp group")]
pub struct Args {
    /// Base URL of the group directory API; overrides API_URL.
    #[arg(long)]
    pub api_url: Option<String>,

    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Open the group link in the system browser instead of printing it.
    #[arg(long)]
    pub open: bool,
}
