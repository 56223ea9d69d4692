use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "seafront-api")]
#[command(about = "Contact and localization backend for the Seafront Hotel website")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Min seconds between accepted contact submissions per client
    #[arg(long, default_value_t = 12)]
    pub cooldown_secs: u64,

    // Seconds an idle rate-limit entry is kept before the sweep drops it
    // (never effectively shorter than the cooldown)
    #[arg(long, default_value_t = 60)]
    pub retention_secs: u64,
}
