//! cmdsync - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cmdsync sync` | Push the global command tree if its digest changed |
//! | `cmdsync sync --force` | Push the global command tree unconditionally |
//! | `cmdsync sync --guild <id>` | Push the commands declared for one guild |
//! | `cmdsync digest` | Show the current and the persisted digest |
//! | `cmdsync fetch [--guild <id>]` | List registered commands |
//! | `cmdsync mention <name> [--guild <id>]` | Print the mention of a command |

use clap::Parser;
use cmdsync::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let output = run(cli).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
