use anyhow::Result;
use tracing::info;

use rulebook_cli::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("rulebook starting");
    Session::new().run()?;
    Ok(())
}
