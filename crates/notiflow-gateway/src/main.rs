mod config;
mod service;

use anyhow::Result;
use crate::config::Config;
use crate::service::DispatchService;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Create and run dispatch service
    let dispatcher = DispatchService::new(config);
    dispatcher.run()
}
