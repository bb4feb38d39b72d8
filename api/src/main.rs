use std::sync::Arc;

use clap::Parser;
use menubot_core::{application::create_service, domain::common::MenubotConfig};

use crate::application::cli::chat::run_chat;
use crate::application::http::server::http_server;
use crate::application::logging::init_logger;
use crate::args::{Args, Command};

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log)?;

    match args.command {
        Command::Serve => http_server::serve(args.clone()).await?,
        Command::Chat { voice } => {
            let service = create_service(MenubotConfig::from(args.as_ref().clone())).await?;
            run_chat(service, voice).await?;
        }
    }

    Ok(())
}
