use anyhow::{anyhow, Result};
use clap::Parser;
use reqwest::Url;

use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Show or change the stored configuration")]
pub struct Options {
    #[clap(long = "public-api-url", help = "Base URL of the public API")]
    pub public_api_url: Option<String>,

    #[clap(long = "api-url", help = "Base URL of the internal API")]
    pub api_url: Option<String>,

    #[clap(
        long = "default-user-id",
        help = "User to act on behalf of when reading secrets, empty to clear"
    )]
    pub default_user_id: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let mut ctx = state.ctx;

    if options.public_api_url.is_none()
        && options.api_url.is_none()
        && options.default_user_id.is_none()
    {
        println!("Public API: {}", ctx.public_api_url());
        println!("API: {}", ctx.api_url());
        println!(
            "User: {}",
            ctx.user_id.as_deref().unwrap_or("none (service role)")
        );

        return Ok(());
    }

    if let Some(url) = options.public_api_url {
        ctx.public_api_url = Some(validate_url(&url)?);
    }

    if let Some(url) = options.api_url {
        ctx.api_url = Some(validate_url(&url)?);
    }

    if let Some(user_id) = options.default_user_id {
        ctx.user_id = Some(user_id).filter(|id| !id.is_empty());
    }

    ctx.save().await?;

    log::info!("Configuration saved");

    Ok(())
}

fn validate_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| anyhow!("Invalid URL `{url}`: {e}"))?;

    match parsed.scheme() {
        "http" | "https" => Ok(url.trim_end_matches('/').to_string()),
        scheme => Err(anyhow!("Unsupported scheme `{scheme}://` in `{url}`")),
    }
}
