use anyhow::Result;
use clap::{Arg, Command};
use token_icons::{utils::init_logging, LinkChecker, TokenIconResolver};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let matches = Command::new("resolve-icon")
        .about("Resolve the icon URL for a token address")
        .arg(
            Arg::new("chain-id")
                .long("chain-id")
                .help("Chain identifier, e.g. 1 or 369")
                .required_unless_present("check"),
        )
        .arg(
            Arg::new("address")
                .long("address")
                .help("Token contract address")
                .required_unless_present("check"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .value_name("URL")
                .help("Only report whether the URL exists"),
        )
        .get_matches();

    let resolver: TokenIconResolver = TokenIconResolver::default();

    if let Some(url) = matches.get_one::<String>("check") {
        let exists = resolver.checker().check_url_exists(Some(url)).await;
        info!("{} exists: {}", url, exists);
        println!("{}", exists);
        return Ok(());
    }

    let chain_id = matches
        .get_one::<String>("chain-id")
        .ok_or_else(|| anyhow::anyhow!("--chain-id is required"))?;
    let address = matches
        .get_one::<String>("address")
        .ok_or_else(|| anyhow::anyhow!("--address is required"))?;

    info!("🔍 Resolving icon for {} on chain {}", address, chain_id);
    let url = resolver.resolve_token_icon_url(chain_id, address).await;
    println!("{}", url);

    Ok(())
}
