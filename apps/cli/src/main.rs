mod args;
mod main_lib;
mod report;

use args::Cli;
use clap::Parser;
use fundest_estimator::FundEstimator;
use main_lib::{build_requests, init_tracing, load_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    let config = load_config()?;
    tracing::debug!("Proxy table holds {} entries", config.proxy_table.len());

    let estimator = FundEstimator::new(config);
    let requests = build_requests(&cli.fund_codes(), &cli.amounts);

    let results = if cli.parallel {
        estimator.estimate_many(&requests).await
    } else {
        let mut results = Vec::with_capacity(requests.len());
        for (fund_code, principal) in &requests {
            results.push(estimator.estimate(fund_code, *principal).await);
        }
        results
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", report::render(&results));
    }
    Ok(())
}
