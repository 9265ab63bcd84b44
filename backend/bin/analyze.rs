use clap::Parser;
use cryptoscore::{
    models::{AddressQuery, AnalysisStage},
    utils::init_logging,
    AddressAnalyzer, Config, ExplorerClient,
};
use tracing::info;

#[derive(Parser)]
#[clap(name = "analyze")]
#[clap(about = "Score a blockchain address from its on-chain history", long_about = None)]
struct Cli {
    /// Address to analyze
    #[clap(short, long)]
    address: String,

    /// Network (ethereum, bitcoin, polygon, bsc, arbitrum, optimism)
    #[clap(short, long, default_value = "ethereum")]
    network: String,

    /// Print the full report as JSON
    #[clap(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let analyzer = AddressAnalyzer::new(ExplorerClient::from_config(&config)?);

    info!("Analyzing {} on {}", cli.address, cli.network);

    let stage = analyzer
        .run(&AnalysisStage::Idle, AddressQuery::new(cli.address, cli.network))
        .await;

    match &stage {
        AnalysisStage::Results(report) if cli.json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        AnalysisStage::Results(report) => {
            println!("\n=== Address Analysis ===");
            println!("Address: {}", report.address);
            println!("Network: {}", report.network);
            println!("Balance: {} ETH", report.balance.formatted_value);
            println!("Transactions: {}", report.total_transactions);
            println!("First activity: {}", report.first_activity_display);
            println!("Last activity: {}", report.last_activity_display);
            println!("NFT collections: {}", report.nft.token_stats.len());

            println!("\nCredit Score: {}/100", report.credit_score.score);
            println!("Risk: {}", report.credit_score.risk_tier.as_str());

            if report.credit_score.recommendations.is_empty() {
                println!("\nNo recommendations - the account is in great shape");
            } else {
                println!("\nRecommendations:");
                for (i, rec) in report.credit_score.recommendations.iter().enumerate() {
                    println!("  {}. {}", i + 1, rec);
                }
            }
        }
        AnalysisStage::Error { error, .. } => {
            eprintln!("\nAnalysis failed: {}", error);
            if stage.can_retry() {
                eprintln!("This is usually temporary, please try again.");
            }
            std::process::exit(1);
        }
        other => {
            return Err(anyhow::anyhow!("Analysis ended in unexpected stage: {}", other.name()));
        }
    }

    Ok(())
}
