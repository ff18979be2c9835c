use billing_samples::utils::error::ErrorSeverity;
use billing_samples::utils::{logger, validation::Validate};
use billing_samples::{ApiConfig, BillingClient, ChapterSequence};
use clap::Parser;

#[derive(Parser)]
#[command(name = "billing-samples")]
#[command(about = "Runnable sample chapters for the remote billing web-service API")]
struct Args {
    /// Path to the API configuration file
    #[arg(short, long, default_value = "configs/billing-api.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// List the available chapters and exit
    #[arg(long)]
    list: bool,

    /// Chapter to run; omit to run every chapter in order
    chapter: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting billing API sample workbook");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入設定
    let config = match ApiConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證設定
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let sequence = billing_samples::app::default_sequence(&config);

    if args.list {
        println!("Available chapters:");
        for (name, description) in sequence.chapters() {
            println!("  {:<16} {}", name, description);
        }
        return Ok(());
    }

    let api = BillingClient::new(&config);
    tracing::info!("📡 Billing API endpoint: {}", config.endpoint());

    let outcome = match &args.chapter {
        Some(chapter) => sequence.execute(&api, chapter).await.map(|r| vec![r]),
        None => sequence.execute_all(&api).await,
    };

    match outcome {
        Ok(results) => {
            let summary = ChapterSequence::get_execution_summary(&results);
            tracing::info!("✅ All chapters completed successfully!");
            tracing::info!("📊 Execution summary: {:?}", summary);
            println!("✅ Completed {} chapter(s)", results.len());
        }
        Err(e) => {
            tracing::error!(
                "❌ Chapter run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 退出碼依錯誤嚴重程度決定
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
