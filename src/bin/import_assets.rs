use billing_samples::app::chapters::assets;
use billing_samples::utils::{logger, validation::Validate};
use billing_samples::{ApiConfig, BillingClient};
use clap::Parser;

#[derive(Parser)]
#[command(name = "import-assets")]
#[command(about = "Upload assets to a product from a CSV file")]
struct Args {
    /// Path to the API configuration file
    #[arg(short, long, default_value = "configs/billing-api.toml")]
    config: String,

    /// Id of the asset product the rows belong to
    #[arg(long)]
    item_id: i32,

    /// CSV file to import; defaults to the path from the config file
    #[arg(short, long)]
    file: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Validate the CSV file without calling the API
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    let config = match ApiConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let import_file = args
        .file
        .unwrap_or_else(|| config.asset_import_file().to_string());

    // 先在本機驗證檔案，再把路徑交給遠端的匯入工作
    let rows = match assets::validate_import_file(&import_file) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::info!("📄 {} rows in {}", rows, import_file);

    if args.dry_run {
        println!("✅ {} is valid ({} rows), skipping upload", import_file, rows);
        return Ok(());
    }

    let api = BillingClient::new(&config);
    match api
        .start_import_asset_job(
            args.item_id,
            "Identifier",
            "Notes",
            "Global",
            "Entities",
            &import_file,
            config.asset_error_file(),
        )
        .await
    {
        Ok(()) => {
            tracing::info!("✅ Import job started for item {}", args.item_id);
            println!("✅ Import job started ({} rows)", rows);
        }
        Err(e) => {
            tracing::error!("❌ Import job failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
