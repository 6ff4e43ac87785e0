use clap::Parser;
use small_cart::core::{CartItem, ConfigProvider};
use small_cart::utils::{logger, validation::Validate};
use small_cart::{
    CartCommand, CartStore, CliConfig, ConsoleNotifier, FileConfig, HttpCatalog, LocalStorage,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🛒 Starting small-cart CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let command = cli.command.clone();

    // TOML 配置文件優先於命令行參數
    if let Some(config_path) = &cli.config {
        let file_config = match FileConfig::from_file(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("❌ Failed to load config file: {}", e);
                eprintln!("❌ {}", e);
                eprintln!("💡 Check that {} exists and is valid TOML", config_path);
                std::process::exit(1);
            }
        };
        run_command(file_config, command).await
    } else {
        run_command(cli, command).await
    }
}

async fn run_command<C: ConfigProvider + Validate>(
    config: C,
    command: CartCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 創建存儲與目錄客戶端
    let storage_path = config.storage_path().to_string();
    let catalog = HttpCatalog::new(config);
    let storage = LocalStorage::new(storage_path);
    let notifier = ConsoleNotifier::new();

    // 載入已持久化的購物車
    let mut store = CartStore::load(catalog, storage, notifier).await;

    match command {
        CartCommand::Show => {}
        CartCommand::Add { product_id } => {
            store.add_product(product_id).await;
        }
        CartCommand::Remove { product_id } => {
            store.remove_product(product_id).await;
        }
        CartCommand::Set { product_id, amount } => {
            store.update_product_amount(product_id, amount).await;
        }
    }

    print_cart(store.cart());

    Ok(())
}

fn print_cart(items: &[CartItem]) {
    if items.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    println!("🛒 Cart contents:");
    for item in items {
        println!(
            "  {} x{} ({} each)",
            item.product.title, item.amount, item.product.price
        );
    }
}
