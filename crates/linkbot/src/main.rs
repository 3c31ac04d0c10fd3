use extractor::LinkExtractor;
use ::telegram::telegram;
use ::telegram::{BotResult, Config, ConfigError, Mode, UploadSettings};
use teloxide::{prelude::*, update_listeners::webhooks};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Bot stopped: {}", e);
        std::process::exit(1);
    }
}

/// Settings handed to the document handler
fn upload_settings(config: &Config) -> UploadSettings {
    UploadSettings {
        extractor: LinkExtractor::new(config.pairing),
        work_dir: config.work_dir.clone(),
    }
}

async fn run(config: Config) -> BotResult<()> {
    let bot = Bot::new(config.token.clone());

    if let Err(e) = telegram::set_bot_commands(&bot).await {
        tracing::warn!("Failed to register bot commands: {}", e);
    }

    let settings = upload_settings(&config);

    let mut dispatcher = Dispatcher::builder(bot.clone(), telegram::schema())
        .dependencies(dptree::deps![settings])
        .enable_ctrlc_handler()
        .build();

    match config.mode {
        Mode::Polling => {
            tracing::info!("Bot started in polling mode (pairing: {})", config.pairing);
            dispatcher.dispatch().await;
        }
        Mode::Webhook { listen, url } => {
            let options = webhooks::Options::new(
                listen,
                url.parse()
                    .map_err(|e| ConfigError::InvalidWebhookUrl(format!("{}", e)))?,
            );
            let listener = webhooks::axum(bot, options).await?;

            tracing::info!(
                "Bot started in webhook mode on {} (pairing: {})",
                listen,
                config.pairing
            );
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
    }

    Ok(())
}
