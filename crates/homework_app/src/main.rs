mod settings;

use std::process::ExitCode;

use anyhow::Context;
use bot_logging::{bot_critical, bot_info};
use chrono::Utc;
use homework_core::{Config, ConfigError, PollState};
use homework_engine::{
    ClientSettings, Notifier, Poller, PollerHandle, ReqwestApiClient, TelegramClient,
};

fn main() -> ExitCode {
    settings::load_dotenv();

    let log = match settings::log_settings(settings::env_lookup) {
        Ok(log) => log,
        Err(err) => {
            eprintln!("Ошибка: {err}");
            return ExitCode::FAILURE;
        }
    };
    bot_logging::initialize(log.destination, log.level, &log.path);

    let config = match settings::load_config() {
        Ok(config) => config,
        Err(err) => {
            report_config_error(&err);
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            bot_critical!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn report_config_error(err: &ConfigError) {
    let (critical, stderr) = describe_config_error(err);
    for line in critical {
        bot_critical!("{}", line);
    }
    eprintln!("{stderr}");
}

/// Critical log lines and the stderr line for a fatal configuration error.
fn describe_config_error(err: &ConfigError) -> (Vec<String>, String) {
    match err {
        ConfigError::Missing { names } => (
            names
                .iter()
                .map(|name| format!("Отсутствует переменная окружения: \"{name}\""))
                .collect(),
            "Ошибка: Токены не прошли валидацию".to_string(),
        ),
        ConfigError::Invalid { .. } => (vec![err.to_string()], format!("Ошибка: {err}")),
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    bot_info!("Starting with {:?}", config);

    let client = ReqwestApiClient::new(ClientSettings::new(
        config.endpoint,
        config.practicum_token,
    ))
    .context("failed to build the review API client")?;
    let messenger = TelegramClient::new(config.telegram_api_base, config.telegram_token)
        .context("failed to build the Telegram client")?;
    let notifier = Notifier::new(Box::new(messenger), config.telegram_chat_id);
    let poller = Poller::new(Box::new(client), notifier);

    let handle = PollerHandle::spawn(poller, PollState::new(Utc::now().timestamp()))
        .context("failed to start the poller thread")?;
    bot_info!("Bot started");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build the signal runtime")?;
    runtime
        .block_on(tokio::signal::ctrl_c())
        .context("failed to listen for Ctrl-C")?;

    bot_info!("Shutdown requested");
    handle.stop();
    let state = handle
        .join()
        .context("poller thread panicked")?;
    bot_info!("Bot stopped at cursor {}", state.cursor());
    Ok(())
}
