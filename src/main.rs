//! mhflop CLI - companion for the MHFL federated learning platform

use clap::Parser;

mod cli;
mod client;
mod config;
mod credentials;
mod error;
mod notify;
mod output;
mod prefs;

use cli::{AccountCommands, AlgorithmCommands, Cli, Commands, DatasetCommands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    // Preferences are read once at startup, before any command runs
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path.into())?,
        None => Config::load()?,
    };
    prefs::init(&config);

    match cli.command {
        Commands::Login {
            username,
            password,
            captcha_code,
            remember,
        } => cli::auth::login(username, password, captcha_code, remember).await,
        Commands::Logout => cli::auth::logout().await,
        Commands::Register => cli::auth::register().await,
        Commands::Reset => cli::auth::reset().await,
        Commands::Status => cli::status::run(cli.config.as_deref()),
        Commands::Version => {
            println!("mhflop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Account(account_cmd) => match account_cmd {
            AccountCommands::Info => cli::account::info(cli.format).await,
            AccountCommands::Update {
                username,
                gender,
                telephone,
                birthday,
            } => cli::account::update(username, gender, telephone, birthday).await,
            AccountCommands::Avatar { path } => cli::account::avatar(path).await,
            AccountCommands::List { filters } => {
                cli::account::list(cli.format, &filters, &config).await
            }
            AccountCommands::Create {
                username,
                email,
                telephone,
            } => cli::account::create(username, email, telephone).await,
            AccountCommands::Delete { id } => cli::account::delete(id).await,
        },
        Commands::Algorithm(algorithm_cmd) => match algorithm_cmd {
            AlgorithmCommands::List { filters } => {
                cli::algorithm::list(cli.format, &filters, &config).await
            }
            AlgorithmCommands::Create { name } => cli::algorithm::create(name).await,
            AlgorithmCommands::Update { id, name } => cli::algorithm::update(id, name).await,
            AlgorithmCommands::Delete { id } => cli::algorithm::delete(id).await,
        },
        Commands::Dataset(dataset_cmd) => match dataset_cmd {
            DatasetCommands::List { filters } => {
                cli::dataset::list(cli.format, &filters, &config).await
            }
            DatasetCommands::Create { name } => cli::dataset::create(name).await,
            DatasetCommands::Update { id, name } => cli::dataset::update(id, name).await,
            DatasetCommands::Delete { id } => cli::dataset::delete(id).await,
        },
        Commands::Resources => cli::resources::run(cli.format).await,
        Commands::Theme { mode } => cli::preference::theme(mode, cli.config.as_deref()),
        Commands::Locale { locale } => cli::preference::locale(locale, cli.config.as_deref()),
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
