use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use culturedcli::{Res, cli, config::AppPaths, danger, logger::Logger, types::Site};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Select posts or creator pages to download
    Download(DownloadOptions),

    /// Show or change the configuration
    Config(ConfigOptions),

    /// Handle saved cookies
    Cookies(CookiesOptions),

    /// Check for an active internet connection
    Check,

    /// Handle log files
    Logs(LogsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOptions {
    /// Website to download from
    #[clap(value_enum)]
    pub site: Site,

    /// Download from creator pages instead of single posts
    #[clap(long)]
    pub creator: bool,

    /// Never download Google Drive links
    #[clap(long)]
    pub block_gdrive: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigOptions {
    /// Subcommands under `config`; prints the config when omitted
    #[command(subcommand)]
    pub command: Option<ConfigSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Print the current configuration
    Show,

    /// Change the download directory
    DownloadDir,
}

#[derive(Parser, Debug, Clone)]
pub struct CookiesOptions {
    #[command(subcommand)]
    pub command: CookiesSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CookiesSubcommand {
    /// Delete the saved cookies of a website
    Delete {
        #[clap(value_enum)]
        site: Site,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct LogsOptions {
    #[command(subcommand)]
    pub command: LogsSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LogsSubcommand {
    /// Print the location of the current log file
    Path,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

async fn run(command: Command, paths: &AppPaths, logger: &Logger) -> Res<()> {
    match command {
        Command::Download(opt) => {
            cli::download(paths, opt.site, opt.creator, opt.block_gdrive).await
        }
        Command::Config(opt) => match opt.command {
            Some(ConfigSubcommand::DownloadDir) => cli::change_download_directory(paths).await,
            Some(ConfigSubcommand::Show) | None => cli::show_config(paths).await,
        },
        Command::Cookies(opt) => match opt.command {
            CookiesSubcommand::Delete { site } => cli::delete_cookies(paths, site).await,
        },
        Command::Check => cli::check().await,
        Command::Logs(opt) => match opt.command {
            LogsSubcommand::Path => cli::show_log_path(logger),
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let paths = AppPaths::new();

    let logger = match Logger::init(&paths, env!("CARGO_PKG_VERSION")) {
        Ok(logger) => logger,
        Err(e) => {
            danger!("Cannot initialize logging. Err: {}", e);
            std::process::exit(1);
        }
    };
    logger.install_panic_hook();

    match logger.prune_old_logs().await {
        Ok(removed) => tracing::debug!("pruned {} old log file(s)", removed),
        Err(e) => tracing::warn!("cannot prune old logs: {}", e),
    }

    match run(cli.command, &paths, &logger).await {
        Ok(()) => logger.shutdown(),
        Err(e) => logger.report_fatal(e.as_ref()),
    }
}
