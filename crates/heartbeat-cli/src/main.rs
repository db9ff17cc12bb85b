use anyhow::Context;
use clap::Parser;
use heartbeat_core::{Command, CommandStatus, Reporter, ReporterBuilder, ReporterConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// 1 件の command record を設定された配送先に報告する
#[derive(Debug, Parser)]
#[command(name = "heartbeat", version, about = "Report a usage heartbeat for one command invocation")]
struct Cli {
    /// 実行されたコマンド名（例: up）
    command: String,

    #[arg(long, default_value = "success")]
    status: CommandStatus,

    #[arg(long)]
    context: Option<String>,

    #[arg(long)]
    source: Option<String>,

    /// TOML 設定ファイル（フラグはこの上に重ねる）
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// stdout に JSON Lines を書く
    #[arg(long)]
    stdout: bool,

    /// JSON Lines を追記するファイル
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// http://localhost/usage に POST する
    #[arg(long)]
    http: bool,

    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,
}

impl Cli {
    fn record(&self) -> Command {
        let mut cmd = Command::new(self.command.clone(), self.status);
        cmd.context = self.context.clone();
        cmd.source = self.source.clone();
        cmd
    }

    /// 設定ファイルを読み、フラグで上書きした builder を返す
    fn builder(&self) -> anyhow::Result<ReporterBuilder> {
        let config = match &self.config {
            Some(path) => ReporterConfig::load(path)?,
            None => ReporterConfig::default(),
        };

        let mut builder = ReporterBuilder::from_config(config);
        if self.stdout {
            builder = builder.stdout(true);
        }
        if self.http {
            builder = builder.http(true);
        }
        if let Some(path) = &self.file {
            builder = builder.file(path);
        }
        if let Some(ms) = self.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        Ok(builder)
    }
}

fn init_tracing() {
    // stdout は JSON Lines 専用なのでログは stderr に出す
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let builder = cli.builder()?;
    if builder.config().is_disabled() {
        tracing::info!("no heartbeat destination enabled");
    }
    let reporter = builder.build().await.context("building heartbeat reporter")?;

    let record = cli.record();
    tracing::debug!(command = %record.command, status = %record.status, "reporting heartbeat");
    reporter.heartbeat(&record).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("heartbeat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn record_from_args() {
        let cli = parse(&["up", "--status", "failure", "--context", "prod"]);
        let record = cli.record();
        assert_eq!(record.command, "up");
        assert_eq!(record.status, CommandStatus::Failure);
        assert_eq!(record.context.as_deref(), Some("prod"));
        assert_eq!(record.source, None);
    }

    #[test]
    fn status_defaults_to_success() {
        assert_eq!(parse(&["ps"]).status, CommandStatus::Success);
    }

    #[test]
    fn invalid_status_is_rejected() {
        let result = Cli::try_parse_from(["heartbeat", "up", "--status", "exploded"]);
        assert!(result.is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "http = true\nfile = \"from-config.jsonl\"\ntimeout_ms = 100").unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let cli = parse(&[
            "up",
            "--config",
            &config_path,
            "--stdout",
            "--file",
            "from-flag.jsonl",
            "--timeout-ms",
            "300",
        ]);
        let builder = cli.builder().unwrap();
        let config = builder.config();

        assert!(config.http);
        assert!(config.stdout);
        assert_eq!(config.file, Some(PathBuf::from("from-flag.jsonl")));
        assert_eq!(config.timeout_ms, 300);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let cli = parse(&["up", "--config", missing.to_str().unwrap()]);
        assert!(cli.builder().is_err());
    }
}
