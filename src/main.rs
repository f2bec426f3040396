use aiven_client::aiven::auth::{Credentials, ENV_EMAIL, ENV_OTP, ENV_PASSWORD};
use aiven_client::config::{CommandOptions, Config};
use aiven_client::kafka::types::{
    CLEANUP_POLICY_DELETE, DEFAULT_PARTITIONS, DEFAULT_REPLICATION, DEFAULT_RETENTION_HOURS,
};
use aiven_client::kafka::{CreateTopicRequest, ListTopicsRequest, TopicRef};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Version injected at compile time via AIVEN_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("AIVEN_VERSION") {
    Some(v) => v,
    None => "dev",
};

/// Console interface to Aiven
#[derive(Parser, Debug)]
#[command(name = "aiven", version = VERSION, about, long_about = None)]
struct Args {
    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    /// Seconds each API call may take after authentication
    #[arg(long, default_value_t = 10, global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Kafka related commands
    #[command(subcommand)]
    Kafka(KafkaCommand),
}

#[derive(Subcommand, Debug)]
enum KafkaCommand {
    /// List kafka topics
    ListTopics {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Create kafka topic
    CreateTopic {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        topic: TopicArgs,
    },
    /// Delete kafka topic
    DeleteTopic {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        name: NameArg,
    },
    /// Show kafka topic metadata
    TopicInfo {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        name: NameArg,
    },
}

/// Credentials and the service to operate on
#[derive(clap::Args, Debug)]
struct TargetArgs {
    /// Aiven email
    #[arg(long, env = ENV_EMAIL, default_value = "")]
    email: String,

    /// Aiven password
    #[arg(long, env = ENV_PASSWORD, default_value = "", hide_env_values = true, hide_default_value = true)]
    password: String,

    /// Aiven one time password (otp)
    #[arg(long, env = ENV_OTP, default_value = "", hide_env_values = true, hide_default_value = true)]
    otp: String,

    /// Aiven project
    #[arg(long, env = "AIVEN_PROJECT")]
    project: Option<String>,

    /// Aiven service
    #[arg(long, env = "AIVEN_SERVICE")]
    service: Option<String>,
}

#[derive(clap::Args, Debug)]
struct NameArg {
    /// Name of topic
    #[arg(long, env = "TOPIC_NAME")]
    name: String,
}

#[derive(clap::Args, Debug)]
struct TopicArgs {
    #[command(flatten)]
    name: NameArg,

    /// Cleanup policy
    #[arg(long, env = "TOPIC_CLEANUP_POLICY", default_value = CLEANUP_POLICY_DELETE)]
    cleanup_policy: String,

    /// Partitions
    #[arg(long, env = "TOPIC_PARTITIONS", default_value_t = DEFAULT_PARTITIONS)]
    partitions: i32,

    /// Replication factor
    #[arg(long, env = "TOPIC_REPLICATION", default_value_t = DEFAULT_REPLICATION)]
    replication: i32,

    /// Hours to retain content
    #[arg(long, env = "TOPIC_RETENTION_HOURS", default_value_t = DEFAULT_RETENTION_HOURS)]
    retention_hours: i32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    let file = match open_log_file(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, {:#}", e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("aiven started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn open_log_file(path: &Path) -> Result<File> {
    let dir_error = path
        .parent()
        .and_then(|parent| std::fs::create_dir_all(parent).err());

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| match dir_error {
            Some(dir_err) => anyhow!(
                "unable to open {:?}: {} (creating directory failed: {})",
                path,
                e,
                dir_err
            ),
            None => anyhow!("unable to open {:?}: {}", path, e),
        })
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("aiven").join("aiven.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".aiven").join("aiven.log");
    }
    PathBuf::from("aiven.log")
}

fn resolve(target: &TargetArgs, config: &Config, timeout: Duration) -> Result<CommandOptions> {
    Ok(CommandOptions {
        credentials: Credentials::new(&target.email, &target.password).with_otp(&target.otp),
        project: config.effective_project(target.project.as_deref())?,
        service: config.effective_service(target.service.as_deref())?,
        endpoints: config.endpoints()?,
        timeout,
    })
}

async fn run(command: KafkaCommand, config: &Config, timeout: Duration) -> Result<Option<Value>> {
    match command {
        KafkaCommand::ListTopics { target } => {
            let opts = resolve(&target, config, timeout)?;
            let client = opts.connect().await?;
            let topics = client
                .kafka()
                .list_topics(&ListTopicsRequest::new(&opts.project, &opts.service))
                .await?;
            Ok(Some(serde_json::to_value(topics)?))
        }
        KafkaCommand::CreateTopic { target, topic } => {
            let opts = resolve(&target, config, timeout)?;
            let client = opts.connect().await?;
            let request = CreateTopicRequest {
                cleanup_policy: topic.cleanup_policy,
                partitions: topic.partitions,
                replication: topic.replication,
                retention_hours: topic.retention_hours,
                ..CreateTopicRequest::new(&opts.project, &opts.service, &topic.name.name)
            };
            client.kafka().create_topic(&request).await?;
            Ok(None)
        }
        KafkaCommand::DeleteTopic { target, name } => {
            let opts = resolve(&target, config, timeout)?;
            let client = opts.connect().await?;
            client
                .kafka()
                .delete_topic(&TopicRef::new(&opts.project, &opts.service, &name.name))
                .await?;
            Ok(None)
        }
        KafkaCommand::TopicInfo { target, name } => {
            let opts = resolve(&target, config, timeout)?;
            let client = opts.connect().await?;
            let info = client
                .kafka()
                .topic_info(&TopicRef::new(&opts.project, &opts.service, &name.name))
                .await?;
            Ok(Some(serde_json::to_value(info)?))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let config = Config::load();
    let timeout = Duration::from_secs(args.timeout);

    let result = match args.command {
        Command::Kafka(command) => run(command, &config, timeout).await,
    };

    let output = result.and_then(|out| match out {
        Some(value) => Ok(Some(serde_json::to_string_pretty(&value)?)),
        None => Ok(None),
    });

    match output {
        Ok(Some(text)) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
