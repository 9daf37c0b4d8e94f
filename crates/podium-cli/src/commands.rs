use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::Utc;
use colored::Colorize;

use podium_protocol::MaskingCodec;
use podium_server::{PodiumServer, ServerConfig};
use podium_store::{FileScoreStore, ScoreStore, WriteMode};
use podium_types::{Category, RunTime, ScoreRecord};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli.config.as_deref(), cli.scores_file)?;
    let json = matches!(cli.format, OutputFormat::Json);
    match cli.command {
        Command::Serve(args) => cmd_serve(config, args),
        Command::Submit(args) => cmd_submit(&config, args, json),
        Command::Top(args) => cmd_top(&config, args, json),
        Command::Board(args) => cmd_board(&config, args, json),
        Command::Encode(args) => {
            println!("{}", codec_for(&config, args.prefix).obscure(&args.payload));
            Ok(())
        }
        Command::Decode(args) => {
            let codec = codec_for(&config, args.prefix);
            match codec.reveal(&args.payload) {
                Some(revealed) => {
                    println!("{revealed}");
                    Ok(())
                }
                None => bail!("payload is not a masked submission for prefix {:?}", codec.prefix()),
            }
        }
    }
}

fn resolve_config(path: Option<&Path>, scores_file: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(scores_file) = scores_file {
        config.store.path = scores_file;
    }
    tracing::debug!(path = %config.store.path.display(), mode = ?config.store.write_mode, "resolved config");
    Ok(config)
}

fn codec_for(config: &ServerConfig, prefix: Option<String>) -> MaskingCodec {
    MaskingCodec::new(prefix.unwrap_or_else(|| config.mask_prefix.clone()))
}

fn open_store(config: &ServerConfig) -> anyhow::Result<FileScoreStore> {
    FileScoreStore::open(config.store.clone())
        .with_context(|| format!("failed to open {}", config.store.path.display()))
}

fn cmd_serve(mut config: ServerConfig, args: ServeArgs) -> anyhow::Result<()> {
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.serialized {
        config.store.write_mode = WriteMode::Serialized;
    }
    println!(
        "{} Leaderboard on {} (file: {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.store.path.display()
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(PodiumServer::new(config).serve())?;
    Ok(())
}

fn cmd_submit(config: &ServerConfig, args: SubmitArgs, json: bool) -> anyhow::Result<()> {
    let category = Category::sanitize(&args.name);
    let time = RunTime::new(args.time)?;
    let record = ScoreRecord::new(category.clone(), time, Utc::now());
    let rank = open_store(config)?.append_and_retain(record)?;

    if json {
        println!("{}", serde_json::json!({ "success": true, "rank": rank }));
    } else {
        println!(
            "{} Recorded {} on {}, rank {}",
            "✓".green().bold(),
            time.to_string().cyan(),
            category.as_str().yellow(),
            format!("#{rank}").bold()
        );
    }
    Ok(())
}

fn cmd_top(config: &ServerConfig, args: TopArgs, json: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let records = match args.name.as_deref() {
        Some(name) => store.top_in_category(name, args.limit),
        None => store.top(args.limit),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        println!("No scores yet.");
    } else {
        for (i, record) in records.iter().enumerate() {
            println!("{}", format_row(i + 1, record, true));
        }
    }
    Ok(())
}

fn cmd_board(config: &ServerConfig, args: BoardArgs, json: bool) -> anyhow::Result<()> {
    let standings = open_store(config)?.standings(args.rows);

    if json {
        let board: BTreeMap<String, Vec<ScoreRecord>> = standings.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    if standings.is_empty() {
        println!("No scores yet.");
    }
    for (name, records) in &standings {
        println!("{}", name.bold().underline());
        for (i, record) in records.iter().enumerate() {
            println!("{}", format_row(i + 1, record, false));
        }
        println!();
    }
    Ok(())
}

/// One text line for a ranked record.
fn format_row(position: usize, record: &ScoreRecord, with_category: bool) -> String {
    let time = match record.time() {
        Some(t) => format!("{t:.2}s"),
        None => "-".to_string(),
    };
    let date: String = record.date().unwrap_or("").chars().take(10).collect();
    if with_category {
        format!(
            "{:>4}. {:>10}  {:<20}  {}",
            position,
            time,
            record.category(),
            date
        )
    } else {
        format!("{:>4}. {:>10}  {}", position, time, date)
    }
}
