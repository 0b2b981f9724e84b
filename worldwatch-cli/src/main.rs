use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod fetch;

const DEFAULT_URL: &str = "https://content.warframe.com/dynamic/worldState.php";

#[derive(Parser, Debug)]
#[command(name = "worldwatch", version, about = "Warframe world-state console monitor")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the world state and print the full report
    Report {
        /// Read a saved document instead of fetching the endpoint
        #[arg(long)]
        file: Option<PathBuf>,

        /// Endpoint override
        #[arg(long, default_value = DEFAULT_URL)]
        url: String,

        /// Directory holding the mapping tables (wfdata.json, node.json,
        /// ExportBounties.json, dict_zh.json)
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,

        /// IANA timezone for the report header
        #[arg(long, default_value = "Asia/Shanghai")]
        timezone: String,
    },

    /// Fetch the raw world-state JSON (for saving fixtures / offline use)
    Fetch {
        #[arg(long, default_value = DEFAULT_URL)]
        url: String,

        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report {
            file,
            url,
            data_dir,
            timezone,
        } => {
            run_report(file.as_deref(), &url, &data_dir, &timezone).await?;
        }

        Command::Fetch { url, out } => {
            let body = fetch::fetch_world_state(&url).await?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &body)
                        .with_context(|| format!("write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{body}"),
            }
        }
    }

    Ok(())
}

async fn run_report(file: Option<&Path>, url: &str, data_dir: &Path, timezone: &str) -> Result<()> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {timezone}"))?;

    let body = match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        None => {
            println!("🔄正在获取实时数据...");
            fetch::fetch_world_state(url).await?
        }
    };
    let doc = worldwatch_ingest::decode_world_state(&body)?;

    let (store, warnings) = worldwatch_core::load_store(data_dir);
    for warning in &warnings {
        println!("{warning}");
    }

    let now = Utc::now();
    println!();
    println!("{}", "=".repeat(20));
    println!("🎮WARFRAME 实时数据监控");
    println!("{}", "=".repeat(20));
    println!(
        "📅更新时间: {}",
        now.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", "-".repeat(20));

    println!("{}", worldwatch_core::render(&doc, &store, now));

    println!("{}", "=".repeat(20));
    println!("✅数据获取完成！");
    Ok(())
}
