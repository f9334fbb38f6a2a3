use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use data_runtime::configs::combat::CombatCfg;
use data_runtime::configs::telemetry::TelemetryCfg;
use data_runtime::configs::world_gen::WorldGenCfg;
use data_runtime::item::ItemDef;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(author, version, about = "Workspace automation tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// fmt + clippy -D warnings + tests + schema check (workspace)
    Ci,
    /// Validate everything under data/ against the serde models
    SchemaCheck,
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("spawn")?;
    if !status.success() {
        bail!("command failed: {cmd:?}");
    }
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    let mut c = Command::new("cargo");
    c.args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    run(&mut c)
}

fn ci() -> Result<()> {
    cargo(&["fmt", "--all"])?;
    cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;
    cargo(&["test", "--workspace"])?;
    schema_check()?;
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn schema_check() -> Result<()> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    let data = root.join("data");
    if !data.is_dir() {
        println!("xtask: no data/ directory; nothing to check");
        return Ok(());
    }
    let mut checked = 0usize;
    for entry in walkdir::WalkDir::new(&data)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        match name {
            "combat.toml" => {
                toml::from_str::<CombatCfg>(&read(path)?)
                    .with_context(|| format!("validate {}", path.display()))?;
                checked += 1;
            }
            "world_gen.toml" => {
                let cfg: WorldGenCfg = toml::from_str(&read(path)?)
                    .with_context(|| format!("validate {}", path.display()))?;
                if cfg.visible_chunks() % 2 == 0 {
                    bail!("{}: visible_chunks must be odd", path.display());
                }
                if cfg.silver_weight() + cfg.bronze_weight() > 1.0 {
                    bail!("{}: tier weights exceed 1.0", path.display());
                }
                checked += 1;
            }
            "telemetry.toml" => {
                toml::from_str::<TelemetryCfg>(&read(path)?)
                    .with_context(|| format!("validate {}", path.display()))?;
                checked += 1;
            }
            "catalog.json" => {
                let defs: Vec<ItemDef> = serde_json::from_str(&read(path)?)
                    .with_context(|| format!("validate {}", path.display()))?;
                let mut seen = HashSet::new();
                for d in &defs {
                    if d.id.is_empty() {
                        bail!("{}: item with empty id", path.display());
                    }
                    if !seen.insert(d.id.as_str()) {
                        bail!("{}: duplicate item id {}", path.display(), d.id);
                    }
                }
                checked += 1;
            }
            _ => {}
        }
    }
    println!("xtask: data validated ({checked} files)");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Ci => ci(),
        Cmd::SchemaCheck => schema_check(),
    }
}
