use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use redshift::cfg::{AREA_EPS, DEFAULT_EPS, LINE_DET_EPS, VEC_EQ_EPS, WELD_EPS};
use redshift::GeomCfg;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod level;
mod provenance;

use level::LevelFile;
use provenance::Sidecar;

#[derive(Parser)]
#[command(name = "redshift")]
#[command(version, about = "Stitch and triangulate sector levels")]
struct Cmd {
    /// Squared distance under which two edge endpoints count as the same point
    #[arg(long, global = true, default_value_t = WELD_EPS)]
    weld_eps: f64,

    /// Turn determinant under which a corner counts as collinear
    #[arg(long, global = true, default_value_t = AREA_EPS)]
    area_eps: f64,

    /// Log at DEBUG instead of INFO
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute sector adjacency; write neighbor tables and wall spans
    Stitch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write floor and ceiling index buffers per sector
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the kernel version and default tolerances
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    let cfg = GeomCfg {
        eps_area: cmd.area_eps,
        eps_weld: cmd.weld_eps,
    };
    match cmd.action {
        Action::Stitch { input, out } => stitch(&input, &out, cfg),
        Action::Triangulate { input, out } => triangulate(&input, &out, cfg),
        Action::Report => report(),
    }
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

fn params(input: &Path, cfg: GeomCfg) -> serde_json::Value {
    serde_json::json!({
        "input": input.to_string_lossy(),
        "weld_eps": cfg.eps_weld,
        "area_eps": cfg.eps_area,
    })
}

fn stitch(input: &Path, out: &Path, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "stitch");
    let mut map = LevelFile::load(input)?.to_map(cfg)?;
    let report = level::stitch(&mut map)?;
    tracing::info!(sectors = report.sectors.len(), portals = report.portals, "stitched");
    write_json(out, &report)?;
    provenance::write_sidecar(
        out,
        Sidecar {
            command: "stitch",
            params: params(input, cfg),
        },
    )?;
    Ok(())
}

fn triangulate(input: &Path, out: &Path, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "triangulate");
    let map = LevelFile::load(input)?.to_map(cfg)?;
    let meshes = level::triangulate(&map)?;
    let triangles: usize = meshes.iter().map(|m| m.floor.len() / 3).sum();
    tracing::info!(sectors = meshes.len(), floor_triangles = triangles, "triangulated");
    write_json(out, &meshes)?;
    provenance::write_sidecar(
        out,
        Sidecar {
            command: "triangulate",
            params: params(input, cfg),
        },
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "kernel_version": redshift::VERSION,
        "code_rev": provenance::current_git_rev(),
        "tolerances": {
            "vec_eq_eps": VEC_EQ_EPS,
            "line_det_eps": LINE_DET_EPS,
            "default_eps": DEFAULT_EPS,
            "area_eps": AREA_EPS,
            "weld_eps": WELD_EPS,
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
