//! # 命令行接口
//!
//! `fra-atlas [--catalog <PATH>] [--verbose] [report|lookup|export]`
//!
//! 不带子命令时等同于 `report`。

use crate::catalog::ReferenceCatalog;
use crate::config::{self, CatalogFile, CATALOG_ENV};
use crate::report::{self, ReportFormat};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "fra-atlas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "FRA rights categories and district potential reference catalog")]
pub struct Cli {
    /// Load the catalog from a JSON file instead of the built-in data
    #[arg(long, global = true, env = CATALOG_ENV)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the categories and district classification
    Report {
        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Include category attributes and tier characteristics (text only)
        #[arg(long)]
        detailed: bool,
    },
    /// Show the potential tier of a district
    Lookup {
        /// District name (case-insensitive)
        district: String,
    },
    /// Print the catalog as an editable JSON catalog file
    Export,
}

impl Cli {
    /// 日志默认级别
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            crate::logging::DEFAULT_FILTER
        }
    }
}

/// 执行命令，输出写入 `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let catalog = config::load_catalog(cli.catalog.clone()).context("failed to load catalog")?;

    match &cli.command {
        None => write_report(&catalog, ReportFormat::Text, false, out),
        Some(Command::Report { format, detailed }) => write_report(&catalog, *format, *detailed, out),
        Some(Command::Lookup { district }) => write_lookup(&catalog, district, out),
        Some(Command::Export) => {
            let json = CatalogFile::from(&catalog)
                .to_json()
                .context("failed to serialize catalog")?;
            writeln!(out, "{}", json)?;
            Ok(())
        }
    }
}

fn write_report(
    catalog: &ReferenceCatalog,
    format: ReportFormat,
    detailed: bool,
    out: &mut impl Write,
) -> Result<()> {
    let rendered = report::render(catalog, format, detailed)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

fn write_lookup(catalog: &ReferenceCatalog, district: &str, out: &mut impl Write) -> Result<()> {
    let Some(tier) = catalog.tier_for_district(district) else {
        bail!("unknown district: {}", district.trim());
    };

    writeln!(out, "{}: {} ({})", district.trim(), tier.label(), tier.color)?;
    writeln!(out, "  CFR Potential: {}", tier.cfr_potential_percent)?;
    if !tier.characteristics.is_empty() {
        writeln!(out, "  Characteristics: {}", tier.characteristics)?;
    }
    Ok(())
}
