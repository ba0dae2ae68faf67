use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use waterfall_packer_core::{
    EdgeInsets, LayoutConfig, PackingResult, pack, to_json_columns, to_json_items,
};

#[derive(Parser, Debug)]
#[command(
    name = "waterfall-packer",
    about = "Pack aspect-ratio feeds into a waterfall grid layout",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a ratio feed from a file into placements
    Pack(PackArgs),
    /// Generate a random demo feed and pack it
    Demo(DemoArgs),
    /// Simple timing bench (packs once, prints time + occupancy)
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    // Input/Output
    /// Input ratios file: JSON array of numbers, or one ratio per line
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output JSON file (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// YAML config file path (overrides layout options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Layout
    /// Column count
    #[arg(long, default_value_t = 2, help_heading = "Layout")]
    columns: usize,
    /// Gap between items
    #[arg(long, default_value_t = 0.0, help_heading = "Layout")]
    spacing: f32,
    /// Viewport width placements are computed against
    #[arg(long, default_value_t = 375.0, help_heading = "Layout")]
    viewport_width: f32,
    /// Top inset
    #[arg(long, default_value_t = 0.0, help_heading = "Layout")]
    inset_top: f32,
    /// Left inset
    #[arg(long, default_value_t = 0.0, help_heading = "Layout")]
    inset_left: f32,
    /// Bottom inset
    #[arg(long, default_value_t = 0.0, help_heading = "Layout")]
    inset_bottom: f32,
    /// Right inset
    #[arg(long, default_value_t = 0.0, help_heading = "Layout")]
    inset_right: f32,

    // Export
    /// Placement format: items | columns
    #[arg(long, default_value = "items", value_parser = ["items", "columns"], help_heading = "Export")]
    format: String,
    /// Export layout stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
}

#[derive(Parser, Debug, Clone)]
struct DemoArgs {
    /// Number of items in the generated feed
    #[arg(long, default_value_t = 20, help_heading = "Feed")]
    count: usize,
    /// RNG seed for a reproducible feed
    #[arg(long, help_heading = "Feed")]
    seed: Option<u64>,
    /// Candidate aspect ratios the feed is drawn from
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.5, 0.3, 1.5, 0.7], help_heading = "Feed")]
    ratios: Vec<f32>,

    // Layout
    /// Column count
    #[arg(long, default_value_t = 2, help_heading = "Layout")]
    columns: usize,
    /// Gap between items
    #[arg(long, default_value_t = 10.0, help_heading = "Layout")]
    spacing: f32,
    /// Viewport width placements are computed against
    #[arg(long, default_value_t = 340.0, help_heading = "Layout")]
    viewport_width: f32,
    /// Top inset
    #[arg(long, default_value_t = 6.0, help_heading = "Layout")]
    inset_top: f32,
    /// Left inset
    #[arg(long, default_value_t = 20.0, help_heading = "Layout")]
    inset_left: f32,
    /// Bottom inset
    #[arg(long, default_value_t = 0.0, help_heading = "Layout")]
    inset_bottom: f32,
    /// Right inset
    #[arg(long, default_value_t = 20.0, help_heading = "Layout")]
    inset_right: f32,

    /// Output JSON file (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of generated items
    #[arg(long, default_value_t = 10_000)]
    count: usize,
    /// Column count
    #[arg(long, default_value_t = 4)]
    columns: usize,
    /// Viewport width
    #[arg(long, default_value_t = 1024.0)]
    viewport_width: f32,
    /// RNG seed for the generated feed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Demo(args) => run_demo(args),
        Commands::Bench(args) => run_bench(args),
    }
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let mut cfg = LayoutConfig {
        columns: args.columns,
        insets: EdgeInsets::new(
            args.inset_top,
            args.inset_left,
            args.inset_bottom,
            args.inset_right,
        ),
        spacing: args.spacing,
        viewport_width: args.viewport_width,
    };
    // Config file overrides flags en bloc
    if let Some(path) = &args.config {
        let file =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)?;
        cfg = y.into_layout_config(cfg);
    }

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    let ratios = load_ratios(&args.input)?;
    info!(count = ratios.len(), "loaded ratio feed");

    let result = pack(cfg, &ratios)?;
    write_result(&result, &args.format, args.out.as_deref())?;

    if let Some(stats_path) = &args.export_stats {
        let stats = result.stats();
        fs::write(stats_path, serde_json::to_string_pretty(&stats)?)
            .with_context(|| format!("write {}", stats_path.display()))?;
        info!(?stats_path, "stats exported");
    }
    Ok(())
}

fn run_demo(args: &DemoArgs) -> anyhow::Result<()> {
    use rand::{Rng, SeedableRng};

    anyhow::ensure!(!args.ratios.is_empty(), "ratio candidate list is empty");
    let mut rng = match args.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };
    let feed: Vec<f32> = (0..args.count)
        .map(|_| args.ratios[rng.gen_range(0..args.ratios.len())])
        .collect();
    // mid-gray placeholder fill per cell
    let fills: Vec<f32> = (0..args.count)
        .map(|_| rng.gen_range(30..=70) as f32 / 100.0)
        .collect();

    let cfg = LayoutConfig {
        columns: args.columns,
        insets: EdgeInsets::new(
            args.inset_top,
            args.inset_left,
            args.inset_bottom,
            args.inset_right,
        ),
        spacing: args.spacing,
        viewport_width: args.viewport_width,
    };
    let result = pack(cfg, &feed)?;
    info!(
        items = result.placements.len(),
        content_height = result.content_size.height,
        "demo feed packed"
    );

    let mut value = to_json_items(&result);
    if let Some(items) = value["items"].as_array_mut() {
        for (item, (ratio, fill)) in items.iter_mut().zip(feed.iter().zip(fills.iter())) {
            item["aspectRatio"] = json!(ratio);
            item["gray"] = json!(fill);
        }
    }

    let text = serde_json::to_string_pretty(&value)?;
    match &args.out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            info!(?path, "demo feed written");
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn run_bench(args: &BenchArgs) -> anyhow::Result<()> {
    use rand::{Rng, SeedableRng};

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let ratios: Vec<f32> = (0..args.count).map(|_| rng.gen_range(0.2..=2.0)).collect();
    let cfg = LayoutConfig {
        columns: args.columns,
        insets: EdgeInsets::ZERO,
        spacing: 8.0,
        viewport_width: args.viewport_width,
    };

    let start = Instant::now();
    let result = pack(cfg, &ratios)?;
    let dur = start.elapsed();

    let stats = result.stats();
    println!(
        "items={} columns={} content_height={:.1} occupancy={:.2}% time={}",
        stats.num_items,
        stats.num_columns,
        stats.content_height,
        stats.occupancy * 100.0,
        fmt_dur(dur)
    );
    Ok(())
}

fn write_result(result: &PackingResult, format: &str, out: Option<&Path>) -> anyhow::Result<()> {
    let value = match format {
        "columns" => to_json_columns(result),
        _ => to_json_items(result),
    };
    let json = serde_json::to_string_pretty(&value)?;
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(?path, items = result.placements.len(), "placements written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn load_ratios(path: &Path) -> anyhow::Result<Vec<f32>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    if text.trim_start().starts_with('[') {
        let ratios: Vec<f32> = serde_json::from_str(&text)
            .with_context(|| format!("parse JSON ratio array from {}", path.display()))?;
        return Ok(ratios);
    }
    let mut ratios = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let v: f32 = line.parse().with_context(|| {
            format!("{}:{}: not a number: {:?}", path.display(), lineno + 1, line)
        })?;
        ratios.push(v);
    }
    Ok(ratios)
}

fn fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

/// Layout options loaded from a YAML file; set fields override CLI flags.
#[derive(Debug, Deserialize)]
struct YamlConfig {
    columns: Option<usize>,
    spacing: Option<f32>,
    viewport_width: Option<f32>,
    inset_top: Option<f32>,
    inset_left: Option<f32>,
    inset_bottom: Option<f32>,
    inset_right: Option<f32>,
}

impl YamlConfig {
    fn into_layout_config(self, mut cfg: LayoutConfig) -> LayoutConfig {
        if let Some(v) = self.columns {
            cfg.columns = v;
        }
        if let Some(v) = self.spacing {
            cfg.spacing = v;
        }
        if let Some(v) = self.viewport_width {
            cfg.viewport_width = v;
        }
        if let Some(v) = self.inset_top {
            cfg.insets.top = v;
        }
        if let Some(v) = self.inset_left {
            cfg.insets.left = v;
        }
        if let Some(v) = self.inset_bottom {
            cfg.insets.bottom = v;
        }
        if let Some(v) = self.inset_right {
            cfg.insets.right = v;
        }
        cfg
    }
}
