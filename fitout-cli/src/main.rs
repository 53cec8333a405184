use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use fitout_core::calculations::{
    CeilingEstimator, CoveragePolicy, WallPanelConfig, WallPanelEstimator, WastePolicy,
};
use fitout_core::models::{
    CeilingExtras, CeilingPriceSheet, DesignStyle, FeatureArea, LedColor, PanelColor, PanelType,
    RoomDimensions, WallDimensions,
};

mod parse;
mod render;

/// Material and cost estimators for interior fit-out work.
#[derive(Parser, Debug)]
#[command(name = "fitout")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate materials for a suspended ceiling grid.
    Ceiling(CeilingArgs),
    /// Estimate materials and panel layout for a fluted feature wall.
    Wall(WallArgs),
}

#[derive(Args, Debug)]
struct CeilingArgs {
    /// Room length in feet
    #[arg(short, long)]
    length: Decimal,

    /// Room width in feet
    #[arg(short, long)]
    width: Decimal,

    /// Apply a 10% panel waste buffer
    #[arg(long, default_value_t = false)]
    waste_buffer: bool,

    /// JSON file with unit prices (missing entries default to 0)
    #[arg(long)]
    prices: Option<PathBuf>,

    /// JSON file with pass-through quantities (LED bulbs, rivets, ...)
    #[arg(long)]
    extras: Option<PathBuf>,

    /// Emit the result record as JSON instead of a text bill
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct WallArgs {
    /// Wall width in feet
    #[arg(short, long)]
    width: Decimal,

    /// Wall height in feet
    #[arg(long)]
    height: Decimal,

    /// Panel size: 6-inch or 1-ft
    #[arg(short, long, value_parser = parse::panel_type)]
    panel_type: PanelType,

    /// Price per panel
    #[arg(long, default_value_t = Decimal::ZERO)]
    panel_price: Decimal,

    /// Design style: solid, alternating, center-stage, gradient-flow or custom
    #[arg(short, long, default_value = "solid", value_parser = parse::design_style)]
    style: DesignStyle,

    /// Primary panel color
    #[arg(long, default_value = "teak", value_parser = parse::panel_color)]
    primary: PanelColor,

    /// Secondary panel color
    #[arg(long, default_value = "white-gold", value_parser = parse::panel_color)]
    secondary: PanelColor,

    /// Repeating segments for the custom style, e.g. 'black-gold:3,white-gold:2'
    #[arg(long)]
    pattern: Option<String>,

    /// Clips per panel (3 to 5)
    #[arg(long, default_value_t = 3)]
    clips_per_panel: u32,

    /// Price per clip (including screw and roll plug)
    #[arg(long, default_value_t = Decimal::ZERO)]
    clip_price: Decimal,

    /// LED strip length in feet
    #[arg(long, default_value_t = Decimal::ZERO)]
    led_feet: Decimal,

    /// LED strip price per meter
    #[arg(long, default_value_t = Decimal::ZERO)]
    led_price_per_meter: Decimal,

    /// LED color: warm-white or cool-white
    #[arg(long, value_parser = parse::led_color)]
    led_color: Option<LedColor>,

    /// Flat labor cost
    #[arg(long, default_value_t = Decimal::ZERO)]
    labor_cost: Decimal,

    /// JSON file describing the feature area (width, height, texture, blur, cost)
    #[arg(long)]
    feature_area: Option<PathBuf>,

    /// Stack rows of panels to cover walls taller than the 9.5 ft stock height
    #[arg(long, default_value_t = false)]
    multi_row: bool,

    /// Emit the result record as JSON instead of a text bill
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Ceiling(args) => run_ceiling(args),
        Command::Wall(args) => run_wall(args),
    }
}

fn run_ceiling(args: CeilingArgs) -> Result<()> {
    let prices: CeilingPriceSheet = match &args.prices {
        Some(path) => read_json(path).context("Failed to load price sheet")?,
        None => CeilingPriceSheet::default(),
    };
    let extras: CeilingExtras = match &args.extras {
        Some(path) => read_json(path).context("Failed to load extras")?,
        None => CeilingExtras::default(),
    };

    let policy = if args.waste_buffer {
        WastePolicy::TenPercent
    } else {
        WastePolicy::Exact
    };
    let estimator = CeilingEstimator::new(prices, policy);
    let room = RoomDimensions::new(args.length, args.width);

    match estimator.estimate(&room, &extras) {
        Some(estimate) if args.json => {
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        }
        Some(estimate) => print!("{}", render::ceiling(&estimate)),
        None => println!("{}", render::EMPTY_ESTIMATE),
    }
    Ok(())
}

fn run_wall(args: WallArgs) -> Result<()> {
    let custom_pattern = match &args.pattern {
        Some(spec) => parse::custom_pattern(spec)
            .with_context(|| format!("Failed to parse pattern '{spec}'"))?,
        None => Vec::new(),
    };
    let feature_area: Option<FeatureArea> = match &args.feature_area {
        Some(path) => Some(read_json(path).context("Failed to load feature area")?),
        None => None,
    };

    let config = WallPanelConfig {
        wall: WallDimensions::new(args.width, args.height),
        panel_type: args.panel_type,
        panel_price: args.panel_price,
        design_style: args.style,
        primary_color: args.primary,
        secondary_color: args.secondary,
        custom_pattern,
        clips_per_panel: args.clips_per_panel,
        clip_price: args.clip_price,
        led_strip_feet: args.led_feet,
        led_price_per_meter: args.led_price_per_meter,
        led_color: args.led_color,
        labor_cost: args.labor_cost,
        feature_area,
    };

    let policy = if args.multi_row {
        CoveragePolicy::MultiRow
    } else {
        CoveragePolicy::SingleRow
    };
    let estimator = WallPanelEstimator::new(policy);

    match estimator.estimate(&config) {
        Some(estimate) if args.json => {
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        }
        Some(estimate) => print!("{}", render::wall(&estimate)),
        None => println!("{}", render::EMPTY_ESTIMATE),
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))
}
