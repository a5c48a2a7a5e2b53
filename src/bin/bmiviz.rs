use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use bmiviz::{
    AnimateOpts, BandTable, Canvas, ChartLayout, Classification, Classifier, FRAME_COUNT,
    FrameSeq, Measurement, RenderSettings, TermSurface, animate, rasterize,
};

#[derive(Parser, Debug)]
#[command(name = "bmiviz", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a measurement and print the result (no animation).
    Classify(ClassifyArgs),
    /// Animate the BMI chart in the terminal.
    Chart(ChartArgs),
    /// Render the finished chart as a PNG.
    Png(PngArgs),
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Weight in kilograms.
    #[arg(long)]
    weight: f64,

    /// Height in centimeters.
    #[arg(long)]
    height: f64,

    /// Emit the classification as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ChartArgs {
    /// Weight in kilograms (prompted when omitted).
    #[arg(long)]
    weight: Option<f64>,

    /// Height in centimeters (prompted when omitted).
    #[arg(long)]
    height: Option<f64>,

    /// Delay between animation frames, in milliseconds.
    #[arg(long, default_value_t = 20)]
    delay_ms: u64,

    /// Chart width in terminal cells.
    #[arg(long, default_value_t = 70)]
    columns: u16,
}

#[derive(Parser, Debug)]
struct PngArgs {
    /// Weight in kilograms.
    #[arg(long)]
    weight: f64,

    /// Height in centimeters.
    #[arg(long)]
    height: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 700)]
    canvas_width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 140)]
    canvas_height: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Classify(args) => cmd_classify(args),
        Command::Chart(args) => cmd_chart(args),
        Command::Png(args) => cmd_png(args),
    }
}

fn classify(table: &BandTable, weight: f64, height: f64) -> anyhow::Result<Classification> {
    let measurement = Measurement::new(weight, height)?;
    Ok(Classifier::classify(table, measurement.bmi())?)
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let table = BandTable::standard();
    let classification = classify(&table, args.weight, args.height)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        println!("Your BMI is: {:.2}", classification.bmi);
        println!(
            "Category: {} [{}, {})",
            classification.category, classification.lower, classification.upper
        );
    }
    Ok(())
}

fn cmd_chart(args: ChartArgs) -> anyhow::Result<()> {
    let (weight, height) = resolve_measurement(args.weight, args.height)?;

    let table = BandTable::standard();
    let classification = classify(&table, weight, height)?;

    println!("Your BMI is: {:.2}", classification.bmi);
    println!("Category: {}", classification.category);

    let layout = ChartLayout::new(table, classification);
    let settings = RenderSettings {
        columns: args.columns,
    };
    let mut surface = TermSurface::stdout(&settings);
    let opts = AnimateOpts {
        frame_delay: Duration::from_millis(args.delay_ms),
    };
    animate(&layout, &mut surface, &opts)?;
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let table = BandTable::standard();
    let classification = classify(&table, args.weight, args.height)?;
    let layout = ChartLayout::new(table, classification);

    let frames = FrameSeq::for_classification(&layout.classification);
    let last = frames.frame_at(FRAME_COUNT - 1);
    let canvas = Canvas {
        width: args.canvas_width,
        height: args.canvas_height,
    };
    let frame = rasterize(&layout, &last, canvas)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// The two numeric input fields: flags when given, interactive prompts
/// otherwise.
fn resolve_measurement(weight: Option<f64>, height: Option<f64>) -> anyhow::Result<(f64, f64)> {
    let weight = match weight {
        Some(w) => w,
        None => dialoguer::Input::<f64>::new()
            .with_prompt("Enter your weight (kg)")
            .interact_text()
            .context("read weight")?,
    };
    let height = match height {
        Some(h) => h,
        None => dialoguer::Input::<f64>::new()
            .with_prompt("Enter your height (cm)")
            .interact_text()
            .context("read height")?,
    };
    Ok((weight, height))
}
