use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stave", version, about = "Lay out and render one measure of staff notation")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the measure as an SVG document.
    Svg(OutArgs),
    /// Render the measure as a PNG image.
    Png(OutArgs),
    /// Print the computed layout as JSON.
    Json(JsonArgs),
}

#[derive(Args, Debug)]
struct MeasureArgs {
    /// Input measure document (JSON). Flags below override its values.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Time signature, e.g. `3/4`.
    #[arg(long)]
    time: Option<stave::TimeSignature>,

    /// Notes, comma separated: `whole`/`w`, `half`/`h`, `quarter`/`q`.
    #[arg(long)]
    notes: Option<String>,

    /// Ink color as `#rrggbb`, `#rrggbbaa`, `white` or `black`.
    #[arg(long)]
    color: Option<stave::Rgba8>,

    /// Pixels per staff unit.
    #[arg(long)]
    scale: Option<f64>,
}

#[derive(Args, Debug)]
struct OutArgs {
    #[command(flatten)]
    measure: MeasureArgs,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct JsonArgs {
    #[command(flatten)]
    measure: MeasureArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
        Command::Json(args) => cmd_json(args),
    }
}

fn load_document(args: &MeasureArgs) -> anyhow::Result<stave::MeasureDocument> {
    let mut doc = match &args.in_path {
        Some(path) => stave::MeasureDocument::from_path(path)
            .with_context(|| format!("load measure document '{}'", path.display()))?,
        None => stave::MeasureDocument::default(),
    };
    if let Some(ts) = args.time {
        doc.time_signature = ts;
    }
    if let Some(notes) = &args.notes {
        doc.notes = stave::NoteKind::parse_list(notes).context("parse --notes")?;
    }
    if let Some(color) = args.color {
        doc.color = Some(color);
    }
    if let Some(scale) = args.scale {
        doc.render.scale = scale;
    }
    Ok(doc)
}

fn build_svg(args: &MeasureArgs) -> anyhow::Result<String> {
    let doc = load_document(args)?;
    let measure = doc.build().context("lay out measure")?;
    Ok(measure.to_svg(&doc.render)?)
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_svg(args: OutArgs) -> anyhow::Result<()> {
    let svg = build_svg(&args.measure)?;
    write_text(&args.out, &svg)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_png(args: OutArgs) -> anyhow::Result<()> {
    let svg = build_svg(&args.measure)?;
    let image = stave::rasterize_svg(&svg)?;
    stave::write_png(&image, &args.out)?;
    eprintln!("wrote {} ({}x{})", args.out.display(), image.width, image.height);
    Ok(())
}

fn cmd_json(args: JsonArgs) -> anyhow::Result<()> {
    let doc = load_document(&args.measure)?;
    let measure = doc.build().context("lay out measure")?;
    let json = stave::LayoutReport::from_measure(&measure).to_json_pretty()?;
    match &args.out {
        Some(path) => {
            write_text(path, &json)?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
