use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "snapframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decorate a screenshot and write a PNG.
    Render(RenderArgs),
    /// List background presets and output sizes.
    Presets,
    /// Print the geometry plan for an input size as JSON.
    Plan(PlanArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TemplateArg {
    MacWindow,
    Iphone,
    Layered,
}

impl From<TemplateArg> for snapframe::TemplateKind {
    fn from(t: TemplateArg) -> Self {
        match t {
            TemplateArg::MacWindow => Self::MacWindow,
            TemplateArg::Iphone => Self::Iphone,
            TemplateArg::Layered => Self::Layered,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DeviceColorArg {
    Titanium,
    Black,
    Natural,
}

impl From<DeviceColorArg> for snapframe::DeviceColor {
    fn from(c: DeviceColorArg) -> Self {
        match c {
            DeviceColorArg::Titanium => Self::Titanium,
            DeviceColorArg::Black => Self::Black,
            DeviceColorArg::Natural => Self::Natural,
        }
    }
}

#[derive(Parser, Debug)]
struct TemplateOpts {
    /// Template; overrides the style file.
    #[arg(long, value_enum)]
    template: Option<TemplateArg>,

    /// Phone frame finish (iphone template).
    #[arg(long, value_enum)]
    device_color: Option<DeviceColorArg>,

    /// Hide the traffic-light buttons (mac-window template).
    #[arg(long, default_value_t = false)]
    no_buttons: bool,

    /// Output size slug for the layered template (square, portrait, landscape).
    #[arg(long)]
    size: Option<String>,

    /// Canvas padding in pixels.
    #[arg(long)]
    padding: Option<u32>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input screenshot (PNG, JPEG or WebP).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Style config JSON.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Background preset slug; overrides the style file.
    #[arg(long)]
    background: Option<String>,

    #[command(flatten)]
    template: TemplateOpts,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input width in pixels.
    #[arg(long)]
    width: u32,

    /// Input height in pixels.
    #[arg(long)]
    height: u32,

    #[command(flatten)]
    template: TemplateOpts,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Presets => cmd_presets(),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut style = match &args.style {
        Some(path) => snapframe::StyleConfig::from_path(path)?,
        None => snapframe::StyleConfig::new(
            snapframe::BackgroundSpec::from_preset("telegram")?,
            snapframe::TemplateSpec::default_for(snapframe::TemplateKind::Iphone),
        ),
    };
    if let Some(slug) = &args.background {
        style.background = snapframe::BackgroundSpec::from_preset(slug)?;
    }
    apply_template_opts(&mut style, &args.template)?;

    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read input '{}'", args.in_path.display()))?;
    let info = snapframe::validate_input(&bytes).map_err(|e| anyhow::anyhow!(e.user_message()))?;
    tracing::debug!(?info, "input validated");

    let result = match snapframe::process_screenshot(&bytes, &style) {
        Ok(result) => result,
        Err(err) if err.is_user_error() => anyhow::bail!(err.user_message()),
        Err(err) => return Err(err.into()),
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &result.buffer)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{}, {} ms)",
        args.out.display(),
        result.width,
        result.height,
        result.processing_time_ms
    );
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    println!("backgrounds:");
    for preset in snapframe::all_background_presets() {
        let kind = if preset.angle.is_some() { "gradient" } else { "solid" };
        println!(
            "  {:<14} {:<9} {:<10} {}",
            preset.slug,
            kind,
            preset.name,
            preset.colors.join(" ")
        );
    }
    println!("output sizes:");
    for size in snapframe::OUTPUT_SIZES {
        println!("  {:<14} {}x{} ({})", size.slug, size.width, size.height, size.name);
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let mut style = snapframe::StyleConfig::new(
        snapframe::BackgroundSpec::from_preset("telegram")?,
        snapframe::TemplateSpec::default_for(snapframe::TemplateKind::Iphone),
    );
    apply_template_opts(&mut style, &args.template)?;

    let plan = snapframe::plan_geometry(
        &style.template,
        style.common.padding,
        args.width,
        args.height,
    )?;
    let json = serde_json::to_string_pretty(&plan).context("serialize geometry plan")?;
    println!("{json}");
    Ok(())
}

fn apply_template_opts(
    style: &mut snapframe::StyleConfig,
    opts: &TemplateOpts,
) -> anyhow::Result<()> {
    if let Some(kind) = opts.template {
        let kind = snapframe::TemplateKind::from(kind);
        if style.template.kind() != kind {
            style.template = snapframe::TemplateSpec::default_for(kind);
        }
    }
    match &mut style.template {
        snapframe::TemplateSpec::MacWindow(p) => {
            if opts.no_buttons {
                p.window_buttons = Some(false);
            }
        }
        snapframe::TemplateSpec::Iphone(p) => {
            if let Some(color) = opts.device_color {
                p.device_color = color.into();
            }
        }
        snapframe::TemplateSpec::Layered(p) => {
            if let Some(slug) = &opts.size {
                let size = snapframe::output_size(slug)
                    .map_err(|e| anyhow::anyhow!(e.user_message()))?;
                p.output_width = Some(size.width);
                p.output_height = Some(size.height);
            }
        }
    }
    if let Some(padding) = opts.padding {
        style.common.padding = padding;
    }
    Ok(())
}
