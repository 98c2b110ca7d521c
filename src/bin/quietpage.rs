use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "quietpage", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a quote screen as a BMP.
    Render(RenderArgs),
    /// List the families and faces found in font files.
    Fonts(FontsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Quote text. Blank renders the placeholder quote.
    #[arg(long, conflicts_with = "text_file")]
    text: Option<String>,

    /// Read the quote text from a file.
    #[arg(long)]
    text_file: Option<PathBuf>,

    /// Footer line drawn at the bottom of the page.
    #[arg(long)]
    footer: Option<String>,

    #[arg(long, value_enum, default_value_t = AlignChoice::Center)]
    align: AlignChoice,

    #[arg(long, value_enum, default_value_t = BorderChoice::None)]
    border: BorderChoice,

    /// Body font family.
    #[arg(long, default_value = quietpage::DEFAULT_FAMILY)]
    family: String,

    /// Body font size in pixels.
    #[arg(long, default_value_t = quietpage::DEFAULT_FONT_SIZE_PX)]
    size: u32,

    #[arg(long)]
    bold: bool,

    #[arg(long)]
    italic: bool,

    /// Font file(s) to register (TTF/OTF/TTC). The first family is the fallback.
    #[arg(long = "font", required = true)]
    fonts: Vec<PathBuf>,

    /// Output config JSON; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the supersample scale from the config.
    #[arg(long)]
    scale: Option<u32>,

    /// Output BMP path.
    #[arg(long, default_value = quietpage::BmpImage::FILE_NAME)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FontsArgs {
    /// Font file(s) to inspect.
    #[arg(long = "font", required = true)]
    fonts: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignChoice {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BorderChoice {
    None,
    Simple,
    Double,
    Ornament,
}

impl From<AlignChoice> for quietpage::Alignment {
    fn from(value: AlignChoice) -> Self {
        match value {
            AlignChoice::Left => Self::Left,
            AlignChoice::Center => Self::Center,
            AlignChoice::Right => Self::Right,
        }
    }
}

impl From<BorderChoice> for quietpage::BorderStyle {
    fn from(value: BorderChoice) -> Self {
        match value {
            BorderChoice::None => Self::None,
            BorderChoice::Simple => Self::Simple,
            BorderChoice::Double => Self::Double,
            BorderChoice::Ornament => Self::Ornament,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config_json(path: &Path) -> anyhow::Result<quietpage::OutputConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg: quietpage::OutputConfig =
        serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(cfg)
}

fn load_fonts(paths: &[PathBuf]) -> anyhow::Result<quietpage::FontBook> {
    let mut book = quietpage::FontBook::new();
    for path in paths {
        book.register_file(path)
            .with_context(|| format!("register font '{}'", path.display()))?;
    }
    Ok(book)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => read_config_json(path)?,
        None => quietpage::OutputConfig::default(),
    };
    if let Some(scale) = args.scale {
        config.supersample_scale = scale;
    }

    let text = match &args.text_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read text '{}'", path.display()))?,
        None => args.text.clone().unwrap_or_default(),
    };

    let request = quietpage::RenderRequest {
        text,
        footer_text: args.footer.clone(),
        alignment: args.align.into(),
        border_style: args.border.into(),
        font: quietpage::FontSpec {
            family: args.family.clone(),
            bold: args.bold,
            italic: args.italic,
            size_px: args.size,
        },
    };

    let fonts = load_fonts(&args.fonts)?;
    let mut renderer = quietpage::QuoteRenderer::new(fonts, config)?;
    let (bmp, pending) = renderer.render_with_pending_font(&request)?;
    if let Some(pending) = pending {
        tracing::warn!(
            families = %pending.families().join(", "),
            "requested family not loaded; rendered with fallback face"
        );
    }

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, bmp.into_bytes())
        .with_context(|| format!("write bmp '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_fonts(args: FontsArgs) -> anyhow::Result<()> {
    let book = load_fonts(&args.fonts)?;
    for face in book.faces() {
        let mut style = Vec::new();
        if face.bold {
            style.push("bold");
        }
        if face.italic {
            style.push("italic");
        }
        if style.is_empty() {
            style.push("regular");
        }
        println!("{}\t{}", face.family, style.join(" "));
    }
    Ok(())
}
