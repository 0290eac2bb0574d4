//! swatchline CLI: render images as styled console lines and read hidden
//! messages back out of them.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use swatchline_lib::{image_source, reveal, seal, sink, Error, Result, SwatchConfig};

#[derive(Debug, Parser)]
#[command(bin_name = "swatchline-cli", version, about)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode an image as styled lines, optionally carrying a hidden message.
    Render {
        /// Image to encode (png, jpeg, gif, bmp, webp).
        image: PathBuf,
        /// Hidden message, or @<path> to read it from a file.
        #[arg(long)]
        message: Option<String>,
        /// Seal the message with this passphrase before embedding.
        #[arg(long, requires = "message")]
        passphrase: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// JSON config file; flags override it.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Downscale the image to at most this many cells per line.
        #[arg(long)]
        width: Option<u32>,
        /// Characters per cell.
        #[arg(long)]
        cell_width: Option<usize>,
        /// Output path (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Recover the hidden message from a JSON lines file.
    Reveal {
        lines: PathBuf,
        /// Open a sealed message with this passphrase.
        #[arg(long)]
        passphrase: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// JSON array of { template, styles }.
    Json,
    /// JavaScript console.log statements.
    Script,
    /// Truecolor terminal preview.
    Ansi,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let (name, result) = match cli.command {
        Command::Render {
            image,
            message,
            passphrase,
            format,
            config,
            width,
            cell_width,
            output,
        } => (
            "render",
            run_render(RenderArgs {
                image,
                message,
                passphrase,
                format,
                config,
                width,
                cell_width,
                output,
            }),
        ),
        Command::Reveal { lines, passphrase } => ("reveal", run_reveal(&lines, passphrase.as_deref())),
    };
    if let Err(e) = result {
        eprintln!("{name} error: {e}");
        std::process::exit(1);
    }
}

struct RenderArgs {
    image: PathBuf,
    message: Option<String>,
    passphrase: Option<String>,
    format: Format,
    config: Option<PathBuf>,
    width: Option<u32>,
    cell_width: Option<usize>,
    output: Option<PathBuf>,
}

fn read_message(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(arg.to_string()),
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SwatchConfig::from_json_file(path)?,
        None => SwatchConfig::default(),
    };
    if args.width.is_some() {
        config.max_width = args.width;
    }
    if let Some(cell_width) = args.cell_width {
        config.cell_text_width = cell_width;
    }
    config.validate()?;

    let message = match args.message.as_deref().map(read_message).transpose()? {
        Some(text) => match args.passphrase.as_deref() {
            Some(passphrase) => Some(seal::seal(&text, passphrase)?),
            None => Some(text),
        },
        None => None,
    };

    let buffer = image_source::load_channel_buffer(&args.image, config.max_width)?;
    log::info!(
        "rendering {} as {}x{} cells",
        args.image.display(),
        buffer.width,
        buffer.height
    );
    let swatch = swatchline_lib::transform_buffer(&buffer, &config, message.as_deref())?;

    let rendered = match args.format {
        Format::Json => sink::to_json(&swatch.lines)?,
        Format::Script => sink::to_console_script(&swatch.lines)?,
        Format::Ansi => sink::to_ansi(&swatch.grid, &swatch.lines),
    };
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            log::info!("Wrote {}", path.display());
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn run_reveal(path: &Path, passphrase: Option<&str>) -> Result<()> {
    let lines = sink::from_json(&fs::read_to_string(path)?)?;
    let hidden = reveal::recover_message(lines.iter().map(|line| line.template.as_str()));
    let output = match passphrase {
        Some(passphrase) if seal::is_sealed(&hidden) => seal::open(&hidden, passphrase)?,
        Some(_) => {
            return Err(Error::Seal(
                "message is not sealed (run without --passphrase for raw text)".to_string(),
            ))
        }
        None => {
            if seal::is_sealed(&hidden) {
                log::warn!("message is sealed; pass --passphrase to open it");
            }
            hidden
        }
    };
    let stdout = io::stdout();
    let output = if stdout.is_terminal() {
        sink::terminal_safe(&output)
    } else {
        output
    };
    stdout.lock().write_all(output.as_bytes())?;
    Ok(())
}
