//! gongwen - official-document typesetter

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gongwen::export::{export_docx, HtmlEnvelopeSerializer, PulldownConverter};
use gongwen::{normalize, official_styles, standard_styles, DocConfig, Layout, Mode, PresetId, Target};

#[derive(Parser)]
#[command(name = "gongwen")]
#[command(version, about = "Official-document typesetter", long_about = None)]
#[command(after_help = "EXAMPLES:
    gongwen notice.md                          Export with the default preset
    gongwen notice.md notice.doc --mode official --preset red-header
    gongwen notice.txt --normalize             Impose a heading hierarchy first
    gongwen --print-css export notice.md       Dump the export stylesheet")]
struct Cli {
    /// Input file (.md or .txt)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file; derived from the document title when omitted
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Formatting mode
    #[arg(long, value_enum, default_value_t = Mode::Official)]
    mode: Mode,

    /// Layout preset
    #[arg(long, value_enum, default_value_t = PresetId::Default)]
    preset: PresetId,

    /// Masthead text (red header); overrides the preset's
    #[arg(long)]
    masthead: Option<String>,

    /// Load a custom layout from a JSON file (overrides --preset)
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Run the structural normalizer before converting
    #[arg(short, long)]
    normalize: bool,

    /// Print a generated stylesheet instead of exporting
    #[arg(long, value_name = "TARGET", value_parser = ["preview", "export"])]
    print_css: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = build_config(cli)?;

    if let Some(target) = &cli.print_css {
        let target = match target.as_str() {
            "preview" => Target::Preview,
            _ => Target::Export,
        };
        let css = match cli.mode {
            Mode::Official => official_styles(config.layout(), target, None),
            Mode::Standard => standard_styles(target, None),
        };
        print!("{css}");
        return Ok(());
    }

    let mut markdown = fs::read_to_string(&cli.input).map_err(|e| e.to_string())?;
    if cli.normalize {
        markdown = normalize(&markdown);
    }

    let exported = export_docx(
        &markdown,
        cli.mode,
        &config,
        &PulldownConverter::new(),
        &HtmlEnvelopeSerializer,
    )
    .map_err(|e| e.to_string())?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&exported.filename));
    fs::write(&output, &exported.data).map_err(|e| e.to_string())?;

    if !cli.quiet {
        println!("wrote {}", output.display());
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<DocConfig, String> {
    let mut config = match &cli.layout {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
            let layout: Layout = serde_json::from_str(&text).map_err(|e| e.to_string())?;
            DocConfig::Custom(Box::new(layout))
        }
        None => DocConfig::Preset(cli.preset),
    };

    if let Some(masthead) = &cli.masthead {
        config = config.update(|l| l.masthead_text = Some(masthead.clone()));
    }
    Ok(config)
}
