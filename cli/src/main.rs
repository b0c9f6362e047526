//! reportdom CLI - render JSON reports to HTML, LaTeX, Markdown, JSON, and YAML

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use reportdom::render::PreformattedConverter;
use reportdom::{
    Container, DictStyle, HtmlRenderer, JsonFormat, JsonRenderer, LatexRenderer, MarkdownRenderer,
    OutputFormat, Renderer, RendererRegistry, Report, YamlRenderer,
};

#[derive(Parser)]
#[command(name = "reportdom")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render JSON reports to HTML, LaTeX, Markdown, JSON, and YAML", long_about = None)]
struct Cli {
    /// Input report (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report to every format (HTML, LaTeX, Markdown, JSON, YAML)
    Convert {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Render a report to HTML
    Html {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// How Markdown leaves are converted
        #[arg(long, value_enum, default_value = "commonmark")]
        markdown: MarkdownMode,
    },

    /// Render a report to LaTeX
    #[command(alias = "tex")]
    Latex {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Drop HTML and Markdown leaves instead of failing
        #[arg(long)]
        ignore_unsupported: bool,

        /// LaTeX document class
        #[arg(long, default_value = "article")]
        document_class: String,
    },

    /// Render a report to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Do not escape Markdown syntax in text leaves
        #[arg(long)]
        no_escape: bool,
    },

    /// Re-emit a report as JSON
    Json {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Drop section levels and identifiers
        #[arg(long)]
        simple: bool,
    },

    /// Export a report as YAML
    #[command(alias = "yml")]
    Yaml {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Drop section levels and identifiers
        #[arg(long)]
        simple: bool,
    },

    /// Render a report in the format implied by the output file extension
    Render {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (.html, .tex, .md, .json, .yaml)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Show report structure statistics
    Info {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a small example report as JSON
    Demo {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MarkdownMode {
    /// CommonMark to HTML
    Commonmark,
    /// Escaped source in a <pre> block
    Preformatted,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Html {
            input,
            output,
            markdown,
        }) => cmd_html(&input, output.as_deref(), markdown),
        Some(Commands::Latex {
            input,
            output,
            ignore_unsupported,
            document_class,
        }) => cmd_latex(&input, output.as_deref(), ignore_unsupported, document_class),
        Some(Commands::Markdown {
            input,
            output,
            no_escape,
        }) => cmd_markdown(&input, output.as_deref(), no_escape),
        Some(Commands::Json {
            input,
            output,
            compact,
            simple,
        }) => cmd_json(&input, output.as_deref(), compact, simple),
        Some(Commands::Yaml {
            input,
            output,
            simple,
        }) => cmd_yaml(&input, output.as_deref(), simple),
        Some(Commands::Render { input, output }) => cmd_render(&input, &output),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Demo { output }) => cmd_demo(output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: reportdom <FILE> [OUTPUT]".yellow());
                println!("       reportdom --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Write to `output` if given, stdout otherwise.
fn emit(content: &str, output: Option<&Path>) -> CmdResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> CmdResult {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(OutputFormat::ALL.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading report...");
    let report = Report::from_file(input)?;
    pb.inc(1);

    // LaTeX cannot hold HTML or Markdown leaves; drop them rather than fail
    let mut registry = RendererRegistry::with_defaults();
    registry.register(std::sync::Arc::new(LatexRenderer::new(true)));

    let mut written = Vec::new();
    for format in OutputFormat::ALL {
        pb.set_message(format!("Rendering {}...", format.name()));
        let content = registry.render(format.name(), &report)?;
        let filename = format!("report.{}", format.extension());
        fs::write(output_dir.join(&filename), &content)?;
        info!("Wrote {} ({} bytes)", filename, content.len());
        written.push(filename);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, filename) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), filename);
    }

    Ok(())
}

fn cmd_html(input: &Path, output: Option<&Path>, markdown: MarkdownMode) -> CmdResult {
    let report = Report::from_file(input)?;

    let renderer = match markdown {
        MarkdownMode::Commonmark => HtmlRenderer::new(),
        MarkdownMode::Preformatted => HtmlRenderer::new().with_converter(PreformattedConverter),
    };

    let html = report.render_with(&renderer)?;
    emit(&html, output)
}

fn cmd_latex(
    input: &Path,
    output: Option<&Path>,
    ignore_unsupported: bool,
    document_class: String,
) -> CmdResult {
    let report = Report::from_file(input)?;

    let renderer = LatexRenderer::new(ignore_unsupported).with_document_class(document_class);
    let latex = report.render_with(&renderer)?;
    emit(&latex, output)
}

fn cmd_markdown(input: &Path, output: Option<&Path>, no_escape: bool) -> CmdResult {
    let report = Report::from_file(input)?;

    let renderer = MarkdownRenderer::new().with_escape(!no_escape);
    let markdown = report.render_with(&renderer)?;
    emit(&markdown, output)
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool, simple: bool) -> CmdResult {
    let report = Report::from_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let style = if simple {
        DictStyle::Simple
    } else {
        DictStyle::Rich
    };

    let json = JsonRenderer::new(format)
        .with_style(style)
        .render(report.as_entity())?;
    emit(&json, output)
}

fn cmd_yaml(input: &Path, output: Option<&Path>, simple: bool) -> CmdResult {
    let report = Report::from_file(input)?;

    let style = if simple {
        DictStyle::Simple
    } else {
        DictStyle::Rich
    };

    let yaml = YamlRenderer::new()
        .with_style(style)
        .render(report.as_entity())?;
    emit(&yaml, output)
}

fn cmd_render(input: &Path, output: &Path) -> CmdResult {
    let report = Report::from_file(input)?;

    let registry = RendererRegistry::with_defaults();
    let content = registry.render_for_path(output, &report)?;
    emit(&content, Some(output))
}

fn cmd_info(input: &Path, json: bool) -> CmdResult {
    let report = Report::from_file(input)?;
    let stats = report.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Report Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), report.title);
    println!("{}: {}", "Top-level nodes".bold(), report.children().len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Max depth".bold(), stats.max_depth);
    println!("{}: {}", "HTML blocks".bold(), stats.html_count);
    println!("{}: {}", "Text blocks".bold(), stats.text_count);
    println!("{}: {}", "Markdown blocks".bold(), stats.markdown_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    let identifiers: Vec<&str> = report.entities().filter_map(|e| e.identifier()).collect();
    if !identifiers.is_empty() {
        println!("{}: {}", "Identifiers".bold(), identifiers.join(", "));
    }

    Ok(())
}

fn cmd_demo(output: Option<&Path>) -> CmdResult {
    let mut report = Report::new("A report");
    report
        .section("Section 1", Some("intro"))
        .add_html("Hello <b>world</b>!", None)
        .add_markdown("Hello **again**!", None)
        .section("Details", None)
        .add_text("Plain text: 1 < 2 & 3 > 2", None);
    report.add_section("Section 2", None);

    let json = reportdom::to_json(&report, JsonFormat::Pretty)?;
    emit(&json, output)
}

fn cmd_version() {
    println!("{} {}", "reportdom".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Report rendering tool");
    println!();
    println!("License: MIT");
}
