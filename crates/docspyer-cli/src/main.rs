use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docspyer_config::Config;
use docspyer_engine::docstrings::{DocParser, DocPrinter, MarkdownPrinter, RstPrinter};
use docspyer_engine::markdown::{Sources, make_mono_toc, make_multi_toc};
use docspyer_engine::{dump_tree_html, dump_tree_text, make_doc_html, make_tree, text};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docspyer", version, about = "Render Markdown, docstrings and trees to HTML")]
struct Cli {
    /// Config file to use instead of ~/.config/docspyer/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Markdown file to HTML
    Markdown {
        file: PathBuf,

        /// Print the table of contents above the document
        #[arg(long)]
        toc: bool,
    },

    /// Convert a numpy-style docstring to Markdown
    Docstring {
        file: PathBuf,

        /// Emit reStructuredText instead of Markdown
        #[arg(long)]
        rst: bool,
    },

    /// Draw an indented dash list as a tree
    Tree {
        file: PathBuf,

        /// Emit nested HTML lists instead of box-drawing text
        #[arg(long)]
        html: bool,
    },

    /// Build one table of contents over several Markdown files
    Contents {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Give each file its own TOC under a heading of this level
        #[arg(long)]
        multi: Option<usize>,
    },
}

/// Generated text with the input it came from and the extension it gets
/// inside the output directory.
#[derive(Debug)]
struct Output {
    text: String,
    input: PathBuf,
    extension: &'static str,
}

impl Output {
    fn new(text: String, input: &Path, extension: &'static str) -> Self {
        Self {
            text,
            input: input.to_path_buf(),
            extension,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let output = run(cli.command, &config)?;
    emit(&config, output)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        log::debug!("Config path: {}", Config::config_path().display());
        return Ok(Config::load()?.unwrap_or_default());
    };

    log::debug!("Config path: {}", path.display());
    Config::load_from_path(path)?
        .with_context(|| format!("config file not found: {}", path.display()))
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn run(command: Command, config: &Config) -> Result<Output> {
    match command {
        Command::Markdown { file, toc } => {
            let markdown = read_input(&file)?;
            let doc = make_doc_html(&markdown, &config.markdown)
                .with_context(|| format!("cannot convert {}", file.display()))?;

            let html = if toc && !doc.toc.is_empty() {
                format!("{}\n\n{}", doc.toc, doc.text)
            } else {
                doc.text
            };
            Ok(Output::new(html, &file, "html"))
        }

        Command::Docstring { file, rst } => {
            let doc = text::dedent(&read_input(&file)?);
            let blocks = DocParser::new(config.docstrings.clone())
                .parse(doc.trim())
                .with_context(|| format!("cannot parse docstring in {}", file.display()))?;

            if rst {
                Ok(Output::new(RstPrinter.print_blocks(&blocks), &file, "rst"))
            } else {
                Ok(Output::new(MarkdownPrinter.print_blocks(&blocks), &file, "md"))
            }
        }

        Command::Tree { file, html } => {
            let root = make_tree(&read_input(&file)?);
            if html {
                let view = dump_tree_html(&root, config.markdown.html_indent);
                Ok(Output::new(view, &file, "html"))
            } else {
                Ok(Output::new(dump_tree_text(&root), &file, "txt"))
            }
        }

        Command::Contents { files, multi } => {
            let mut sources = Sources::new();
            for file in &files {
                let name = file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .with_context(|| format!("no file name in {}", file.display()))?;
                sources.insert(name, read_input(file)?);
            }

            let indent = config.markdown.html_indent;
            let toc = match multi {
                Some(level) => make_multi_toc(&sources, level, indent)?,
                None => make_mono_toc(&sources, indent)?,
            };
            Ok(Output::new(toc, Path::new("contents"), "html"))
        }
    }
}

fn emit(config: &Config, output: Output) -> Result<()> {
    let Some(path) = config.output_path(&output.input, output.extension) else {
        println!("{}", output.text);
        return Ok(());
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create {}", dir.display()))?;
    }
    std::fs::write(&path, output.text)
        .with_context(|| format!("cannot write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
