use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aplomb")]
#[command(author, version)]
#[command(about = "Convert constrained Markdown into styled HTML")]
#[command(
    long_about = "Aplomb converts a constrained Markdown dialect (headings, quotes, lists, \
    fenced code blocks, horizontal rules, inline links/code/images, and a [toc] marker) into \
    HTML annotated with configurable CSS class names, ready to drop into a styled page."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to stdout
    aplomb render document.md

    # Render from stdin
    cat document.md | aplomb render

    # Render into a file
    aplomb render document.md -o document.html

    # Inspect the document tree
    aplomb parse document.md --json

CONFIGURATION:

Aplomb looks for settings files in this order:
  1. Explicit --config path
  2. aplomb.toml or .aplomb.toml in current/parent directories
  3. ~/.config/aplomb/config.toml (XDG)
  4. Built-in defaults

Example .aplomb.toml:

    indent = \"  \"

    [class_name]
    p = \"prose\"
    a = \"prose-link\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to settings file
    #[arg(long, global = true)]
    #[arg(help = "Path to settings file")]
    #[arg(
        long_help = "Path to a custom settings file. If not specified, aplomb will search \
        for .aplomb.toml or aplomb.toml in the current directory and its parents, then fall \
        back to ~/.config/aplomb/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a Markdown document to HTML
    #[command(
        long_about = "Render a Markdown document to HTML. By default, outputs the generated \
        HTML to stdout; use --output to write it to a file instead."
    )]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Output file (stdout if not provided)
        #[arg(short, long)]
        #[arg(help = "Output file path")]
        output: Option<PathBuf>,
    },
    /// Parse and display the document tree for debugging
    #[command(
        long_about = "Parse a document and display its converted document tree for debugging \
        and understanding how aplomb interprets the input. The tree shows all block and inline \
        elements with notation already resolved."
    )]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Emit the tree as JSON instead of the debug form
        #[arg(long)]
        json: bool,
    },
}
