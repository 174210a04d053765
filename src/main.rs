use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use aplomb::config;

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file, output } => {
            let start_dir = start_dir_for(&file)?;
            let (settings, settings_path) = config::load(cli.config.as_deref(), &start_dir)?;
            if let Some(path) = settings_path {
                log::info!("Using settings: {}", path.display());
            }

            let input = read_all(file.as_ref())?;
            let html = aplomb::render(&input, Some(settings));

            match output {
                Some(path) => fs::write(path, html)?,
                None => print!("{html}"),
            }
        }
        Commands::Parse { file, json } => {
            let input = read_all(file.as_ref())?;
            let document = aplomb::parse(&input);

            if json {
                let out = serde_json::to_string_pretty(&document).map_err(io::Error::other)?;
                println!("{out}");
            } else {
                println!("{document:#?}");
            }
        }
    }

    Ok(())
}
