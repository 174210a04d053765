use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Per-tag CSS class names substituted into the emitted HTML.
///
/// The defaults style the output with the Tailwind utility classes the
/// project ships with; any field can be overridden from a settings file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClassNames {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub h4: String,
    pub h5: String,
    pub h6: String,
    pub p: String,
    pub ul: String,
    pub li: String,
    /// Applied instead of `li` when a list item wraps a nested list.
    pub li_nested: String,
    pub blockquote: String,
    pub hr: String,
    pub code: String,
    pub a: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            h1: "mt-10 mb-10 text-4xl font-sans font-bold border-solid border-indigo-400 border-b-2 pb-1.5".to_string(),
            h2: "pb-1 mt-8 mb-8 font-sans text-2xl font-semibold border-b-2 border-indigo-400 border-solid".to_string(),
            h3: "mt-6 mb-6 font-sans text-xl font-semibold".to_string(),
            h4: "mt-4 mb-4 text-lg border-b border-indigo-400 border-solid pb-1".to_string(),
            h5: String::new(),
            h6: String::new(),
            p: "mt-2 mb-2".to_string(),
            ul: "mt-4 ml-8 list-disc".to_string(),
            li: "mt-2".to_string(),
            li_nested: "mt-2 list-none".to_string(),
            blockquote: "pl-4 border-l-2 border-gray-400 border-solid text-slate-400".to_string(),
            hr: "border-b-2 border-indigo-400 mt-6 mb-6".to_string(),
            code: "bg-slate-700".to_string(),
            a: "text-sky-300".to_string(),
        }
    }
}

impl ClassNames {
    /// Class for a heading of the given size; sizes without a configured
    /// class get an empty one.
    pub fn heading(&self, size: usize) -> &str {
        match size {
            1 => &self.h1,
            2 => &self.h2,
            3 => &self.h3,
            4 => &self.h4,
            5 => &self.h5,
            6 => &self.h6,
            _ => "",
        }
    }
}

/// Presentation constants consumed by the HTML emitter.
///
/// Settings are plain data passed explicitly into the emitter; nothing in
/// the parsing pipeline reads them.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Line break emitted between generated tags.
    pub newline_code: String,
    /// One unit of indentation in the generated HTML.
    pub indent: String,
    pub class_name: ClassNames,
    /// Class template for code blocks; `{language}` is replaced with the
    /// lowercased fence language so highlight.js picks it up.
    pub code_block_class_template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            newline_code: "\n".to_string(),
            indent: "    ".to_string(),
            class_name: ClassNames::default(),
            code_block_class_template: "language-{language} hljs".to_string(),
        }
    }
}

impl Settings {
    /// Expand the code block class template for a fence language.
    pub fn code_block_class(&self, language: &str) -> String {
        self.code_block_class_template
            .replace("{language}", &language.to_lowercase())
    }
}

const CANDIDATE_NAMES: &[&str] = &[".aplomb.toml", "aplomb.toml"];

fn parse_settings_str(s: &str, path: &Path) -> io::Result<Settings> {
    toml::from_str::<Settings>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid settings {}: {e}", path.display()),
        )
    })
}

fn read_settings(path: &Path) -> io::Result<Settings> {
    log::debug!("Reading settings from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let settings = parse_settings_str(&s, path)?;
    log::info!("Loaded settings from: {}", path.display());
    Ok(settings)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_settings_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("aplomb").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("aplomb")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load settings with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .aplomb.toml, aplomb.toml
/// 3) XDG: $XDG_CONFIG_HOME/aplomb/config.toml or ~/.config/aplomb/config.toml
/// 4) built-in defaults
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Settings, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let settings = read_settings(path)?;
        return Ok((settings, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(settings) = read_settings(&p)
    {
        return Ok((settings, Some(p)));
    }

    if let Some(p) = xdg_settings_path()
        && let Ok(settings) = read_settings(&p)
    {
        return Ok((settings, Some(p)));
    }

    log::debug!("No settings file found, using defaults");
    Ok((Settings::default(), None))
}
