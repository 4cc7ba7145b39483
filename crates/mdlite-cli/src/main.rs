use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use mdlite_config::Config;
use mdlite_engine::{RenderOptions, render_with};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

/// Render a small Markdown subset (headers, `* ` items, `_em_`, `__strong__`) to HTML.
#[derive(Debug, Parser)]
#[command(name = "mdlite", version, about)]
struct Cli {
    /// Markdown files to render. Reads stdin when empty or `-`.
    files: Vec<PathBuf>,

    /// Wrap consecutive list items in <ul>...</ul>
    #[arg(long)]
    group_lists: bool,

    /// Escape &, < and > in text
    #[arg(long)]
    escape_html: bool,

    /// Render deeper `#` runs as paragraphs
    #[arg(long, value_name = "N")]
    max_header_level: Option<usize>,

    /// Config file (defaults to ~/.config/mdlite/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write <name>.html files here instead of printing to stdout
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            Input::Stdin
        } else {
            Input::File(path.to_path_buf())
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read stdin")?;
                Ok(content)
            }
            Input::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn output_name(&self) -> String {
        match self {
            Input::Stdin => "stdin.html".to_string(),
            Input::File(path) => {
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "index".to_string());
                format!("{stem}.html")
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let options = merge_options(config.render, &cli);
    log::info!("Render options: {options:?}");

    let output_dir = cli.output_dir.clone().or(config.output_dir);
    if let Some(dir) = &output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let inputs: Vec<Input> = if cli.files.is_empty() {
        vec![Input::Stdin]
    } else {
        cli.files.iter().map(|p| Input::from_arg(p)).collect()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for input in &inputs {
        let html = render_with(&input.read()?, &options);
        match &output_dir {
            Some(dir) => {
                let target = dir.join(input.output_name());
                fs::write(&target, &html)
                    .with_context(|| format!("Failed to write {}", target.display()))?;
                log::info!("Wrote {}", target.display());
            }
            None => {
                writeln!(out, "{html}").context("Failed to write to stdout")?;
            }
        }
    }
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

/// Command-line flags can only switch features on; they never turn config off.
fn merge_options(base: RenderOptions, cli: &Cli) -> RenderOptions {
    RenderOptions {
        group_lists: base.group_lists || cli.group_lists,
        escape_html: base.escape_html || cli.escape_html,
        max_header_level: cli.max_header_level.or(base.max_header_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["mdlite", "--group-lists", "--max-header-level", "3"]);
        let base = RenderOptions {
            escape_html: true,
            max_header_level: Some(6),
            ..RenderOptions::default()
        };
        let merged = merge_options(base, &cli);
        assert!(merged.group_lists);
        assert!(merged.escape_html);
        assert_eq!(merged.max_header_level, Some(3));
    }

    #[test]
    fn dash_means_stdin() {
        assert!(matches!(Input::from_arg(Path::new("-")), Input::Stdin));
        assert!(matches!(Input::from_arg(Path::new("a.md")), Input::File(_)));
    }

    #[test]
    fn output_names() {
        assert_eq!(Input::Stdin.output_name(), "stdin.html");
        assert_eq!(
            Input::File(PathBuf::from("notes/today.md")).output_name(),
            "today.html"
        );
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
