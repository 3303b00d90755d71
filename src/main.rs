//! dropgrid - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// dropgrid - drag-and-drop tree reordering demo editor
#[derive(Parser, Debug)]
#[command(name = "dropgrid")]
#[command(version)]
#[command(about = "TUI editor for reordering a two-level group/column tree")]
pub struct Args {
    /// Path to a tree JSON file (uses a builtin sample if not provided)
    pub tree: Option<PathBuf>,

    /// Save the tree after every committed drag
    #[arg(short, long)]
    pub autosave: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Never write the tree back to disk
    #[arg(long)]
    pub read_only: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Mirror --no-color into the environment so color resolution sees one
    // consistent source.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve configuration: defaults → config file → env vars → CLI flags.
    let config = {
        let config_file = dropgrid::config::load_config_with_precedence(args.config.clone())?;
        let merged = dropgrid::config::merge_config(config_file);
        let with_env = dropgrid::config::apply_env_overrides(merged);

        let no_color_override = if args.no_color { Some(true) } else { None };
        let autosave_override = if args.autosave { Some(true) } else { None };
        dropgrid::config::apply_cli_overrides(with_env, no_color_override, autosave_override)
    };

    dropgrid::logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration resolved");

    let tree = match &args.tree {
        Some(path) => dropgrid::store::load_tree(path)?,
        None => dropgrid::store::sample_tree(),
    };

    let color_config = dropgrid::view::ColorConfig::from_env_and_args(config.no_color);
    let styles = dropgrid::view::EditorStyles::new(color_config);
    let key_bindings = dropgrid::config::KeyBindings::default();

    let options = dropgrid::integration::EditorOptions {
        autosave: config.autosave,
        read_only: args.read_only,
    };
    dropgrid::integration::run_editor(tree, args.tree, key_bindings, styles, options)?;

    Ok(())
}
