use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::Session;
use crate::cli::args::{Cli, Commands, ConfigCommands, RenderArgs};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::cli::render::{render_path, render_tree};
use crate::cli::repl::run_session;
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::domain::TreeBuilder;

/// Settings after applying command line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub color: bool,
}

impl RenderOptions {
    pub fn resolve(settings: &Settings, args: &RenderArgs) -> Self {
        Self {
            seed: args.seed.or(settings.seed),
            format: args.format.unwrap_or(settings.format),
            color: settings.color && !args.no_color,
        }
    }
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        return _completion(*shell);
    }

    let settings = Settings::load(cli.config_dir.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Build { input, render }) => {
            _build(&settings, input, &RenderOptions::resolve(&settings, render))
        }
        Some(Commands::Path {
            input,
            position,
            render,
        }) => _path(
            &settings,
            input,
            *position,
            &RenderOptions::resolve(&settings, render),
        ),
        Some(Commands::Session { seed, no_color }) => _session(&settings, *seed, *no_color),
        Some(Commands::Config { command }) => {
            _config(&settings, cli.config_dir.as_deref(), command)
        }
        Some(Commands::Completion { .. }) => Ok(()),
        None => {
            let _ = Cli::command().print_help();
            Ok(())
        }
    }
}

fn new_session(settings: &Settings, seed: Option<u64>) -> Session {
    Session::new(TreeBuilder::from_seed(seed), settings.separator)
}

#[instrument(skip(settings))]
fn _build(settings: &Settings, input: &str, options: &RenderOptions) -> CliResult<()> {
    let mut session = new_session(settings, options.seed);
    let count = session.submit(input)?;
    debug!("built {} nodes", count);

    match options.format {
        OutputFormat::Tree => output::info(&render_tree(session.tree(), None, options.color)),
        OutputFormat::Json => output::info(&session.snapshot().to_json()?),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _path(
    settings: &Settings,
    input: &str,
    position: usize,
    options: &RenderOptions,
) -> CliResult<()> {
    let mut session = new_session(settings, options.seed);
    session.submit(input)?;
    let highlight = session.select_position(position)?;

    match options.format {
        OutputFormat::Tree => {
            output::header(&format!("path: {}", render_path(session.tree(), &highlight)));
            output::info(&render_tree(
                session.tree(),
                Some(&highlight),
                options.color,
            ));
        }
        OutputFormat::Json => output::info(&session.snapshot().to_json()?),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _session(settings: &Settings, seed: Option<u64>, no_color: bool) -> CliResult<()> {
    let mut session = new_session(settings, seed.or(settings.seed));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(
        &mut session,
        stdin.lock(),
        &mut stdout,
        settings.color && !no_color,
    )
}

#[instrument(skip(settings))]
fn _config(
    settings: &Settings,
    config_dir: Option<&Path>,
    command: &ConfigCommands,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            output::header("Config files");
            let describe = |path: &Path| {
                let state = if path.exists() { "found" } else { "missing" };
                format!("{} ({})", path.display(), state)
            };
            match global_config_path() {
                Some(path) => output::detail(&format!("global: {}", describe(&path))),
                None => output::detail("global: no config directory on this platform"),
            }
            match config_dir {
                Some(dir) => output::detail(&format!(
                    "local:  {}",
                    describe(&local_config_path(dir))
                )),
                None => output::detail("local:  none (use -C <dir>)"),
            }
        }
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
