//! `stamp` command line: opt types into timestamp synthesis, install the
//! add-on into a project, and print the synthesized companions.
//!
//! The project is a JSON document holding the declared types and the merged
//! synthetic groups.

mod error;
mod project;

pub use error::{CliError, CliResult};
pub use project::PROJECT_FILE_NAME;

use clap::{Args, Parser, Subcommand};
use stamp_config::{CONFIG_FILE_NAME, StampConfig};
use stamp_core::{
    error::Error,
    host::{ProjectOperations, TypeLocator},
    memory::MemoryProject,
    ops::{TimestampOperations, require_type},
    provider::TimestampProvider,
};
use stamp_schema::node::TypePath;
use std::{ffi::OsString, io::Write, path::PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "stamp", version, about = "Creation/update timestamp synthesis")]
struct Cli {
    /// Project file
    #[arg(long, global = true, default_value = PROJECT_FILE_NAME, env = "STAMP_PROJECT")]
    project: PathBuf,

    /// Config file; defaults apply when it does not exist
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME, env = "STAMP_CONFIG")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage timestamp tracking
    Timestamp {
        #[command(subcommand)]
        command: TimestampCommand,
    },

    /// Synthesize and print the companion for one type
    Synthesize {
        #[command(flatten)]
        target: TypeArg,

        /// Print the addition list as JSON instead of source
        #[arg(long)]
        json: bool,
    },

    /// Re-run synthesis for every type and merge the results
    Refresh,
}

#[derive(Debug, Subcommand)]
enum TimestampCommand {
    /// Add the add-on repository and dependencies to the project
    Setup,

    /// Track timestamps on one type
    Add {
        #[command(flatten)]
        target: TypeArg,
    },

    /// Track timestamps on every record type
    All,

    /// Stop tracking timestamps on one type
    Unmark {
        #[command(flatten)]
        target: TypeArg,
    },

    /// Remove every annotation, the repository and the dependencies
    Remove,
}

#[derive(Debug, Args)]
struct TypeArg {
    /// Fully-qualified type path, e.g. app::model::Order
    #[arg(long = "type", value_name = "TYPE")]
    ty: String,
}

impl TypeArg {
    fn resolve(&self) -> CliResult<TypePath> {
        Ok(require_type(Some(&self.ty))?)
    }
}

/// Run using the current process arguments.
pub fn run(out: &mut impl Write) -> CliResult<()> {
    run_with_args(std::env::args_os(), out)
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I, out: &mut impl Write) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    init_tracing(cli.verbose);

    let config = StampConfig::load_or_default(&cli.config)?;
    let mut project = project::load(&cli.project)?;

    let changed = execute(&cli.command, &config, &mut project, out)?;
    if changed {
        project::save(&cli.project, &project)?;
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    // a subscriber may already be installed when running in-process
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .try_init();
}

// Returns whether the project changed.
fn execute(
    command: &Command,
    config: &StampConfig,
    project: &mut MemoryProject,
    out: &mut impl Write,
) -> CliResult<bool> {
    match command {
        Command::Timestamp { command } => {
            let mut ops = TimestampOperations::new(project, config);

            match command {
                TimestampCommand::Setup => {
                    ops.setup()?;
                    report(out, "timestamp add-on set up")?;
                }
                TimestampCommand::Add { target } => {
                    let ty = target.resolve()?;
                    let changed = ops.annotate_type(&ty)?;
                    report(out, &format!("{ty}: {}", outcome(changed, "annotated")))?;
                }
                TimestampCommand::All => {
                    let changed = ops.annotate_all()?;
                    report(out, &format!("annotated {changed} type(s)"))?;
                }
                TimestampCommand::Unmark { target } => {
                    let ty = target.resolve()?;
                    let changed = ops.remove_annotation(&ty)?;
                    report(out, &format!("{ty}: {}", outcome(changed, "unmarked")))?;
                }
                TimestampCommand::Remove => {
                    ops.remove()?;
                    report(out, "timestamp add-on removed")?;
                }
            }

            let provider = active_provider(config, project);
            project.refresh_all(&provider)?;

            Ok(true)
        }

        Command::Synthesize { target, json } => {
            ensure_focused(project)?;
            let ty = target.resolve()?;
            let provider = active_provider(config, project);

            let Some(additions) = project.refresh(&provider, &ty)?.cloned() else {
                return Err(if project.type_details(&ty).is_some() {
                    CliError::NotTriggered(ty)
                } else {
                    CliError::UnknownType(ty)
                });
            };

            if *json {
                let text = serde_json::to_string_pretty(&additions).map_err(|source| {
                    CliError::Json {
                        path: PathBuf::from("-"),
                        source,
                    }
                })?;
                report(out, &text)?;
            } else {
                let companion = stamp_build::render(&additions)?;
                report(out, &format!("// {}", companion.file_name))?;
                report(out, &format!("// fields: {}", companion.field_source()))?;
                report(out, &companion.to_source())?;
            }

            // read-only: the merged group is not saved
            Ok(false)
        }

        Command::Refresh => {
            ensure_focused(project)?;
            let provider = active_provider(config, project);
            let merged = project.refresh_all(&provider)?;
            report(out, &format!("{merged} type(s) carry timestamps"))?;

            Ok(true)
        }
    }
}

fn ensure_focused(project: &MemoryProject) -> CliResult<()> {
    if project.is_focused_project_available() {
        Ok(())
    } else {
        Err(Error::unavailable("no focused project").into())
    }
}

fn active_provider(config: &StampConfig, project: &mut MemoryProject) -> TimestampProvider {
    let mut provider = TimestampProvider::new(config);
    provider.activate(project);

    provider
}

const fn outcome(changed: bool, verb: &'static str) -> &'static str {
    if changed { verb } else { "unchanged" }
}

fn report(out: &mut impl Write, line: &str) -> CliResult<()> {
    writeln!(out, "{line}").map_err(|source| CliError::Io {
        path: PathBuf::from("-"),
        source,
    })
}
