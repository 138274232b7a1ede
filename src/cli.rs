//! CLI argument parsing with clap derive.

use anyhow::Result;
use clap::{CommandFactory as _, Parser, Subcommand};

use crate::checks::SystemProbe;
use crate::command_runner::TokioCommandRunner;
use crate::commands;
use crate::context;
use crate::output::OutputContext;
use crate::terraform::TerraformCliDriver;

/// Sequenced Terraform deployments for a GKE stack
#[derive(Parser)]
#[command(name = "deployctl", version, propagate_version = true)]
pub struct Cli {
    /// Output in JSON format (plan and show)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check prerequisites, materialize the context file, initialize the engine
    Init,

    /// Compute the change set and save it as a plan artifact
    Plan,

    /// Apply the saved plan (or auto-approve), then configure cluster access
    Apply,

    /// Tear down all managed infrastructure (asks for typed confirmation)
    Destroy,

    /// Show current outputs and a cost estimate
    Show,

    /// Configure local kubectl against the deployed cluster
    Kubectl,

    /// Show access URLs and commands
    Access,
}

impl Cli {
    /// Execute the selected command. With no command, prints help and
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the command fails; `main` turns it into a
    /// non-zero exit.
    pub async fn run(self) -> Result<()> {
        let Some(command) = self.command else {
            Self::command().print_long_help()?;
            return Ok(());
        };

        let out = OutputContext::new(self.no_color, self.quiet);
        let dir = context::deploy_dir();
        let tf = TerraformCliDriver::default_runner();
        let probe = SystemProbe::default_runner();
        let runner = TokioCommandRunner;

        match command {
            Command::Init => commands::init::run(&out, &probe, &tf, &dir).await,
            Command::Plan => commands::plan::run(&out, &probe, &tf, &dir, self.json).await,
            Command::Apply => commands::apply::run(&out, &probe, &tf, &runner, &dir).await,
            Command::Destroy => commands::destroy::run(&out, &tf, &dir).await,
            Command::Show => commands::show::run(&out, &tf, &dir, self.json).await,
            Command::Kubectl => commands::kubectl::run(&out, &tf, &runner, &dir).await,
            Command::Access => commands::access::run(&out, &tf, &dir).await,
        }
    }
}
