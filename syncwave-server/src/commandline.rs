use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::error::SyncwaveError;
use crate::server::run_server;
use crate::utils::time_source::TimeSource;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[clap(version, about = "Backend for listening rooms that keep playback in sync.")]
pub struct Commandline {
	/// Optional TOML configuration file. PORT, DATABASE_URL and DATABASE_NAME override its values.
	#[clap(short = 'c', long = "config-file")]
	pub configuration_file_path: Option<PathBuf>,
	#[clap(subcommand)]
	pub command: Option<BaseCommand>,
}

#[derive(clap::Subcommand, Default)]
pub enum BaseCommand {
	/// Run the syncwave server
	#[default]
	Run,
	/// Print the configuration
	Configuration,
}

impl Commandline {
	pub async fn run(self) -> Result<(), SyncwaveError> {
		let configuration = Configuration::load(self.configuration_file_path.as_deref())?;

		let base_command = self.command.unwrap_or_default();
		match base_command {
			BaseCommand::Run => {
				tracing_subscriber::fmt()
					.with_env_filter(EnvFilter::try_new(&configuration.log_filters)?)
					.init();

				let application_context = ApplicationContext::new(configuration, TimeSource::default()).await;
				info!(
					"Starting server. Rooms are served at 'http://{}/api/rooms'.",
					application_context.configuration.address
				);
				run_server(application_context).await?;
			}
			BaseCommand::Configuration => println!("{configuration:#?}"),
		}
		Ok(())
	}
}
