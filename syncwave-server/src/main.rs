use crate::commandline::Commandline;
use crate::error::SyncwaveError;
use clap::Parser;

mod commandline;
mod configuration;
mod context;
mod error;
mod room;
mod server;
mod store;
mod utils {
	pub mod time_source;
}

#[tokio::main]
async fn main() -> Result<(), SyncwaveError> {
	Commandline::parse().run().await
}
