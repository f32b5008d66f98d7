use clap::{Arg, ArgAction, Command};
use std::error::Error;
use std::path::PathBuf;

use remotr::config::Config;
use remotr::logging;
use remotr::serve;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
	let matches = Command::new("RemotR")
		.version("0.1.0")
		.about("Remote object synchronization server for server-driven UIs")
		.subcommand_required(true)
		.arg(
			Arg::new("config")
				.short('c')
				.long("config")
				.value_name("FILE")
				.help("Config file (TOML)"),
		)
		.arg(
			Arg::new("profile")
				.short('p')
				.long("profile")
				.value_name("PROFILE")
				.help("Profile"),
		)
		.subcommand(
			Command::new("serve")
				.about("Run the UI synchronization server")
				.arg(
					Arg::new("listen")
						.short('l')
						.long("listen")
						.value_name("ADDR")
						.help("TCP listen address"),
				)
				.arg(
					Arg::new("stdio")
						.long("stdio")
						.action(ArgAction::SetTrue)
						.help("Serve a single session over stdio"),
				),
		)
		.subcommand(Command::new("check-config").about("Print the effective configuration"))
		.get_matches();

	let config_file = matches.get_one::<String>("config").map(PathBuf::from);
	let mut config = Config::load(config_file.as_deref())?;
	if let Some(profile) = matches.get_one::<String>("profile") {
		config.profile = profile.clone();
	}

	match matches.subcommand() {
		Some(("serve", sub)) => {
			if let Some(listen) = sub.get_one::<String>("listen") {
				config.listen = listen.clone();
			}
			if sub.get_flag("stdio") {
				config.use_stdio = true;
			}
			config.validate()?;
			logging::init_tracing(&config.log_filter);
			serve::run(config).await?;
		}
		Some(("check-config", _)) => {
			println!("{}", toml::to_string_pretty(&config)?);
		}
		_ => unreachable!(),
	}

	Ok(())
}

// vim: ts=4
