#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tvgbind::bind::{GeneratorConfig, generate, load_model};

#[derive(Parser)]
#[command(name = "tvgbind", version, about = "Generate C# interop bindings from the ThorVG C header")]
struct Cli {
	/// C header to read.
	#[arg(long)]
	header: Option<PathBuf>,
	/// Directory that receives the generated files.
	#[arg(long)]
	output: Option<PathBuf>,
	/// JSON file with output naming overrides.
	#[arg(long)]
	config: Option<PathBuf>,
	/// Namespace for enums and structs.
	#[arg(long)]
	namespace: Option<String>,
	/// Native library name used by the entry points.
	#[arg(long)]
	library: Option<String>,
	/// Print a JSON run report.
	#[arg(long)]
	json: bool,
	/// Print the parsed header model as JSON and exit.
	#[arg(long = "dump-model")]
	dump_model: bool,
	/// Log parse details.
	#[arg(short, long)]
	verbose: bool,
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> tvgbind::bind::Result<()> {
	if std::env::args_os().len() <= 1 {
		Cli::command().print_help()?;
		return Ok(());
	}

	let cli = Cli::parse();
	init_logging(cli.verbose);

	if cli.dump_model {
		let Some(header) = cli.header else {
			eprintln!("missing required argument: --header");
			return Ok(());
		};
		let model = load_model(&header)?;
		println!("{}", serde_json::to_string_pretty(&model)?);
		return Ok(());
	}

	let (Some(header), Some(output)) = (cli.header, cli.output) else {
		eprintln!("missing required arguments: --header and --output");
		return Ok(());
	};

	let mut config = match &cli.config {
		Some(path) => GeneratorConfig::load(path)?,
		None => GeneratorConfig::default(),
	};
	if let Some(namespace) = cli.namespace {
		config.native_namespace = format!("{namespace}.Native");
		config.namespace = namespace;
	}
	if let Some(library) = cli.library {
		config.library_name = library;
	}

	let report = generate(&header, &output, &config)?;
	if cli.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("header: {}", report.header.display());
	println!("output: {}", report.output.display());
	println!("enums: {}", report.enums);
	println!("structs: {}", report.structs);
	println!("handles: {}", report.handles);
	println!("functions: {}", report.functions);
	for path in &report.files {
		println!("wrote: {}", path.display());
	}
	Ok(())
}

fn init_logging(verbose: bool) {
	let default_filter = if verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
		.format_timestamp(None)
		.init();
}
