use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
	/// CSV with a `detail` column, or `-` for stdin
	#[arg(long, env = "PBP_INPUT", default_value = "-")]
	pub input_file: String,

	/// JSON lines output, or `-` for stdout
	#[arg(long, env = "PBP_OUTPUT", default_value = "-")]
	pub output_file: String,

	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,

	/// Log level
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,

	/// Leave rows no grammar recognises out of the output
	#[arg(long, env = "PBP_SKIP_UNCLASSIFIED", default_value = "false")]
	pub skip_unclassified: bool,
}
