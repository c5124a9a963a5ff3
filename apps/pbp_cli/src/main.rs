mod config;

use crate::config::Config;
use anyhow::{Context, Result};
use clap::Parser;
use pbp_parser::{parse_play, ParsedPlay, PlayContext, PlayType};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use tracing::{info, warn, Subscriber};
use tracing_subscriber::{
	filter::EnvFilter,
	fmt::{format::JsonFields, MakeWriter},
	util::SubscriberInitExt,
	Layer,
};

/// One CSV row. Only `detail` is required.
#[derive(Debug, Deserialize)]
struct PlayRow {
	detail: String,
	#[serde(default)]
	game_id: Option<String>,
	#[serde(default)]
	season: Option<String>,
	#[serde(default)]
	week: Option<String>,
	#[serde(default)]
	down: Option<String>,
	#[serde(default)]
	home_team: Option<String>,
	#[serde(default)]
	away_team: Option<String>,
}

impl PlayRow {
	fn into_parts(self) -> (String, PlayContext) {
		let context = PlayContext {
			game_id: self.game_id,
			season: self.season,
			week: self.week,
			down: self.down,
			home_team: self.home_team,
			away_team: self.away_team,
		};
		(self.detail, context)
	}
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
	rows: usize,
	classified: usize,
	unclassified: usize,
	by_type: BTreeMap<PlayType, usize>,
}

fn main() -> Result<()> {
	dotenv::dotenv().ok();
	let config = Config::parse();

	let _ = init_tracing(&config);

	let input = open_input(&config.input_file)?;
	let output = open_output(&config.output_file)?;
	let tally = classify_rows(input, output, config.skip_unclassified)?;

	info!(rows = tally.rows, classified = tally.classified, unclassified = tally.unclassified, "Finished parsing plays");
	for (play_type, count) in &tally.by_type {
		info!(%play_type, count, "Plays by type");
	}
	Ok(())
}

fn open_input(path: &str) -> Result<Box<dyn Read>> {
	if path == "-" {
		return Ok(Box::new(io::stdin().lock()));
	}
	let file = File::open(path).with_context(|| format!("Failed to open input file {path}"))?;
	Ok(Box::new(file))
}

fn open_output(path: &str) -> Result<Box<dyn Write>> {
	if path == "-" {
		return Ok(Box::new(BufWriter::new(io::stdout().lock())));
	}
	let file = File::create(path).with_context(|| format!("Failed to create output file {path}"))?;
	Ok(Box::new(BufWriter::new(file)))
}

/// Parses every row of `input` and writes one JSON record per line to `output`.
/// Unclassified rows are logged and never stop the batch. A normalizer error does.
fn classify_rows<R: Read, W: Write>(input: R, mut output: W, skip_unclassified: bool) -> Result<Tally> {
	let mut reader = csv::Reader::from_reader(input);
	let mut tally = Tally::default();

	for (index, row) in reader.deserialize::<PlayRow>().enumerate() {
		let row = row.with_context(|| format!("Failed to read CSV row {}", index + 1))?;
		let (detail, context) = row.into_parts();
		tally.rows += 1;

		let parsed = parse_play(&detail, context).with_context(|| format!("Failed to parse row {}: {detail}", index + 1))?;
		match &parsed {
			ParsedPlay::Classified(record) => {
				tally.classified += 1;
				*tally.by_type.entry(record.play_type()).or_default() += 1;
			}
			ParsedPlay::Unclassified { description, .. } => {
				tally.unclassified += 1;
				warn!(row = index + 1, %description, "Unclassified play");
				if skip_unclassified {
					continue;
				}
			}
		}

		serde_json::to_writer(&mut output, &parsed).context("Failed to serialize play")?;
		writeln!(output).context("Failed to write output")?;
	}

	output.flush().context("Failed to flush output")?;
	Ok(tally)
}

fn init_tracing(config: &Config) -> Option<()> {
	subscriber(config, io::stderr)?.init();
	Some(())
}

// Logs go to `writer`; stdout is reserved for records.
fn subscriber<W>(config: &Config, writer: W) -> Option<impl Subscriber + Send + Sync + 'static>
where
	W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
	use std::str::FromStr;
	use tracing_subscriber::layer::SubscriberExt;

	let filter = EnvFilter::from_str(config.rust_log.as_deref()?).ok()?;

	Some(tracing_subscriber::registry().with(if config.log_json {
		Box::new(
			tracing_subscriber::fmt::layer()
				.with_writer(writer)
				.fmt_fields(JsonFields::default())
				.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
				.with_filter(filter),
		) as Box<dyn Layer<_> + Send + Sync>
	} else {
		Box::new(
			tracing_subscriber::fmt::layer()
				.with_writer(writer)
				.event_format(tracing_subscriber::fmt::format().pretty())
				.with_filter(filter),
		)
	}))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::{Arc, Mutex};

	const CSV: &str = r#"game_id,season,week,detail
401220225,2020,3,David Montgomery right tackle for 15 yards (tackle by Aaron Donald)
401220225,2020,3,Justin Fields spiked the ball
401220225,2020,3,Two-Point Conversion Attempt
401220225,2020,3,"Robbie Gould kicks off 65 yards, touchback"
"#;

	fn lines(output: &[u8]) -> Vec<serde_json::Value> {
		std::str::from_utf8(output)
			.unwrap()
			.lines()
			.map(|line| serde_json::from_str(line).unwrap())
			.collect()
	}

	#[test]
	fn test_classify_rows() {
		let mut output = Vec::new();
		let tally = classify_rows(CSV.as_bytes(), &mut output, false).unwrap();

		assert_eq!(tally.rows, 4);
		assert_eq!(tally.classified, 3);
		assert_eq!(tally.unclassified, 1);
		assert_eq!(
			tally.by_type,
			BTreeMap::from([(PlayType::Run, 1), (PlayType::Kickoff, 1), (PlayType::GameManagement, 1)])
		);

		let records = lines(&output);
		assert_eq!(records.len(), 4);
		assert_eq!(records[0]["play_type"], "RUN");
		assert_eq!(records[0]["context"]["game_id"], "401220225");
		assert_eq!(records[0]["context"]["down"], serde_json::Value::Null);
		assert_eq!(records[2]["status"], "unclassified");
		assert_eq!(records[3]["kick_type"], "TOUCHBACK");
	}

	#[test]
	fn test_skip_unclassified() {
		let mut output = Vec::new();
		let tally = classify_rows(CSV.as_bytes(), &mut output, true).unwrap();

		assert_eq!(tally.unclassified, 1);
		let records = lines(&output);
		assert_eq!(records.len(), 3);
		assert!(records.iter().all(|record| record["status"] == "classified"));
	}

	#[derive(Clone, Default)]
	struct LogBuffer(Arc<Mutex<Vec<u8>>>);

	impl Write for LogBuffer {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.0.lock().unwrap().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	fn config(log_json: bool) -> Config {
		Config {
			input_file: "-".to_string(),
			output_file: "-".to_string(),
			log_json,
			rust_log: Some("debug".to_string()),
			skip_unclassified: false,
		}
	}

	#[test]
	fn test_logs_stay_out_of_the_records() {
		for log_json in [false, true] {
			let logs = LogBuffer::default();
			let writer = logs.clone();
			let subscriber = subscriber(&config(log_json), move || writer.clone()).unwrap();

			let mut output = Vec::new();
			let tally = tracing::subscriber::with_default(subscriber, || classify_rows(CSV.as_bytes(), &mut output, false)).unwrap();

			assert_eq!(lines(&output).len(), tally.rows);
			let logs = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
			assert!(logs.contains("Unclassified play"), "{logs}");
			assert!(logs.contains("kickoff_touchback"), "{logs}");
		}
	}

	#[test]
	fn test_no_subscriber_without_rust_log() {
		let config = Config {
			rust_log: None,
			..config(false)
		};
		assert!(subscriber(&config, io::stderr).is_none());
	}

	#[test]
	fn test_missing_detail_column_fails() {
		let mut output = Vec::new();
		assert!(classify_rows("game_id,season\n1,2020\n".as_bytes(), &mut output, false).is_err());
		assert!(output.is_empty());
	}
}
