//! HVIF icon archive converter CLI
//!
//! Converts Icon-O-Matic's authoring archive format into the compact
//! binary HVIF flat icon format (spec.md §6), writing the result to a
//! file, to a target's icon attribute, or (by default) back onto each
//! input as an extended attribute.
//!
//! # Usage
//!
//! ```bash
//! # Batch mode: write each input's flat blob to its own BEOS:ICON attribute
//! cargo run --example hvif_cli -- icon1.iom icon2.iom
//!
//! # Convert a single archive to a standalone .hvif file
//! cargo run --example hvif_cli -- -o app.hvif app.iom
//!
//! # Write to a different file's attribute, under a custom attribute name
//! cargo run --example hvif_cli -- -a MyApp --attr-name VICN app.iom
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hvif_rs::prelude::*;
use hvif_rs::hvif_vfs::attr::{AttributeWriter, VfsError, XattrWriter, VECTOR_ICON_TYPE_TAG};
use hvif_rs::hvif_vfs::io::{read_bytes, write_bytes};

/// Maximum number of input files accepted in one invocation (spec.md §6).
const MAX_INPUT_FILES: usize = 2048;

/// Default attribute name for batch mode and `-a` (spec.md §6).
const DEFAULT_ATTR_NAME: &str = "BEOS:ICON";

#[derive(Parser)]
#[command(name = "hvif", author, version, about = "Convert icon archives to the HVIF flat icon format", long_about = None)]
struct Cli {
	/// Input archive file(s) to convert
	#[arg(value_name = "FILE")]
	files: Vec<PathBuf>,

	/// Write the flat blob to PATH (requires exactly one input file)
	#[arg(short = 'o', value_name = "PATH")]
	output: Option<PathBuf>,

	/// Write the flat blob to TARGET's icon attribute (requires exactly one input file)
	#[arg(short = 'a', value_name = "TARGET")]
	attr_target: Option<PathBuf>,

	/// Attribute name to use for `-a` and for default batch mode
	#[arg(long = "attr-name", default_value = DEFAULT_ATTR_NAME, value_name = "NAME")]
	attr_name: String,

	/// Show verbose output
	#[arg(short = 'v', long = "verbose")]
	verbose: bool,
}

fn import_and_encode(path: &std::path::Path, verbose: bool) -> Result<Vec<u8>, String> {
	let raw = read_bytes(path).map_err(|e| e.to_string())?;
	let archive = Archive::from_bytes(&raw).map_err(|e| e.to_string())?;
	let (icon, warnings) = import_icon(&archive).map_err(|e| e.to_string())?;

	if verbose {
		for warning in &warnings {
			log::warn!("{warning}");
		}
		log::info!(
			"{}: {} styles, {} paths, {} shapes",
			path.display(),
			icon.styles.len(),
			icon.paths.len(),
			icon.shapes.len()
		);
	}

	encode_icon(&icon).map_err(|e| e.to_string())
}

fn write_attr_to(target: &std::path::Path, attr_name: &str, bytes: &[u8]) -> Result<(), String> {
	XattrWriter.write_attr(target, attr_name, VECTOR_ICON_TYPE_TAG, bytes).map_err(|e| match e {
		VfsError::AttributesUnsupported => {
			"extended attributes are not supported on this platform".to_string()
		}
		other => other.to_string(),
	})
}

fn process_single(input: &std::path::Path, output: Option<&std::path::Path>, attr_target: Option<&std::path::Path>, attr_name: &str, verbose: bool) -> u8 {
	if verbose {
		println!("Processing: {}", input.display());
	}

	let bytes = match import_and_encode(input, verbose) {
		Ok(b) => b,
		Err(e) => {
			eprintln!("Error: failed to import '{}': {e}", input.display());
			return 1;
		}
	};

	if let Some(output) = output {
		if verbose {
			println!("  Writing to: {}", output.display());
		}
		if let Err(e) = write_bytes(output, &bytes) {
			eprintln!("Error: failed to write '{}': {e}", output.display());
			return 1;
		}
	} else if let Some(target) = attr_target {
		if verbose {
			println!("  Writing attribute '{attr_name}' to: {}", target.display());
		}
		if let Err(e) = write_attr_to(target, attr_name, &bytes) {
			eprintln!("Error: failed to write attribute to '{}': {e}", target.display());
			return 1;
		}
	}

	0
}

fn process_batch(files: &[PathBuf], attr_name: &str, verbose: bool) -> u8 {
	let mut succeeded = 0usize;
	let mut failed = 0usize;

	for (i, path) in files.iter().enumerate() {
		if verbose {
			println!("Processing [{}/{}]: {}", i + 1, files.len(), path.display());
		}

		let bytes = match import_and_encode(path, verbose) {
			Ok(b) => b,
			Err(e) => {
				if verbose {
					eprintln!("  Failed to import: {e}");
				}
				failed += 1;
				continue;
			}
		};

		if let Err(e) = write_attr_to(path, attr_name, &bytes) {
			if verbose {
				eprintln!("  Failed to write attribute: {e}");
			}
			failed += 1;
			continue;
		}

		if verbose {
			println!("  Done");
		}
		succeeded += 1;
	}

	if files.len() > 1 || failed > 0 {
		println!("\nProcessed {} file(s): {succeeded} succeeded, {failed} failed", files.len());
	}

	u8::from(failed > 0)
}

fn run() -> u8 {
	let mut cli = Cli::parse();

	if cli.files.is_empty() {
		eprintln!("Error: No input file(s) specified\n");
		return 1;
	}

	if cli.files.len() > MAX_INPUT_FILES {
		eprintln!("Warning: Maximum {MAX_INPUT_FILES} files supported, ignoring the rest");
		cli.files.truncate(MAX_INPUT_FILES);
	}

	if cli.output.is_some() && cli.attr_target.is_some() {
		eprintln!("Error: Cannot use both -o and -a");
		return 1;
	}

	if (cli.output.is_some() || cli.attr_target.is_some()) && cli.files.len() != 1 {
		eprintln!("Error: -o and -a require exactly one input file");
		return 1;
	}

	if cli.output.is_some() || cli.attr_target.is_some() {
		process_single(&cli.files[0], cli.output.as_deref(), cli.attr_target.as_deref(), &cli.attr_name, cli.verbose)
	} else {
		process_batch(&cli.files, &cli.attr_name, cli.verbose)
	}
}

fn main() -> ExitCode {
	env_logger::init();
	ExitCode::from(run())
}
