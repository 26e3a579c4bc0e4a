//! Narrate a text file into numbered MP3 chunks.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use occurkit_tts::conf::{C_DIR_OUTPUT_DEFAULT, C_FILE_INPUT_DEFAULT, N_WINDOW_SIZE_DEFAULT};
use occurkit_tts::spec::parse_rule_chunk_failure;
use occurkit_tts::{EnumChunkFailurePolicy, GoogleTranslateTts, SpecNarrationOptions, run_narration};

#[derive(Debug, Parser)]
#[command(name = "occurkit_narrate", about = "Split a transcript into spoken MP3 chunks")]
struct Args {
    /// UTF-8 text file to narrate.
    #[arg(long, default_value = C_FILE_INPUT_DEFAULT)]
    input: PathBuf,

    /// Directory receiving bloco_audio_<n>.mp3 files.
    #[arg(long, default_value = C_DIR_OUTPUT_DEFAULT)]
    output_dir: PathBuf,

    /// Words per chunk.
    #[arg(long, default_value_t = N_WINDOW_SIZE_DEFAULT)]
    window_size: usize,

    /// Behavior when one chunk fails to synthesize: abort | skip.
    #[arg(long, default_value = "abort", value_parser = parse_rule_chunk_failure)]
    on_chunk_error: EnumChunkFailurePolicy,

    /// Log filter directive (e.g. `info`, `occurkit_tts=debug`).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Append logs to this file instead of stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = occurkit_log::init_tracing(&args.log_level, args.log_file.as_deref()) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let options = SpecNarrationOptions {
        path_file_input: args.input,
        path_dir_output: args.output_dir,
        window_size: args.window_size,
        rule_chunk_failure: args.on_chunk_error,
        ..Default::default()
    };
    match run_narration(&options, &GoogleTranslateTts::default()) {
        Ok(report) => {
            println!("{report}");
            for chunk_error in &report.errors {
                eprintln!("chunk {}: {}", chunk_error.index, chunk_error.exception);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
