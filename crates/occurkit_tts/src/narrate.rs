use std::fs;

use tracing::{error, info, warn};

use occurkit_io_fs::{ensure_dir, write_bytes_atomic};

use crate::report::ReportNarration;
use crate::spec::{EnumChunkFailurePolicy, NarrationError, SpecChunkError, SpecNarrationOptions};
use crate::synth::SpeechSynthesizer;
use crate::util::{derive_chunk_file_name, partition_words};

/// Narrate the input file chunk by chunk, sequentially.
///
/// Chunk `n` (1-based) is written to `<output_dir>/bloco_audio_<n>.mp3`.
/// Backend failures follow `options.rule_chunk_failure`; write failures
/// always stop the run.
pub fn run_narration<S: SpeechSynthesizer + ?Sized>(
    options: &SpecNarrationOptions,
    synthesizer: &S,
) -> Result<ReportNarration, NarrationError> {
    if options.window_size == 0 {
        return Err(NarrationError::InvalidWindowSize);
    }
    let c_text =
        fs::read_to_string(&options.path_file_input).map_err(|err| NarrationError::ReadInput {
            path: options.path_file_input.clone(),
            message: err.to_string(),
        })?;
    let l_chunks = partition_words(&c_text, options.window_size)?;

    let mut report = ReportNarration {
        cnt_chunks: l_chunks.len() as u64,
        ..Default::default()
    };
    if l_chunks.is_empty() {
        warn!(path = %options.path_file_input.display(), "[NARRATE] input has no words");
        return Ok(report);
    }
    ensure_dir(&options.path_dir_output)?;

    for (idx, c_chunk) in l_chunks.iter().enumerate() {
        let n_chunk = idx + 1;
        let v_audio = match synthesizer.synthesize(c_chunk, &options.lang, &options.tld) {
            Ok(v_audio) => v_audio,
            Err(message) => match options.rule_chunk_failure {
                EnumChunkFailurePolicy::Abort => {
                    error!(chunk = n_chunk, %message, "[NARRATE] synthesis failed, aborting");
                    return Err(NarrationError::Synthesis {
                        index: n_chunk,
                        message,
                    });
                }
                EnumChunkFailurePolicy::Skip => {
                    warn!(chunk = n_chunk, %message, "[NARRATE] synthesis failed, skipping");
                    report.cnt_skipped += 1;
                    report.errors.push(SpecChunkError {
                        index: n_chunk,
                        exception: message,
                    });
                    continue;
                }
            },
        };

        let path_file = options
            .path_dir_output
            .join(derive_chunk_file_name(n_chunk));
        write_bytes_atomic(&path_file, &v_audio)?;
        info!(path = %path_file.display(), chunk = n_chunk, "[NARRATE] file saved");

        report.cnt_written += 1;
        report.paths_written.push(path_file);
    }

    Ok(report)
}
