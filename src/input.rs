use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Buffered, seekable input file.
pub type InputReader = BufReader<File>;

/// Opens a stream for decoding. Seeking and the seek table need random
/// access, so stdin is not accepted.
pub fn open_input<P: AsRef<Path>>(input_path: P) -> Result<InputReader> {
    let path = input_path.as_ref();
    if path.as_os_str() == "-" {
        bail!("TTA decoding needs a seekable input file, stdin is not supported");
    }

    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    Ok(BufReader::with_capacity(64 * 1024, file))
}
