use anyhow::Context;
use cubeprime::ResultCollection;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes every line of `results` to `path`, replacing any existing file.
pub fn write_results(path: &Path, results: &ResultCollection) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    results
        .write_to(BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Console line printed once the file is written.
pub fn summary(path: &Path, results: &ResultCollection) -> String {
    format!("done: {} lines → {}", results.len(), path.display())
}
