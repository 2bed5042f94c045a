use std::io::{self, BufWriter, Write};

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    pagetrace::logging::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    pagetrace::run(stdin.lock(), &mut out).context("failed to coalesce trace")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
