//! Example driving a bar with the system clock.
//!
//! Run with `RUST_LOG=tickbar=debug` to see estimator refreshes.

use color_eyre::Result;
use std::io::Write;
use std::thread;
use std::time::Duration;
use tickbar::ProgressBar;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut bar = ProgressBar::new(120.0, 40)?;
    let mut stdout = std::io::stdout();

    for step in 0..120 {
        // Vary the work size so the estimate has something to follow.
        if step % 3 == 0 {
            bar.add(0.5)?.add(0.5)?;
        } else {
            bar.add_one();
        }
        write!(stdout, "{}", bar.render())?;
        stdout.flush()?;
        thread::sleep(Duration::from_millis(100));
    }

    bar.print()?;
    println!("Done.");

    Ok(())
}
