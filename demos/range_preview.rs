//! Print a unit's movement and ability range on the bundled level.
//!
//! Run: cargo run --bin range-preview -- [x y [moves [reach [foot|uniform]]]]
//!
//! Set `RUST_LOG=debug` to see search summaries.

use tacgrid_demos::{PreviewConfig, load_bundled, preview, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cfg = PreviewConfig::from_args(&args)?;
    let (table, board) = load_bundled()?;
    let p = preview(&board, &cfg)?;

    log::info!(
        "{} tiles in movement range, {} with reach {}",
        p.movement.len(),
        p.extended.len(),
        cfg.reach
    );
    print!("{}", render(&board, &table, cfg.start, &p));
    Ok(())
}
