//! pluck - live playback of the plucked-string engine
//!
//! Run with: cargo run --bin pluck

mod app;
mod sequencer;

use app::Pluck;
use sequencer::Arpeggio;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    // A minor, then F major, then C and G, two octaves each
    let arpeggio = Arpeggio::new(&[
        57, 60, 64, 69, 72, 76, 53, 57, 60, 65, 69, 72, 48, 52, 55, 60, 64, 67, 55, 59, 62, 67,
        71, 74,
    ]);

    Pluck::new().bpm(132.0).steps_per_beat(4).run(arpeggio)
}
