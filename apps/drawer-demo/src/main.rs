mod map_screen;

use anyhow::{Context, Result};
use juka_drawer::DrawerConfig;
use map_screen::{Gesture, MapScreen};

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

/// `drawer-demo [CONTENT_HEIGHT]`: an optional natural height for the
/// drawer's content, which shrinks the half-expanded position when short.
fn parse_content_height() -> Result<Option<f32>> {
    let Some(arg) = std::env::args().nth(1) else {
        return Ok(None);
    };
    let height: f32 = arg
        .parse()
        .with_context(|| format!("content height must be a number, got {arg:?}"))?;
    Ok(Some(height))
}

fn main() -> Result<()> {
    init_logging();

    let config = DrawerConfig::builder()
        .heights(150.0, 300.0, 600.0)
        .build()
        .context("invalid drawer configuration")?;
    let content_height = parse_content_height()?;

    println!("=== Juka Drawer Demo ===");
    println!("Replays a scripted session against the map screen drawer.");
    println!("Set RUST_LOG=debug to see every pointer event.");
    println!();

    let mut screen = MapScreen::new(config, content_height);
    let session = [
        Gesture::TapHandle,
        Gesture::DragHandle {
            by: 90.0,
            duration_ms: 400,
        },
        Gesture::DragHandle {
            by: 20.0,
            duration_ms: 60,
        },
        Gesture::TapHandle,
        Gesture::DragHandle {
            by: -30.0,
            duration_ms: 600,
        },
        Gesture::TapContent,
    ];
    for gesture in session {
        screen
            .play(gesture)
            .with_context(|| format!("while playing {gesture:?}"))?;
    }

    println!("Final state: {:?}", screen.state());
    Ok(())
}
