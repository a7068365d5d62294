//! A headless stand-in for the map screen: a drawer over a map with a
//! floating locate button, driven in real time.

use std::thread;
use std::time::Duration;

use anyhow::{ensure, Result};
use juka_drawer::{DrawerConfig, DrawerController, DrawerState, FloatingOverlay};
use juka_foundation::{GestureClock, PointerEvent};
use juka_testing::drag_script;

const FRAME: Duration = Duration::from_millis(16);
const SETTLE_TIMEOUT_MS: i64 = 2_000;

/// A scripted interaction, positioned relative to the drawer's handle.
#[derive(Clone, Copy, Debug)]
pub enum Gesture {
    TapHandle,
    TapContent,
    /// Press on the handle and drag by `by` px (positive is down).
    DragHandle { by: f32, duration_ms: i64 },
}

pub struct MapScreen {
    drawer: DrawerController,
    overlay: FloatingOverlay,
    clock: GestureClock,
    last_state: DrawerState,
}

impl MapScreen {
    pub fn new(config: DrawerConfig, content_height: Option<f32>) -> Self {
        let mut drawer = DrawerController::new(config, DrawerState::HalfExpanded);
        if let Some(height) = content_height {
            drawer.set_measured_content_height(height);
        }
        let last_state = drawer.state();
        Self {
            drawer,
            overlay: FloatingOverlay::new(),
            clock: GestureClock::new(),
            last_state,
        }
    }

    pub fn state(&self) -> DrawerState {
        self.drawer.state()
    }

    pub fn play(&mut self, gesture: Gesture) -> Result<()> {
        let handle_y = self.drawer.offset() + self.drawer.config().handle_allowance() / 2.0;
        let now = self.clock.now_ms();
        let script = match gesture {
            Gesture::TapHandle => drag_script(handle_y, handle_y, now, 60, 1),
            Gesture::TapContent => {
                let content_top = self.drawer.offset() + self.drawer.config().handle_allowance();
                let y = (content_top + self.drawer.config().max_height()) / 2.0;
                drag_script(y, y, now, 60, 1)
            }
            Gesture::DragHandle { by, duration_ms } => {
                let steps = (duration_ms / FRAME.as_millis() as i64).max(2) as usize;
                drag_script(handle_y, handle_y + by, now, duration_ms, steps)
            }
        };

        log::info!("playing {:?}", gesture);
        for event in &script {
            self.wait_until(event.time_ms);
            self.dispatch(event);
        }
        self.settle()
    }

    fn dispatch(&mut self, event: &PointerEvent) {
        let consumed = self.drawer.on_pointer_event(event);
        log::debug!(
            "{:?} at y={:.0} t={}ms consumed={}",
            event.kind,
            event.position.y,
            event.time_ms,
            consumed
        );
    }

    /// Render frames until `time_ms` on the gesture clock.
    fn wait_until(&mut self, time_ms: i64) {
        loop {
            let remaining = time_ms - self.clock.now_ms();
            if remaining <= 0 {
                return;
            }
            self.render_frame();
            let remaining = Duration::from_millis(remaining as u64);
            thread::sleep(remaining.min(FRAME));
        }
    }

    fn settle(&mut self) -> Result<()> {
        let deadline = self.clock.now_ms() + SETTLE_TIMEOUT_MS;
        while self.drawer.is_animating() {
            ensure!(
                self.clock.now_ms() < deadline,
                "drawer did not settle within {}ms (offset {:.1})",
                SETTLE_TIMEOUT_MS,
                self.drawer.offset()
            );
            self.render_frame();
            thread::sleep(FRAME);
        }
        self.render_frame();
        log::info!(
            "settled {:?} at offset {:.1}",
            self.drawer.state(),
            self.drawer.offset()
        );
        Ok(())
    }

    fn render_frame(&mut self) {
        let offset = self.drawer.on_frame(self.clock.now_nanos());
        let state = self.drawer.state();
        if state != self.last_state {
            let fab = self.overlay.placement(&self.drawer);
            log::info!(
                "drawer {:?} -> {:?}; locate button {} at bottom padding {:.0}",
                self.last_state,
                state,
                if fab.visible { "shown" } else { "hidden" },
                fab.bottom_padding
            );
            self.last_state = state;
        }
        log::trace!(
            "frame offset={:.1} visible_height={:.1}",
            offset,
            self.drawer.visible_height()
        );
    }
}
