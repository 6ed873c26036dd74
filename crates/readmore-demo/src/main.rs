//! Headless walkthrough of the expandable text component.
//!
//! Builds a trimmed view, presses "Read more", lets the expand finish,
//! presses again to collapse, and logs each state change along with a
//! summary of the recorded draw list.
//!
//! ```text
//! RUST_LOG=debug cargo run -p readmore-demo -- path/to/font.ttf
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use readmore_engine::logging::{init_logging, LoggingConfig};
use readmore_engine::scene::{DrawCmd, DrawList};
use readmore_engine::time::FrameClock;
use readmore_ui::prelude::*;

const BODY: &str = "The lighthouse keeper wrote every evening, a line or two about the \
weather and the ships that passed. Over forty years the notebooks filled a shelf, then \
a cupboard, then the small room under the lamp. Nobody read them until the light was \
automated and the last keeper packed up, leaving the pages to the gulls and the damp.";

const VIEWPORT: Vec2 = Vec2::new(320.0, 480.0);
const TRIMMED_HEIGHT: f32 = 80.0;
const MAX_FRAMES: u32 = 600;

/// Counts completions so the frame loop knows when to press again.
struct LoggingDelegate {
    finished: Rc<Cell<u32>>,
}

impl ExpandableTextDelegate for LoggingDelegate {
    fn expand_finished(&mut self) {
        log::info!("delegate: expand finished");
        self.finished.set(self.finished.get() + 1);
    }

    fn collapse_finished(&mut self) {
        log::info!("delegate: collapse finished");
        self.finished.set(self.finished.get() + 1);
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut scene = UiScene::new();
    let font = match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(&path).with_context(|| format!("reading font {path}"))?;
            scene.load_font(&bytes).with_context(|| format!("parsing font {path}"))?
        }
        None => {
            log::warn!("no font given; text is measured with fallback line heights");
            FontId::from_index(0)
        }
    };

    let trimmed = SizeConstraint::fixed(TRIMMED_HEIGHT, LayoutPriority::HIGH);
    let extended = SizeConstraint::content(LayoutPriority::LOW);
    let finished = Rc::new(Cell::new(0));

    let ink = Color::from_srgb_u8(30, 30, 30, 255);
    let link = Color::from_srgb_u8(20, 90, 200, 255);
    let mut view = ExpandableTextView::new(Text::new(BODY, font, 14.0, ink), ExpandableTextConfig {
        text_inset: Edges::symmetric(6.0, 8.0),
        ..Default::default()
    })
    .toggle_control(
        Button::new(Text::new("Read more", font, 14.0, link))
            .background(Color::white())
            .padding_all(4.0),
    )
    .trimmed_constraint(Rc::clone(&trimmed))
    .extended_constraint(Rc::clone(&extended))
    .delegate(LoggingDelegate { finished: Rc::clone(&finished) });
    view.load(Rect::new(0.0, 0.0, VIEWPORT.x, TRIMMED_HEIGHT));

    let mut root: Element = view.into();
    let mut clock = FrameClock::new();
    let mut presses = 0;
    // Completions already reflected in a drawn frame.
    let mut settled = 0;
    let mut last_height = 0.0;

    for frame in 0..MAX_FRAMES {
        let ft = clock.tick();

        // Press once the view is idle and its resized frame has been drawn:
        // first to expand, then to collapse.
        let want_press = frame > 0 && presses < 2 && settled == presses;
        let input = UiInput {
            // Toggle sits in the bottom-right corner of the view.
            mouse_pos: Vec2::new(VIEWPORT.x - 1.0, last_height - 1.0),
            mouse_clicked: want_press,
            dt: ft.dt,
            ..Default::default()
        };
        if want_press {
            presses += 1;
            log::info!("frame {}: pressing toggle (press {presses})", ft.frame_index);
        }

        // Measure and paint see the state from before this frame's tick.
        let completed_before = finished.get();
        let list = scene.frame_ref(&mut root, VIEWPORT, &input);
        settled = completed_before;
        let height = content_bottom(list);
        if height != last_height {
            log::info!(
                "frame {}: height {last_height:.1} -> {height:.1} (trimmed {}, extended {})",
                ft.frame_index,
                trimmed.priority(),
                extended.priority(),
            );
            log_draw_list(list);
            last_height = height;
        }

        if finished.get() >= 2 {
            log::info!("done after {} frames", frame + 1);
            return Ok(());
        }
        std::thread::sleep(Duration::from_millis(16));
    }

    anyhow::bail!("toggle did not complete within {MAX_FRAMES} frames")
}

/// Bottom edge of the background fill, i.e. the view height.
fn content_bottom(list: &DrawList) -> f32 {
    list.items()
        .first()
        .map(|item| match &item.cmd {
            DrawCmd::Rect(r) => r.rect.max().y,
            DrawCmd::RoundedRect(r) => r.rect.max().y,
            DrawCmd::Text(t) => t.origin.y,
        })
        .unwrap_or(0.0)
}

fn log_draw_list(list: &DrawList) {
    let (mut rects, mut gradients, mut texts) = (0, 0, 0);
    for item in list.items() {
        match (&item.cmd, item.cmd.paint()) {
            (DrawCmd::Text(_), _) => texts += 1,
            (_, Some(Paint::LinearGradient(_))) => gradients += 1,
            _ => rects += 1,
        }
    }
    log::debug!("draw list: {rects} rects, {gradients} gradients, {texts} texts");
}
