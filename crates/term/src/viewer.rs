//! Full-screen track viewer.
//!
//! Rotations only affect the preview; the caller's track is not modified.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::Track;
use crate::fb::FrameBuffer;
use crate::keys::{handle_key_event, ViewerAction};
use crate::renderer::TerminalRenderer;
use crate::track_view::{TrackView, Viewport};

/// Show `track` until the user quits.
pub fn run_viewer(track: &Track) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = view_loop(&mut term, track.clone());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn view_loop(term: &mut TerminalRenderer, mut track: Track) -> Result<()> {
    let view = TrackView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&track, Viewport::new(w, h), &mut fb);
        fb.put_str(0, h.saturating_sub(1), "r/R rotate  q quit", Default::default());
        term.draw(&fb)?;

        // Resize events just fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match handle_key_event(key) {
                Some(ViewerAction::Quit) => return Ok(()),
                Some(ViewerAction::RotateCw) => track.rotate(1),
                Some(ViewerAction::RotateCcw) => track.rotate(-1),
                None => {}
            }
        }
    }
}

/// Print `track` once at the cursor, sized to fit it.
pub fn print_track(track: &Track) -> Result<()> {
    let view = TrackView::default().with_anchor_y(crate::track_view::AnchorY::Top);
    let fb = view.render(track, view.required_size(track));
    TerminalRenderer::new().print_inline(&fb)
}
