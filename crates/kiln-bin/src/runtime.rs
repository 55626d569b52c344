//! Single-threaded editor loop: poll -> dispatch -> refresh view -> render.

use anyhow::Result;
use core_actions::handle_key;
use core_events::InputEvent;
use core_input::InputSource;
use core_model::EditorModel;
use core_render::RenderEngine;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Quit,
}

pub(crate) struct EditorRuntime<I, W> {
    model: EditorModel,
    input: I,
    out: W,
    render_engine: RenderEngine,
    poll_timeout: Duration,
}

impl<I: InputSource, W: Write> EditorRuntime<I, W> {
    pub(crate) fn new(model: EditorModel, input: I, out: W, poll_timeout: Duration) -> Self {
        Self {
            model,
            input,
            out,
            render_engine: RenderEngine::new(),
            poll_timeout,
        }
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        let span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter = span.enter();

        self.render()?;
        while self.step()? == LoopControl::Continue {}
        debug!(
            target: "runtime",
            frames = self.render_engine.frames_rendered(),
            "loop_exit"
        );
        Ok(())
    }

    /// One iteration. Redraws after every handled event and when the status message expires.
    pub(crate) fn step(&mut self) -> Result<LoopControl> {
        let event = self.input.poll_event(self.poll_timeout)?;
        let expired = self.model.state_mut().tick_ephemeral();
        let redraw = match event {
            Some(InputEvent::Key(key)) => {
                let result = handle_key(&mut self.model, &key);
                if result.quit {
                    debug!(target: "runtime", key = %key, "quit_requested");
                    return Ok(LoopControl::Quit);
                }
                trace!(target: "runtime", key = %key, dirty = result.dirty, "key_handled");
                true
            }
            Some(InputEvent::Resize(cols, rows)) => {
                debug!(target: "runtime", cols, rows, "resize");
                self.model.resize(cols, rows);
                true
            }
            None => expired,
        };
        if redraw {
            self.render()?;
        }
        Ok(LoopControl::Continue)
    }

    fn render(&mut self) -> Result<()> {
        self.model.refresh_view();
        self.render_engine
            .render(&self.model, Instant::now(), &mut self.out)
    }

    #[cfg(test)]
    fn model(&self) -> &EditorModel {
        &self.model
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{KeyCode, KeyEvent};
    use core_input::ScriptedInput;
    use core_model::View;
    use core_state::EditorState;
    use core_text::Document;

    fn key(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::plain(KeyCode::Char(c)))
    }

    fn runtime(events: Vec<InputEvent>) -> EditorRuntime<ScriptedInput, Vec<u8>> {
        let model = EditorModel::new(EditorState::new(Document::new(8)), View::for_terminal(100, 10));
        EditorRuntime::new(
            model,
            ScriptedInput::new(events),
            Vec::new(),
            Duration::from_millis(1),
        )
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn typed_text_reaches_the_frame_and_quit_ends_the_loop() {
        let mut rt = runtime(vec![
            key('h'),
            key('i'),
            InputEvent::Key(KeyEvent::ctrl('q')),
            InputEvent::Key(KeyEvent::ctrl('q')),
            InputEvent::Key(KeyEvent::ctrl('q')),
            InputEvent::Key(KeyEvent::ctrl('q')),
        ]);
        rt.run().unwrap();
        assert_eq!(rt.model().document().row(0).unwrap().raw(), b"hi");
        assert!(contains(rt.output(), b"[No Name] - 1 lines (modified)"));
        assert!(contains(rt.output(), b"Press Ctrl-Q 1 more times to quit."));
    }

    #[test]
    fn clean_buffer_quits_on_first_ctrl_q() {
        let mut rt = runtime(vec![InputEvent::Key(KeyEvent::ctrl('q'))]);
        assert_eq!(rt.step().unwrap(), LoopControl::Quit);
    }

    #[test]
    fn resize_updates_viewport() {
        let mut rt = runtime(vec![InputEvent::Resize(100, 30)]);
        assert_eq!(rt.step().unwrap(), LoopControl::Continue);
        assert_eq!(rt.model().view().viewport.rows_visible, 28);
        assert_eq!(rt.model().view().viewport.cols_visible, 100);
    }

    #[test]
    fn idle_poll_without_expiry_does_not_redraw() {
        let mut rt = runtime(Vec::new());
        assert_eq!(rt.step().unwrap(), LoopControl::Continue);
        assert!(rt.output().is_empty());
    }
}
