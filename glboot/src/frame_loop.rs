use std::io::{self, Stdout, Write};

use crate::input::{Action, InputEvent, KeyBindings};

/// Printed on every close request coming from a key binding.
pub const CLOSE_ACTION_LINE: &str = "\t>>> ACTION >>> Close window!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closing,
    Terminated,
}

/// What one iteration of the loop drives. The SDL window implements this in
/// `lib.rs`; tests script it.
pub trait FrameTarget {
    /// Clear and issue the frame's draw calls.
    fn render(&mut self);
    /// Swap buffers.
    fn present(&mut self);
    /// Append every pending event to `events`.
    fn poll_events(&mut self, events: &mut Vec<InputEvent>);
    /// Every event is offered here after the loop has looked at it.
    #[allow(unused)]
    fn event(&mut self, event: &InputEvent) {}
}

/// Blocking render loop: `Running` until the close flag is set, then
/// `Closing`, then `Terminated` once [FrameLoop::run] returns.
///
/// `ACTION` lines go to `out`, stdout unless built with [FrameLoop::with_output].
#[derive(Debug)]
pub struct FrameLoop<W: Write = Stdout> {
    state: LoopState,
    bindings: KeyBindings,
    frames: u64,
    out: W,
}

impl FrameLoop {
    pub fn new(bindings: KeyBindings) -> Self {
        FrameLoop::with_output(bindings, io::stdout())
    }
}

impl<W: Write> FrameLoop<W> {
    pub fn with_output(bindings: KeyBindings, out: W) -> Self {
        FrameLoop {
            state: LoopState::Running,
            bindings,
            frames: 0,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Sets the close flag. The current frame finishes; the next one doesn't start.
    pub fn request_close(&mut self) {
        if self.state == LoopState::Running {
            self.state = LoopState::Closing;
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Option<Action> {
        let action = match event {
            InputEvent::Quit => {
                log::debug!("quit requested by the window system");
                self.request_close();
                None
            }
            _ => self.bindings.resolve(event),
        };
        if let Some(Action::CloseWindow) = action {
            let written = writeln!(self.out, "{CLOSE_ACTION_LINE}").and_then(|_| self.out.flush());
            if let Err(e) = written {
                log::warn!("cannot write action line: {e}");
            }
            log::info!("escape pressed, closing window");
            self.request_close();
        }
        action
    }

    /// Runs frames until closed and returns how many were drawn.
    pub fn run(&mut self, target: &mut impl FrameTarget) -> u64 {
        let mut events = Vec::new();
        while self.state == LoopState::Running {
            target.render();
            target.present();

            events.clear();
            target.poll_events(&mut events);
            for event in &events {
                self.handle_event(event);
                target.event(event);
            }
            self.frames += 1;
        }
        self.state = LoopState::Terminated;
        log::debug!("frame loop finished after {} frames", self.frames);
        self.frames
    }
}
