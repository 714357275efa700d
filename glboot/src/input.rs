use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Events the frame loop cares about, lifted out of SDL's event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close button or a platform quit request.
    Quit,
    KeyDown { keycode: Option<Keycode>, repeat: bool },
    KeyUp { keycode: Option<Keycode> },
}

impl InputEvent {
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match *event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::KeyDown {
                keycode, repeat, ..
            } => Some(InputEvent::KeyDown { keycode, repeat }),
            Event::KeyUp { keycode, .. } => Some(InputEvent::KeyUp { keycode }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CloseWindow,
}

/// Key-to-action table, installed once before the loop starts.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(Keycode, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            bindings: vec![(Keycode::Escape, Action::CloseWindow)],
        }
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        KeyBindings {
            bindings: Vec::new(),
        }
    }

    pub fn bind(mut self, keycode: Keycode, action: Action) -> Self {
        self.bindings.retain(|(k, _)| *k != keycode);
        self.bindings.push((keycode, action));
        self
    }

    /// Only fresh presses trigger an action; auto-repeat and releases don't.
    pub fn resolve(&self, event: &InputEvent) -> Option<Action> {
        match *event {
            InputEvent::KeyDown {
                keycode: Some(keycode),
                repeat: false,
            } => self
                .bindings
                .iter()
                .find(|(k, _)| *k == keycode)
                .map(|(_, action)| *action),
            _ => None,
        }
    }
}
