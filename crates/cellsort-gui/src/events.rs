use std::collections::VecDeque;

use cellsort_core::session::InputEvent;

use crate::panels::grid_interaction::screen_to_display;
use crate::states::DisplaySurface;

/// Input waiting to be applied, in arrival order. The app drains one event
/// per frame so rapid clicks are never merged.
#[derive(Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
}

impl EventQueue {
    /// Queue this frame's key presses and primary clicks on the image.
    pub fn collect(&mut self, ctx: &egui::Context, surface: Option<DisplaySurface>) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            if let Some(input) = translate(&event, surface) {
                self.pending.push_back(input);
            }
        }
    }

    pub fn poll(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

fn translate(event: &egui::Event, surface: Option<DisplaySurface>) -> Option<InputEvent> {
    match event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers,
            ..
        } if !(modifiers.ctrl || modifiers.alt || modifiers.command) => {
            key_char(*key).map(InputEvent::Key)
        }
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            ..
        } => {
            let surface = surface?;
            if !surface.rect.contains(*pos) {
                return None;
            }
            Some(InputEvent::Click(screen_to_display(
                *pos,
                surface.rect,
                surface.size,
            )))
        }
        _ => None,
    }
}

/// Lowercase character for single-character keys (letters, digits).
fn key_char(key: egui::Key) -> Option<char> {
    let mut chars = key.name().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}
