//! Application state: the cube, preferences, and keyboard handling.

use flatcube_core::{CubeState, Face, Twist, TwistDirection};
use strum::IntoEnumIterator;

use crate::net;
use crate::preferences::Preferences;

pub struct App {
    cube: CubeState,
    prefs: Preferences,
    instructions: Vec<String>,
    message: String,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let prefs = Preferences::load();
        Self {
            cube: CubeState::new(),
            instructions: instructions(prefs.scramble_moves),
            prefs,
            message: "Welcome! Press S to scramble.".to_string(),
        }
    }

    /// Decodes one typed character into a cube command.
    ///
    /// Face letters turn that face, with case selecting the direction
    /// (uppercase = clockwise). Everything unrecognized is a no-op; invalid
    /// input never reaches the model.
    fn handle_char(&mut self, ctx: &egui::Context, ch: char) {
        if let Ok(face) = Face::from_symbol(ch) {
            let direction = if ch.is_ascii_uppercase() {
                TwistDirection::Cw
            } else {
                TwistDirection::Ccw
            };
            self.cube.twist(Twist::new(face, direction));
            self.message = format!("Rotated {face} {}", direction.name());
            return;
        }
        match ch.to_ascii_lowercase() {
            's' => {
                self.cube
                    .scramble(self.prefs.scramble_moves, &mut rand::thread_rng());
                self.message = "Scrambled".to_string();
            }
            'c' => {
                self.message = if self.cube.is_solved() {
                    "Solved!".to_string()
                } else {
                    "Not solved yet.".to_string()
                };
            }
            ' ' => self.reset(),
            'q' => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            _ => (),
        }
    }

    fn handle_key(&mut self, ctx: &egui::Context, key: egui::Key) {
        match key {
            egui::Key::Escape => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            // Space also arrives as a text event on most platforms; reset is
            // idempotent, so handling both is harmless.
            egui::Key::Space => self.reset(),
            _ => (),
        }
    }

    fn reset(&mut self) {
        self.cube.reset();
        self.message = "Reset to solved".to_string();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in ctx.input(|input| input.events.clone()) {
            match event {
                egui::Event::Text(text) => {
                    for ch in text.chars() {
                        self.handle_char(ctx, ch);
                    }
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } => self.handle_key(ctx, key),
                _ => (),
            }
        }

        let colors = self.prefs.colors.clone();
        let frame = egui::Frame::central_panel(&ctx.style()).fill(colors.background);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                net::draw_cube_net(ui, &self.cube, &self.prefs);
                ui.vertical(|ui| {
                    for line in &self.instructions {
                        ui.label(egui::RichText::new(line).color(colors.text));
                    }
                });
            });
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(&self.message)
                    .size(24.0)
                    .color(colors.text),
            );
        });
    }
}

/// Lines for the controls column, matching the bindings in `handle_char`.
fn instructions(scramble_moves: usize) -> Vec<String> {
    let mut lines = vec!["Controls:".to_string()];
    for face in Face::iter() {
        let symbol = face.symbol_upper_str();
        lines.push(format!(
            " {} / {} : {} face clockwise / counterclockwise",
            symbol,
            symbol.to_lowercase(),
            face.name(),
        ));
    }
    lines.push(format!(" S : Scramble ({scramble_moves} random moves)"));
    lines.push(" C : Check solved".to_string());
    lines.push(" Space : Reset to solved".to_string());
    lines.push(" Esc or Q : Quit".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let prefs = Preferences::default();
        App {
            cube: CubeState::new(),
            instructions: instructions(prefs.scramble_moves),
            prefs,
            message: String::new(),
        }
    }

    #[test]
    fn case_selects_turn_direction() {
        let ctx = egui::Context::default();
        let mut app = test_app();

        app.handle_char(&ctx, 'F');
        assert_eq!("Rotated F CW", app.message);
        assert!(!app.cube.is_solved());

        app.handle_char(&ctx, 'f');
        assert_eq!("Rotated F CCW", app.message);
        assert!(app.cube.is_solved());
    }

    #[test]
    fn check_reports_solved_state() {
        let ctx = egui::Context::default();
        let mut app = test_app();

        app.handle_char(&ctx, 'c');
        assert_eq!("Solved!", app.message);

        app.handle_char(&ctx, 'R');
        app.handle_char(&ctx, 'C');
        assert_eq!("Not solved yet.", app.message);
    }

    #[test]
    fn scramble_then_reset_restores_solved() {
        let ctx = egui::Context::default();
        let mut app = test_app();

        app.handle_char(&ctx, 's');
        assert_eq!("Scrambled", app.message);

        app.handle_char(&ctx, ' ');
        assert_eq!("Reset to solved", app.message);
        assert!(app.cube.is_solved());
    }

    #[test]
    fn unrecognized_keys_do_nothing() {
        let ctx = egui::Context::default();
        let mut app = test_app();
        let before = app.cube;

        for ch in ['x', 'Z', '1', '\n'] {
            app.handle_char(&ctx, ch);
        }
        assert_eq!(before, app.cube);
        assert_eq!("", app.message);
    }
}
