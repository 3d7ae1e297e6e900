//! Ratatui rendering, one module per screen.

mod intro;
mod quiz;
mod results;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Welcome => welcome::render(frame, area),
        Screen::Intro => intro::render(frame, area, app),
        Screen::Quiz => quiz::render(frame, area, app),
        Screen::Results => results::render(frame, area, app),
    }
}
