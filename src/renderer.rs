use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Paragraph,
        canvas::{Canvas, Circle},
    },
};

use crate::config::GameConfig;
use crate::entities::{GameState, RingColor, Target};
use crate::scoring::{Stats, format_time};

pub const BACKGROUND: Color = Color::Rgb(0, 25, 40);
const HUD_BACKGROUND: Color = Color::Gray;
const HUD_TEXT: Color = Color::Black;
const END_TEXT: Color = Color::White;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub targets: &'a [Target],
    pub stats: &'a Stats,
    pub lives_remaining: u32,
    pub config: &'a GameConfig,
    /// Playfield size in pixels
    pub playfield: (f64, f64),
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game
#[derive(Debug, Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.game_state {
            GameState::Running => self.render_round(frame, view),
            GameState::Ended => self.render_end_screen(frame, view),
        }
    }

    /// Background, targets, then the HUD band on top
    fn render_round(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let (width, height) = view.playfield;

        let canvas = Canvas::default()
            .background_color(BACKGROUND)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for target in view.targets {
                    for (radius, ring) in target.rings() {
                        // Canvas y grows upwards, screen y grows downwards
                        ctx.draw(&Circle {
                            x: target.x,
                            y: height - target.y,
                            radius,
                            color: ring_color(ring),
                        });
                    }
                }
            });
        frame.render_widget(canvas, area);

        let hud_area = Rect {
            height: view.config.hud_rows().min(area.height),
            ..area
        };
        frame.render_widget(
            Block::default()
                .title(" Aim Trainer ")
                .style(Style::default().bg(HUD_BACKGROUND).fg(HUD_TEXT)),
            hud_area,
        );

        if hud_area.height < 2 {
            return;
        }
        let label_row = Rect {
            x: hud_area.x + 1,
            y: hud_area.y + hud_area.height / 2,
            width: hud_area.width.saturating_sub(2),
            height: 1,
        };
        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(label_row);
        for (label, column) in hud_labels(view.stats, view.lives_remaining)
            .into_iter()
            .zip(columns.iter())
        {
            frame.render_widget(
                Paragraph::new(Line::from(label).bold())
                    .style(Style::default().bg(HUD_BACKGROUND).fg(HUD_TEXT)),
                *column,
            );
        }
    }

    /// Final stats, each line centred horizontally
    fn render_end_screen(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        frame.render_widget(
            Block::default().style(Style::default().bg(BACKGROUND)),
            area,
        );

        let mut lines: Vec<Line> = end_screen_labels(view.stats)
            .into_iter()
            .map(|label| {
                Line::from(label).style(Style::default().fg(END_TEXT).add_modifier(Modifier::BOLD))
            })
            .collect();
        lines.push(Line::from("Press any key to exit").dark_gray());

        for (index, line) in lines.into_iter().enumerate() {
            let row = end_screen_row(area.height, index);
            if row >= area.height {
                break;
            }
            let content_width = (line.width() as u16).min(area.width);
            let line_area = Rect {
                x: area.x + centered_x(area.width, content_width),
                y: area.y + row,
                width: content_width,
                height: 1,
            };
            frame.render_widget(Paragraph::new(line), line_area);
        }
    }
}

fn ring_color(ring: RingColor) -> Color {
    match ring {
        RingColor::Primary => Color::Red,
        RingColor::Secondary => Color::White,
    }
}

/// HUD labels, left to right
pub fn hud_labels(stats: &Stats, lives_remaining: u32) -> [String; 4] {
    [
        format!("Time: {}", format_time(stats.elapsed_secs())),
        format!("Speed: {:.1} t/s", stats.speed()),
        format!("Hits: {}", stats.hits),
        format!("Lives: {}", lives_remaining),
    ]
}

/// End screen labels, top to bottom
pub fn end_screen_labels(stats: &Stats) -> [String; 4] {
    let accuracy = match stats.accuracy() {
        Some(accuracy) => format!("{:.1}%", accuracy),
        None => "n/a".to_string(),
    };
    [
        format!("Time: {}", format_time(stats.elapsed_secs())),
        format!("Speed: {:.1} t/s", stats.speed()),
        format!("Hits: {}", stats.hits),
        format!("Accuracy: {}", accuracy),
    ]
}

/// Left edge that centres `content_width` within `screen_width`
pub fn centered_x(screen_width: u16, content_width: u16) -> u16 {
    (screen_width / 2).saturating_sub(content_width / 2)
}

/// Row of the `index`th end screen line: two rows apart, block roughly centred
fn end_screen_row(area_height: u16, index: usize) -> u16 {
    let top = (area_height / 2).saturating_sub(5);
    top + 2 * index as u16
}
