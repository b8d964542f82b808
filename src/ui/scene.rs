//! Scene renderer: scales the 800x150 world window onto terminal cells.

use crate::constants::*;
use crate::textures::TextureKey;
use crate::world::types::{GameMode, Rect as WorldRect};
use crate::world::Session;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Character cell buffer covering the play area.
struct Canvas {
    width: usize,
    height: usize,
    x_scale: f64,
    y_scale: f64,
    cells: Vec<(char, Color)>,
}

impl Canvas {
    fn new(area: Rect) -> Self {
        let width = area.width as usize;
        let height = area.height as usize;
        Self {
            width,
            height,
            x_scale: width as f64 / SCREEN_WIDTH,
            y_scale: height as f64 / SCREEN_HEIGHT,
            cells: vec![(' ', Color::Reset); width * height],
        }
    }

    /// Fill a rectangle given in viewport coordinates (x right, y up,
    /// origin at the camera's bottom-left).
    fn fill_rect(&mut self, rect: &WorldRect, glyph: char, color: Color) {
        if rect.right() <= 0.0 || rect.left >= SCREEN_WIDTH {
            return;
        }
        let col_min = (rect.left.max(0.0) * self.x_scale) as usize;
        let col_max = ((rect.right().min(SCREEN_WIDTH) * self.x_scale).ceil() as usize)
            .min(self.width)
            .max(col_min + 1);
        let row_min = (((SCREEN_HEIGHT - rect.top()).max(0.0)) * self.y_scale) as usize;
        let row_max = ((((SCREEN_HEIGHT - rect.bottom).min(SCREEN_HEIGHT)) * self.y_scale)
            .ceil() as usize)
            .min(self.height)
            .max(row_min + 1);

        for row in row_min..row_max.min(self.height) {
            for col in col_min..col_max.min(self.width) {
                self.cells[row * self.width + col] = (glyph, color);
            }
        }
    }

    fn write_text(&mut self, row: usize, col: usize, text: &str, color: Color) {
        if row >= self.height {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let c = col + i;
            if c >= self.width {
                break;
            }
            self.cells[row * self.width + c] = (ch, color);
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        (0..self.height)
            .map(|row| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|col| {
                        let (ch, color) = self.cells[row * self.width + col];
                        Span::styled(ch.to_string(), Style::default().fg(color))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

/// Render one frame of the game.
pub fn render(frame: &mut Frame, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.size());

    render_play_area(frame, chunks[0], session);
    render_status_bar(frame, chunks[1], session);
}

fn render_play_area(frame: &mut Frame, area: Rect, session: &Session) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    frame.render_widget(Clear, area);

    let mut canvas = Canvas::new(area);
    let cam = session.camera.left_bound();

    // Clouds live in screen space: no camera translation.
    for cloud in &session.clouds {
        let (w, h) = TextureKey::Cloud.size();
        let rect = WorldRect::new(cloud.left, cloud.top - h, w, h);
        let (glyph, color) = TextureKey::Cloud.glyph();
        canvas.fill_rect(&rect, glyph, color);
    }

    // Ground: each segment draws its collision band with its variant
    // glyph, which renders as a continuous line with texture changes at
    // segment boundaries.
    for segment in session.terrain.segments() {
        let mut band = segment.band();
        band.left -= cam;
        let (glyph, color) = segment.texture().glyph();
        canvas.fill_rect(&band, glyph, color);
    }

    // Cacti.
    for cactus in &session.obstacles.cacti {
        let mut rect = cactus.footprint();
        rect.left -= cam;
        let (glyph, color) = cactus.texture().glyph();
        canvas.fill_rect(&rect, glyph, color);
    }

    // The bird.
    let bird = &session.obstacles.bird;
    let mut rect = bird.footprint();
    rect.left -= cam;
    let (glyph, color) = bird.texture.glyph();
    canvas.fill_rect(&rect, glyph, color);

    // The dino, drawn with its current texture's visual bounds.
    let (w, h) = session.player.texture.size();
    let rect = WorldRect::new(session.player.x - cam, session.player.y, w, h);
    let (glyph, color) = session.player.texture.glyph();
    canvas.fill_rect(&rect, glyph, color);

    // Score, zero-padded, top right.
    let score_text = format!("{:05}", session.score);
    let score_col = canvas.width.saturating_sub(score_text.len() + 1);
    canvas.write_text(0, score_col, &score_text, Color::White);

    if session.mode == GameMode::GameOver {
        let banner = "G A M E   O V E R";
        let col = canvas.width.saturating_sub(banner.len()) / 2;
        canvas.write_text(1, col, banner, Color::Red);
    }

    let paragraph = Paragraph::new(canvas.into_lines());
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let (message, color) = match session.mode {
        GameMode::Playing => ("", Color::DarkGray),
        GameMode::GameOver => ("Press any key to restart  ", Color::Yellow),
    };

    let line = Line::from(vec![
        Span::styled(message, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled("[Space/Up]", Style::default().fg(Color::Cyan)),
        Span::styled(" Jump  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Down]", Style::default().fg(Color::Cyan)),
        Span::styled(" Duck  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Esc]", Style::default().fg(Color::Cyan)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
