//! UI rendering for the Flappy Bird playfield.
//!
//! The scene is in screen pixels; the playfield is sampled once per
//! terminal cell at the cell's centre.

use crate::game::{Overlay, Scene};
use crate::ui::common::{
    banner_title, create_game_layout, render_banner, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    /// Scrolling hills in the background.
    Hill,
    Pipe,
    /// Top row of a ground tile; `odd` alternates per tile so scrolling shows.
    GroundTop { odd: bool },
    Ground,
    BirdBody,
    /// The cell holding the bird's centre.
    BirdHead(char),
}

const CONTROLS: [(&str, &str); 2] = [("[Space/Up/Enter]", "Flap"), ("[Q/Esc]", "Quit")];

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, scene: &Scene) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 22);

    render_play_area(frame, layout.content, scene);
    render_status_bar_content(frame, layout.status_bar, scene);
    render_info_panel(frame, layout.info_panel, scene);

    match scene.overlay {
        Overlay::Ready => render_banner(
            frame,
            layout.content,
            Color::Yellow,
            vec![
                banner_title("FLAPPY BIRD", Color::Yellow),
                banner_title("GET READY!", Color::White),
                Line::from(Span::styled(
                    "press space to play",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        ),
        Overlay::Active { score } => render_score(frame, layout.content, score),
        Overlay::Over {
            score,
            highscore,
            new_record,
        } => {
            let mut lines = vec![
                banner_title("GAME OVER", Color::Red),
                Line::from(format!("Score: {}", score)),
                Line::from(format!("Highscore: {}", highscore)),
            ];
            if new_record {
                lines.push(banner_title("New record!", Color::Yellow));
            }
            render_banner(frame, layout.content, Color::Red, lines);
        }
    }
}

/// Score at the top centre of the playfield.
fn render_score(frame: &mut Frame, area: Rect, score: u32) {
    if area.height == 0 {
        return;
    }
    let text = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", score),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(text, Rect { height: 1, ..area });
}

fn render_play_area(frame: &mut Frame, area: Rect, scene: &Scene) {
    let grid = rasterize(scene, area.width as usize, area.height as usize);
    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| Line::from(row.into_iter().map(cell_span).collect::<Vec<_>>()))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Sky => Span::raw(" "),
        Cell::Hill => Span::styled("░", Style::default().fg(Color::DarkGray)),
        Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
        Cell::GroundTop { odd: false } => Span::styled("▓", Style::default().fg(Color::Green)),
        Cell::GroundTop { odd: true } => Span::styled("▒", Style::default().fg(Color::Green)),
        Cell::Ground => Span::styled("░", Style::default().fg(Color::Yellow)),
        Cell::BirdBody => Span::styled("▪", Style::default().fg(Color::Yellow)),
        Cell::BirdHead(c) => Span::styled(
            c.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Glyph for the bird's head at the given rotation in degrees.
pub fn bird_glyph(rotation: f64) -> char {
    if rotation >= 10.0 {
        '▲'
    } else if rotation <= -30.0 {
        '▼'
    } else {
        '►'
    }
}

/// Hill height in pixels at `u` pixels into one background copy.
fn hill_height(u: f64, width: f64) -> f64 {
    let period = width / 4.0;
    let phase = (u % period) / period;
    let triangle = 1.0 - (2.0 * phase - 1.0).abs();
    40.0 + 60.0 * triangle
}

/// Sample the scene into a `rows` x `cols` grid of cells.
pub fn rasterize(scene: &Scene, cols: usize, rows: usize) -> Vec<Vec<Cell>> {
    if cols == 0 || rows == 0 || scene.width <= 0.0 || scene.height <= 0.0 {
        return Vec::new();
    }

    let cell_w = scene.width / cols as f64;
    let cell_h = scene.height / rows as f64;
    let bird = scene.bird.rect;
    let head_col = ((bird.x + bird.width / 2.0) / cell_w).floor();
    let head_row = ((bird.y + bird.height / 2.0) / cell_h).floor();

    let mut grid = Vec::with_capacity(rows);
    for row in 0..rows {
        let y = (row as f64 + 0.5) * cell_h;
        let mut line = Vec::with_capacity(cols);

        for col in 0..cols {
            let x = (col as f64 + 0.5) * cell_w;
            let inside = |r: &crate::game::Rect| {
                x >= r.left() && x < r.right() && y >= r.top() && y < r.bottom()
            };

            let cell = if col as f64 == head_col && row as f64 == head_row {
                Cell::BirdHead(bird_glyph(scene.bird.rotation))
            } else if inside(&bird) {
                Cell::BirdBody
            } else if scene.pipes.iter().any(|p| inside(&p.rect)) {
                Cell::Pipe
            } else if let Some(i) = scene.grounds.iter().position(|g| inside(g)) {
                if y - scene.grounds[i].top() < cell_h {
                    Cell::GroundTop { odd: i % 2 == 1 }
                } else {
                    Cell::Ground
                }
            } else if y < scene.ground_line {
                let u = (x - scene.background[0]).rem_euclid(scene.background_width.max(1.0));
                if y >= scene.ground_line - hill_height(u, scene.background_width) {
                    Cell::Hill
                } else {
                    Cell::Sky
                }
            } else {
                Cell::Ground
            };
            line.push(cell);
        }
        grid.push(line);
    }
    grid
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, scene: &Scene) {
    match scene.overlay {
        Overlay::Ready => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &CONTROLS,
        ),
        Overlay::Active { score } => render_status_bar(
            frame,
            area,
            &format!("Score: {}", score),
            Color::Green,
            &CONTROLS,
        ),
        Overlay::Over { score, .. } => render_status_bar(
            frame,
            area,
            &format!("Crashed with {} points", score),
            Color::Red,
            &CONTROLS,
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, scene: &Scene) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (status, score, best) = match scene.overlay {
        Overlay::Ready => ("Ready", 0, None),
        Overlay::Active { score } => ("Flying", score, None),
        Overlay::Over {
            score, highscore, ..
        } => ("Game over", score, Some(highscore)),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", status),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if let Some(best) = best {
        lines.push(Line::from(vec![
            Span::styled(" Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", best), Style::default().fg(Color::Yellow)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
