use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, AppState},
    session::Outcome,
    stats::SessionResult,
    thok::Thok,
};

const HORIZONTAL_MARGIN: u16 = 5;
const RESULT_LINES: u16 = 6;

struct Palette {
    correct: Style,
    incorrect: Style,
    untested: Style,
    cursor: Style,
}

impl Palette {
    fn new() -> Self {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);

        Self {
            correct: Style::default().patch(bold_style).fg(Color::Green),
            incorrect: Style::default()
                .patch(bold_style)
                .fg(Color::White)
                .bg(Color::Red),
            untested: dim_bold_style,
            cursor: Style::default()
                .patch(dim_bold_style)
                .add_modifier(Modifier::UNDERLINED),
        }
    }
}

/// One span per character, styled by its outcome. Mistakes show the
/// character that was expected.
fn prompt_spans<'a>(thok: &Thok, palette: &Palette) -> Vec<Span<'a>> {
    thok.outcomes()
        .iter()
        .enumerate()
        .map(|(idx, outcome)| {
            let expected = thok.get_expected_char(idx).unwrap_or(' ').to_string();
            let style = match outcome {
                Outcome::Correct => palette.correct,
                Outcome::Incorrect => palette.incorrect,
                Outcome::Untested if idx == thok.cursor_pos() && !thok.has_finished() => {
                    palette.cursor
                }
                Outcome::Untested => palette.untested,
            };
            Span::styled(expected, style)
        })
        .collect()
}

fn format_rate(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "--".to_string()
    }
}

fn result_lines<'a>(result: &SessionResult) -> Vec<Line<'a>> {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::raw(format!("{:<10}", label)),
            Span::styled(value, bold_style),
        ])
    };

    vec![
        row("time:", format!("{:.2}s", result.elapsed_secs)),
        row("WPM:", format_rate(result.wpm)),
        row("Adj. WPM:", format_rate(result.adjusted_wpm)),
        row("Accuracy:", format!("{}%", result.accuracy)),
        Line::from(""),
        Line::from(Span::styled(
            "Press esc to continue.",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ]
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let thok = &self.thok;
        let palette = Palette::new();

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let prompt_width = thok.prompt.width();
        let prompt_occupied_lines = if prompt_width <= max_chars_per_line as usize {
            1
        } else {
            (prompt_width as f64 / max_chars_per_line as f64).ceil() as u16 + 1
        };

        let result = match self.state {
            AppState::Results => thok.result(),
            AppState::Typing => None,
        };
        let result_height = if result.is_some() { RESULT_LINES + 1 } else { 0 };
        let padding = area
            .height
            .saturating_sub(prompt_occupied_lines + result_height)
            / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(padding),
                Constraint::Length(prompt_occupied_lines),
                Constraint::Length(result_height),
                Constraint::Min(0),
            ])
            .split(area);

        let widget = Paragraph::new(Line::from(prompt_spans(thok, &palette)))
            .alignment(if prompt_occupied_lines == 1 {
                // when the prompt is small enough to fit on one line
                // centering the text gives a nice zen feeling
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true });

        widget.render(chunks[1], buf);

        if let Some(result) = result {
            let stats_area = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(chunks[2])[1];

            Paragraph::new(result_lines(result))
                .alignment(Alignment::Center)
                .render(stats_area, buf);
        }
    }
}
