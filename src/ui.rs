use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::session::{CardState, PracticeSession};

const HORIZONTAL_MARGIN: u16 = 5;

/// Everything the quiz screen needs to draw one frame.
pub struct PracticeView<'a> {
    pub session: &'a PracticeSession,
    pub error: Option<&'a str>,
}

impl Widget for &PracticeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        if let Some(message) = self.error {
            let error_widget = Paragraph::new(Span::styled(
                format!("✗ {message}"),
                red_bold_style,
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            error_widget.render(centered_band(area, 3), buf);
            return;
        }

        let session = self.session;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(2), // header
                    Constraint::Min(3),    // english prompt
                    Constraint::Length(3), // countdown / answer
                    Constraint::Length(2), // footer
                ]
                .as_ref(),
            )
            .split(area);

        render_header(session, chunks[0], buf);

        let Some(card) = &session.card else {
            let hint = Paragraph::new(Span::styled("press n for a sentence", dim_style))
                .alignment(Alignment::Center);
            hint.render(chunks[1], buf);
            return;
        };

        let english = &card.sentence.english;
        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2);
        let prompt_widget = Paragraph::new(Span::styled(english.clone(), bold_style))
            .alignment(if english.width() <= max_chars_per_line as usize {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true });
        prompt_widget.render(centered_band(chunks[1], 2), buf);

        match card.state {
            CardState::Counting => {
                let total = session.number_of_secs.max(1.0);
                let ratio = (card.seconds_remaining / total).clamp(0.0, 1.0);
                let color = countdown_color(card.seconds_remaining);

                let gauge = Gauge::default()
                    .gauge_style(Style::default().fg(color))
                    .label(Span::styled(
                        format!("{:.0}", card.seconds_remaining.ceil()),
                        Style::default().patch(bold_style).fg(color),
                    ))
                    .ratio(ratio);
                gauge.render(chunks[2], buf);

                let footer = Paragraph::new(Line::from(Span::styled(
                    "r reveal · n next · 1-3 difficulty · +/- timer · q quit",
                    dim_style,
                )))
                .alignment(Alignment::Center);
                footer.render(chunks[3], buf);
            }
            CardState::Revealed => {
                let label = if card.timed_out {
                    Span::styled("⏰ time's up — ", red_bold_style)
                } else {
                    Span::styled("answer — ", dim_style)
                };
                let answer = Line::from(vec![
                    label,
                    Span::styled(card.sentence.french.clone(), green_bold_style),
                ]);
                let answer_widget = Paragraph::new(answer)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                answer_widget.render(chunks[2], buf);

                let footer = Paragraph::new(Line::from(Span::styled(
                    "n next · 1-3 difficulty · q quit",
                    dim_style,
                )))
                .alignment(Alignment::Center);
                footer.render(chunks[3], buf);
            }
        }
    }
}

fn render_header(session: &PracticeSession, area: Rect, buf: &mut Buffer) {
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let header = Line::from(vec![
        Span::styled(
            session.title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(stars(session.difficulty), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(format!("{:.0}s", session.number_of_secs), dim_style),
    ]);
    Paragraph::new(header)
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// Shrink a tall area to a small vertically-centered band.
fn centered_band(area: Rect, height: u16) -> Rect {
    if area.height <= height {
        return area;
    }
    let top = (area.height - height) / 2;
    Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height,
    }
}

fn countdown_color(seconds_remaining: f64) -> Color {
    if seconds_remaining <= 5.0 {
        Color::Red
    } else if seconds_remaining <= 10.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn stars(difficulty: u8) -> String {
    (1..=3)
        .map(|level| if level <= difficulty { '★' } else { '☆' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Template;
    use crate::generator::SentenceGenerator;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(view: &PracticeView) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| f.render_widget(view, f.area())).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    fn test_session() -> PracticeSession {
        let template = Template::load("opinions").unwrap();
        PracticeSession::new(SentenceGenerator::new(template), 2, 30.0)
    }

    #[test]
    fn counting_card_hides_the_french_side() {
        let mut session = test_session();
        session.next_card().unwrap();
        let french = session.card.as_ref().unwrap().sentence.french.clone();

        let rendered = draw(&PracticeView {
            session: &session,
            error: None,
        });

        // The answer must not leak before the reveal. Compare on a
        // whitespace-free form since wrapping may split the sentence.
        let squashed: String = rendered.split_whitespace().collect();
        let answer: String = french.split_whitespace().collect();
        assert!(!squashed.contains(&answer));
        assert!(rendered.contains("Giving opinions"));
        assert!(rendered.contains("★★☆"));
    }

    #[test]
    fn revealed_card_shows_the_answer() {
        let mut session = test_session();
        session.next_card().unwrap();
        session.reveal();
        let french = session.card.as_ref().unwrap().sentence.french.clone();

        let rendered = draw(&PracticeView {
            session: &session,
            error: None,
        });

        let first_word = french.split_whitespace().next().unwrap();
        assert!(rendered.contains(first_word));
    }

    #[test]
    fn error_view_renders_message() {
        let session = test_session();
        let rendered = draw(&PracticeView {
            session: &session,
            error: Some("column 3 has no items"),
        });
        assert!(rendered.contains("column 3 has no items"));
    }

    #[test]
    fn countdown_color_thresholds() {
        assert_eq!(countdown_color(30.0), Color::Green);
        assert_eq!(countdown_color(10.0), Color::Yellow);
        assert_eq!(countdown_color(5.0), Color::Red);
    }

    #[test]
    fn stars_render_per_level() {
        assert_eq!(stars(1), "★☆☆");
        assert_eq!(stars(3), "★★★");
    }
}
