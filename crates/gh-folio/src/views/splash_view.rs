use crate::capabilities::PanelCapabilities;
use crate::splash::RainField;
use crate::state::{AppState, SplashState};
use crate::views::{View, ViewId};
use figlet_rs::FIGfont;
use gh_folio_theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
    Frame,
};
use std::sync::Arc;

const SKIP_HINT: &str = "press any key to skip";

/// Splash screen view - boot log over purple rain
#[derive(Debug, Clone)]
pub struct SplashView {
    /// FIGlet rendering of the title, computed once
    title_art: Arc<[String]>,
}

impl SplashView {
    pub fn new(title: &str) -> Self {
        Self {
            title_art: figlet_title(title).into(),
        }
    }
}

impl View for SplashView {
    fn view_id(&self) -> ViewId {
        ViewId::Splash
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render_splash(&self.title_art, &state.splash, &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::SKIP_ON_ANY_KEY
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

/// Render `title` with the standard FIGlet font, or as plain text if that fails
fn figlet_title(title: &str) -> Vec<String> {
    let font = match FIGfont::standard() {
        Ok(font) => font,
        Err(e) => {
            log::warn!("Could not load FIGlet font: {}", e);
            return vec![title.to_string()];
        }
    };

    let Some(figure) = font.convert(title) else {
        return vec![title.to_string()];
    };

    let mut lines: Vec<String> = figure.to_string().lines().map(String::from).collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        lines.push(title.to_string());
    }
    lines
}

fn render_splash(
    title_art: &[String],
    splash: &SplashState,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    f.render_widget(Block::default().style(theme.background()), area);

    if let Some(field) = &splash.rain {
        f.render_widget(RainWidget { field, theme }, area);
    }

    let boot_lines = splash.boot_message.lines();
    let content_height = title_art.len() + 1 + boot_lines.len() + 2;
    let content_width = boot_lines
        .iter()
        .chain(title_art.iter())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(content_height as u16),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(content_width as u16),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    let content = horizontal[1];
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(title_art.len() as u16 + 1),
            Constraint::Length(boot_lines.len() as u16),
            Constraint::Length(2),
        ])
        .split(content);

    let title: Vec<Line> = title_art
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), theme.hero())))
        .collect();
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), sections[0]);

    let visible = splash.visible_lines();
    let boot: Vec<Line> = visible
        .iter()
        .enumerate()
        .map(|(index, line)| {
            if index + 1 == visible.len() && !splash.is_fading() {
                Line::from(vec![
                    Span::styled(line.clone(), theme.text()),
                    Span::styled(" █", theme.key_hint()),
                ])
            } else {
                Line::from(Span::styled(line.clone(), theme.text_secondary()))
            }
        })
        .collect();
    f.render_widget(Paragraph::new(boot), sections[1]);

    let hint = Line::from(Span::styled(SKIP_HINT, theme.muted()));
    f.render_widget(
        Paragraph::new(vec![Line::from(""), hint]).alignment(Alignment::Center),
        sections[2],
    );

    if splash.is_fading() {
        f.buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));
    }
}

/// Draws rain drops as vertical streaks
struct RainWidget<'a> {
    field: &'a RainField,
    theme: &'a Theme,
}

impl Widget for RainWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = f32::from(area.width);
        let height = f32::from(area.height);

        for drop in self.field.drops() {
            let column = ((drop.x * width) as u16).min(area.width - 1);
            let top = ((drop.y - drop.length) * height).floor().max(0.0) as u16;
            let bottom = (drop.y * height).ceil().clamp(0.0, height) as u16;
            let style = self.theme.rain_drop(drop.intensity);

            for row in top..bottom {
                if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
                    cell.set_symbol("│").set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, SplashAction};
    use crate::reducers::splash_reducer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| crate::views::render(state, f.area(), f))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_figlet_title_is_multiline() {
        let lines = figlet_title("its me");
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|line| !line.contains('\n')));
    }

    #[test]
    fn test_splash_shows_revealed_lines_only() {
        let mut state = AppState::default();
        state.splash = splash_reducer::reduce(
            state.splash,
            &Action::Splash(SplashAction::Started { generation: 1 }),
        );
        state.splash = splash_reducer::reduce(
            state.splash,
            &Action::Splash(SplashAction::LineRevealed {
                generation: 1,
                index: 0,
            }),
        );

        let text = buffer_text(&draw(&state));
        let lines = state.splash.boot_message.lines();
        assert!(text.contains(lines[0].as_str()));
        assert!(!text.contains(lines[1].as_str()));
        assert!(text.contains(SKIP_HINT));
    }

    #[test]
    fn test_fade_dims_the_frame() {
        let mut state = AppState::default();
        for action in [
            SplashAction::Started { generation: 1 },
            SplashAction::ExitStarted { generation: 1 },
        ] {
            state.splash = splash_reducer::reduce(state.splash, &Action::Splash(action));
        }
        assert!(state.splash.is_fading());

        let buffer = draw(&state);
        assert!(buffer
            .content()
            .iter()
            .all(|cell| cell.modifier.contains(Modifier::DIM)));
    }

    #[test]
    fn test_rain_widget_draws_inside_area() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = RainField::new(40, &mut rng);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 12);
        let mut buffer = Buffer::empty(area);

        RainWidget {
            field: &field,
            theme: &theme,
        }
        .render(area, &mut buffer);

        assert!(buffer.content().iter().any(|cell| cell.symbol() == "│"));

        // Zero-sized areas are ignored
        let empty = Rect::new(0, 0, 0, 0);
        RainWidget {
            field: &field,
            theme: &theme,
        }
        .render(empty, &mut Buffer::empty(empty));
    }
}
