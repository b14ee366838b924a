use crate::actions::{Action, NavigationAction, PortfolioAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::{PortfolioViewModel, ProjectCard, ProjectsSection};
use crate::views::{View, ViewId};
use gh_folio_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows used by one repository card (three lines and a spacer)
const CARD_HEIGHT: u16 = 4;

/// Portfolio view - hero, about, projects, skills and contact
#[derive(Debug, Clone, Default)]
pub struct PortfolioView;

impl PortfolioView {
    pub fn new() -> Self {
        Self
    }
}

impl View for PortfolioView {
    fn view_id(&self) -> ViewId {
        ViewId::Portfolio
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let view_model = PortfolioViewModel::from_state(state);
        render_portfolio(&view_model, &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::ITEM_NAVIGATION
            | PanelCapabilities::VIM_NAVIGATION_BINDINGS
            | PanelCapabilities::ITEM_ACTIVATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        match nav {
            NavigationAction::Next => Some(Action::Portfolio(PortfolioAction::SelectNext)),
            NavigationAction::Previous => Some(Action::Portfolio(PortfolioAction::SelectPrevious)),
            NavigationAction::Activate => Some(Action::Portfolio(PortfolioAction::OpenSelected)),
        }
    }
}

fn render_portfolio(vm: &PortfolioViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(theme.background()), area);

    let about_width = area.width.saturating_sub(4).max(1) as usize;
    let about_height = (vm.about.chars().count() / about_width + 1) as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(about_height),
            Constraint::Min(CARD_HEIGHT + 2),
            Constraint::Length(3),
            Constraint::Length(vm.contact.len() as u16 + 2),
            Constraint::Length(1),
        ])
        .split(area);

    render_hero(vm, theme, chunks[0], f);

    let about = Paragraph::new(vm.about.as_str())
        .style(theme.text())
        .wrap(Wrap { trim: true })
        .block(section_block("About", theme));
    f.render_widget(about, chunks[1]);

    render_projects(vm, theme, chunks[2], f);

    let skills = Paragraph::new(Span::styled(vm.skills.as_str(), theme.text()))
        .block(section_block("Skills", theme));
    f.render_widget(skills, chunks[3]);

    let contact: Vec<Line> = vm
        .contact
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(format!("{}: ", line.label), theme.text_secondary()),
                Span::styled(line.url.as_str(), theme.link()),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(contact).block(section_block("Contact", theme)),
        chunks[4],
    );

    render_key_hints(theme, chunks[5], f);
}

fn section_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title(Span::styled(format!(" {} ", title), theme.panel_title()))
}

fn render_hero(vm: &PortfolioViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let lines = vec![
        Line::from(Span::styled(vm.name.as_str(), theme.hero())),
        Line::from(Span::styled(vm.tagline.as_str(), theme.text_secondary())),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_projects(vm: &PortfolioViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = section_block(vm.projects_heading, theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let message = match &vm.projects {
        ProjectsSection::Loading => Some(Line::from(Span::styled("Loading...", theme.muted()))),
        ProjectsSection::Error(message) => {
            Some(Line::from(Span::styled(message.as_str(), theme.error())))
        }
        ProjectsSection::Empty => Some(Line::from(Span::styled(
            "No repositories to show yet.",
            theme.muted(),
        ))),
        ProjectsSection::Cards(_) => None,
    };
    if let Some(message) = message {
        f.render_widget(Paragraph::new(message).wrap(Wrap { trim: true }), inner);
        return;
    }

    let ProjectsSection::Cards(cards) = &vm.projects else {
        return;
    };

    let visible = usize::from((inner.height / CARD_HEIGHT).max(1));
    let selected = cards.iter().position(|card| card.selected).unwrap_or(0);
    let offset = selected.saturating_sub(visible - 1);

    let lines: Vec<Line> = cards
        .iter()
        .skip(offset)
        .take(visible)
        .flat_map(|card| card_lines(card, theme))
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn card_lines<'a>(card: &'a ProjectCard, theme: &Theme) -> Vec<Line<'a>> {
    let (marker, title_style) = if card.selected {
        ("▸ ", theme.card_selected())
    } else {
        ("  ", theme.text())
    };

    let mut header = vec![
        Span::styled(marker, theme.key_hint()),
        Span::styled(card.title.as_str(), title_style),
        Span::raw("  "),
        Span::styled(card.stars.as_str(), theme.stars()),
    ];
    if card.has_preview {
        header.push(Span::styled("  ▣ preview", theme.muted()));
    }

    let mut footer = vec![Span::raw("  ")];
    if let Some(pushed) = &card.pushed {
        footer.push(Span::styled(pushed.as_str(), theme.muted()));
        footer.push(Span::styled(" · ", theme.muted()));
    }
    footer.push(Span::styled(card.url.as_str(), theme.link()));

    vec![
        Line::from(header),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(card.description.as_str(), theme.text_secondary()),
        ]),
        Line::from(footer),
        Line::from(""),
    ]
}

fn render_key_hints(theme: &Theme, area: Rect, f: &mut Frame) {
    let hints = [("j/k", "select"), ("Enter/o", "open"), ("q/Esc", "quit")];
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(*key, theme.key_hint()),
                Span::styled(format!(" {}  ", description), theme.key_description()),
            ]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
