//! Screen rendering for the quest wizard.
//!
//! Everything here is a pure function of the app state: the session
//! snapshot picks the screen, the focus index picks the highlighted
//! card, and the transient signal picks the overlay.

use quest_core::{BlockKey, Rating, Screen, Signal, content};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;

/// Arcade palette of the quest.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub gold: Color,
    pub text: Color,
    pub error: Color,
    pub border: Color,
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0, 245, 212),
            secondary: Color::Rgb(176, 38, 255),
            gold: Color::Rgb(254, 228, 64),
            text: Color::White,
            error: Color::Rgb(255, 77, 77),
            border: Color::DarkGray,
            dim: Color::Gray,
        }
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.session.screen() {
        Screen::Intro => draw_intro(frame, app, area),
        Screen::Complete => draw_completion(frame, app, area),
        _ => draw_quest(frame, app, area),
    }

    if let Some(signal) = app.session.signal() {
        draw_signal(frame, &app.theme, signal, area);
    }
}

/// The start screen: title card and a single full-width action.
fn draw_intro(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(8),
            Constraint::Percentage(30),
        ])
        .split(inner);

    let lines = vec![
        Line::styled(content::GAME_TITLE, Style::default().fg(theme.text).bold()),
        Line::raw("🎮"),
        Line::raw(""),
        Line::styled(content::INTRO_TIME, Style::default().fg(theme.text)),
        Line::styled(content::INTRO_NOTE, Style::default().fg(theme.dim)),
        Line::raw(""),
        Line::styled(
            "▶ START GAME  (Enter)",
            Style::default().fg(theme.primary).bold(),
        ),
    ];
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, centered[1]);
}

/// The screens between intro and completion: HUD, progress, cards,
/// footer controls.
fn draw_quest(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // HUD header
            Constraint::Length(2), // Progress bar
            Constraint::Min(10),   // Cards
            Constraint::Length(3), // Footer controls
        ])
        .split(area);

    draw_hud(frame, app, chunks[0]);
    draw_progress(frame, app, chunks[1]);

    match app.session.screen() {
        Screen::Screening => draw_screening(frame, app, chunks[2]),
        Screen::Profile => draw_profile(frame, app, chunks[2]),
        screen => {
            if let Some(block) = screen.block() {
                draw_rating_block(frame, app, block, chunks[2]);
            }
        }
    }

    draw_footer(frame, app, chunks[3]);
}

fn draw_hud(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let Some(hud) = content::hud(app.session.screen()) else {
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(14)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::styled(format!("LVL {}", hud.level), Style::default().fg(theme.primary)),
        Line::styled(hud.title, Style::default().fg(theme.text).bold()),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(title, columns[0]);

    let score = Paragraph::new(vec![
        Line::styled("XP SCORE", Style::default().fg(theme.dim)),
        Line::styled(
            app.session.xp().to_string(),
            Style::default().fg(theme.gold).bold(),
        ),
    ])
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(score, columns[1]);
}

/// Thin progress bar: track plus filled run, fraction of screens passed.
fn draw_progress(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bar_width = area.width.saturating_sub(2);
    let bar_x = area.x + 1;
    let bar_y = area.y;

    let ratio = app.session.progress();
    let filled_width = (ratio * f64::from(bar_width)) as u16;

    let track = "─".repeat(bar_width as usize);
    let track_widget = Paragraph::new(track).style(Style::default().fg(theme.border));
    frame.render_widget(track_widget, Rect::new(bar_x, bar_y, bar_width, 1));

    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        let filled_widget = Paragraph::new(filled).style(Style::default().fg(theme.secondary));
        frame.render_widget(filled_widget, Rect::new(bar_x, bar_y, filled_width, 1));
    }

    let text = format!(" {} / {} ", app.session.screen().index(), Screen::LAST_INDEX);
    let text_width = text.len() as u16;
    let text_x = bar_x + (bar_width.saturating_sub(text_width)) / 2;
    let text_widget = Paragraph::new(text).style(Style::default().fg(theme.dim));
    frame.render_widget(text_widget, Rect::new(text_x, bar_y + 1, text_width, 1));
}

/// Bordered card; the focused one lights up in the screen's accent color.
fn card_block(theme: &Theme, title: String, complete: bool, focused: bool) -> Block<'static> {
    let border = if focused {
        theme.primary
    } else if complete {
        Color::Rgb(0, 160, 140)
    } else {
        theme.border
    };
    let title = if complete {
        format!(" {title} ✓ ")
    } else {
        format!(" {title} ")
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
        .title_style(Style::default().fg(theme.primary))
}

fn yes_no_line(theme: &Theme, answer: Option<quest_core::YesNo>) -> Line<'static> {
    use quest_core::YesNo;
    let yes_style = if answer == Some(YesNo::Yes) {
        Style::default().fg(theme.primary).bold()
    } else {
        Style::default().fg(theme.dim)
    };
    let no_style = if answer == Some(YesNo::No) {
        Style::default().fg(theme.error).bold()
    } else {
        Style::default().fg(theme.dim)
    };
    Line::from(vec![
        Span::styled("  [ YES ]", yes_style),
        Span::raw("   "),
        Span::styled("[ NO ]", no_style),
    ])
}

fn draw_screening(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let screening = app.session.answers().screening;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let cards = [
        ("CHALLENGE 01", content::SCREENING_PLAYED_INDIE, screening.played_indie),
        ("CHALLENGE 02", content::SCREENING_ACTIVE_GAMER, screening.active_gamer),
    ];
    for (index, (title, prompt, answer)) in cards.into_iter().enumerate() {
        let block = card_block(
            theme,
            title.to_string(),
            answer.is_some(),
            app.focus() == index,
        );
        let body = Paragraph::new(vec![
            Line::styled(prompt, Style::default().fg(theme.text).bold()),
            yes_no_line(theme, answer),
        ])
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(body, rows[index]);
    }

    let unlocked = app.session.is_current_valid();
    let lock = if unlocked { "🔓" } else { "🔒" };
    let hint = Paragraph::new(format!("{lock} {}", content::SCREENING_LOCK_HINT))
        .style(Style::default().fg(theme.dim))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[2]);
}

fn draw_profile(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let profile = app.session.answers().profile;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let cards: [(&str, Option<&'static str>); 4] = [
        (content::PROFILE_COUNTRY_LABEL, profile.country.map(|c| c.label())),
        (content::PROFILE_AGE_LABEL, profile.age.map(|a| a.label())),
        (content::PROFILE_PLATFORM_LABEL, profile.platform.map(|p| p.label())),
        (content::PROFILE_PLAYTIME_LABEL, profile.playtime.map(|p| p.label())),
    ];
    for (index, (label, value)) in cards.into_iter().enumerate() {
        let block = card_block(
            theme,
            label.to_string(),
            value.is_some(),
            app.focus() == index,
        );
        let line = match value {
            Some(value) => Line::from(vec![
                Span::styled("◀ ", Style::default().fg(theme.dim)),
                Span::styled(value, Style::default().fg(theme.text).bold()),
                Span::styled(" ▶", Style::default().fg(theme.dim)),
            ]),
            None => Line::styled("Select Location...", Style::default().fg(theme.dim)),
        };
        let body = Paragraph::new(line).block(block);
        frame.render_widget(body, rows[index]);
    }
}

fn hearts(rating: Option<Rating>) -> String {
    let filled = rating.map_or(0, Rating::value);
    let row: Vec<&str> = (1u8..=5)
        .map(|value| if value <= filled { "♥" } else { "♡" })
        .collect();
    match rating {
        Some(rating) => format!("{}  {}", row.join(" "), rating.value()),
        None => row.join(" "),
    }
}

fn draw_rating_block(frame: &mut Frame, app: &App, block: BlockKey, area: Rect) {
    let theme = &app.theme;
    let answers = app.session.answers().block(block);
    let prompts = content::prompts(block);
    let is_boss = block == BlockKey::FinalBoss;

    let mut constraints = vec![Constraint::Length(1)];
    if is_boss {
        constraints.push(Constraint::Length(2));
    }
    constraints.extend([Constraint::Length(4); quest_core::QUESTIONS_PER_BLOCK]);
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let anchors = Line::from(vec![
        Span::styled(content::LIKERT_LOW, Style::default().fg(theme.dim)),
        Span::raw("  ·····  "),
        Span::styled(content::LIKERT_HIGH, Style::default().fg(theme.dim)),
    ]);
    frame.render_widget(
        Paragraph::new(anchors).alignment(Alignment::Center),
        rows[0],
    );

    let mut offset = 1;
    if is_boss {
        let banner = Paragraph::new(vec![Line::from(vec![
            Span::styled(content::BOSS_BANNER, Style::default().fg(theme.error).bold()),
            Span::raw("  "),
            Span::styled(content::BOSS_STAMINA, Style::default().fg(theme.text)),
        ])])
        .alignment(Alignment::Center);
        frame.render_widget(banner, rows[1]);
        offset = 2;
    }

    for (index, prompt) in prompts.iter().enumerate() {
        let rating = answers.get(index);
        let heart_style = if rating.is_some() {
            Style::default().fg(theme.error).bold()
        } else {
            Style::default().fg(theme.border)
        };
        let body = Paragraph::new(vec![
            Line::styled(*prompt, Style::default().fg(theme.text).bold()),
            Line::styled(hearts(rating), heart_style),
        ])
        .wrap(Wrap { trim: true })
        .block(card_block(
            theme,
            format!("OBJECTIVE 0{}", index + 1),
            rating.is_some(),
            app.focus() == index,
        ));
        frame.render_widget(body, rows[offset + index]);
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let valid = app.session.is_current_valid();
    let (label, label_style) = if valid {
        ("NEXT LEVEL ▶", Style::default().fg(theme.primary).bold())
    } else {
        ("LOCKED 🔒", Style::default().fg(theme.dim))
    };

    let controls = Line::from(vec![
        Span::styled("Backspace: Back", Style::default().fg(theme.dim)),
        Span::raw("   "),
        Span::styled("Enter: ", Style::default().fg(theme.dim)),
        Span::styled(label, label_style),
        Span::raw("   "),
        Span::styled("↑/↓ Focus  ←/→ Choose  Esc: Quit", Style::default().fg(theme.dim)),
    ]);
    let footer = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(footer, area);
}

/// The completion screen: trophy, final XP and the submit action.
fn draw_completion(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.gold));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Min(10),
            Constraint::Percentage(25),
        ])
        .split(inner);

    let lines = vec![
        Line::raw("🏆"),
        Line::raw(""),
        Line::styled(
            content::COMPLETE_TITLE,
            Style::default().fg(theme.text).bold(),
        ),
        Line::styled(
            content::COMPLETE_ACHIEVEMENT,
            Style::default().fg(theme.primary),
        ),
        Line::raw(""),
        Line::styled(content::COMPLETE_BODY, Style::default().fg(theme.dim)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("FINAL XP  ", Style::default().fg(theme.dim)),
            Span::styled(
                app.session.final_xp().to_string(),
                Style::default().fg(theme.gold).bold(),
            ),
        ]),
        Line::raw(""),
        Line::styled(
            "SUBMIT RESPONSE ✔  (Enter)",
            Style::default().fg(theme.gold).bold(),
        ),
    ];
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, centered[1]);
}

/// Toast and error overlays, rendered on top of the current screen.
fn draw_signal(frame: &mut Frame, theme: &Theme, signal: Signal, area: Rect) {
    let (text, style) = match signal {
        Signal::XpToast { amount } => (
            format!("⚡ +{amount} XP GAINED"),
            Style::default().fg(theme.gold).bold(),
        ),
        Signal::Error { message } => (
            format!("⚠ {message}"),
            Style::default().fg(theme.error).bold(),
        ),
    };

    let width = (text.chars().count() as u16 + 4).min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = match signal {
        Signal::XpToast { .. } => area.y + 2,
        Signal::Error { .. } => area.y + area.height.saturating_sub(5),
    };
    let overlay = Rect::new(x, y, width, 3);

    frame.render_widget(Clear, overlay);
    let banner = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        );
    frame.render_widget(banner, overlay);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_default_is_the_arcade_palette() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Rgb(0, 245, 212));
        assert_eq!(theme.gold, Color::Rgb(254, 228, 64));
        assert_eq!(theme.error, Color::Rgb(255, 77, 77));
    }

    #[test]
    fn hearts_fill_up_to_the_rating() {
        assert_eq!(hearts(None), "♡ ♡ ♡ ♡ ♡");
        assert_eq!(hearts(Some(Rating::Three)), "♥ ♥ ♥ ♡ ♡  3");
        assert_eq!(hearts(Some(Rating::Five)), "♥ ♥ ♥ ♥ ♥  5");
    }
}
