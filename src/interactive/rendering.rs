//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{LetterPool, letter_count};
use crate::output::formatters::spaced_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header with root word
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Used words
            Constraint::Percentage(45), // Score and messages
        ])
        .split(chunks[1]);

    render_used_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let root = app.session.root();
    let content = vec![
        Line::from(Span::styled(
            spaced_letters(root),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("letters: {}", LetterPool::new(root)),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.session.used_words().is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.session
            .used_words()
            .iter()
            .map(|word| {
                let count = letter_count(word);
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("({count:>2}) "),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        word.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {count} letters"),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect()
    };

    let title = format!(
        " Words {}/{} ",
        app.session.used_words().len(),
        app.solution_count
    );
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(app.progress_percent())
        .label(format!(
            "{} / {} points",
            app.session.score(),
            app.max_score
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = Paragraph::new(format!(
        "Game {} | Best: {}",
        app.games_played, app.best_score
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Ctrl+N: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::wordlists::RootWords;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn renders_root_and_words() {
        let dict = WordListDictionary::from_words("en", ["silkworm", "silk", "worm"]);
        let roots = RootWords::from_text("silkworm");
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));
        app.input_buffer = "silk".to_string();
        app.submit_input();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("S I L K W O R M"));
        assert!(text.contains("4 letters"));
        assert!(text.contains("4 / 8 points"));
    }
}
