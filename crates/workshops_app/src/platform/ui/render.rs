//! Draws the view model. Exactly one body widget is shown at a time:
//! loading indicator, error alert, end-of-data notice, or the card list.

use std::io::{self, Stdout};

use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Terminal;
use workshops_core::{AppViewModel, DisplayState, WorkshopCardView};

const HELP_LINE: &str = "n/right next | p/left previous | / filter | esc clear | q quit";

pub fn draw(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    view: &AppViewModel,
    filter_editing: bool,
) -> io::Result<()> {
    terminal.draw(|f| {
        let root = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(f.area());

        let title = Paragraph::new("List of workshops")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, root[0]);

        let status = Paragraph::new(status_line(view, filter_editing))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(status, root[1]);

        match &view.display {
            DisplayState::Loading => {
                let loading = Paragraph::new("Loading workshops...")
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(loading, root[2]);
            }
            DisplayState::Error(message) => {
                let alert = Paragraph::new(message.as_str())
                    .style(Style::default().fg(Color::Red))
                    .block(Block::default().title("Error").borders(Borders::ALL));
                f.render_widget(alert, root[2]);
            }
            DisplayState::EndOfData => {
                let notice = Paragraph::new("That's all folks!")
                    .style(Style::default().fg(Color::Cyan))
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(notice, root[2]);
            }
            DisplayState::Cards(cards) => {
                // An empty filtered list renders as silence, which is
                // distinct from the end-of-data notice above.
                let items: Vec<ListItem> = cards.iter().map(card_item).collect();
                let list =
                    List::new(items).block(Block::default().title("Workshops").borders(Borders::ALL));
                f.render_widget(list, root[2]);
            }
        }

        let help = Paragraph::new(HELP_LINE).style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, root[3]);
    })?;
    Ok(())
}

fn status_line(view: &AppViewModel, filter_editing: bool) -> String {
    let mut parts = Vec::new();
    if let Some(page) = view.page_indicator {
        parts.push(format!("You are on page {page}"));
    }
    if filter_editing {
        parts.push(format!("Filter: {}_", view.filter_key));
    } else if !view.filter_key.is_empty() {
        parts.push(format!("Filter: {}", view.filter_key));
    }
    if parts.is_empty() {
        parts.push("Type / to filter by name".to_string());
    }
    parts.join(" | ")
}

fn card_item(card: &WorkshopCardView) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(
            card.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(card.dates.clone()),
        Line::from(Span::styled(
            card.image_url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ])
}
