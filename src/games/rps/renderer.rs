/// Rock-paper-scissors screen layout
use crate::rps::{Move, SessionView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, view: &SessionView, notice: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(3), // score
            Constraint::Length(3), // buttons
            Constraint::Length(3), // round result
            Constraint::Length(3), // winner / reset
            Constraint::Min(0),
            Constraint::Length(1), // help
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(" ROCK · PAPER · SCISSORS ")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(format!("You {}  :  {} Computer", view.player_score, view.computer_score))
            .block(Block::default().title(" SCORE ").borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[1],
    );

    render_buttons(frame, chunks[2], view.inputs_enabled);

    let result = notice.unwrap_or(&view.round_message);
    let result_style = if notice.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(result)
            .style(result_style)
            .block(Block::default().title(" ROUND ").borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[3],
    );

    if let Some(winner) = &view.winner_message {
        frame.render_widget(
            Paragraph::new(winner.as_str())
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .block(Block::default().title(" [Enter] Play again ").borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[4],
        );
    }

    let help = if view.reset_visible {
        "[Enter/N] New game  [Esc/Q] Quit"
    } else {
        "[R/1] Rock  [P/2] Paper  [S/3] Scissors  [Esc/Q] Quit"
    };
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), chunks[6]);
}

fn render_buttons(frame: &mut Frame, area: Rect, enabled: bool) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let style = if enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    for (m, col) in Move::ALL.into_iter().zip(cols.iter()) {
        let label = m.name().to_uppercase();
        frame.render_widget(
            Paragraph::new(label)
                .style(style)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            *col,
        );
    }
}
