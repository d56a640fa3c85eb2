//! UI drawing - renders a [`RenderState`] snapshot into a ratatui frame

use ratatui::{prelude::*, widgets::*};

use crate::components::{RegistrationRender, UserLoginRender};
use crate::constants::{
    APP_NAME, APP_VERSION, LOGIN_BUTTON_LABEL, REGISTRATION_HEADING, USERNAME_LABEL,
    USER_LOGIN_HEADING,
};
use crate::messages::RenderState;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, main_chunks[0]);
    draw_registration(f, &state.registration, main_chunks[1]);
    draw_status_bar(f, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(" {} v{} ", APP_NAME, APP_VERSION))
        .style(Style::default().fg(Color::Cyan).bold());
    f.render_widget(title, area);
}

/// Parent view: heading, embedded login view, then the message if any
pub fn draw_registration(f: &mut Frame, registration: &RegistrationRender, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(6), // Child view
            Constraint::Length(1), // Login message
            Constraint::Min(0),
        ])
        .split(inner);

    let heading = Paragraph::new(REGISTRATION_HEADING).style(Style::default().bold());
    f.render_widget(heading, chunks[0]);

    draw_user_login(f, &registration.user_login, chunks[1]);

    if let Some(message) = &registration.login_message {
        let message = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Green));
        f.render_widget(message, chunks[2]);
    }
}

/// Child view: heading, the username from the parent, and the login button
pub fn draw_user_login(f: &mut Frame, user_login: &UserLoginRender, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(USER_LOGIN_HEADING).bold(),
        Line::from(vec![
            Span::raw(USERNAME_LABEL),
            Span::styled(user_login.username.as_str(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", LOGIN_BUTTON_LABEL),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_bar(f: &mut Frame, area: Rect) {
    let bar = Paragraph::new(" l/Enter:login | ?:help | q:quit ")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 REGISTRATION TUI - Keyboard Shortcuts

 LOGIN
   l / Enter          Trigger the login button

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
