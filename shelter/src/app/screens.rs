use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Row, Table},
    Frame,
};

/// The landing page after a successful login
pub fn render_dashboard(frame: &mut Frame<'_>, body_area: Rect) {
    render_panel(
        frame,
        body_area,
        "Dashboard",
        "You're signed in to the Shelter Market.",
        [Row::new(vec!["q", "Quit"]), Row::new(vec!["ctrl-c", "Quit"])],
    );
}

/// Where the "Register" button leads
pub fn render_register(frame: &mut Frame<'_>, body_area: Rect) {
    render_panel(
        frame,
        body_area,
        "Register",
        "Create a Shelter Market account.",
        [
            Row::new(vec!["esc", "Back to login"]),
            Row::new(vec!["q", "Quit"]),
        ],
    );
}

fn render_panel<const N: usize>(
    frame: &mut Frame<'_>,
    body_area: Rect,
    title: &str,
    message: &str,
    shortcuts: [Row<'static>; N],
) {
    let popup_vert = Layout::vertical([Constraint::Percentage(50)]).flex(Flex::Center);
    let popup_horiz = Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

    let [popup_area] = popup_vert.areas(body_area);
    let [popup_area] = popup_horiz.areas(popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(Style::new().blue());

    let inner = block.inner(popup_area);
    let [message_area, table_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);
    frame.render_widget(Paragraph::new(message), message_area);
    frame.render_widget(
        Table::new(shortcuts, [Constraint::Max(8), Constraint::Fill(1)]),
        table_area,
    );
}
