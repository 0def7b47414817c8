use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Message box component for displaying status/error/info messages
pub struct MessageBox;

impl MessageBox {
    /// Render a message box with optional title and color
    ///
    /// # Arguments
    /// * `frame` - The frame to render to
    /// * `area` - The area to render the message box in
    /// * `message` - The message text to display
    /// * `title` - Optional title (defaults to "Message")
    /// * `color` - Optional color for the border (defaults to primary)
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        message: &str,
        title: Option<&str>,
        color: Option<Color>,
    ) {
        let t = theme();
        let border_color = color.unwrap_or(t.primary);

        let mut border_style = t.border_focused_style();
        if border_style.fg.is_some() {
            border_style = border_style.fg(border_color);
        }

        // Shrink the padding on small surfaces so the text stays visible
        let vertical_padding = if area.height >= 9 { 2 } else { 0 };

        let message_block = Block::default()
            .borders(Borders::ALL)
            .title(title.unwrap_or("Message"))
            .title_alignment(Alignment::Center)
            .border_style(border_style)
            .padding(ratatui::widgets::Padding::new(2, 2, vertical_padding, vertical_padding));

        let message_para = Paragraph::new(message)
            .style(t.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(message_block);

        frame.render_widget(message_para, area);
    }
}
