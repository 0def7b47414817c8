use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split a screen into header, content and footer chunks
///
/// # Arguments
/// * `area` - The full screen area
/// * `header_height` - Rows reserved for the header
/// * `footer_height` - Rows reserved for the footer
///
/// # Returns
/// `(header, content, footer)`
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let (header, content, footer) = create_standard_layout(Rect::new(0, 0, 80, 24), 4, 2);
        assert_eq!(header.height, 4);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 18);
        assert_eq!(content.y, 4);
        assert_eq!(footer.y, 22);
    }
}
