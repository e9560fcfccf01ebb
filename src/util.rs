use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered within `area`.  If `size`
/// does not fit, the result is clamped to `area`.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}
