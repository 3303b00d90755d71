//! Terminal rendering of the sortable layout (impure shell).
//!
//! Draws what [`SortableLayout`] describes and nothing more: group rows with
//! column cells, gap lines between groups, the preview marker, and the drag
//! overlay in the status bar. All reordering decisions happened upstream.

use crate::view::layout::{CellSlot, GapSlot, LayoutRow, SortableLayout};
use crate::view::styles::EditorStyles;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Height of one group row, borders included.
const ROW_HEIGHT: u16 = 4;
/// Height of a between-groups gap line.
const GAP_HEIGHT: u16 = 1;

/// Draw one frame of the editor.
pub fn render_editor(
    frame: &mut Frame,
    layout: &SortableLayout,
    styles: &EditorStyles,
    status: &str,
    help_visible: bool,
) {
    let [body, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    render_rows(frame, body, layout, styles);
    render_status(frame, status_area, layout, styles, status);

    if help_visible {
        render_help_overlay(frame, frame.area());
    }
}

fn render_rows(frame: &mut Frame, area: Rect, layout: &SortableLayout, styles: &EditorStyles) {
    let mut constraints = Vec::with_capacity(layout.rows.len() * 2 + 2);
    for _ in &layout.rows {
        constraints.push(Constraint::Length(GAP_HEIGHT));
        constraints.push(Constraint::Length(ROW_HEIGHT));
    }
    constraints.push(Constraint::Length(GAP_HEIGHT));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::vertical(constraints).split(area);

    for (i, row) in layout.rows.iter().enumerate() {
        if let Some(gap) = layout.gaps.get(i) {
            render_gap(frame, chunks[i * 2], gap, styles);
        }
        render_group_row(frame, chunks[i * 2 + 1], row, styles);
    }
    if let Some(gap) = layout.gaps.last() {
        render_gap(frame, chunks[layout.rows.len() * 2], gap, styles);
    }
}

fn render_gap(frame: &mut Frame, area: Rect, gap: &GapSlot, styles: &EditorStyles) {
    let (text, style) = if gap.hovered {
        ("▸ insert new group here".to_string(), styles.hovered)
    } else {
        ("·".repeat(area.width as usize), styles.gap)
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_group_row(frame: &mut Frame, area: Rect, row: &LayoutRow, styles: &EditorStyles) {
    let border_style = if row.hovered {
        styles.hovered
    } else if row.lifted {
        styles.lifted
    } else {
        styles.group
    };
    let block = Block::bordered()
        .title(truncate(&row.label, area.width.saturating_sub(4) as usize))
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if row.cells.is_empty() {
        return;
    }

    // Preview markers take a thin slot before the target cell (or after the
    // last one, for an append preview).
    let mut constraints = Vec::new();
    for j in 0..row.cells.len() {
        if row.preview_index == Some(j) {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Ratio(1, row.cells.len() as u32));
    }
    if row.preview_index == Some(row.cells.len()) {
        constraints.push(Constraint::Length(1));
    }
    let chunks = Layout::horizontal(constraints).split(inner);

    let mut chunk = 0;
    for (j, cell) in row.cells.iter().enumerate() {
        if row.preview_index == Some(j) {
            render_preview_marker(frame, chunks[chunk], styles);
            chunk += 1;
        }
        render_cell(frame, chunks[chunk], cell, styles);
        chunk += 1;
    }
    if row.preview_index == Some(row.cells.len()) {
        render_preview_marker(frame, chunks[chunk], styles);
    }
}

fn render_preview_marker(frame: &mut Frame, area: Rect, styles: &EditorStyles) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("▌")).collect();
    frame.render_widget(Paragraph::new(lines).style(styles.preview), area);
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &CellSlot, styles: &EditorStyles) {
    let style = if cell.hovered {
        styles.hovered
    } else if cell.lifted {
        styles.lifted
    } else {
        styles.column
    };
    let block = Block::bordered()
        .title(truncate(&cell.label, area.width.saturating_sub(4) as usize))
        .border_style(style);
    let body = match cell.element_count {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    };
    frame.render_widget(Paragraph::new(body).style(style).block(block), area);
}

fn render_status(
    frame: &mut Frame,
    area: Rect,
    layout: &SortableLayout,
    styles: &EditorStyles,
    status: &str,
) {
    let text = match &layout.overlay {
        Some(overlay) => {
            let kind = if overlay.is_group { "group" } else { "column" };
            format!(
                "dragging {kind} '{}' — Enter: drop · Esc: cancel  {status}",
                overlay.label
            )
        }
        None => format!("Enter: lift · arrows: move · s: save · ?: help · q: quit  {status}"),
    };
    frame.render_widget(Paragraph::new(text).style(styles.status), area);
}

/// Centered help overlay listing the keybindings.
pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let width = 46.min(area.width);
    let height = 12.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    let lines = vec![
        Line::from("arrows / hjkl   move cursor"),
        Line::from("Enter / Space   lift or drop"),
        Line::from("Esc             cancel drag"),
        Line::from("s               save tree"),
        Line::from("?               toggle this help"),
        Line::from("q / Ctrl+c      quit"),
        Line::from(""),
        Line::from("Drop on a gap line to split a column"),
        Line::from("into its own group."),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title("help")),
        popup,
    );
}

fn truncate(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    let mut out = String::new();
    for ch in label.chars() {
        if out.width() + 1 >= max_width {
            out.push('…');
            return out;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_labels() {
        assert_eq!(truncate("intro", 10), "intro");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        let out = truncate("a very long column label", 8);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 8);
    }
}
