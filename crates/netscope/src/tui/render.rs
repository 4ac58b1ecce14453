//! Rendering - layout and widget construction for the dashboard
//!
//! Pure projection of the view state onto ratatui widgets; nothing here
//! mutates state or talks to the network.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Table},
    Frame,
};

use crate::view::ViewState;
use netscope_common::{timefmt::hhmm_label, Rgb};

/// Upper bound on x-axis tick labels, regardless of series length. A
/// rendering hint only; the underlying data is never thinned.
const MAX_TICKS: usize = 10;

/// Draw the whole dashboard.
pub fn draw(f: &mut Frame, state: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Charts
            Constraint::Min(8),    // Tables
            Constraint::Length(3), // Footer
        ])
        .split(f.size());

    draw_header(f, chunks[0], state);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    draw_time_series(f, chart_chunks[0], state);
    draw_protocols(f, chart_chunks[1], state);

    let table_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[2]);
    draw_device_table(f, table_chunks[0], state);
    draw_traffic_log(f, table_chunks[1], state);

    draw_footer(f, chunks[3]);
}

fn draw_header(f: &mut Frame, area: Rect, state: &ViewState) {
    let window = match state.selected_minutes {
        m if m % 1440 == 0 && m >= 1440 => format!("{}d", m / 1440),
        m if m % 60 == 0 && m >= 60 => format!("{}h", m / 60),
        m => format!("{}m", m),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " netscope ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  |  window: "),
        Span::styled(window, Style::default().fg(Color::Yellow)),
        Span::raw("  |  "),
        Span::styled(
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .alignment(Alignment::Left);

    f.render_widget(header, area);
}

fn draw_time_series(f: &mut Frame, area: Rect, state: &ViewState) {
    let Some(chart) = &state.time_series else {
        draw_placeholder(f, area, " Traffic Over Time ");
        return;
    };

    let points: Vec<(f64, f64)> = chart
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v as f64))
        .collect();
    let max_y = chart.values.iter().copied().max().unwrap_or(0).max(1) as f64;
    let max_x = chart.values.len().saturating_sub(1).max(1) as f64;

    let datasets = vec![Dataset::default()
        .name("bytes")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Rgb(0x4F, 0xC3, 0xF7)))
        .data(&points)];

    // At most MAX_TICKS evenly spaced HH:MM labels along the x axis.
    let x_labels: Vec<Span> = tick_indices(chart.labels.len(), MAX_TICKS)
        .into_iter()
        .map(|i| Span::styled(hhmm_label(&chart.labels[i]), Style::default().fg(Color::Gray)))
        .collect();

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Traffic Over Time (bytes) "),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_y])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", max_y as u64)),
                ]),
        );

    f.render_widget(widget, area);
}

fn draw_protocols(f: &mut Frame, area: Rect, state: &ViewState) {
    let Some(chart) = &state.protocol else {
        draw_placeholder(f, area, " Protocols ");
        return;
    };

    let bars: Vec<Bar> = chart
        .labels
        .iter()
        .zip(&chart.values)
        .zip(&chart.colors)
        .map(|((label, value), color)| {
            Bar::default()
                .label(Line::from(label.as_str()))
                .value(*value)
                .style(Style::default().fg(to_color(*color)))
        })
        .collect();

    let widget = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Protocols (bytes) "),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(widget, area);
}

fn draw_device_table(f: &mut Frame, area: Rect, state: &ViewState) {
    let rows: Vec<Row> = state
        .device_rows
        .iter()
        .map(|d| Row::new(vec![d.ip_address.clone(), d.total_size.to_string()]))
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Percentage(60), Constraint::Percentage(40)],
    )
    .header(
        Row::new(vec!["IP address", "Total bytes"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Devices ({}) ", state.device_rows.len())),
    );

    f.render_widget(table, area);
}

fn draw_traffic_log(f: &mut Frame, area: Rect, state: &ViewState) {
    let rows: Vec<Row> = state
        .log_rows
        .iter()
        .map(|l| {
            Row::new(vec![
                l.timestamp.clone(),
                l.src_ip.clone(),
                l.dst_ip.clone(),
                l.protocol.clone(),
                l.packet_size.to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(19),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Timestamp", "Source", "Destination", "Proto", "Size"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Traffic Log ({}) ", state.log_rows.len())),
    );

    f.render_widget(table, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" q/Esc ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(" Quit  "),
        Span::styled(" ←/→ ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(" Time window  "),
        Span::raw("  Auto-refresh on"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    )
    .alignment(Alignment::Left);

    f.render_widget(footer, area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, title: &str) {
    let waiting = Paragraph::new("Waiting for first snapshot...")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(waiting, area);
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// At most `max` evenly spaced indices into a series of `len` points.
fn tick_indices(len: usize, max: usize) -> Vec<usize> {
    if len == 0 || max == 0 {
        return Vec::new();
    }
    if len <= max {
        return (0..len).collect();
    }
    let step = (len + max - 1) / max;
    (0..len).step_by(step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_keeps_every_tick() {
        assert_eq!(tick_indices(3, 10), vec![0, 1, 2]);
    }

    #[test]
    fn long_series_is_capped_at_max() {
        for len in [11, 60, 100, 1440] {
            assert!(tick_indices(len, 10).len() <= 10, "len={}", len);
        }
    }

    #[test]
    fn ticks_start_at_the_first_point() {
        assert_eq!(tick_indices(100, 10)[0], 0);
    }

    #[test]
    fn empty_series_has_no_ticks() {
        assert!(tick_indices(0, 10).is_empty());
    }
}
