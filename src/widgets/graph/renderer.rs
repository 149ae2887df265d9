//! Canvas renderer for the seller topology.

use std::collections::HashMap;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph, Widget,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};

use super::types::Topology;
use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::theme::Palette;

/// Draws a [`Topology`] with a one-line legend underneath.
#[derive(Debug, Clone)]
pub struct TopologyWidget<'a> {
    topology: &'a Topology,
    palette: Palette,
    show_hub_label: bool,
}

impl<'a> TopologyWidget<'a> {
    #[must_use]
    pub const fn new(topology: &'a Topology, palette: Palette) -> Self {
        Self {
            topology,
            palette,
            show_hub_label: true,
        }
    }

    #[must_use]
    pub const fn without_hub_label(mut self) -> Self {
        self.show_hub_label = false;
        self
    }

    /// Legend: node and edge counts plus the hub, if any.
    #[must_use]
    pub fn legend(&self) -> Line<'static> {
        let p = self.palette;
        let active = self.topology.active_count();
        let inactive = self.topology.nodes.len() - active;
        let mut spans = vec![
            Span::styled("● ", Style::default().fg(p.node_active)),
            Span::raw(format!("{active} active  ")),
            Span::styled("● ", Style::default().fg(p.node_inactive)),
            Span::raw(format!("{inactive} inactive  ")),
            Span::styled("─ ", Style::default().fg(p.edge_strong)),
            Span::raw(format!("{} links", self.topology.edges.len())),
        ];
        if let Some(hub) = self.topology.hub() {
            spans.push(Span::styled("  hub: ", p.muted_style()));
            spans.push(Span::styled(
                format!("{} ({})", hub.id, hub.degree),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }

    fn render_canvas(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let topology = self.topology;
        let max_weight = topology.max_weight().max(1);
        let positions: HashMap<&str, (f64, f64)> = topology
            .nodes
            .iter()
            // Canvas y grows upwards; layout y grows downwards.
            .map(|n| (n.id.as_str(), (n.x, CANVAS_HEIGHT - n.y)))
            .collect();

        let active: Vec<(f64, f64)> = topology
            .nodes
            .iter()
            .filter(|n| n.active)
            .map(|n| positions[n.id.as_str()])
            .collect();
        let inactive: Vec<(f64, f64)> = topology
            .nodes
            .iter()
            .filter(|n| !n.active)
            .map(|n| positions[n.id.as_str()])
            .collect();
        let hub = topology
            .hub()
            .filter(|_| self.show_hub_label)
            .map(|n| (positions[n.id.as_str()], n.id.clone()));

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, CANVAS_WIDTH])
            .y_bounds([0.0, CANVAS_HEIGHT])
            .paint(move |ctx| {
                for edge in &topology.edges {
                    let (Some(&(x1, y1)), Some(&(x2, y2))) = (
                        positions.get(edge.a.as_str()),
                        positions.get(edge.b.as_str()),
                    ) else {
                        continue;
                    };
                    let color = if edge.weight * 2 >= max_weight {
                        p.edge_strong
                    } else {
                        p.edge_weak
                    };
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color,
                    });
                }
                ctx.layer();
                ctx.draw(&Points {
                    coords: &inactive,
                    color: p.node_inactive,
                });
                ctx.draw(&Points {
                    coords: &active,
                    color: p.node_active,
                });
                if let Some(((x, y), id)) = &hub {
                    ctx.print(
                        *x,
                        *y,
                        Span::styled(format!("◆ {id}"), Style::default().fg(p.accent)),
                    );
                }
            })
            .render(area, buf);
    }
}

impl Widget for TopologyWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.topology.is_empty() {
            Paragraph::new("No sellers to plot yet")
                .style(self.palette.muted_style())
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let [canvas_area, legend_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        self.render_canvas(canvas_area, buf);
        Paragraph::new(self.legend())
            .alignment(Alignment::Center)
            .render(legend_area, buf);
    }
}
