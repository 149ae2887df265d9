//! Theme and styling for the lazyswap TUI.
//!
//! Two palettes, dark and light, share one set of semantic slots. The dark
//! palette is the default.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::domain::{PaymentChain, SellerStatus, TxStatus};

// ============================================================================
// Theme Selection
// ============================================================================

/// User-selectable theme, persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => DARK,
            Self::Light => LIGHT,
        }
    }
}

// ============================================================================
// Palettes
// ============================================================================

/// Semantic colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub selected_bg: Color,
    pub tron: Color,
    pub conflux: Color,
    pub node_active: Color,
    pub node_inactive: Color,
    pub edge_strong: Color,
    pub edge_weak: Color,
}

/// Tokyo Night-inspired dark palette.
pub const DARK: Palette = Palette {
    bg: Color::Rgb(26, 27, 38),
    fg: Color::Rgb(192, 202, 245),
    muted: Color::Gray,
    border: Color::DarkGray,
    primary: Color::Cyan,
    accent: Color::Magenta,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    selected_bg: Color::DarkGray,
    tron: Color::LightBlue,
    conflux: Color::LightMagenta,
    node_active: Color::Cyan,
    node_inactive: Color::DarkGray,
    edge_strong: Color::Gray,
    edge_weak: Color::DarkGray,
};

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(250, 250, 250),
    fg: Color::Rgb(23, 23, 23),
    muted: Color::Rgb(107, 114, 128),
    border: Color::Rgb(209, 213, 219),
    primary: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(124, 58, 237),
    success: Color::Rgb(22, 163, 74),
    warning: Color::Rgb(217, 119, 6),
    error: Color::Rgb(220, 38, 38),
    selected_bg: Color::Rgb(229, 231, 235),
    tron: Color::Rgb(3, 105, 161),
    conflux: Color::Rgb(109, 40, 217),
    node_active: Color::Rgb(37, 99, 235),
    node_inactive: Color::Rgb(156, 163, 175),
    edge_strong: Color::Rgb(75, 85, 99),
    edge_weak: Color::Rgb(209, 213, 219),
};

impl Palette {
    /// Base style: foreground on background.
    #[must_use]
    pub const fn base(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    #[must_use]
    pub const fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::new().fg(self.primary)
        } else {
            Style::new().fg(self.border)
        }
    }

    #[must_use]
    pub const fn title_style(&self, focused: bool) -> Style {
        if focused {
            Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(self.fg).add_modifier(Modifier::BOLD)
        }
    }

    #[must_use]
    pub const fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    #[must_use]
    pub const fn selected_style(&self) -> Style {
        Style::new()
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub const fn error_style(&self) -> Style {
        Style::new().fg(self.error)
    }

    /// Badge color for a transaction status.
    #[must_use]
    pub const fn tx_status(&self, status: &TxStatus) -> Color {
        match status {
            TxStatus::Paid | TxStatus::SessionCreated => self.success,
            TxStatus::Pending => self.warning,
            TxStatus::Failed => self.error,
            TxStatus::Other(_) => self.muted,
        }
    }

    #[must_use]
    pub const fn seller_status(&self, status: &SellerStatus) -> Color {
        if status.is_active() {
            self.success
        } else {
            self.muted
        }
    }

    #[must_use]
    pub const fn chain(&self, chain: Option<PaymentChain>) -> Color {
        match chain {
            Some(PaymentChain::Tron) => self.tron,
            Some(PaymentChain::Conflux) => self.conflux,
            None => self.muted,
        }
    }
}
