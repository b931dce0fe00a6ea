//! Crossterm drawing for every screen.
//!
//! Rendering is a pure function of the snapshot and the frame layout, so
//! it writes to any `Write` (tests use a byte buffer).

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use survivor_core::enums::{Archetype, Behavior, GamePhase};
use survivor_core::state::{EndScreenView, GameStateSnapshot, HudView, UpgradeMenuView};
use survivor_core::types::Playfield;

use glam::DVec2;

/// Rows above the field (HUD) and below it (status/help).
const HUD_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 1;
const COOLDOWN_BAR_WIDTH: usize = 12;

/// Maps playfield coordinates onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub field: Playfield,
    pub cols: u16,
    pub rows: u16,
    /// First terminal row of the field.
    pub top: u16,
}

impl Viewport {
    pub fn new(field: Playfield, term_cols: u16, term_rows: u16) -> Self {
        Self {
            field,
            cols: term_cols.max(1),
            rows: term_rows.saturating_sub(HUD_ROWS + FOOTER_ROWS).max(1),
            top: HUD_ROWS,
        }
    }

    /// Terminal cell for `point`, or `None` when it lies off the field.
    pub fn project(&self, point: DVec2) -> Option<(u16, u16)> {
        if !self.field.contains_padded(point, 0.0) {
            return None;
        }
        let col = (point.x / self.field.width * f64::from(self.cols)).floor() as u16;
        let row = (point.y / self.field.height * f64::from(self.rows)).floor() as u16;
        Some((col.min(self.cols - 1), self.top + row.min(self.rows - 1)))
    }
}

/// Everything the renderer needs besides the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub cols: u16,
    pub rows: u16,
    pub shape_cursor: usize,
    /// Transient message shown in the footer.
    pub status: Option<&'a str>,
}

pub fn archetype_glyph(archetype: Archetype) -> char {
    match archetype {
        Archetype::Circle => 'O',
        Archetype::Triangle => 'A',
        Archetype::Square => '#',
    }
}

pub fn behavior_glyph(behavior: Behavior) -> (char, Color) {
    match behavior {
        Behavior::Seeking => ('@', Color::Red),
        Behavior::PredictiveStraight => ('>', Color::Magenta),
        Behavior::BouncingDiagonal => ('X', Color::Yellow),
        Behavior::Sinusoidal => ('~', Color::Cyan),
    }
}

/// Draw one frame.
pub fn render<W: Write>(out: &mut W, snap: &GameStateSnapshot, frame: &Frame<'_>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    match (snap.phase, snap.playfield) {
        (GamePhase::ShapeSelect, _) | (_, None) => draw_shape_select(out, frame)?,
        (_, Some(field)) => {
            let viewport = Viewport::new(field, frame.cols, frame.rows);
            draw_hud(out, &snap.hud, frame.cols)?;
            draw_field(out, snap, &viewport)?;
            if let Some(menu) = &snap.upgrade_menu {
                draw_upgrade_menu(out, menu, frame)?;
            }
            if let Some(end) = &snap.end_screen {
                draw_end_screen(out, end, snap.phase, frame)?;
            }
            draw_footer(out, snap.phase, frame)?;
        }
    }
    out.queue(style::ResetColor)?;
    out.flush()
}

fn print_at<W: Write>(out: &mut W, col: u16, row: u16, color: Color, text: &str) -> io::Result<()> {
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn print_centered<W: Write>(out: &mut W, cols: u16, row: u16, color: Color, text: &str) -> io::Result<()> {
    let width = text.chars().count() as u16;
    print_at(out, (cols / 2).saturating_sub(width / 2), row, color, text)
}

fn draw_shape_select<W: Write>(out: &mut W, frame: &Frame<'_>) -> io::Result<()> {
    let cy = frame.rows / 2;
    print_centered(out, frame.cols, cy.saturating_sub(5), Color::Cyan, "SHAPE SURVIVOR")?;
    print_centered(out, frame.cols, cy.saturating_sub(3), Color::White, "Choose Your Shape")?;
    for (i, archetype) in Archetype::ALL.iter().enumerate() {
        let marker = if i == frame.shape_cursor { '>' } else { ' ' };
        let line = format!(
            "{marker} [{}] {} {}",
            i + 1,
            archetype_glyph(*archetype),
            archetype.label()
        );
        let color = if i == frame.shape_cursor {
            Color::Yellow
        } else {
            Color::Grey
        };
        print_centered(out, frame.cols, cy.saturating_sub(1) + i as u16, color, &line)?;
    }
    print_centered(
        out,
        frame.cols,
        cy + 4,
        Color::DarkGrey,
        "WASD or Arrows to move | 1-3 or Enter to start | Q to quit",
    )
}

/// `[#####-------]` for a fraction in [0, 1].
pub fn cooldown_bar(progress: f64) -> String {
    let filled = (progress.clamp(0.0, 1.0) * COOLDOWN_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(COOLDOWN_BAR_WIDTH - filled)
    )
}

/// One heart per max health point, filled up to current health.
pub fn hearts(health: u32, max_health: u32) -> String {
    (0..max_health)
        .map(|i| if i < health { '♥' } else { '♡' })
        .collect()
}

fn draw_hud<W: Write>(out: &mut W, hud: &HudView, cols: u16) -> io::Result<()> {
    print_at(out, 0, 0, Color::Red, &hearts(hud.health, hud.max_health))?;
    print_centered(out, cols, 0, Color::White, &format!("Time: {}", hud.clock))?;
    let level = format!("Lv. {}  EXP: {}/{}", hud.level, hud.exp, hud.exp_to_level);
    print_at(
        out,
        cols.saturating_sub(level.chars().count() as u16 + 1),
        0,
        Color::White,
        &level,
    )?;
    let color = if hud.weapon_ready {
        Color::Green
    } else {
        Color::DarkGrey
    };
    print_centered(
        out,
        cols,
        1,
        color,
        &format!("Weapon Cooldown {}", cooldown_bar(hud.cooldown_progress)),
    )
}

fn draw_field<W: Write>(out: &mut W, snap: &GameStateSnapshot, viewport: &Viewport) -> io::Result<()> {
    for orb in &snap.orbs {
        if let Some((col, row)) = viewport.project(orb.position) {
            print_at(out, col, row, Color::Blue, "o")?;
        }
    }
    for position in &snap.projectiles {
        if let Some((col, row)) = viewport.project(*position) {
            print_at(out, col, row, Color::DarkYellow, "*")?;
        }
    }
    for enemy in &snap.enemies {
        if let Some((col, row)) = viewport.project(enemy.position) {
            let (glyph, color) = behavior_glyph(enemy.behavior);
            print_at(out, col, row, color, &glyph.to_string())?;
        }
    }
    if let Some(player) = &snap.player {
        if let Some((col, row)) = viewport.project(player.position) {
            let color = if player.alpha < 0.75 {
                Color::DarkGrey
            } else {
                Color::Green
            };
            print_at(out, col, row, color, &archetype_glyph(player.archetype).to_string())?;
        }
    }
    Ok(())
}

fn draw_upgrade_menu<W: Write>(out: &mut W, menu: &UpgradeMenuView, frame: &Frame<'_>) -> io::Result<()> {
    let top = (frame.rows / 2).saturating_sub(3);
    print_centered(out, frame.cols, top, Color::White, &menu.title)?;
    for (i, option) in menu.options.iter().enumerate() {
        let line = format!("[{}] {}", i + 1, option);
        print_centered(out, frame.cols, top + 2 + i as u16, Color::Yellow, &line)?;
    }
    Ok(())
}

fn draw_end_screen<W: Write>(
    out: &mut W,
    end: &EndScreenView,
    phase: GamePhase,
    frame: &Frame<'_>,
) -> io::Result<()> {
    let cy = frame.rows / 2;
    let color = if phase == GamePhase::Won {
        Color::Yellow
    } else {
        Color::White
    };
    print_centered(out, frame.cols, cy.saturating_sub(2), color, &end.title)?;
    print_centered(out, frame.cols, cy, Color::White, &format!("Survival Time: {}", end.clock))?;
    print_centered(out, frame.cols, cy + 1, Color::White, &format!("Level: {}", end.level))?;
    print_centered(
        out,
        frame.cols,
        cy + 3,
        Color::Yellow,
        "[R] Play Again   [M] Choose Shape   [Q] Quit",
    )
}

fn draw_footer<W: Write>(out: &mut W, phase: GamePhase, frame: &Frame<'_>) -> io::Result<()> {
    let row = frame.rows.saturating_sub(1);
    let help = match phase {
        GamePhase::Playing => "WASD/Arrows move | Q quit",
        GamePhase::UpgradeMenuOpen => "1-4 choose an upgrade",
        _ => "",
    };
    let text = frame.status.unwrap_or(help);
    print_at(out, 0, row, Color::DarkGrey, text)
}
