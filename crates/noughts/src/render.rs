//! Render layer: projects board snapshots and status text onto a display
//! surface.
//!
//! The surface is the external collaborator (a terminal frame, a printed
//! grid, a test double). The [`Renderer`] keeps no game state of its own;
//! every call is determined by its arguments and the surface it paints.

use crate::board::CELL_COUNT;
use crate::position::WinningCombo;
use crate::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A display that shows nine cells and one status line.
pub trait Surface {
    /// Shows `cell` at `index` and drops any highlight on it.
    fn paint_cell(&mut self, index: usize, cell: Cell);

    /// Marks the cell at `index` as part of the winning line.
    fn highlight_cell(&mut self, index: usize);

    /// Replaces the status text.
    fn show_status(&mut self, text: &str);
}

/// Projects game state onto a [`Surface`].
#[derive(Debug, Clone, Default)]
pub struct Renderer<S> {
    surface: S,
}

impl<S: Surface> Renderer<S> {
    /// Creates a renderer painting onto `surface`.
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Repaints all nine cells from a board snapshot, clearing highlights.
    #[instrument(skip_all)]
    pub fn render(&mut self, snapshot: &[Cell; CELL_COUNT]) {
        for (index, cell) in snapshot.iter().enumerate() {
            self.surface.paint_cell(index, *cell);
        }
        trace!("Board rendered");
    }

    /// Replaces the status message.
    #[instrument(skip(self))]
    pub fn set_message(&mut self, text: &str) {
        self.surface.show_status(text);
    }

    /// Highlights the three cells of a winning line.
    #[instrument(skip(self))]
    pub fn highlight_win(&mut self, combo: &WinningCombo) {
        for index in combo.indices() {
            self.surface.highlight_cell(index);
        }
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// What one display cell currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellView {
    /// Text content: empty, "X" or "O".
    pub text: String,
    /// Marker styling applied to the cell.
    pub marker: Option<Marker>,
    /// Whether the cell belongs to the winning line.
    pub highlighted: bool,
}

/// Retained surface: remembers what was painted so a frontend can draw it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameSurface {
    cells: [CellView; CELL_COUNT],
    status: String,
}

impl FrameSurface {
    /// Creates a blank surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nine cell views in row-major order.
    pub fn cells(&self) -> &[CellView; CELL_COUNT] {
        &self.cells
    }

    /// The cell view at `index`.
    pub fn cell(&self, index: usize) -> Option<&CellView> {
        self.cells.get(index)
    }

    /// Current status text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Indices of highlighted cells, ascending.
    pub fn highlighted(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, view)| view.highlighted)
            .map(|(index, _)| index)
            .collect()
    }
}

impl Surface for FrameSurface {
    fn paint_cell(&mut self, index: usize, cell: Cell) {
        if let Some(view) = self.cells.get_mut(index) {
            view.text = cell.to_string();
            view.marker = cell.marker();
            view.highlighted = false;
        }
    }

    fn highlight_cell(&mut self, index: usize) {
        if let Some(view) = self.cells.get_mut(index) {
            view.highlighted = true;
        }
    }

    fn show_status(&mut self, text: &str) {
        self.status = text.to_string();
    }
}

impl std::fmt::Display for FrameSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            let line = chunk
                .iter()
                .map(|view| {
                    let text = if view.text.is_empty() { " " } else { view.text.as_str() };
                    if view.highlighted {
                        format!("[{}]", text)
                    } else {
                        format!(" {} ", text)
                    }
                })
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "{}", line)?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        write!(f, "{}", self.status)
    }
}
