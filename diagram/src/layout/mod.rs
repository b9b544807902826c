//! Assigns every symbol of a resolved [`Tree`] its position, size and wrapped description.
//!
//! Boxes are placed in a single depth-first pass. A child starts to the right of its parent; the
//! first child shares its parent's row, and every later sibling starts a new row below
//! everything placed so far. The rows are tracked by a [`LayoutContext`] that is threaded through
//! the whole pass, since the next row depends on what the previous subtree occupied.

pub mod measure;
pub mod wrap;

use log::trace;

use crate::symbol::Symbol;
use crate::tree::{SymbolId, Tree};
use measure::FULL_HEIGHT;

pub const ROOT_X: i32 = 20;
pub const DEFAULT_ROOT_Y: i32 = 50;
/// Horizontal space between a parent's right edge and its children.
pub const X_INDENT: i32 = 45;
/// Vertical space between rows.
pub const Y_GAP: i32 = 15;
/// Box width per wrapped description column.
pub const DESCRIPTION_CHAR_WIDTH: f64 = 6.0;
/// Height of one description line.
pub const DESCRIPTION_LINE_HEIGHT: i32 = 14;

#[derive(Clone, Debug, Default)]
pub struct LayoutOptions {
    /// Vertical position of the root; defaults to [`DEFAULT_ROOT_Y`].
    pub start_y: Option<i32>,
}

/// Positioning state shared by all boxes of one layout pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutContext {
    /// The y of the most recently placed box, which is the lowest row so far.
    pub highest_y: i32,
    /// Description height that still hangs below the current row.
    pub extra_height: i32,
    pub previous_x: i32,
    pub previous_y: i32,
    placed_any: bool,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// y for a box that is not the first child of its parent: one row below the lowest box so
    /// far, clear of any description hanging below that row.
    fn next_row_y(&self) -> i32 {
        self.highest_y + FULL_HEIGHT + Y_GAP + self.extra_height
    }

    /// Records a placed box. Boxes further right on the same row share the row's description
    /// space; the tallest description of the row wins.
    fn record(&mut self, x: i32, y: i32, additional_height: i32) {
        let continues_row = self.placed_any && y == self.previous_y && x > self.previous_x;
        self.extra_height = if continues_row {
            self.extra_height.max(additional_height)
        } else {
            additional_height
        };
        self.highest_y = y;
        self.previous_x = x;
        self.previous_y = y;
        self.placed_any = true;
    }
}

/// Lays out the whole tree with a fresh [`LayoutContext`].
pub fn layout(tree: &mut Tree, options: &LayoutOptions) {
    let mut context = LayoutContext::new();
    let order: Vec<SymbolId> = tree.iter().collect();
    for id in order {
        prepare_box(tree, id, &mut context, options);
    }
}

/// Places and sizes a single box. The parent must already be laid out.
pub fn prepare_box(
    tree: &mut Tree,
    id: SymbolId,
    context: &mut LayoutContext,
    options: &LayoutOptions,
) {
    let (x, y) = match tree.get(id).parent() {
        None => (ROOT_X, options.start_y.unwrap_or(DEFAULT_ROOT_Y)),
        Some(parent) => {
            let x = tree.get(parent).geometry.right() + X_INDENT;
            if tree.is_first_child(id) {
                (x, context.highest_y)
            } else {
                (x, context.next_row_y())
            }
        }
    };

    let symbol = tree.get_mut(id);
    symbol.geometry.x = x;
    symbol.geometry.y = y;
    symbol.geometry.width = measure::width(&symbol.kind);
    symbol.geometry.height = measure::height(&symbol.kind);
    process_description(symbol);
    context.record(x, y, symbol.additional_height);

    trace!(
        "{} at ({}, {}) size {}x{} +{}",
        symbol.kind.display_name(),
        x,
        y,
        symbol.geometry.width,
        symbol.geometry.height,
        symbol.additional_height
    );
}

/// Wraps the documentation of `symbol` to the width of its box.
///
/// The additional height grows by the total line count so far after each documentation entry,
/// so later entries also count the lines of all earlier ones again.
pub fn process_description(symbol: &mut Symbol) {
    symbol.description.clear();
    symbol.additional_height = 0;
    if !symbol.kind.shows_documentation() {
        return;
    }

    let columns = (f64::from(symbol.geometry.width) / DESCRIPTION_CHAR_WIDTH).round() as usize;
    for documentation in &symbol.documentation {
        symbol
            .description
            .extend(wrap::wrap(documentation, columns));
        let lines = i32::try_from(symbol.description.len()).unwrap_or(i32::MAX);
        symbol.additional_height = symbol
            .additional_height
            .saturating_add(lines.saturating_mul(DESCRIPTION_LINE_HEIGHT));
    }
}
