//! A single art document in progress
//!
//! The session owns the live grid and its history exclusively. Every
//! mutating call builds the next grid first and only then records the
//! pre-edit snapshot and swaps the new grid in, so a failed call leaves
//! both grid and history exactly as they were.

use log::debug;

use crate::edit::{Tool, ToolState, erase_cell, flood_fill, paint_cell, pick_color};
use crate::history::History;
use crate::io::configuration::{
    DEFAULT_DRAW_COLOR, DEFAULT_FILL, DEFAULT_HEIGHT, DEFAULT_PALETTE_LEN, DEFAULT_PIXEL_SIZE,
    DEFAULT_WIDTH, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE,
};
use crate::io::document::ArtDocument;
use crate::io::error::{Result, invalid_parameter};
use crate::raster::{Color, Grid};
use crate::session::{EditIntent, Palette};

/// Settings for a new editing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Initial grid width
    pub width: usize,
    /// Initial grid height
    pub height: usize,
    /// Color of new cells and of resize padding
    pub fill: Color,
    /// Initial active color
    pub draw_color: Color,
    /// Initial palette length (all squares `fill`)
    pub palette_len: usize,
    /// On-screen cell size handed to the renderer
    pub pixel_size: u32,
    /// Maximum undo entries; unbounded when `None`
    pub history_limit: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill: DEFAULT_FILL,
            draw_color: DEFAULT_DRAW_COLOR,
            palette_len: DEFAULT_PALETTE_LEN,
            pixel_size: DEFAULT_PIXEL_SIZE,
            history_limit: None,
        }
    }
}

// Drag stroke in progress; the whole stroke is one history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stroke {
    color: Color,
    cells: usize,
}

fn validate_pixel_size(size: u32) -> Result<u32> {
    if !(MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE).contains(&size) {
        return Err(invalid_parameter(
            "pixel_size",
            &size,
            &format!("must be between {MIN_PIXEL_SIZE} and {MAX_PIXEL_SIZE}"),
        ));
    }
    Ok(size)
}

/// Editing session: grid, history, palette, tool and color state
#[derive(Debug, Clone)]
pub struct EditorSession {
    grid: Grid,
    history: History,
    palette: Palette,
    tools: ToolState,
    current_color: Color,
    fill: Color,
    pixel_size: u32,
    stroke: Option<Stroke>,
}

impl EditorSession {
    /// Start a session with a blank grid
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is out of range
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let grid = Grid::new(config.width, config.height, config.fill)?;
        Self::with_grid(grid, config)
    }

    /// Resume editing a saved document
    ///
    /// The document's dimensions replace those in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is inconsistent or any other setting
    /// is out of range
    pub fn from_document(document: &ArtDocument, config: &SessionConfig) -> Result<Self> {
        let grid = document.to_grid()?;
        Self::with_grid(grid, config)
    }

    fn with_grid(grid: Grid, config: &SessionConfig) -> Result<Self> {
        let history = match config.history_limit {
            Some(limit) => History::with_limit(limit)?,
            None => History::new(),
        };

        Ok(Self {
            grid,
            history,
            palette: Palette::new(config.palette_len, config.fill)?,
            tools: ToolState::new(),
            current_color: config.draw_color,
            fill: config.fill,
            pixel_size: validate_pixel_size(config.pixel_size)?,
            stroke: None,
        })
    }

    /// The live grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Undo/redo state
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Palette squares
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Active drawing color
    pub const fn current_color(&self) -> Color {
        self.current_color
    }

    /// Color used for resize padding
    pub const fn fill_color(&self) -> Color {
        self.fill
    }

    /// On-screen cell size
    pub const fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    /// Currently active tool
    pub const fn active_tool(&self) -> Option<Tool> {
        self.tools.active()
    }

    /// Check if a drag stroke is in progress
    pub const fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// Serializable form of the live grid
    pub fn document(&self) -> ArtDocument {
        ArtDocument::from_grid(&self.grid)
    }

    /// Set the active drawing color
    pub const fn set_current_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Toggle a tool, returning the resulting active tool
    pub fn select_tool(&mut self, tool: Tool) -> Option<Tool> {
        self.tools.select(tool)
    }

    /// Switch every tool off
    pub const fn deactivate_tool(&mut self) {
        self.tools.deactivate();
    }

    /// Change the on-screen cell size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size` is outside the allowed range
    pub fn set_pixel_size(&mut self, size: u32) -> Result<()> {
        self.pixel_size = validate_pixel_size(size)?;
        Ok(())
    }

    fn commit(&mut self, next: Grid, edit: &str) {
        self.history.before_edit(&self.grid);
        self.grid = next;
        debug!(
            "{edit}: grid now {}x{}",
            self.grid.width(),
            self.grid.height()
        );
    }

    /// Paint one cell with the active color
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index` is not a cell of the grid
    pub fn paint(&mut self, index: usize) -> Result<()> {
        self.paint_with(index, self.current_color)
    }

    /// Paint one cell with a specific color
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index` is not a cell of the grid
    pub fn paint_with(&mut self, index: usize, color: Color) -> Result<()> {
        self.end_stroke();
        let next = paint_cell(&self.grid, index, color)?;
        self.commit(next, "paint");
        Ok(())
    }

    /// Erase one cell to transparent
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index` is not a cell of the grid
    pub fn erase(&mut self, index: usize) -> Result<()> {
        self.end_stroke();
        let next = erase_cell(&self.grid, index)?;
        self.commit(next, "erase");
        Ok(())
    }

    /// Flood fill with the active color
    ///
    /// Returns whether the grid changed; a fill that changes nothing is not
    /// recorded in history.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index` is not a cell of the grid
    pub fn fill(&mut self, index: usize) -> Result<bool> {
        self.fill_with(index, self.current_color)
    }

    /// Flood fill with a specific color
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index` is not a cell of the grid
    pub fn fill_with(&mut self, index: usize, color: Color) -> Result<bool> {
        self.end_stroke();
        if pick_color(&self.grid, index)? == color {
            return Ok(false);
        }
        let next = flood_fill(&self.grid, index, color)?;
        self.commit(next, "fill");
        Ok(true)
    }

    /// Resize, padding new cells with the session fill color
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is out of range
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.resize_with(width, height, self.fill)
    }

    /// Resize, padding new cells with `fill`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is out of range
    pub fn resize_with(&mut self, width: usize, height: usize, fill: Color) -> Result<()> {
        self.end_stroke();
        let next = self.grid.resize(width, height, fill)?;
        self.commit(next, "resize");
        Ok(())
    }

    /// Sample a cell into the active color; not recorded in history
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index` is not a cell of the grid
    pub fn pick(&mut self, index: usize) -> Result<Color> {
        let color = pick_color(&self.grid, index)?;
        self.current_color = color;
        Ok(color)
    }

    /// Step back one edit; returns whether anything changed
    pub fn undo(&mut self) -> bool {
        self.end_stroke();
        self.history.undo_in_place(&mut self.grid)
    }

    /// Step forward one undone edit; returns whether anything changed
    pub fn redo(&mut self) -> bool {
        self.end_stroke();
        self.history.redo_in_place(&mut self.grid)
    }

    /// Press on a cell: records one history entry and paints the cell
    ///
    /// With the erase tool active the stroke erases; otherwise it paints with
    /// the active color. While fill or pick is active a press leaves the grid
    /// alone and starts no stroke; the following click does the work.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index` is not a cell of the grid
    pub fn begin_stroke(&mut self, index: usize) -> Result<()> {
        self.end_stroke();
        let color = match self.tools.active() {
            Some(tool) if tool.is_one_shot() => {
                self.grid.position_of(index)?;
                return Ok(());
            }
            Some(Tool::Erase) => Color::TRANSPARENT,
            _ => self.current_color,
        };
        let next = paint_cell(&self.grid, index, color)?;
        self.commit(next, "stroke");
        self.stroke = Some(Stroke { color, cells: 1 });
        Ok(())
    }

    /// Drag over a cell; paints without a new history entry
    ///
    /// Ignored when no stroke is in progress.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index` is not a cell of the grid
    pub fn extend_stroke(&mut self, index: usize) -> Result<()> {
        let Some(stroke) = self.stroke.as_mut() else {
            return Ok(());
        };
        self.grid = paint_cell(&self.grid, index, stroke.color)?;
        stroke.cells += 1;
        Ok(())
    }

    /// Release; returns how many cells the stroke painted
    pub fn end_stroke(&mut self) -> usize {
        self.stroke.take().map_or(0, |stroke| {
            debug!("stroke: {} cells with {}", stroke.cells, stroke.color);
            stroke.cells
        })
    }

    /// Click a cell with the active tool
    ///
    /// Fill and pick switch themselves off afterwards; erase erases; draw
    /// (or no tool) paints with the active color.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index` is not a cell of the grid; the tool
    /// state is left unchanged in that case
    pub fn click(&mut self, index: usize) -> Result<()> {
        self.grid.position_of(index)?;
        match self.tools.consume() {
            Some(Tool::Fill) => self.fill(index).map(|_| ()),
            Some(Tool::Pick) => self.pick(index).map(|_| ()),
            Some(Tool::Erase) => self.erase(index),
            Some(Tool::Draw) | None => self.paint(index),
        }
    }

    /// Append a square of the session fill color to the palette
    ///
    /// # Errors
    ///
    /// Returns `PaletteSize` if the palette is full
    pub fn add_palette_square(&mut self) -> Result<()> {
        self.palette.push(self.fill)
    }

    /// Remove the last palette square
    ///
    /// # Errors
    ///
    /// Returns `PaletteSize` if only one square is left
    pub fn remove_palette_square(&mut self) -> Result<Color> {
        self.palette.pop()
    }

    /// Recolor a palette square
    ///
    /// # Errors
    ///
    /// Returns `PaletteIndex` if the square does not exist
    pub fn set_palette_color(&mut self, index: usize, color: Color) -> Result<()> {
        self.palette.set(index, color)
    }

    /// Make a palette square's color the active color
    ///
    /// # Errors
    ///
    /// Returns `PaletteIndex` if the square does not exist
    pub fn select_palette_color(&mut self, index: usize) -> Result<Color> {
        let color = self.palette.get(index)?;
        self.current_color = color;
        Ok(color)
    }

    /// Load a whole palette, replacing the current squares
    ///
    /// # Errors
    ///
    /// Returns `PaletteSize` if the color count is out of range
    pub fn replace_palette(&mut self, colors: Vec<Color>) -> Result<()> {
        self.palette.replace(colors)
    }

    /// Apply one discrete input event
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation
    pub fn apply(&mut self, intent: &EditIntent) -> Result<()> {
        match *intent {
            EditIntent::Paint { index, color } => {
                self.paint_with(index, color.unwrap_or(self.current_color))
            }
            EditIntent::Erase { index } => self.erase(index),
            EditIntent::Fill { index, color } => self
                .fill_with(index, color.unwrap_or(self.current_color))
                .map(|_| ()),
            EditIntent::Resize {
                width,
                height,
                fill,
            } => self.resize_with(width, height, fill.unwrap_or(self.fill)),
            EditIntent::Undo => {
                self.undo();
                Ok(())
            }
            EditIntent::Redo => {
                self.redo();
                Ok(())
            }
            EditIntent::Pick { index } => self.pick(index).map(|_| ()),
            EditIntent::SelectColor { color } => {
                self.set_current_color(color);
                Ok(())
            }
            EditIntent::SelectTool { tool } => {
                self.select_tool(tool);
                Ok(())
            }
            EditIntent::DeselectTool => {
                self.deactivate_tool();
                Ok(())
            }
            EditIntent::Click { index } => self.click(index),
            EditIntent::StrokeBegin { index } => self.begin_stroke(index),
            EditIntent::StrokeMove { index } => self.extend_stroke(index),
            EditIntent::StrokeEnd => {
                self.end_stroke();
                Ok(())
            }
        }
    }
}
