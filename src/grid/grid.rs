use super::{tile::DisplayWidth, Boundary};
use crate::{
    error::Error,
    geometry::{Cell, Coord, Direction},
};
use bitvec::bitvec;
use itertools::Itertools;
use rand::Rng;
use std::{collections::VecDeque, convert::TryFrom, fmt, ops::Index, str::FromStr};

/// A Grid keeps track of the cells a walker moves through.
///
/// Its coordinate system puts the origin in the top left corner: rows grow
/// downward and columns grow rightward.
///
/// Alongside the working cells, the grid keeps the layout it was built from.
/// That original layout never changes; it answers boundary queries and is what
/// [`Grid::reset`] restores.
///
/// ## Entry Points
///
/// - [`Grid::new`] checks an explicit layout against its declared dimensions.
/// - [`Grid::random`] seeds walls with a coin flip per cell.
/// - When a layout is written out as text, use [`Grid::try_from`].
///
/// Every constructor rejects dimensions which cannot be addressed by an `i32`
/// [`Coord`] with [`Error::TooLarge`].
///
/// ## Display
///
/// `{}` writes rows of plain glyphs; `{:#}` colors each glyph for a terminal.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    original: Vec<Cell>,
    rows: usize,
    cols: usize,
    boundary_opening: bool,
}

impl Grid {
    fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Grid {
        debug_assert_eq!(cells.len(), rows * cols);
        let boundary_opening = Boundary::new(rows, cols)
            .any(|coord| cells[coord.col as usize + coord.row as usize * cols] != Cell::Wall);
        Grid {
            original: cells.clone(),
            cells,
            rows,
            cols,
            boundary_opening,
        }
    }

    /// Check that every coordinate of a `rows x cols` grid fits in a [`Coord`].
    fn check_dimensions(rows: usize, cols: usize) -> Result<(), Error> {
        if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
            return Err(Error::TooLarge { rows, cols });
        }
        Ok(())
    }

    /// Create a grid from an explicit layout.
    ///
    /// The layout must have exactly `rows` rows, each exactly `cols` cells long.
    pub fn new<Row>(rows: usize, cols: usize, layout: &[Row]) -> Result<Grid, Error>
    where
        Row: AsRef<[Cell]>,
    {
        Self::check_dimensions(rows, cols)?;
        let mismatch = |detail: String| Error::ShapeMismatch { rows, cols, detail };

        if layout.len() != rows {
            return Err(mismatch(format!("found {} rows", layout.len())));
        }
        if let Some((idx, row)) = layout
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != cols)
        {
            return Err(mismatch(format!(
                "row {} has {} columns",
                idx,
                row.as_ref().len()
            )));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for row in layout {
            cells.extend_from_slice(row.as_ref());
        }
        Ok(Self::from_cells(rows, cols, cells))
    }

    /// Procedurally create a new `Grid` from a function.
    pub fn procedural(
        rows: usize,
        cols: usize,
        mut procedure: impl FnMut(Coord) -> Cell,
    ) -> Result<Grid, Error> {
        Self::check_dimensions(rows, cols)?;
        let index2coord = make_index2coord(cols);
        let cells = (0..rows * cols)
            .map(|idx| procedure(index2coord(idx)))
            .collect();
        Ok(Self::from_cells(rows, cols, cells))
    }

    /// Create a grid whose cells are each independently a wall with probability one half.
    ///
    /// This just seeds walls at random; the result is not guaranteed to be a maze,
    /// nor to be connected.
    pub fn random(rows: usize, cols: usize, rng: &mut impl Rng) -> Result<Grid, Error> {
        Self::procedural(rows, cols, |_| Cell::from(rng.gen::<bool>()))
    }

    /// Number of rows in this grid.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in this grid.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` when a coordinate is legal within the bounds of this grid.
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// convert a 2d coordinate into a 1d index into the cells
    fn coord2index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.col as usize + coord.row as usize * self.cols)
    }

    pub(crate) fn out_of_bounds(&self, coord: Coord) -> Error {
        Error::OutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// The current state of a cell, or `None` when the coordinate is off the grid.
    #[inline]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.coord2index(coord).map(|idx| self.cells[idx])
    }

    /// The current state of a cell.
    pub fn get(&self, coord: Coord) -> Result<Cell, Error> {
        self.cell(coord).ok_or_else(|| self.out_of_bounds(coord))
    }

    /// The state a cell had in the layout this grid was built from.
    pub fn original(&self, coord: Coord) -> Option<Cell> {
        self.coord2index(coord).map(|idx| self.original[idx])
    }

    /// Set a single cell.
    ///
    /// Only an `Unvisited` cell may change, and only to `Visited`; anything else
    /// fails with [`Error::InvalidMark`] and leaves the grid unchanged. Writing the
    /// value a cell already holds succeeds and changes nothing.
    pub fn mark(&mut self, coord: Coord, value: Cell) -> Result<(), Error> {
        let idx = self
            .coord2index(coord)
            .ok_or_else(|| self.out_of_bounds(coord))?;
        let current = self.cells[idx];
        if !current.can_become(value) {
            return Err(Error::InvalidMark {
                coord,
                from: current,
                to: value,
            });
        }
        self.cells[idx] = value;
        Ok(())
    }

    /// Iterate over the coordinates and current cells of this grid, row by row.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Coord, Cell)> {
        let index2coord = make_index2coord(self.cols);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (index2coord(idx), cell))
    }

    /// Iterate over the rows of this grid.
    pub fn lines(&self) -> impl '_ + Iterator<Item = &[Cell]> {
        // `chunks` panics on a zero chunk size
        self.cells.chunks(self.cols.max(1))
    }

    /// Number of cells which currently hold `value`.
    pub fn count(&self, value: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    /// Return an iterator of all legal coordinates orthogonally adjacent to the given one,
    /// clockwise from the top.
    pub fn orthogonal_adjacencies(&self, coord: Coord) -> impl '_ + Iterator<Item = Coord> {
        Direction::iter()
            .map(move |direction| coord + direction)
            .filter(move |&adjacent| self.in_bounds(adjacent))
    }

    /// Create an iterator over the coordinates on the outer ring of this grid.
    pub fn boundary(&self) -> Boundary {
        Boundary::new(self.rows, self.cols)
    }

    /// `true` unless every cell on the outer ring of the original layout is a wall.
    ///
    /// A grid without an opening is an enclosed island; a walk over it is complete
    /// before it begins.
    #[inline]
    pub fn has_boundary_opening(&self) -> bool {
        self.boundary_opening
    }

    /// Restore the working cells to the original layout.
    pub fn reset(&mut self) {
        self.cells.clone_from(&self.original);
    }

    /// Count the open cells of the original layout reachable from the given coordinate.
    ///
    /// Moves are orthogonal. A starting coordinate which is a wall reaches nothing.
    pub fn reachable_from(&self, coord: Coord) -> Result<usize, Error> {
        let start = self
            .coord2index(coord)
            .ok_or_else(|| self.out_of_bounds(coord))?;

        let mut visited = bitvec!(0; self.original.len());
        let mut queue = VecDeque::new();
        queue.push_back((start, coord));
        let mut reachable = 0;

        while let Some((idx, coord)) = queue.pop_front() {
            // a coordinate can be queued more than once via alternate paths
            if visited[idx] {
                continue;
            }
            visited.set(idx, true);

            if self.original[idx] == Cell::Wall {
                continue;
            }
            reachable += 1;

            for neighbor in self.orthogonal_adjacencies(coord) {
                if let Some(neighbor_idx) = self.coord2index(neighbor) {
                    if !visited[neighbor_idx] {
                        queue.push_back((neighbor_idx, neighbor));
                    }
                }
            }
        }

        Ok(reachable)
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        let idx = self.coord2index(coord)?;
        self.cells.get_mut(idx)
    }

    /// Try to convert the contents of a reader into a grid.
    ///
    /// Each non-blank line is a row. Whitespace within a line is ignored, so both
    /// `x 1 0` and `x10` describe the same row.
    pub fn parse<R>(input: R) -> Result<Grid, LayoutConversionErr>
    where
        R: std::io::BufRead,
    {
        let mut arr = Vec::new();

        for line in input.lines() {
            let line: String = line?.chars().filter(|c| !c.is_whitespace()).collect();

            let mut row = Vec::with_capacity(line.len() / Cell::DISPLAY_WIDTH);
            for chunk in Cell::chunks(&line) {
                row.push(Cell::from_str(&chunk).map_err(|err| {
                    LayoutConversionErr::CellConversion(err, chunk.to_string())
                })?);
            }
            if !row.is_empty() {
                arr.push(row);
            }
        }

        let Some(first) = arr.first() else {
            return Err(LayoutConversionErr::Empty);
        };
        let width = first.len();
        if !arr.iter().all(|row| row.len() == width) {
            return Err(LayoutConversionErr::NotRectangular);
        }

        Grid::new(arr.len(), width, &arr).map_err(Into::into)
    }
}

/// make a function which converts a 1d index in the cells into a 2d coordinate without borrowing the grid
///
/// Only valid for dimensions which passed `check_dimensions`, so both parts fit an `i32`.
fn make_index2coord(cols: usize) -> impl Fn(usize) -> Coord {
    move |idx| Coord::new((idx / cols) as i32, (idx % cols) as i32)
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("boundary_opening", &self.boundary_opening)
            .field("cells", &format_args!("[...; {}]", self.cells.len()))
            .finish()
    }
}

/// Rows of space-separated glyphs: `x` unvisited, `1` wall, `0` visited.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.lines() {
            if f.alternate() {
                writeln!(f, "{}", row.iter().map(|cell| cell.colored()).join(" "))?;
            } else {
                writeln!(f, "{}", row.iter().join(" "))?;
            }
        }
        Ok(())
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    /// Panics if the coordinate is out of bounds.
    fn index(&self, coord: Coord) -> &Cell {
        match self.coord2index(coord) {
            Some(idx) => &self.cells[idx],
            None => panic!("{}", self.out_of_bounds(coord)),
        }
    }
}

impl TryFrom<&str> for Grid {
    type Error = LayoutConversionErr;

    /// the input should be in natural graphical order:
    /// its first characters are the top left.
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Grid::parse(input.as_bytes())
    }
}

impl TryFrom<&std::path::Path> for Grid {
    type Error = LayoutConversionErr;

    fn try_from(path: &std::path::Path) -> Result<Self, Self::Error> {
        let file = std::fs::File::open(path)?;
        Grid::parse(std::io::BufReader::new(file))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutConversionErr {
    #[error("converting cell from {1:?}")]
    CellConversion(#[source] parse_display::ParseError, String),
    #[error("layout must be rectangular")]
    NotRectangular,
    #[error("layout has no rows")]
    Empty,
    #[error(transparent)]
    Shape(#[from] Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
