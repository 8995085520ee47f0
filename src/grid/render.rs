use super::{tile::ToRgb, Grid, Style};
use crate::{error::Error, geometry::Coord};
use std::{path::Path, time::Duration};

/// Color painted over the walker's current cell.
pub const POSITION_RGB: [u8; 3] = [255, 0, 0];

impl Style {
    /// Pixel offsets within a 4x4 cell area which receive the cell's color.
    fn offsets(self) -> Box<dyn Iterator<Item = (usize, usize)>> {
        match self {
            Style::Cross => {
                let cross: [(usize, usize); 5] = [(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)];
                Box::new(cross.into_iter())
            }
            Style::Grid => Box::new((0..3_usize).flat_map(|y| (0..3_usize).map(move |x| (x, y)))),
            Style::Fill => Box::new((0..4_usize).flat_map(|y| (0..4_usize).map(move |x| (x, y)))),
        }
    }
}

fn render_cell(coord: Coord, rgb: [u8; 3], subpixels: &mut [u8], cols: usize, style: Style) {
    let x = coord.col as usize;
    let y = coord.row as usize;

    let row_pixels = pixel_width(cols) as usize;

    // the linear index of a pixel has the following components:
    //
    // - 2: offset from left edge
    // - 2 * row_pixels: offset from top
    // - x * 4: column of the cell
    // - y * 4 * row_pixels: row of the cell
    // - dx: x offset within the cell
    // - dy * row_pixels: y offset within the cell
    //
    // It is multiplied by 3, because that is how many bytes each pixel takes
    let linear_idx = |(dx, dy): (usize, usize)| {
        (2 + (2 * row_pixels) + (x * 4) + (y * 4 * row_pixels) + dx + (dy * row_pixels)) * 3
    };

    for offset in style.offsets() {
        let idx = linear_idx(offset);
        subpixels[idx..idx + 3].copy_from_slice(&rgb);
    }
}

/// Each cell is 4px wide, with a 2px margin on the outside edges of the image.
pub(crate) fn pixel_width(cols: usize) -> u16 {
    ((cols + 1) * 4) as u16
}

/// Each cell is 4px high, with a 2px margin on the outside edges of the image.
pub(crate) fn pixel_height(rows: usize) -> u16 {
    ((rows + 1) * 4) as u16
}

type Encoder = gif::Encoder<std::io::BufWriter<std::fs::File>>;

impl Grid {
    /// Render this grid as a [`gif::Frame`], painting `highlight` in [`POSITION_RGB`].
    pub(crate) fn render_frame(&self, style: Style, highlight: Option<Coord>) -> gif::Frame<'static> {
        let width = pixel_width(self.cols());
        let height = pixel_height(self.rows());
        let mut subpixels = vec![0; width as usize * height as usize * 3];

        for (coord, cell) in self.iter() {
            let rgb = if Some(coord) == highlight {
                POSITION_RGB
            } else {
                cell.to_rgb()
            };
            render_cell(coord, rgb, &mut subpixels, self.cols(), style);
        }

        gif::Frame::from_rgb(width, height, &subpixels)
    }

    /// Prepare an animation of this grid.
    ///
    /// _Depends on the `render` feature._
    ///
    /// This method does not write any frame. All frames subsequently written must
    /// have the same dimensions as this grid.
    ///
    /// The output file name must end with `.gif`; this is checked before the file
    /// is created. The animation loops forever, showing each frame for `frame_duration`.
    pub fn prepare_animation(
        &self,
        output: &Path,
        frame_duration: Duration,
        style: Style,
    ) -> Result<Animation, RenderError> {
        if output.extension().and_then(|extension| extension.to_str()) != Some("gif") {
            return Err(RenderError::NotGif(output.display().to_string()));
        }

        let file = std::fs::File::create(output)?;
        let encoder = gif::Encoder::new(
            std::io::BufWriter::new(file),
            pixel_width(self.cols()),
            pixel_height(self.rows()),
            &[],
        )?;
        Animation::new(encoder, frame_duration, style, (self.rows(), self.cols()))
    }
}

/// An `Animation` holds a handle to an unfinished gif animation.
///
/// _Depends on the `render` feature._
///
/// It is created with [`Grid::prepare_animation`].
///
/// The gif is finalized when this struct is dropped.
pub struct Animation {
    encoder: Encoder,
    style: Style,
    shape: (usize, usize),
    frames: usize,
}

impl Animation {
    fn new(
        mut encoder: Encoder,
        frame_duration: Duration,
        style: Style,
        shape: (usize, usize),
    ) -> Result<Animation, RenderError> {
        encoder.set_repeat(gif::Repeat::Infinite)?;

        // delay is set in hundredths of a second
        encoder.write_extension(gif::ExtensionData::new_control_ext(
            (frame_duration.as_millis() / 10) as u16,
            gif::DisposalMethod::Any,
            false,
            None,
        ))?;

        Ok(Animation {
            encoder,
            style,
            shape,
            frames: 0,
        })
    }

    /// Write a frame showing `grid`, with the walker at `position`.
    pub fn write_frame(&mut self, grid: &Grid, position: Option<Coord>) -> Result<(), RenderError> {
        if (grid.rows(), grid.cols()) != self.shape {
            return Err(RenderError::Shape(Error::ShapeMismatch {
                rows: self.shape.0,
                cols: self.shape.1,
                detail: format!("frame is {} x {}", grid.rows(), grid.cols()),
            }));
        }
        self.encoder
            .write_frame(&grid.render_frame(self.style, position))?;
        self.frames += 1;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

/// An error which can arise during rendering.
///
/// _Depends on the `render` feature._
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("encoding gif")]
    Gif(#[from] gif::EncodingError),
    #[error("output file {0:?} is not a .gif")]
    NotGif(String),
    #[error(transparent)]
    Shape(#[from] Error),
}
