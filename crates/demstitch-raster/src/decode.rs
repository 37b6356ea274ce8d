//! Binary tile decoding.
//!
//! A tile buffer is a headerless stream of 16-bit little-endian signed
//! samples; all metadata lives in the companion header. The buffer is
//! row-major with the first row at the northern edge of the tile.

use crate::error::FormatError;
use crate::grid::Grid;
use crate::header::Header;

impl Grid {
    /// Decode a flat little-endian `i16` sample buffer into a grid.
    ///
    /// The buffer must hold exactly `header.samples()` samples. Samples
    /// equal to the header's declared nodata value decode to `None`. The
    /// grid's bounding box is [`Header::bounds`].
    pub fn decode_i16_le(header: &Header, buf: &[u8]) -> Result<Grid, FormatError> {
        let expected = header.byte_len();
        if buf.len() != expected {
            return Err(FormatError::BufferLength {
                expected,
                actual: buf.len(),
            });
        }

        let mut data = Vec::with_capacity(header.samples());
        for pair in buf.chunks_exact(2) {
            let sample = i16::from_le_bytes([pair[0], pair[1]]);
            data.push(match header.nodata {
                Some(nodata) if sample == nodata => None,
                _ => Some(f32::from(sample)),
            });
        }

        Ok(Grid::from_cells(
            header.nrows,
            header.ncols,
            header.bounds(),
            header.cell_size(),
            data,
        ))
    }
}
