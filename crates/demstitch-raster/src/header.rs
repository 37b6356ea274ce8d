//! Tile header parsing.
//!
//! Each elevation tile ships with a small text header describing the grid
//! dimensions and spatial extent of its binary sample buffer. The header is
//! a sequence of whitespace-delimited `KEY VALUE` rows in the ESRI BIL
//! `.hdr` vocabulary:
//!
//! ```text
//! BYTEORDER     I
//! LAYOUT        BIL
//! NROWS         6000
//! NCOLS         10800
//! NBANDS        1
//! NBITS         16
//! BANDROWBYTES  21600
//! TOTALROWBYTES 21600
//! BANDGAPBYTES  0
//! NODATA        -500
//! XLLCORNER     -180.0
//! YLLCORNER     40.0
//! XDIM          0.00833333333333
//! YDIM          0.00833333333333
//! ```
//!
//! Keys are matched by name, case-insensitively, and the key set is
//! validated: unknown keys, duplicates, and missing required keys are all
//! rejected rather than risking a silently misread field. Layout keys
//! (`BYTEORDER`, `NBITS`, ...) may be absent, but when present must name
//! the one layout the decoder reads: single-band little-endian signed
//! 16-bit samples.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::FormatError;
use crate::grid::{Bounds, CellSize};

/// Keys this parser understands. Anything else is an error.
const KNOWN_KEYS: [&str; 17] = [
    "BYTEORDER",
    "LAYOUT",
    "NROWS",
    "NCOLS",
    "NBANDS",
    "NBITS",
    "BANDROWBYTES",
    "TOTALROWBYTES",
    "BANDGAPBYTES",
    "NODATA",
    "NODATA_VALUE",
    "XLLCORNER",
    "YLLCORNER",
    "XDIM",
    "YDIM",
    "CELLSIZE",
    "PIXELTYPE",
];

/// Parsed tile header.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Number of sample rows in the tile.
    pub nrows: usize,
    /// Number of sample columns in the tile.
    pub ncols: usize,
    /// Map x coordinate of the west edge.
    pub xllcorner: f64,
    /// Map y coordinate of the south edge.
    pub yllcorner: f64,
    /// Cell width in map units.
    pub xdim: f64,
    /// Cell height in map units.
    pub ydim: f64,
    /// Sample value that marks a cell as having no measurement.
    pub nodata: Option<i16>,
}

impl Header {
    /// Parse a header from its text form.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let mut fields: HashMap<String, String> = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut parts = line.split_whitespace();
            let (key, value) = match (parts.next(), parts.next(), parts.next()) {
                (Some(k), Some(v), None) => (k.to_ascii_uppercase(), v.to_string()),
                _ => {
                    return Err(FormatError::MalformedRow {
                        row: idx + 1,
                        text: line.to_string(),
                    })
                }
            };
            if !KNOWN_KEYS.contains(&key.as_str()) {
                return Err(FormatError::UnknownKey(key));
            }
            if fields.insert(key.clone(), value).is_some() {
                return Err(FormatError::DuplicateKey(key));
            }
        }

        check_supported(&fields, "BYTEORDER", "I")?;
        check_supported(&fields, "LAYOUT", "BIL")?;
        check_supported(&fields, "NBANDS", "1")?;
        check_supported(&fields, "NBITS", "16")?;
        check_supported(&fields, "PIXELTYPE", "SIGNEDINT")?;

        let nrows: usize = required(&fields, "NROWS")?;
        let ncols: usize = required(&fields, "NCOLS")?;
        if nrows == 0 {
            return Err(invalid(&fields, "NROWS"));
        }
        if ncols == 0 {
            return Err(invalid(&fields, "NCOLS"));
        }

        let xllcorner: f64 = required(&fields, "XLLCORNER")?;
        let yllcorner: f64 = required(&fields, "YLLCORNER")?;
        if !xllcorner.is_finite() {
            return Err(invalid(&fields, "XLLCORNER"));
        }
        if !yllcorner.is_finite() {
            return Err(invalid(&fields, "YLLCORNER"));
        }

        // Cell size comes either per axis (XDIM/YDIM) or once for both
        // (CELLSIZE); giving it both ways is giving it twice.
        let (xdim, ydim) = if fields.contains_key("CELLSIZE") {
            if fields.contains_key("XDIM") || fields.contains_key("YDIM") {
                return Err(FormatError::DuplicateKey("CELLSIZE".to_string()));
            }
            let cellsize: f64 = required(&fields, "CELLSIZE")?;
            (cellsize, cellsize)
        } else {
            (required(&fields, "XDIM")?, required(&fields, "YDIM")?)
        };
        if !(xdim.is_finite() && xdim > 0.0) {
            return Err(invalid(&fields, if fields.contains_key("CELLSIZE") { "CELLSIZE" } else { "XDIM" }));
        }
        if !(ydim.is_finite() && ydim > 0.0) {
            return Err(invalid(&fields, if fields.contains_key("CELLSIZE") { "CELLSIZE" } else { "YDIM" }));
        }

        let nodata = match (
            optional::<i16>(&fields, "NODATA")?,
            optional::<i16>(&fields, "NODATA_VALUE")?,
        ) {
            (Some(_), Some(_)) => return Err(FormatError::DuplicateKey("NODATA".to_string())),
            (a, b) => a.or(b),
        };

        Ok(Header {
            nrows,
            ncols,
            xllcorner,
            yllcorner,
            xdim,
            ydim,
            nodata,
        })
    }

    /// Number of samples the paired binary tile must contain.
    pub fn samples(&self) -> usize {
        self.nrows * self.ncols
    }

    /// Number of bytes the paired binary tile must contain.
    pub fn byte_len(&self) -> usize {
        self.samples() * 2
    }

    /// Bounding box of the tile: the header origin is the south-west
    /// corner, so `xmax = xllcorner + ncols * xdim` and
    /// `ymax = yllcorner + nrows * ydim`.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            xmin: self.xllcorner,
            xmax: self.xllcorner + self.ncols as f64 * self.xdim,
            ymin: self.yllcorner,
            ymax: self.yllcorner + self.nrows as f64 * self.ydim,
        }
    }

    /// Cell size of the tile.
    pub fn cell_size(&self) -> CellSize {
        CellSize {
            x: self.xdim,
            y: self.ydim,
        }
    }
}

/// Reject a layout key whose value names a layout the decoder cannot read.
fn check_supported(
    fields: &HashMap<String, String>,
    key: &'static str,
    expected: &'static str,
) -> Result<(), FormatError> {
    match fields.get(key) {
        Some(value) if !value.eq_ignore_ascii_case(expected) => Err(FormatError::Unsupported {
            key,
            value: value.clone(),
            expected,
        }),
        _ => Ok(()),
    }
}

fn required<T: FromStr>(fields: &HashMap<String, String>, key: &'static str) -> Result<T, FormatError> {
    let value = fields.get(key).ok_or(FormatError::MissingKey(key))?;
    value.parse().map_err(|_| FormatError::InvalidValue {
        key: key.to_string(),
        value: value.clone(),
    })
}

fn optional<T: FromStr>(fields: &HashMap<String, String>, key: &str) -> Result<Option<T>, FormatError> {
    match fields.get(key) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| FormatError::InvalidValue {
            key: key.to_string(),
            value: value.clone(),
        }),
    }
}

fn invalid(fields: &HashMap<String, String>, key: &str) -> FormatError {
    FormatError::InvalidValue {
        key: key.to_string(),
        value: fields.get(key).cloned().unwrap_or_default(),
    }
}
