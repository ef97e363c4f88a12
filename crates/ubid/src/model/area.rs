//! The decoded form of a UBID.

use crate::grid::GridCell;
use crate::CODE_VERSION;

/// A building footprint's bounding box, anchored to the grid cell of its
/// centroid.
///
/// Areas are plain values: [`CodeArea::resize`] and the decoder always
/// return new instances and never touch the input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeArea {
    /// Southern edge latitude of the bounding box.
    pub latitude_lo: f64,
    /// Western edge longitude of the bounding box.
    pub longitude_lo: f64,
    /// Northern edge latitude of the bounding box.
    pub latitude_hi: f64,
    /// Eastern edge longitude of the bounding box.
    pub longitude_hi: f64,
    /// The grid cell containing the footprint's center of mass.
    pub center_of_mass: GridCell,
    /// Version of the UBID grammar the area was decoded from.
    pub code_version: u32,
}

impl CodeArea {
    /// Creates a code area from its bounding box and centroid cell.
    pub fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        center_of_mass: GridCell,
        code_version: u32,
    ) -> Self {
        Self {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            center_of_mass,
            code_version,
        }
    }

    /// Bounding box height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.latitude_hi - self.latitude_lo
    }

    /// Bounding box width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.longitude_hi - self.longitude_lo
    }

    /// Returns the area with every edge moved inwards by half the height
    /// (north, south) or half the width (east, west) of the centroid cell.
    ///
    /// Encoding snaps each corner outwards to the cell that contains it, so a
    /// decoded area overstates the original footprint by up to half a cell
    /// per edge. Resizing removes that padding; it also places every corner
    /// in the middle of a cell, so re-encoding a resized area reproduces the
    /// code it was decoded from.
    pub fn resize(&self) -> CodeArea {
        let half_height = self.center_of_mass.height() / 2.0;
        let half_width = self.center_of_mass.width() / 2.0;

        CodeArea::new(
            self.latitude_lo + half_height,
            self.longitude_lo + half_width,
            self.latitude_hi - half_height,
            self.longitude_hi - half_width,
            self.center_of_mass,
            self.code_version,
        )
    }

    /// Checks that the area can be handed to the encoder.
    ///
    /// Returns a description of the first problem found, or `None`.
    pub fn validate(&self) -> Option<&'static str> {
        if self.code_version != CODE_VERSION {
            return Some("unsupported code version");
        }
        let corners = [
            self.latitude_lo,
            self.longitude_lo,
            self.latitude_hi,
            self.longitude_hi,
        ];
        if corners.iter().any(|v| !v.is_finite()) {
            return Some("bounding box coordinates must be finite");
        }

        let cell = &self.center_of_mass;
        if !cell.latitude_center.is_finite() || !cell.longitude_center.is_finite() {
            return Some("center of mass coordinates must be finite");
        }
        if !(cell.height() > 0.0 && cell.width() > 0.0) {
            return Some("center of mass cell must have a positive size");
        }
        if cell.code_length == 0 {
            return Some("center of mass code length must be positive");
        }
        None
    }
}
