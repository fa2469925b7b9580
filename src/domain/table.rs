//! Table entity and its capability.

use std::f64::consts::PI;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::domain::error::{DomainResult, ValidationError};
use crate::domain::validation::all_positive;

/// Validated table attributes. Dimensions are in centimeters.
///
/// ```
/// use entities::Table;
///
/// let table = Table::new("wood", 75.0, 120.0, 60.0).unwrap();
/// assert_eq!(table.material(), "wood");
/// assert!(Table::new("wood", 0.0, 120.0, 60.0).is_err());
/// ```
///
/// Tables serialize but never deserialize, so validation cannot be skipped:
///
/// ```compile_fail
/// let table: entities::Table = toml::from_str("material = \"wood\"\nheight = 0.0\nlength = 1.0\nwidth = 1.0").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    material: String,
    height: f64,
    length: f64,
    width: f64,
}

impl Table {
    /// Build a table, failing unless height, length and width are all > 0.
    pub fn new(
        material: impl Into<String>,
        height: f64,
        length: f64,
        width: f64,
    ) -> DomainResult<Self> {
        let material = material.into();
        if !all_positive(&[height, length, width]) {
            let err = ValidationError::TableDimensions {
                height,
                length,
                width,
            };
            warn!(%material, height, length, width, "rejected table: {}", err);
            return Err(err);
        }
        debug!(%material, height, length, width, "table created");
        Ok(Self {
            material,
            height,
            length,
            width,
        })
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Replace the material. The new value is stored as given.
    pub fn set_material(&mut self, material: impl Into<String>) {
        self.material = material.into();
    }
}

/// Operations every concrete table must supply.
///
/// A type only becomes a table by implementing all of them:
///
/// ```compile_fail
/// use entities::{Table, TableBehavior};
///
/// struct Sketch(Table);
///
/// impl TableBehavior for Sketch {
///     fn table(&self) -> &Table {
///         &self.0
///     }
///     // calculate_area and change_material missing
/// }
/// ```
pub trait TableBehavior {
    /// The validated attributes backing this table.
    fn table(&self) -> &Table;

    /// Surface area in square centimeters.
    fn calculate_area(&self) -> f64;

    fn change_material(&mut self, new_material: &str);
}

/// Table with a rectangular top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectangularTable {
    table: Table,
}

impl RectangularTable {
    pub fn new(
        material: impl Into<String>,
        height: f64,
        length: f64,
        width: f64,
    ) -> DomainResult<Self> {
        Ok(Self::from(Table::new(material, height, length, width)?))
    }
}

impl From<Table> for RectangularTable {
    fn from(table: Table) -> Self {
        Self { table }
    }
}

impl TableBehavior for RectangularTable {
    fn table(&self) -> &Table {
        &self.table
    }

    #[instrument(level = "trace", skip(self))]
    fn calculate_area(&self) -> f64 {
        self.table.length * self.table.width
    }

    #[instrument(level = "trace", skip(self))]
    fn change_material(&mut self, new_material: &str) {
        self.table.set_material(new_material);
    }
}

/// Table with an oval top inscribed in its length x width footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvalTable {
    table: Table,
}

impl OvalTable {
    pub fn new(
        material: impl Into<String>,
        height: f64,
        length: f64,
        width: f64,
    ) -> DomainResult<Self> {
        Ok(Self::from(Table::new(material, height, length, width)?))
    }
}

impl From<Table> for OvalTable {
    fn from(table: Table) -> Self {
        Self { table }
    }
}

impl TableBehavior for OvalTable {
    fn table(&self) -> &Table {
        &self.table
    }

    #[instrument(level = "trace", skip(self))]
    fn calculate_area(&self) -> f64 {
        PI * (self.table.length / 2.0) * (self.table.width / 2.0)
    }

    #[instrument(level = "trace", skip(self))]
    fn change_material(&mut self, new_material: &str) {
        self.table.set_material(new_material);
    }
}
