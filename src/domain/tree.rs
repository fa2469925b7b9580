//! Tree entity and its capability.

use serde::Serialize;
use tracing::{debug, instrument, trace, warn};

use crate::domain::error::{DomainResult, ValidationError};
use crate::domain::validation::is_positive;

/// Validated tree attributes: height in meters, age in years.
///
/// ```
/// use entities::Tree;
///
/// let oak = Tree::new("oak", 5.0, 10).unwrap();
/// assert_eq!(oak.age(), 10);
/// assert!(Tree::new("oak", 5.0, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tree {
    species: String,
    height: f64,
    age: u32,
}

impl Tree {
    /// Build a tree, failing unless height > 0 and age > 0.
    pub fn new(species: impl Into<String>, height: f64, age: u32) -> DomainResult<Self> {
        let species = species.into();
        if !is_positive(height) || age == 0 {
            let err = ValidationError::TreeMeasurements { height, age };
            warn!(%species, height, age, "rejected tree: {}", err);
            return Err(err);
        }
        debug!(%species, height, age, "tree created");
        Ok(Self {
            species,
            height,
            age,
        })
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Advance the tree by `years` and add `height_gain_m` meters.
    ///
    /// Only growth is recorded: gains that are not finite and positive leave
    /// the height unchanged, and the age saturates instead of wrapping.
    pub fn record_growth(&mut self, years: u32, height_gain_m: f64) {
        self.age = self.age.saturating_add(years);
        if height_gain_m.is_finite() && is_positive(height_gain_m) {
            self.height += height_gain_m;
        } else if height_gain_m != 0.0 {
            warn!(height_gain_m, "ignoring non-growing height change");
        }
    }
}

/// Operations every concrete tree must supply.
///
/// ```compile_fail
/// use entities::{Tree, TreeBehavior};
///
/// struct Sapling(Tree);
///
/// impl TreeBehavior for Sapling {
///     fn tree(&self) -> &Tree {
///         &self.0
///     }
///     fn grow(&mut self, _years: u32) {}
///     // drop_leaves missing
/// }
/// ```
pub trait TreeBehavior {
    /// The validated attributes backing this tree.
    fn tree(&self) -> &Tree;

    /// Advance age and/or height by an amount tied to `years`.
    fn grow(&mut self, years: u32);

    /// Seasonal leaf loss.
    fn drop_leaves(&mut self);
}

/// Canopy state of a deciduous tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Foliage {
    Leafy,
    Bare,
}

fn check_growth_rate(rate: f64) -> DomainResult<f64> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(rate)
    } else {
        warn!(rate, "rejected growth rate");
        Err(ValidationError::GrowthRate(rate))
    }
}

/// Tree that grows linearly and sheds its leaves every autumn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeciduousTree {
    tree: Tree,
    growth_rate_m_per_year: f64,
    foliage: Foliage,
}

impl DeciduousTree {
    pub fn new(
        species: impl Into<String>,
        height: f64,
        age: u32,
        growth_rate_m_per_year: f64,
    ) -> DomainResult<Self> {
        Self::from_tree(Tree::new(species, height, age)?, growth_rate_m_per_year)
    }

    /// Wrap an already validated tree; only the rate is checked.
    pub fn from_tree(tree: Tree, growth_rate_m_per_year: f64) -> DomainResult<Self> {
        Ok(Self {
            tree,
            growth_rate_m_per_year: check_growth_rate(growth_rate_m_per_year)?,
            foliage: Foliage::Leafy,
        })
    }

    pub fn growth_rate_m_per_year(&self) -> f64 {
        self.growth_rate_m_per_year
    }

    pub fn foliage(&self) -> Foliage {
        self.foliage
    }
}

impl TreeBehavior for DeciduousTree {
    fn tree(&self) -> &Tree {
        &self.tree
    }

    #[instrument(level = "trace", skip(self))]
    fn grow(&mut self, years: u32) {
        if years == 0 {
            return;
        }
        self.tree
            .record_growth(years, self.growth_rate_m_per_year * f64::from(years));
        // a new season brings the leaves back
        self.foliage = Foliage::Leafy;
    }

    #[instrument(level = "trace", skip(self))]
    fn drop_leaves(&mut self) {
        self.foliage = Foliage::Bare;
    }
}

/// Tree that keeps its needles all year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvergreenTree {
    tree: Tree,
    growth_rate_m_per_year: f64,
}

impl EvergreenTree {
    pub fn new(
        species: impl Into<String>,
        height: f64,
        age: u32,
        growth_rate_m_per_year: f64,
    ) -> DomainResult<Self> {
        Self::from_tree(Tree::new(species, height, age)?, growth_rate_m_per_year)
    }

    pub fn from_tree(tree: Tree, growth_rate_m_per_year: f64) -> DomainResult<Self> {
        Ok(Self {
            tree,
            growth_rate_m_per_year: check_growth_rate(growth_rate_m_per_year)?,
        })
    }

    pub fn growth_rate_m_per_year(&self) -> f64 {
        self.growth_rate_m_per_year
    }
}

impl TreeBehavior for EvergreenTree {
    fn tree(&self) -> &Tree {
        &self.tree
    }

    #[instrument(level = "trace", skip(self))]
    fn grow(&mut self, years: u32) {
        self.tree
            .record_growth(years, self.growth_rate_m_per_year * f64::from(years));
    }

    #[instrument(level = "trace", skip(self))]
    fn drop_leaves(&mut self) {
        trace!(species = %self.tree.species, "evergreen keeps its foliage");
    }
}
