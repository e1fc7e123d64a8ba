//! Commercially available inverter power ratings.

use itertools::Itertools;
use pvsizer_quantities::power::Kilowatts;
use serde::{Deserialize, Serialize};

const DEFAULT_RATINGS: [f64; 23] = [
    3.0, 3.5, 3.6, 4.0, 4.6, 5.0, 6.0, 7.0, 7.5, 8.0, 8.2, 9.0, 10.0, 12.0, 15.0, 20.0, 25.0, 30.0,
    40.0, 50.0, 60.0, 75.0, 100.0,
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("the inverter catalog is empty")]
    Empty,

    #[error("inverter rating #{index} is not positive")]
    NonPositive { index: usize },

    #[error("inverter ratings must be strictly ascending, see rating #{index}")]
    NotAscending { index: usize },
}

/// Non-empty, strictly ascending sequence of inverter ratings.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Kilowatts>", into = "Vec<Kilowatts>")]
pub struct InverterCatalog(Vec<Kilowatts>);

impl Default for InverterCatalog {
    fn default() -> Self {
        Self(DEFAULT_RATINGS.into_iter().map(Kilowatts::from).collect())
    }
}

impl TryFrom<Vec<Kilowatts>> for InverterCatalog {
    type Error = CatalogError;

    fn try_from(ratings: Vec<Kilowatts>) -> Result<Self, Self::Error> {
        if ratings.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(index) = ratings.iter().position(|rating| !rating.is_positive()) {
            return Err(CatalogError::NonPositive { index });
        }
        if let Some((index, _)) =
            ratings.iter().tuple_windows().find_position(|(previous, next)| next <= previous)
        {
            return Err(CatalogError::NotAscending { index: index + 1 });
        }
        Ok(Self(ratings))
    }
}

impl From<InverterCatalog> for Vec<Kilowatts> {
    fn from(catalog: InverterCatalog) -> Self {
        catalog.0
    }
}

impl InverterCatalog {
    pub fn ratings(&self) -> &[Kilowatts] {
        &self.0
    }

    pub fn smallest(&self) -> Kilowatts {
        self.0[0]
    }

    pub fn largest(&self) -> Kilowatts {
        self.0[self.0.len() - 1]
    }

    /// Rating with the minimal absolute difference from the target.
    ///
    /// Ties go to the first candidate in catalog order.
    pub fn nearest(&self, target: Kilowatts) -> Kilowatts {
        Self::nearest_of(self.0.iter().copied(), target).unwrap_or_else(|| self.smallest())
    }

    /// Smallest rating that is at least the floor.
    pub fn smallest_at_least(&self, floor: Kilowatts) -> Option<Kilowatts> {
        self.0.iter().copied().find(|rating| *rating >= floor)
    }

    /// Rating nearest to the target among those at least the floor.
    pub fn nearest_at_least(&self, floor: Kilowatts, target: Kilowatts) -> Option<Kilowatts> {
        Self::nearest_of(self.0.iter().copied().filter(|rating| *rating >= floor), target)
    }

    /// Pick the storage inverter that carries the load floor and fits the array best.
    ///
    /// When the array-derived target is below the floor, the smallest rating carrying the floor
    /// wins.
    /// When nothing carries the floor, the largest rating is returned.
    pub fn for_storage(&self, floor: Kilowatts, target: Kilowatts) -> Kilowatts {
        let Some(by_load) = self.smallest_at_least(floor) else {
            return self.largest();
        };
        if target < floor {
            by_load
        } else {
            self.nearest_at_least(floor, target).unwrap_or(by_load)
        }
    }

    fn nearest_of(
        ratings: impl IntoIterator<Item = Kilowatts>,
        target: Kilowatts,
    ) -> Option<Kilowatts> {
        ratings.into_iter().reduce(|best, candidate| {
            if (candidate - target).abs() < (best - target).abs() { candidate } else { best }
        })
    }
}
