//! Location-derived tariff and irradiance data.

mod tables;

use std::borrow::Cow;

use pvsizer_quantities::{rate::KilowattHourRate, time::Hours};
use serde::Serialize;

use self::tables::{DEFAULT_REGION, REGIONS, RegionEntry};

/// Local energy tariff.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tariff {
    pub distributor: Cow<'static, str>,
    pub unit_price: KilowattHourRate,
}

/// Static key-value store of location data.
///
/// Implementations must fall back to a default entry instead of failing on unknown keys.
pub trait LookupProvider {
    fn tariff(&self, region: &str, locality: &str) -> Tariff;

    /// Equivalent hours of full sun per day.
    fn irradiance(&self, region: &str) -> Hours;

    /// Known localities of the region, sorted.
    fn localities(&self, region: &str) -> Vec<&'static str>;
}

/// Built-in Brazilian tables.
#[derive(Copy, Clone, Debug, Default)]
pub struct StaticLookup;

impl StaticLookup {
    /// Known regions as `(code, name)` pairs.
    pub fn regions(self) -> impl Iterator<Item = (&'static str, &'static str)> {
        REGIONS.iter().map(|entry| (entry.code, entry.name))
    }

    fn find(region: &str) -> Option<&'static RegionEntry> {
        REGIONS.iter().find(|entry| entry.code.eq_ignore_ascii_case(region.trim()))
    }

    fn find_or_default(region: &str) -> &'static RegionEntry {
        Self::find(region).unwrap_or(&DEFAULT_REGION)
    }
}

impl LookupProvider for StaticLookup {
    fn tariff(&self, region: &str, locality: &str) -> Tariff {
        let entry = Self::find_or_default(region);
        let (distributor, price) = entry
            .localities
            .iter()
            .find(|(name, _)| *name == locality.trim())
            .map_or(entry.tariff, |(_, tariff)| *tariff);
        Tariff {
            distributor: Cow::Borrowed(distributor),
            unit_price: KilowattHourRate::from(price),
        }
    }

    fn irradiance(&self, region: &str) -> Hours {
        Hours::from(Self::find_or_default(region).irradiance)
    }

    fn localities(&self, region: &str) -> Vec<&'static str> {
        let mut localities =
            Self::find(region).map(|entry| entry.cities.to_vec()).unwrap_or_default();
        localities.sort_unstable();
        localities
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn tariff_locality_override_ok() {
        let tariff = StaticLookup.tariff("SP", "Guarulhos");
        assert_eq!(tariff.distributor, "EDP SP");
        assert_abs_diff_eq!(tariff.unit_price.get(), 0.89);
    }

    #[test]
    fn tariff_region_default_ok() {
        let tariff = StaticLookup.tariff("SP", "Campinas");
        assert_eq!(tariff.distributor, "CPFL Paulista");
        assert_abs_diff_eq!(tariff.unit_price.get(), 0.92);
    }

    #[test]
    fn tariff_unknown_region_falls_back() {
        let tariff = StaticLookup.tariff("XX", "Nowhere");
        assert_eq!(tariff.distributor, "Local utility");
        assert_abs_diff_eq!(tariff.unit_price.get(), 0.85);
    }

    #[test]
    fn irradiance_ok() {
        assert_abs_diff_eq!(StaticLookup.irradiance("SP").get(), 4.4);
        assert_abs_diff_eq!(StaticLookup.irradiance("rn").get(), 5.4);
        assert_abs_diff_eq!(StaticLookup.irradiance("").get(), 4.5);
    }

    #[test]
    fn localities_sorted() {
        let localities = StaticLookup.localities("MG");
        assert_eq!(localities, ["Belo Horizonte", "Contagem", "Juiz de Fora", "Uberlândia"]);
        assert!(StaticLookup.localities("AC").is_empty());
    }

    #[test]
    fn all_regions_listed() {
        assert_eq!(StaticLookup.regions().count(), 27);
    }
}
