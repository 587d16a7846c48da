//! Aggregator service for cheapest-date lookup and monthly averages

use chrono::Datelike;
use std::collections::BTreeMap;

use crate::types::{Dataset, FareError, MonthlyAverage, PricePoint, Result, SelectionSummary};

/// Aggregator for computing series summaries
pub struct Aggregator;

impl Aggregator {
    /// Lowest-priced point. Ties keep the earliest point in scan order.
    pub fn minimum(points: &[PricePoint]) -> Result<PricePoint> {
        let (first, rest) = points.split_first().ok_or(FareError::EmptySeries)?;

        let mut best = *first;
        for point in rest {
            // Strictly lower only, so the first minimum wins
            if point.price < best.price {
                best = *point;
            }
        }
        Ok(best)
    }

    /// Mean price per calendar month (year ignored), ascending by month
    pub fn monthly_average(points: &[PricePoint]) -> Result<MonthlyAverage> {
        if points.is_empty() {
            return Err(FareError::EmptySeries);
        }

        // month -> (sum, count)
        let mut groups: BTreeMap<u32, (f64, u32)> = BTreeMap::new();
        for point in points {
            let group = groups.entry(point.date.month()).or_insert((0.0, 0));
            group.0 += point.price;
            group.1 += 1;
        }

        let averages: BTreeMap<u32, f64> = groups
            .into_iter()
            .map(|(month, (sum, count))| (month, sum / count as f64))
            .collect();
        Ok(MonthlyAverage::from(averages))
    }

    /// Resolve `selection` (name or alias) and compute both summaries
    pub fn summarize<'a>(dataset: &'a Dataset, selection: &str) -> Result<SelectionSummary<'a>> {
        let series = dataset.select(selection)?;
        Ok(SelectionSummary {
            destination: &series.destination,
            series,
            cheapest: Self::minimum(&series.points)?,
            monthly_average: Self::monthly_average(&series.points)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SeriesGenerator;
    use crate::types::{Destination, GeneratorConfig};
    use chrono::NaiveDate;

    fn make_point(month: u32, day: u32, price: f64) -> PricePoint {
        PricePoint::new(NaiveDate::from_ymd_opt(2024, month, day).unwrap(), price)
    }

    // ========== minimum() tests ==========

    #[test]
    fn test_minimum_empty() {
        assert!(matches!(
            Aggregator::minimum(&[]),
            Err(FareError::EmptySeries)
        ));
    }

    #[test]
    fn test_minimum_single() {
        let points = vec![make_point(3, 4, 420.0)];
        assert_eq!(Aggregator::minimum(&points).unwrap(), points[0]);
    }

    #[test]
    fn test_minimum_picks_lowest() {
        let points = vec![
            make_point(1, 1, 300.0),
            make_point(1, 8, 120.0),
            make_point(1, 15, 250.0),
        ];

        let cheapest = Aggregator::minimum(&points).unwrap();

        assert_eq!(cheapest.date.to_string(), "2024-01-08");
        assert!((cheapest.price - 120.0).abs() < f64::EPSILON);
        assert!(points.iter().all(|p| cheapest.price <= p.price));
    }

    #[test]
    fn test_minimum_tie_keeps_earliest() {
        let points = vec![
            make_point(1, 1, 500.0),
            make_point(1, 8, 100.0),
            make_point(1, 15, 300.0),
            make_point(1, 22, 100.0),
        ];

        let cheapest = Aggregator::minimum(&points).unwrap();

        assert_eq!(cheapest.date.to_string(), "2024-01-08");
    }

    #[test]
    fn test_minimum_handles_negative_prices() {
        let points = vec![make_point(1, 1, 10.0), make_point(1, 8, -25.0)];
        let cheapest = Aggregator::minimum(&points).unwrap();
        assert!((cheapest.price + 25.0).abs() < f64::EPSILON);
    }

    // ========== monthly_average() tests ==========

    #[test]
    fn test_monthly_average_empty() {
        assert!(matches!(
            Aggregator::monthly_average(&[]),
            Err(FareError::EmptySeries)
        ));
    }

    #[test]
    fn test_monthly_average_known_values() {
        let points = vec![
            make_point(1, 1, 100.0),
            make_point(1, 8, 200.0),
            make_point(2, 1, 50.0),
        ];

        let monthly = Aggregator::monthly_average(&points).unwrap();

        assert_eq!(monthly.len(), 2);
        assert!((monthly.get(1).unwrap() - 150.0).abs() < f64::EPSILON);
        assert!((monthly.get(2).unwrap() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_monthly_average_omits_missing_months() {
        let points = vec![make_point(3, 1, 10.0), make_point(7, 1, 20.0)];

        let monthly = Aggregator::monthly_average(&points).unwrap();

        assert_eq!(monthly.months().collect::<Vec<_>>(), vec![3, 7]);
        assert!(monthly.get(1).is_none());
    }

    #[test]
    fn test_monthly_average_ignores_year() {
        let points = vec![
            PricePoint::new(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(), 100.0),
            PricePoint::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), 300.0),
        ];

        let monthly = Aggregator::monthly_average(&points).unwrap();

        assert_eq!(monthly.len(), 1);
        assert!((monthly.get(5).unwrap() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_monthly_average_full_year_covers_all_months() {
        let dataset = SeriesGenerator::generate(&GeneratorConfig::default()).unwrap();

        for series in dataset.iter() {
            let monthly = Aggregator::monthly_average(&series.points).unwrap();
            assert_eq!(monthly.months().collect::<Vec<_>>(), (1..=12).collect::<Vec<_>>());
        }
    }

    // ========== summarize() tests ==========

    #[test]
    fn test_summarize_scenario() {
        let config = GeneratorConfig {
            destinations: vec![Destination::new("X", 300.0, 0.0)],
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            step_days: 7,
            conversion_rate: 1300.0,
            seed: 7,
            ..GeneratorConfig::default()
        };
        let dataset = SeriesGenerator::generate(&config).unwrap();

        let summary = Aggregator::summarize(&dataset, "X").unwrap();

        assert_eq!(summary.destination, "X");
        assert_eq!(summary.series.len(), 3);
        assert_eq!(summary.cheapest.date.to_string(), "2024-01-01");
        assert_eq!(summary.cheapest.price, 390000.0);
        assert_eq!(summary.monthly_average.len(), 1);
        assert_eq!(summary.monthly_average.get(1), Some(390000.0));
    }

    #[test]
    fn test_summarize_by_alias() {
        let dataset = SeriesGenerator::generate(&GeneratorConfig::default()).unwrap();

        let by_alias = Aggregator::summarize(&dataset, "런던").unwrap();
        let by_name = Aggregator::summarize(&dataset, "London").unwrap();

        assert_eq!(by_alias.destination, "London");
        assert_eq!(by_alias.cheapest, by_name.cheapest);
        assert_eq!(by_alias.monthly_average, by_name.monthly_average);
    }

    #[test]
    fn test_summarize_unknown_destination() {
        let dataset = SeriesGenerator::generate(&GeneratorConfig::default()).unwrap();

        let result = Aggregator::summarize(&dataset, "Paris");

        assert!(matches!(result, Err(FareError::UnknownDestination(_))));
    }
}
