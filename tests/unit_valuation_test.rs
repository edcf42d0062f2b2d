use chrono::NaiveDate;
use patrimoine::core::catalog::AssetType;
use patrimoine::core::catalog::valuation::{depreciated_value, depreciation_rate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn fast_categories_depreciate_at_twenty_percent() {
    assert_eq!(depreciation_rate(AssetType::Vehicle), 0.20);
    assert_eq!(depreciation_rate(AssetType::It), 0.20);
    assert_eq!(depreciation_rate(AssetType::RealEstate), 0.05);
    assert_eq!(depreciation_rate(AssetType::Furniture), 0.05);
    assert_eq!(depreciation_rate(AssetType::Equipment), 0.05);
}

#[tokio::test]
async fn vehicle_two_years_loses_forty_percent() {
    // 2022-01-01 -> 2024-01-01 is exactly 730 calendar days = 2.0 "years"
    // on the days/365 base.
    let value = depreciated_value(
        1_000_000.0,
        date(2022, 1, 1),
        AssetType::Vehicle,
        date(2024, 1, 1),
    );
    assert_eq!(value, 600_000.0);
}

#[tokio::test]
async fn furniture_two_years_loses_ten_percent() {
    let value = depreciated_value(
        1_000_000.0,
        date(2022, 1, 1),
        AssetType::Furniture,
        date(2024, 1, 1),
    );
    assert_eq!(value, 900_000.0);
}

#[tokio::test]
async fn value_floors_at_zero() {
    // A vehicle fully depreciates after five years (0.20 * 5 = 1); ten
    // years would be "negative" without the floor.
    let value = depreciated_value(
        1_000_000.0,
        date(2014, 1, 1),
        AssetType::Vehicle,
        date(2024, 1, 1),
    );
    assert_eq!(value, 0.0);
}

#[tokio::test]
async fn fractional_years_use_calendar_days() {
    // 73 days = 0.2 years exactly; a vehicle loses 4%.
    let value = depreciated_value(
        100_000.0,
        date(2024, 1, 1),
        AssetType::Vehicle,
        date(2024, 3, 14),
    );
    assert_eq!(value, 96_000.0);
}

#[tokio::test]
async fn result_is_rounded_to_a_whole_amount() {
    // 100 days on a 5% category: 999 * (1 - 0.05 * 100/365) = 985.317...
    let value = depreciated_value(
        999.0,
        date(2024, 1, 1),
        AssetType::Equipment,
        date(2024, 4, 10),
    );
    assert_eq!(value, value.round());
    assert_eq!(value, 985.0);
}
