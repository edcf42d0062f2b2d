use chrono::{Days, NaiveDate};
use patrimoine::core::catalog::compliance::{ministry_compliance, status_for};
use patrimoine::core::catalog::{
    AssetCondition, AssetDeclaration, SpecificDetails, Wilaya,
};
use patrimoine::core::contacts::ComplianceStatus;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn asset(id: &str, ministry_id: &str, acquired: NaiveDate) -> AssetDeclaration {
    AssetDeclaration {
        id: id.to_string(),
        reference: format!("R-{id}"),
        ministry_id: ministry_id.to_string(),
        sub_entity: None,
        condition: AssetCondition::Good,
        description: String::new(),
        acquisition_date: acquired,
        value: 1000.0,
        current_value: 1000.0,
        wilaya: Wilaya::NouakchottOuest,
        coordinates: None,
        location_details: "Centre".to_string(),
        documents: Vec::new(),
        specific: SpecificDetails::default(),
    }
}

#[tokio::test]
async fn age_thresholds() {
    let now = today();
    let days_ago = |n: u64| now.checked_sub_days(Days::new(n)).unwrap();

    assert_eq!(status_for(Some(days_ago(10)), now), ComplianceStatus::Compliant);
    assert_eq!(status_for(Some(days_ago(100)), now), ComplianceStatus::Pending);
    assert_eq!(status_for(Some(days_ago(200)), now), ComplianceStatus::Overdue);

    // Boundary days stay on the lenient side of their threshold.
    assert_eq!(status_for(Some(days_ago(90)), now), ComplianceStatus::Compliant);
    assert_eq!(status_for(Some(days_ago(180)), now), ComplianceStatus::Pending);
}

#[tokio::test]
async fn no_submission_is_overdue() {
    assert_eq!(status_for(None, today()), ComplianceStatus::Overdue);
}

#[tokio::test]
async fn ministry_status_uses_most_recent_asset() {
    let now = today();
    let days_ago = |n: u64| now.checked_sub_days(Days::new(n)).unwrap();
    let assets = vec![
        asset("a1", "1", days_ago(300)),
        asset("a2", "1", days_ago(10)),
        asset("a3", "2", days_ago(100)),
    ];

    let (status, last) = ministry_compliance(&assets, "1", now);
    assert_eq!(status, ComplianceStatus::Compliant);
    assert_eq!(last, Some(days_ago(10)));

    let (status, _) = ministry_compliance(&assets, "2", now);
    assert_eq!(status, ComplianceStatus::Pending);

    let (status, last) = ministry_compliance(&assets, "3", now);
    assert_eq!(status, ComplianceStatus::Overdue);
    assert_eq!(last, None);
}
