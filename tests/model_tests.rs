use chrono::NaiveDate;
use famtree::error::FamilyError;
use famtree::model::*;

// ==========================================================================
// ID TESTS
// ==========================================================================

#[test]
fn person_ids_are_unique_even_for_same_name() {
    let a = Person::create("Carlos".into(), Gender::Male);
    let b = Person::create("Carlos".into(), Gender::Male);
    assert_ne!(a.id, b.id);
}

// ==========================================================================
// DATE TESTS
// ==========================================================================

#[test]
fn canonical_date_parses() {
    assert_eq!(
        parse_date("15/06/2000").unwrap(),
        NaiveDate::from_ymd_opt(2000, 6, 15).unwrap()
    );
}

#[test]
fn iso_date_is_rejected() {
    assert!(matches!(
        parse_date("2005-03-30"),
        Err(FamilyError::InvalidDate { .. })
    ));
}

#[test]
fn format_and_parse_agree() {
    let date = NaiveDate::from_ymd_opt(1938, 12, 12).unwrap();
    assert_eq!(parse_date(&format_date(date)).unwrap(), date);
}

// ==========================================================================
// PERSON TESTS
// ==========================================================================

#[test]
fn deceased_variant_reports_status() {
    let death = NaiveDate::from_ymd_opt(1998, 3, 5).unwrap();
    let p = Person::create_deceased("Antonio".into(), Gender::Male, Some(death));
    assert!(p.is_deceased());
    assert_eq!(p.death_date(), Some(death));
    assert_eq!(p.status, LifeStatus::Deceased { death_date: Some(death) });
}

#[test]
fn age_at_death_is_fifty_for_round_dates() {
    let mut p = Person::create_deceased(
        "Paul".into(),
        Gender::Male,
        Some(parse_date("01/01/2000").unwrap()),
    );
    p.birth_date = Some(parse_date("01/01/1950").unwrap());
    assert_eq!(p.age_at_death(), Some(50));
}

#[test]
fn person_serializes_with_status_tag() {
    let p = Person::create("Orphan".into(), Gender::Female);
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["name"], "Orphan");
    assert_eq!(json["gender"], "Female");
    assert_eq!(json["status"]["status"], "Living");
}

// ==========================================================================
// FAMILY RECORD TESTS
// ==========================================================================

#[test]
fn empty_records_default_to_empty_lists() {
    let immediate = ImmediateFamily::default();
    assert!(immediate.parents.is_empty());
    assert_eq!(immediate.partner, None);

    let extended = ExtendedFamily::default();
    assert!(extended.aunts.is_empty() && extended.uncles.is_empty() && extended.cousins.is_empty());
}

#[test]
fn extended_family_serializes_field_names() {
    let extended = ExtendedFamily {
        aunts: vec!["María".into()],
        uncles: vec!["Carlos".into()],
        cousins: vec![],
    };
    let json = serde_json::to_value(&extended).unwrap();
    assert_eq!(json["aunts"][0], "María");
    assert_eq!(json["uncles"][0], "Carlos");
    assert!(json["cousins"].as_array().unwrap().is_empty());
}
