use famtree::error::FamilyError;
use famtree::import::{self, ImportStats};
use famtree::queries::*;

const FAMILY_JSON: &str = r#"{
  "people": [
    { "name": "María", "gender": "Female", "birthDate": "12/05/1970" },
    { "name": "Laura", "gender": "female", "birthDate": "08/07/1975" },
    { "name": "Carlos", "gender": "Male", "birthDate": "18/02/1978" },
    { "name": "Lucía", "gender": "Female", "birthDate": "18/05/2000", "grade": "2nd" },
    { "name": "Miguel", "gender": "Male" },
    { "name": "Pablo", "gender": "Male" },
    { "name": "Pedro", "gender": "Male" },
    { "name": "Ana", "gender": "Female", "birthDate": "10/03/1940", "deathDate": "15/06/2000" },
    { "name": "Juan", "gender": "Male", "deceased": true }
  ],
  "siblings": [["Laura", "María"], ["Laura", "Carlos"]],
  "children": [
    { "parent": "Laura", "child": "Lucía" },
    { "parent": "Carlos", "child": "Miguel" },
    { "parent": "Carlos", "child": "Pablo" }
  ],
  "partners": [["María", "Pedro"], ["Ana", "Juan"]]
}"#;

// ==========================================================================
// SUCCESSFUL IMPORT
// ==========================================================================

#[test]
fn import_counts_everything() {
    let (_, stats) = import::import_str(FAMILY_JSON).unwrap();
    assert_eq!(
        stats,
        ImportStats {
            people: 9,
            deceased: 2,
            children: 3,
            siblings: 2,
            partners: 2,
        }
    );
}

#[test]
fn imported_family_answers_queries() {
    let (tree, _) = import::import_str(FAMILY_JSON).unwrap();
    let lucia = registry_queries::find_id(&tree, "Lucía").unwrap();

    let family = family_queries::extended_family(&tree, lucia).unwrap();
    assert_eq!(family.aunts, vec!["María"]);
    assert_eq!(family.uncles, vec!["Carlos"]);
    assert_eq!(family.cousins, vec!["Miguel", "Pablo"]);

    let maria = registry_queries::get_person(&tree, "María").unwrap();
    assert_eq!(
        family_queries::immediate_family(&tree, maria.id).unwrap().partner.as_deref(),
        Some("Pedro")
    );
    assert_eq!(registry_queries::get_person(&tree, "Lucía").unwrap().grade.as_deref(), Some("2nd"));
}

#[test]
fn imported_deceased_feed_statistics() {
    let (tree, _) = import::import_str(FAMILY_JSON).unwrap();
    assert!(registry_queries::get_person(&tree, "Juan").unwrap().is_deceased());
    // Juan has no dates, only Ana counts
    assert_eq!(stats_queries::average_age_at_death(&tree), Some(60.0));
}

#[test]
fn empty_document_gives_empty_tree() {
    let (tree, stats) = import::import_str("{}").unwrap();
    assert_eq!(registry_queries::member_count(&tree), 0);
    assert_eq!(stats, ImportStats::default());
}

#[test]
fn import_file_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("famtree-import-{}.json", std::process::id()));
    std::fs::write(&path, FAMILY_JSON).unwrap();
    let result = import::import_file(&path);
    std::fs::remove_file(&path).ok();

    let (tree, _) = result.unwrap();
    assert_eq!(registry_queries::member_count(&tree), 9);
}

// ==========================================================================
// REJECTED INPUT
// ==========================================================================

#[test]
fn iso_dates_are_rejected() {
    let json = r#"{ "people": [{ "name": "John", "gender": "Male", "birthDate": "1980-05-10" }] }"#;
    assert!(matches!(
        import::import_str(json),
        Err(FamilyError::InvalidDate { .. })
    ));
}

#[test]
fn unknown_gender_is_rejected() {
    let json = r#"{ "people": [{ "name": "John", "gender": "robot" }] }"#;
    assert!(matches!(
        import::import_str(json),
        Err(FamilyError::UnknownGender { .. })
    ));
}

#[test]
fn duplicate_names_are_rejected() {
    let json = r#"{ "people": [
        { "name": "John", "gender": "Male" },
        { "name": "John", "gender": "Male" }
    ] }"#;
    match import::import_str(json) {
        Err(FamilyError::AlreadyExists { identifier, .. }) => assert_eq!(identifier, "John"),
        other => panic!("expected AlreadyExists, got {:?}", other.map(|(_, s)| s)),
    }
}

#[test]
fn relationship_to_unknown_person_is_not_found() {
    let json = r#"{
        "people": [{ "name": "John", "gender": "Male" }],
        "children": [{ "parent": "John", "child": "Ghost" }]
    }"#;
    match import::import_str(json) {
        Err(FamilyError::NotFound { id, .. }) => assert_eq!(id, "Ghost"),
        other => panic!("expected NotFound, got {:?}", other.map(|(_, s)| s)),
    }
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        import::import_str("{ \"people\": ["),
        Err(FamilyError::Json(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("famtree-does-not-exist.json");
    assert!(matches!(import::import_file(&path), Err(FamilyError::Io(_))));
}
