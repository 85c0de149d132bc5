use chrono::NaiveDate;
use notehub::domain::Note;
use anyhow::Result;

fn note() -> Note {
    Note {
        id: 2,
        title: "Object-Oriented Programming in Java".to_string(),
        subject: "Computer Science".to_string(),
        author: "Mike Chen".to_string(),
        description: "Complete OOP concepts".to_string(),
        upload_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
        downloads: 567,
        rating: 4.9,
        file_size: "3.7 MB".to_string(),
        tags: vec!["java".to_string(), "oop".to_string()],
    }
}

#[test]
fn given_note_when_serializing_to_json_then_contains_all_fields() -> Result<()> {
    // Act
    let json = serde_json::to_string_pretty(&note())?;

    // Assert
    assert!(json.contains(r#""id": 2"#));
    assert!(json.contains(r#""title": "Object-Oriented Programming in Java""#));
    assert!(json.contains(r#""subject": "Computer Science""#));
    assert!(json.contains(r#""author": "Mike Chen""#));
    assert!(json.contains(r#""downloads": 567"#));
    assert!(json.contains(r#""rating": 4.9"#));
    assert!(json.contains(r#""file_size": "3.7 MB""#));
    assert!(json.contains(r#""java""#));
    Ok(())
}

#[test]
fn given_note_when_serializing_then_date_is_iso_and_keys_snake_case() -> Result<()> {
    let json = serde_json::to_string(&note())?;

    assert!(json.contains(r#""upload_date":"2024-01-12""#));
    assert!(!json.contains("uploadDate"));
    Ok(())
}

#[test]
fn given_note_when_serializing_then_tags_keep_insertion_order() -> Result<()> {
    let value = serde_json::to_value(note())?;

    assert_eq!(value["tags"], serde_json::json!(["java", "oop"]));
    Ok(())
}
