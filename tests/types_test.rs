use chrono::NaiveDate;
use gobi_acks::*;

// --- MessageId ---

#[test]
fn test_message_id_new() {
    let id = MessageId::new("<ack@ybp.com>");
    assert_eq!(id.as_str(), "<ack@ybp.com>");
    assert_eq!(id.to_string(), "<ack@ybp.com>");
}

#[test]
fn test_message_id_synthetic() {
    let id = MessageId::synthetic("42.eml");
    assert_eq!(id.as_str(), "<synthetic-42.eml@local>");
}

// --- EmailAddress ---

#[test]
fn test_email_address_with_name() {
    let addr = EmailAddress::parse("\"GOBI\" <DoNotReply@Ybp.com>").unwrap();
    assert_eq!(addr.name.as_deref(), Some("GOBI"));
    assert_eq!(addr.address, "DoNotReply@Ybp.com");
    assert_eq!(addr.to_string(), "GOBI <DoNotReply@Ybp.com>");
}

#[test]
fn test_email_address_plain() {
    let addr = EmailAddress::parse("  DoNotReply@Ybp.com ").unwrap();
    assert!(addr.name.is_none());
    assert_eq!(addr.address, "DoNotReply@Ybp.com");
}

#[test]
fn test_email_address_invalid() {
    assert!(EmailAddress::parse("not an address").is_none());
    assert!(EmailAddress::parse("").is_none());
}

// --- Price ---

#[test]
fn test_price_strings() {
    assert_eq!(Price::Flat("24.99".into()).as_str(), "24.99");
    assert_eq!(Price::Table("19.99".into()).to_string(), "19.99");
    assert_eq!(Price::Unresolved.as_str(), PRICE_UNRESOLVED);
    assert!(Price::Flat("1.00".into()).is_resolved());
    assert!(!Price::Unresolved.is_resolved());
}

#[test]
fn test_price_serializes_as_string() {
    assert_eq!(
        serde_json::to_string(&Price::Table("19.99".into())).unwrap(),
        "\"19.99\""
    );
    assert_eq!(serde_json::to_string(&Price::Unresolved).unwrap(), "\"N/A\"");
}

// --- BookRecord ---

#[test]
fn test_book_record_json_columns() {
    let record = BookRecord {
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        title: "Foo".into(),
        author: String::new(),
        binding: String::new(),
        series: String::new(),
        supplier: "YBP".into(),
        purchase_option: "Firm Order".into(),
        price: Price::Unresolved,
        fund: String::new(),
    };

    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), CSV_COLUMNS.len());
    for column in CSV_COLUMNS {
        assert!(object.contains_key(column), "missing {column}");
    }
    assert_eq!(object["Date"], "2024-01-15");
    assert_eq!(object["Purchase Option"], "Firm Order");
    assert_eq!(object["Price"], "N/A");
}
