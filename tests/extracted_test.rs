use gobi_acks::*;

const CHUNK: &str = "\nTitle: The Rust Programming Language\n\
                     Author: Klabnik, Steve\n\
                     Binding: Paper\n\
                     Series Title: No Starch Press Series\n\
                     \tSupplier: YBP\n\
                     \tPurchase Option: Firm Order\n\
                     Fund: HUMANITIES\n";

#[test]
fn test_extract_all_fields() {
    let fields = ExtractedFields::extract(CHUNK);

    assert_eq!(fields.title, "The Rust Programming Language");
    assert_eq!(fields.author, "Klabnik, Steve");
    assert_eq!(fields.binding, "Paper");
    assert_eq!(fields.series, "No Starch Press Series");
    assert_eq!(fields.supplier, "YBP");
    assert_eq!(fields.purchase_option, "Firm Order");
    assert_eq!(fields.fund, "HUMANITIES");
    assert!(fields.has_title());
}

#[test]
fn test_get_by_field() {
    let fields = ExtractedFields::extract(CHUNK);

    assert_eq!(fields.get(Field::SeriesTitle), "No Starch Press Series");
    assert_eq!(fields.get(Field::PurchaseOption), "Firm Order");
}

#[test]
fn test_missing_fields_are_empty() {
    let fields = ExtractedFields::extract("\nTitle: Only A Title\n");

    assert_eq!(fields.title, "Only A Title");
    assert_eq!(fields.author, "");
    assert_eq!(fields.binding, "");
    assert_eq!(fields.series, "");
    assert_eq!(fields.supplier, "");
    assert_eq!(fields.purchase_option, "");
    assert_eq!(fields.fund, "");
}

#[test]
fn test_value_stops_at_tab() {
    let chunk = "Binding: Cloth\tSupplier: YBP\n";

    assert_eq!(extract_field(chunk, Field::Binding), "Cloth");
    assert_eq!(extract_field(chunk, Field::Supplier), "YBP");
}

#[test]
fn test_value_is_trimmed() {
    assert_eq!(extract_labeled("Fund:    ART   \n", "Fund"), "ART");
}

#[test]
fn test_value_without_terminator_is_empty() {
    assert_eq!(extract_labeled("Title: Unterminated", "Title"), "");
}

#[test]
fn test_first_occurrence_wins() {
    let chunk = "Fund: FIRST\nFund: SECOND\n";
    assert_eq!(extract_field(chunk, Field::Fund), "FIRST");
}

#[test]
fn test_label_with_pattern_characters() {
    let chunk = "Cost (USD): 5.00\n";
    assert_eq!(extract_labeled(chunk, "Cost (USD)"), "5.00");
}

#[test]
fn test_crlf_line_endings() {
    let chunk = "Title: Windows Book\r\nAuthor: Gates\r\n";
    let fields = ExtractedFields::extract(chunk);

    assert_eq!(fields.title, "Windows Book");
    assert_eq!(fields.author, "Gates");
}

#[test]
fn test_field_labels() {
    assert_eq!(Field::SeriesTitle.label(), "Series Title");
    assert_eq!(Field::PurchaseOption.to_string(), "Purchase Option");
    assert_eq!(Field::ALL.len(), 7);
}
