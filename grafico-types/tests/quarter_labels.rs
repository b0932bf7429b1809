use chrono::NaiveDate;
use grafico_types::{DateRangeSelection, GraficoError, QuarterLabel};

#[test]
fn quarter_label_parses_and_resolves_start_date() {
    let q: QuarterLabel = "2021-Q3".parse().expect("valid label");
    assert_eq!(q.year(), 2021);
    assert_eq!(q.quarter(), 3);
    assert_eq!(
        q.start_date(),
        NaiveDate::from_ymd_opt(2021, 7, 1).expect("valid date")
    );
}

#[test]
fn quarter_starts_fall_on_january_april_july_october() {
    for (quarter, month) in [(1u8, 1u32), (2, 4), (3, 7), (4, 10)] {
        let label = QuarterLabel::new(2023, quarter).expect("valid quarter");
        assert_eq!(
            label.start_date(),
            NaiveDate::from_ymd_opt(2023, month, 1).expect("valid date")
        );
    }
}

#[test]
fn malformed_labels_are_rejected_not_misresolved() {
    for bad in ["2021Q3", "2021-Q5", "2021-Q0", "21-Q3", "2021-q3", "", "2021-Q33"] {
        let err = bad.parse::<QuarterLabel>().expect_err("should reject");
        assert!(
            matches!(err, GraficoError::InvalidQuarterLabel { .. }),
            "unexpected error for {bad:?}: {err}"
        );
    }
}

#[test]
fn display_roundtrips_through_parse() {
    let q = QuarterLabel::new(1999, 4).expect("valid quarter");
    assert_eq!(q.to_string(), "1999-Q4");
    assert_eq!(q.to_string().parse::<QuarterLabel>().expect("roundtrip"), q);
}

#[test]
fn serde_uses_the_picker_string_shape() {
    let q: QuarterLabel = "2022-Q1".parse().expect("valid label");
    let json = serde_json::to_string(&q).expect("serialize");
    assert_eq!(json, "\"2022-Q1\"");
    let de: QuarterLabel = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(de, q);

    assert!(serde_json::from_str::<QuarterLabel>("\"2022-Q9\"").is_err());
}

#[test]
fn selection_parses_both_endpoints() {
    let sel = DateRangeSelection::parse("2020-Q2", "2023-Q1").expect("valid selection");
    assert_eq!(
        sel.start.start_date(),
        NaiveDate::from_ymd_opt(2020, 4, 1).expect("valid date")
    );
    assert_eq!(
        sel.end.start_date(),
        NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")
    );

    assert!(DateRangeSelection::parse("2020-Q2", "oops").is_err());
}
