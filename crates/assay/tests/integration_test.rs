//! Integration tests for Assay.

use assay::input::{Parser, tokenize_line};
use assay::{
    DetectedType, IssueType, ParseError, Profiler, ProfilerConfig, Severity, StorageType,
    profile, recommend_preprocessing,
};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_quoted_fields() {
    assert_eq!(tokenize_line("a,\"b,c\",d", ',', '"'), vec!["a", "b,c", "d"]);
    assert_eq!(
        tokenize_line("\"he said \"\"hi\"\"\"", ',', '"'),
        vec!["he said \"hi\""]
    );
}

#[test]
fn test_semicolon_detected() {
    let content = "a;b;c;d\n1;2;3;4\n5;6;7;8\n9;10;11;12\n13;14;15;16\n";
    let result = profile(content, None);

    assert_eq!(result.delimiter, ';');
    assert_eq!(result.table.headers, vec!["a", "b", "c", "d"]);
    assert_eq!(result.table.row_count(), 4);
}

#[test]
fn test_tsv_auto_detect() {
    let content = "sample_id\tdiagnosis\tage\n\
                   S001\tCD\t25\n\
                   S002\tUC\t30\n\
                   S003\tControl\t28\n";
    let result = profile(content, None);

    assert_eq!(result.delimiter, '\t');
    assert_eq!(result.columns.len(), 3);
}

#[test]
fn test_max_rows() {
    let config = ProfilerConfig::from_json_str(r#"{"parser": {"max_rows": 2}}"#).unwrap();
    let result = Profiler::with_config(config).profile("n\n1\n2\n3\n4\n", None);
    assert_eq!(result.table.row_count(), 2);
}

#[test]
fn test_fatal_errors() {
    assert_eq!(profile("", None).errors, vec![ParseError::EmptyInput]);
    assert_eq!(profile("\n  \n", None).errors, vec![ParseError::EmptyInput]);
    assert_eq!(profile(",,\n1,2,3\n", None).errors, vec![ParseError::NoHeaders]);
    assert_eq!(profile("a,b\n", None).errors, vec![ParseError::NoDataRows]);

    let result = profile("a,b\n", None);
    assert!(result.columns.is_empty());
    assert!(result.warnings.is_empty());
    assert!(result.quality_report.is_none());
}

// =============================================================================
// Type Inference
// =============================================================================

#[test]
fn test_infer_integer_column() {
    let result = profile("count\n1\n2\n3\n4\n5\n", None);
    let column = &result.columns[0];
    assert_eq!(column.detected_type(), DetectedType::NumericInteger);
    assert_eq!(column.info.confidence, 1.0);
}

#[test]
fn test_infer_float_column() {
    let result = profile("value\n1.5\n2\n3\n", None);
    let column = &result.columns[0];
    assert_eq!(column.detected_type(), DetectedType::NumericFloat);
    assert_eq!(column.info.confidence, 1.0);
}

#[test]
fn test_infer_mixed_types() {
    let mut content = String::from("id,active,joined,team,notes\n");
    for i in 0..40 {
        content.push_str(&format!(
            "{},{},2024-01-{:02},{},note number {}\n",
            i,
            if i % 3 == 0 { "yes" } else { "no" },
            i % 28 + 1,
            ["red", "blue", "green"][i % 3],
            i
        ));
    }
    let result = profile(&content, None);

    let types: Vec<DetectedType> = result.columns.iter().map(|c| c.detected_type()).collect();
    assert_eq!(
        types,
        vec![
            DetectedType::NumericInteger,
            DetectedType::Boolean,
            DetectedType::Date,
            DetectedType::Categorical,
            DetectedType::Text,
        ]
    );

    let summary = result.statistical_summary.as_ref().unwrap();
    assert_eq!(summary.columns_of_type(StorageType::Numeric), 1);
    assert_eq!(summary.columns_of_type(StorageType::Datetime), 1);
    assert_eq!(summary.columns_of_type(StorageType::Text), 1);

    let joined = result.column("joined").unwrap();
    assert_eq!(joined.statistics.date.as_ref().unwrap().min_date, "2024-01-01");
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_end_to_end_small_table() {
    let result = profile("id,cat\n1,A\n2,B\n3,A\n", None);

    let id = result.column("id").unwrap();
    assert_eq!(id.detected_type(), DetectedType::NumericInteger);
    assert_eq!(id.info.unique_count, 3);
    assert_eq!(id.completeness, 1.0);

    let cat = result.column("cat").unwrap();
    assert_eq!(cat.detected_type(), DetectedType::Categorical);
    assert_eq!(cat.info.unique_count, 2);
    let top = cat.statistics.frequency.as_ref().unwrap();
    assert_eq!(top.top_values.get_index(0), Some((&"A".to_string(), &2)));

    let summary = result.statistical_summary.as_ref().unwrap();
    assert_eq!(summary.dataset_info.duplicate_rows, 0);
    assert_eq!(summary.dataset_info.complete_rows, 3);
    assert_eq!(summary.columns_of_type(StorageType::Categorical), 1);

    let report = result.quality_report.as_ref().unwrap();
    assert_eq!(report.issues_of_type(IssueType::MissingData).count(), 0);
    assert!(result.warnings.iter().any(|w| w.message.contains("Small dataset")));
}

#[test]
fn test_duplicate_rows() {
    let result = profile("id,cat\n1,A\n1,A\n", None);
    let summary = result.statistical_summary.as_ref().unwrap();
    assert_eq!(summary.dataset_info.duplicate_rows, 1);

    let report = result.quality_report.as_ref().unwrap();
    let issue = report.issues_of_type(IssueType::Duplicates).next().unwrap();
    assert_eq!(issue.count, 1);
    assert_eq!(issue.severity, Severity::Medium);
}

#[test]
fn test_outliers_flagged() {
    let result = profile("v\n1\n2\n3\n4\n5\n100\n", None);
    let v = &result.columns[0];
    assert_eq!(v.outlier_count, Some(1));

    let result = profile("v\n1\n2\n3\n", None);
    assert_eq!(result.columns[0].outlier_count, Some(0));
}

#[test]
fn test_sparse_column() {
    let result = profile("a,b\n1,\n2,\n3,\n4,\n5,x\n", None);
    let b = result.column("b").unwrap();
    assert_eq!(b.completeness, 0.2);
    assert!(b.quality_score < 0.7);

    let report = result.quality_report.as_ref().unwrap();
    assert_eq!(report.issues[0].issue_type, IssueType::MissingData);
    assert_eq!(report.issues[0].severity, Severity::Critical);

    let summary = result.statistical_summary.as_ref().unwrap();
    assert_eq!(summary.missing_data.total_missing, 4);
    assert_eq!(summary.missing_data.columns_with_missing, 1);
}

#[test]
fn test_ragged_rows_are_warnings() {
    let result = profile("a,b,c\n1,2\n4,5,6\n", None);
    assert!(result.is_ok());
    assert_eq!(result.table.rows[0][2], None);
    assert!(result.warnings.iter().any(|w| w.message.contains("do not have 3 columns")));
}

#[test]
fn test_scores_bounded() {
    let result = profile("a,b,c\n1,x,\n,y,2024-01-01\n3,,maybe\n", None);
    for column in &result.columns {
        assert!((0.0..=1.0).contains(&column.quality_score));
    }
    let report = result.quality_report.as_ref().unwrap();
    assert!((0.0..=1.0).contains(&report.overall_score));
}

// =============================================================================
// Determinism and serialization
// =============================================================================

#[test]
fn test_idempotent() {
    let content = "name,age,city\nAlice,30,NYC\nBob,,LA\nCarol,41,NYC\nAlice,30,NYC\n";
    let first = profile(content, None);
    let second = profile(content, None);

    assert_eq!(first.table, second.table);
    assert_eq!(first.columns, second.columns);
    assert_eq!(first.statistical_summary, second.statistical_summary);
    assert_eq!(first.quality_report, second.quality_report);
}

#[test]
fn test_result_serializes() {
    let result = profile("id,cat\n1,A\n2,B\n3,A\n", None);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["delimiter"], ",");
    assert_eq!(json["columns"][0]["detected_type"], "numeric-integer");
    assert_eq!(
        json["statistical_summary"]["type_distribution"]["numeric"],
        1
    );
}

#[test]
fn test_custom_weights() {
    let config = ProfilerConfig::from_json_str(
        r#"{"column_weights": {"completeness": 1.0, "validity": 0.0, "uniqueness": 0.0}}"#,
    )
    .unwrap();
    let result = Profiler::with_config(config).profile("a\nx\nx\n\n", None);
    assert_eq!(result.columns[0].quality_score, 1.0);
}

#[test]
fn test_recommendations_and_interop() {
    let mut content = String::from("user,plan,spend\n");
    for i in 0..30 {
        content.push_str(&format!("u{},{},{}\n", i, ["free", "pro"][i % 2], i * 3));
    }
    let result = profile(&content, None);

    let recs = recommend_preprocessing(&result, Some("spend"));
    assert!(recs.drop_columns[0].starts_with("user:"));
    assert!(recs.encode_categorical[0].starts_with("plan:"));

    let data = result.to_data_profile("users.csv");
    assert_eq!(data.shape, (30, 3));
    assert_eq!(data.dtypes_summary["categorical"], 1);
}

#[test]
fn test_parser_reuse() {
    let parser = Parser::new();
    let outcome = parser.parse("x|y\n1|2\n");
    assert!(outcome.is_ok());
    assert_eq!(outcome.table.delimiter, '|');
}
