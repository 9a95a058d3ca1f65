use std::io::Write;

use super::*;
use crate::error::ErrorKind;

fn read(content: &str) -> Result<Vec<ResultRow>> {
    read_results(content.as_bytes(), b',')
}

#[test]
fn reads_rows_in_source_order() {
    let rows = read("method,ms\nDijkstra,12.5\nA*,8.1\nBFS,15.0\n").unwrap();

    let methods: Vec<_> = rows.iter().map(|r| r.method.as_str()).collect();
    assert_eq!(methods, vec!["Dijkstra", "A*", "BFS"]);
    assert!((rows[0].ms - 12.5).abs() < f64::EPSILON);
    assert!((rows[1].ms - 8.1).abs() < f64::EPSILON);
    assert!((rows[2].ms - 15.0).abs() < f64::EPSILON);
}

#[test]
fn column_order_is_not_significant() {
    let rows = read("ms,method\n3.5,serial\n1.25,parallel\n").unwrap();

    assert_eq!(rows[0], ResultRow::new("serial", 3.5));
    assert_eq!(rows[1], ResultRow::new("parallel", 1.25));
}

#[test]
fn extra_columns_are_ignored() {
    let rows = read("run,method,threads,ms\n1,omp,8,4.0\n").unwrap();

    assert_eq!(rows, vec![ResultRow::new("omp", 4.0)]);
}

#[test]
fn whitespace_around_fields_is_trimmed() {
    let rows = read(" method , ms \n  gpu ,  0.75 \n").unwrap();

    assert_eq!(rows, vec![ResultRow::new("gpu", 0.75)]);
}

#[test]
fn quoted_labels_may_contain_delimiter() {
    let rows = read("method,ms\n\"Dijkstra, serial\",12\n").unwrap();

    assert_eq!(rows[0].method, "Dijkstra, serial");
}

#[test]
fn header_only_yields_no_rows() {
    let rows = read("method,ms\n").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn missing_ms_column_is_reported() {
    let err = read("method,time\nA,1\n").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingColumn);
    assert!(matches!(err, ChartError::MissingColumn { ref column } if column == "ms"));
}

#[test]
fn missing_method_column_is_reported() {
    let err = read("name,ms\nA,1\n").unwrap_err();

    assert!(matches!(err, ChartError::MissingColumn { ref column } if column == "method"));
}

#[test]
fn empty_source_reports_missing_column() {
    let err = read("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingColumn);
}

#[test]
fn non_numeric_ms_is_parse_error() {
    let err = read("method,ms\nA,1.0\nB,N/A\n").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    match err {
        ChartError::Parse { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, "ms");
            assert_eq!(value, "N/A");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn empty_ms_field_is_parse_error() {
    let err = read("method,ms\nA,\n").unwrap_err();
    assert!(matches!(err, ChartError::Parse { row: 1, .. }));
}

#[test]
fn non_finite_numbers_load_and_are_left_to_validation() {
    let rows = read("method,ms\nA,NaN\nB,inf\nC,-2\n").unwrap();

    assert!(rows[0].ms.is_nan());
    assert!(rows[1].ms.is_infinite());
    assert!(rows[2].ms < 0.0);
}

#[test]
fn ragged_record_is_csv_error() {
    let err = read("method,ms\nA,1.0,extra\n").unwrap_err();

    assert!(matches!(err, ChartError::Csv(_)));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn custom_delimiter_is_honoured() {
    let rows = read_results("method;ms\nA;2.5\n".as_bytes(), b';').unwrap();
    assert_eq!(rows, vec![ResultRow::new("A", 2.5)]);
}

#[test]
fn load_results_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "method,ms\nDijkstra,12.5\nBFS,15\n").unwrap();

    let rows = load_results(file.path()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], ResultRow::new("BFS", 15.0));
}

#[test]
fn load_results_with_uses_configured_delimiter() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "method\tms\nA\t1\n").unwrap();
    let input = InputConfig {
        delimiter: '\t',
        ..InputConfig::default()
    };

    let rows = load_results_with(file.path(), &input).unwrap();

    assert_eq!(rows, vec![ResultRow::new("A", 1.0)]);
}

#[test]
fn load_results_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_results(&dir.path().join("absent.csv")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, ChartError::FileRead { .. }));
}
