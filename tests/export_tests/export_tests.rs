//! Tests for the CSV exporter

use rosterdesk::export::{export, to_csv, CSV_HEADER, EXPORT_FILENAME, EXPORT_MIME};
use rosterdesk::Employee;
use tempfile::TempDir;

fn csv_text(records: &[Employee]) -> String {
    String::from_utf8(to_csv(records).to_vec()).unwrap()
}

#[test]
fn test_quotes_and_doubles_embedded_quotes() {
    let records = vec![Employee::new(1, "A \"B\"", "Eng,1", 50_000.0)];

    assert_eq!(
        csv_text(&records),
        "ID,Name,Position,Salary\n1,\"A \"\"B\"\"\",\"Eng,1\",50000"
    );
}

#[test]
fn test_numbers_in_natural_decimal_form() {
    let records = vec![
        Employee::new(2, "Frac", "X", 50_000.5),
        Employee::new(10, "Neg", "X", -12.25),
    ];

    assert_eq!(
        csv_text(&records),
        "ID,Name,Position,Salary\n2,\"Frac\",\"X\",50000.5\n10,\"Neg\",\"X\",-12.25"
    );
}

#[test]
fn test_keeps_given_order_and_no_trailing_newline() {
    let records = vec![
        Employee::new(3, "C", "X", 3.0),
        Employee::new(1, "A", "X", 1.0),
    ];

    let text = csv_text(&records);

    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines, vec![CSV_HEADER, "3,\"C\",\"X\",3", "1,\"A\",\"X\",1"]);
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_empty_roster_is_header_only() {
    assert_eq!(csv_text(&[]), "ID,Name,Position,Salary\n");
}

#[test]
fn test_embedded_newline_stays_inside_quotes() {
    let records = vec![Employee::new(1, "Line\nBreak", "X", 1.0)];

    assert_eq!(csv_text(&records), "ID,Name,Position,Salary\n1,\"Line\nBreak\",\"X\",1");
}

#[test]
fn test_download_metadata() {
    let download = export(&[Employee::new(1, "A", "B", 2.0)]);

    assert_eq!(download.filename, EXPORT_FILENAME);
    assert_eq!(download.filename, "employee_data.csv");
    assert_eq!(download.mime, EXPORT_MIME);
    assert_eq!(&download.body[..], b"ID,Name,Position,Salary\n1,\"A\",\"B\",2");
}

#[test]
fn test_save_in_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let download = export(&[Employee::new(1, "A", "B", 2.0)]);

    let path = download.save_in(temp_dir.path()).unwrap();

    assert_eq!(path, temp_dir.path().join("employee_data.csv"));
    assert_eq!(std::fs::read(&path).unwrap(), download.body.to_vec());
}

#[test]
fn test_negative_zero_salary_written_as_zero() {
    let records = vec![Employee::new(1, "a", "b", -0.0)];

    assert_eq!(csv_text(&records), "ID,Name,Position,Salary\n1,\"a\",\"b\",0");
}

#[test]
fn test_extreme_salaries_use_exponent_notation() {
    let records = vec![
        Employee::new(1, "Big", "X", 1e21),
        Employee::new(2, "Tiny", "X", 1.5e-7),
        Employee::new(3, "Edge", "X", 0.000001),
        Employee::new(4, "Large", "X", 1e20),
    ];

    let text = csv_text(&records);

    let salaries: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|line| line.rsplit(',').next().unwrap())
        .collect();
    assert_eq!(salaries, vec!["1e+21", "1.5e-7", "0.000001", "100000000000000000000"]);
}
