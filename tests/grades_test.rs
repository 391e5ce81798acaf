mod common;

use anyhow::Result;
use common::run_scripted;
use trio::application::{AppError, GradeReport};
use trio::cli::{ReportFormat, run_grades};
use trio::domain::GradeRecord;

#[test]
fn test_report_for_three_students() -> Result<()> {
    let report = GradeReport::new(vec![
        GradeRecord::new("Ann", 90),
        GradeRecord::new("Ben", 80),
        GradeRecord::new("Cid", 70),
    ])?;

    assert_eq!(report.summary.average, 80.0);
    assert_eq!(report.summary.highest, 90);
    assert_eq!(report.summary.lowest, 70);
    assert_eq!(report.records.len(), 3);
    Ok(())
}

#[test]
fn test_report_for_no_students_fails() {
    let err = GradeReport::new(Vec::new()).unwrap_err();
    assert!(matches!(err, AppError::NoStudents));
    assert_eq!(err.to_string(), "No students to report on");
}

#[test]
fn test_scripted_table_report() -> Result<()> {
    let output = run_scripted("3\nAnn\n90\nBen\n80\nCid\n70\n", |console| {
        run_grades(console, ReportFormat::Table)
    })?;

    assert!(output.contains("Enter name of student 2: "));
    assert!(output.contains("Enter score of Cid: "));
    assert!(output.contains("===== Student Grade Report ====="));
    assert!(output.contains("Ann : 90\nBen : 80\nCid : 70\n"));
    assert!(output.contains("Average Score: 80.0\n"));
    assert!(output.contains("Highest Score: 90"));
    assert!(output.contains("Lowest Score: 70"));
    Ok(())
}

#[test]
fn test_scripted_input_reprompts_on_bad_numbers() -> Result<()> {
    let output = run_scripted("two\n1\n\nZoe\nninety\n95\n", |console| {
        run_grades(console, ReportFormat::Table)
    })?;

    assert_eq!(output.matches("Please enter a whole number.").count(), 2);
    assert!(output.contains("Name cannot be empty."));
    assert!(output.contains("Zoe : 95"));
    assert!(output.contains("Average Score: 95.0\n"));
    Ok(())
}

#[test]
fn test_scripted_zero_students_is_an_error() {
    let result = run_scripted("0\n", |console| run_grades(console, ReportFormat::Table));

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "No students to report on");
}

#[test]
fn test_scripted_json_report() -> Result<()> {
    let output = run_scripted("2\nAnn\n90\nBen\n70\n", |console| {
        run_grades(console, ReportFormat::Json)
    })?;

    let start = output.find('{').expect("json output");
    let report: serde_json::Value = serde_json::from_str(&output[start..])?;
    assert_eq!(report["summary"]["average"], 80.0);
    assert_eq!(report["summary"]["highest"], 90);
    assert_eq!(report["records"][1]["name"], "Ben");
    Ok(())
}

#[test]
fn test_input_ending_early_prints_no_report() -> Result<()> {
    let output = run_scripted("2\nAnn\n90\n", |console| {
        run_grades(console, ReportFormat::Table)
    })?;

    assert!(!output.contains("Student Grade Report"));
    Ok(())
}

#[test]
fn test_uneven_average_prints_full_precision() -> Result<()> {
    let output = run_scripted("3\nAnn\n90\nBen\n80\nCid\n80\n", |console| {
        run_grades(console, ReportFormat::Table)
    })?;

    assert!(output.contains("Average Score: 83.33333333333333\n"));
    Ok(())
}
