use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;

use crate::application::GradeReport;
use crate::domain::GradeRecord;

use super::{Console, ReportFormat};

/// Collect names and scores, then print the class report.
///
/// Fails when no students were entered. Ends quietly if input runs out
/// before every record is collected.
pub fn run_grades<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    format: ReportFormat,
) -> Result<()> {
    let Some(count) = prompt_until::<usize, _, _>(console, "Enter number of students: ")? else {
        return Ok(());
    };

    let mut records = Vec::new();
    for i in 0..count {
        let name = loop {
            let label = format!("Enter name of student {}: ", i + 1);
            match console.prompt(&label)? {
                None => return Ok(()),
                Some(name) if name.is_empty() => {
                    writeln!(console.out(), "Name cannot be empty.")?
                }
                Some(name) => break name,
            }
        };
        let label = format!("Enter score of {}: ", name);
        let Some(score) = prompt_until::<i32, _, _>(console, &label)? else {
            return Ok(());
        };
        records.push(GradeRecord::new(name, score));
    }

    let report = GradeReport::new(records)?;
    let out = console.out();
    match format {
        ReportFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        ReportFormat::Table => {
            writeln!(out, "\n===== Student Grade Report =====")?;
            for record in &report.records {
                writeln!(out, "{} : {}", record.name, record.score)?;
            }
            writeln!(out, "{}", "-".repeat(31))?;
            writeln!(out, "Average Score: {:?}", report.summary.average)?;
            writeln!(out, "Highest Score: {}", report.summary.highest)?;
            writeln!(out, "Lowest Score: {}", report.summary.lowest)?;
        }
    }
    Ok(())
}

/// Re-prompt until the answer parses as `T`.
fn prompt_until<T: FromStr, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> Result<Option<T>> {
    loop {
        let Some(input) = console.prompt(label)? else {
            return Ok(None);
        };
        match input.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(console.out(), "Please enter a whole number.")?,
        }
    }
}
