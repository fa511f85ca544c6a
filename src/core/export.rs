use crate::core::Chore;
use crate::utils::error::{ChoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delimiter(&self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }
}

/// 標頭固定為 description,done,deadline
pub fn export_delimited(chores: &[Chore], format: ExportFormat) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_writer(Vec::new());

    for chore in chores {
        writer.serialize(chore)?;
    }
    // 空清單時 serialize 不會寫出標頭
    if chores.is_empty() {
        writer.write_record(["description", "done", "deadline"])?;
    }

    let data = writer.into_inner().map_err(|e| ChoreError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| ChoreError::ConfigError {
        message: format!("Export produced invalid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Vec<Chore> {
        vec![
            Chore::new("Laundry", false, NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()),
            Chore::new("Dishes, pots", true, NaiveDate::from_ymd_opt(2026, 10, 10).unwrap()),
        ]
    }

    #[test]
    fn test_export_csv() {
        let output = export_delimited(&sample(), ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "description,done,deadline");
        assert_eq!(lines[1], "Laundry,false,2026-10-15");
        assert_eq!(lines[2], "\"Dishes, pots\",true,2026-10-10");
    }

    #[test]
    fn test_export_tsv() {
        let output = export_delimited(&sample(), ExportFormat::Tsv).unwrap();
        assert!(output.starts_with("description\tdone\tdeadline\n"));
        assert!(output.contains("Dishes, pots\ttrue\t2026-10-10"));
    }

    #[test]
    fn test_export_empty_list_has_header_only() {
        let output = export_delimited(&[], ExportFormat::Csv).unwrap();
        assert_eq!(output, "description,done,deadline\n");
    }
}
