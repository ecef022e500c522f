//! CSV loading for the reference tables.
//!
//! Rows are read into loosely-typed raw structs first, then converted into
//! [`HealthSystem`] and [`Hospital`] records with explicit per-column
//! errors. Optional columns may be absent from the header entirely.

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{FinancialDefaults, FormulaVariant, HealthSystem, Hospital};

/// Header of the formula flag column.
pub const FORMULA_FLAG_COLUMN: &str = "Agency>Staff";

#[derive(Debug, Deserialize)]
struct HealthSystemRow {
    #[serde(rename = "Health_System_ID")]
    id: String,
    #[serde(rename = "Health_System_Name")]
    name: String,
    #[serde(rename = "Bed_Size")]
    bed_size: Option<String>,
    #[serde(rename = "State(s)")]
    states: Option<String>,
    #[serde(rename = "Affiliated_Hospitals")]
    affiliated_hospitals: Option<String>,
    #[serde(rename = "Staff_Labor_Rate")]
    staff_labor_rate: Option<String>,
    #[serde(rename = "Agency_Labor_Rate")]
    agency_labor_rate: Option<String>,
    #[serde(rename = "Estimated_RN_Need", default)]
    estimated_rn_need: Option<String>,
    #[serde(rename = "Agency>Staff", default)]
    agency_above_staff: Option<String>,
    #[serde(rename = "Agency_Labor_FTE", default)]
    agency_labor_fte: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HospitalRow {
    #[serde(rename = "CCN#")]
    ccn: String,
    #[serde(rename = "Hospital_Name")]
    name: String,
    #[serde(rename = "Bed_Size")]
    bed_size: Option<String>,
    #[serde(rename = "State")]
    state: Option<String>,
    #[serde(rename = "Health_System_Name", default)]
    health_system_name: Option<String>,
    #[serde(rename = "Staff_Labor_Rate")]
    staff_labor_rate: Option<String>,
    #[serde(rename = "Agency_Labor_Rate")]
    agency_labor_rate: Option<String>,
    #[serde(rename = "Estimated_RN_Need", default)]
    estimated_rn_need: Option<String>,
    #[serde(rename = "Agency>Staff", default)]
    agency_above_staff: Option<String>,
    #[serde(rename = "Agency_Labor_FTE", default)]
    agency_labor_fte: Option<String>,
}

/// Raw financial cells shared by both tables.
struct FinancialCells {
    staff_labor_rate: Option<String>,
    agency_labor_rate: Option<String>,
    estimated_rn_need: Option<String>,
    agency_above_staff: Option<String>,
    agency_labor_fte: Option<String>,
}

impl FinancialCells {
    fn into_defaults(self, has_flag_column: bool) -> Result<FinancialDefaults, String> {
        // An absent column means every row is standard; an empty cell does not.
        let flag = match self.agency_above_staff.as_deref() {
            Some(text) => parse_flag(text),
            None => !has_flag_column,
        };

        Ok(FinancialDefaults {
            staff_labor_rate: required_decimal("Staff_Labor_Rate", self.staff_labor_rate)?,
            agency_labor_rate: required_decimal("Agency_Labor_Rate", self.agency_labor_rate)?,
            estimated_rn_need: optional_decimal("Estimated_RN_Need", self.estimated_rn_need)?
                .unwrap_or(Decimal::ZERO),
            formula: FormulaVariant::from_flag(flag),
            agency_labor_fte: optional_decimal("Agency_Labor_FTE", self.agency_labor_fte)?,
        })
    }
}

impl HealthSystemRow {
    fn into_record(self, has_flag_column: bool) -> Result<HealthSystem, String> {
        let affiliated = required_decimal("Affiliated_Hospitals", self.affiliated_hospitals)?;
        let affiliated_hospitals = affiliated
            .fract()
            .is_zero()
            .then(|| affiliated.to_u32())
            .flatten()
            .ok_or_else(|| {
                format!("column 'Affiliated_Hospitals': expected a count, got '{affiliated}'")
            })?;

        let financial = FinancialCells {
            staff_labor_rate: self.staff_labor_rate,
            agency_labor_rate: self.agency_labor_rate,
            estimated_rn_need: self.estimated_rn_need,
            agency_above_staff: self.agency_above_staff,
            agency_labor_fte: self.agency_labor_fte,
        };

        Ok(HealthSystem {
            id: required_text("Health_System_ID", self.id)?,
            name: required_text("Health_System_Name", self.name)?,
            bed_size: required_decimal("Bed_Size", self.bed_size)?,
            states: self.states.unwrap_or_default(),
            affiliated_hospitals,
            defaults: financial.into_defaults(has_flag_column)?,
        })
    }
}

impl HospitalRow {
    fn into_record(self, has_flag_column: bool) -> Result<Hospital, String> {
        let financial = FinancialCells {
            staff_labor_rate: self.staff_labor_rate,
            agency_labor_rate: self.agency_labor_rate,
            estimated_rn_need: self.estimated_rn_need,
            agency_above_staff: self.agency_above_staff,
            agency_labor_fte: self.agency_labor_fte,
        };

        Ok(Hospital {
            ccn: required_text("CCN#", self.ccn)?,
            name: required_text("Hospital_Name", self.name)?,
            bed_size: required_decimal("Bed_Size", self.bed_size)?,
            state: self
                .state
                .ok_or_else(|| "column 'State' is empty".to_string())?,
            health_system_name: self.health_system_name,
            defaults: financial.into_defaults(has_flag_column)?,
        })
    }
}

/// Parses the formula flag cell.
///
/// Only the text `true` (any case) counts as set. Every other value,
/// including `1` or `yes`, selects the alternative formula.
pub fn parse_flag(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}

/// Parses a decimal cell, accepting plain and scientific notation.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn required_text(column: &str, value: String) -> Result<String, String> {
    if value.is_empty() {
        Err(format!("column '{column}' is empty"))
    } else {
        Ok(value)
    }
}

fn required_decimal(column: &str, value: Option<String>) -> Result<Decimal, String> {
    optional_decimal(column, value)?.ok_or_else(|| format!("column '{column}' is empty"))
}

fn optional_decimal(column: &str, value: Option<String>) -> Result<Option<Decimal>, String> {
    match value {
        None => Ok(None),
        Some(text) => parse_decimal(&text)
            .map(Some)
            .ok_or_else(|| format!("column '{column}': invalid decimal '{text}'")),
    }
}

/// Loads the health-system table.
pub fn load_health_systems(path: &Path) -> EngineResult<Vec<HealthSystem>> {
    load_table(path, |row: HealthSystemRow, has_flag| row.into_record(has_flag))
}

/// Loads the hospital table.
pub fn load_hospitals(path: &Path) -> EngineResult<Vec<Hospital>> {
    load_table(path, |row: HospitalRow, has_flag| row.into_record(has_flag))
}

fn load_table<R, T, F>(path: &Path, convert: F) -> EngineResult<Vec<T>>
where
    R: serde::de::DeserializeOwned,
    F: Fn(R, bool) -> Result<T, String>,
{
    let path_str = path.display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|_| EngineError::DatasetNotFound {
            path: path_str.clone(),
        })?;

    let has_flag_column = reader
        .headers()
        .map_err(|e| EngineError::DatasetParseError {
            path: path_str.clone(),
            row: 0,
            message: e.to_string(),
        })?
        .iter()
        .any(|header| header == FORMULA_FLAG_COLUMN);

    if !has_flag_column {
        debug!(path = %path_str, "No formula flag column; every row uses the standard formula");
    }

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<R>().enumerate() {
        let row = index as u64 + 1;
        let raw = result.map_err(|e| EngineError::DatasetParseError {
            path: path_str.clone(),
            row,
            message: e.to_string(),
        })?;
        let record = convert(raw, has_flag_column).map_err(|message| {
            EngineError::DatasetParseError {
                path: path_str.clone(),
                row,
                message,
            }
        })?;
        records.push(record);
    }

    info!(path = %path_str, rows = records.len(), "Loaded reference table");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_temp_csv(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("savings_engine_data_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    const HOSPITAL_HEADER: &str = "CCN#,Hospital_Name,Bed_Size,State,Health_System_Name,Staff_Labor_Rate,Agency_Labor_Rate,Estimated_RN_Need,Agency>Staff,Agency_Labor_FTE";

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("True"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" true "));
        assert!(!parse_flag("False"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag("nan"));
    }

    #[test]
    fn test_parse_decimal_plain_and_scientific() {
        assert_eq!(parse_decimal("40.00"), Some(dec("40.00")));
        assert_eq!(parse_decimal(" 12 "), Some(dec("12")));
        assert_eq!(parse_decimal("1.5e2"), Some(dec("150")));
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_load_sample_hospitals() {
        let hospitals = load_hospitals(Path::new("./config/all_hospitals.csv")).unwrap();
        assert_eq!(hospitals.len(), 6);

        let prairie = hospitals.iter().find(|h| h.ccn == "160112").unwrap();
        assert_eq!(prairie.health_system_name, None);
        assert_eq!(prairie.defaults.formula, FormulaVariant::Standard);
        assert_eq!(prairie.defaults.estimated_rn_need, dec("2.36"));

        let blue_mesa = hospitals.iter().find(|h| h.ccn == "030064").unwrap();
        assert_eq!(blue_mesa.defaults.formula, FormulaVariant::Alt);
        assert_eq!(blue_mesa.defaults.agency_labor_fte, Some(dec("5.1")));
    }

    #[test]
    fn test_empty_flag_cell_selects_alt() {
        let hospitals = load_hospitals(Path::new("./config/all_hospitals.csv")).unwrap();
        let sandia = hospitals.iter().find(|h| h.ccn == "320019").unwrap();

        assert_eq!(sandia.defaults.formula, FormulaVariant::Alt);
        assert_eq!(sandia.defaults.agency_labor_fte, None);
    }

    #[test]
    fn test_missing_optional_columns_use_defaults() {
        let path = write_temp_csv(
            "minimal_hospitals.csv",
            "CCN#,Hospital_Name,Bed_Size,State,Staff_Labor_Rate,Agency_Labor_Rate\n\
             100001,Gulf Coast Hospital,150,FL,41.00,88.00\n",
        );
        let hospitals = load_hospitals(&path).unwrap();

        assert_eq!(hospitals.len(), 1);
        let h = &hospitals[0];
        assert_eq!(h.health_system_name, None);
        assert_eq!(h.defaults.estimated_rn_need, Decimal::ZERO);
        assert_eq!(h.defaults.formula, FormulaVariant::Standard);
        assert_eq!(h.defaults.agency_labor_fte, None);
    }

    #[test]
    fn test_invalid_rate_reports_row_and_column() {
        let path = write_temp_csv(
            "bad_rate_hospitals.csv",
            &format!(
                "{HOSPITAL_HEADER}\n\
                 100001,Gulf Coast Hospital,150,FL,,41.00,88.00,3.0,True,\n\
                 100002,Bayside Hospital,90,FL,,abc,88.00,3.0,True,\n"
            ),
        );

        match load_hospitals(&path) {
            Err(EngineError::DatasetParseError { row, message, .. }) => {
                assert_eq!(row, 2);
                assert!(message.contains("Staff_Labor_Rate"));
                assert!(message.contains("abc"));
            }
            other => panic!("Expected DatasetParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_required_rate_is_an_error() {
        let path = write_temp_csv(
            "empty_rate_hospitals.csv",
            &format!("{HOSPITAL_HEADER}\n100001,Gulf Coast Hospital,150,FL,,,88.00,3.0,True,\n"),
        );

        match load_hospitals(&path) {
            Err(EngineError::DatasetParseError { message, .. }) => {
                assert_eq!(message, "column 'Staff_Labor_Rate' is empty");
            }
            other => panic!("Expected DatasetParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_sample_health_systems() {
        let systems = load_health_systems(Path::new("./config/health_system.csv")).unwrap();
        assert_eq!(systems.len(), 3);

        let riverbend = systems.iter().find(|s| s.id == "HSI00000003").unwrap();
        assert_eq!(riverbend.states, "OH, KY");
        assert_eq!(riverbend.affiliated_hospitals, 9);
        assert_eq!(riverbend.defaults.agency_labor_rate, dec("98.20"));
    }

    #[test]
    fn test_fractional_affiliated_count_is_an_error() {
        let path = write_temp_csv(
            "bad_count_systems.csv",
            "Health_System_ID,Health_System_Name,Bed_Size,State(s),Affiliated_Hospitals,Staff_Labor_Rate,Agency_Labor_Rate\n\
             HSI1,Acme Health,100,TX,2.5,40,90\n",
        );

        match load_health_systems(&path) {
            Err(EngineError::DatasetParseError { message, .. }) => {
                assert!(message.contains("Affiliated_Hospitals"));
            }
            other => panic!("Expected DatasetParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_returns_not_found() {
        match load_hospitals(Path::new("/nonexistent/all_hospitals.csv")) {
            Err(EngineError::DatasetNotFound { path }) => {
                assert!(path.contains("all_hospitals.csv"));
            }
            other => panic!("Expected DatasetNotFound, got {:?}", other),
        }
    }
}
