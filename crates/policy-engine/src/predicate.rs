//! 资格条件
//!
//! 每个条件直接读取 [`EmployeeRecord`] 的一个字段。缺失的数值字段让比较不成立，
//! 缺失的布尔字段视为 false。

use crate::employee::EmployeeRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 员工记录字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeField {
    OnVacation,
    Seniority,
    MonthsDisabled,
    IsPartTime,
}

impl EmployeeField {
    pub fn is_present(self, employee: &EmployeeRecord) -> bool {
        match self {
            Self::OnVacation => employee.on_vacation.is_some(),
            Self::Seniority => employee.seniority.is_some(),
            Self::MonthsDisabled => employee.months_disabled.is_some(),
            Self::IsPartTime => employee.is_part_time.is_some(),
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OnVacation => "onVacation",
            Self::Seniority => "seniority",
            Self::MonthsDisabled => "monthsDisabled",
            Self::IsPartTime => "isPartTime",
        };
        f.write_str(name)
    }
}

/// 单个资格条件
///
/// JSON 形如 `{"when": "seniority_above", "value": 10}` 或 `{"when": "part_time"}`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", content = "value", rename_all = "snake_case")]
pub enum Predicate {
    OnVacation,
    PartTime,
    SeniorityAbove(u32),
    SeniorityBelow(u32),
    MonthsDisabledAbove(u32),
    /// 字段缺失时成立
    Missing(EmployeeField),
}

impl Predicate {
    pub fn holds(&self, employee: &EmployeeRecord) -> bool {
        match *self {
            Self::OnVacation => employee.is_on_vacation(),
            Self::PartTime => employee.is_part_time(),
            Self::SeniorityAbove(n) => employee.seniority.is_some_and(|s| s > n),
            Self::SeniorityBelow(n) => employee.seniority.is_some_and(|s| s < n),
            Self::MonthsDisabledAbove(n) => employee.months_disabled.is_some_and(|m| m > n),
            Self::Missing(field) => !field.is_present(employee),
        }
    }

    pub fn field(&self) -> EmployeeField {
        match *self {
            Self::OnVacation => EmployeeField::OnVacation,
            Self::PartTime => EmployeeField::IsPartTime,
            Self::SeniorityAbove(_) | Self::SeniorityBelow(_) => EmployeeField::Seniority,
            Self::MonthsDisabledAbove(_) => EmployeeField::MonthsDisabled,
            Self::Missing(field) => field,
        }
    }

    /// 条件求值是否需要字段有值；`Missing` 本身就是在检查缺失
    pub fn reads_value(&self) -> bool {
        !matches!(self, Self::Missing(_))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnVacation | Self::PartTime => write!(f, "{}", self.field()),
            Self::SeniorityAbove(n) | Self::MonthsDisabledAbove(n) => {
                write!(f, "{} > {}", self.field(), n)
            }
            Self::SeniorityBelow(n) => write!(f, "{} < {}", self.field(), n),
            Self::Missing(field) => write!(f, "{} is missing", field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_predicates_fail_on_missing_value() {
        let empty = EmployeeRecord::new();

        assert!(!Predicate::SeniorityAbove(10).holds(&empty));
        assert!(!Predicate::SeniorityBelow(2).holds(&empty));
        assert!(!Predicate::MonthsDisabledAbove(12).holds(&empty));
        assert!(!Predicate::OnVacation.holds(&empty));
        assert!(!Predicate::PartTime.holds(&empty));
    }

    #[test]
    fn test_boundaries_are_strict() {
        let record = EmployeeRecord::new().with_seniority(10).with_months_disabled(12);

        assert!(!Predicate::SeniorityAbove(10).holds(&record));
        assert!(!Predicate::SeniorityBelow(10).holds(&record));
        assert!(!Predicate::MonthsDisabledAbove(12).holds(&record));
        assert!(Predicate::SeniorityAbove(9).holds(&record));
    }

    #[test]
    fn test_missing_predicate() {
        let record = EmployeeRecord::new().with_seniority(3);

        assert!(Predicate::Missing(EmployeeField::MonthsDisabled).holds(&record));
        assert!(!Predicate::Missing(EmployeeField::Seniority).holds(&record));
        assert!(!Predicate::Missing(EmployeeField::Seniority).reads_value());
    }

    #[test]
    fn test_json_shape() {
        let p: Predicate = serde_json::from_str(r#"{"when": "seniority_above", "value": 10}"#).unwrap();
        assert_eq!(p, Predicate::SeniorityAbove(10));

        let p: Predicate = serde_json::from_str(r#"{"when": "part_time"}"#).unwrap();
        assert_eq!(p, Predicate::PartTime);

        let p: Predicate =
            serde_json::from_str(r#"{"when": "missing", "value": "monthsDisabled"}"#).unwrap();
        assert_eq!(p, Predicate::Missing(EmployeeField::MonthsDisabled));

        assert!(serde_json::from_str::<Predicate>(r#"{"when": "seniority_above", "value": -1}"#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Predicate::SeniorityBelow(2).to_string(), "seniority < 2");
        assert_eq!(Predicate::PartTime.to_string(), "isPartTime");
        assert_eq!(
            Predicate::Missing(EmployeeField::OnVacation).to_string(),
            "onVacation is missing"
        );
    }
}
