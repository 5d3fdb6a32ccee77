//! 员工记录与核心费率规则
//!
//! 两个纯函数直接在 [`EmployeeRecord`] 上求值，不修改输入、没有副作用。
//! 缺失的数值字段使比较不成立，缺失的布尔字段视为 false。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 休假费率要求的工龄下限（不含）
pub const VACATION_SENIORITY_THRESHOLD: u32 = 10;
/// 伤残补助要求的最低工龄
pub const MIN_DISABILITY_SENIORITY: u32 = 2;
/// 伤残补助允许的最长伤残月数
pub const MAX_MONTHS_DISABLED: u32 = 12;

/// 员工记录
///
/// JSON 字段沿用 camelCase（`onVacation`、`monthsDisabled`、`isPartTime`），
/// 缺失的字段序列化时省略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_vacation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months_disabled: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_part_time: Option<bool>,
}

impl EmployeeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_vacation(mut self, on_vacation: bool) -> Self {
        self.on_vacation = Some(on_vacation);
        self
    }

    pub fn with_seniority(mut self, seniority: u32) -> Self {
        self.seniority = Some(seniority);
        self
    }

    pub fn with_months_disabled(mut self, months: u32) -> Self {
        self.months_disabled = Some(months);
        self
    }

    pub fn with_part_time(mut self, is_part_time: bool) -> Self {
        self.is_part_time = Some(is_part_time);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_on_vacation(&self) -> bool {
        self.on_vacation.unwrap_or(false)
    }

    pub fn is_part_time(&self) -> bool {
        self.is_part_time.unwrap_or(false)
    }
}

/// 员工费率：休假中且工龄超过 10 年为 1，否则为 0.5
pub fn employee_rate(employee: &EmployeeRecord) -> f64 {
    if employee.is_on_vacation()
        && employee
            .seniority
            .is_some_and(|s| s > VACATION_SENIORITY_THRESHOLD)
    {
        1.0
    } else {
        0.5
    }
}

/// 是否不具备伤残补助资格（按顺序短路求值）
pub fn is_not_eligible_for_disability(employee: &EmployeeRecord) -> bool {
    employee
        .seniority
        .is_some_and(|s| s < MIN_DISABILITY_SENIORITY)
        || employee
            .months_disabled
            .is_some_and(|m| m > MAX_MONTHS_DISABLED)
        || employee.is_part_time()
}

/// 伤残补助：不具备资格为 0，否则为 1
pub fn disability_amount(employee: &EmployeeRecord) -> f64 {
    if is_not_eligible_for_disability(employee) {
        0.0
    } else {
        1.0
    }
}
