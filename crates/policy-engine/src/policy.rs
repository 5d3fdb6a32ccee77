//! 策略表
//!
//! 一条策略是一组有序条件、一个组合方式（全部成立 / 任一成立）和两个数值结果。

use crate::employee::{MAX_MONTHS_DISABLED, MIN_DISABILITY_SENIORITY, VACATION_SENIORITY_THRESHOLD};
use crate::error::{PolicyError, Result};
use crate::predicate::{EmployeeField, Predicate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const EMPLOYEE_RATE_POLICY: &str = "employee-rate";
pub const DISABILITY_AMOUNT_POLICY: &str = "disability-amount";

/// 条件组合方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// 全部成立才命中，遇到不成立的条件即停止
    All,
    /// 任一成立即命中，遇到成立的条件即停止
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub when_matched: f64,
    pub otherwise: f64,
}

impl Outcome {
    pub fn new(when_matched: f64, otherwise: f64) -> Self {
        Self {
            when_matched,
            otherwise,
        }
    }

    pub fn resolve(&self, matched: bool) -> f64 {
        if matched { self.when_matched } else { self.otherwise }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub name: String,
    pub combinator: Combinator,
    pub predicates: Vec<Predicate>,
    pub outcome: Outcome,
}

impl Policy {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        combinator: Combinator,
        predicates: Vec<Predicate>,
        outcome: Outcome,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            combinator,
            predicates,
            outcome,
        }
    }

    /// 解析并校验 JSON 策略
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(PolicyError::InvalidPolicy("策略 ID 不能为空".to_string()));
        }
        if self.predicates.is_empty() {
            return Err(PolicyError::InvalidPolicy(format!(
                "策略 '{}' 至少需要一个条件",
                self.id
            )));
        }
        if !self.outcome.when_matched.is_finite() || !self.outcome.otherwise.is_finite() {
            return Err(PolicyError::InvalidPolicy(format!(
                "策略 '{}' 的结果必须是有限数值",
                self.id
            )));
        }
        Ok(())
    }

    /// 求值时需要有值的字段（严格模式据此校验）；只被 `Missing` 检查的字段不计入
    pub fn required_fields(&self) -> BTreeSet<EmployeeField> {
        self.predicates
            .iter()
            .filter(|p| p.reads_value())
            .map(Predicate::field)
            .collect()
    }

    /// 员工费率：休假中且工龄超过 10 年 => 1，否则 0.5
    pub fn employee_rate() -> Self {
        Self::new(
            EMPLOYEE_RATE_POLICY,
            "employee_rate",
            Combinator::All,
            vec![
                Predicate::OnVacation,
                Predicate::SeniorityAbove(VACATION_SENIORITY_THRESHOLD),
            ],
            Outcome::new(1.0, 0.5),
        )
    }

    /// 伤残补助：任一不合格条件成立 => 0，否则 1
    pub fn disability_amount() -> Self {
        Self::new(
            DISABILITY_AMOUNT_POLICY,
            "disability_amount",
            Combinator::Any,
            vec![
                Predicate::SeniorityBelow(MIN_DISABILITY_SENIORITY),
                Predicate::MonthsDisabledAbove(MAX_MONTHS_DISABLED),
                Predicate::PartTime,
            ],
            Outcome::new(0.0, 1.0),
        )
    }

    pub fn builtin() -> Vec<Self> {
        vec![Self::employee_rate(), Self::disability_amount()]
    }
}
