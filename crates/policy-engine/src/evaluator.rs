//! 策略求值
//!
//! 按声明顺序逐个检查条件，第一个能决定结果的条件出现后立即停止。

use crate::employee::EmployeeRecord;
use crate::error::{PolicyError, Result};
use crate::policy::{Combinator, Policy};
use policy_shared::MissingFieldPolicy;
use serde::Serialize;

/// 求值结果
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub policy_id: String,
    pub matched: bool,
    pub outcome: f64,
    /// 触发短路的条件下标；全部检查完仍未短路时为 None
    pub decided_by: Option<usize>,
    pub trace: Vec<String>,
}

pub struct PolicyEvaluator {
    missing_fields: MissingFieldPolicy,
    trace_enabled: bool,
}

impl PolicyEvaluator {
    pub fn new(missing_fields: MissingFieldPolicy) -> Self {
        Self {
            missing_fields,
            trace_enabled: false,
        }
    }

    pub fn with_trace(mut self) -> Self {
        self.trace_enabled = true;
        self
    }

    pub fn evaluate(&self, policy: &Policy, employee: &EmployeeRecord) -> Result<Evaluation> {
        if self.missing_fields == MissingFieldPolicy::Strict {
            if let Some(field) = policy
                .required_fields()
                .into_iter()
                .find(|field| !field.is_present(employee))
            {
                return Err(PolicyError::MissingField {
                    policy_id: policy.id.clone(),
                    field: field.to_string(),
                });
            }
        }

        // All 在条件不成立时停止，Any 在条件成立时停止
        let stop_on = policy.combinator == Combinator::Any;
        let mut trace = Vec::new();
        let mut decided_by = None;

        for (i, predicate) in policy.predicates.iter().enumerate() {
            let held = predicate.holds(employee);
            if self.trace_enabled {
                trace.push(format!("[{}] {} => {}", i, predicate, held));
            }
            if held == stop_on {
                decided_by = Some(i);
                break;
            }
        }

        let matched = if decided_by.is_some() { stop_on } else { !stop_on };

        Ok(Evaluation {
            policy_id: policy.id.clone(),
            matched,
            outcome: policy.outcome.resolve(matched),
            decided_by,
            trace,
        })
    }
}
