//! 员工策略规则
//!
//! - [`employee_rate`] / [`disability_amount`]：直接在员工记录上求值的纯函数
//! - [`Policy`]：同样的规则以有序条件表的形式描述，可从 JSON 加载
//! - [`PolicyEngine`]：注册表 + 短路求值，支持宽松 / 严格两种缺失字段策略

pub mod employee;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod policy;
pub mod predicate;
pub mod registry;

pub use employee::{
    EmployeeRecord, disability_amount, employee_rate, is_not_eligible_for_disability,
};
pub use engine::PolicyEngine;
pub use error::{PolicyError, Result};
pub use evaluator::{Evaluation, PolicyEvaluator};
pub use policy::{Combinator, DISABILITY_AMOUNT_POLICY, EMPLOYEE_RATE_POLICY, Outcome, Policy};
pub use predicate::{EmployeeField, Predicate};
pub use registry::PolicyRegistry;
