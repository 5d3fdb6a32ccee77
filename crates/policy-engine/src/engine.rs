//! 策略引擎
//!
//! 持有策略注册表与求值器，按策略 ID 对员工记录求值。

use crate::employee::EmployeeRecord;
use crate::error::{PolicyError, Result};
use crate::evaluator::{Evaluation, PolicyEvaluator};
use crate::policy::Policy;
use crate::registry::PolicyRegistry;
use policy_shared::{AppConfig, EvaluationConfig, observability};
use tracing::{debug, info, instrument, warn};

pub struct PolicyEngine {
    registry: PolicyRegistry,
    evaluator: PolicyEvaluator,
}

impl PolicyEngine {
    /// 加载 `{service_name}` 的分层配置并创建引擎
    pub fn load(service_name: &str) -> Result<Self> {
        let config = AppConfig::load(service_name)?;
        Self::from_config(&config)
    }

    /// 初始化日志并按应用配置创建引擎
    ///
    /// 全局 subscriber 已安装时沿用现有的，不视为错误。
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        if let Err(e) = observability::init(&config.observability) {
            warn!(error = %e, "日志未重新初始化");
        }

        info!(
            service = %config.service_name,
            environment = %config.environment,
            "加载策略引擎"
        );
        Self::new(&config.evaluation)
    }

    /// 创建引擎并注册内置策略
    pub fn new(config: &EvaluationConfig) -> Result<Self> {
        let engine = Self::empty(config);
        for policy in Policy::builtin() {
            engine.registry.register(policy)?;
        }

        info!(
            policies = engine.registry.len(),
            missing_fields = %config.missing_fields,
            trace_enabled = config.trace_enabled,
            "策略引擎已就绪"
        );
        Ok(engine)
    }

    /// 创建不含任何策略的引擎
    pub fn empty(config: &EvaluationConfig) -> Self {
        let mut evaluator = PolicyEvaluator::new(config.missing_fields);
        if config.trace_enabled {
            evaluator = evaluator.with_trace();
        }

        Self {
            registry: PolicyRegistry::new(),
            evaluator,
        }
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    #[instrument(skip(self, employee))]
    pub fn evaluate(&self, policy_id: &str, employee: &EmployeeRecord) -> Result<Evaluation> {
        let policy = self
            .registry
            .get(policy_id)
            .ok_or_else(|| PolicyError::PolicyNotFound(policy_id.to_string()))?;

        let evaluation = self.evaluator.evaluate(&policy, employee)?;
        debug!(
            matched = evaluation.matched,
            outcome = evaluation.outcome,
            decided_by = ?evaluation.decided_by,
            "策略已求值"
        );
        Ok(evaluation)
    }

    /// 解析 JSON 员工记录后求值
    pub fn evaluate_json(&self, policy_id: &str, json: &str) -> Result<Evaluation> {
        let employee = EmployeeRecord::from_json(json)?;
        self.evaluate(policy_id, &employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{DISABILITY_AMOUNT_POLICY, EMPLOYEE_RATE_POLICY};
    use policy_shared::MissingFieldPolicy;

    #[test]
    fn test_new_registers_builtins() {
        let engine = PolicyEngine::new(&EvaluationConfig::default()).unwrap();

        assert_eq!(
            engine.registry().ids(),
            vec![DISABILITY_AMOUNT_POLICY, EMPLOYEE_RATE_POLICY]
        );
    }

    #[test]
    fn test_empty_engine() {
        let engine = PolicyEngine::empty(&EvaluationConfig::default());

        assert!(matches!(
            engine.evaluate(EMPLOYEE_RATE_POLICY, &EmployeeRecord::new()),
            Err(PolicyError::PolicyNotFound(_))
        ));
    }

    #[test]
    fn test_from_config_applies_evaluation_settings() {
        let config = AppConfig {
            service_name: "policy-engine".to_string(),
            evaluation: EvaluationConfig {
                missing_fields: MissingFieldPolicy::Strict,
                trace_enabled: true,
            },
            ..Default::default()
        };

        // 第二次调用时日志已安装，引擎照常创建
        let engine = PolicyEngine::from_config(&config).unwrap();
        let again = PolicyEngine::from_config(&config).unwrap();

        assert!(matches!(
            engine.evaluate(EMPLOYEE_RATE_POLICY, &EmployeeRecord::new().with_on_vacation(true)),
            Err(PolicyError::MissingField { .. })
        ));

        let result = again
            .evaluate_json(EMPLOYEE_RATE_POLICY, r#"{"onVacation": true, "seniority": 11}"#)
            .unwrap();
        assert_eq!(result.outcome, 1.0);
        assert_eq!(result.trace.len(), 2);
    }

    #[test]
    fn test_evaluate_json_rejects_malformed_record() {
        let engine = PolicyEngine::new(&EvaluationConfig::default()).unwrap();

        assert!(matches!(
            engine.evaluate_json(DISABILITY_AMOUNT_POLICY, r#"{"seniority": "ten"}"#),
            Err(PolicyError::Json(_))
        ));
    }
}
