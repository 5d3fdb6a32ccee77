//! 策略注册表，可在线程间共享

use crate::error::{PolicyError, Result};
use crate::policy::Policy;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone, Default)]
pub struct PolicyRegistry {
    policies: Arc<DashMap<String, Arc<Policy>>>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 校验并注册策略，同 ID 的旧策略被替换
    #[instrument(skip(self, policy), fields(policy_id = %policy.id))]
    pub fn register(&self, policy: Policy) -> Result<()> {
        policy.validate()?;
        if self
            .policies
            .insert(policy.id.clone(), Arc::new(policy))
            .is_some()
        {
            info!("策略已替换");
        } else {
            info!("策略已注册");
        }
        Ok(())
    }

    /// 从 JSON 注册策略，返回策略 ID
    pub fn register_json(&self, json: &str) -> Result<String> {
        let policy = Policy::from_json(json)?;
        let id = policy.id.clone();
        self.register(policy)?;
        Ok(id)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, policy_id: &str) -> Result<()> {
        match self.policies.remove(policy_id) {
            Some(_) => Ok(()),
            None => {
                warn!("删除不存在的策略");
                Err(PolicyError::PolicyNotFound(policy_id.to_string()))
            }
        }
    }

    pub fn get(&self, policy_id: &str) -> Option<Arc<Policy>> {
        self.policies.get(policy_id).map(|p| Arc::clone(p.value()))
    }

    pub fn contains(&self, policy_id: &str) -> bool {
        self.policies.contains_key(policy_id)
    }

    /// 已注册的策略 ID（已排序）
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.policies.iter().map(|p| p.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
