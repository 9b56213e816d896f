use range_types::RangeError;
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the orchestrator contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Deployment configuration (Instance storage)
    Config,
}

/// Addresses this deployment delegates to
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// External service that mints concentrated-liquidity positions
    pub position_manager: Address,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, RangeError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(RangeError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}
