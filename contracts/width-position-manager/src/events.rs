use range_types::{PositionResult, WidthRecord};
use soroban_sdk::{Address, Env, Symbol};

/// Sizing decision for one attempt, published once the range is computed
pub fn width_resolved(env: &Env, pool: &Address, record: &WidthRecord) {
    env.events().publish(
        (Symbol::new(env, "width_resolved"), pool.clone()),
        record.clone(),
    );
}

pub fn position_created(env: &Env, owner: &Address, result: &PositionResult) {
    env.events().publish(
        (Symbol::new(env, "position_created"), owner.clone()),
        result.clone(),
    );
}
