use soroban_sdk::{Address, Env, IntoVal, Symbol};

/// View of the pool taken at the start of an invocation
#[derive(Clone, Debug)]
pub struct PoolSnapshot {
    pub address: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_spacing: i32,
    pub tick: i32,
}

/// Read the pool's current state; never cached across invocations
pub fn read_pool(env: &Env, pool: &Address) -> PoolSnapshot {
    PoolSnapshot {
        address: pool.clone(),
        token0: env.invoke_contract(pool, &Symbol::new(env, "token0"), ().into_val(env)),
        token1: env.invoke_contract(pool, &Symbol::new(env, "token1"), ().into_val(env)),
        fee: env.invoke_contract(pool, &Symbol::new(env, "fee"), ().into_val(env)),
        tick_spacing: env.invoke_contract(pool, &Symbol::new(env, "tick_spacing"), ().into_val(env)),
        tick: env.invoke_contract(pool, &Symbol::new(env, "tick"), ().into_val(env)),
    }
}
