use range_types::{CustodyReceipt, RangeError};
use soroban_sdk::{log, token, Address, Env};

use crate::pool::PoolSnapshot;

fn preflight(env: &Env, token: &Address, owner: &Address, amount: i128) -> Result<(), RangeError> {
    let client = token::Client::new(env, token);

    let balance = client.balance(owner);
    if balance < amount {
        log!(env, "custody: balance below amount", token.clone(), balance, amount);
        return Err(RangeError::InsufficientFunds);
    }

    let allowance = client.allowance(owner, &env.current_contract_address());
    if allowance < amount {
        log!(env, "custody: allowance below amount", token.clone(), allowance, amount);
        return Err(RangeError::InsufficientAllowance);
    }

    Ok(())
}

/// Pull both amounts from `owner` into this contract
///
/// Both tokens are checked before either is moved.
pub fn acquire(
    env: &Env,
    owner: &Address,
    pool: &PoolSnapshot,
    amount0: i128,
    amount1: i128,
) -> Result<CustodyReceipt, RangeError> {
    preflight(env, &pool.token0, owner, amount0)?;
    preflight(env, &pool.token1, owner, amount1)?;

    let contract_address = env.current_contract_address();
    token::Client::new(env, &pool.token0).transfer_from(
        &contract_address,
        owner,
        &contract_address,
        &amount0,
    );
    token::Client::new(env, &pool.token1).transfer_from(
        &contract_address,
        owner,
        &contract_address,
        &amount1,
    );

    Ok(CustodyReceipt {
        owner: owner.clone(),
        token0: pool.token0.clone(),
        token1: pool.token1.clone(),
        amount0,
        amount1,
    })
}

fn approve_both(env: &Env, receipt: &CustodyReceipt, spender: &Address, amount0: i128, amount1: i128) {
    let contract_address = env.current_contract_address();
    // Allowances expire with the current ledger
    let expiration_ledger = env.ledger().sequence();

    token::Client::new(env, &receipt.token0).approve(
        &contract_address,
        spender,
        &amount0,
        &expiration_ledger,
    );
    token::Client::new(env, &receipt.token1).approve(
        &contract_address,
        spender,
        &amount1,
        &expiration_ledger,
    );
}

/// Let `spender` draw exactly the held amounts
pub fn authorize(env: &Env, receipt: &CustodyReceipt, spender: &Address) {
    approve_both(env, receipt, spender, receipt.amount0, receipt.amount1);
}

/// Drop whatever allowance `spender` has left
pub fn release(env: &Env, receipt: &CustodyReceipt, spender: &Address) {
    approve_both(env, receipt, spender, 0, 0);
}
