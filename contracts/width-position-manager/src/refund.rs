use range_types::{CustodyReceipt, MintOutcome};
use soroban_sdk::{token, Address, Env};

use crate::custody;

/// Return unconsumed amounts to the owner once the mint has settled
///
/// Returns the refunded `(amount0, amount1)`.
pub fn settle(
    env: &Env,
    receipt: &CustodyReceipt,
    outcome: &MintOutcome,
    spender: &Address,
) -> (i128, i128) {
    custody::release(env, receipt, spender);

    let contract_address = env.current_contract_address();
    let refund0 = receipt.amount0 - outcome.amount0_used;
    let refund1 = receipt.amount1 - outcome.amount1_used;

    if refund0 > 0 {
        token::Client::new(env, &receipt.token0).transfer(&contract_address, &receipt.owner, &refund0);
    }
    if refund1 > 0 {
        token::Client::new(env, &receipt.token1).transfer(&contract_address, &receipt.owner, &refund1);
    }

    (refund0, refund1)
}
