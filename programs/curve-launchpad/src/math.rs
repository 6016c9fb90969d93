use crate::constants::BPS_DENOMINATOR;
use crate::error::{LaunchpadError, LaunchpadResult};

pub fn safe_add(a: u64, b: u64) -> LaunchpadResult<u64> {
    a.checked_add(b).ok_or(LaunchpadError::ArithmeticOverflow)
}

pub fn safe_sub(a: u64, b: u64) -> LaunchpadResult<u64> {
    a.checked_sub(b).ok_or(LaunchpadError::ArithmeticOverflow)
}

pub fn safe_mul(a: u64, b: u64) -> LaunchpadResult<u64> {
    a.checked_mul(b).ok_or(LaunchpadError::ArithmeticOverflow)
}

pub fn safe_div(a: u64, b: u64) -> LaunchpadResult<u64> {
    if b == 0 {
        return Err(LaunchpadError::ArithmeticOverflow);
    }
    a.checked_div(b).ok_or(LaunchpadError::ArithmeticOverflow)
}

pub fn calculate_fee(amount: u64, fee_bps: u64) -> LaunchpadResult<u64> {
    let fee = (amount as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(LaunchpadError::ArithmeticOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;

    u64::try_from(fee).map_err(|_| LaunchpadError::ArithmeticOverflow)
}

/// Tokens received for depositing `sol_in` lamports into the curve.
///
/// Constant product over the virtual reserves, truncating division;
/// rounding always favors the pool.
pub fn tokens_for_buy(
    virtual_sol_reserves: u64,
    virtual_token_reserves: u64,
    sol_in: u64,
) -> LaunchpadResult<u64> {
    if virtual_sol_reserves == 0 || virtual_token_reserves == 0 {
        return Err(LaunchpadError::ArithmeticOverflow);
    }

    let new_sol_reserves = (virtual_sol_reserves as u128)
        .checked_add(sol_in as u128)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;
    let tokens_out = (virtual_token_reserves as u128)
        .checked_mul(sol_in as u128)
        .ok_or(LaunchpadError::ArithmeticOverflow)?
        .checked_div(new_sol_reserves)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;

    u64::try_from(tokens_out).map_err(|_| LaunchpadError::ArithmeticOverflow)
}

/// Lamports received for selling `tokens_in` back into the curve.
pub fn sol_for_sell(
    virtual_sol_reserves: u64,
    virtual_token_reserves: u64,
    tokens_in: u64,
) -> LaunchpadResult<u64> {
    if virtual_sol_reserves == 0 || virtual_token_reserves == 0 {
        return Err(LaunchpadError::ArithmeticOverflow);
    }

    let new_token_reserves = (virtual_token_reserves as u128)
        .checked_add(tokens_in as u128)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;
    let sol_out = (virtual_sol_reserves as u128)
        .checked_mul(tokens_in as u128)
        .ok_or(LaunchpadError::ArithmeticOverflow)?
        .checked_div(new_token_reserves)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;

    u64::try_from(sol_out).map_err(|_| LaunchpadError::ArithmeticOverflow)
}
