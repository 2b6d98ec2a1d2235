use cosmwasm_std::{coins, BankMsg, DepsMut, Env, MessageInfo, Uint128, Uint256};
use cw_utils::nonpayable;
use sg_std::{Response, NATIVE_DENOM};

use crate::error::ContractError;
use crate::state::{FeeSplit, FEE_SPLIT};

/// Shares of `balance` owed to the first and second beneficiary, each
/// rounded down. The rounding remainder is not assigned to anyone.
pub fn split_balance(balance: Uint128, split: &FeeSplit) -> Result<(Uint128, Uint128), ContractError> {
    if split.denominator == 0 {
        return Err(ContractError::ConfigInvalid {});
    }

    let share = |weight: u64| {
        let share = balance.full_mul(weight) / Uint256::from(split.denominator);
        Uint128::try_from(share).map_err(|_| ContractError::ConfigInvalid {})
    };
    let first = share(split.first_weight)?;
    let second = share(split.second_weight)?;

    let owed = first.checked_add(second)?;
    if owed > balance {
        return Err(ContractError::Overallocated { owed, balance });
    }

    Ok((first, second))
}

/// Pays out the contract balance, first beneficiary first. Anyone may trigger
/// it since funds only ever go to the configured beneficiaries.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let balance = deps
        .querier
        .query_balance(&env.contract.address, NATIVE_DENOM)?
        .amount;
    if balance.is_zero() {
        return Err(ContractError::NoBalance {});
    }

    let fee_split = FEE_SPLIT.load(deps.storage)?;
    let (first_share, second_share) = split_balance(balance, &fee_split)?;

    let mut res = Response::new();
    for (recipient, share) in [
        (&fee_split.first, first_share),
        (&fee_split.second, second_share),
    ] {
        // a zero-amount bank send is rejected by the chain
        if share.is_zero() {
            continue;
        }
        res = res.add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(share.u128(), NATIVE_DENOM),
        });
    }

    Ok(res
        .add_attribute("action", "withdraw")
        .add_attribute("balance", balance)
        .add_attribute("first_share", first_share)
        .add_attribute("second_share", second_share)
        .add_attribute("remainder", balance - first_share - second_share))
}
