use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::errors::RaffleError;

/// Lamports owed to the winner: the whole vault, or nothing for an empty one.
pub fn payout_amount(vault_balance: u64) -> Option<u64> {
    (vault_balance > 0).then_some(vault_balance)
}

/// Moves the whole vault balance to `recipient`, signed with the vault seeds.
/// Returns the amount moved.
pub fn transfer_all<'info>(
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    vault_seeds: &[&[u8]],
) -> Result<u64> {
    let Some(amount) = payout_amount(vault.lamports()) else {
        return Ok(0);
    };

    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.clone(),
            Transfer {
                from: vault.clone(),
                to: recipient.clone(),
            },
            &[vault_seeds],
        ),
        amount,
    )
    .map_err(|e| {
        msg!("Vault transfer of {} lamports failed: {:?}", amount, e);
        error!(RaffleError::TransferFailed)
    })?;

    Ok(amount)
}
