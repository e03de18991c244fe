use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::{get_return_data, invoke_signed};
use crate::errors::RaffleError;
use crate::state::{VrfConfig, NUM_WORDS};

/// `sha256("global:request_random_words")[..8]`
pub const REQUEST_RANDOM_WORDS_DISCRIMINATOR: [u8; 8] = [138, 218, 31, 64, 39, 225, 143, 208];

/// Arguments of the coordinator's `request_random_words` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RequestRandomWordsArgs {
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
    pub num_words: u32,
}

impl RequestRandomWordsArgs {
    pub fn from_config(vrf: &VrfConfig) -> Self {
        Self {
            key_hash: vrf.key_hash,
            subscription_id: vrf.subscription_id,
            request_confirmations: vrf.request_confirmations,
            callback_compute_limit: vrf.callback_compute_limit,
            num_words: NUM_WORDS,
        }
    }

    pub fn instruction_data(&self) -> Result<Vec<u8>> {
        let mut data = REQUEST_RANDOM_WORDS_DISCRIMINATOR.to_vec();
        self.serialize(&mut data)
            .map_err(|_| error!(RaffleError::RandomnessRequestFailed))?;
        Ok(data)
    }
}

/// Asks the coordinator for random words on behalf of the raffle PDA.
///
/// Account order expected by the coordinator:
/// 0. consumer (raffle PDA, signer)
/// 1. payer (signer, writable)
/// 2.. whatever the coordinator needs (subscription, request account, ...)
///
/// The coordinator answers with the request id as return data.
pub fn request_random_words<'info>(
    coordinator_program: &AccountInfo<'info>,
    consumer: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    remaining_accounts: &[AccountInfo<'info>],
    args: &RequestRandomWordsArgs,
    consumer_seeds: &[&[u8]],
) -> Result<u64> {
    let mut accounts = vec![
        AccountMeta::new_readonly(consumer.key(), true),
        AccountMeta::new(payer.key(), true),
    ];
    accounts.extend(remaining_accounts.iter().map(|account| {
        if account.is_writable {
            AccountMeta::new(account.key(), account.is_signer)
        } else {
            AccountMeta::new_readonly(account.key(), account.is_signer)
        }
    }));

    let ix = Instruction {
        program_id: coordinator_program.key(),
        accounts,
        data: args.instruction_data()?,
    };

    let mut account_infos = vec![consumer.clone(), payer.clone()];
    account_infos.extend(remaining_accounts.iter().cloned());
    account_infos.push(coordinator_program.clone());

    invoke_signed(&ix, &account_infos, &[consumer_seeds])?;

    decode_request_id(&coordinator_program.key(), get_return_data())
}

/// Return data must come from the coordinator itself and hold a Borsh `u64`.
pub fn decode_request_id(coordinator: &Pubkey, return_data: Option<(Pubkey, Vec<u8>)>) -> Result<u64> {
    let (program_id, data) = return_data.ok_or(RaffleError::RandomnessRequestFailed)?;
    require_keys_eq!(program_id, *coordinator, RaffleError::RandomnessRequestFailed);

    u64::try_from_slice(&data).map_err(|_| error!(RaffleError::RandomnessRequestFailed))
}
