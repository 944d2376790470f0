use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_lang::Lamports;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};
use crate::error::*;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(token_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(token_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Close token account with PDA authority for both SPL Token and Token 2022
pub fn close_token_account_with_pda<'a>(
    token_account: AccountInfo<'a>,
    destination: AccountInfo<'a>,
    authority: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if token_account.get_lamports() == 0 {
        return Ok(());
    }

    let close_accounts = CloseAccount {
        account: token_account,
        destination,
        authority,
    };

    close_account(CpiContext::new_with_signer(
        token_program,
        close_accounts,
        signer_seeds,
    ))
}

/// Move lamports from a user wallet into a program account
pub fn deposit_lamports<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(system_program, system_program::Transfer { from, to }),
        amount,
    )
}

/// Move lamports out of an account owned by this program
pub fn release_lamports<'a>(from: &AccountInfo<'a>, to: &AccountInfo<'a>, amount: u64) -> Result<()> {
    from.sub_lamports(amount)?;
    to.add_lamports(amount)?;
    Ok(())
}

/// Lamports held by a program account above its rent exemption minimum
pub fn spendable_lamports(account: &AccountInfo) -> Result<u64> {
    let minimum = Rent::get()?.minimum_balance(account.data_len());
    Ok(account.lamports().saturating_sub(minimum))
}

/// Require that a deposit raised an escrow balance by exactly `expected`
///
/// Balances held before the deposit (a pre-funded PDA) never count as escrow.
pub fn ensure_deposit_delta(before: u64, after: u64, expected: u64) -> Result<()> {
    let received = after
        .checked_sub(before)
        .ok_or(RedPacketError::InvalidAmount)?;
    require!(received == expected, RedPacketError::InvalidAmount);
    Ok(())
}

/// Optional token accounts of an instruction, checked for one transfer
pub struct TokenTransfer<'info> {
    pub from: AccountInfo<'info>,
    pub to: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub decimals: u8,
    /// Balance of the source account when resolved
    pub available: u64,
}

impl<'info> TokenTransfer<'info> {
    /**
     * Resolve and validate the token accounts of a transfer
     *
     * - every account must be present (MissingTokenAccounts)
     * - mint and both token accounts must match `expected_mint` (TokenMintMismatch)
     * - `from` must be owned by `from_authority` (InvalidVault)
     * - `to` must be owned by `to_owner` (InvalidRecipient)
     */
    pub fn resolve(
        from: &Option<InterfaceAccount<'info, TokenAccount>>,
        to: &Option<InterfaceAccount<'info, TokenAccount>>,
        mint: &Option<InterfaceAccount<'info, Mint>>,
        token_program: &Option<Interface<'info, TokenInterface>>,
        expected_mint: &Pubkey,
        from_authority: &Pubkey,
        to_owner: &Pubkey,
    ) -> Result<Self> {
        let (Some(from), Some(to), Some(mint), Some(token_program)) =
            (from, to, mint, token_program)
        else {
            return err!(RedPacketError::MissingTokenAccounts);
        };

        require_keys_eq!(mint.key(), *expected_mint, RedPacketError::TokenMintMismatch);
        require_keys_eq!(from.mint, *expected_mint, RedPacketError::TokenMintMismatch);
        require_keys_eq!(to.mint, *expected_mint, RedPacketError::TokenMintMismatch);
        require_keys_eq!(from.owner, *from_authority, RedPacketError::InvalidVault);
        require_keys_eq!(to.owner, *to_owner, RedPacketError::InvalidRecipient);

        Ok(Self {
            from: from.to_account_info(),
            to: to.to_account_info(),
            mint: mint.to_account_info(),
            token_program: token_program.to_account_info(),
            decimals: mint.decimals,
            available: from.amount,
        })
    }

    pub fn transfer(
        &self,
        authority: AccountInfo<'info>,
        amount: u64,
        signer_seeds: Option<&[&[&[u8]]]>,
    ) -> Result<()> {
        transfer_token(
            authority,
            self.from.clone(),
            self.to.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            signer_seeds,
        )
    }
}
