use ink::primitives::AccountId;

pub type Balance = <ink::env::DefaultEnvironment as ink::env::Environment>::Balance;
pub type Result<T> = core::result::Result<T, Error>;

/// The reserved "no account" identifier. Never holds a balance, never
/// receives a transfer, never appears as a spender.
pub fn zero_address() -> AccountId {
    AccountId::from([0x0; 32])
}

#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    InsufficientPayment,
    TransferToZeroAddress,
    TransferFromZeroAddress,
    ApproveToZeroAddress,
    InsufficientBalance,
    BurnExceedsBalance,
    InsufficientAllowance,
    AllowanceUnderflow,
    Overflow,
}

impl Error {
    /// Revert reason reported to callers. These strings are matched on by
    /// clients and must not change.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::InsufficientPayment => "ERC20: Not enough ethers to mint",
            Error::TransferToZeroAddress => "ERC20: transfer to the zero address",
            Error::TransferFromZeroAddress => "ERC20: transfer from the zero address",
            Error::ApproveToZeroAddress => "ERC20: approve to the zero address",
            Error::InsufficientBalance => "ERC20: transfer amount exceeds balance",
            Error::BurnExceedsBalance => "ERC20: burn amount exceeds balance",
            Error::InsufficientAllowance => "ERC20: insufficient allowance",
            Error::AllowanceUnderflow => "ERC20: decreased allowance below zero",
            Error::Overflow => "ERC20: arithmetic overflow",
        }
    }

    pub fn is_zero_address(&self) -> bool {
        matches!(
            self,
            Error::TransferToZeroAddress
                | Error::TransferFromZeroAddress
                | Error::ApproveToZeroAddress
        )
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Emitted on every balance movement. `from` is the zero address for a
/// mint, `to` is the zero address for a burn.
#[ink::event]
pub struct Transfer {
    #[ink(topic)]
    pub from: AccountId,
    #[ink(topic)]
    pub to: AccountId,
    pub value: Balance,
}

/// Emitted on every allowance change; `value` is the resulting allowance.
#[ink::event]
pub struct Approval {
    #[ink(topic)]
    pub owner: AccountId,
    #[ink(topic)]
    pub spender: AccountId,
    pub value: Balance,
}
