#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod logic;
pub mod model;

pub use self::erc20::{Erc20, Erc20Ref};
pub use self::model::{zero_address, Approval, Error, Transfer};

#[ink::contract]
mod erc20 {
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    use crate::logic::{check_payment, credit, debit};
    use crate::model::{zero_address, Approval, Error, Result, Transfer};

    /// Fungible token sold for native currency at a fixed per-unit price.
    #[ink(storage)]
    pub struct Erc20 {
        // descriptive, fixed at instantiation
        name: String,
        symbol: String,
        price: Balance,

        // token state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,

        /// Native currency taken in by `mint`, tracked apart from token units.
        custody: Balance,
    }

    fn rejected(op: &str, err: Error) -> Error {
        ink::env::debug_println!("{} rejected: {}", op, err.reason());
        err
    }

    impl Erc20 {
        #[ink(constructor)]
        pub fn new(name: String, symbol: String, price: Balance) -> Self {
            Self {
                name,
                symbol,
                price,
                total_supply: 0,
                balances: Mapping::default(),
                allowances: Mapping::default(),
                custody: 0,
            }
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.symbol.clone()
        }

        /// Native currency required per minted unit.
        #[ink(message)]
        pub fn price(&self) -> Balance {
            self.price
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(&owner_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0)
        }

        /// Total payment accepted by `mint` so far.
        #[ink(message)]
        pub fn custody(&self) -> Balance {
            self.custody
        }

        // -------- ledger --------

        /// Mints `amount_val` to the caller. The attached value must cover
        /// `price * amount_val`; any excess is kept in custody.
        #[ink(message, payable)]
        pub fn mint(&mut self, amount_val: Balance) -> Result<()> {
            let to_acc = self.env().caller();
            let paid_val = self.env().transferred_value();
            self.mint_internal(to_acc, amount_val, paid_val)
                .map_err(|err| rejected("mint", err))
        }

        #[ink(message)]
        pub fn burn(&mut self, amount_val: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            self.burn_internal(from_acc, amount_val)
                .map_err(|err| rejected("burn", err))
        }

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            self.transfer_internal(from_acc, to_acc, amount_val)
                .map_err(|err| rejected("transfer", err))
        }

        // -------- allowances --------

        /// Sets the caller's allowance for `spender_acc` to exactly `amount_val`.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            self.ensure_spender(spender_acc)
                .map_err(|err| rejected("approve", err))?;
            self.set_allowance(owner_acc, spender_acc, amount_val);
            Ok(())
        }

        #[ink(message)]
        pub fn increase_allowance(&mut self, spender_acc: AccountId, add_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            self.increase_internal(owner_acc, spender_acc, add_val)
                .map_err(|err| rejected("increase_allowance", err))
        }

        #[ink(message)]
        pub fn decrease_allowance(&mut self, spender_acc: AccountId, sub_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            self.decrease_internal(owner_acc, spender_acc, sub_val)
                .map_err(|err| rejected("decrease_allowance", err))
        }

        /// Moves `amount_val` from `from_acc` to `to_acc`, spending the
        /// caller's allowance over `from_acc`.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            let spender_acc = self.env().caller();
            self.transfer_from_internal(spender_acc, from_acc, to_acc, amount_val)
                .map_err(|err| rejected("transfer_from", err))
        }

        // ---- internals ----
        //
        // Every *_internal fn computes all new register values first and
        // only then writes and emits, so a returned Err leaves storage as is.

        fn mint_internal(&mut self, to_acc: AccountId, amount_val: Balance, paid_val: Balance) -> Result<()> {
            check_payment(self.price, amount_val, paid_val)?;

            let new_total = credit(self.total_supply, amount_val)?;
            let new_to = credit(self.balance_of(to_acc), amount_val)?;
            let new_custody = credit(self.custody, paid_val)?;

            self.total_supply = new_total;
            self.balances.insert(&to_acc, &new_to);
            self.custody = new_custody;

            self.env().emit_event(Transfer { from: zero_address(), to: to_acc, value: amount_val });
            Ok(())
        }

        fn burn_internal(&mut self, from_acc: AccountId, amount_val: Balance) -> Result<()> {
            let new_from = debit(self.balance_of(from_acc), amount_val, Error::BurnExceedsBalance)?;
            // supply >= any single balance, so this only trips on a broken invariant
            let new_total = debit(self.total_supply, amount_val, Error::Overflow)?;

            self.balances.insert(&from_acc, &new_from);
            self.total_supply = new_total;

            self.env().emit_event(Transfer { from: from_acc, to: zero_address(), value: amount_val });
            Ok(())
        }

        fn transfer_internal(&mut self, from_acc: AccountId, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            if to_acc == zero_address() {
                return Err(Error::TransferToZeroAddress)
            }
            let (new_from, new_to) = self.plan_move(from_acc, to_acc, amount_val)?;
            self.commit_move(from_acc, to_acc, new_from, new_to, amount_val);
            Ok(())
        }

        fn transfer_from_internal(
            &mut self,
            spender_acc: AccountId,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            if from_acc == zero_address() {
                return Err(Error::TransferFromZeroAddress)
            }
            if to_acc == zero_address() {
                return Err(Error::TransferToZeroAddress)
            }

            let new_allow = debit(
                self.allowance(from_acc, spender_acc),
                amount_val,
                Error::InsufficientAllowance,
            )?;
            let (new_from, new_to) = self.plan_move(from_acc, to_acc, amount_val)?;

            self.allowances.insert(&(from_acc, spender_acc), &new_allow);
            self.commit_move(from_acc, to_acc, new_from, new_to, amount_val);
            Ok(())
        }

        fn increase_internal(&mut self, owner_acc: AccountId, spender_acc: AccountId, add_val: Balance) -> Result<()> {
            self.ensure_spender(spender_acc)?;
            let new_val = credit(self.allowance(owner_acc, spender_acc), add_val)?;
            self.set_allowance(owner_acc, spender_acc, new_val);
            Ok(())
        }

        fn decrease_internal(&mut self, owner_acc: AccountId, spender_acc: AccountId, sub_val: Balance) -> Result<()> {
            self.ensure_spender(spender_acc)?;
            let new_val = debit(
                self.allowance(owner_acc, spender_acc),
                sub_val,
                Error::AllowanceUnderflow,
            )?;
            self.set_allowance(owner_acc, spender_acc, new_val);
            Ok(())
        }

        fn ensure_spender(&self, spender_acc: AccountId) -> Result<()> {
            if spender_acc == zero_address() {
                return Err(Error::ApproveToZeroAddress)
            }
            Ok(())
        }

        fn set_allowance(&mut self, owner_acc: AccountId, spender_acc: AccountId, value: Balance) {
            self.allowances.insert(&(owner_acc, spender_acc), &value);
            self.env().emit_event(Approval { owner: owner_acc, spender: spender_acc, value });
        }

        /// Post-move balances of `from_acc` and `to_acc`. For a self-move the
        /// second value is the unchanged balance, written after the first.
        fn plan_move(&self, from_acc: AccountId, to_acc: AccountId, amount_val: Balance) -> Result<(Balance, Balance)> {
            let from_bal = self.balance_of(from_acc);
            let new_from = debit(from_bal, amount_val, Error::InsufficientBalance)?;
            let new_to = if from_acc == to_acc {
                from_bal
            } else {
                credit(self.balance_of(to_acc), amount_val)?
            };
            Ok((new_from, new_to))
        }

        fn commit_move(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            new_from: Balance,
            new_to: Balance,
            amount_val: Balance,
        ) {
            self.balances.insert(&from_acc, &new_from);
            self.balances.insert(&to_acc, &new_to);
            self.env().emit_event(Transfer { from: from_acc, to: to_acc, value: amount_val });
        }
    }


}
