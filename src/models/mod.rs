pub mod balance;
pub mod gas;
pub mod quote;

pub use balance::WalletBalance;
pub use gas::GasEstimate;
pub use quote::Quote;
