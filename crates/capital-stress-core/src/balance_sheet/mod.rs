pub mod bank;

pub use bank::{stylised_banks, Bank, PortfolioBucket};
