pub mod check_contract;
