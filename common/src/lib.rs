#![no_std]

pub mod checkpoints;
pub mod dao_authorizable;
pub mod dao_proxy;
pub mod fungible;
pub mod fungible_token_proxy;
pub mod permissions;
pub mod token_descriptor;
pub mod token_descriptor_reader;
pub mod types;
