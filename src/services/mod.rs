// Service module exports

pub mod agenda;
pub mod browser;
pub mod feed;
pub mod settings;
