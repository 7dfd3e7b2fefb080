pub mod client;
mod error;
pub mod notification;
pub mod payment;
pub mod report;
pub mod student;
pub mod teacher;
pub mod token;

pub use client::{
    Builder,
    Client,
};
