//! Ports Layer
//!
//! Defines the capability interface callers program against.

pub mod inbound;

pub use inbound::MembershipFilter;
