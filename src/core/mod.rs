// Core layer: session/binding cache, invoker, normalizer and response repair.

pub mod binding;
pub mod invoker;
pub mod normalizer;
pub mod repair;
pub mod service;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use binding::Binding;
pub use invoker::Invoker;
pub use service::LogicalService;
pub use session::SessionManager;
