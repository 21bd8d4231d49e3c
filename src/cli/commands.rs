pub mod inspect;
pub mod serve;

pub use inspect::inspect;
pub use serve::serve;
