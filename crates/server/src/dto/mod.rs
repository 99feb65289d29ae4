mod suggestion;

pub use suggestion::*;
