pub mod conditions;
pub mod decision;
pub mod estimate;
pub mod weather;

pub use conditions::*;
pub use decision::*;
pub use estimate::*;
pub use weather::*;
