pub mod declaration;
pub mod definition;
pub mod printing;
pub mod scope;
pub mod symbol;

pub use declaration::*;
pub use definition::*;
pub use printing::*;
pub use scope::*;
pub use symbol::*;
