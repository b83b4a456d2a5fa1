// Domain-layer modules and shared errors/models
pub mod scoring {
    pub use crate::scoring::*;
}

pub mod validators {
    pub use crate::validators::*;
}

pub mod copy_builder {
    pub use crate::copy_builder::*;
}

pub mod directories {
    pub use crate::agencies::*;
    pub use crate::zones::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}
