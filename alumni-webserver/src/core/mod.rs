pub use alumni_core::{avatar, comment_tree, repositories};

pub mod entities {
    pub use alumni_core::entities::*;
}

pub mod usecases {
    pub use alumni_core::usecases::*;
}

pub mod prelude {
    pub use super::{entities::*, repositories::*};
}
