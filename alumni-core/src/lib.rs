pub mod avatar;
pub mod comment_tree;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use alumni_entities::{
        comment::*, event::*, forum::*, gallery::*, id::*, job::*, password::*, time::*,
        user::*,
    };
}
