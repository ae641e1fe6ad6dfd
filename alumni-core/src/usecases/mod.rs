mod authorize;
mod comments;
mod dashboard;
mod error;
mod events;
mod gallery;
mod jobs;
mod login;
mod members;
mod profiles;
mod register;
mod topics;


pub use self::{
    authorize::*, comments::*, dashboard::*, error::Error, events::*, gallery::*, jobs::*,
    login::*, members::*, profiles::*, register::*, topics::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
