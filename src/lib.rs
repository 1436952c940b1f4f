pub(crate) mod agent;
pub(crate) mod error;
pub mod game;
pub(crate) mod serve;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        error::{Error, Kind, Result},
        game::*,
        serve::{ServeOptions, Server},
    };
}
