//! Selection handling for notebook-embedded 3D volume and scatter viewers.
//!
//! A selection gesture drawn on the rendering surface is projected into the data through the
//! camera transform, and applied to the data collection as an undoable subset command.

mod camera;
mod command;
mod data;
mod error;
mod gesture;
mod roi;
mod subset;
mod viewer;

pub use camera::*;
pub use command::*;
pub use data::*;
pub use error::*;
pub use gesture::*;
pub use roi::*;
pub use subset::*;
pub use viewer::*;

pub use glam;
