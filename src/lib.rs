#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
extern crate dotenv;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
pub mod error;
pub use error::{Error, Result};
pub mod config;
pub use config::Config;
pub mod transport;
pub use transport::{HttpTransport, Response, Transport};
pub mod lights;
pub mod groups;
pub mod bridge;
pub use bridge::{Bridge, DEFAULT_GROUP};
pub mod utils;
pub use utils::{checked_scale, scale};
