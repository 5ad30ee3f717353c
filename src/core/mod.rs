pub mod error;
pub mod keys;
pub mod konami;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod sections;
pub mod sound;
pub mod teardown;
pub mod throttle;

pub use error::*;
pub use keys::*;
pub use konami::*;
pub use nav::*;
pub use particles::*;
pub use reveal::*;
pub use sections::*;
pub use sound::*;
pub use teardown::*;
pub use throttle::*;
