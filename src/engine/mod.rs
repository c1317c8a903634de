pub mod config;
pub mod error;
pub mod playback;
pub mod scheduler;
pub mod surface;

pub use config::{Config, ContextConfig, TimingConfig};
pub use error::ConfigError;
pub use playback::{PlaybackMode, PlaybackSession};
pub use scheduler::{FrameHandle, FrameQueue, FrameRequest, FrameScheduler, SessionId};
pub use surface::{
    ContextSurface, ContextWindow, ControlsSurface, RateSurface, Surfaces, SurfacesBuilder,
    WordSurface,
};
