pub mod cancel;
pub mod chime;
pub mod clock;
pub mod palette;
pub mod scene;
pub mod viewport;

pub use cancel::CancelToken;
pub use chime::{ChimeEnvelope, ChimePicker};
pub use clock::SceneClock;
pub use scene::SceneState;
pub use viewport::Viewport;
