pub mod backdrops;
pub mod boot;
pub mod camera;
pub mod constants;
pub mod iso;
pub mod mesh;
pub mod noise;
pub mod projects;
pub mod scene;
pub mod settings;
pub mod shading;
pub mod svg;
pub mod terrain;
pub mod waves;

pub static TERRAIN_WGSL: &str = include_str!("../shaders/terrain.wgsl");
pub static OCEAN_WGSL: &str = include_str!("../shaders/ocean.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use boot::{BootGate, BootPhase, BootSequence, TextScramble};
pub use camera::{Camera, CameraRig, CameraRigConfig};
pub use iso::{Illustration, IsoProjection, PathData, Rgb, Variant};
pub use mesh::{Mesh, MeshVertex, Topology};
pub use crate::noise::{fbm, perlin2, FbmParams};
pub use scene::{FrameInput, SceneConfig, SceneState};
pub use settings::{BootSettings, KeyValueStore, MemoryStore, SceneMode, SceneSettings, StorageError};
pub use terrain::{TerrainMesh, TerrainZone, TerrainZoneConfig};
pub use waves::{WaveParams, WaveSurface};
