/// Frame-fill orchestration and run configuration
pub mod executor;
/// Random and sequential tile fill orders
pub mod fill;
/// Top-bottom and left-right tile mirroring
pub mod symmetry;
