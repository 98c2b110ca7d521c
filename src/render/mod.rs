pub(crate) mod border;
pub(crate) mod cpu;
pub(crate) mod downsample;
pub(crate) mod raster;
pub(crate) mod session;
pub(crate) mod surface;

#[cfg(test)]
#[path = "../../tests/unit/render/recorder.rs"]
pub(crate) mod recorder;
