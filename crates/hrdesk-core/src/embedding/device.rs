use candle_core::Device;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

/// Selects the compute device based on enabled features, falling back to
/// CPU when no GPU backend is compiled in or available.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(device) => {
                info!("Using Metal GPU acceleration");
                return device;
            }
            Err(e) => warn!(error = %e, "Metal device unavailable"),
        }
    }

    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(device) => {
                info!("Using CUDA GPU acceleration");
                return device;
            }
            Err(e) => warn!(error = %e, "CUDA device unavailable"),
        }
    }

    #[cfg(any(feature = "metal", feature = "cuda"))]
    warn!("No GPU device available, falling back to CPU");

    Device::Cpu
}
