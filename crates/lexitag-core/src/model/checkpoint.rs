//! # Checkpoint Restore
//!
//! Trained weights come either as a PyTorch archive (`best.pth.tar`, with
//! tensors under the `state_dict` key) or as a safetensors file. The loader
//! picks the reader from the file extension.

use std::path::{Path, PathBuf};

use candle_core::pickle::PthTensors;
use candle_core::{DType, Device};
use candle_nn::VarBuilder;
use tracing::{debug, info};

use crate::config::ModelConfig;
use crate::error::{LexitagError, Result};
use crate::model::TaggerNet;

/// Key holding the model tensors inside a PyTorch checkpoint dictionary.
pub const STATE_DICT_KEY: &str = "state_dict";

const PTH_SUFFIX: &str = ".pth.tar";
const SAFETENSORS_SUFFIX: &str = ".safetensors";

/// Resolve the checkpoint file for `restore_file` in a model directory.
///
/// `{restore_file}.safetensors` is used when present, otherwise
/// `{restore_file}.pth.tar`.
pub fn path_for<P: AsRef<Path>>(model_dir: P, restore_file: &str) -> PathBuf {
    let model_dir = model_dir.as_ref();
    let safetensors = model_dir.join(format!("{restore_file}{SAFETENSORS_SUFFIX}"));
    if safetensors.is_file() {
        return safetensors;
    }
    model_dir.join(format!("{restore_file}{PTH_SUFFIX}"))
}

/// Build a network and fill it with the weights stored at `path`.
pub fn restore<P: AsRef<Path>>(path: P, config: &ModelConfig, device: &Device) -> Result<TaggerNet> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LexitagError::CheckpointNotFound {
            path: path.to_path_buf(),
        });
    }

    let vb = if is_safetensors(path) {
        debug!(?path, "reading safetensors checkpoint");
        // SAFETY: the file is not modified while the mapping is alive.
        unsafe { VarBuilder::from_mmaped_safetensors(&[path], DType::F32, device)? }
    } else {
        debug!(?path, key = STATE_DICT_KEY, "reading pytorch checkpoint");
        let tensors = PthTensors::new(path, Some(STATE_DICT_KEY))?;
        VarBuilder::from_backend(Box::new(tensors), DType::F32, device.clone())
    };

    let net = TaggerNet::new(config, vb)?;
    info!(?path, "restored checkpoint");
    Ok(net)
}

fn is_safetensors(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "safetensors")
}
