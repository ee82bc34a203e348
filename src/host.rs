//! Entry point for hosts that exchange data through flat byte buffers.
use log::{info, warn};

use crate::codec::{decode_input, decode_path, encode_path};
use crate::error::Error;
use crate::{Cell, BUFFER_SIZE};

/// Decodes `input`, searches for a shortest path and writes it to `output` as `(row, col)` byte
/// pairs. Returns the number of bytes written, which is zero if the end is unreachable.
///
/// Malformed input and paths that do not fit `output` are reported as errors, in which case
/// `output` is left untouched.
pub fn find_path(input: &[u8], output: &mut [u8]) -> Result<usize, Error> {
    let config = decode_input(input).map_err(|e| {
        warn!("Rejecting input of {} bytes: {}", input.len(), e);
        e
    })?;
    info!(
        "Decoded {}x{} grid with {} obstacles, searching {} -> {} (diagonal: {})",
        config.width,
        config.height,
        config.obstacles.len(),
        config.start,
        config.end,
        config.allow_diagonal
    );
    let path = config.shortest_path();
    if path.is_empty() {
        info!("{} is not reachable from {}", config.end, config.start);
    }
    encode_path(&path, output)
}

/// Owned input and output buffers of [BUFFER_SIZE] bytes each. A host writes the encoded grid
/// into [input_mut](Self::input_mut), calls [shortest_path](Self::shortest_path) with the number
/// of bytes it wrote and reads the result from [output](Self::output).
#[derive(Clone)]
pub struct PathBuffers {
    input: Box<[u8; BUFFER_SIZE]>,
    output: Box<[u8; BUFFER_SIZE]>,
}

impl Default for PathBuffers {
    fn default() -> PathBuffers {
        PathBuffers::new()
    }
}

impl PathBuffers {
    pub fn new() -> PathBuffers {
        PathBuffers {
            input: Box::new([0; BUFFER_SIZE]),
            output: Box::new([0; BUFFER_SIZE]),
        }
    }
    pub fn input_mut(&mut self) -> &mut [u8] {
        &mut self.input[..]
    }
    pub fn output(&self) -> &[u8] {
        &self.output[..]
    }
    /// Copies `data` to the start of the input buffer and returns its length.
    pub fn load_input(&mut self, data: &[u8]) -> Result<usize, Error> {
        let target = self
            .input
            .get_mut(..data.len())
            .ok_or(Error::InputTooLarge {
                len: data.len(),
                capacity: BUFFER_SIZE,
            })?;
        target.copy_from_slice(data);
        Ok(data.len())
    }
    /// Runs [find_path] on the first `len` bytes of the input buffer.
    pub fn shortest_path(&mut self, len: usize) -> Result<usize, Error> {
        let input = self.input.get(..len).ok_or(Error::InputTooLarge {
            len,
            capacity: BUFFER_SIZE,
        })?;
        find_path(input, &mut self.output[..])
    }
    /// Decodes the first `len` bytes of the output buffer into cells.
    pub fn read_path(&self, len: usize) -> Vec<Cell> {
        decode_path(&self.output[..len.min(BUFFER_SIZE)])
    }
}
