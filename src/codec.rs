//! Byte layout shared with the host.
//!
//! Input: `[diagonal, width, height, start_row, start_col, end_row, end_col, (row, col)*]`, where
//! every trailing pair is an obstacle. Output: the path as consecutive `(row, col)` pairs.
use fxhash::FxHashSet;

use crate::error::{DecodeError, Error};
use crate::{Cell, GridConfig};

/// Length of the fixed header preceding the obstacle pairs.
pub const MIN_INPUT_LEN: usize = 7;

/// Parses an encoded grid description. Any non-zero diagonal byte enables diagonal moves and
/// repeated obstacle pairs are stored once.
pub fn decode_input(data: &[u8]) -> Result<GridConfig, DecodeError> {
    if data.len() < MIN_INPUT_LEN {
        return Err(DecodeError::TooShort {
            len: data.len(),
            min: MIN_INPUT_LEN,
        });
    }
    if data.len() % 2 != 1 {
        return Err(DecodeError::EvenLength { len: data.len() });
    }
    let obstacles = data[MIN_INPUT_LEN..]
        .chunks_exact(2)
        .map(|pair| Cell::new(pair[0], pair[1]))
        .collect::<FxHashSet<Cell>>();
    Ok(GridConfig {
        width: data[1],
        height: data[2],
        obstacles,
        allow_diagonal: data[0] != 0,
        start: Cell::new(data[3], data[4]),
        end: Cell::new(data[5], data[6]),
    })
}

/// Encodes a grid description the way a host would before calling
/// [find_path](crate::find_path). Obstacles are written in no particular order.
pub fn encode_input(config: &GridConfig) -> Vec<u8> {
    let mut data = Vec::with_capacity(MIN_INPUT_LEN + 2 * config.obstacles.len());
    data.extend([
        config.allow_diagonal as u8,
        config.width,
        config.height,
        config.start.row,
        config.start.col,
        config.end.row,
        config.end.col,
    ]);
    for obstacle in &config.obstacles {
        data.extend([obstacle.row, obstacle.col]);
    }
    data
}

/// Writes `path` into `output` and returns the number of bytes written. Fails without touching
/// `output` if it is too small to hold the whole path.
pub fn encode_path(path: &[Cell], output: &mut [u8]) -> Result<usize, Error> {
    let needed = 2 * path.len();
    if needed > output.len() {
        return Err(Error::OutputTooSmall {
            needed,
            capacity: output.len(),
        });
    }
    for (chunk, cell) in output.chunks_exact_mut(2).zip(path) {
        chunk[0] = cell.row;
        chunk[1] = cell.col;
    }
    Ok(needed)
}

/// Reads a path back from encoded output. A trailing unpaired byte is ignored.
pub fn decode_path(data: &[u8]) -> Vec<Cell> {
    data.chunks_exact(2)
        .map(|pair| Cell::new(pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_header_and_obstacles() {
        let config = decode_input(&[1, 5, 4, 1, 1, 3, 2, 2, 2, 3, 3]).unwrap();
        assert!(config.allow_diagonal);
        assert_eq!(config.width, 5);
        assert_eq!(config.height, 4);
        assert_eq!(config.start, Cell::new(1, 1));
        assert_eq!(config.end, Cell::new(3, 2));
        assert_eq!(config.obstacles.len(), 2);
        assert!(config.is_obstacle(&Cell::new(2, 2)));
        assert!(config.is_obstacle(&Cell::new(3, 3)));
    }

    #[test]
    fn any_nonzero_flag_allows_diagonal() {
        for (flag, expected) in [(0, false), (1, true), (2, true), (255, true)] {
            let config = decode_input(&[flag, 5, 5, 1, 1, 1, 1]).unwrap();
            assert_eq!(config.allow_diagonal, expected);
        }
    }

    #[test]
    fn duplicate_obstacles_collapse() {
        let config = decode_input(&[0, 5, 5, 1, 1, 1, 3, 1, 2, 1, 2]).unwrap();
        assert_eq!(config.obstacles.len(), 1);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            decode_input(&[0, 5, 5, 1, 1, 1]),
            Err(DecodeError::TooShort { len: 6, min: 7 })
        );
        assert_eq!(
            decode_input(&[]),
            Err(DecodeError::TooShort { len: 0, min: 7 })
        );
        assert_eq!(
            decode_input(&[0, 5, 5, 1, 1, 1, 3, 2]),
            Err(DecodeError::EvenLength { len: 8 })
        );
    }

    #[test]
    fn input_round_trip() {
        let config = GridConfig::new(7, 3, Cell::new(0, 6), Cell::new(3, 1))
            .with_diagonal(true)
            .with_obstacles([Cell::new(1, 1), Cell::new(2, 5), Cell::new(0, 0)]);
        let data = encode_input(&config);
        assert_eq!(data.len(), 13);
        assert_eq!(decode_input(&data), Ok(config));
    }

    #[test]
    fn path_encoding() {
        let path = vec![Cell::new(1, 1), Cell::new(2, 2), Cell::new(1, 3)];
        let mut output = [0u8; 8];
        assert_eq!(encode_path(&path, &mut output), Ok(6));
        assert_eq!(output, [1, 1, 2, 2, 1, 3, 0, 0]);
        assert_eq!(decode_path(&output[..6]), path);
        assert_eq!(decode_path(&output[..5]), &path[..2]);
    }

    #[test]
    fn path_too_long_for_output() {
        let path = vec![Cell::new(1, 1), Cell::new(1, 2)];
        let mut output = [9u8; 3];
        assert_eq!(
            encode_path(&path, &mut output),
            Err(Error::OutputTooSmall {
                needed: 4,
                capacity: 3
            })
        );
        assert_eq!(output, [9, 9, 9]);
        assert_eq!(encode_path(&[], &mut output), Ok(0));
    }
}
