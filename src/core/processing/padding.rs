use tracing::info;

/// Center an interleaved RGB8 image on a black square canvas whose side is
/// the longer dimension. Offsets use floor division, so the source always
/// fits entirely inside the canvas. Returns the padded buffer and the side.
pub fn pad_to_square(rgb: &[u8], cols: usize, rows: usize) -> (Vec<u8>, usize) {
    let side = cols.max(rows);
    let pad_cols = (side - cols) / 2;
    let pad_rows = (side - rows) / 2;

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );
    info!("Final dimensions: {}x{}", side, side);

    let mut padded = vec![0u8; side * side * 3];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset = row * cols * 3;
        let dst_offset = ((row + pad_rows) * side + pad_cols) * 3;
        padded[dst_offset..dst_offset + cols * 3]
            .copy_from_slice(&rgb[src_offset..src_offset + cols * 3]);
    }
    (padded, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_centers_vertically() {
        // 4x2 image of solid 9s onto a 4x4 canvas: one black row above and below
        let rgb = vec![9u8; 4 * 2 * 3];
        let (padded, side) = pad_to_square(&rgb, 4, 2);
        assert_eq!(side, 4);
        assert_eq!(padded.len(), 4 * 4 * 3);
        // pad_rows = (4 - 2) / 2 = 1
        assert!(padded[..4 * 3].iter().all(|&b| b == 0));
        assert!(padded[4 * 3..3 * 4 * 3].iter().all(|&b| b == 9));
        assert!(padded[3 * 4 * 3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn odd_difference_floors_the_offset() {
        // 2x5 image: pad_cols = (5 - 2) / 2 = 1, one black column left, two right
        let rgb = vec![7u8; 2 * 5 * 3];
        let (padded, side) = pad_to_square(&rgb, 2, 5);
        assert_eq!(side, 5);
        for row in 0..5 {
            let base = row * 5 * 3;
            assert!(padded[base..base + 3].iter().all(|&b| b == 0));
            assert!(padded[base + 3..base + 9].iter().all(|&b| b == 7));
            assert!(padded[base + 9..base + 15].iter().all(|&b| b == 0));
        }
    }
}
